//! Plugboard: letter pairs swapped before and after the rotor pipeline.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::ConfigurationError;

/// A partial involution over the alphabet.
///
/// Stored as a full table where unplugged letters map to themselves, so
/// [`swap`](Self::swap) is a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    map: [u8; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// A plugboard with no cables.
    pub fn identity() -> Self {
        let mut map = [0u8; ALPHABET_LEN];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard { map }
    }

    /// Builds a plugboard from letter pairs, each pair swapped both ways.
    ///
    /// # Errors
    /// - [`ConfigurationError::InvalidLetter`] for a non-letter.
    /// - [`ConfigurationError::PlugSelfPair`] for a pair like `('A', 'A')`.
    /// - [`ConfigurationError::PlugLetterReused`] if a letter is in two pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Plugboard;
    ///
    /// let board = Plugboard::from_pairs([('A', 'B'), ('c', 'd')]).unwrap();
    /// assert_eq!(board.swap(0), 1);
    /// assert_eq!(board.swap(3), 2);
    /// assert_eq!(board.swap(4), 4);
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut board = Self::identity();
        for (a, b) in pairs {
            let x = alphabet::require_letter(a)?;
            let y = alphabet::require_letter(b)?;
            if x == y {
                return Err(ConfigurationError::PlugSelfPair {
                    letter: alphabet::index_letter(x),
                });
            }
            for letter in [x, y] {
                if board.map[letter as usize] != letter {
                    return Err(ConfigurationError::PlugLetterReused {
                        letter: alphabet::index_letter(letter),
                    });
                }
            }
            board.map[x as usize] = y;
            board.map[y as usize] = x;
        }
        Ok(board)
    }

    /// Builds a plugboard from an explicit letter mapping.
    ///
    /// Every entry `a -> b` must be matched by `b -> a`. Entries mapping a
    /// letter to itself are ignored.
    ///
    /// # Errors
    /// [`ConfigurationError::NotAnInvolution`] if some `a -> b` has no
    /// `b -> a`, or [`ConfigurationError::InvalidLetter`] for a non-letter.
    pub fn from_mapping(mapping: &BTreeMap<char, char>) -> Result<Self, ConfigurationError> {
        let mut board = Self::identity();
        for (&from, &to) in mapping {
            let x = alphabet::require_letter(from)?;
            let y = alphabet::require_letter(to)?;
            board.map[x as usize] = y;
        }
        for x in 0..ALPHABET_LEN as u8 {
            let y = board.map[x as usize];
            if board.map[y as usize] != x {
                return Err(ConfigurationError::NotAnInvolution {
                    from: alphabet::index_letter(x),
                    to: alphabet::index_letter(y),
                });
            }
        }
        Ok(board)
    }

    /// Swaps an alphabet index if it is plugged, otherwise returns it unchanged.
    pub fn swap(&self, c: u8) -> u8 {
        self.map[(c as usize) % ALPHABET_LEN]
    }

    /// Plugged pairs in alphabetical order of their first letter.
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.map
            .iter()
            .enumerate()
            .filter(|&(i, &target)| i < target as usize)
            .map(|(i, &target)| {
                (
                    alphabet::index_letter(i as u8),
                    alphabet::index_letter(target),
                )
            })
            .collect()
    }
}

impl FromStr for Plugboard {
    type Err = ConfigurationError;

    /// Parses whitespace-separated two-letter pairs such as `"AB CD ef"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();
        for token in s.split_whitespace() {
            let mut chars = token.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => pairs.push((a, b)),
                _ => {
                    return Err(ConfigurationError::MalformedPlugPair {
                        token: token.to_string(),
                    })
                }
            }
        }
        Self::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_passes_everything() {
        let board = Plugboard::identity();
        for c in 0..ALPHABET_LEN as u8 {
            assert_eq!(board.swap(c), c);
        }
        assert!(board.pairs().is_empty());
    }

    #[test]
    fn test_from_pairs_is_involution() {
        let board = Plugboard::from_pairs([('A', 'B'), ('X', 'Q')]).unwrap();
        for c in 0..ALPHABET_LEN as u8 {
            assert_eq!(board.swap(board.swap(c)), c);
        }
        assert_eq!(board.pairs(), vec![('A', 'B'), ('Q', 'X')]);
    }

    #[test]
    fn test_self_pair_rejected() {
        assert!(matches!(
            Plugboard::from_pairs([('A', 'a')]),
            Err(ConfigurationError::PlugSelfPair { letter: 'A' })
        ));
    }

    #[test]
    fn test_reused_letter_rejected() {
        assert!(matches!(
            Plugboard::from_pairs([('A', 'B'), ('B', 'C')]),
            Err(ConfigurationError::PlugLetterReused { letter: 'B' })
        ));
    }

    #[test]
    fn test_non_letter_rejected() {
        assert!(matches!(
            Plugboard::from_pairs([('A', '1')]),
            Err(ConfigurationError::InvalidLetter { ch: '1' })
        ));
    }

    #[test]
    fn test_from_str() {
        let board: Plugboard = "AB  cd\tEF".parse().unwrap();
        assert_eq!(board.pairs(), vec![('A', 'B'), ('C', 'D'), ('E', 'F')]);
        assert_eq!("".parse::<Plugboard>().unwrap(), Plugboard::identity());
    }

    #[test]
    fn test_from_str_malformed() {
        assert!(matches!(
            "AB CDE".parse::<Plugboard>(),
            Err(ConfigurationError::MalformedPlugPair { token }) if token == "CDE"
        ));
        assert!(matches!(
            "A".parse::<Plugboard>(),
            Err(ConfigurationError::MalformedPlugPair { .. })
        ));
    }

    #[test]
    fn test_from_mapping_symmetric() {
        let mapping = BTreeMap::from([('A', 'B'), ('B', 'A'), ('C', 'C')]);
        let board = Plugboard::from_mapping(&mapping).unwrap();
        assert_eq!(board.pairs(), vec![('A', 'B')]);
    }

    #[test]
    fn test_from_mapping_asymmetric() {
        let mapping = BTreeMap::from([('A', 'B')]);
        assert!(matches!(
            Plugboard::from_mapping(&mapping),
            Err(ConfigurationError::NotAnInvolution { from: 'A', to: 'B' })
        ));
    }
}
