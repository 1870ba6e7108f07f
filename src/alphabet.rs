//! Letter/index conversion and permutation parsing.
//!
//! Every table in the machine works on alphabet indices `0..26`. Letters are
//! converted at the edges: wiring strings at configuration time and message
//! characters at encryption time.

use crate::error::ConfigurationError;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns the alphabet index of `c`, accepting either case.
///
/// # Returns
/// `Some(0..26)` for `A..Z`/`a..z`, `None` for anything else.
///
/// # Examples
///
/// ```
/// use rotorcrypt::alphabet::letter_index;
///
/// assert_eq!(letter_index('A'), Some(0));
/// assert_eq!(letter_index('z'), Some(25));
/// assert_eq!(letter_index('!'), None);
/// ```
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Returns the uppercase letter for an alphabet index (reduced mod 26).
pub fn index_letter(index: u8) -> char {
    (b'A' + index % ALPHABET_LEN as u8) as char
}

/// Like [`letter_index`] but reports non-letters as a configuration error.
pub(crate) fn require_letter(c: char) -> Result<u8, ConfigurationError> {
    letter_index(c).ok_or(ConfigurationError::InvalidLetter { ch: c })
}

/// Parses a 26-letter wiring string into an index table.
///
/// Letters may be given in either case. A string of 26 distinct letters is a
/// bijection over the alphabet, so any missing letter shows up as a duplicate.
///
/// # Errors
/// - [`ConfigurationError::WiringLength`] if the string is not 26 characters.
/// - [`ConfigurationError::InvalidLetter`] on a non-letter.
/// - [`ConfigurationError::DuplicateLetter`] on the first repeated letter.
pub fn parse_permutation(wiring: &str) -> Result<[u8; ALPHABET_LEN], ConfigurationError> {
    let len = wiring.chars().count();
    if len != ALPHABET_LEN {
        return Err(ConfigurationError::WiringLength { len });
    }

    let mut table = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    for (slot, c) in table.iter_mut().zip(wiring.chars()) {
        let index = require_letter(c)?;
        if seen[index as usize] {
            return Err(ConfigurationError::DuplicateLetter {
                letter: index_letter(index),
            });
        }
        seen[index as usize] = true;
        *slot = index;
    }
    Ok(table)
}

/// Builds the inverse of a permutation table: `inverse[table[i]] = i`.
pub fn invert(table: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut inverse = [0u8; ALPHABET_LEN];
    for (i, &target) in table.iter().enumerate() {
        inverse[target as usize] = i as u8;
    }
    inverse
}

/// Returns the first index whose image does not map back to it, if any.
pub(crate) fn first_non_involution(table: &[u8; ALPHABET_LEN]) -> Option<(u8, u8)> {
    table
        .iter()
        .enumerate()
        .map(|(i, &target)| (i as u8, target))
        .find(|&(i, target)| table[target as usize] != i)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    #[test]
    fn test_letter_index_both_cases() {
        for (i, c) in IDENTITY.chars().enumerate() {
            assert_eq!(letter_index(c), Some(i as u8));
            assert_eq!(letter_index(c.to_ascii_lowercase()), Some(i as u8));
        }
    }

    #[test]
    fn test_letter_index_rejects_non_letters() {
        for c in [' ', '0', '9', '-', '\n', 'é', 'ß'] {
            assert_eq!(letter_index(c), None, "{:?} should not be a letter", c);
        }
    }

    #[test]
    fn test_index_letter_wraps() {
        assert_eq!(index_letter(0), 'A');
        assert_eq!(index_letter(25), 'Z');
        assert_eq!(index_letter(26), 'A');
    }

    #[test]
    fn test_parse_permutation_identity() {
        let table = parse_permutation(IDENTITY).unwrap();
        let expected: Vec<u8> = (0..26).collect();
        assert_eq!(table.to_vec(), expected);
    }

    #[test]
    fn test_parse_permutation_lowercase() {
        let upper = parse_permutation("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        let lower = parse_permutation("ekmflgdqvzntowyhxuspaibrcj").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_permutation_wrong_length() {
        assert!(matches!(
            parse_permutation("ABC"),
            Err(ConfigurationError::WiringLength { len: 3 })
        ));
        assert!(matches!(
            parse_permutation("ABCDEFGHIJKLMNOPQRSTUVWXYZA"),
            Err(ConfigurationError::WiringLength { len: 27 })
        ));
    }

    #[test]
    fn test_parse_permutation_duplicate() {
        // 'A' twice, 'Z' missing
        assert!(matches!(
            parse_permutation("ABCDEFGHIJKLMNOPQRSTUVWXYA"),
            Err(ConfigurationError::DuplicateLetter { letter: 'A' })
        ));
    }

    #[test]
    fn test_parse_permutation_non_letter() {
        assert!(matches!(
            parse_permutation("ABCDEFGHIJKLMNOPQRSTUVWXY1"),
            Err(ConfigurationError::InvalidLetter { ch: '1' })
        ));
    }

    #[test]
    fn test_invert_roundtrip() {
        let table = parse_permutation("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        let inverse = invert(&table);
        for i in 0..26u8 {
            assert_eq!(inverse[table[i as usize] as usize], i);
            assert_eq!(table[inverse[i as usize] as usize], i);
        }
    }

    #[test]
    fn test_first_non_involution() {
        let reflector = parse_permutation("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
        assert_eq!(first_non_involution(&reflector), None);

        let rotor = parse_permutation("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        // A -> E, but E -> L
        assert_eq!(first_non_involution(&rotor), Some((0, 4)));
    }
}
