//! Reflector: the fixed involution that turns the signal back through the rotors.

use tracing::warn;

use crate::alphabet::{self, ALPHABET_LEN};
use crate::catalog;
use crate::error::ConfigurationError;

/// A fixed involutive permutation over the alphabet.
///
/// Applying [`reflect`](Self::reflect) twice returns the original index,
/// which is what makes the whole machine self-inverse per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Creates a reflector from a 26-letter wiring.
    ///
    /// A physical reflector has no fixed points. A wiring with fixed points is
    /// still accepted because the transform stays reversible, but a warning
    /// is logged.
    ///
    /// # Errors
    /// Any permutation error from [`alphabet::parse_permutation`], or
    /// [`ConfigurationError::NotAnInvolution`] naming the first pair that
    /// does not map back.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Reflector;
    ///
    /// assert!(Reflector::new("YRUHQSLDPXNGOKMIEBFZCWVJAT").is_ok());
    /// assert!(Reflector::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ").is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self, ConfigurationError> {
        let wiring = alphabet::parse_permutation(wiring)?;
        if let Some((from, to)) = alphabet::first_non_involution(&wiring) {
            return Err(ConfigurationError::NotAnInvolution {
                from: alphabet::index_letter(from),
                to: alphabet::index_letter(to),
            });
        }

        let fixed: String = (0..ALPHABET_LEN as u8)
            .filter(|&i| wiring[i as usize] == i)
            .map(alphabet::index_letter)
            .collect();
        if !fixed.is_empty() {
            warn!(fixed_points = %fixed, "reflector maps letters to themselves");
        }

        Ok(Reflector { wiring })
    }

    /// Creates a reflector from the historical catalog (`"A"`, `"B"`, `"C"`).
    ///
    /// # Errors
    /// Returns [`ConfigurationError::UnknownComponent`] for an unknown name.
    pub fn from_catalog(name: &str) -> Result<Self, ConfigurationError> {
        catalog::reflector_model(name)
            .ok_or_else(|| ConfigurationError::UnknownComponent {
                name: name.to_string(),
            })?
            .build()
    }

    /// Reflects an alphabet index.
    pub fn reflect(&self, c: u8) -> u8 {
        self.wiring[(c as usize) % ALPHABET_LEN]
    }

    /// True if some letter reflects to itself.
    pub fn has_fixed_points(&self) -> bool {
        self.wiring
            .iter()
            .enumerate()
            .any(|(i, &target)| i == target as usize)
    }
}
