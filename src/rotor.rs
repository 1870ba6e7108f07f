//! Rotor: a rotating permutation stage.
//!
//! A rotor is a fixed wiring (a bijection over the alphabet) mounted at a
//! rotational offset. The signal enters at the contact rotated by the current
//! position and leaves normalized back to the unrotated frame.
//!
//! The inverse wiring is precomputed at construction so the backward pass is a
//! single table lookup that always succeeds.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::catalog;
use crate::error::ConfigurationError;

const MODULUS: u8 = ALPHABET_LEN as u8;

/// A single rotor: wiring, its inverse, a notch and the current position.
///
/// `wiring`, `inverse` and `notch` never change after construction. `pos` is
/// set at configuration time and afterwards moves only through
/// [`advance`](Self::advance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
    notch: u8,
    pos: u8,
}

impl Rotor {
    /// Creates a rotor at position 0.
    ///
    /// # Parameters
    /// - `wiring`: 26-letter permutation of the alphabet (either case).
    /// - `notch`: letter at which this rotor drags its left neighbour along.
    ///
    /// # Errors
    /// Any permutation error from [`alphabet::parse_permutation`], or
    /// [`ConfigurationError::InvalidNotch`] if `notch` is not a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Rotor;
    ///
    /// let rotor = Rotor::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", 'V').unwrap();
    /// assert_eq!(rotor.position(), 0);
    /// assert_eq!(rotor.notch(), 21);
    /// ```
    pub fn new(wiring: &str, notch: char) -> Result<Self, ConfigurationError> {
        let wiring = alphabet::parse_permutation(wiring)?;
        let notch = alphabet::letter_index(notch)
            .ok_or(ConfigurationError::InvalidNotch { ch: notch })?;
        Ok(Rotor {
            inverse: alphabet::invert(&wiring),
            wiring,
            notch,
            pos: 0,
        })
    }

    /// Creates a rotor from the historical catalog (`"I"` through `"V"`).
    ///
    /// # Errors
    /// Returns [`ConfigurationError::UnknownComponent`] for an unknown name.
    pub fn from_catalog(name: &str) -> Result<Self, ConfigurationError> {
        catalog::rotor_model(name)
            .ok_or_else(|| ConfigurationError::UnknownComponent {
                name: name.to_string(),
            })?
            .build()
    }

    /// Returns this rotor set to `pos`.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidPosition`] if `pos >= 26`.
    pub fn with_position(mut self, pos: usize) -> Result<Self, ConfigurationError> {
        self.set_position(pos)?;
        Ok(self)
    }

    /// Sets the rotational offset.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidPosition`] if `pos >= 26`.
    pub fn set_position(&mut self, pos: usize) -> Result<(), ConfigurationError> {
        if pos >= ALPHABET_LEN {
            return Err(ConfigurationError::InvalidPosition { pos });
        }
        self.pos = pos as u8;
        Ok(())
    }

    /// Sets the rotational offset from a letter (`A` = 0).
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidLetter`] if `c` is not a letter.
    pub fn set_position_letter(&mut self, c: char) -> Result<(), ConfigurationError> {
        self.pos = alphabet::require_letter(c)?;
        Ok(())
    }

    /// Returns to a previously validated setting.
    pub(crate) fn restore(&mut self, pos: u8) {
        self.pos = pos % MODULUS;
    }

    /// Current rotational offset in `0..26`.
    pub fn position(&self) -> u8 {
        self.pos
    }

    /// Notch offset in `0..26`.
    pub fn notch(&self) -> u8 {
        self.notch
    }

    /// True when the current position sits on the notch.
    pub fn at_notch(&self) -> bool {
        self.pos == self.notch
    }

    /// Forward substitution (entry side towards the reflector).
    ///
    /// `entry = (c + pos) mod 26`, `exit = wiring[entry]`, result is
    /// `(exit - pos) mod 26`.
    pub fn encrypt_forward(&self, c: u8) -> u8 {
        let entry = (c % MODULUS + self.pos) % MODULUS;
        let exit = self.wiring[entry as usize];
        (exit + MODULUS - self.pos) % MODULUS
    }

    /// Backward substitution, the exact inverse of [`encrypt_forward`](Self::encrypt_forward)
    /// at the same position.
    pub fn encrypt_backward(&self, c: u8) -> u8 {
        let adjusted = (c % MODULUS + self.pos) % MODULUS;
        let entry = self.inverse[adjusted as usize];
        (entry + MODULUS - self.pos) % MODULUS
    }

    /// Rotates the rotor by one position, wrapping from 25 to 0.
    pub fn advance(&mut self) {
        self.pos = (self.pos + 1) % MODULUS;
    }
}
