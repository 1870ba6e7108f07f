//! CipherMachine: rotor stepping and the double-pass substitution pipeline.
//!
//! Per letter the machine steps its rotors, then runs
//! plugboard → rotors (entry to reflector) → reflector → rotors (back to entry) → plugboard.
//! Because the reflector is an involution and each backward pass inverts the
//! matching forward pass, encrypting with the same starting positions twice
//! restores the plaintext.

use serde::Deserialize;
use tracing::{debug, trace};

use crate::alphabet;
use crate::error::ConfigurationError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Number of stepping pawls on a historical machine.
const HISTORICAL_PAWLS: usize = 3;

/// How notch cascades are evaluated when the machine steps.
///
/// Both modes decide every advancement from the positions before the step
/// and then apply all of them at once. They only differ on machines with
/// more than three rotors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// The entry rotor always advances, and for every adjacent pair
    /// `(i, i + 1)` with `i` at its notch both rotors advance.
    #[default]
    Pairwise,
    /// The pairwise rule driven by three pawls only: the first three rotors
    /// step as on a three-rotor machine and any further rotors never move.
    Historical,
}

impl StepMode {
    /// Number of adjacent pairs whose notch is checked on a machine with
    /// `rotors` rotors.
    fn notch_pairs(self, rotors: usize) -> usize {
        let pairs = rotors.saturating_sub(1);
        match self {
            StepMode::Pairwise => pairs,
            StepMode::Historical => pairs.min(HISTORICAL_PAWLS - 1),
        }
    }
}

/// Rotor cipher machine.
///
/// Rotors are stored in signal-entry order: index 0 is the rightmost
/// physical rotor and the one that steps on every letter. The only state
/// that changes while encrypting is each rotor's position.
///
/// # Examples
///
/// ```
/// use rotorcrypt::{CipherMachine, Plugboard, Reflector, Rotor};
///
/// let mut machine = CipherMachine::new(
///     vec![
///         Rotor::from_catalog("III").unwrap(),
///         Rotor::from_catalog("II").unwrap(),
///         Rotor::from_catalog("I").unwrap(),
///     ],
///     Reflector::from_catalog("B").unwrap(),
///     "AB".parse::<Plugboard>().unwrap(),
/// )
/// .unwrap();
///
/// let ciphertext = machine.encrypt("Attack at dawn!");
/// assert_eq!(ciphertext.len(), "Attack at dawn!".len());
///
/// assert_eq!(machine.decrypt(&ciphertext), "ATTACK AT DAWN!");
/// ```
#[derive(Debug, Clone)]
pub struct CipherMachine {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
    initial_positions: Vec<u8>,
    step_mode: StepMode,
}

impl CipherMachine {
    /// Assembles a machine. The rotors' current positions become the
    /// initial setting restored by [`reset`](Self::reset).
    ///
    /// # Parameters
    /// - `rotors`: rotors in signal-entry order (rightmost first).
    /// - `reflector`: the reflector.
    /// - `plugboard`: the plugboard, [`Plugboard::identity`] for none.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::NoRotors`] if `rotors` is empty.
    pub fn new(
        rotors: Vec<Rotor>,
        reflector: Reflector,
        plugboard: Plugboard,
    ) -> Result<Self, ConfigurationError> {
        if rotors.is_empty() {
            return Err(ConfigurationError::NoRotors);
        }
        let initial_positions: Vec<u8> = rotors.iter().map(Rotor::position).collect();
        debug!(
            rotors = rotors.len(),
            positions = ?initial_positions,
            plugs = plugboard.pairs().len(),
            "cipher machine assembled"
        );
        Ok(CipherMachine {
            rotors,
            reflector,
            plugboard,
            initial_positions,
            step_mode: StepMode::default(),
        })
    }

    /// Returns this machine with the given stepping mode.
    pub fn with_step_mode(mut self, step_mode: StepMode) -> Self {
        debug!(?step_mode, "step mode selected");
        self.step_mode = step_mode;
        self
    }

    /// The active stepping mode.
    pub fn step_mode(&self) -> StepMode {
        self.step_mode
    }

    /// Number of rotors.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// The rotors in signal-entry order.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Current rotor positions in signal-entry order.
    pub fn positions(&self) -> Vec<u8> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Sets every rotor position and makes it the new initial setting.
    ///
    /// Nothing changes if any position is rejected.
    ///
    /// # Errors
    /// - [`ConfigurationError::PositionCountMismatch`] if `positions.len()`
    ///   differs from the rotor count.
    /// - [`ConfigurationError::InvalidPosition`] for a position `>= 26`.
    pub fn set_positions(&mut self, positions: &[u8]) -> Result<(), ConfigurationError> {
        if positions.len() != self.rotors.len() {
            return Err(ConfigurationError::PositionCountMismatch {
                expected: self.rotors.len(),
                got: positions.len(),
            });
        }
        let mut rotors = self.rotors.clone();
        for (rotor, &pos) in rotors.iter_mut().zip(positions) {
            rotor.set_position(usize::from(pos))?;
        }
        self.rotors = rotors;
        self.initial_positions = positions.to_vec();
        Ok(())
    }

    /// Returns every rotor to the initial setting.
    pub fn reset(&mut self) {
        for (rotor, &pos) in self.rotors.iter_mut().zip(&self.initial_positions) {
            rotor.restore(pos);
        }
        debug!(positions = ?self.initial_positions, "rotors reset");
    }

    /// Encrypts a message.
    ///
    /// Letters of either case are upper-cased and encrypted, stepping the
    /// rotors once each. Every other character is copied unchanged and does
    /// not step the rotors.
    pub fn encrypt(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encrypt_char(c)).collect()
    }

    /// Resets to the initial setting, then encrypts `text`.
    ///
    /// With the same initial setting this inverts [`encrypt`](Self::encrypt).
    pub fn decrypt(&mut self, text: &str) -> String {
        self.reset();
        self.encrypt(text)
    }

    /// Encrypts a single character with the same rules as [`encrypt`](Self::encrypt).
    pub fn encrypt_char(&mut self, c: char) -> char {
        match alphabet::letter_index(c) {
            Some(index) => alphabet::index_letter(self.encrypt_index(index)),
            None => c,
        }
    }

    /// Steps the rotors, then runs one alphabet index through the pipeline.
    fn encrypt_index(&mut self, c: u8) -> u8 {
        self.step();

        let mut c = self.plugboard.swap(c);
        for rotor in &self.rotors {
            c = rotor.encrypt_forward(c);
        }
        c = self.reflector.reflect(c);
        for rotor in self.rotors.iter().rev() {
            c = rotor.encrypt_backward(c);
        }
        self.plugboard.swap(c)
    }

    /// Advances the rotors for one letter.
    ///
    /// Rotor `i` only depends on rotors `i - 1` and `i`, so walking from the
    /// last rotor down to the first makes every decision see pre-step
    /// positions.
    fn step(&mut self) {
        let pairs = self.step_mode.notch_pairs(self.rotors.len());
        for i in (0..self.rotors.len()).rev() {
            let drags_self = i < pairs && self.rotors[i].at_notch();
            let dragged = i > 0 && i - 1 < pairs && self.rotors[i - 1].at_notch();
            if i == 0 || drags_self || dragged {
                self.rotors[i].advance();
            }
        }
        trace!(positions = ?self.positions(), "rotors stepped");
    }
}
