//! Machine configuration loaded from TOML.
//!
//! ```toml
//! reflector = "B"
//! plugboard = "AB CD"
//! step_mode = "pairwise"
//!
//! # entry order: rightmost rotor first
//! [[rotors]]
//! name = "III"
//! position = "A"
//!
//! [[rotors]]
//! wiring = "AJDKSIRUXBLHWTMCQGZNPYFVOE"
//! notch = "E"
//! position = 4
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::alphabet::ALPHABET_LEN;
use crate::error::ConfigurationError;
use crate::machine::{CipherMachine, StepMode};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Initial rotor setting, either a numeric offset or a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Position {
    /// Offset in `0..26`.
    Offset(u8),
    /// Letter, `A` = 0.
    Letter(char),
}

impl Default for Position {
    fn default() -> Self {
        Position::Offset(0)
    }
}

/// One rotor slot: a catalog name or an explicit wiring with its notch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotorConfig {
    /// Catalog rotor name (`"I"` to `"V"`).
    pub name: Option<String>,
    /// Explicit 26-letter wiring.
    pub wiring: Option<String>,
    /// Notch letter for an explicit wiring.
    pub notch: Option<char>,
    /// Initial setting.
    #[serde(default)]
    pub position: Position,
}

impl RotorConfig {
    fn build(&self, index: usize) -> Result<Rotor, ConfigurationError> {
        let mut rotor = match (&self.name, &self.wiring, self.notch) {
            (Some(name), None, None) => Rotor::from_catalog(name)?,
            (None, Some(wiring), Some(notch)) => Rotor::new(wiring, notch)?,
            _ => return Err(ConfigurationError::AmbiguousRotor { index }),
        };
        match self.position {
            Position::Offset(pos) => rotor.set_position(usize::from(pos))?,
            Position::Letter(c) => rotor.set_position_letter(c)?,
        }
        Ok(rotor)
    }
}

/// Complete description of a machine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    /// Rotors in signal-entry order.
    pub rotors: Vec<RotorConfig>,
    /// Catalog reflector name or a 26-letter wiring.
    pub reflector: String,
    /// Whitespace-separated plug pairs.
    #[serde(default)]
    pub plugboard: String,
    /// Stepping mode.
    #[serde(default)]
    pub step_mode: StepMode,
}

impl MachineConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::Parse`] for invalid TOML or unknown fields.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigurationError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    /// [`ConfigurationError::Read`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading machine configuration");
        let contents = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validates the configuration and assembles the machine.
    ///
    /// # Errors
    /// Any [`ConfigurationError`] raised by the components, plus
    /// [`ConfigurationError::AmbiguousRotor`] for a rotor entry that does not
    /// name exactly one source.
    pub fn build(&self) -> Result<CipherMachine, ConfigurationError> {
        let rotors = self
            .rotors
            .iter()
            .enumerate()
            .map(|(index, rotor)| rotor.build(index))
            .collect::<Result<Vec<_>, _>>()?;

        let reflector = if self.reflector.chars().count() == ALPHABET_LEN {
            Reflector::new(&self.reflector)?
        } else {
            Reflector::from_catalog(&self.reflector)?
        };

        let plugboard: Plugboard = self.plugboard.parse()?;
        Ok(CipherMachine::new(rotors, reflector, plugboard)?.with_step_mode(self.step_mode))
    }
}
