//! Error types for the rotorcrypt library.
//!
//! Only machine assembly can fail. Once a [`CipherMachine`](crate::CipherMachine)
//! exists, encryption is a total function over its validated tables.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while validating or assembling a cipher machine.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A wiring table does not contain exactly 26 letters.
    #[error("wiring must contain exactly 26 letters, got {len}")]
    WiringLength {
        /// Number of characters supplied.
        len: usize,
    },
    /// A character outside `A..Z`/`a..z` appeared where a letter was required.
    #[error("'{ch}' is not a letter of the alphabet")]
    InvalidLetter {
        /// The offending character.
        ch: char,
    },
    /// A wiring table maps two contacts to the same letter.
    #[error("wiring is not a permutation: letter '{letter}' appears more than once")]
    DuplicateLetter {
        /// The repeated letter.
        letter: char,
    },
    /// The notch is not a letter of the alphabet.
    #[error("notch '{ch}' is not a letter of the alphabet")]
    InvalidNotch {
        /// The offending notch character.
        ch: char,
    },
    /// A rotor position is outside `0..26`.
    #[error("rotor position {pos} is outside 0..26")]
    InvalidPosition {
        /// The rejected position.
        pos: usize,
    },
    /// A reflector or plugboard mapping is not its own inverse.
    #[error("mapping is not an involution: '{from}' maps to '{to}' but '{to}' does not map back")]
    NotAnInvolution {
        /// Source letter of the broken pair.
        from: char,
        /// Target letter of the broken pair.
        to: char,
    },
    /// A plugboard letter appears in more than one pair.
    #[error("plugboard letter '{letter}' is used in more than one pair")]
    PlugLetterReused {
        /// The letter used twice.
        letter: char,
    },
    /// A plugboard pair connects a letter to itself.
    #[error("plugboard letter '{letter}' cannot be paired with itself")]
    PlugSelfPair {
        /// The self-paired letter.
        letter: char,
    },
    /// A plugboard pair token is not exactly two letters.
    #[error("plugboard pair '{token}' must be exactly two letters")]
    MalformedPlugPair {
        /// The rejected token.
        token: String,
    },
    /// A machine was assembled without rotors.
    #[error("a cipher machine needs at least one rotor")]
    NoRotors,
    /// The number of supplied positions does not match the number of rotors.
    #[error("expected {expected} rotor positions, got {got}")]
    PositionCountMismatch {
        /// Number of rotors in the machine.
        expected: usize,
        /// Number of positions supplied.
        got: usize,
    },
    /// A catalog lookup found no component with the given name.
    #[error("no catalog component named '{name}'")]
    UnknownComponent {
        /// The requested name.
        name: String,
    },
    /// A rotor configuration entry names both or neither of a catalog rotor and a wiring.
    #[error("rotor entry {index} must set exactly one of `name` or `wiring` (with `notch`)")]
    AmbiguousRotor {
        /// Zero-based index of the entry in entry order.
        index: usize,
    },
    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A configuration document is not valid TOML for a machine.
    #[error("failed to parse machine configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
