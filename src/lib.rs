//! Rotor substitution cipher machine.
//!
//! A chain of rotating permutation stages, a fixed involutive reflector and a
//! plugboard, composed into a single reversible character transform. The
//! machine steps its rotors before every letter, so encrypting and decrypting
//! are the same operation started from the same rotor positions.
//!
//! # Architecture
//!
//! ```text
//! Rotor          (wiring + inverse + notch + position)
//!     ↕ N rotors in signal-entry order
//! CipherMachine  (stepping + plugboard → rotors → reflector → rotors → plugboard)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use rotorcrypt::{CipherMachine, Plugboard, Reflector, Rotor};
//!
//! let mut machine = CipherMachine::new(
//!     vec![
//!         Rotor::from_catalog("III").unwrap(),
//!         Rotor::from_catalog("II").unwrap(),
//!         Rotor::from_catalog("I").unwrap(),
//!     ],
//!     Reflector::from_catalog("B").unwrap(),
//!     Plugboard::identity(),
//! )
//! .unwrap();
//!
//! let ciphertext = machine.encrypt("AAAAA");
//! assert_eq!(ciphertext, "BDZGO");
//!
//! machine.reset();
//! assert_eq!(machine.encrypt(&ciphertext), "AAAAA");
//! ```
//!
//! Build a machine from a TOML configuration:
//!
//! ```
//! use rotorcrypt::MachineConfig;
//!
//! let config = MachineConfig::from_toml_str(
//!     r#"
//!     reflector = "B"
//!     plugboard = "AB"
//!
//!     [[rotors]]
//!     name = "III"
//!     [[rotors]]
//!     name = "II"
//!     [[rotors]]
//!     name = "I"
//!     "#,
//! )
//! .unwrap();
//!
//! let mut machine = config.build().unwrap();
//! let ciphertext = machine.encrypt("HELLOWORLD");
//! assert_eq!(machine.decrypt(&ciphertext), "HELLOWORLD");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod catalog;
pub mod config;
pub mod error;

mod machine;
mod plugboard;
mod reflector;
mod rotor;

pub use config::{MachineConfig, Position, RotorConfig};
pub use error::ConfigurationError;
pub use machine::{CipherMachine, StepMode};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
