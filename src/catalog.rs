//! Registry of historical rotor and reflector wirings.
//!
//! Setup code refers to components by name (`"III"`, `"B"`) instead of
//! repeating wiring literals. All entries are validated on use through the
//! regular [`Rotor`] and [`Reflector`] constructors.

use crate::error::ConfigurationError;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// A named rotor wiring with its notch letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorModel {
    /// Catalog name.
    pub name: &'static str,
    /// Wiring as a 26-letter permutation.
    pub wiring: &'static str,
    /// Notch letter.
    pub notch: char,
}

impl RotorModel {
    /// Builds a rotor at position 0.
    pub fn build(&self) -> Result<Rotor, ConfigurationError> {
        Rotor::new(self.wiring, self.notch)
    }
}

/// A named reflector wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorModel {
    /// Catalog name.
    pub name: &'static str,
    /// Wiring as a 26-letter involution.
    pub wiring: &'static str,
}

impl ReflectorModel {
    /// Builds the reflector.
    pub fn build(&self) -> Result<Reflector, ConfigurationError> {
        Reflector::new(self.wiring)
    }
}

/// Rotors I through V.
pub static ROTORS: [RotorModel; 5] = [
    RotorModel {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notch: 'Q',
    },
    RotorModel {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notch: 'E',
    },
    RotorModel {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notch: 'V',
    },
    RotorModel {
        name: "IV",
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notch: 'J',
    },
    RotorModel {
        name: "V",
        wiring: "VZBRGITYUPSDNHLXAWMKQCFJEO",
        notch: 'Z',
    },
];

/// Reflectors A, B and C.
pub static REFLECTORS: [ReflectorModel; 3] = [
    ReflectorModel {
        name: "A",
        wiring: "EJMZALYXVBWFCRQUONTSPIKHGD",
    },
    ReflectorModel {
        name: "B",
        wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorModel {
        name: "C",
        wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
];

/// Looks up a rotor by name, ignoring ASCII case.
pub fn rotor_model(name: &str) -> Option<&'static RotorModel> {
    ROTORS.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}

/// Looks up a reflector by name, ignoring ASCII case.
pub fn reflector_model(name: &str) -> Option<&'static ReflectorModel> {
    REFLECTORS.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}
