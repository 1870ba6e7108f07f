//! Machines assembled from TOML configuration files.

use std::io::Write;

use rotorcrypt::{ConfigurationError, MachineConfig, StepMode};

const THREE_ROTORS: &str = r#"
reflector = "B"
plugboard = "AB"

[[rotors]]
name = "III"

[[rotors]]
name = "II"

[[rotors]]
name = "I"
"#;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_and_encrypt() {
    let file = write_config(THREE_ROTORS);
    let mut machine = MachineConfig::load(file.path()).unwrap().build().unwrap();

    assert_eq!(machine.encrypt("HELLOWORLD"), "ILADBBMTBZ");
    assert_eq!(machine.decrypt("ILADBBMTBZ"), "HELLOWORLD");
}

#[test]
fn explicit_wirings_match_catalog_names() {
    let explicit = r#"
reflector = "YRUHQSLDPXNGOKMIEBFZCWVJAT"
plugboard = "AB"
step_mode = "pairwise"

[[rotors]]
wiring = "BDFHJLCPRTXVZNYEIWGAKMUSQO"
notch = "V"
position = "A"

[[rotors]]
wiring = "AJDKSIRUXBLHWTMCQGZNPYFVOE"
notch = "E"
position = 0

[[rotors]]
wiring = "EKMFLGDQVZNTOWYHXUSPAIBRCJ"
notch = "Q"
"#;
    let mut by_name = MachineConfig::from_toml_str(THREE_ROTORS)
        .unwrap()
        .build()
        .unwrap();
    let mut by_wiring = MachineConfig::from_toml_str(explicit)
        .unwrap()
        .build()
        .unwrap();

    let text = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
    assert_eq!(by_name.encrypt(text), by_wiring.encrypt(text));
}

#[test]
fn historical_step_mode() {
    let config = MachineConfig::from_toml_str(
        r#"
reflector = "C"
step_mode = "historical"

[[rotors]]
name = "V"
[[rotors]]
name = "IV"
[[rotors]]
name = "III"
[[rotors]]
name = "II"
position = "D"
"#,
    )
    .unwrap();
    let mut machine = config.build().unwrap();
    assert_eq!(machine.step_mode(), StepMode::Historical);
    assert_eq!(machine.rotor_count(), 4);

    machine.encrypt(&"X".repeat(2000));
    // The fourth rotor has no pawl
    assert_eq!(machine.positions()[3], 3);
}

#[test]
fn invalid_components_are_reported() {
    let bad_reflector = r#"
reflector = "EKMFLGDQVZNTOWYHXUSPAIBRCJ"
[[rotors]]
name = "I"
"#;
    assert!(matches!(
        MachineConfig::from_toml_str(bad_reflector).unwrap().build(),
        Err(ConfigurationError::NotAnInvolution { .. })
    ));

    let unknown_rotor = r#"
reflector = "B"
[[rotors]]
name = "VIII"
"#;
    assert!(matches!(
        MachineConfig::from_toml_str(unknown_rotor).unwrap().build(),
        Err(ConfigurationError::UnknownComponent { name }) if name == "VIII"
    ));

    let bad_plugs = r#"
reflector = "B"
plugboard = "AB BC"
[[rotors]]
name = "I"
"#;
    assert!(matches!(
        MachineConfig::from_toml_str(bad_plugs).unwrap().build(),
        Err(ConfigurationError::PlugLetterReused { letter: 'B' })
    ));

    let bad_position = r#"
reflector = "B"
[[rotors]]
name = "I"
position = 26
"#;
    assert!(matches!(
        MachineConfig::from_toml_str(bad_position).unwrap().build(),
        Err(ConfigurationError::InvalidPosition { pos: 26 })
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("reflector = \n");
    assert!(matches!(
        MachineConfig::load(file.path()),
        Err(ConfigurationError::Parse(_))
    ));
}

#[test]
fn unknown_step_mode_is_a_parse_error() {
    let result = MachineConfig::from_toml_str(
        r#"
reflector = "B"
step_mode = "odometer"
rotors = []
"#,
    );
    assert!(matches!(result, Err(ConfigurationError::Parse(_))));
}
