//! Global constants for the rotor machine.
//!
//! Includes the alphabet size and the historical Enigma I rotor set used as
//! the builder's defaults and as shared fixtures in tests and benches.

/// Number of contacts on every rotor and reflector (the Latin alphabet).
pub const ALPHABET_LEN: u8 = 26;

/// Rotor I wiring (Enigma I, 1930).
pub const ROTOR_I_WIRING: &str = "ekmflgdqvzntowyhxuspaibrcj";

/// Rotor I turnover notch. The next rotor advances on the keystroke that
/// moves this rotor off the notch position.
pub const ROTOR_I_NOTCHES: &[char] = &['q'];

/// Rotor II wiring (Enigma I, 1930).
pub const ROTOR_II_WIRING: &str = "ajdksiruxblhwtmcqgznpyfvoe";

/// Rotor II turnover notch.
pub const ROTOR_II_NOTCHES: &[char] = &['e'];

/// Rotor III wiring (Enigma I, 1930).
pub const ROTOR_III_WIRING: &str = "bdfhjlcprtxvznyeiwgakmusqo";

/// Rotor III turnover notch.
pub const ROTOR_III_NOTCHES: &[char] = &['v'];

/// Wide reflector B wiring (UKW-B). Self-inverse by construction.
pub const REFLECTOR_B_WIRING: &str = "yruhqsldpxngokmiebfzcwvjat";

/// Default starting position for all three rotors.
pub const DEFAULT_START_POSITION: &str = "aaa";
