//! tests/common.rs
//! Shared fixtures for the integration tests: the historical rotor set and
//! machine constructors used across test files.

use enigma_rs::consts::{
    REFLECTOR_B_WIRING, ROTOR_III_NOTCHES, ROTOR_III_WIRING, ROTOR_II_NOTCHES, ROTOR_II_WIRING,
    ROTOR_I_NOTCHES, ROTOR_I_WIRING,
};
use enigma_rs::Enigma;

/// Historical machine: rotors I/II/III left to right, wide-B reflector.
#[allow(dead_code)] // Used across multiple test files
pub fn historical_machine(double_step: bool) -> Enigma {
    Enigma::builder()
        .with_double_step(double_step)
        .build()
        .expect("historical rotor set must build")
}

/// Same rotor set with the fast and slow rotors swapped, so the right rotor
/// carries notch `q` and the middle rotor notch `e`.
#[allow(dead_code)] // Used across multiple test files
pub fn swapped_rotor_machine(double_step: bool) -> Enigma {
    Enigma::builder()
        .with_left_rotor(ROTOR_III_WIRING, ROTOR_III_NOTCHES)
        .with_mid_rotor(ROTOR_II_WIRING, ROTOR_II_NOTCHES)
        .with_right_rotor(ROTOR_I_WIRING, ROTOR_I_NOTCHES)
        .with_reflector(REFLECTOR_B_WIRING)
        .with_double_step(double_step)
        .build()
        .expect("swapped rotor set must build")
}
