//! tests/reflector_tests.rs
//! Reflector construction and the involution invariant.

use enigma_rs::consts::REFLECTOR_B_WIRING;
use enigma_rs::{EnigmaError, Reflector};

#[test]
fn valid_wiring_constructs_and_is_involutive() {
    let reflector = Reflector::new(REFLECTOR_B_WIRING).unwrap();
    for code in 0..26 {
        assert_eq!(reflector.map(reflector.map(code)), code, "code {code}");
    }
}

#[test]
fn validation_is_eager_not_lazy() {
    // The involution check runs inside new(); an invalid table never yields
    // a usable value to call map on.
    let result = Reflector::new("ekmflgdqvzntowyhxuspaibrcj");
    assert!(matches!(result, Err(EnigmaError::InvalidReflector(_))));
}

#[test]
fn swapping_one_pair_breaks_the_involution() {
    // REFLECTOR_B maps a<->y and b<->r. Rewiring position a to r (leaving
    // r pointing at b) must fail with a message naming the asymmetry.
    let broken = REFLECTOR_B_WIRING.replace('y', "#").replace('r', "y").replace('#', "r");
    let err = Reflector::new(&broken).unwrap_err();
    assert!(matches!(err, EnigmaError::InvalidReflector(_)));
}

#[test]
fn non_permutation_is_reported_as_wiring_error() {
    // duplicate letter: a wiring problem, not an involution problem
    let err = Reflector::new("yruhqsldpxngokmiebfzcwvjaa").unwrap_err();
    assert!(matches!(err, EnigmaError::InvalidWiring(_)));
}

#[test]
fn error_messages_identify_the_failure() {
    let err = Reflector::new("short").unwrap_err();
    assert!(err.to_string().contains("expected 26 letters"));

    let err = Reflector::new("ekmflgdqvzntowyhxuspaibrcj").unwrap_err();
    assert!(err.to_string().starts_with("Invalid reflector"));
}
