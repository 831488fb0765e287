//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All fallible operations return [`Result<T, EnigmaError>`](EnigmaError);
//! they are all construction/configuration paths; once a machine is
//! assembled, every cipher operation is total and never fails.

use thiserror::Error;

/// The error type for all rotor-machine operations.
///
/// Every variant is raised eagerly at construction or configuration time.
/// A failed construction leaves no partially usable machine behind.
#[derive(Error, Debug)]
pub enum EnigmaError {
    /// A wiring string is not a 26-letter permutation of the alphabet.
    ///
    /// Raised by rotor and reflector construction when the supplied wiring
    /// is the wrong length, contains a non-letter, or maps two positions
    /// to the same contact.
    #[error("Invalid wiring: {0}")]
    InvalidWiring(String),

    /// A reflector wiring is a valid permutation but not self-inverse.
    ///
    /// The reflector must satisfy `map(map(x)) == x` for every position;
    /// the message names the first position where the double application
    /// fails to return to itself.
    #[error("Invalid reflector: {0}")]
    InvalidReflector(String),

    /// The alphabet codec was asked to encode a character that is not an
    /// ASCII letter.
    ///
    /// The machine itself never triggers this (non-letters pass through
    /// `encrypt_char` unchanged), but callers feeding single characters
    /// into the codec or into `set_position` can.
    #[error("Not an alphabetic character: {0:?}")]
    InvalidInput(char),

    /// A rotor position string is not exactly three letters (left, middle,
    /// right).
    #[error("Invalid position: {0}")]
    InvalidPosition(String),
}
