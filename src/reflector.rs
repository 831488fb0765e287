//! Reflector: the fixed, self-inverse substitution at the end of the
//! forward signal path.
//!
//! The reflector is what makes the whole machine reciprocal: because its
//! mapping is an involution, the backward pass retraces a mirror of the
//! forward pass and encryption equals decryption under the same starting
//! position. The involution invariant is checked eagerly at construction,
//! never lazily at first use.

use crate::alphabet::{parse_wiring, to_letter};
use crate::error::EnigmaError;

/// A fixed involutive substitution. Direction-agnostic by definition.
#[derive(Debug)]
pub struct Reflector {
    mapping: [u8; 26],
}

impl Reflector {
    /// Builds a reflector from a 26-letter wiring string.
    ///
    /// # Errors
    ///
    /// - [`EnigmaError::InvalidWiring`] if `wiring` is not a 26-letter
    ///   permutation of the alphabet.
    /// - [`EnigmaError::InvalidReflector`] if the permutation is not
    ///   self-inverse, i.e. `wiring[wiring[i]] != i` for some position.
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        let mapping = parse_wiring(wiring)?;

        for (i, &code) in mapping.iter().enumerate() {
            if mapping[code as usize] as usize != i {
                return Err(EnigmaError::InvalidReflector(format!(
                    "{:?} maps to {:?} but {:?} does not map back",
                    to_letter(i as u8),
                    to_letter(code),
                    to_letter(code),
                )));
            }
        }

        Ok(Reflector { mapping })
    }

    /// Maps a code through the reflector. Applying it twice returns the
    /// original code.
    #[inline]
    pub fn map(&self, code: u8) -> u8 {
        self.mapping[code as usize]
    }
}
