//! Rotor: a rotating substitution unit.
//!
//! A rotor holds a fixed internal wiring permutation, its derived inverse,
//! a set of turnover-notch positions, and a mutable rotational offset. The
//! signal traverses every rotor twice per character, once toward the
//! reflector and once back, so both directions of the wiring are
//! tabulated up front.
//!
//! The offset is the only mutable state. It is reachable exclusively through
//! [`rotate`](Rotor::rotate) and [`set_position`](Rotor::set_position); the
//! wiring tables never change after construction.

use crate::alphabet::{parse_wiring, to_code, to_letter};
use crate::consts::ALPHABET_LEN;
use crate::error::EnigmaError;

/// A single substitution rotor with a mutable rotational offset.
#[derive(Debug)]
pub struct Rotor {
    forward: [u8; 26],
    backward: [u8; 26],
    notches: [bool; 26],
    offset: u8,
}

impl Rotor {
    /// Builds a rotor from a 26-letter wiring string.
    ///
    /// `wiring[i]` is the letter that alphabet position `i` connects to on
    /// the forward pass; the backward table is derived as its inverse.
    /// `notches` are the positions that trigger the adjacent rotor's step,
    /// and `start_position` is the initial offset letter. All letters are
    /// interpreted case-insensitively.
    ///
    /// # Errors
    ///
    /// - [`EnigmaError::InvalidWiring`] if `wiring` is not a 26-letter
    ///   permutation of the alphabet.
    /// - [`EnigmaError::InvalidInput`] if a notch or the start position is
    ///   not a letter.
    pub fn new(wiring: &str, notches: &[char], start_position: char) -> Result<Self, EnigmaError> {
        let forward = parse_wiring(wiring)?;

        let mut backward = [0u8; 26];
        for (i, &code) in forward.iter().enumerate() {
            backward[code as usize] = i as u8;
        }

        let mut notch_table = [false; 26];
        for &letter in notches {
            notch_table[to_code(letter)? as usize] = true;
        }

        Ok(Rotor {
            forward,
            backward,
            notches: notch_table,
            offset: to_code(start_position)?,
        })
    }

    /// Maps a code through the rotor toward the reflector.
    #[inline]
    pub fn map_forward(&self, code: u8) -> u8 {
        self.map_through(&self.forward, code)
    }

    /// Maps a code through the rotor away from the reflector, using the
    /// inverse wiring.
    #[inline]
    pub fn map_backward(&self, code: u8) -> u8 {
        self.map_through(&self.backward, code)
    }

    /// Enter at the rotated contact, traverse the fixed wiring, exit at the
    /// rotated contact. This is what makes the rotor's effective permutation
    /// itself rotate with the offset while the wiring table stays fixed.
    #[inline]
    fn map_through(&self, table: &[u8; 26], code: u8) -> u8 {
        let offsetted = (code + self.offset) % ALPHABET_LEN;
        let internal = table[offsetted as usize];
        (internal + ALPHABET_LEN - self.offset) % ALPHABET_LEN
    }

    /// Advances the rotor by one position, wrapping from `z` back to `a`.
    pub fn rotate(&mut self) {
        self.offset = (self.offset + 1) % ALPHABET_LEN;
    }

    /// The current rotational position as a lowercase letter.
    pub fn current_position(&self) -> char {
        to_letter(self.offset)
    }

    /// Sets the rotational position directly, without any stepping side
    /// effects. Case-insensitive.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidInput`] if `letter` is not an ASCII letter.
    pub fn set_position(&mut self, letter: char) -> Result<(), EnigmaError> {
        self.offset = to_code(letter)?;
        Ok(())
    }

    /// Whether the rotor currently sits on one of its turnover notches.
    ///
    /// The stepping mechanism queries this for every rotor *before* rotating
    /// any of them.
    pub fn at_notch(&self) -> bool {
        self.notches[self.offset as usize]
    }
}
