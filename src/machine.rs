//! src/machine.rs
//! The assembled machine: one reflector, three rotors, and the stepping
//! mechanism that drives them.
//!
//! The machine exclusively owns all four sub-components. Its entire identity
//! is the concatenation of the three rotor positions: 26^3 mechanical states
//! cycling indefinitely over arbitrary-length input.
//!
//! Reciprocity: with the same starting position, encryption and decryption
//! are the same operation. `decrypt` exists purely for API symmetry.

use crate::alphabet::{to_code, to_letter};
use crate::builders::EnigmaBuilder;
use crate::error::EnigmaError;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// A three-rotor reciprocal cipher machine.
///
/// Each character steps the mechanism once, then travels right→mid→left
/// through the rotors, through the reflector, and back left→mid→right.
/// Non-letters pass through untouched and do not advance the mechanism.
///
/// # Examples
///
/// ```
/// use enigma_rs::Enigma;
///
/// let mut machine = Enigma::builder().with_double_step(true).build()?;
/// let ciphertext = machine.encrypt("hello");
/// assert_eq!(ciphertext, "ilbda");
///
/// machine.set_position("aaa")?;
/// assert_eq!(machine.decrypt(&ciphertext), "hello");
/// # Ok::<(), enigma_rs::EnigmaError>(())
/// ```
#[derive(Debug)]
pub struct Enigma {
    reflector: Reflector,
    left: Rotor,
    mid: Rotor,
    right: Rotor,
    double_step: bool,
}

impl Enigma {
    /// Assembles a machine from already-constructed components.
    ///
    /// All wiring validation happened when the rotors and reflector were
    /// built; assembly itself cannot fail. `double_step` selects the
    /// historical stepping anomaly over plain single-stepping.
    pub fn new(
        reflector: Reflector,
        left: Rotor,
        mid: Rotor,
        right: Rotor,
        double_step: bool,
    ) -> Self {
        Enigma {
            reflector,
            left,
            mid,
            right,
            double_step,
        }
    }

    /// A builder preconfigured with the historical rotor set. See
    /// [`EnigmaBuilder`].
    pub fn builder() -> EnigmaBuilder {
        EnigmaBuilder::new()
    }

    /// Sets all three rotor positions from a three-letter string, ordered
    /// left, middle, right. Case-insensitive. Does not step the mechanism.
    ///
    /// # Errors
    ///
    /// - [`EnigmaError::InvalidPosition`] if `position` is not exactly three
    ///   characters.
    /// - [`EnigmaError::InvalidInput`] if any character is not a letter; the
    ///   rotor positions are left unchanged in that case.
    pub fn set_position(&mut self, position: &str) -> Result<(), EnigmaError> {
        let mut chars = position.chars();
        let (Some(l), Some(m), Some(r), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(EnigmaError::InvalidPosition(format!(
                "expected exactly 3 letters, got {:?}",
                position
            )));
        };

        // validate all three before mutating any rotor
        to_code(l)?;
        to_code(m)?;
        to_code(r)?;

        self.left.set_position(l)?;
        self.mid.set_position(m)?;
        self.right.set_position(r)?;
        Ok(())
    }

    /// The current rotor positions as three lowercase letters, ordered
    /// left, middle, right.
    pub fn position(&self) -> String {
        let mut out = String::with_capacity(3);
        out.push(self.left.current_position());
        out.push(self.mid.current_position());
        out.push(self.right.current_position());
        out
    }

    /// Advances the stepping mechanism by one keystroke.
    ///
    /// Contract: all rotation marks are computed from the positions *before*
    /// any rotor in this call has moved, then applied right, then mid, then
    /// left. Reordering any of this changes cipher output.
    fn step_mechanism(&mut self) {
        let mut mid_rotates = false;
        let mut left_rotates = false;

        if self.double_step {
            if self.right.at_notch() {
                mid_rotates = true;
            }
            // Independent of the right rotor: a mid rotor sitting on its own
            // notch drags both itself and the left rotor forward. This is
            // what makes the mid rotor step on two consecutive keystrokes.
            if self.mid.at_notch() {
                mid_rotates = true;
                left_rotates = true;
            }
        } else if self.right.at_notch() {
            mid_rotates = true;
            if self.mid.at_notch() {
                left_rotates = true;
            }
        }

        self.right.rotate();
        if mid_rotates {
            self.mid.rotate();
        }
        if left_rotates {
            self.left.rotate();
        }
    }

    /// Encrypts (or equivalently decrypts) a single character.
    ///
    /// Letters step the mechanism first, then traverse the full signal path;
    /// output is canonicalized to lowercase. Anything that is not an ASCII
    /// letter (digits, punctuation, whitespace, non-ASCII text) is
    /// returned unchanged with no state mutation.
    pub fn encrypt_char(&mut self, ch: char) -> char {
        let Ok(mut code) = to_code(ch) else {
            // not a letter: no step, no state mutation
            return ch;
        };

        self.step_mechanism();

        code = self.right.map_forward(code);
        code = self.mid.map_forward(code);
        code = self.left.map_forward(code);
        code = self.reflector.map(code);
        code = self.left.map_backward(code);
        code = self.mid.map_backward(code);
        code = self.right.map_backward(code);
        to_letter(code)
    }

    /// Encrypts a text, character by character, preserving the placement of
    /// every non-letter. This is the sole bulk entry point.
    pub fn encrypt(&mut self, text: &str) -> String {
        text.chars().map(|ch| self.encrypt_char(ch)).collect()
    }

    /// Decrypts a text. The machine is reciprocal, so this is `encrypt`
    /// under another name: reset to the encrypting start position first.
    pub fn decrypt(&mut self, text: &str) -> String {
        self.encrypt(text)
    }
}
