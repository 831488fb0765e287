//! src/builders/enigma_builder.rs
//! Machine configuration builder: wiring strings in, validated machine out.

use crate::consts::{
    DEFAULT_START_POSITION, REFLECTOR_B_WIRING, ROTOR_III_NOTCHES, ROTOR_III_WIRING,
    ROTOR_II_NOTCHES, ROTOR_II_WIRING, ROTOR_I_NOTCHES, ROTOR_I_WIRING,
};
use crate::error::EnigmaError;
use crate::machine::Enigma;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Builder for [`Enigma`] machines.
///
/// Strong defaults: historical rotors I/II/III (left to right) with their
/// turnover notches, the wide-B reflector, start position
/// [`DEFAULT_START_POSITION`], single-step mode.
///
/// All wiring validation is deferred to [`build`](Self::build), which
/// constructs the rotors and reflector and aborts assembly on the first
/// invalid table. No partial machine is ever returned.
#[derive(Debug, Clone)]
pub struct EnigmaBuilder {
    left: (String, Vec<char>),
    mid: (String, Vec<char>),
    right: (String, Vec<char>),
    reflector: String,
    start_position: String,
    double_step: bool,
}

impl EnigmaBuilder {
    /// Creates a builder with the historical defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            left: (ROTOR_I_WIRING.to_string(), ROTOR_I_NOTCHES.to_vec()),
            mid: (ROTOR_II_WIRING.to_string(), ROTOR_II_NOTCHES.to_vec()),
            right: (ROTOR_III_WIRING.to_string(), ROTOR_III_NOTCHES.to_vec()),
            reflector: REFLECTOR_B_WIRING.to_string(),
            start_position: DEFAULT_START_POSITION.to_string(),
            double_step: false,
        }
    }

    /// Set the left (slowest) rotor's wiring and turnover notches.
    #[must_use]
    pub fn with_left_rotor(mut self, wiring: &str, notches: &[char]) -> Self {
        self.left = (wiring.to_string(), notches.to_vec());
        self
    }

    /// Set the middle rotor's wiring and turnover notches.
    #[must_use]
    pub fn with_mid_rotor(mut self, wiring: &str, notches: &[char]) -> Self {
        self.mid = (wiring.to_string(), notches.to_vec());
        self
    }

    /// Set the right (fastest) rotor's wiring and turnover notches.
    #[must_use]
    pub fn with_right_rotor(mut self, wiring: &str, notches: &[char]) -> Self {
        self.right = (wiring.to_string(), notches.to_vec());
        self
    }

    /// Set the reflector wiring. Must be self-inverse.
    #[must_use]
    pub fn with_reflector(mut self, wiring: &str) -> Self {
        self.reflector = wiring.to_string();
        self
    }

    /// Set the initial rotor positions (three letters, left/mid/right).
    #[must_use]
    pub fn with_start_position(mut self, position: &str) -> Self {
        self.start_position = position.to_string();
        self
    }

    /// Select the historical double-step anomaly instead of plain
    /// single-stepping.
    #[must_use]
    pub fn with_double_step(mut self, double_step: bool) -> Self {
        self.double_step = double_step;
        self
    }

    /// Validates every wiring table and assembles the machine.
    ///
    /// # Errors
    ///
    /// Any of the construction errors from [`Rotor::new`], [`Reflector::new`]
    /// or [`Enigma::set_position`]; the message identifies the invalid table.
    pub fn build(self) -> Result<Enigma, EnigmaError> {
        let reflector = Reflector::new(&self.reflector)?;
        let left = Rotor::new(&self.left.0, &self.left.1, 'a')?;
        let mid = Rotor::new(&self.mid.0, &self.mid.1, 'a')?;
        let right = Rotor::new(&self.right.0, &self.right.1, 'a')?;

        let mut machine = Enigma::new(reflector, left, mid, right, self.double_step);
        machine.set_position(&self.start_position)?;
        Ok(machine)
    }
}

impl Default for EnigmaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
