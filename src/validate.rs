//! Structural validation of loaded machine definitions.
//!
//! A definition file is raw bytes from outside the process, so every block
//! is checked before any table is built from it: each rotor wiring must be
//! exactly the set `{0..26}` and the reflector must be a fixed-point-free
//! involution. Validation never repairs; a failed check is fatal.

use crate::error::EnigmaError;
use crate::ALPHABET_LEN;

/// Checks that a rotor wiring is a permutation of `0..26`.
///
/// # Parameters
/// - `wiring`: the forward table to check.
/// - `rotor_number`: 1-based rotor number, reported in the error.
///
/// # Errors
/// [`EnigmaError::InvalidRotorWiring`] on any out-of-range entry, duplicate
/// or omission.
pub fn validate_wiring(wiring: &[u8; ALPHABET_LEN], rotor_number: usize) -> Result<(), EnigmaError> {
    let mut seen = [false; ALPHABET_LEN];
    for &value in wiring {
        let slot = seen
            .get_mut(value as usize)
            .ok_or(EnigmaError::InvalidRotorWiring(rotor_number))?;
        if *slot {
            return Err(EnigmaError::InvalidRotorWiring(rotor_number));
        }
        *slot = true;
    }
    Ok(())
}

/// Checks that a reflector mapping is a fixed-point-free involution.
///
/// Both conditions are checked for all 26 indices: `mapping[mapping[i]] == i`
/// and `mapping[i] != i`.
///
/// # Errors
/// [`EnigmaError::InvalidReflector`] on any out-of-range entry, fixed point
/// or non-involutive pair.
pub fn validate_reflector(mapping: &[u8; ALPHABET_LEN]) -> Result<(), EnigmaError> {
    for (i, &value) in mapping.iter().enumerate() {
        let back = *mapping
            .get(value as usize)
            .ok_or(EnigmaError::InvalidReflector)?;
        if back as usize != i || value as usize == i {
            return Err(EnigmaError::InvalidReflector);
        }
    }
    Ok(())
}
