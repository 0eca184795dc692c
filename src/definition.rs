//! Machine definition and its fixed binary layout.
//!
//! A definition is the persisted library of five interchangeable rotor
//! wirings plus one reflector. It is independent of which three rotors a
//! session mounts, in what order and at what starting offsets; that
//! selection arrives separately per message.
//!
//! # Binary layout
//!
//! Exactly 156 bytes, one raw byte per symbol value (`0..26`, not ASCII).
//! No header, no checksum, no versioning.
//!
//! ```text
//! [  0,  26)  rotor wiring 1
//! [ 26,  52)  rotor wiring 2
//! [ 52,  78)  rotor wiring 3
//! [ 78, 104)  rotor wiring 4
//! [104, 130)  rotor wiring 5
//! [130, 156)  reflector mapping
//! ```
//!
//! Reading rejects any other length outright with no partial recovery, and
//! validates every block structurally before constructing wirings, so the
//! cached inverse tables are only ever built from true permutations.

use crate::error::EnigmaError;
use crate::reflector::Reflector;
use crate::rotor::Wiring;
use crate::validate::{validate_reflector, validate_wiring};
use crate::{ALPHABET_LEN, ROTOR_COUNT};

/// Exact size of a serialized machine definition in bytes.
pub const DEFINITION_LEN: usize = (ROTOR_COUNT + 1) * ALPHABET_LEN;

/// The persisted machine: five rotor wirings and one reflector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineDefinition {
    wirings: [Wiring; ROTOR_COUNT],
    reflector: Reflector,
}

impl MachineDefinition {
    /// Assembles a definition from already-validated parts.
    ///
    /// Used by the generator, whose output is valid by construction; data
    /// from outside the process goes through
    /// [`from_bytes`](Self::from_bytes) instead.
    pub fn new(wirings: [Wiring; ROTOR_COUNT], reflector: Reflector) -> Self {
        MachineDefinition { wirings, reflector }
    }

    /// Deserializes and validates a definition from its 156-byte layout.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidDefinitionSize`] if `bytes` is not exactly
    ///   156 bytes long.
    /// - [`EnigmaError::InvalidRotorWiring`] (1-based rotor number) if a
    ///   wiring block is not a permutation of `0..26`.
    /// - [`EnigmaError::InvalidReflector`] if the reflector block is not a
    ///   fixed-point-free involution.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EnigmaError> {
        if bytes.len() != DEFINITION_LEN {
            return Err(EnigmaError::InvalidDefinitionSize(bytes.len()));
        }

        let mut tables = [[0u8; ALPHABET_LEN]; ROTOR_COUNT];
        for (i, table) in tables.iter_mut().enumerate() {
            table.copy_from_slice(&bytes[i * ALPHABET_LEN..(i + 1) * ALPHABET_LEN]);
            validate_wiring(table, i + 1)?;
        }

        let mut mapping = [0u8; ALPHABET_LEN];
        mapping.copy_from_slice(&bytes[ROTOR_COUNT * ALPHABET_LEN..]);
        validate_reflector(&mapping)?;

        Ok(MachineDefinition {
            wirings: tables.map(Wiring::new),
            reflector: Reflector::new(mapping),
        })
    }

    /// Serializes the definition into its 156-byte layout.
    pub fn to_bytes(&self) -> [u8; DEFINITION_LEN] {
        let mut bytes = [0u8; DEFINITION_LEN];
        for (i, wiring) in self.wirings.iter().enumerate() {
            bytes[i * ALPHABET_LEN..(i + 1) * ALPHABET_LEN].copy_from_slice(wiring.forward());
        }
        bytes[ROTOR_COUNT * ALPHABET_LEN..].copy_from_slice(self.reflector.mapping());
        bytes
    }

    /// Returns the stored wiring for a 0-based rotor index.
    ///
    /// # Panics
    /// Panics if `index >= 5`; selection parsing guarantees the range.
    pub fn wiring(&self, index: usize) -> &Wiring {
        &self.wirings[index]
    }

    /// Returns the stored reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }
}
