//! Error types for the enigma library.

use std::fmt;

use crate::definition::DEFINITION_LEN;

/// Errors produced by the enigma library.
///
/// Every error is fatal to the operation that raised it: nothing is retried
/// internally and no partial ciphertext or definition is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// Rotor selection string violates the `R:P:N,R:P:N,R:P:N` grammar
    /// or mounts the same rotor in more than one slot.
    MalformedRotorSelection(String),
    /// Machine definition is not exactly 156 bytes; carries the actual size.
    InvalidDefinitionSize(usize),
    /// A stored rotor wiring is not a permutation of the alphabet;
    /// carries the 1-based rotor number.
    InvalidRotorWiring(usize),
    /// The stored reflector mapping is not a fixed-point-free involution.
    InvalidReflector,
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::MalformedRotorSelection(reason) => {
                write!(f, "Malformed rotor selection: {}", reason)
            }
            EnigmaError::InvalidDefinitionSize(size) => {
                write!(
                    f,
                    "Machine definition must be exactly {} bytes, found {}",
                    DEFINITION_LEN, size
                )
            }
            EnigmaError::InvalidRotorWiring(rotor) => {
                write!(f, "Rotor {} wiring is not a permutation of the alphabet", rotor)
            }
            EnigmaError::InvalidReflector => {
                write!(f, "Reflector mapping is not a fixed-point-free involution")
            }
        }
    }
}

impl std::error::Error for EnigmaError {}
