//! Enigma rotor cipher machine simulator.
//!
//! Simulates an electromechanical rotor cipher machine: each letter is
//! substituted through a chain of three rotating permutation wheels and a
//! fixed reflective permutation, then back out through the wheels in reverse.
//! Wheel rotation forms a carry-chain odometer, so the effective substitution
//! changes after every letter.
//!
//! # Architecture
//!
//! ```text
//! Rotor       (atomic unit: wiring permutation + rotational offset + notch)
//!     x3 in cascade, carry-chained
//! Reflector   (fixed-point-free involution, turns the signal around)
//! Encoder     (orchestrator: forward 0-1-2, reflect, backward 2-1-0, step)
//!
//! MachineDefinition (5 interchangeable wirings + 1 reflector, persisted as
//!                    a raw 156-byte file; validated structurally on load)
//! ```
//!
//! A [`MachineDefinition`] is the persisted library of five rotor wirings and
//! one reflector; which three rotors are mounted, at which starting offsets
//! and notch positions, is a per-message [`RotorSelection`]. An [`Encoder`]
//! is built fresh for every message and discarded afterwards; decoding is
//! re-encoding the ciphertext on a machine in the identical starting state.
//!
//! # Examples
//!
//! Generate a machine, encode a message, decode it again:
//!
//! ```
//! use enigma::{Encoder, RotorSelection};
//! use enigma::generate::random_definition;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let definition = random_definition(&mut rng);
//!
//! let selection: RotorSelection = "1:1:1,2:1:1,3:1:1".parse().unwrap();
//!
//! let mut encoder = Encoder::new(&definition, &selection);
//! let cipher = encoder.encode(b"attack at dawn");
//!
//! let mut decoder = Encoder::new(&definition, &selection);
//! assert_eq!(decoder.encode(&cipher), b"attack at dawn");
//! ```
//!
//! Persist and reload a definition:
//!
//! ```
//! use enigma::MachineDefinition;
//! use enigma::generate::random_definition;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let definition = random_definition(&mut rng);
//!
//! let bytes = definition.to_bytes();
//! let reloaded = MachineDefinition::from_bytes(&bytes).unwrap();
//! assert_eq!(definition, reloaded);
//! ```

#![deny(clippy::all)]

pub mod error;

pub mod definition;
pub mod encoder;
pub mod generate;
pub mod reflector;
pub mod rotor;
pub mod selection;
pub mod validate;

pub use definition::MachineDefinition;
pub use encoder::Encoder;
pub use error::EnigmaError;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use selection::RotorSelection;

/// Number of symbols in the machine alphabet (case-insensitive Latin letters).
pub const ALPHABET_LEN: usize = 26;

/// Number of rotor wirings stored in a machine definition.
pub const ROTOR_COUNT: usize = 5;

/// Number of rotors mounted in the encoder cascade.
pub const MOUNTED_ROTORS: usize = 3;
