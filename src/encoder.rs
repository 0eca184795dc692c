//! Encoder: three rotors and a reflector composed into one machine.
//!
//! Owns the stepping cascade and the full signal path. The machine is
//! stateful across a single message: the three rotor offsets advance as an
//! odometer, one tick per encoded letter. An `Encoder` is built fresh for
//! each message and is neither reentrant nor restartable; decoding requires
//! a new machine constructed from the identical definition, selection and
//! starting offsets.

use crate::definition::MachineDefinition;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::selection::RotorSelection;
use crate::MOUNTED_ROTORS;

/// Rotor cipher machine for one message.
#[derive(Debug, Clone)]
pub struct Encoder {
    rotors: [Rotor; MOUNTED_ROTORS],
    reflector: Reflector,
}

impl Encoder {
    /// Mounts three rotors from the definition per the selection.
    ///
    /// Slot 0 is the fastest rotor (steps every letter), slot 2 the slowest.
    ///
    /// # Parameters
    /// - `definition`: the stored library of five wirings plus reflector.
    /// - `selection`: which three wirings to mount, with starting offsets
    ///   and notch positions.
    pub fn new(definition: &MachineDefinition, selection: &RotorSelection) -> Self {
        let rotors = selection
            .slots()
            .map(|slot| Rotor::new(*definition.wiring(slot.rotor), slot.position, slot.notch));
        Encoder {
            rotors,
            reflector: *definition.reflector(),
        }
    }

    /// Advances the odometer by one tick.
    ///
    /// Rotor 0 steps unconditionally; rotor 1 steps iff rotor 0 carried;
    /// rotor 2 steps iff rotor 1 carried. Rotor 2's carry goes nowhere,
    /// the chain is exactly three wheels long.
    fn step(&mut self) {
        if self.rotors[0].rotate() && self.rotors[1].rotate() {
            self.rotors[2].rotate();
        }
    }

    /// Encodes a single byte.
    ///
    /// ASCII letters are case-folded, passed forward through rotors 0, 1, 2,
    /// reflected, passed backward through rotors 2, 1, 0, and emitted as a
    /// lowercase letter; the machine then steps once. Stepping happens after
    /// the substitution, so the first letter of a message is always encoded
    /// with the untouched starting offsets. Every other byte is returned
    /// unchanged and does not step the machine.
    pub fn encode_byte(&mut self, byte: u8) -> u8 {
        let symbol = match byte {
            b'a'..=b'z' => byte - b'a',
            b'A'..=b'Z' => byte - b'A',
            _ => return byte,
        };

        let mut c = symbol;
        for rotor in self.rotors.iter() {
            c = rotor.forward_substitute(c);
        }
        c = self.reflector.reflect(c);
        for rotor in self.rotors.iter().rev() {
            c = rotor.backward_substitute(c);
        }

        self.step();
        c + b'a'
    }

    /// Encodes a whole message, one byte at a time, in input order.
    ///
    /// Output length equals input length exactly; non-letter bytes appear
    /// unchanged at the same positions.
    pub fn encode(&mut self, message: &[u8]) -> Vec<u8> {
        message.iter().map(|&byte| self.encode_byte(byte)).collect()
    }

    /// Returns the current offsets of the three mounted rotors.
    pub fn offsets(&self) -> [u8; MOUNTED_ROTORS] {
        [
            self.rotors[0].offset(),
            self.rotors[1].offset(),
            self.rotors[2].offset(),
        ]
    }
}
