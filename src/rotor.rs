//! Rotor: the atomic substitution unit of the machine.
//!
//! A rotor is a fixed wiring permutation of the 26-symbol alphabet plus a
//! mutable rotational offset. The signal enters at an absolute contact, is
//! shifted into the rotor's current rotational frame, substituted through
//! the wiring, and shifted back to the absolute frame. Rotation advances the
//! offset by one per encoded letter; passing the notch position carries a
//! step to the next, slower rotor.

use crate::ALPHABET_LEN;

const LEN: u8 = ALPHABET_LEN as u8;

/// A rotor wiring permutation together with its cached inverse.
///
/// The forward table maps `contact -> wiring[contact]`. The inverse table is
/// derived once at construction (`inverse[forward[j]] = j`) and used for
/// backward substitution, so the return path is a table lookup rather than a
/// linear search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wiring {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl Wiring {
    /// Builds a wiring from a forward permutation, caching the inverse.
    ///
    /// The caller must have validated `forward` as a permutation of
    /// `0..26` (see [`validate_wiring`](crate::validate::validate_wiring));
    /// out-of-range entries would index past the inverse table.
    ///
    /// # Parameters
    /// - `forward`: permutation of `0..26`, `contact -> forward[contact]`.
    pub fn new(forward: [u8; ALPHABET_LEN]) -> Self {
        let mut inverse = [0u8; ALPHABET_LEN];
        for (j, &value) in forward.iter().enumerate() {
            inverse[value as usize] = j as u8;
        }
        Wiring { forward, inverse }
    }

    /// Returns the forward permutation table.
    pub fn forward(&self) -> &[u8; ALPHABET_LEN] {
        &self.forward
    }
}

/// One rotor wheel: wiring, immutable notch position, mutable offset.
#[derive(Debug, Clone)]
pub struct Rotor {
    wiring: Wiring,
    notch: u8,
    offset: u8,
}

impl Rotor {
    /// Mounts a rotor with the given wiring, starting offset and notch.
    ///
    /// # Parameters
    /// - `wiring`: the rotor's substitution permutation.
    /// - `offset`: starting rotational offset, `0..26`.
    /// - `notch`: notch position, `0..26`; crossing it carries a step to
    ///   the next rotor.
    pub fn new(wiring: Wiring, offset: u8, notch: u8) -> Self {
        Rotor {
            wiring,
            notch,
            offset,
        }
    }

    /// Substitutes a contact on the forward pass (towards the reflector).
    ///
    /// The contact is shifted into the rotor's rotational frame, looked up
    /// in the forward table, and shifted back to the absolute frame.
    pub fn forward_substitute(&self, contact: u8) -> u8 {
        let shifted = (contact + self.offset) % LEN;
        (self.wiring.forward[shifted as usize] + self.offset) % LEN
    }

    /// Substitutes a contact on the backward pass (away from the reflector).
    ///
    /// Mirror of [`forward_substitute`](Self::forward_substitute): shift the
    /// contact down by the offset, look up the cached inverse table, shift
    /// the result down again.
    pub fn backward_substitute(&self, contact: u8) -> u8 {
        let shifted = (contact + LEN - self.offset) % LEN;
        (self.wiring.inverse[shifted as usize] + LEN - self.offset) % LEN
    }

    /// Advances the offset by one position.
    ///
    /// # Returns
    /// `true` iff the offset equaled the notch position before the
    /// increment, signalling that the next (slower) rotor must also step.
    pub fn rotate(&mut self) -> bool {
        let carry = self.offset == self.notch;
        self.offset = (self.offset + 1) % LEN;
        carry
    }

    /// Returns the current rotational offset.
    pub fn offset(&self) -> u8 {
        self.offset
    }
}
