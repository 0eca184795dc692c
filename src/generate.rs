//! Random generation of machine definitions.
//!
//! Produces cryptographically well-formed machines: five uniformly shuffled
//! rotor wirings and a reflector built by pairing symbols without
//! replacement, which is a fixed-point-free involution by construction. No
//! post-hoc repair is needed or attempted.
//!
//! The random source is an explicit parameter. Callers wanting reproducible
//! machines seed a [`rand_chacha::ChaCha8Rng`] (`seed_from_u64`); the same
//! seed always yields a byte-identical definition.

use rand::Rng;

use crate::definition::MachineDefinition;
use crate::reflector::Reflector;
use crate::rotor::Wiring;
use crate::{ALPHABET_LEN, ROTOR_COUNT};

/// Generates a fresh, valid machine definition from the given source.
///
/// # Parameters
/// - `rng`: the pseudorandom source. Seeded sources give reproducible
///   definitions; entropy-seeded sources give non-reproducible ones.
///
/// # Examples
///
/// ```
/// use enigma::generate::random_definition;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let a = random_definition(&mut ChaCha8Rng::seed_from_u64(1));
/// let b = random_definition(&mut ChaCha8Rng::seed_from_u64(1));
/// assert_eq!(a.to_bytes(), b.to_bytes());
/// ```
pub fn random_definition<R: Rng>(rng: &mut R) -> MachineDefinition {
    let wirings = [(); ROTOR_COUNT].map(|_| Wiring::new(random_wiring(rng)));
    MachineDefinition::new(wirings, Reflector::new(random_reflector(rng)))
}

/// Shuffles the identity permutation into a random wiring.
///
/// Fisher-Yates from the last index down to index 1, swapping each position
/// with a uniformly drawn earlier-or-equal position. The loop is written out
/// because the exact draw sequence is the seeded-reproducibility contract.
fn random_wiring<R: Rng>(rng: &mut R) -> [u8; ALPHABET_LEN] {
    let mut wiring = [0u8; ALPHABET_LEN];
    for (i, slot) in wiring.iter_mut().enumerate() {
        *slot = i as u8;
    }
    for i in (1..ALPHABET_LEN).rev() {
        let j = rng.gen_range(0..=i);
        wiring.swap(i, j);
    }
    wiring
}

/// Pairs up the alphabet into a reflector mapping.
///
/// Thirteen rounds, each drawing two distinct symbols from the remaining
/// pool without replacement and mapping them to each other. The result is
/// always a fixed-point-free involution.
fn random_reflector<R: Rng>(rng: &mut R) -> [u8; ALPHABET_LEN] {
    let mut mapping = [0u8; ALPHABET_LEN];
    let mut pool: Vec<u8> = (0..ALPHABET_LEN as u8).collect();
    for _ in 0..ALPHABET_LEN / 2 {
        let a = pool.remove(rng.gen_range(0..pool.len()));
        let b = pool.remove(rng.gen_range(0..pool.len()));
        mapping[a as usize] = b;
        mapping[b as usize] = a;
    }
    mapping
}
