//! Password derived permutation of the secret image channels.
//!
//! Scrambling spreads the secret image over the whole cover, so its spatial
//! structure is no longer visible in the low bit-planes. It does not encrypt anything.
//!
//! # Determinism
//!
//! The permutation is a pure function of `(seed, length)` and must never change,
//! otherwise images hidden with an older build can no longer be unveiled:
//! - the seed is the first 4 bytes (big-endian) of the SHA-256 digest of the password
//! - the generator is `fastrand::Rng::with_seed(seed as u64)` (wyrand)
//! - the shuffle starts from the identity and, for `i` from `len - 1` down to `1`,
//!   swaps `i` with `j = rng.usize(0..=i)`

use fastrand::Rng;
use log::debug;
use sha2::{Digest, Sha256};

use crate::api::Password;

/// Pseudo-random permutation over the channel positions of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    /// Shuffled indices: `indices[i]` is the source position of output position `i`.
    /// No inverse table is kept, [`Permutation::invert`] scatters through `indices`.
    indices: Vec<usize>,
}

impl Permutation {
    /// Create a permutation from a seed.
    ///
    /// The same `(seed, length)` pair always yields the same permutation.
    pub fn from_seed(seed: u32, length: usize) -> Self {
        let mut rng = Rng::with_seed(u64::from(seed));

        let mut indices: Vec<usize> = (0..length).collect();

        // Fisher-Yates shuffle
        for i in (1..length).rev() {
            let j = rng.usize(0..=i);
            indices.swap(i, j);
        }

        Permutation { indices }
    }

    pub fn from_password(password: &str, length: usize) -> Self {
        Self::from_seed(derive_seed(password), length)
    }

    /// Source position of output position `i`
    #[inline]
    pub fn source_of(&self, i: usize) -> usize {
        self.indices[i]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// `out[i] = data[indices[i]]`
    pub fn apply<T: Copy>(&self, data: &[T]) -> Vec<T> {
        assert_eq!(data.len(), self.len());
        self.indices.iter().map(|&i| data[i]).collect()
    }

    /// `out[indices[i]] = data[i]`, undoes [`Permutation::apply`]
    pub fn invert<T: Copy>(&self, data: &[T]) -> Vec<T> {
        assert_eq!(data.len(), self.len());
        let mut out = data.to_vec();
        for (&target, &value) in self.indices.iter().zip(data) {
            out[target] = value;
        }
        out
    }
}

/// Maps a password to the 32 bit seed of the permutation generator.
pub fn derive_seed(password: &str) -> u32 {
    let digest = Sha256::digest(password.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Scrambles the flat channel buffer, without a password this is the identity.
pub fn scramble(flat: &[u8], password: &Password) -> Vec<u8> {
    match password.as_ref() {
        Some(password) => {
            debug!("scrambling {} channel values", flat.len());
            Permutation::from_password(password, flat.len()).apply(flat)
        }
        None => flat.to_vec(),
    }
}

/// Reverts [`scramble`] for the same password.
pub fn unscramble(flat: &[u8], password: &Password) -> Vec<u8> {
    match password.as_ref() {
        Some(password) => {
            debug!("unscrambling {} channel values", flat.len());
            Permutation::from_password(password, flat.len()).invert(flat)
        }
        None => flat.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_from_sha256_prefix() {
        // sha256("password") = 5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8
        assert_eq!(derive_seed("password"), 0x5e88_4898);
        // sha256("") = e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
        assert_eq!(derive_seed(""), 0xe3b0_c442);
    }

    #[test]
    fn test_permutation_deterministic() {
        let p1 = Permutation::from_password("test_seed", 100);
        let p2 = Permutation::from_password("test_seed", 100);

        assert_eq!(p1, p2);
    }

    #[test]
    fn test_permutation_different_passwords() {
        let p1 = Permutation::from_password("seed_a", 100);
        let p2 = Permutation::from_password("seed_b", 100);

        let differences = (0..100)
            .filter(|&i| p1.source_of(i) != p2.source_of(i))
            .count();
        assert!(
            differences > 50,
            "Only {} differences, expected > 50",
            differences
        );
    }

    #[test]
    fn test_permutation_bijective() {
        for length in [0, 1, 2, 3, 17, 300, 1024] {
            let p = Permutation::from_password("test", length);

            let mut seen = vec![false; length];
            for i in 0..length {
                let source = p.source_of(i);
                assert!(!seen[source], "Duplicate index {} for length {}", source, length);
                seen[source] = true;
            }
            assert!(seen.iter().all(|&x| x), "Not all indices covered");
        }
    }

    #[test]
    fn test_permutation_inverse() {
        let p = Permutation::from_seed(42, 100);
        let data: Vec<usize> = (0..100).collect();

        assert_eq!(p.invert(&p.apply(&data)), data);
        assert_eq!(p.apply(&p.invert(&data)), data);
    }

    #[test]
    fn test_invert_scatters_through_indices() {
        let p = Permutation::from_seed(42, 100);
        let data: Vec<usize> = (0..100).map(|i| i * 3).collect();

        let inverted = p.invert(&data);
        for i in 0..100 {
            assert_eq!(inverted[p.source_of(i)], data[i]);
        }
    }

    #[test]
    fn test_apply_reads_from_indices() {
        let p = Permutation::from_seed(7, 5);
        let data = vec!['a', 'b', 'c', 'd', 'e'];

        let applied = p.apply(&data);
        for (i, c) in applied.iter().enumerate() {
            assert_eq!(*c, data[p.source_of(i)]);
        }
        assert_eq!(p.invert(&applied), data);
    }

    #[test]
    fn test_scramble_round_trip() {
        let data: Vec<u8> = (0..=255).cycle().take(3 * 31 * 17).collect();
        let password: Password = "SuperSecret42".into();

        let scrambled = scramble(&data, &password);
        assert_ne!(scrambled, data);
        assert_eq!(unscramble(&scrambled, &password), data);
    }

    #[test]
    fn test_no_password_is_identity() {
        let data: Vec<u8> = (0..64).collect();

        assert_eq!(scramble(&data, &Password::default()), data);
        assert_eq!(unscramble(&data, &Password::default()), data);
        assert_eq!(scramble(&data, &"".into()), data);
    }

    #[test]
    fn test_empty_and_single_element() {
        let p = Permutation::from_seed(1, 0);
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);

        let p = Permutation::from_seed(1, 1);
        assert_eq!(p.source_of(0), 0);
        assert_eq!(p.invert(&[9u8]), vec![9u8]);
    }
}
