//! Seed-to-scalar derivation.
//!
//! A seed is hashed with SHA-256 a fixed, published number of times and the
//! final digest is clamped the way Ed25519 clamps secret scalars. Publishing
//! both the seed and the round count is what makes the resulting point a
//! nothing-up-my-sleeve constant: nobody could have searched for a seed whose
//! point has a known discrete logarithm.

use sha2::{Digest, Sha256};

/// Number of SHA-256 rounds applied to a seed.
pub const HASH_ROUNDS: u32 = 1000;

/// A 32-byte scalar with Edwards25519 clamping applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClampedScalar([u8; 32]);

impl ClampedScalar {
    /// Wrap raw bytes without clamping them. Curve operations check
    /// [`ClampedScalar::is_clamped`] before using the value.
    pub const fn from_raw(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_clamped(&self) -> bool {
        self.0[0] & 0b0000_0111 == 0 && self.0[31] & 0x80 == 0 && self.0[31] & 0x40 == 0x40
    }

    /// Lowercase hex of the little-endian scalar bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Clear the cofactor bits of the low byte, clear the top bit and set the
/// second-highest bit of the high byte.
pub const fn clamp(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}

/// Derive the clamped scalar for `seed` using [`HASH_ROUNDS`] rounds.
pub fn derive_scalar(seed: &str) -> ClampedScalar {
    derive_scalar_with_rounds(seed, HASH_ROUNDS)
}

/// Derive the clamped scalar for `seed` with an explicit round count.
///
/// A round count of zero is treated as one so the buffer is always a full
/// digest.
pub fn derive_scalar_with_rounds(seed: &str, rounds: u32) -> ClampedScalar {
    let mut digest: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
    for _ in 1..rounds {
        digest = Sha256::digest(digest).into();
    }
    ClampedScalar(clamp(digest))
}
