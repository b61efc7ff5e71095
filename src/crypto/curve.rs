//! Scalar-to-point mapping over Edwards25519.

use crate::crypto::error::{Error, Result};
use crate::crypto::scalar::ClampedScalar;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use num_bigint::BigUint;
use sha2::{Digest, Sha512};

/// Curve arithmetic needed to turn a derived scalar into a public point.
pub trait CurveOps {
    /// Name shown in reports
    fn name(&self) -> &'static str;

    /// Multiply the base point and return the compressed encoding.
    fn scalar_to_compressed_point(&self, scalar: &ClampedScalar) -> Result<[u8; 32]>;
}

/// `scalar * B`, with the scalar used exactly as derived.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClampedBaseMul;

impl CurveOps for ClampedBaseMul {
    fn name(&self) -> &'static str {
        "clamped-base"
    }

    fn scalar_to_compressed_point(&self, scalar: &ClampedScalar) -> Result<[u8; 32]> {
        if !scalar.is_clamped() {
            return Err(Error::InvalidScalar);
        }
        Ok(EdwardsPoint::mul_base_clamped(*scalar.as_bytes())
            .compress()
            .to_bytes())
    }
}

/// Ed25519 public key of the scalar taken as a 32-byte secret key
/// (RFC 8032, section 5.1.5): `clamp(SHA-512(scalar)[..32]) * B`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519KeyExpansion;

impl CurveOps for Ed25519KeyExpansion {
    fn name(&self) -> &'static str {
        "ed25519-key"
    }

    fn scalar_to_compressed_point(&self, scalar: &ClampedScalar) -> Result<[u8; 32]> {
        if !scalar.is_clamped() {
            return Err(Error::InvalidScalar);
        }
        let expanded = Sha512::digest(scalar.as_bytes());
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&expanded[..32]);
        Ok(EdwardsPoint::mul_base_clamped(secret).compress().to_bytes())
    }
}

/// Compressed Edwards25519 point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    compressed: CompressedEdwardsY,
    point: EdwardsPoint,
}

impl Point {
    /// Decode a compressed encoding, failing if it is not a curve point.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self> {
        let compressed = CompressedEdwardsY(bytes);
        let point = compressed.decompress().ok_or(Error::InvalidPoint)?;
        Ok(Self { compressed, point })
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.compressed.to_bytes()
    }

    /// The encoding read as a big-endian unsigned integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(self.compressed.as_bytes())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.compressed.as_bytes())
    }

    /// True when the point lies in the prime-order subgroup.
    pub fn is_torsion_free(&self) -> bool {
        self.point.is_torsion_free()
    }
}

/// Map a derived scalar to its public point through `curve`.
pub fn derive_point<C: CurveOps + ?Sized>(curve: &C, scalar: &ClampedScalar) -> Result<Point> {
    let bytes = curve.scalar_to_compressed_point(scalar)?;
    Point::from_bytes(bytes)
}
