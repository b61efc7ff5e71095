pub mod curve;
pub mod error;
pub mod scalar;

pub use curve::{ClampedBaseMul, CurveOps, Ed25519KeyExpansion, Point, derive_point};
pub use error::{Error, Result};
pub use scalar::{ClampedScalar, HASH_ROUNDS, derive_scalar, derive_scalar_with_rounds};
