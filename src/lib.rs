//! Nothing-up-my-sleeve Edwards25519 points.
//!
//! Public seed strings are hashed with SHA-256 [`crypto::HASH_ROUNDS`] times,
//! clamped, and mapped to curve points through a [`crypto::CurveOps`]
//! implementation. The resulting encodings are compared with the values
//! recorded for the PAKE's fixed points.

pub mod cli;
pub mod crypto;
pub mod points;
pub mod runner;
pub mod validation;
