//! secp256k1 group arithmetic built on [`vesta_math`] fixed-width integers.
//!
//! Implements the affine group law, double-and-add scalar multiplication,
//! and the SEC1 compressed point encoding. The public surface mirrors what
//! hierarchical key derivation needs: parse and serialize keys, derive the
//! public key of a secret key, and apply additive tweaks to both.

mod error;
mod field;
mod modular;
mod point;
mod public_key;
mod result;
mod scalar;
mod secret_key;

pub use error::Error;
pub use field::{FieldElement, FIELD_MODULUS};
pub use point::{Point, GENERATOR};
pub use public_key::PublicKey;
pub use result::Result;
pub use scalar::{Scalar, CURVE_ORDER};
pub use secret_key::SecretKey;
