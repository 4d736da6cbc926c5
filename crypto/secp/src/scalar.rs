use core::ops::{Add, Mul};

use vesta_math::Uint256;

use crate::error::Error;
use crate::modular::{add_mod, mul_mod};
use crate::result::Result;

/// The order of the secp256k1 group.
pub const CURVE_ORDER: Uint256 =
    Uint256([0xBFD25E8CD0364141, 0xBAAEDCE6AF48A03B, 0xFFFFFFFFFFFFFFFE, 0xFFFFFFFFFFFFFFFF]);

/// An integer modulo the group order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Scalar(Uint256);

impl Scalar {
    /// Interprets 32 big-endian bytes as a scalar. Values at or above the
    /// group order are rejected rather than reduced.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Result<Self> {
        let value = Uint256::from_be_bytes(bytes);
        if value < CURVE_ORDER {
            Ok(Scalar(value))
        } else {
            Err(Error::InvalidScalar)
        }
    }

    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Multiplicative inverse modulo the group order. Zero has none.
    pub fn invert(self) -> Result<Self> {
        self.0.mod_inverse(CURVE_ORDER).map(Scalar).ok_or(Error::InvalidScalar)
    }

    #[inline]
    pub(crate) fn as_uint(self) -> Uint256 {
        self.0
    }
}

impl Add for Scalar {
    type Output = Scalar;

    #[inline]
    fn add(self, other: Scalar) -> Scalar {
        Scalar(add_mod(self.0, other.0, CURVE_ORDER))
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    #[inline]
    fn mul(self, other: Scalar) -> Scalar {
        Scalar(mul_mod(self.0, other.0, CURVE_ORDER))
    }
}
