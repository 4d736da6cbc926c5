use core::ops::{Add, Mul, Neg, Sub};

use vesta_math::Uint256;

use crate::modular::{add_mod, mul_mod, pow_mod, sub_mod};

/// The secp256k1 base field prime, `2^256 - 2^32 - 977`.
pub const FIELD_MODULUS: Uint256 =
    Uint256([0xFFFFFFFEFFFFFC2F, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF]);

/// An element of the secp256k1 base field, always reduced below
/// [`FIELD_MODULUS`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct FieldElement(Uint256);

impl FieldElement {
    pub const ZERO: Self = FieldElement(Uint256::ZERO);

    #[inline]
    pub(crate) fn from_uint(value: Uint256) -> Self {
        debug_assert!(value < FIELD_MODULUS);
        FieldElement(value)
    }

    #[inline]
    pub(crate) fn from_u64(value: u64) -> Self {
        FieldElement(Uint256::from_u64(value))
    }

    /// Interprets 32 big-endian bytes as a field element. Returns `None`
    /// when the value is not below the field prime.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Option<Self> {
        let value = Uint256::from_be_bytes(bytes);
        (value < FIELD_MODULUS).then_some(FieldElement(value))
    }

    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Parity of the canonical representative, the basis of the compressed
    /// point tag.
    #[inline]
    pub fn is_odd(self) -> bool {
        !self.0.is_even()
    }

    #[inline]
    pub fn square(self) -> Self {
        self * self
    }

    /// Multiplicative inverse. `None` for zero.
    pub fn invert(self) -> Option<Self> {
        self.0.mod_inverse(FIELD_MODULUS).map(FieldElement)
    }

    /// Modular square root. Since the prime is 3 mod 4 a candidate root is
    /// `self^((p+1)/4)`; it is only valid if it squares back to `self`, so
    /// non-residues return `None`.
    pub fn sqrt(self) -> Option<Self> {
        let exponent = (FIELD_MODULUS + 1u64) >> 2;
        let candidate = FieldElement(pow_mod(self.0, exponent, FIELD_MODULUS));
        (candidate.square() == self).then_some(candidate)
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn add(self, other: FieldElement) -> FieldElement {
        FieldElement(add_mod(self.0, other.0, FIELD_MODULUS))
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn sub(self, other: FieldElement) -> FieldElement {
        FieldElement(sub_mod(self.0, other.0, FIELD_MODULUS))
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn mul(self, other: FieldElement) -> FieldElement {
        FieldElement(mul_mod(self.0, other.0, FIELD_MODULUS))
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        if self.is_zero() {
            self
        } else {
            FieldElement(FIELD_MODULUS - self.0)
        }
    }
}
