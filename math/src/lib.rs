//! Fixed-width unsigned big integers.
//!
//! The [`construct_uint`] macro builds little-endian limb integer types of
//! any width. The widths used by the wallet stack are instantiated here:
//! [`Uint256`] for field elements and scalars, [`Uint512`] as the widening
//! type for 256-bit modular multiplication.

pub mod uint;

pub use uint::TryFromIntError;

construct_uint!(Uint256, 4);
construct_uint!(Uint512, 8);

impl From<Uint256> for Uint512 {
    #[inline]
    fn from(value: Uint256) -> Self {
        let mut limbs = [0u64; Uint512::LIMBS];
        limbs[..Uint256::LIMBS].copy_from_slice(&value.0);
        Uint512(limbs)
    }
}

impl Uint512 {
    /// Truncate to the low 256 bits.
    #[inline]
    pub fn low_u256(self) -> Uint256 {
        let mut limbs = [0u64; Uint256::LIMBS];
        limbs.copy_from_slice(&self.0[..Uint256::LIMBS]);
        Uint256(limbs)
    }
}

impl TryFrom<Uint512> for Uint256 {
    type Error = TryFromIntError;

    #[inline]
    fn try_from(value: Uint512) -> Result<Self, Self::Error> {
        if value.0[Uint256::LIMBS..].iter().any(|&limb| limb != 0) {
            Err(TryFromIntError)
        } else {
            Ok(value.low_u256())
        }
    }
}
