use core::fmt;

use crate::error::Error;
use crate::point::GENERATOR;
use crate::public_key::PublicKey;
use crate::result::Result;
use crate::scalar::Scalar;

/// A secp256k1 private key, a nonzero scalar below the group order.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct SecretKey(Scalar);

impl SecretKey {
    /// Parses 32 big-endian bytes. Zero and values at or above the group
    /// order are not valid private keys.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let scalar = Scalar::from_be_bytes(*bytes)?;
        if scalar.is_zero() {
            return Err(Error::InvalidScalar);
        }
        Ok(SecretKey(scalar))
    }

    pub fn secret_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    pub fn public_key(&self) -> PublicKey {
        let point = *GENERATOR * self.0;
        // A scalar in [1, n) always lands on an affine point.
        PublicKey::from_point(point).expect("nonzero multiple of the generator is affine")
    }

    /// Adds `tweak` to the key modulo the group order. Fails when the tweak
    /// is not a valid scalar or when the sum is zero; the caller decides
    /// whether to retry with different input.
    pub fn add_tweak(&self, tweak: &[u8; 32]) -> Result<Self> {
        let tweak = Scalar::from_be_bytes(*tweak).map_err(|_| Error::TweakOutOfRange)?;
        let sum = self.0 + tweak;
        if sum.is_zero() {
            return Err(Error::TweakOutOfRange);
        }
        Ok(SecretKey(sum))
    }
}

// Key material stays out of debug output.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::CURVE_ORDER;
    use vesta_math::Uint256;

    fn hex32(hex: &str) -> [u8; 32] {
        let mut out = [0u8; 32];
        faster_hex::hex_decode(hex.as_bytes(), &mut out).unwrap();
        out
    }

    #[test]
    fn rejects_degenerate_keys() {
        assert_eq!(SecretKey::from_bytes(&[0; 32]), Err(Error::InvalidScalar));
        assert_eq!(SecretKey::from_bytes(&CURVE_ORDER.to_be_bytes()), Err(Error::InvalidScalar));
        assert_eq!(SecretKey::from_bytes(&[0xff; 32]), Err(Error::InvalidScalar));
        let mut one = [0u8; 32];
        one[31] = 1;
        assert!(SecretKey::from_bytes(&one).is_ok());
    }

    #[test]
    fn known_public_key() {
        let key = SecretKey::from_bytes(&hex32(
            "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35",
        ))
        .unwrap();
        let mut expected = [0u8; 33];
        faster_hex::hex_decode(
            b"0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2",
            &mut expected,
        )
        .unwrap();
        assert_eq!(key.public_key().serialize(), expected);
    }

    #[test]
    fn tweak_errors() {
        let key = SecretKey::from_bytes(&hex32(
            "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35",
        ))
        .unwrap();
        assert_eq!(key.add_tweak(&CURVE_ORDER.to_be_bytes()), Err(Error::TweakOutOfRange));

        // Cancelling tweak: key + (n - key) = 0
        let cancel = (CURVE_ORDER - Uint256::from_be_bytes(key.secret_bytes())).to_be_bytes();
        assert_eq!(key.add_tweak(&cancel), Err(Error::TweakOutOfRange));

        let mut five = [0u8; 32];
        five[31] = 5;
        let tweaked = key.add_tweak(&five).unwrap();
        assert_ne!(tweaked, key);
    }
}
