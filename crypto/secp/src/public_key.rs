use crate::error::Error;
use crate::field::FieldElement;
use crate::point::{Point, GENERATOR};
use crate::result::Result;
use crate::scalar::Scalar;

/// A secp256k1 public key. Always an affine curve point, never the identity.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct PublicKey {
    x: FieldElement,
    y: FieldElement,
}

impl PublicKey {
    /// Parses a 33-byte SEC1 compressed encoding: a parity tag of `0x02` or
    /// `0x03` followed by the big-endian x coordinate. The y coordinate is
    /// recovered from the curve equation.
    pub fn from_bytes(bytes: &[u8; 33]) -> Result<Self> {
        let want_odd = match bytes[0] {
            0x02 => false,
            0x03 => true,
            _ => return Err(Error::InvalidPublicKey),
        };
        let mut x_bytes = [0u8; 32];
        x_bytes.copy_from_slice(&bytes[1..]);
        let x = FieldElement::from_be_bytes(x_bytes).ok_or(Error::InvalidPublicKey)?;
        let y_squared = x.square() * x + FieldElement::from_u64(7);
        let mut y = y_squared.sqrt().ok_or(Error::InvalidPublicKey)?;
        if y.is_odd() != want_odd {
            y = -y;
        }
        Ok(PublicKey { x, y })
    }

    /// SEC1 compressed encoding.
    pub fn serialize(&self) -> [u8; 33] {
        let mut out = [0u8; 33];
        out[0] = if self.y.is_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&self.x.to_be_bytes());
        out
    }

    /// Adds `tweak * G` to the key. Fails when the tweak is not a valid
    /// scalar or when the sum is the identity; the caller decides whether
    /// to retry with different input.
    pub fn add_exp_tweak(&self, tweak: &[u8; 32]) -> Result<Self> {
        let tweak = Scalar::from_be_bytes(*tweak).map_err(|_| Error::TweakOutOfRange)?;
        let sum = self.point() + *GENERATOR * tweak;
        Self::from_point(sum).ok_or(Error::TweakOutOfRange)
    }

    pub fn point(&self) -> Point {
        Point::Affine { x: self.x, y: self.y }
    }

    pub(crate) fn from_point(point: Point) -> Option<Self> {
        match point {
            Point::Infinity => None,
            Point::Affine { x, y } => Some(PublicKey { x, y }),
        }
    }
}
