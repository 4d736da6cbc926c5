//! Trait for private key types usable in extended key derivation.

use crate::error::Error;
use crate::public_key::PublicKey;
use crate::result::Result;
use crate::types::PrivateKeyBytes;

pub trait PrivateKey: Sized {
    /// Public key type corresponding to this private key.
    type PublicKey: PublicKey;

    /// Parse a private key from serialized bytes. Zero and out-of-range
    /// values are rejected.
    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self>;

    /// Serialize the raw private key.
    fn to_bytes(&self) -> PrivateKeyBytes;

    /// Derive a child private key from the left half of the derivation MAC
    /// output: `(self + other) mod n`.
    fn derive_child(&self, other: PrivateKeyBytes) -> Result<Self>;

    /// Public key corresponding to this private key.
    fn public_key(&self) -> Self::PublicKey;
}

impl PrivateKey for vesta_secp::SecretKey {
    type PublicKey = vesta_secp::PublicKey;

    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self> {
        Ok(vesta_secp::SecretKey::from_bytes(bytes)?)
    }

    fn to_bytes(&self) -> PrivateKeyBytes {
        self.secret_bytes()
    }

    fn derive_child(&self, other: PrivateKeyBytes) -> Result<Self> {
        self.add_tweak(&other).map_err(|_| Error::InvalidChildKey)
    }

    fn public_key(&self) -> Self::PublicKey {
        vesta_secp::SecretKey::public_key(self)
    }
}
