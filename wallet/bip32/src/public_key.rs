//! Trait for public key types usable in extended key derivation.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::error::Error;
use crate::result::Result;
use crate::types::{KeyFingerprint, PrivateKeyBytes, PublicKeyBytes};

pub trait PublicKey: Sized {
    /// Parse a public key from its SEC1 compressed encoding.
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self>;

    /// Serialize this public key as SEC1 compressed bytes.
    fn to_bytes(&self) -> PublicKeyBytes;

    /// Derive a child public key from the left half of the derivation MAC
    /// output: `other * G + self`.
    fn derive_child(&self, other: PrivateKeyBytes) -> Result<Self>;

    /// First 4 bytes of `RIPEMD160(SHA256(compressed_key))`.
    fn fingerprint(&self) -> KeyFingerprint {
        let digest = Ripemd160::digest(Sha256::digest(self.to_bytes()));
        digest[..4].try_into().expect("RIPEMD-160 digest is 20 bytes")
    }
}

impl PublicKey for vesta_secp::PublicKey {
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self> {
        Ok(vesta_secp::PublicKey::from_bytes(&bytes)?)
    }

    fn to_bytes(&self) -> PublicKeyBytes {
        self.serialize()
    }

    fn derive_child(&self, other: PrivateKeyBytes) -> Result<Self> {
        self.add_exp_tweak(&other).map_err(|_| Error::InvalidChildKey)
    }
}
