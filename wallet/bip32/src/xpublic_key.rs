//! Extended public keys

use core::str::FromStr;

use hmac::Mac;

use crate::attrs::ExtendedKeyAttrs;
use crate::child_number::ChildNumber;
use crate::derivation_path::DerivationPath;
use crate::error::Error;
use crate::prefix::Prefix;
use crate::private_key::PrivateKey;
use crate::public_key::PublicKey;
use crate::result::Result;
use crate::types::{HmacSha512, KeyFingerprint, PublicKeyBytes, KEY_SIZE};
use crate::xkey::ExtendedKey;
use crate::xprivate_key::ExtendedPrivateKey;

/// Extended public keys derived using BIP32.
///
/// Generic around a [`PublicKey`] type. Supports normal (non-hardened)
/// child derivation only; hardened steps need the private counterpart.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct ExtendedPublicKey<K: PublicKey> {
    /// Derived public key
    public_key: K,

    /// Extended key attributes.
    attrs: ExtendedKeyAttrs,
}

impl<K> ExtendedPublicKey<K>
where
    K: PublicKey,
{
    /// Obtain the non-extended public key value `K`.
    pub fn public_key(&self) -> &K {
        &self.public_key
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    /// Compute a 4-byte key fingerprint for this extended public key.
    pub fn fingerprint(&self) -> KeyFingerprint {
        self.public_key().fingerprint()
    }

    /// Derive a child key for a particular [`ChildNumber`].
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        if child_number.is_hardened() {
            return Err(Error::HardenedDerivationRequiresPrivateKey);
        }

        let depth = self.attrs.depth.checked_add(1).ok_or(Error::DepthOverflow)?;

        let mut hmac = HmacSha512::new_from_slice(&self.attrs.chain_code).map_err(Error::Hmac)?;

        hmac.update(&self.public_key.to_bytes());
        hmac.update(&child_number.to_bytes());

        let result = hmac.finalize().into_bytes();
        let (child_key, chain_code) = result.split_at(KEY_SIZE);
        let public_key = self.public_key.derive_child(child_key.try_into()?)?;

        let attrs = ExtendedKeyAttrs {
            parent_fingerprint: self.public_key.fingerprint(),
            child_number,
            chain_code: chain_code.try_into()?,
            depth,
        };

        Ok(ExtendedPublicKey { public_key, attrs })
    }

    /// Derive a key at the given path below this key.
    pub fn derive_path(self, path: &DerivationPath) -> Result<Self> {
        path.iter().try_fold(self, |key, child_num| key.derive_child(child_num))
    }

    /// Serialize the raw public key as a byte array (SEC1 compressed).
    pub fn to_bytes(&self) -> PublicKeyBytes {
        self.public_key.to_bytes()
    }

    /// Serialize this key as an [`ExtendedKey`].
    pub fn to_extended_key(&self, prefix: Prefix) -> ExtendedKey {
        ExtendedKey { prefix, attrs: self.attrs.clone(), key_bytes: self.to_bytes() }
    }

    pub fn to_string(&self, prefix: Option<Prefix>) -> String {
        let prefix = prefix.unwrap_or(Prefix::XPUB);
        self.to_extended_key(prefix).to_string()
    }

    pub fn from_public_key(public_key: K, attrs: &ExtendedKeyAttrs) -> Self {
        ExtendedPublicKey { public_key, attrs: attrs.clone() }
    }
}

impl<K> From<&ExtendedPrivateKey<K>> for ExtendedPublicKey<K::PublicKey>
where
    K: PrivateKey,
{
    fn from(xprv: &ExtendedPrivateKey<K>) -> ExtendedPublicKey<K::PublicKey> {
        ExtendedPublicKey { public_key: xprv.private_key().public_key(), attrs: xprv.attrs().clone() }
    }
}

impl<K> FromStr for ExtendedPublicKey<K>
where
    K: PublicKey,
{
    type Err = Error;

    fn from_str(xpub: &str) -> Result<Self> {
        ExtendedKey::from_str(xpub)?.try_into()
    }
}

impl<K> TryFrom<ExtendedKey> for ExtendedPublicKey<K>
where
    K: PublicKey,
{
    type Error = Error;

    fn try_from(extended_key: ExtendedKey) -> Result<ExtendedPublicKey<K>> {
        if extended_key.prefix.is_public() {
            Ok(ExtendedPublicKey { public_key: K::from_bytes(extended_key.key_bytes)?, attrs: extended_key.attrs.clone() })
        } else {
            Err(Error::Crypto(vesta_secp::Error::InvalidPublicKey))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faster_hex::hex_decode_fallback;
    use vesta_secp::{PublicKey as SecpPublicKey, SecretKey};

    type XPrv = ExtendedPrivateKey<SecretKey>;
    type XPub = ExtendedPublicKey<SecpPublicKey>;

    macro_rules! hex {
        ($str: expr) => {{
            let len = $str.as_bytes().len() / 2;
            let mut dst = vec![0; len];
            dst.resize(len, 0);
            hex_decode_fallback($str.as_bytes(), &mut dst);
            dst
        }
        [..]};
    }

    const VECTOR_1_SEED: &str = "000102030405060708090a0b0c0d0e0f";

    #[test]
    fn private_and_public_derivation_commute() {
        let master = XPrv::new(&hex!(VECTOR_1_SEED)).unwrap();
        // Hardened first step so the public walk starts below it
        let account = master.derive_child(ChildNumber::new(0, true).unwrap()).unwrap();

        let path = "m/1/2/3".parse::<DerivationPath>().unwrap();
        let via_private = account.clone().derive_path(&path).unwrap().public_key();
        let via_public = account.public_key().derive_path(&path).unwrap();

        assert_eq!(via_private, via_public);
        assert_eq!(via_private.to_bytes(), via_public.to_bytes());
    }

    #[test]
    fn hardened_derivation_needs_private_key() {
        let master = XPrv::new(&hex!(VECTOR_1_SEED)).unwrap();
        let xpub = master.public_key();
        assert!(matches!(
            xpub.derive_child(ChildNumber::new(0, true).unwrap()),
            Err(Error::HardenedDerivationRequiresPrivateKey)
        ));
        // Normal derivation still works
        assert!(master.public_key().derive_child(ChildNumber(0)).is_ok());
    }

    #[test]
    fn string_round_trip() {
        let master = XPrv::new(&hex!(VECTOR_1_SEED)).unwrap();
        let xpub = master.public_key();
        let decoded = xpub.to_string(None).parse::<XPub>().unwrap();
        assert_eq!(decoded, xpub);
        assert_eq!(decoded.fingerprint(), xpub.fingerprint());
    }

    #[test]
    fn xprv_string_does_not_parse_as_xpub() {
        let master = XPrv::new(&hex!(VECTOR_1_SEED)).unwrap();
        let xprv_str = master.to_string(Prefix::XPRV);
        assert!(xprv_str.parse::<XPub>().is_err());
    }
}
