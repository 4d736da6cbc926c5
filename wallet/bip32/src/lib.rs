//! BIP32 hierarchical deterministic key derivation over the in-workspace
//! secp256k1 engine, with a BIP-44 account path layer.
//!
//! Extended keys are immutable values: derivation always produces a new
//! key, and a private key can always be neutered into its public
//! counterpart, never the reverse.

pub use vesta_secp as secp;
pub use vesta_secp::{PublicKey as SecpPublicKey, SecretKey};

mod private_key;
mod public_key;
mod xkey;
mod xprivate_key;
mod xpublic_key;

mod address_type;
mod attrs;
pub mod bip44;
mod child_number;
mod derivation_path;
mod error;
mod prefix;
mod result;
pub mod types;

pub use address_type::AddressType;
pub use attrs::ExtendedKeyAttrs;
pub use child_number::ChildNumber;
pub use derivation_path::DerivationPath;
pub use error::Error;
pub use prefix::Prefix;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use result::Result;
pub use types::*;
pub use xkey::ExtendedKey;
pub use xprivate_key::ExtendedPrivateKey;
pub use xpublic_key::ExtendedPublicKey;

/// Extended private key over the workspace secp256k1 engine.
pub type XPrv = ExtendedPrivateKey<SecretKey>;

/// Extended public key over the workspace secp256k1 engine.
pub type XPub = ExtendedPublicKey<SecpPublicKey>;
