//! Type aliases shared across the extended key modules.

use hmac::Hmac;
use sha2::Sha512;

/// Size of private key material and chain codes in bytes.
pub const KEY_SIZE: usize = 32;

/// Chain code: the derivation entropy carried alongside both private and
/// public extended keys.
pub type ChainCode = [u8; KEY_SIZE];

/// Derivation depth, the number of steps from the master key.
pub type Depth = u8;

/// Truncated hash of a public key identifying the parent of a child key.
pub type KeyFingerprint = [u8; 4];

/// Integer form of an extended key prefix (a.k.a. "version").
pub type Version = u32;

/// HMAC with SHA-512, the child derivation MAC.
pub type HmacSha512 = Hmac<Sha512>;

/// Serialized private key bytes.
pub type PrivateKeyBytes = [u8; KEY_SIZE];

/// Serialized public key bytes (SEC1 compressed, tag byte included).
pub type PublicKeyBytes = [u8; KEY_SIZE + 1];
