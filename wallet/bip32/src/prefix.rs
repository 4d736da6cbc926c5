//! Extended key prefixes, the Base58-visible "version" of a serialized key.

use core::fmt::{self, Display};
use core::str;

use crate::error::Error;
use crate::result::Result;
use crate::types::Version;

/// Prefix of a serialized extended key, e.g. `xprv` or `xpub`, together
/// with the 4-byte version it encodes to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Prefix {
    chars: [u8; Self::LENGTH],
    version: Version,
}

impl Prefix {
    /// Mainnet extended private key.
    pub const XPRV: Self = Self::from_parts_unchecked("xprv", 0x0488ADE4);

    /// Mainnet extended public key.
    pub const XPUB: Self = Self::from_parts_unchecked("xpub", 0x0488B21E);

    /// Length of a prefix string in characters.
    pub const LENGTH: usize = 4;

    /// Build a prefix from its string form and version. The string must be
    /// exactly [`Self::LENGTH`] ASCII alphanumeric characters; callers are
    /// expected to have run [`Self::validate_str`] first.
    pub(crate) const fn from_parts_unchecked(chars: &str, version: Version) -> Self {
        let bytes = chars.as_bytes();
        Prefix { chars: [bytes[0], bytes[1], bytes[2], bytes[3]], version }
    }

    pub fn as_str(&self) -> &str {
        // Validated as ASCII on construction
        str::from_utf8(&self.chars).unwrap_or_default()
    }

    pub fn version(self) -> Version {
        self.version
    }

    /// Big-endian encoding of the version, the first 4 serialized bytes.
    pub fn to_bytes(self) -> [u8; 4] {
        self.version.to_be_bytes()
    }

    pub fn is_private(self) -> bool {
        self.chars[1..] == *b"prv"
    }

    pub fn is_public(self) -> bool {
        self.chars[1..] == *b"pub"
    }

    pub(crate) fn validate_str(s: &str) -> Result<&str> {
        if s.len() != Self::LENGTH || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::Prefix);
        }
        Ok(s)
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Prefix;

    #[test]
    fn standard_prefixes() {
        assert_eq!(Prefix::XPRV.as_str(), "xprv");
        assert_eq!(Prefix::XPRV.version(), 0x0488ADE4);
        assert!(Prefix::XPRV.is_private());
        assert!(!Prefix::XPRV.is_public());

        assert_eq!(Prefix::XPUB.as_str(), "xpub");
        assert_eq!(Prefix::XPUB.version(), 0x0488B21E);
        assert!(Prefix::XPUB.is_public());
        assert_eq!(Prefix::XPUB.to_bytes(), [0x04, 0x88, 0xB2, 0x1E]);
    }

    #[test]
    fn validation() {
        assert!(Prefix::validate_str("xprv").is_ok());
        assert!(Prefix::validate_str("abcde").is_err());
        assert!(Prefix::validate_str("ab!d").is_err());
    }
}
