//! Child numbers: the per-step index of a derivation.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::error::Error;
use crate::result::Result;

/// The index of a particular child key relative to its parent. The top bit
/// marks the derivation as hardened.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Size of a serialized child number.
    pub const BYTE_SIZE: usize = 4;

    /// Hardened derivation flag.
    pub const HARDENED_FLAG: u32 = 1 << 31;

    /// Build a child number from a raw index and a hardened marker. The
    /// index must leave the top bit clear.
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & Self::HARDENED_FLAG == 0 {
            Ok(ChildNumber(if hardened { index | Self::HARDENED_FLAG } else { index }))
        } else {
            Err(Error::ChildNumber)
        }
    }

    pub fn from_bytes(bytes: [u8; Self::BYTE_SIZE]) -> Self {
        ChildNumber(u32::from_be_bytes(bytes))
    }

    pub fn to_bytes(self) -> [u8; Self::BYTE_SIZE] {
        self.0.to_be_bytes()
    }

    /// Index with the hardened flag cleared.
    pub fn index(self) -> u32 {
        self.0 & !Self::HARDENED_FLAG
    }

    pub fn is_hardened(self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }
}

impl From<ChildNumber> for u32 {
    fn from(child_number: ChildNumber) -> u32 {
        child_number.0
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;
        if self.is_hardened() {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    /// Parse a path segment such as `0`, `44'`, or `1h`.
    fn from_str(segment: &str) -> Result<ChildNumber> {
        let (index, hardened) = match segment.strip_suffix(['\'', 'h']) {
            Some(stripped) => (stripped, true),
            None => (segment, false),
        };
        let index = index.parse::<u32>().map_err(|_| Error::ChildNumber)?;
        ChildNumber::new(index, hardened)
    }
}
