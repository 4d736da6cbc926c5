use core::fmt::{self, Display};

/// BIP-44 change-level branch: external receive addresses or internal
/// change addresses.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AddressType {
    Receive = 0,
    Change,
}

impl AddressType {
    pub fn index(&self) -> u32 {
        match self {
            Self::Receive => 0,
            Self::Change => 1,
        }
    }
}

impl Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Receive => "Receive",
            Self::Change => "Change",
        })
    }
}
