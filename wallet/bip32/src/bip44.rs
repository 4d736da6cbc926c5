//! BIP-44 multi-account hierarchy: `m/purpose'/coin_type'/account'/change/index`.

use crate::address_type::AddressType;
use crate::child_number::ChildNumber;
use crate::derivation_path::DerivationPath;
use crate::result::Result;

/// Legacy P2PKH accounts.
pub const PURPOSE_BIP44: u32 = 44;
/// SegWit wrapped in P2SH (P2SH-P2WPKH) accounts.
pub const PURPOSE_BIP49: u32 = 49;
/// Native SegWit (P2WPKH) accounts.
pub const PURPOSE_BIP84: u32 = 84;
/// Taproot (P2TR) accounts.
pub const PURPOSE_BIP86: u32 = 86;

/// SLIP-44 registered coin types.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CoinType {
    Bitcoin = 0,
    BitcoinTestnet = 1,
    Litecoin = 2,
    Dogecoin = 3,
    Ethereum = 60,
}

impl From<CoinType> for u32 {
    fn from(coin_type: CoinType) -> u32 {
        coin_type as u32
    }
}

/// Account-level path `m/purpose'/coin_type'/account'`.
pub fn account_path(purpose: u32, coin_type: CoinType, account: u32) -> Result<DerivationPath> {
    let mut path = DerivationPath::default();
    path.push(ChildNumber::new(purpose, true)?);
    path.push(ChildNumber::new(coin_type.into(), true)?);
    path.push(ChildNumber::new(account, true)?);
    Ok(path)
}

/// Address-level path `m/purpose'/coin_type'/account'/change/index`.
pub fn address_path(
    purpose: u32,
    coin_type: CoinType,
    account: u32,
    address_type: AddressType,
    index: u32,
) -> Result<DerivationPath> {
    let mut path = account_path(purpose, coin_type, account)?;
    path.push(ChildNumber::new(address_type.index(), false)?);
    path.push(ChildNumber::new(index, false)?);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::Prefix;
    use crate::xprivate_key::ExtendedPrivateKey;
    use vesta_secp::SecretKey;

    type XPrv = ExtendedPrivateKey<SecretKey>;

    #[test]
    fn canonical_paths() {
        let account = account_path(PURPOSE_BIP44, CoinType::Bitcoin, 0).unwrap();
        assert_eq!(account.to_string(), "m/44'/0'/0'");

        let address = address_path(PURPOSE_BIP44, CoinType::Ethereum, 0, AddressType::Receive, 0).unwrap();
        assert_eq!(address.to_string(), "m/44'/60'/0'/0/0");

        let change = address_path(PURPOSE_BIP84, CoinType::BitcoinTestnet, 2, AddressType::Change, 5).unwrap();
        assert_eq!(change.to_string(), "m/84'/1'/2'/1/5");
    }

    #[test]
    fn ethereum_address_derivation_is_reproducible() {
        let seed = [0x5a; 32];
        let path = address_path(PURPOSE_BIP44, CoinType::Ethereum, 0, AddressType::Receive, 0).unwrap();

        let first = XPrv::new(seed).unwrap().derive_path(&path).unwrap();
        let second = XPrv::new(seed).unwrap().derive_path(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(Prefix::XPRV).as_str(), second.to_string(Prefix::XPRV).as_str());
        assert_eq!(first.attrs().depth, 5);

        // Account-level public key plus the two normal steps lands on the
        // same leaf as the full private walk.
        let account = XPrv::new(seed).unwrap().derive_path(&account_path(PURPOSE_BIP44, CoinType::Ethereum, 0).unwrap()).unwrap();
        let leaf_path = "m/0/0".parse::<crate::DerivationPath>().unwrap();
        let via_public = account.public_key().derive_path(&leaf_path).unwrap();
        assert_eq!(via_public.to_bytes(), first.public_key().to_bytes());
    }
}
