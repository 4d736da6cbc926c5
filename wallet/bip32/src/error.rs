use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("base58 encoding error: {0}")]
    Base58Encode(bs58::encode::Error),

    #[error("base58 decoding error: {0}")]
    Base58Decode(bs58::decode::Error),

    /// Index with the hardened bit already set passed where a raw index is
    /// expected, or an unparsable path segment.
    #[error("invalid child number")]
    ChildNumber,

    #[error(transparent)]
    Crypto(#[from] vesta_secp::Error),

    #[error("decoding error")]
    Decode,

    #[error("decoded extended key length is {0}, expected {1}")]
    DecodeLength(usize, usize),

    /// Derivation from a key already at the maximum depth of 255.
    #[error("maximum derivation depth exceeded")]
    DepthOverflow,

    #[error("hardened derivation requires a private key")]
    HardenedDerivationRequiresPrivateKey,

    /// The HMAC output for this index does not yield a usable key. The
    /// caller may retry with the next index; this crate never retries on
    /// its own.
    #[error("derived child key is invalid for this index")]
    InvalidChildKey,

    /// The seed hash does not yield a usable master key.
    #[error("seed produced an invalid master key")]
    InvalidMasterKey,

    #[error("unknown extended key prefix")]
    Prefix,

    #[error("seed length invalid")]
    SeedLength,

    #[error("{0}")]
    Hmac(hmac::digest::InvalidLength),

    #[error("{0}")]
    Utf8Error(std::str::Utf8Error),

    #[error("{0}")]
    String(String),
}

impl From<bs58::encode::Error> for Error {
    fn from(err: bs58::encode::Error) -> Error {
        Error::Base58Encode(err)
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(err: bs58::decode::Error) -> Error {
        Error::Base58Decode(err)
    }
}

impl From<hmac::digest::InvalidLength> for Error {
    fn from(err: hmac::digest::InvalidLength) -> Error {
        Error::Hmac(err)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Error {
        Error::Utf8Error(err)
    }
}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Error {
        Error::Decode
    }
}
