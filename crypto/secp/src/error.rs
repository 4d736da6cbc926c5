use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A 32-byte value is not a usable scalar: at or above the group order,
    /// or zero where zero is not allowed.
    #[error("scalar out of range")]
    InvalidScalar,

    /// A compressed point encoding that does not name a curve point.
    #[error("malformed public key")]
    InvalidPublicKey,

    /// An additive tweak whose application does not yield a valid key.
    /// Callers deriving keys are expected to retry with fresh input.
    #[error("tweak out of range")]
    TweakOutOfRange,
}
