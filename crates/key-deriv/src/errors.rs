//! Error types for key decoding and child-key derivation.

use crate::keys::{SECP256K1_KEY_PREFIX, UNTAGGED_POINT_LEN};

/// Errors produced while decoding the textual form of a public key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The string does not carry the `secp256k1:` key-type prefix.
    #[error("public key must start with `{SECP256K1_KEY_PREFIX}`")]
    MissingKeyTypePrefix,

    /// The payload contains characters outside the base-58 alphabet.
    #[error("invalid base-58 payload: {0}")]
    Base58(#[from] bs58::decode::Error),

    /// The decoded payload is not the expected `x ‖ y` concatenation.
    #[error("expected a {UNTAGGED_POINT_LEN}-byte point payload, got {0} bytes")]
    InvalidLength(usize),
}

/// Errors produced while deriving a child public key.
///
/// The variants stay distinct so that callers can tell a bad root-key
/// configuration apart from a derivation degeneracy when alerting.
#[derive(Debug, thiserror::Error)]
pub enum DerivationError {
    /// The textual key failed to decode.
    #[error("malformed public key: {0}")]
    Decode(#[from] DecodeError),

    /// The decoded coordinates do not satisfy the curve equation.
    #[error("point is not on the secp256k1 curve")]
    PointNotOnCurve,

    /// The derived child is the point at infinity. Re-deriving with the same
    /// inputs reproduces this; only a different path can recover.
    #[error("derived child key is the point at infinity")]
    InfinityResult,

    /// The underlying curve library reported a failure.
    #[error("secp256k1 arithmetic failed: {0}")]
    Arithmetic(#[from] k256::elliptic_curve::Error),
}
