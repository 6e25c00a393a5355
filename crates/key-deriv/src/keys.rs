//! Textual codec for secp256k1 public keys in the signing network's format.
//!
//! A key is written as `secp256k1:<base58>`, where the payload is the
//! 64-byte big-endian `x ‖ y` concatenation of an uncompressed curve point.
//! The SEC1 `0x04` tag is not part of the payload; it is reattached when the
//! point is reconstructed in memory and stripped again on output.
//! Coordinates are fixed-width: a value whose natural encoding is shorter
//! than 32 bytes is left-padded with zeros, never truncated.

use std::{fmt, str::FromStr};

use k256::{
    AffinePoint,
    elliptic_curve::{
        generic_array::GenericArray,
        sec1::{FromEncodedPoint, ToEncodedPoint},
    },
    EncodedPoint, ProjectivePoint, PublicKey,
};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::errors::{DecodeError, DerivationError};

/// Key-type prefix of the textual form.
pub const SECP256K1_KEY_PREFIX: &str = "secp256k1:";

/// Length in bytes of the base-58 payload: two 32-byte coordinates, no tag.
pub const UNTAGGED_POINT_LEN: usize = 64;

/// An affine, non-identity point on secp256k1 in the signing network's
/// textual encoding.
///
/// Can only hold a point that passed the curve-membership check, either by
/// parsing a well-formed key string or as the output of derivation.
/// Serializes as its [`Display`](fmt::Display) string.
#[derive(Debug, Clone, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct Secp256k1PublicKey(PublicKey);

impl Secp256k1PublicKey {
    /// Borrow the affine point.
    pub fn as_affine(&self) -> &AffinePoint {
        self.0.as_affine()
    }

    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        self.0.to_projective()
    }
}

impl From<PublicKey> for Secp256k1PublicKey {
    fn from(key: PublicKey) -> Self {
        Self(key)
    }
}

impl fmt::Display for Secp256k1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let point = self.0.to_encoded_point(false);
        // skip the SEC1 tag byte, the textual payload is x ‖ y only
        let payload = bs58::encode(&point.as_bytes()[1..]).into_string();
        write!(f, "{SECP256K1_KEY_PREFIX}{payload}")
    }
}

impl FromStr for Secp256k1PublicKey {
    type Err = DerivationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let payload = s
            .strip_prefix(SECP256K1_KEY_PREFIX)
            .ok_or(DecodeError::MissingKeyTypePrefix)?;
        let bytes = bs58::decode(payload)
            .into_vec()
            .map_err(DecodeError::Base58)?;
        if bytes.len() != UNTAGGED_POINT_LEN {
            return Err(DecodeError::InvalidLength(bytes.len()).into());
        }

        let (x, y) = bytes.split_at(UNTAGGED_POINT_LEN / 2);
        let point = EncodedPoint::from_affine_coordinates(
            GenericArray::from_slice(x),
            GenericArray::from_slice(y),
            false,
        );
        let key = Option::<PublicKey>::from(PublicKey::from_encoded_point(&point))
            .ok_or(DerivationError::PointNotOnCurve)?;

        Ok(Self(key))
    }
}
