//! Domain-separated hash-to-scalar used to tweak the root key.
//!
//! The preimage layout and the hash algorithm are compatibility constants
//! shared with the remote MPC signer: the signer applies the identical
//! construction to its distributed root secret, so any deviation here
//! produces child keys the network cannot sign for. Neither is pluggable.
//!
//! The preimage is the raw concatenation `<tag><predecessor_id>,<path>`
//! with no length prefixes between the fields. Two contexts can therefore
//! collide when an identifier itself contains a comma, e.g. `("a,b", "c")`
//! and `("a", "b,c")` hash identically. This layout is inherited from the
//! external protocol and must not be altered; callers own identifier
//! hygiene.

use std::ops::Deref;

use k256::{elliptic_curve::ops::Reduce, Scalar, U256};
use sha3::{Digest, Sha3_256};

/// Domain separation tag mixed into every epsilon preimage.
pub const EPSILON_DERIVATION_PREFIX: &str = "near-mpc-recovery v0.1.0 epsilon derivation:";

/// A scalar tweak derived from a `(predecessor_id, path)` context.
///
/// This type can only be constructed through [`EpsilonScalar::derive`].
/// Implements [`Deref<Target = Scalar>`] for use in point arithmetic.
///
/// The value is a public quantity computed from public inputs; it is not a
/// secret and needs no constant-time handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpsilonScalar(Scalar);

impl Deref for EpsilonScalar {
    type Target = Scalar;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl EpsilonScalar {
    /// Hash a `(predecessor_id, path)` context to a scalar.
    ///
    /// The SHA3-256 digest is read as a big-endian integer and reduced
    /// modulo the curve order before use, so an out-of-range digest can
    /// never reach the point multiplication.
    pub fn derive(predecessor_id: &str, path: &str) -> Self {
        let mut hasher = Sha3_256::new();
        hasher.update(EPSILON_DERIVATION_PREFIX);
        hasher.update(predecessor_id);
        hasher.update(",");
        hasher.update(path);

        Self(<Scalar as Reduce<U256>>::reduce_bytes(&hasher.finalize()))
    }
}
