//! Child public key derivation against a fixed root key.
//!
//! The root public key belongs to the MPC signing network; the matching
//! private key exists only as distributed shares on that network. Deriving
//! `root + ε·G` locally yields a key the network can sign for once it
//! applies the same tweak to its shares, so no private scalar is ever
//! materialized on this side.

use k256::{elliptic_curve::Group, ProjectivePoint, PublicKey};

use crate::{epsilon::EpsilonScalar, errors::DerivationError, keys::Secp256k1PublicKey};

/// Derives child public keys from a fixed root public key.
///
/// Each call reads the immutable root and allocates fresh values, so a
/// single instance may be shared freely across threads. Separate instances
/// can target different roots or networks in the same process.
#[derive(Debug, Clone)]
pub struct KeyDeriver {
    root: Secp256k1PublicKey,
}

impl KeyDeriver {
    /// Creates a deriver for the given root public key.
    pub const fn new(root: Secp256k1PublicKey) -> Self {
        Self { root }
    }

    /// The root public key this deriver tweaks.
    pub const fn root(&self) -> &Secp256k1PublicKey {
        &self.root
    }

    /// Derive the child public key for a `(predecessor_id, path)` context.
    ///
    /// Deterministic: identical inputs always produce the identical key.
    /// Errors are never retried internally; only a changed `path` can
    /// recover from [`DerivationError::InfinityResult`].
    pub fn derive_child_key(
        &self,
        predecessor_id: &str,
        path: &str,
    ) -> Result<Secp256k1PublicKey, DerivationError> {
        let epsilon = EpsilonScalar::derive(predecessor_id, path);

        let child = self.root.to_projective() + ProjectivePoint::GENERATOR * *epsilon;
        if bool::from(child.is_identity()) {
            return Err(DerivationError::InfinityResult);
        }

        let key = PublicKey::from_affine(child.to_affine())?;

        Ok(key.into())
    }
}

#[cfg(test)]
mod tests {
    use k256::{
        AffinePoint,
        elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint},
    };
    use proptest::prelude::*;

    use super::*;

    const ROOT_PUBLIC_KEY: &str =
        "secp256k1:4NfTiv3UsGahebgTaHyD9vF8KYKMBnfd6kh94mK6xv8fGBiJB8TBtFMP5WWXz6B89Ac1fbpzPwAvoyQebemHFwx3";

    fn testnet_deriver() -> KeyDeriver {
        KeyDeriver::new(ROOT_PUBLIC_KEY.parse().expect("root key must be valid"))
    }

    // Captured from a verified reference implementation of the signing
    // network's derivation. Any change to the hash, domain tag, or key
    // encoding breaks these and signals a protocol compatibility
    // regression, not a test to update.
    #[test]
    fn test_derivation_matches_signing_network() {
        let child = testnet_deriver()
            .derive_child_key("contract.testnet", "subscriber.testnet")
            .unwrap();

        assert_eq!(
            child.to_string(),
            "secp256k1:4UbbeZBp12Bh8xyWGobnDhjyNVBzp82Fx2niLqMj9XYg3fBZLHcP3QEauCuC8RxE78wY6eggX1o14MNp2SXueAhb",
        );
    }

    #[test]
    fn test_empty_path_derivation() {
        let child = testnet_deriver()
            .derive_child_key("contract.testnet", "")
            .unwrap();

        assert_eq!(
            child.to_string(),
            "secp256k1:4EKWyGWfqSRbuUdoqT8g3mLVCd2dhYox36Xc6hkxfWDT8KxhH7gzDuaEoD2khgnsJahczpeWXEkvgKp63MEzUa22",
        );
    }

    #[test]
    fn test_cross_chain_path_derivation() {
        let child = testnet_deriver()
            .derive_child_key("alice.near", "ethereum-1")
            .unwrap();

        assert_eq!(
            child.to_string(),
            "secp256k1:25hmfotPnXXTz2TMVXobPJB6uDxjLoVyS4Ck1ypxbfnongNWgSiTHuX5uPdjBRUKj4zqHXY4RPGgy8JLRyrT2WTH",
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let deriver = testnet_deriver();

        let first = deriver
            .derive_child_key("contract.testnet", "subscriber.testnet")
            .unwrap();
        let second = deriver
            .derive_child_key("contract.testnet", "subscriber.testnet")
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_derived_key_round_trips_through_text() {
        let child = testnet_deriver()
            .derive_child_key("contract.testnet", "subscriber.testnet")
            .unwrap();

        let reparsed: Secp256k1PublicKey = child.to_string().parse().unwrap();

        assert_eq!(reparsed, child);
        assert_eq!(reparsed.to_string(), child.to_string());
    }

    #[test]
    fn test_derived_point_satisfies_curve_equation() {
        let child = testnet_deriver()
            .derive_child_key("contract.testnet", "subscriber.testnet")
            .unwrap();

        // decoding an uncompressed encoding re-runs the membership check
        let encoded = child.as_affine().to_encoded_point(false);
        let decoded = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded));

        assert_eq!(decoded.as_ref(), Some(child.as_affine()));
    }

    #[test]
    fn test_comma_aliasing_is_inherited_protocol_behavior() {
        // "a,b" + "c" and "a" + "b,c" concatenate to the same preimage.
        // Pinned so nobody "fixes" the separator scheme and breaks
        // compatibility with the signing network.
        let deriver = testnet_deriver();

        assert_eq!(
            deriver.derive_child_key("a,b", "c").unwrap(),
            deriver.derive_child_key("a", "b,c").unwrap(),
        );
    }

    proptest! {
        #[test]
        fn proptest_distinct_paths_give_distinct_keys(
            path_a in "[a-z0-9._-]{1,40}",
            path_b in "[a-z0-9._-]{1,40}",
        ) {
            prop_assume!(path_a != path_b);
            let deriver = testnet_deriver();

            prop_assert_ne!(
                deriver.derive_child_key("contract.testnet", &path_a).unwrap(),
                deriver.derive_child_key("contract.testnet", &path_b).unwrap()
            );
        }

        #[test]
        fn proptest_distinct_predecessors_give_distinct_keys(
            id_a in "[a-z0-9._-]{1,40}",
            id_b in "[a-z0-9._-]{1,40}",
        ) {
            prop_assume!(id_a != id_b);
            let deriver = testnet_deriver();

            prop_assert_ne!(
                deriver.derive_child_key(&id_a, "subscriber.testnet").unwrap(),
                deriver.derive_child_key(&id_b, "subscriber.testnet").unwrap()
            );
        }
    }
}
