//! The MPC network parameter set consumed by derivers and binaries.

use chainsig_key_deriv::Secp256k1PublicKey;
use serde::{Deserialize, Serialize};

use crate::default::{SIGNER_CONTRACT, TESTNET_ROOT_PUBLIC_KEY};

/// Identity of one MPC signing network deployment.
///
/// The `root_public_key` is the point all child keys are tweaked from and
/// `signer_contract` is the on-chain account the session layer addresses
/// sign requests to. Both must describe the same deployment, otherwise
/// signatures produced by the network will never verify against the keys
/// derived here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MpcParams {
    /// On-chain account id of the signing network's entry-point contract.
    pub signer_contract: String,

    /// Root public key of the network's distributed signing key.
    pub root_public_key: Secp256k1PublicKey,
}

impl Default for MpcParams {
    fn default() -> Self {
        Self {
            signer_contract: SIGNER_CONTRACT.to_string(),
            root_public_key: TESTNET_ROOT_PUBLIC_KEY.clone(),
        }
    }
}
