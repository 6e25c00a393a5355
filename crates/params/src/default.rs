//! Default parameter values, wired for the public testnet deployment.

use std::sync::LazyLock;

use chainsig_key_deriv::Secp256k1PublicKey;

/// Account id of the signing network's entry-point contract on testnet.
pub const SIGNER_CONTRACT: &str = "v1.signer-prod.testnet";

/// Textual root public key of the testnet signing network.
pub const ROOT_PUBLIC_KEY: &str =
    "secp256k1:4NfTiv3UsGahebgTaHyD9vF8KYKMBnfd6kh94mK6xv8fGBiJB8TBtFMP5WWXz6B89Ac1fbpzPwAvoyQebemHFwx3";

/// The testnet root public key, parsed once.
pub static TESTNET_ROOT_PUBLIC_KEY: LazyLock<Secp256k1PublicKey> =
    LazyLock::new(|| ROOT_PUBLIC_KEY.parse().expect("valid root public key"));
