//! Derives a child public key for a `(predecessor, path)` pair and prints it.
//!
//! This uses the same derivation as the remote signing network, so the
//! network can sign for whatever key this command outputs.

use std::fs;

use anyhow::{Context, Result};
use chainsig_key_deriv::{KeyDeriver, Secp256k1PublicKey};
use chainsig_params::mpc::MpcParams;
use tracing::info;

use crate::cli::DeriveKeyArgs;

/// Handles the derive-key command.
pub(crate) fn handle_derive_key(args: DeriveKeyArgs) -> Result<()> {
    let params = match &args.params {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read params file {}", path.display()))?;
            toml::from_str::<MpcParams>(&raw).context("failed to parse params file")?
        }
        None => MpcParams::default(),
    };

    let root = match &args.root_key {
        Some(key) => key.parse::<Secp256k1PublicKey>()?,
        None => params.root_public_key.clone(),
    };

    let deriver = KeyDeriver::new(root);

    info!(
        signer_contract = %params.signer_contract,
        root_key = %deriver.root(),
        predecessor_id = %args.predecessor_id,
        path = %args.path,
        "deriving child public key"
    );

    let child = deriver.derive_child_key(&args.predecessor_id, &args.path)?;

    println!("{child}");

    Ok(())
}
