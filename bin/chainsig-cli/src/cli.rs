use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chainsig-cli",
    about = "Derive child public keys backed by the MPC signing network",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    DeriveKey(DeriveKeyArgs),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Derive the child public key for a (predecessor, path) pair", version)]
pub(crate) struct DeriveKeyArgs {
    #[arg(long, help = "account id of the entity the key is derived for")]
    pub(crate) predecessor_id: String,

    #[arg(
        long,
        default_value = "",
        help = "caller-chosen derivation path, may be empty"
    )]
    pub(crate) path: String,

    #[arg(long, help = "the path to the params file")]
    pub(crate) params: Option<PathBuf>,

    #[arg(long, help = "root public key override, `secp256k1:<base58>`")]
    pub(crate) root_key: Option<String>,
}
