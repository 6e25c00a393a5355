//! CLI for deriving MPC-backed child public keys.

mod cli;
mod handlers;

use anyhow::{Error, Result};
use chainsig_common::logging::{self, LoggerConfig};
use clap::Parser;

use crate::handlers::derive_key;

fn main() -> Result<(), Error> {
    logging::init(LoggerConfig::with_base_name("chainsig-cli"));

    let cli = cli::Cli::parse();
    match cli.command {
        cli::Commands::DeriveKey(args) => derive_key::handle_derive_key(args),
    }
}
