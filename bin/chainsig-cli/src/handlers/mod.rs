//! Handlers for each CLI command.

pub(crate) mod derive_key;
