//! This crate contains the parameters describing the MPC signing network
//! that backs derived keys.
//!
//! These are deployment facts rather than tunables: a deriver configured
//! with a different root key produces child keys the network cannot sign
//! for. Keeping them as explicit data (instead of module-level constants in
//! the derivation crate) lets one process derive against several networks
//! at once and lets tests substitute their own vectors.

pub mod default;
pub mod mpc;
