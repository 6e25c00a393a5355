//! Deterministic child-key derivation for an MPC signing network.
//!
//! This crate maps a fixed secp256k1 root public key and a caller-supplied
//! `(predecessor_id, path)` context to a child public key that the remote
//! signing network can produce signatures for, without any private key
//! material ever existing locally. The derivation is `child = root + ε·G`,
//! where `ε` is a domain-separated SHA3-256 hash of the context reduced
//! modulo the curve order.
//!
//! # Usage
//!
//! ```rust,ignore
//! use chainsig_key_deriv::{KeyDeriver, Secp256k1PublicKey};
//!
//! let root: Secp256k1PublicKey = "secp256k1:<base58>".parse()?;
//! let deriver = KeyDeriver::new(root);
//!
//! let child = deriver.derive_child_key("contract.testnet", "subscriber.testnet")?;
//! println!("{child}");
//! ```
//!
//! The hash algorithm, curve, domain tag, and key encoding are protocol
//! compatibility constants fixed by the external network; substituting any
//! of them silently breaks interoperability with the remote signer. They
//! are exposed as named constants, not parameters.

use serde as _;

pub mod derive;
pub mod epsilon;
pub mod errors;
pub mod keys;

pub use derive::KeyDeriver;
pub use epsilon::{EPSILON_DERIVATION_PREFIX, EpsilonScalar};
pub use errors::{DecodeError, DerivationError};
pub use keys::{SECP256K1_KEY_PREFIX, Secp256k1PublicKey};
