//! Crate includes reusable utils for binaries that handle common behavior,
//! such as initializing the tracing framework.

pub mod logging;

// Re-export tracing crate for convenience.
pub use tracing;
