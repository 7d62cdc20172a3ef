//! Coalesce - randomized graph contraction engine
//!
//! Coalesce contracts an undirected graph toward its connected components
//! with a round-based, Borůvka-style pairing scheme, and provides a pure
//! force-directed layout for positioning the result on screen.

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Re-export core crates
pub use coalesce_core as core;
pub use coalesce_layout as layout;
pub use common_error as error;

/// Coalesce version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
