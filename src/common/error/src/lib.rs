//! Error types and result aliases for Coalesce.
//!
//! This crate provides the error handling infrastructure shared by every
//! crate in the workspace.

mod error;

pub use error::{CoalesceError, CoalesceResult};
