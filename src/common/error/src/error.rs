//! Core error types for Coalesce.

use thiserror::Error;

/// Result type alias using `CoalesceError`.
pub type CoalesceResult<T> = std::result::Result<T, CoalesceError>;

/// Core error type for Coalesce operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoalesceError {
    /// Graph construction or generation error.
    #[error("GraphError: {0}")]
    GraphError(String),

    /// Contraction engine error (invalid merge, broken group state).
    #[error("ContractionError: {0}")]
    ContractionError(String),

    /// Layout computation error.
    #[error("LayoutError: {0}")]
    LayoutError(String),

    /// Invalid value provided.
    #[error("ValueError: {0}")]
    ValueError(String),

    /// Invalid parameter provided.
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),

    /// Internal error (bug in Coalesce).
    #[error("InternalError: {0}")]
    InternalError(String),

    /// IO error.
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl CoalesceError {
    /// Create a new `GraphError`.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        Self::GraphError(msg.into())
    }

    /// Create a new `ContractionError`.
    pub fn contraction<S: Into<String>>(msg: S) -> Self {
        Self::ContractionError(msg.into())
    }

    /// Create a new `LayoutError`.
    pub fn layout<S: Into<String>>(msg: S) -> Self {
        Self::LayoutError(msg.into())
    }

    /// Create a new `ValueError`.
    pub fn value_error<S: Into<String>>(msg: S) -> Self {
        Self::ValueError(msg.into())
    }

    /// Create a new `InvalidParameter` error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a new `InternalError`.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }
}

/// Ensure a condition holds, returning a `ContractionError` if not.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return Err($crate::CoalesceError::ContractionError($msg.to_string()));
        }
    };
    ($cond:expr, $variant:ident: $($msg:tt)*) => {
        if !$cond {
            return Err($crate::CoalesceError::$variant(format!($($msg)*)));
        }
    };
}

/// Return early with a `ValueError`.
#[macro_export]
macro_rules! value_err {
    ($($arg:tt)*) => {
        return Err($crate::CoalesceError::ValueError(format!($($arg)*)))
    };
}
