//! Error types for LightQ

use std::panic::Location;
use thiserror::Error;

/// Errors raised by state-vector, observable and differentiation routines
///
/// Every variant records the source file and line of the check that failed,
/// so a message reads like `[lightq-state/src/state_vector.rs][Line:120]: ...`.
/// No operation recovers locally: a failure aborts the current call before any
/// amplitude is written and is handed back to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuantumError {
    /// Malformed input: wrong wire or parameter count, bad matrix shape,
    /// non-power-of-two data, out-of-range wire, mismatched buffer sizes.
    #[error("[{file}][Line:{line}]: Error in lightq: {message}")]
    Validation {
        message: String,
        file: &'static str,
        line: u32,
    },

    /// Unrecognised gate or observable name, or a path with no implementation
    #[error("[{file}][Line:{line}]: Not implemented: {message}")]
    NotImplemented {
        message: String,
        file: &'static str,
        line: u32,
    },
}

impl QuantumError {
    /// Create a validation error located at the caller
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self::Validation {
            message: message.into(),
            file: location.file(),
            line: location.line(),
        }
    }

    /// Create a not-implemented error located at the caller
    #[track_caller]
    pub fn not_implemented(message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self::NotImplemented {
            message: message.into(),
            file: location.file(),
            line: location.line(),
        }
    }

    /// Whether this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Whether this is a not-implemented error
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    /// The bare message, without location prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } | Self::NotImplemented { message, .. } => message,
        }
    }
}

/// Result type for LightQ operations
pub type Result<T> = std::result::Result<T, QuantumError>;

/// Return a validation error from the enclosing function unless `cond` holds
///
/// ```
/// use lightq_core::{validate, Result};
///
/// fn check(len: usize) -> Result<()> {
///     validate!(len.is_power_of_two(), "length {} is not a power of two", len);
///     Ok(())
/// }
/// assert!(check(8).is_ok());
/// assert!(check(6).is_err());
/// ```
#[macro_export]
macro_rules! validate {
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            return Err($crate::QuantumError::validation(format!($($arg)+)));
        }
    };
}

/// Return a not-implemented error from the enclosing function
#[macro_export]
macro_rules! not_implemented {
    ($($arg:tt)+) => {
        return Err($crate::QuantumError::not_implemented(format!($($arg)+)))
    };
}
