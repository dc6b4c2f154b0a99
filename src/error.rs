//! Error types for loss option records.

use thiserror::Error;

/// Errors raised while building or validating loss options.
///
/// Statically typed construction can never fail; only the dynamic paths
/// (parsing a reduction name, applying keyword arguments, kernel-side
/// precondition checks) produce this error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// A value outside the accepted domain of an argument.
    #[error("Invalid argument: {argument} = {value}, reason: {reason}")]
    InvalidArgument {
        argument: String,
        value: String,
        reason: String,
    },
}

impl OptionsError {
    /// Builds an [`OptionsError::InvalidArgument`] and logs the rejection.
    pub fn invalid_argument(
        argument: impl Into<String>,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        let error = OptionsError::InvalidArgument {
            argument: argument.into(),
            value: value.to_string(),
            reason: reason.into(),
        };
        log::debug!("{error}");
        error
    }

    /// Re-attributes the error to `argument` without logging it again.
    pub fn with_argument(self, argument: impl Into<String>) -> Self {
        match self {
            OptionsError::InvalidArgument { value, reason, .. } => OptionsError::InvalidArgument {
                argument: argument.into(),
                value,
                reason,
            },
        }
    }

    /// Name of the offending argument.
    pub fn argument(&self) -> &str {
        match self {
            OptionsError::InvalidArgument { argument, .. } => argument,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, OptionsError>;
