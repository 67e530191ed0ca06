//! Layered error types
//!
//! [`DomainError`] is the closed set of application-level failure kinds.
//! [`Error`] wraps it together with the two generic precondition failures
//! (invalid argument, index out of range) so callers can match narrowly on a
//! single kind or broadly on "any domain error".

use std::fmt;

use thiserror::Error;

/// Domain-specific failure kinds, each with a fixed message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainError {
    /// The caller lacks the privileges required for the operation
    InsufficientPrivileges,

    /// A data type could not be converted into another
    ConversionFailure,

    /// A concrete value could not be converted
    ValueConversionFailure,

    /// An object does not expose the requested interface
    InterfaceCastFailure,
}

impl DomainError {
    /// Every kind, in declaration order
    pub const ALL: [DomainError; 4] = [
        DomainError::InsufficientPrivileges,
        DomainError::ConversionFailure,
        DomainError::ValueConversionFailure,
        DomainError::InterfaceCastFailure,
    ];

    /// Stable identifier of the kind
    pub fn name(&self) -> &'static str {
        match self {
            DomainError::InsufficientPrivileges => "InsufficientPrivileges",
            DomainError::ConversionFailure => "ConversionFailure",
            DomainError::ValueConversionFailure => "ValueConversionFailure",
            DomainError::InterfaceCastFailure => "InterfaceCastFailure",
        }
    }

    /// Fixed human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            DomainError::InsufficientPrivileges => {
                "insufficient privileges to perform the operation"
            }
            DomainError::ConversionFailure => "data type conversion failed",
            DomainError::ValueConversionFailure => "unable to convert value",
            DomainError::InterfaceCastFailure => "unable to cast to interface",
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for DomainError {}

/// Errors raised by this crate and by code built on top of it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Domain-specific failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Precondition violation on an argument
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument
        reason: String,
    },

    /// Indexed access past the current size
    #[error("index {index} is out of range for array of size {size}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The array size at the time of access
        size: usize,
    },
}

impl Error {
    /// Build an [`Error::InvalidArgument`]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// True for any [`DomainError`] kind
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }

    /// The domain kind, if this is a domain error
    pub fn domain_kind(&self) -> Option<DomainError> {
        match self {
            Error::Domain(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Result type for this crate
pub type Result<T> = std::result::Result<T, Error>;
