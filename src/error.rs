//! Errors raised by conversions and the checks built on them
//!
//! Only the reflection-driven conversion path can fail. A check answering
//! `false` is a legitimate answer, never an error.

use std::error::Error as StdError;
use std::fmt;

use crate::inspect::Kind;

/// Result alias used by every fallible conversion and check.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Failure raised when a value cannot be converted for a check.
///
/// Callers should treat these as programming errors: the value handed to the
/// check has a shape the check does not support.
///
/// # Example
///
/// ```rust
/// use plumbline::{is_greater_than, CheckError, Kind};
///
/// let err = is_greater_than(true, 1).unwrap_err();
/// assert!(err.is_unsupported_kind());
/// assert_eq!(
///     err,
///     CheckError::UnsupportedKind { operation: "numeric conversion", kind: Kind::Bool }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The value's kind is outside the operation's allow-list.
    UnsupportedKind {
        /// Operation that rejected the value.
        operation: &'static str,
        /// Kind of the rejected value.
        kind: Kind,
    },
    /// A nil value (nil pointer, nil interface or absent value) reached an
    /// operation that has to look through it.
    NilOperand {
        /// Operation that rejected the value.
        operation: &'static str,
    },
    /// A string operand did not match any accepted format.
    Parse {
        /// Operation that rejected the value.
        operation: &'static str,
        /// The input as received.
        input: String,
    },
}

impl CheckError {
    pub(crate) fn unsupported(operation: &'static str, kind: Kind) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, %kind, "unsupported kind");
        CheckError::UnsupportedKind { operation, kind }
    }

    pub(crate) fn nil(operation: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, "nil operand");
        CheckError::NilOperand { operation }
    }

    pub(crate) fn parse(operation: &'static str, input: impl Into<String>) -> Self {
        let input = input.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, input = %input, "unrecognized format");
        CheckError::Parse { operation, input }
    }

    /// True for [`CheckError::UnsupportedKind`] and its nil flavour
    /// [`CheckError::NilOperand`].
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(
            self,
            CheckError::UnsupportedKind { .. } | CheckError::NilOperand { .. }
        )
    }

    /// True for [`CheckError::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, CheckError::Parse { .. })
    }

    /// Name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            CheckError::UnsupportedKind { operation, .. }
            | CheckError::NilOperand { operation }
            | CheckError::Parse { operation, .. } => operation,
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::UnsupportedKind { operation, kind } => {
                write!(f, "{}: kind `{}` is not supported", operation, kind)
            }
            CheckError::NilOperand { operation } => {
                write!(f, "{}: value is nil", operation)
            }
            CheckError::Parse { operation, input } => {
                write!(f, "{}: unknown format \"{}\"", operation, input)
            }
        }
    }
}

impl StdError for CheckError {}
