//! # Plumbline
//!
//! Runtime value inspection, comparison and format validation.
//!
//! Plumbline checks loosely-typed input: configuration trees decoded from
//! JSON, request parameters, records assembled at runtime. Every check takes
//! anything that converts into a [`Value`] and answers a plain question:
//! is it nil, is it empty, is it greater, does it contain, is it a valid
//! email, CPF, private IP, timestamp.
//!
//! ## Layers
//!
//! - [`inspect`]: the kind of a value, nil detection and pointer unwrapping.
//! - [`convert`]: conversion to a number, text, bytes, a length or a
//!   timestamp. Conversions fail with a [`CheckError`] on kinds they do not
//!   support.
//! - [`check`]: the predicates, built on the two layers above.
//! - [`predicate`]: combinators for building reusable rules from checks.
//!
//! ## Quick Example
//!
//! ```rust
//! use plumbline::{contains, is_cpf, is_empty, is_length_greater_than, values, none_empty};
//! use plumbline::{MapValue, StructValue, Value};
//!
//! let user = Value::from(
//!     StructValue::new("User")
//!         .field("name", "Ana Souza")
//!         .field("document", "891.595.290-16")
//!         .field("roles", vec!["admin", "billing"]),
//! );
//!
//! assert!(contains(&user, "Ana Souza").unwrap());
//! assert!(is_cpf("891.595.290-16").unwrap());
//! assert!(is_length_greater_than("Ana Souza", 3).unwrap());
//! assert!(is_empty(MapValue::new()));
//! assert!(none_empty(values!["a", 1, vec![0]]));
//! ```
//!
//! ## Failures
//!
//! A check answering `false` is never an error. Checks that convert their
//! input return [`Result<bool>`]; the error means the input had a shape the
//! check cannot handle (a struct compared numerically, a nil pointer
//! dereferenced, a string that is no known timestamp format) and should be
//! treated as a programming error.
//!
//! ```rust
//! use plumbline::{is_greater_than, is_before, StructValue};
//!
//! assert!(is_greater_than(StructValue::new("S"), 1).unwrap_err().is_unsupported_kind());
//! assert!(is_before("not a date", "2024-01-01").unwrap_err().is_parse());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `debug` event whenever a conversion fails.
//! - `proptest`: `Arbitrary` for [`Value`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod convert;
pub mod error;
pub mod inspect;
pub mod predicate;
pub mod testing;
pub mod value;

// Re-exports
pub use check::*;
pub use error::{CheckError, Result};
pub use inspect::Kind;
pub use value::{Channel, Function, MapValue, StructValue, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::check::*;
    pub use crate::convert::{to_length, to_numeric, to_text, to_timestamp};
    pub use crate::error::{CheckError, Result};
    pub use crate::inspect::Kind;
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::value::{Channel, Function, MapValue, StructValue, Value};
    pub use crate::values;
}
