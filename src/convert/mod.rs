//! Conversion primitives
//!
//! Every check that compares, measures or formats a value goes through one of
//! these conversions. Each accepts a fixed allow-list of kinds, looks through
//! pointers and interfaces one layer at a time, and fails with a
//! [`CheckError`](crate::CheckError) for anything else, including a nil
//! indirection.
//!
//! | conversion            | accepts                                                      |
//! |-----------------------|--------------------------------------------------------------|
//! | [`to_numeric`]        | integers, floats, complex (re + im), durations, numeric text |
//! | [`to_text`]           | strings, integers, floats, complex, bools, collections, structs |
//! | [`to_length`]         | strings, collections, structs, numbers, complex, channels    |
//! | [`to_timestamp`]      | timestamps, numbers (epoch milliseconds), formatted text     |
//!
//! # Example
//!
//! ```rust
//! use plumbline::convert::{to_length, to_numeric, to_text};
//! use plumbline::Value;
//!
//! assert_eq!(to_numeric(&Value::from("2.5")).unwrap(), 2.5);
//! assert_eq!(to_text(&Value::from(vec![1, 2])).unwrap(), "[1,2]");
//! assert_eq!(to_length(&Value::from("héllo")).unwrap(), 5);
//! assert_eq!(to_length(&Value::from(7)).unwrap(), 7);
//! ```

mod length;
mod numeric;
mod text;
mod time;

pub use length::to_length;
pub use numeric::to_numeric;
pub use text::{to_bytes, to_text};
pub use time::{to_calendar_date, to_timestamp, TimeLayout, Timestamp};

pub(crate) use text::format_map_key;
pub(crate) use time::{now, today};
