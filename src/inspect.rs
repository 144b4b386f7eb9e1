//! Runtime value inspection
//!
//! Classifies a [`Value`] by its dynamic [`Kind`] and provides uniform nil
//! detection for the kinds that have a nil state. None of these operations
//! fail.
//!
//! # Example
//!
//! ```rust
//! use plumbline::inspect::{is_nil_like, kind_of, resolve, Kind};
//! use plumbline::Value;
//!
//! let boxed = Value::pointer(Value::pointer(42_i64));
//! assert_eq!(kind_of(&boxed), Kind::Pointer);
//! assert_eq!(kind_of(resolve(&boxed)), Kind::Int64);
//!
//! assert!(is_nil_like(&Value::Nil));
//! assert!(is_nil_like(&Value::nil_slice()));
//! assert!(!is_nil_like(&Value::from(Vec::<i32>::new())));
//! ```

use std::fmt;

use crate::value::Value;

/// Dynamic classification of a value's shape.
///
/// `Int` and `Uint` are the platform-width integers (`isize`/`usize`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// True absence of a value.
    Invalid,
    /// `bool`.
    Bool,
    /// `isize`.
    Int,
    /// `i8`.
    Int8,
    /// `i16`.
    Int16,
    /// `i32`.
    Int32,
    /// `i64`, including durations.
    Int64,
    /// `usize`.
    Uint,
    /// `u8`.
    Uint8,
    /// `u16`.
    Uint16,
    /// `u32`.
    Uint32,
    /// `u64`.
    Uint64,
    /// `f32`.
    Float32,
    /// `f64`.
    Float64,
    /// Complex number with `f32` parts.
    Complex64,
    /// Complex number with `f64` parts.
    Complex128,
    /// UTF-8 string.
    String,
    /// Fixed-length sequence.
    Array,
    /// Growable sequence, including byte sequences.
    Slice,
    /// Key/value map.
    Map,
    /// Named record, including timestamps.
    Struct,
    /// Pointer to another value.
    Pointer,
    /// Interface box around another value.
    Interface,
    /// Channel.
    Chan,
    /// Function.
    Func,
}

impl Kind {
    /// Lower-case name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Complex64 => "complex64",
            Kind::Complex128 => "complex128",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Pointer => "ptr",
            Kind::Interface => "interface",
            Kind::Chan => "chan",
            Kind::Func => "func",
        }
    }

    /// Signed integer family.
    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            Kind::Int | Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64
        )
    }

    /// Unsigned integer family.
    pub fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            Kind::Uint | Kind::Uint8 | Kind::Uint16 | Kind::Uint32 | Kind::Uint64
        )
    }

    /// Floating-point family.
    pub fn is_float(self) -> bool {
        matches!(self, Kind::Float32 | Kind::Float64)
    }

    /// Complex family.
    pub fn is_complex(self) -> bool {
        matches!(self, Kind::Complex64 | Kind::Complex128)
    }

    /// Kinds that carry a nil state.
    pub fn is_nilable(self) -> bool {
        matches!(
            self,
            Kind::Pointer | Kind::Interface | Kind::Map | Kind::Slice | Kind::Chan | Kind::Func
        )
    }

    /// Pointer or interface: kinds that wrap another value.
    pub fn is_indirect(self) -> bool {
        matches!(self, Kind::Pointer | Kind::Interface)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a value. Never fails; [`Value::Nil`] is [`Kind::Invalid`].
pub fn kind_of(value: &Value) -> Kind {
    match value {
        Value::Nil => Kind::Invalid,
        Value::Bool(_) => Kind::Bool,
        Value::Int(_) => Kind::Int,
        Value::I8(_) => Kind::Int8,
        Value::I16(_) => Kind::Int16,
        Value::I32(_) => Kind::Int32,
        Value::I64(_) | Value::Duration(_) => Kind::Int64,
        Value::Uint(_) => Kind::Uint,
        Value::U8(_) => Kind::Uint8,
        Value::U16(_) => Kind::Uint16,
        Value::U32(_) => Kind::Uint32,
        Value::U64(_) => Kind::Uint64,
        Value::F32(_) => Kind::Float32,
        Value::F64(_) => Kind::Float64,
        Value::Complex64 { .. } => Kind::Complex64,
        Value::Complex128 { .. } => Kind::Complex128,
        Value::Str(_) => Kind::String,
        Value::Bytes(_) | Value::Slice(_) => Kind::Slice,
        Value::Array(_) => Kind::Array,
        Value::Map(_) => Kind::Map,
        Value::Struct(_) | Value::Time(_) => Kind::Struct,
        Value::Pointer(_) => Kind::Pointer,
        Value::Interface(_) => Kind::Interface,
        Value::Chan(_) => Kind::Chan,
        Value::Func(_) => Kind::Func,
    }
}

/// Nil detection across kinds.
///
/// True for [`Value::Nil`] and for a nilable kind whose nil flag is set.
/// Zero numbers, empty strings and empty non-nil collections are not nil.
pub fn is_nil_like(value: &Value) -> bool {
    match value {
        Value::Nil => true,
        Value::Pointer(inner) | Value::Interface(inner) => inner.is_none(),
        Value::Slice(items) => items.is_none(),
        Value::Map(map) => map.is_none(),
        Value::Chan(chan) => chan.is_none(),
        Value::Func(func) => func.is_none(),
        _ => false,
    }
}

/// Remove one layer of pointer or interface indirection.
///
/// Returns `None` when the value is not indirect or the indirection is nil.
pub fn unwrap_once(value: &Value) -> Option<&Value> {
    match value {
        Value::Pointer(Some(inner)) | Value::Interface(Some(inner)) => Some(inner),
        _ => None,
    }
}

/// Walk a pointer/interface chain down to the first non-indirect value, or to
/// the nil indirection that ends it.
pub fn resolve(value: &Value) -> &Value {
    let mut current = value;
    while let Some(inner) = unwrap_once(current) {
        current = inner;
    }
    current
}
