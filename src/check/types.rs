//! Type checks
//!
//! Two flavours live here. The `is_*_type` checks compare the value's
//! [`Kind`] exactly, never look through pointers, and cannot fail. The
//! parse-based checks (`is_int`, `is_json`, `is_duration`, ...) render the
//! value as text first and ask whether that text parses as the named type.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Map;

use super::string::{compile, text};
use crate::convert::{to_bytes, to_timestamp};
use crate::error::Result;
use crate::inspect::Kind;
use crate::value::Value;

macro_rules! kind_checks {
    ($($(#[$doc:meta])* $name:ident => $kind:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(value: impl Into<Value>) -> bool {
                value.into().kind() == Kind::$kind
            }
        )*
    };
}

kind_checks! {
    /// Kind is `int` (`isize`).
    ///
    /// ```rust
    /// use plumbline::{is_int_type, Value};
    ///
    /// assert!(is_int_type(3_isize));
    /// assert!(!is_int_type(3_i64));
    /// assert!(!is_int_type(Value::pointer(3_isize)));
    /// ```
    is_int_type => Int;
    /// Kind is `int8`.
    is_int8_type => Int8;
    /// Kind is `int16`.
    is_int16_type => Int16;
    /// Kind is `int32`.
    is_int32_type => Int32;
    /// Kind is `int64`. Durations have this kind.
    is_int64_type => Int64;
    /// Kind is `uint` (`usize`).
    is_uint_type => Uint;
    /// Kind is `uint8`.
    is_uint8_type => Uint8;
    /// Kind is `uint16`.
    is_uint16_type => Uint16;
    /// Kind is `uint32`.
    is_uint32_type => Uint32;
    /// Kind is `uint64`.
    is_uint64_type => Uint64;
    /// Kind is `float32`.
    is_float32_type => Float32;
    /// Kind is `float64`.
    is_float64_type => Float64;
    /// Kind is `bool`.
    is_bool_type => Bool;
    /// Kind is `string`.
    is_string_type => String;
    /// Kind is `map`, nil or not.
    is_map_type => Map;
    /// Kind is `struct`. Timestamps have this kind.
    is_struct_type => Struct;
    /// Kind is `slice`. Byte sequences have this kind.
    is_slice_type => Slice;
    /// Kind is `array`.
    is_array_type => Array;
    /// Kind is `ptr`.
    is_pointer_type => Pointer;
    /// Kind is `func`.
    is_func_type => Func;
    /// Kind is `chan`.
    is_chan_type => Chan;
}

/// Kind is `slice` or `array`.
pub fn is_slice_or_array_type(value: impl Into<Value>) -> bool {
    matches!(value.into().kind(), Kind::Slice | Kind::Array)
}

/// The value is a timestamp.
pub fn is_time_type(value: impl Into<Value>) -> bool {
    matches!(value.into(), Value::Time(_))
}

/// The value is a duration.
pub fn is_duration_type(value: impl Into<Value>) -> bool {
    matches!(value.into(), Value::Duration(_))
}

/// The value is a byte sequence: raw bytes, or a non-empty slice whose
/// elements are all `u8`.
///
/// ```rust
/// use plumbline::{is_bytes_type, Value};
///
/// assert!(is_bytes_type(Value::bytes("abc")));
/// assert!(is_bytes_type(vec![1_u8, 2]));
/// assert!(!is_bytes_type(vec![1_u16, 2]));
/// assert!(!is_bytes_type("abc"));
/// ```
pub fn is_bytes_type(value: impl Into<Value>) -> bool {
    match value.into() {
        Value::Bytes(_) => true,
        Value::Slice(Some(items)) => {
            !items.is_empty() && items.iter().all(|item| matches!(item, Value::U8(_)))
        }
        _ => false,
    }
}

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^[-+]?(?:(?:\d+(?:\.\d*)?|\.\d+)(?:ns|us|µs|μs|ms|s|m|h))+$")
});
static BYTE_UNIT: LazyLock<Regex> = LazyLock::new(|| compile(r"^(\d+)(B|KB|MB|GB|TB|PB)$"));

const BOOL_LITERALS: [&str; 12] = [
    "1", "t", "T", "TRUE", "true", "True", "0", "f", "F", "FALSE", "false", "False",
];

/// Text form is a JSON object or a JSON array.
///
/// # Example
///
/// ```rust
/// use plumbline::is_json;
///
/// assert!(is_json(r#"{"a": [1, 2]}"#).unwrap());
/// assert!(is_json("[]").unwrap());
/// assert!(!is_json("42").unwrap());
/// assert!(!is_json("{a: 1}").unwrap());
/// ```
pub fn is_json(value: impl Into<Value>) -> Result<bool> {
    let value = value.into();
    Ok(is_map(&value)? || is_slice(&value)?)
}

/// Text form is a JSON object. Maps and structs always are.
pub fn is_map(value: impl Into<Value>) -> Result<bool> {
    let bytes = to_bytes(&value.into())?;
    Ok(serde_json::from_slice::<Map<String, serde_json::Value>>(&bytes).is_ok())
}

/// Text form is a JSON array.
pub fn is_slice(value: impl Into<Value>) -> Result<bool> {
    let bytes = to_bytes(&value.into())?;
    Ok(serde_json::from_slice::<Vec<serde_json::Value>>(&bytes).is_ok())
}

/// Text form is a JSON array of objects.
///
/// ```rust
/// use plumbline::is_slice_of_maps;
///
/// assert!(is_slice_of_maps(r#"[{"id": 1}, {}]"#).unwrap());
/// assert!(!is_slice_of_maps("[1]").unwrap());
/// ```
pub fn is_slice_of_maps(value: impl Into<Value>) -> Result<bool> {
    let bytes = to_bytes(&value.into())?;
    Ok(serde_json::from_slice::<Vec<Map<String, serde_json::Value>>>(&bytes).is_ok())
}

/// Text form is a base-10 `i64`, optionally signed.
pub fn is_int(value: impl Into<Value>) -> Result<bool> {
    Ok(text(value)?.parse::<i64>().is_ok())
}

/// Text form is one of `1 t T TRUE true True 0 f F FALSE false False`.
pub fn is_bool(value: impl Into<Value>) -> Result<bool> {
    let s = text(value)?;
    Ok(BOOL_LITERALS.contains(&s.as_str()))
}

/// Text form parses as an `f64`.
pub fn is_float(value: impl Into<Value>) -> Result<bool> {
    Ok(text(value)?.parse::<f64>().is_ok())
}

/// The value converts to a timestamp. Never fails: unsupported kinds and
/// unrecognised formats are both `false`.
pub fn is_time(value: impl Into<Value>) -> bool {
    to_timestamp(&value.into()).is_ok()
}

/// Text form is a duration literal: a signed sequence of decimal numbers
/// each followed by a unit (`ns`, `us`, `µs`, `ms`, `s`, `m`, `h`), or `0`.
///
/// ```rust
/// use plumbline::is_duration;
///
/// assert!(is_duration("1h30m").unwrap());
/// assert!(is_duration("-1.5s").unwrap());
/// assert!(is_duration("0").unwrap());
/// assert!(!is_duration("90").unwrap());
/// assert!(!is_duration("1d").unwrap());
/// ```
pub fn is_duration(value: impl Into<Value>) -> Result<bool> {
    let s = text(value)?;
    Ok(matches!(s.as_str(), "0" | "+0" | "-0") || DURATION.is_match(&s))
}

/// Text form is a whole number followed by `B`, `KB`, `MB`, `GB`, `TB` or
/// `PB`.
pub fn is_byte_unit(value: impl Into<Value>) -> Result<bool> {
    Ok(BYTE_UNIT.is_match(&text(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Channel, Function, MapValue, StructValue};

    #[test]
    fn test_integer_kinds_are_exact() {
        assert!(is_int8_type(1_i8));
        assert!(is_int16_type(1_i16));
        assert!(is_int32_type(1));
        assert!(is_int64_type(1_i64));
        assert!(is_int64_type(Value::Duration(5)));
        assert!(is_uint_type(1_usize));
        assert!(is_uint8_type(1_u8));
        assert!(is_uint16_type(1_u16));
        assert!(is_uint32_type(1_u32));
        assert!(is_uint64_type(1_u64));
        assert!(!is_int64_type(1_u64));
        assert!(!is_uint32_type(1_i32));
    }

    #[test]
    fn test_other_kinds() {
        assert!(is_float32_type(1.0_f32));
        assert!(is_float64_type(1.0));
        assert!(is_bool_type(false));
        assert!(is_string_type(""));
        assert!(is_map_type(Value::nil_map()));
        assert!(is_struct_type(StructValue::new("S")));
        assert!(is_slice_type(Value::nil_slice()));
        assert!(is_array_type(Value::array([1])));
        assert!(is_slice_or_array_type(vec![1]));
        assert!(is_slice_or_array_type(Value::array([1])));
        assert!(is_pointer_type(Value::nil_pointer()));
        assert!(is_func_type(Function::new("f")));
        assert!(is_chan_type(Channel::new(0, 0)));
    }

    #[test]
    fn test_pointers_are_not_unwrapped() {
        assert!(!is_string_type(Value::pointer("x")));
        assert!(!is_map_type(Value::interface(MapValue::new())));
        assert!(!is_int32_type(Some(1)));
    }

    #[test]
    fn test_time_and_duration_types() {
        assert!(is_time_type(chrono::Utc::now()));
        assert!(is_struct_type(chrono::Utc::now()));
        assert!(!is_time_type("2024-01-01"));
        assert!(is_duration_type(std::time::Duration::from_secs(1)));
        assert!(!is_duration_type(1_i64));
    }

    #[test]
    fn test_json_shapes() {
        assert!(is_map(MapValue::new().entry("a", 1)).unwrap());
        assert!(is_map(StructValue::new("S").field("x", vec![1])).unwrap());
        assert!(is_slice(vec!["a"]).unwrap());
        assert!(!is_slice("{}").unwrap());
        assert!(is_json(Value::pointer("[1,2]")).unwrap());
        assert!(!is_json("").unwrap());
        assert!(is_slice_of_maps(vec![MapValue::new().entry("k", "v")]).unwrap());
        assert!(is_map(Function::new("f")).is_err());
    }

    #[test]
    fn test_parsed_scalars() {
        assert!(is_int("-42").unwrap());
        assert!(is_int(7_u8).unwrap());
        assert!(!is_int("4.2").unwrap());
        assert!(!is_int("9223372036854775808").unwrap());
        assert!(is_float("4.2").unwrap());
        assert!(is_float("1e-9").unwrap());
        assert!(!is_float("four").unwrap());
        assert!(is_bool("T").unwrap());
        assert!(is_bool(true).unwrap());
        assert!(is_bool(0).unwrap());
        assert!(!is_bool("yes").unwrap());
        assert!(!is_bool("tRUE").unwrap());
    }

    #[test]
    fn test_is_time_never_fails() {
        assert!(is_time("2024-01-01"));
        assert!(is_time(1_700_000_000_000_i64));
        assert!(!is_time("2024-13-01"));
        assert!(!is_time(vec![1]));
        assert!(!is_time(Value::nil_pointer()));
    }

    #[test]
    fn test_durations() {
        for ok in ["300ms", "2h45m", "1.5h", ".5s", "5.s", "+10us", "3µs", "1ns"] {
            assert!(is_duration(ok).unwrap(), "{}", ok);
        }
        for bad in ["", "s", "1", "1 h", "1hh", "-", "1.2.3s"] {
            assert!(!is_duration(bad).unwrap(), "{}", bad);
        }
    }

    #[test]
    fn test_byte_units() {
        assert!(is_byte_unit("512MB").unwrap());
        assert!(is_byte_unit("1B").unwrap());
        assert!(!is_byte_unit("1.5GB").unwrap());
        assert!(!is_byte_unit("10 KB").unwrap());
        assert!(!is_byte_unit("10kb").unwrap());
    }
}
