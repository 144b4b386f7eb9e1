//! Length conversion

use crate::error::{CheckError, Result};
use crate::value::Value;

const OPERATION: &str = "length conversion";

/// Convert a value to a length.
///
/// Strings count characters; slices, arrays, byte sequences and maps count
/// elements (a nil slice or map is 0); structs count fields; channels count
/// buffered elements. Numbers are their own length, truncated toward zero, so
/// the length of `5` is `5`. Complex numbers use their real part.
///
/// Timestamps report [`Kind::Struct`](crate::inspect::Kind::Struct) but have
/// no countable fields, so they are rejected like any other unsupported kind.
///
/// # Example
///
/// ```rust
/// use plumbline::convert::to_length;
/// use plumbline::{StructValue, Value};
///
/// assert_eq!(to_length(&Value::from(vec![1, 2, 3])).unwrap(), 3);
/// assert_eq!(to_length(&Value::from(9.9)).unwrap(), 9);
/// assert_eq!(to_length(&Value::from(StructValue::new("P").field("x", 1))).unwrap(), 1);
/// assert!(to_length(&Value::from(true)).is_err());
/// ```
pub fn to_length(value: &Value) -> Result<i64> {
    match value {
        Value::Str(s) => Ok(count(s.chars().count())),
        Value::Bytes(bytes) => Ok(count(bytes.len())),
        Value::Slice(items) => Ok(count(items.as_ref().map_or(0, Vec::len))),
        Value::Array(items) => Ok(count(items.len())),
        Value::Map(map) => Ok(count(map.as_ref().map_or(0, |m| m.len()))),
        Value::Struct(record) => Ok(count(record.len())),
        Value::Time(_) => Err(CheckError::unsupported(OPERATION, value.kind())),
        Value::Int(v) => Ok(*v as i64),
        Value::I8(v) => Ok(i64::from(*v)),
        Value::I16(v) => Ok(i64::from(*v)),
        Value::I32(v) => Ok(i64::from(*v)),
        Value::I64(v) | Value::Duration(v) => Ok(*v),
        Value::Uint(v) => Ok(*v as i64),
        Value::U8(v) => Ok(i64::from(*v)),
        Value::U16(v) => Ok(i64::from(*v)),
        Value::U32(v) => Ok(i64::from(*v)),
        Value::U64(v) => Ok(*v as i64),
        Value::F32(v) => Ok(*v as i64),
        Value::F64(v) => Ok(*v as i64),
        Value::Complex64 { re, .. } => Ok(*re as i64),
        Value::Complex128 { re, .. } => Ok(*re as i64),
        Value::Chan(chan) => match chan {
            Some(chan) => Ok(count(chan.len())),
            None => Err(CheckError::nil(OPERATION)),
        },
        Value::Pointer(inner) | Value::Interface(inner) => match inner {
            Some(inner) => to_length(inner),
            None => Err(CheckError::nil(OPERATION)),
        },
        other => Err(CheckError::unsupported(OPERATION, other.kind())),
    }
}

fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
