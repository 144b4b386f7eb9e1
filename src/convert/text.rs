//! Text and byte conversion

use crate::error::{CheckError, Result};
use crate::inspect::Kind;
use crate::value::Value;

const OPERATION: &str = "text conversion";

/// Convert a value to its text form.
///
/// Strings pass through. Numbers use base-10 formatting; floats use the
/// shortest representation that round-trips, switching to exponent form
/// (`1e+06`) below `1e-4` and from `1e6` up. Byte sequences render as raw
/// text. Other collections, maps, structs and timestamps render as JSON.
///
/// A slice of `u8` values is only recognised as bytes when it has at least one
/// element: an empty one carries no element type and renders as `[]`. Build
/// raw bytes with [`Value::bytes`] to get `""` for the empty case.
///
/// # Example
///
/// ```rust
/// use plumbline::convert::to_text;
/// use plumbline::{MapValue, Value};
///
/// assert_eq!(to_text(&Value::from(12345)).unwrap(), "12345");
/// assert_eq!(to_text(&Value::from(0.5)).unwrap(), "0.5");
/// assert_eq!(to_text(&Value::from(1e21)).unwrap(), "1e+21");
/// assert_eq!(to_text(&Value::Complex128 { re: 1.0, im: -2.0 }).unwrap(), "(1-2i)");
/// assert_eq!(to_text(&Value::bytes("raw")).unwrap(), "raw");
/// assert_eq!(to_text(&Value::bytes(b"")).unwrap(), "");
/// assert_eq!(
///     to_text(&Value::from(MapValue::new().entry("a", true))).unwrap(),
///     r#"{"a":true}"#
/// );
/// ```
pub fn to_text(value: &Value) -> Result<String> {
    match value {
        Value::Str(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int(v) => Ok(v.to_string()),
        Value::I8(v) => Ok(v.to_string()),
        Value::I16(v) => Ok(v.to_string()),
        Value::I32(v) => Ok(v.to_string()),
        Value::I64(v) | Value::Duration(v) => Ok(v.to_string()),
        Value::Uint(v) => Ok(v.to_string()),
        Value::U8(v) => Ok(v.to_string()),
        Value::U16(v) => Ok(v.to_string()),
        Value::U32(v) => Ok(v.to_string()),
        Value::U64(v) => Ok(v.to_string()),
        Value::F32(v) => Ok(format_float(f64::from(*v))),
        Value::F64(v) => Ok(format_float(*v)),
        Value::Complex64 { re, im } => Ok(format_complex(format_float32(*re), format_float32(*im))),
        Value::Complex128 { re, im } => Ok(format_complex(format_float(*re), format_float(*im))),
        Value::Bytes(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
        Value::Slice(Some(items)) | Value::Array(items) => match byte_run(items) {
            Some(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            None => encode_json(value),
        },
        Value::Slice(None) | Value::Map(_) | Value::Struct(_) | Value::Time(_) => encode_json(value),
        Value::Pointer(inner) | Value::Interface(inner) => match inner {
            Some(inner) => to_text(inner),
            None => Err(CheckError::nil(OPERATION)),
        },
        other => Err(CheckError::unsupported(OPERATION, other.kind())),
    }
}

/// Convert a value to bytes: raw bytes for byte sequences, otherwise the
/// UTF-8 encoding of [`to_text`].
pub fn to_bytes(value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::Bytes(bytes) => Ok(bytes.clone()),
        Value::Slice(Some(items)) | Value::Array(items) => match byte_run(items) {
            Some(bytes) => Ok(bytes),
            None => to_text(value).map(String::into_bytes),
        },
        Value::Pointer(Some(inner)) | Value::Interface(Some(inner)) => to_bytes(inner),
        _ => to_text(value).map(String::into_bytes),
    }
}

/// Map keys that have a text form: strings and integers.
pub(crate) fn format_map_key(key: &Value) -> Option<String> {
    match key {
        Value::Str(s) => Some(s.clone()),
        Value::Int(_)
        | Value::I8(_)
        | Value::I16(_)
        | Value::I32(_)
        | Value::I64(_)
        | Value::Uint(_)
        | Value::U8(_)
        | Value::U16(_)
        | Value::U32(_)
        | Value::U64(_) => to_text(key).ok(),
        _ => None,
    }
}

/// A non-empty sequence made only of `u8` elements.
fn byte_run(items: &[Value]) -> Option<Vec<u8>> {
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| match item {
            Value::U8(b) => Some(*b),
            _ => None,
        })
        .collect()
}

fn encode_json(value: &Value) -> Result<String> {
    if let Some(kind) = first_unencodable(value) {
        return Err(CheckError::unsupported(OPERATION, kind));
    }
    serde_json::to_string(value).map_err(|_| CheckError::unsupported(OPERATION, value.kind()))
}

fn first_unencodable(value: &Value) -> Option<Kind> {
    match value {
        Value::Complex64 { .. } | Value::Complex128 { .. } | Value::Chan(_) | Value::Func(_) => {
            Some(value.kind())
        }
        Value::Slice(Some(items)) | Value::Array(items) => items.iter().find_map(first_unencodable),
        Value::Map(Some(map)) => map.iter().find_map(|(k, v)| match format_map_key(k) {
            Some(_) => first_unencodable(v),
            None => Some(k.kind()),
        }),
        Value::Struct(record) => record.fields().find_map(|(_, v)| first_unencodable(v)),
        Value::Pointer(Some(inner)) | Value::Interface(Some(inner)) => first_unencodable(inner),
        _ => None,
    }
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    shortest_with_exponent(&format!("{:e}", v)).unwrap_or_else(|| v.to_string())
}

fn format_float32(v: f32) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    shortest_with_exponent(&format!("{:e}", v)).unwrap_or_else(|| v.to_string())
}

/// Exponent form for decimal exponents below -4 or at least 6, from the
/// shortest scientific rendering (`1.5e7`). `None` means plain notation.
fn shortest_with_exponent(scientific: &str) -> Option<String> {
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;
    if (-4..6).contains(&exponent) {
        return None;
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    Some(format!("{}e{}{:02}", mantissa, sign, exponent.abs()))
}

fn format_complex(re: String, im: String) -> String {
    if im.starts_with('+') || im.starts_with('-') {
        format!("({}{}i)", re, im)
    } else {
        format!("({}+{}i)", re, im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Channel, Function, MapValue, StructValue};

    #[test]
    fn test_integers_and_bools() {
        assert_eq!(to_text(&Value::from(-42_i64)).unwrap(), "-42");
        assert_eq!(to_text(&Value::from(7_u16)).unwrap(), "7");
        assert_eq!(to_text(&Value::from(true)).unwrap(), "true");
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(to_text(&Value::from(3.0)).unwrap(), "3");
        assert_eq!(to_text(&Value::from(123456.0)).unwrap(), "123456");
        assert_eq!(to_text(&Value::from(1234567.0)).unwrap(), "1.234567e+06");
        assert_eq!(to_text(&Value::from(0.0001)).unwrap(), "0.0001");
        assert_eq!(to_text(&Value::from(0.00001)).unwrap(), "1e-05");
        assert_eq!(to_text(&Value::from(f64::NAN)).unwrap(), "NaN");
        assert_eq!(to_text(&Value::from(f64::NEG_INFINITY)).unwrap(), "-Inf");
    }

    #[test]
    fn test_f32_is_widened_before_formatting() {
        assert_eq!(to_text(&Value::from(0.5_f32)).unwrap(), "0.5");
        assert_eq!(to_text(&Value::from(0.1_f32)).unwrap(), "0.10000000149011612");
    }

    #[test]
    fn test_complex_formatting() {
        assert_eq!(
            to_text(&Value::Complex64 { re: 1.5, im: 2.0 }).unwrap(),
            "(1.5+2i)"
        );
        assert_eq!(
            to_text(&Value::Complex128 { re: 0.0, im: f64::INFINITY }).unwrap(),
            "(0+Infi)"
        );
    }

    #[test]
    fn test_byte_sequences_render_raw() {
        assert_eq!(to_text(&Value::from(vec![104_u8, 105])).unwrap(), "hi");
        assert_eq!(to_bytes(&Value::bytes([0xff, 0x00])).unwrap(), vec![0xff, 0x00]);
    }

    #[test]
    fn test_empty_byte_sequences() {
        assert_eq!(to_text(&Value::from(Vec::<u8>::new())).unwrap(), "[]");
        assert_eq!(to_text(&Value::bytes(b"")).unwrap(), "");
        assert_eq!(to_text(&Value::pointer(Value::bytes(Vec::<u8>::new()))).unwrap(), "");
        assert!(to_bytes(&Value::bytes(b"")).unwrap().is_empty());
    }

    #[test]
    fn test_composites_render_as_json() {
        assert_eq!(to_text(&Value::from(vec!["a", "b"])).unwrap(), r#"["a","b"]"#);
        assert_eq!(to_text(&Value::nil_slice()).unwrap(), "null");
        let record = StructValue::new("Point").field("X", 1).field("Y", Value::pointer(2));
        assert_eq!(to_text(&Value::from(record)).unwrap(), r#"{"X":1,"Y":2}"#);
    }

    #[test]
    fn test_pointer_is_followed() {
        assert_eq!(to_text(&Value::pointer(Value::interface("x"))).unwrap(), "x");
        assert!(to_text(&Value::nil_pointer()).unwrap_err().is_unsupported_kind());
    }

    #[test]
    fn test_unencodable_content_fails() {
        let nested = Value::from(vec![Value::from(Channel::new(1, 2))]);
        assert_eq!(
            to_text(&nested),
            Err(CheckError::UnsupportedKind { operation: OPERATION, kind: Kind::Chan })
        );
        let bad_key = MapValue::new().entry(true, 1);
        assert_eq!(
            to_text(&Value::from(bad_key)),
            Err(CheckError::UnsupportedKind { operation: OPERATION, kind: Kind::Bool })
        );
        assert!(to_text(&Value::from(Function::new("f"))).is_err());
        assert!(to_text(&Value::Nil).is_err());
    }

    #[test]
    fn test_timestamp_renders_as_json_string() {
        let t = chrono::DateTime::parse_from_rfc3339("2024-02-03T04:05:06Z").unwrap();
        assert_eq!(to_text(&Value::from(t)).unwrap(), "\"2024-02-03T04:05:06Z\"");
    }
}
