//! Numeric conversion

use crate::error::{CheckError, Result};
use crate::value::Value;

const OPERATION: &str = "numeric conversion";

/// Convert a value to `f64`.
///
/// Integers widen, floats pass through, durations yield nanoseconds and
/// complex numbers yield the sum of their parts. Strings are parsed without
/// locale rules; an unparsable string is a [`CheckError::Parse`].
///
/// # Example
///
/// ```rust
/// use plumbline::convert::to_numeric;
/// use plumbline::Value;
///
/// assert_eq!(to_numeric(&Value::from(3_u8)).unwrap(), 3.0);
/// assert_eq!(to_numeric(&Value::Complex128 { re: 1.0, im: 2.0 }).unwrap(), 3.0);
/// assert_eq!(to_numeric(&Value::from(Some(-4))).unwrap(), -4.0);
/// assert!(to_numeric(&Value::from(true)).is_err());
/// assert!(to_numeric(&Value::from(None::<i32>)).is_err());
/// ```
pub fn to_numeric(value: &Value) -> Result<f64> {
    match value {
        Value::Str(s) => s.parse::<f64>().map_err(|_| CheckError::parse(OPERATION, s.as_str())),
        Value::Int(v) => Ok(*v as f64),
        Value::I8(v) => Ok(f64::from(*v)),
        Value::I16(v) => Ok(f64::from(*v)),
        Value::I32(v) => Ok(f64::from(*v)),
        Value::I64(v) | Value::Duration(v) => Ok(*v as f64),
        Value::Uint(v) => Ok(*v as f64),
        Value::U8(v) => Ok(f64::from(*v)),
        Value::U16(v) => Ok(f64::from(*v)),
        Value::U32(v) => Ok(f64::from(*v)),
        Value::U64(v) => Ok(*v as f64),
        Value::F32(v) => Ok(f64::from(*v)),
        Value::F64(v) => Ok(*v),
        Value::Complex64 { re, im } => Ok(f64::from(*re) + f64::from(*im)),
        Value::Complex128 { re, im } => Ok(re + im),
        Value::Pointer(inner) | Value::Interface(inner) => match inner {
            Some(inner) => to_numeric(inner),
            None => Err(CheckError::nil(OPERATION)),
        },
        other => Err(CheckError::unsupported(OPERATION, other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::Kind;
    use crate::value::{MapValue, StructValue};

    #[test]
    fn test_integers_widen() {
        assert_eq!(to_numeric(&Value::from(-7_i8)).unwrap(), -7.0);
        assert_eq!(to_numeric(&Value::from(u64::MAX)).unwrap(), u64::MAX as f64);
        assert_eq!(to_numeric(&Value::from(12_usize)).unwrap(), 12.0);
    }

    #[test]
    fn test_strings_parse() {
        assert_eq!(to_numeric(&Value::from("1e3")).unwrap(), 1000.0);
        assert_eq!(to_numeric(&Value::from("-0.25")).unwrap(), -0.25);
        let err = to_numeric(&Value::from("ten")).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_pointer_chain_is_followed() {
        let value = Value::interface(Value::pointer(Value::pointer(2.5_f32)));
        assert_eq!(to_numeric(&value).unwrap(), 2.5);
    }

    #[test]
    fn test_nil_indirection_fails() {
        let err = to_numeric(&Value::pointer(Value::nil_pointer())).unwrap_err();
        assert_eq!(err, CheckError::NilOperand { operation: OPERATION });
    }

    #[test]
    fn test_unsupported_kinds_fail() {
        let cases = [
            (Value::from(true), Kind::Bool),
            (Value::from(vec![1]), Kind::Slice),
            (Value::from(MapValue::new()), Kind::Map),
            (Value::from(StructValue::new("S")), Kind::Struct),
            (Value::Nil, Kind::Invalid),
        ];
        for (value, kind) in cases {
            assert_eq!(
                to_numeric(&value),
                Err(CheckError::UnsupportedKind { operation: OPERATION, kind })
            );
        }
    }
}
