//! Nilness and emptiness
//!
//! Nil is the narrow notion from [`is_nil_like`]: an absent value or a
//! nilable kind with its nil flag set. Empty is wider: every nil value is
//! empty, and so is a blank string, a zero-length collection, or any other
//! value equal to its kind's zero value.

use crate::inspect::{is_nil_like, unwrap_once};
use crate::value::Value;

/// True when the value is nil.
///
/// # Example
///
/// ```rust
/// use plumbline::{is_nil, Value};
///
/// assert!(is_nil(None::<i32>));
/// assert!(is_nil(Value::nil_slice()));
/// assert!(!is_nil(Vec::<i32>::new()));
/// assert!(!is_nil(0));
/// ```
pub fn is_nil(value: impl Into<Value>) -> bool {
    is_nil_like(&value.into())
}

/// Negation of [`is_nil`].
pub fn is_not_nil(value: impl Into<Value>) -> bool {
    !is_nil(value)
}

/// True when every value is nil. An empty list is vacuously true.
///
/// ```rust
/// use plumbline::{all_nil, values};
///
/// assert!(all_nil(values![None::<u8>, ()]));
/// assert!(!all_nil(values![None::<u8>, 1]));
/// ```
pub fn all_nil<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    values.into_iter().all(|v| is_nil(v))
}

/// True when no value is nil.
pub fn none_nil<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    !values.into_iter().any(|v| is_nil(v))
}

/// True when the value is nil or holds its kind's empty/zero value.
///
/// One layer of pointer or interface is looked through, so a pointer to an
/// empty string is empty. Strings are trimmed before the test.
///
/// # Example
///
/// ```rust
/// use plumbline::{is_empty, StructValue, Value};
///
/// assert!(is_empty("   "));
/// assert!(is_empty(Vec::<i32>::new()));
/// assert!(is_empty(0.0));
/// assert!(is_empty(Value::pointer("")));
/// assert!(is_empty(StructValue::new("Point").field("x", 0)));
/// assert!(!is_empty(" a "));
/// ```
pub fn is_empty(value: impl Into<Value>) -> bool {
    empty(&value.into())
}

fn empty(value: &Value) -> bool {
    if is_nil_like(value) {
        return true;
    }
    let value = unwrap_once(value).unwrap_or(value);
    match value {
        Value::Str(s) => s.trim().is_empty(),
        Value::Bytes(bytes) => bytes.is_empty(),
        Value::Slice(Some(items)) | Value::Array(items) => items.is_empty(),
        Value::Map(Some(map)) => map.is_empty(),
        other => other.is_zero(),
    }
}

/// Negation of [`is_empty`].
pub fn is_not_empty(value: impl Into<Value>) -> bool {
    !is_empty(value)
}

/// True when every value is empty. An empty list is vacuously true.
pub fn all_empty<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    values.into_iter().all(|v| is_empty(v))
}

/// True when no value is empty.
pub fn none_empty<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    !values.into_iter().any(|v| is_empty(v))
}

/// True when the value is nil or empty.
pub fn is_nil_or_empty(value: impl Into<Value>) -> bool {
    let value = value.into();
    is_nil_like(&value) || empty(&value)
}

/// Negation of [`is_nil_or_empty`].
pub fn is_not_nil_or_empty(value: impl Into<Value>) -> bool {
    !is_nil_or_empty(value)
}

/// True when every value is nil or empty.
pub fn all_nil_or_empty<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    values.into_iter().all(|v| is_nil_or_empty(v))
}

/// True when no value is nil or empty.
pub fn none_nil_or_empty<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    !values.into_iter().any(|v| is_nil_or_empty(v))
}

/// The pointee of `value`, or `fallback` when it is absent.
///
/// ```rust
/// use plumbline::if_nil_returns;
///
/// let port: Option<u16> = None;
/// assert_eq!(if_nil_returns(port, 8080), 8080);
/// assert_eq!(if_nil_returns(Some(443), 8080), 443);
/// ```
pub fn if_nil_returns<T>(value: Option<T>, fallback: T) -> T {
    value.unwrap_or(fallback)
}

/// `value` itself, or `fallback` when [`is_empty`] holds for it.
///
/// ```rust
/// use plumbline::if_empty_returns;
///
/// assert_eq!(if_empty_returns("  ", "anonymous"), "anonymous");
/// assert_eq!(if_empty_returns("alice", "anonymous"), "alice");
/// assert_eq!(if_empty_returns(0, 10), 10);
/// ```
pub fn if_empty_returns<T>(value: T, fallback: T) -> T
where
    T: Clone + Into<Value>,
{
    if is_empty(value.clone()) {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Channel, Function, MapValue, StructValue};
    use crate::values;

    #[test]
    fn test_nil_across_nilable_kinds() {
        assert!(is_nil(Value::Nil));
        assert!(is_nil(Value::nil_pointer()));
        assert!(is_nil(Value::Interface(None)));
        assert!(is_nil(Value::nil_map()));
        assert!(is_nil(Value::Chan(None)));
        assert!(is_nil(Value::Func(None)));
    }

    #[test]
    fn test_zero_values_are_not_nil() {
        assert!(is_not_nil(0));
        assert!(is_not_nil(""));
        assert!(is_not_nil(MapValue::new()));
        assert!(is_not_nil(Channel::new(0, 0)));
        assert!(is_not_nil(Function::new("f")));
        assert!(is_not_nil(Value::pointer(Value::nil_pointer())));
    }

    #[test]
    fn test_empty_by_kind() {
        assert!(is_empty(""));
        assert!(is_empty("\t\n "));
        assert!(is_empty(Value::bytes(b"")));
        assert!(is_empty(MapValue::new()));
        assert!(is_empty(Value::array(Vec::<i32>::new())));
        assert!(is_empty(false));
        assert!(is_empty(0_u64));
        assert!(is_empty(Value::Duration(0)));
        assert!(is_empty(StructValue::new("Empty")));
    }

    #[test]
    fn test_not_empty_by_kind() {
        assert!(is_not_empty("x"));
        assert!(is_not_empty(vec![0]));
        assert!(is_not_empty(Value::array([0, 0])));
        assert!(is_not_empty(MapValue::new().entry("k", ())));
        assert!(is_not_empty(-1));
        assert!(is_not_empty(StructValue::new("User").field("id", 1)));
        assert!(is_not_empty(Channel::new(0, 1)));
    }

    #[test]
    fn test_empty_looks_through_one_layer() {
        assert!(is_empty(Value::pointer(Vec::<u8>::new())));
        assert!(is_empty(Value::interface(" ")));
        assert!(is_empty(Value::pointer(Value::nil_pointer())));
        assert!(!is_empty(Value::pointer(Value::pointer(""))));
    }

    #[test]
    fn test_nil_implies_empty() {
        for value in [Value::Nil, Value::nil_slice(), Value::nil_map(), Value::nil_pointer()] {
            assert!(is_nil(&value));
            assert!(is_empty(&value));
            assert!(is_nil_or_empty(&value));
        }
        assert!(is_empty(Vec::<i32>::new()));
        assert!(!is_nil(Vec::<i32>::new()));
    }

    #[test]
    fn test_variadic_forms() {
        assert!(all_nil(Vec::<Value>::new()));
        assert!(none_nil(values![1, "a", vec![0]]));
        assert!(!none_nil(values![1, ()]));
        assert!(all_empty(values!["", 0, Value::nil_map()]));
        assert!(!all_empty(values!["", 1]));
        assert!(none_empty(values!["a", 1, true]));
        assert!(!none_empty(values!["a", " "]));
        assert!(all_nil_or_empty(values![(), "", 0]));
        assert!(none_nil_or_empty(values!["x", 2]));
        assert!(!none_nil_or_empty(values!["x", None::<i32>]));
    }

    #[test]
    fn test_negations() {
        assert_eq!(is_not_nil_or_empty("a"), !is_nil_or_empty("a"));
        assert!(!is_not_nil_or_empty(""));
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(if_nil_returns(None, "x"), "x");
        assert_eq!(if_empty_returns(String::new(), "y".to_string()), "y");
        assert_eq!(if_empty_returns(vec![1], vec![2]), vec![1]);
    }
}
