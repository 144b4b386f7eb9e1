//! Membership and containment

use crate::error::{CheckError, Result};
use crate::inspect::resolve;
use crate::value::Value;

const CONTAINS: &str = "contains";
const CONTAINS_IGNORE_CASE: &str = "case-insensitive contains";
const CONTAINS_KEY: &str = "contains key";

/// Walk the container's pointer/interface chain, rejecting nil links and
/// any kind `accepts` refuses.
fn open_container<'a>(
    operation: &'static str,
    value: &'a Value,
    accepts: fn(&Value) -> bool,
) -> Result<&'a Value> {
    let mut current = value;
    loop {
        match current {
            Value::Nil | Value::Pointer(None) | Value::Interface(None) => {
                return Err(CheckError::nil(operation))
            }
            Value::Pointer(Some(inner)) | Value::Interface(Some(inner)) => current = inner,
            other if accepts(other) => return Ok(other),
            other => return Err(CheckError::unsupported(operation, other.kind())),
        }
    }
}

/// Whether `container` holds `needle`.
///
/// | container       | test                                   |
/// |-----------------|----------------------------------------|
/// | slice, array    | some element deep-equals the needle    |
/// | byte sequence   | needle is a `u8` present in the bytes  |
/// | map             | some value deep-equals the needle      |
/// | struct          | some field deep-equals the needle      |
/// | string          | needle is a substring; non-strings are `false` |
///
/// Pointers and interfaces are looked through on both sides. Any other
/// container kind, or a nil container, is an error.
///
/// # Example
///
/// ```rust
/// use plumbline::{contains, MapValue};
///
/// assert!(contains(vec![1, 2, 3, 4, 5], 3).unwrap());
/// assert!(!contains(vec![1, 2, 3, 4, 5], 9).unwrap());
/// assert!(contains("Hello World", "World").unwrap());
/// assert!(contains(MapValue::new().entry("one", 1), 1).unwrap());
/// assert!(contains(7, 7).is_err());
/// ```
pub fn contains(container: impl Into<Value>, needle: impl Into<Value>) -> Result<bool> {
    let (haystack, needle) = (container.into(), needle.into());
    let haystack = open_container(CONTAINS, &haystack, |v| {
        matches!(
            v,
            Value::Slice(_)
                | Value::Array(_)
                | Value::Bytes(_)
                | Value::Map(_)
                | Value::Struct(_)
                | Value::Str(_)
        )
    })?;
    let needle = resolve(&needle);

    Ok(match haystack {
        Value::Slice(Some(items)) | Value::Array(items) => {
            items.iter().any(|item| item.deep_equals(needle))
        }
        Value::Bytes(bytes) => matches!(needle, Value::U8(b) if bytes.contains(b)),
        Value::Map(Some(map)) => map.values().any(|v| v.deep_equals(needle)),
        Value::Struct(record) => record.fields().any(|(_, v)| v.deep_equals(needle)),
        Value::Str(s) => matches!(needle, Value::Str(n) if s.contains(n.as_str())),
        _ => false,
    })
}

/// Case-insensitive substring test. The container must be a string, possibly
/// behind pointers or interfaces; a non-string needle is `false`.
///
/// ```rust
/// use plumbline::contains_ignore_case;
///
/// assert!(contains_ignore_case("Hello World", "WORLD").unwrap());
/// assert!(!contains_ignore_case("Hello", 1).unwrap());
/// assert!(contains_ignore_case(vec!["a"], "a").is_err());
/// ```
pub fn contains_ignore_case(container: impl Into<Value>, needle: impl Into<Value>) -> Result<bool> {
    let (haystack, needle) = (container.into(), needle.into());
    let haystack = open_container(CONTAINS_IGNORE_CASE, &haystack, |v| matches!(v, Value::Str(_)))?;
    Ok(match (haystack, resolve(&needle)) {
        (Value::Str(s), Value::Str(n)) => s.to_lowercase().contains(&n.to_lowercase()),
        _ => false,
    })
}

/// Whether a map has `key`, or a struct has a field named `key`.
///
/// ```rust
/// use plumbline::{contains_key, MapValue, StructValue};
///
/// assert!(contains_key(MapValue::new().entry("one", 1), "one").unwrap());
/// assert!(contains_key(StructValue::new("User").field("Name", "x"), "Name").unwrap());
/// assert!(!contains_key(MapValue::new().entry(1, 1), "1").unwrap());
/// assert!(contains_key("text", "t").is_err());
/// ```
pub fn contains_key(container: impl Into<Value>, key: impl Into<Value>) -> Result<bool> {
    let (haystack, key) = (container.into(), key.into());
    let haystack = open_container(CONTAINS_KEY, &haystack, |v| {
        matches!(v, Value::Map(_) | Value::Struct(_))
    })?;
    Ok(match (haystack, resolve(&key)) {
        (Value::Struct(record), Value::Str(name)) => record.has_field(name),
        (Value::Map(Some(map)), key) => map.contains_key(key),
        _ => false,
    })
}

/// True when `found` accepts some `(index, element)` of `items`.
///
/// ```rust
/// use plumbline::contains_on_slice;
///
/// let users = ["ann", "bob"];
/// assert!(contains_on_slice(&users, |_, name| name.starts_with('b')));
/// assert!(!contains_on_slice(&users, |i, _| i > 1));
/// ```
pub fn contains_on_slice<T, F>(items: &[T], mut found: F) -> bool
where
    F: FnMut(usize, &T) -> bool,
{
    items.iter().enumerate().any(|(index, item)| found(index, item))
}
