//! Equality

use crate::error::{CheckError, Result};
use crate::inspect::unwrap_once;
use crate::value::Value;

const IGNORE_CASE: &str = "case-insensitive comparison";

/// Deep equality after looking through one non-nil pointer or interface on
/// each side.
///
/// Variants must match exactly: `1_i32` and `1_i64` are different values.
///
/// # Example
///
/// ```rust
/// use plumbline::{equals, MapValue, Value};
///
/// assert!(equals(Value::pointer(5), 5));
/// assert!(equals(vec!["a", "b"], vec!["a", "b"]));
/// assert!(equals(MapValue::new().entry("k", 1), MapValue::new().entry("k", 1)));
/// assert!(!equals(1_i32, 1_i64));
/// assert!(!equals(Value::nil_slice(), Vec::<i32>::new()));
/// ```
pub fn equals(a: impl Into<Value>, b: impl Into<Value>) -> bool {
    same(&a.into(), &b.into())
}

fn same(a: &Value, b: &Value) -> bool {
    let a = unwrap_once(a).unwrap_or(a);
    let b = unwrap_once(b).unwrap_or(b);
    a.deep_equals(b)
}

/// Negation of [`equals`].
pub fn not_equals(a: impl Into<Value>, b: impl Into<Value>) -> bool {
    !equals(a, b)
}

/// Case-insensitive string equality.
///
/// Both operands must be strings, possibly behind pointers or interfaces;
/// anything else on either side (including nil) is an error.
///
/// # Example
///
/// ```rust
/// use plumbline::{equals_ignore_case, Value};
///
/// assert!(equals_ignore_case("HeLLo", Value::pointer("hello")).unwrap());
/// assert!(equals_ignore_case("1", 1).is_err());
/// assert!(equals_ignore_case(1, "1").is_err());
/// ```
pub fn equals_ignore_case(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    let (a, b) = (a.into(), b.into());
    let a = match follow(&a)? {
        Value::Str(s) => s,
        other => return Err(CheckError::unsupported(IGNORE_CASE, other.kind())),
    };
    match follow(&b)? {
        Value::Str(b) => Ok(a.to_lowercase() == b.to_lowercase()),
        other => Err(CheckError::unsupported(IGNORE_CASE, other.kind())),
    }
}

/// Walk pointers and interfaces, failing on a nil link or an absent value.
fn follow(value: &Value) -> Result<&Value> {
    match value {
        Value::Nil | Value::Pointer(None) | Value::Interface(None) => {
            Err(CheckError::nil(IGNORE_CASE))
        }
        Value::Pointer(Some(inner)) | Value::Interface(Some(inner)) => follow(inner),
        other => Ok(other),
    }
}

/// True when every pair of values is [`equals`]. Fewer than two values are
/// trivially equal.
///
/// ```rust
/// use plumbline::{all_equals, values};
///
/// assert!(all_equals(values![3, 3, plumbline::Value::pointer(3)]));
/// assert!(!all_equals(["a", "a", "b"]));
/// ```
pub fn all_equals<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    values
        .iter()
        .all(|x| values.iter().all(|y| same(x, y)))
}

/// True when no two distinct positions hold [`equals`] values.
///
/// ```rust
/// use plumbline::none_equals;
///
/// assert!(none_equals([1, 2, 3]));
/// assert!(!none_equals([1, 2, 1]));
/// ```
pub fn none_equals<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    values
        .iter()
        .enumerate()
        .all(|(i, x)| values[i + 1..].iter().all(|y| !same(x, y)))
}
