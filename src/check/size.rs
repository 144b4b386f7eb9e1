//! Numeric and length comparison
//!
//! Numeric comparisons convert both operands with
//! [`to_numeric`](crate::convert::to_numeric); length comparisons use
//! [`to_length`](crate::convert::to_length), so operands of different kinds
//! can be compared (a string's character count against an integer, or against
//! another slice's length). All four orderings compare directly; none is
//! derived from another by negation.

use crate::convert::{to_length, to_numeric};
use crate::error::Result;
use crate::value::Value;

fn numeric_pair(a: impl Into<Value>, b: impl Into<Value>) -> Result<(f64, f64)> {
    Ok((to_numeric(&a.into())?, to_numeric(&b.into())?))
}

fn length_pair(a: impl Into<Value>, b: impl Into<Value>) -> Result<(i64, i64)> {
    Ok((to_length(&a.into())?, to_length(&b.into())?))
}

/// `a > b` after numeric conversion.
///
/// # Example
///
/// ```rust
/// use plumbline::is_greater_than;
///
/// assert!(is_greater_than(10_u8, 9.5).unwrap());
/// assert!(is_greater_than("3", 2).unwrap());
/// assert!(!is_greater_than(1, 1).unwrap());
/// assert!(is_greater_than(vec![1], 0).is_err());
/// ```
pub fn is_greater_than(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    let (a, b) = numeric_pair(a, b)?;
    Ok(a > b)
}

/// `a >= b` after numeric conversion.
pub fn is_greater_than_or_equal(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    let (a, b) = numeric_pair(a, b)?;
    Ok(a >= b)
}

/// `a < b` after numeric conversion.
pub fn is_less_than(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    let (a, b) = numeric_pair(a, b)?;
    Ok(a < b)
}

/// `a <= b` after numeric conversion.
pub fn is_less_than_or_equal(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    let (a, b) = numeric_pair(a, b)?;
    Ok(a <= b)
}

/// Lengths of `a` and `b` are equal.
///
/// # Example
///
/// ```rust
/// use plumbline::{is_length_equals, is_length_greater_than};
///
/// assert!(is_length_equals("test", 4).unwrap());
/// assert!(is_length_equals(vec!["a", "b"], "xy").unwrap());
/// assert!(is_length_greater_than("test", vec![1, 2]).unwrap());
/// ```
pub fn is_length_equals(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    let (a, b) = length_pair(a, b)?;
    Ok(a == b)
}

/// Negation of [`is_length_equals`].
pub fn is_length_not_equals(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    is_length_equals(a, b).map(|equal| !equal)
}

/// Length of `a` is greater than length of `b`.
pub fn is_length_greater_than(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    let (a, b) = length_pair(a, b)?;
    Ok(a > b)
}

/// Length of `a` is greater than or equal to length of `b`.
pub fn is_length_greater_than_or_equal(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    let (a, b) = length_pair(a, b)?;
    Ok(a >= b)
}

/// Length of `a` is less than length of `b`.
pub fn is_length_less_than(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    let (a, b) = length_pair(a, b)?;
    Ok(a < b)
}

/// Length of `a` is less than or equal to length of `b`.
pub fn is_length_less_than_or_equal(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    let (a, b) = length_pair(a, b)?;
    Ok(a <= b)
}
