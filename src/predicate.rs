//! Composable rules over dynamic values
//!
//! Any function or closure `Fn(&Value) -> Result<bool>` is a [`Predicate`].
//! [`PredicateExt`] chains them with `and`, `or` and `not`, and
//! [`all_of`], [`any_of`] and [`none_of`] fold fixed-size arrays of them.
//! Combinators short-circuit, and the first conversion error aborts the
//! whole rule.
//!
//! Checks are also reachable by validation tag name through [`tagged`], and
//! [`failing_fields`] runs tag rules over the fields of a record.
//!
//! # Example
//!
//! ```rust
//! use plumbline::predicate::*;
//! use plumbline::{is_length_greater_than, is_numeric, Value};
//!
//! let short_code = |v: &Value| is_length_greater_than(v, 7).map(|long| !long);
//! let rule = short_code.and(|v: &Value| is_numeric(v));
//!
//! assert!(rule.check(&Value::from("1234")).unwrap());
//! assert!(!rule.check(&Value::from("123456789")).unwrap());
//! assert!(!rule.check(&Value::from("12ab")).unwrap());
//! ```

use crate::check;
use crate::error::{CheckError, Result};
use crate::value::{StructValue, Value};

/// A composable check over [`Value`].
pub trait Predicate: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &Value) -> Result<bool>;
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> Result<bool> + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> Result<bool> {
        self(value)
    }
}

/// Adapt an infallible check, such as [`is_empty`](crate::is_empty) or a
/// kind check, into a [`Predicate`].
///
/// ```rust
/// use plumbline::predicate::{infallible, Predicate, PredicateExt};
/// use plumbline::{is_empty, is_string_type, Value};
///
/// let blank_text = infallible(|v| is_string_type(v)).and(infallible(|v| is_empty(v)));
/// assert!(blank_text.check(&Value::from("  ")).unwrap());
/// assert!(!blank_text.check(&Value::from(0)).unwrap());
/// ```
pub fn infallible<F>(check: F) -> Infallible<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    Infallible(check)
}

/// Predicate wrapper produced by [`infallible`].
#[derive(Clone, Copy, Debug)]
pub struct Infallible<F>(pub F);

impl<F> Predicate for Infallible<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> Result<bool> {
        Ok((self.0)(value))
    }
}

/// Extension trait for predicate combinators.
pub trait PredicateExt: Predicate + Sized {
    /// True only when both predicates are true. `other` is not evaluated when
    /// `self` is false.
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true. `other` is not evaluated when
    /// `self` is true.
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the answer. Errors pass through unchanged.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// AND combinator.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for And<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool> {
        Ok(self.0.check(value)? && self.1.check(value)?)
    }
}

/// OR combinator.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool> {
        Ok(self.0.check(value)? || self.1.check(value)?)
    }
}

/// NOT combinator.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool> {
        self.0.check(value).map(|answer| !answer)
    }
}

/// All predicates in a fixed-size array hold.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<P: Predicate, const N: usize> Predicate for AllOf<P, N> {
    fn check(&self, value: &Value) -> Result<bool> {
        for p in &self.0 {
            if !p.check(value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Create a predicate that holds when every given predicate holds.
///
/// The array is homogeneous; for mixed predicates use `.and()` chaining or
/// plain function pointers.
///
/// ```rust
/// use plumbline::predicate::*;
/// use plumbline::{is_alpha, is_not_email, Result, Value};
///
/// let rules: [fn(&Value) -> Result<bool>; 2] = [|v| is_alpha(v), |v| is_not_email(v)];
/// assert!(all_of(rules).check(&Value::from("plain")).unwrap());
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// Some predicate in a fixed-size array holds.
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<P: Predicate, const N: usize> Predicate for AnyOf<P, N> {
    fn check(&self, value: &Value) -> Result<bool> {
        any_holds(&self.0, value)
    }
}

fn any_holds<P: Predicate>(predicates: &[P], value: &Value) -> Result<bool> {
    for p in predicates {
        if p.check(value)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create a predicate that holds when any given predicate holds.
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// No predicate in a fixed-size array holds.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<P: Predicate, const N: usize> Predicate for NoneOf<P, N> {
    fn check(&self, value: &Value) -> Result<bool> {
        any_holds(&self.0, value).map(|any| !any)
    }
}

/// Create a predicate that holds when none of the given predicates hold.
///
/// ```rust
/// use plumbline::predicate::*;
/// use plumbline::{is_bearer, is_private_ip, Result, Value};
///
/// let rules: [fn(&Value) -> Result<bool>; 2] = [|v| is_bearer(v), |v| is_private_ip(v)];
/// let public_text = none_of(rules);
/// assert!(public_text.check(&Value::from("8.8.8.8")).unwrap());
/// assert!(!public_text.check(&Value::from("10.0.0.8")).unwrap());
/// ```
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}

/// Named check signature used by [`tagged`].
pub type TaggedCheck = fn(&Value) -> Result<bool>;

/// Tag names understood by [`tagged`].
pub const TAGS: [&str; 15] = [
    "http_method",
    "url_path",
    "full_name",
    "bcrypt",
    "bearer",
    "before_now",
    "before_today",
    "after_now",
    "after_today",
    "today",
    "cpf",
    "cnpj",
    "cpfcnpj",
    "duration",
    "byte_unit",
];

/// Look up a check by its validation tag name.
///
/// ```rust
/// use plumbline::predicate::{tagged, Predicate};
/// use plumbline::Value;
///
/// let cpf = tagged("cpf").unwrap();
/// assert!(cpf.check(&Value::from("891.595.290-16")).unwrap());
/// assert!(tagged("zip_code").is_none());
/// ```
pub fn tagged(tag: &str) -> Option<TaggedCheck> {
    let check: TaggedCheck = match tag {
        "http_method" => |v| check::is_http_method(v),
        "url_path" => |v| check::is_url_path(v),
        "full_name" => |v| check::is_full_name(v),
        "bcrypt" => |v| check::is_bcrypt(v),
        "bearer" => |v| check::is_bearer(v),
        "before_now" => |v| check::is_before_now(v),
        "before_today" => |v| check::is_before_today(v),
        "after_now" => |v| check::is_after_now(v),
        "after_today" => |v| check::is_after_today(v),
        "today" => |v| check::is_today(v),
        "cpf" => |v| check::is_cpf(v),
        "cnpj" => |v| check::is_cnpj(v),
        "cpfcnpj" => |v| check::is_cpf_or_cnpj(v),
        "duration" => |v| Ok(check::is_duration_type(v)),
        "byte_unit" => |v| check::is_byte_unit(v),
        _ => return None,
    };
    Some(check)
}

/// Run `(field, tag)` rules against a record and collect the names of the
/// fields that fail. A missing field fails its rules.
///
/// Unknown tags are a [`CheckError::Parse`](crate::CheckError::Parse), and
/// conversion errors from the checks propagate.
///
/// ```rust
/// use plumbline::predicate::failing_fields;
/// use plumbline::StructValue;
///
/// let login = StructValue::new("Login")
///     .field("method", "POST")
///     .field("token", "token-without-scheme");
///
/// let rules = [("method", "http_method"), ("token", "bearer"), ("owner", "cpf")];
/// assert_eq!(failing_fields(&login, &rules).unwrap(), vec!["token", "owner"]);
/// ```
pub fn failing_fields<'a>(record: &StructValue, rules: &[(&'a str, &str)]) -> Result<Vec<&'a str>> {
    let mut failing = Vec::new();
    for (field, tag) in rules {
        let check = tagged(tag).ok_or_else(|| CheckError::parse("validation tag", *tag))?;
        let holds = match record.get(field) {
            Some(value) => check(value)?,
            None => false,
        };
        if !holds && !failing.contains(field) {
            failing.push(*field);
        }
    }
    Ok(failing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{is_greater_than, is_less_than, is_nil};

    fn positive(v: &Value) -> Result<bool> {
        is_greater_than(v, 0)
    }

    fn below_ten(v: &Value) -> Result<bool> {
        is_less_than(v, 10)
    }

    fn exploding(_: &Value) -> Result<bool> {
        Err(CheckError::nil("exploding"))
    }

    #[test]
    fn test_and() {
        let p = positive.and(below_ten);
        assert!(p.check(&Value::from(5)).unwrap());
        assert!(!p.check(&Value::from(0)).unwrap());
        assert!(!p.check(&Value::from(10)).unwrap());
    }

    #[test]
    fn test_or() {
        let p = positive.not().or(below_ten.not());
        assert!(p.check(&Value::from(-5)).unwrap());
        assert!(p.check(&Value::from(150)).unwrap());
        assert!(!p.check(&Value::from(5)).unwrap());
    }

    #[test]
    fn test_short_circuit_skips_errors() {
        assert!(!positive.and(exploding).check(&Value::from(-1)).unwrap());
        assert!(positive.or(exploding).check(&Value::from(1)).unwrap());
        assert!(positive.and(exploding).check(&Value::from(1)).is_err());
    }

    #[test]
    fn test_not_passes_errors_through() {
        let err = positive.not().check(&Value::from(true)).unwrap_err();
        assert!(err.is_unsupported_kind());
    }

    #[test]
    fn test_array_combinators() {
        let rules: [fn(&Value) -> Result<bool>; 2] = [positive, below_ten];
        assert!(all_of(rules).check(&Value::from(3)).unwrap());
        assert!(!all_of(rules).check(&Value::from(30)).unwrap());
        assert!(any_of(rules).check(&Value::from(30)).unwrap());
        assert!(!none_of(rules).check(&Value::from(30)).unwrap());
        let empty: [fn(&Value) -> Result<bool>; 0] = [];
        assert!(all_of(empty).check(&Value::Nil).unwrap());
        assert!(!any_of(empty).check(&Value::Nil).unwrap());
    }

    #[test]
    fn test_infallible_adapter() {
        let p = infallible(|v| is_nil(v)).or(positive);
        assert!(p.check(&Value::nil_pointer()).unwrap());
        assert!(p.check(&Value::from(1)).unwrap());
        assert!(!p.check(&Value::from(-1)).unwrap());
    }

    #[test]
    fn test_every_tag_resolves() {
        for tag in TAGS {
            assert!(tagged(tag).is_some(), "{}", tag);
        }
        assert!(tagged("CPF").is_none());
        assert!(tagged("").is_none());
    }

    #[test]
    fn test_tagged_checks() {
        let bearer = tagged("bearer").unwrap();
        assert!(bearer(&Value::from("Bearer abc")).unwrap());
        let byte_unit = tagged("byte_unit").unwrap();
        assert!(!byte_unit(&Value::from("12 MB")).unwrap());
        let before_now = tagged("before_now").unwrap();
        assert!(before_now(&Value::from("2000-01-01")).unwrap());
        let duration = tagged("duration").unwrap();
        assert!(duration(&Value::from(std::time::Duration::from_millis(250))).unwrap());
        assert!(!duration(&Value::from("1h30m")).unwrap());
    }

    #[test]
    fn test_failing_fields_accepts_typed_durations() {
        let record = StructValue::new("Cache")
            .field("ttl", std::time::Duration::from_secs(5))
            .field("grace", Value::Duration(0));
        let rules = [("ttl", "duration"), ("grace", "duration")];
        assert!(failing_fields(&record, &rules).unwrap().is_empty());
    }

    #[test]
    fn test_failing_fields() {
        let record = StructValue::new("Company")
            .field("document", "57309623000168")
            .field("ttl", "90")
            .field("route", "/health");
        let rules = [
            ("document", "cpfcnpj"),
            ("document", "cpf"),
            ("ttl", "duration"),
            ("route", "url_path"),
            ("missing", "today"),
        ];
        assert_eq!(
            failing_fields(&record, &rules).unwrap(),
            vec!["document", "ttl", "missing"]
        );
        assert!(failing_fields(&record, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_failing_fields_errors() {
        let record = StructValue::new("R").field("when", true);
        let err = failing_fields(&record, &[("when", "yesterday")]).unwrap_err();
        assert_eq!(err, CheckError::parse("validation tag", "yesterday"));
        assert!(failing_fields(&record, &[("when", "today")])
            .unwrap_err()
            .is_unsupported_kind());
    }
}
