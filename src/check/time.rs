//! Date and time comparison
//!
//! Operands go through [`to_timestamp`] (instants) or [`to_calendar_date`]
//! (midnight in the operand's own offset). "Today" is the calendar date of
//! the local clock.

use crate::convert::{now, to_calendar_date, to_timestamp, today, Timestamp};
use crate::error::Result;
use crate::value::Value;

fn instant(value: impl Into<Value>) -> Result<Timestamp> {
    to_timestamp(&value.into())
}

fn date(value: impl Into<Value>) -> Result<Timestamp> {
    to_calendar_date(&value.into())
}

/// The value is an instant before the current one.
///
/// # Example
///
/// ```rust
/// use plumbline::{is_after_now, is_before_now};
///
/// assert!(is_before_now("2006-01-02T15:04:05Z").unwrap());
/// assert!(is_after_now("9999-12-31").unwrap());
/// assert!(is_before_now("yesterday").is_err());
/// ```
pub fn is_before_now(value: impl Into<Value>) -> Result<bool> {
    Ok(instant(value)? < now())
}

/// The value is an instant after the current one.
pub fn is_after_now(value: impl Into<Value>) -> Result<bool> {
    Ok(instant(value)? > now())
}

/// The value falls on a calendar date before today.
pub fn is_before_today(value: impl Into<Value>) -> Result<bool> {
    Ok(date(value)?.date_naive() < today())
}

/// The value falls on a calendar date after today.
pub fn is_after_today(value: impl Into<Value>) -> Result<bool> {
    Ok(date(value)?.date_naive() > today())
}

/// The value falls on today's calendar date.
///
/// ```rust
/// use plumbline::is_today;
///
/// assert!(is_today(chrono::Local::now()).unwrap());
/// assert!(!is_today("2000-01-01").unwrap());
/// ```
pub fn is_today(value: impl Into<Value>) -> Result<bool> {
    Ok(date(value)?.date_naive() == today())
}

/// Instant `a` is strictly before instant `b`.
///
/// ```rust
/// use plumbline::is_before;
///
/// assert!(is_before("2024-01-01", "2024-01-01 00:00:01").unwrap());
/// assert!(!is_before("2024-01-01T03:00:00+03:00", "2024-01-01T00:00:00Z").unwrap());
/// ```
pub fn is_before(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    Ok(instant(a)? < instant(b)?)
}

/// Instant `a` is strictly after instant `b`.
pub fn is_after(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    Ok(instant(a)? > instant(b)?)
}

/// Midnight of `a` is strictly before midnight of `b`, each taken in its
/// own offset.
///
/// ```rust
/// use plumbline::{is_before, is_before_date};
///
/// assert!(is_before("2024-03-01 08:00:00", "2024-03-01 09:00:00").unwrap());
/// assert!(!is_before_date("2024-03-01 08:00:00", "2024-03-01 09:00:00").unwrap());
/// assert!(is_before_date("2024-02-29", "2024-03-01 09:00:00").unwrap());
/// ```
pub fn is_before_date(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    Ok(date(a)? < date(b)?)
}

/// Midnight of `a` is strictly after midnight of `b`.
pub fn is_after_date(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    Ok(date(a)? > date(b)?)
}
