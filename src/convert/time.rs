//! Timestamp conversion

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
};

use crate::error::{CheckError, Result};
use crate::value::Value;

const OPERATION: &str = "timestamp conversion";

/// A point in time with a fixed UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Text layouts accepted by [`to_timestamp`], tried in [`TimeLayout::ALL`]
/// order.
///
/// Layouts without an offset parse as UTC. Zone abbreviations (`MST`, `UTC`)
/// are accepted but carry no offset, so they also parse as UTC. A leading
/// weekday must be a valid name but is not checked against the date. Layouts
/// without a date land on 0000-01-01; [`TimeLayout::Stamp`] has no year and
/// lands in year 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeLayout {
    /// `01/02 03:04:05PM '06 -0700`
    Reference,
    /// `Mon Jan _2 15:04:05 2006`
    Ansic,
    /// `Mon Jan _2 15:04:05 MST 2006`
    UnixDate,
    /// `Mon Jan 02 15:04:05 -0700 2006`
    RubyDate,
    /// `02 Jan 06 15:04 MST`
    Rfc822,
    /// `02 Jan 06 15:04 -0700`
    Rfc822Z,
    /// `Monday, 02-Jan-06 15:04:05 MST`
    Rfc850,
    /// `Mon, 02 Jan 2006 15:04:05 MST`
    Rfc1123,
    /// `Mon, 02 Jan 2006 15:04:05 -0700`
    Rfc1123Z,
    /// `2006-01-02T15:04:05Z07:00`, with optional fractional seconds.
    Rfc3339,
    /// `3:04PM`
    Kitchen,
    /// `Jan _2 15:04:05`
    Stamp,
    /// `2006-01-02 15:04:05`
    DateTime,
    /// `2006-01-02`
    DateOnly,
    /// `15:04:05`
    TimeOnly,
}

impl TimeLayout {
    /// Every layout, in the order [`to_timestamp`] tries them.
    pub const ALL: [TimeLayout; 15] = [
        TimeLayout::Reference,
        TimeLayout::Ansic,
        TimeLayout::UnixDate,
        TimeLayout::RubyDate,
        TimeLayout::Rfc822,
        TimeLayout::Rfc822Z,
        TimeLayout::Rfc850,
        TimeLayout::Rfc1123,
        TimeLayout::Rfc1123Z,
        TimeLayout::Rfc3339,
        TimeLayout::Kitchen,
        TimeLayout::Stamp,
        TimeLayout::DateTime,
        TimeLayout::DateOnly,
        TimeLayout::TimeOnly,
    ];

    /// Parse `input` with this layout.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plumbline::convert::TimeLayout;
    ///
    /// let t = TimeLayout::DateOnly.parse("2024-03-01").unwrap();
    /// assert_eq!(t.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    /// assert!(TimeLayout::Kitchen.parse("2024-03-01").is_none());
    /// ```
    pub fn parse(self, input: &str) -> Option<Timestamp> {
        match self {
            TimeLayout::Reference => with_offset(input, "%m/%d %I:%M:%S%p '%y %z"),
            TimeLayout::Ansic => {
                let input = collapse_spaces(input);
                as_utc(after_weekday(&input, false, false)?, "%b %d %H:%M:%S %Y")
            }
            TimeLayout::UnixDate => {
                with_abbreviation(after_weekday(input, false, false)?, 3, "%b %d %H:%M:%S %Y")
            }
            TimeLayout::RubyDate => {
                with_offset(after_weekday(input, false, false)?, "%b %d %H:%M:%S %z %Y")
            }
            TimeLayout::Rfc822 => with_abbreviation(input, 4, "%d %b %y %H:%M"),
            TimeLayout::Rfc822Z => with_offset(input, "%d %b %y %H:%M %z"),
            TimeLayout::Rfc850 => {
                with_abbreviation(after_weekday(input, true, true)?, 2, "%d-%b-%y %H:%M:%S")
            }
            TimeLayout::Rfc1123 => {
                with_abbreviation(after_weekday(input, false, true)?, 4, "%d %b %Y %H:%M:%S")
            }
            TimeLayout::Rfc1123Z => {
                with_offset(after_weekday(input, false, true)?, "%d %b %Y %H:%M:%S %z")
            }
            TimeLayout::Rfc3339 => DateTime::parse_from_rfc3339(input).ok(),
            TimeLayout::Kitchen => time_of_day(input, "%I:%M%p"),
            TimeLayout::Stamp => {
                as_utc(&format!("{} 0000", collapse_spaces(input)), "%b %d %H:%M:%S %Y")
            }
            TimeLayout::DateTime => {
                let bytes = input.as_bytes();
                let padded = bytes.len() > 11
                    && matches_shape(&bytes[..11], b"dddd-dd-dd ")
                    && is_clock(&bytes[11..]);
                padded.then(|| as_utc(input, "%Y-%m-%d %H:%M:%S")).flatten()
            }
            TimeLayout::DateOnly => matches_shape(input.as_bytes(), b"dddd-dd-dd")
                .then(|| NaiveDate::parse_from_str(input, "%Y-%m-%d").ok())
                .flatten()
                .map(|date| utc(date.and_time(NaiveTime::MIN))),
            TimeLayout::TimeOnly => time_of_day(input, "%H:%M:%S"),
        }
    }
}

fn utc(naive: NaiveDateTime) -> Timestamp {
    naive.and_utc().fixed_offset()
}

fn with_offset(input: &str, format: &str) -> Option<Timestamp> {
    DateTime::parse_from_str(input, format).ok()
}

fn as_utc(input: &str, format: &str) -> Option<Timestamp> {
    NaiveDateTime::parse_from_str(input, format).ok().map(utc)
}

fn time_of_day(input: &str, format: &str) -> Option<Timestamp> {
    let time = NaiveTime::parse_from_str(input, format).ok()?;
    let day = NaiveDate::from_ymd_opt(0, 1, 1)?;
    Some(utc(day.and_time(time)))
}

/// Parse with a zone abbreviation expected as the `position`-th
/// whitespace-separated token.
fn with_abbreviation(input: &str, position: usize, format: &str) -> Option<Timestamp> {
    let mut tokens: Vec<&str> = input.split_whitespace().collect();
    if !tokens.get(position).is_some_and(|t| is_zone_abbreviation(t)) {
        return None;
    }
    tokens.remove(position);
    as_utc(&tokens.join(" "), format)
}

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Strip a leading weekday name and the single space after it.
///
/// The name only has to be well-formed; it is not checked against the date.
fn after_weekday(input: &str, long: bool, comma: bool) -> Option<&str> {
    let (token, rest) = input.split_once(' ')?;
    let name = if comma { token.strip_suffix(',')? } else { token };
    let known = WEEKDAYS.iter().any(|day| {
        let day = if long { day } else { &day[..3] };
        name.eq_ignore_ascii_case(day)
    });
    known.then_some(rest)
}

/// `d` in `shape` stands for an ASCII digit; every other byte is literal.
fn matches_shape(input: &[u8], shape: &[u8]) -> bool {
    input.len() == shape.len()
        && input.iter().zip(shape).all(|(b, s)| match s {
            b'd' => b.is_ascii_digit(),
            s => b == s,
        })
}

/// `15:04:05`, where only the hour may drop its leading zero.
fn is_clock(input: &[u8]) -> bool {
    matches_shape(input, b"dd:dd:dd") || matches_shape(input, b"d:dd:dd")
}

fn is_zone_abbreviation(token: &str) -> bool {
    (3..=5).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_uppercase())
}

fn collapse_spaces(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert a value to a [`Timestamp`].
///
/// Timestamps pass through. Numbers (and durations) are milliseconds since
/// the Unix epoch, placed in the local time zone. Strings are tried against
/// [`TimeLayout::ALL`] in order; when none matches the result is a
/// [`CheckError::Parse`].
///
/// # Example
///
/// ```rust
/// use plumbline::convert::to_timestamp;
/// use plumbline::Value;
///
/// let t = to_timestamp(&Value::from("2024-01-02T03:04:05Z")).unwrap();
/// assert_eq!(t.timestamp_millis(), 1_704_164_645_000);
///
/// let t = to_timestamp(&Value::from(1_704_164_645_000_i64)).unwrap();
/// assert_eq!(t.timestamp(), 1_704_164_645);
///
/// assert!(to_timestamp(&Value::from("not a date")).unwrap_err().is_parse());
/// ```
pub fn to_timestamp(value: &Value) -> Result<Timestamp> {
    match value {
        Value::Time(t) => Ok(*t),
        Value::Str(s) => TimeLayout::ALL
            .iter()
            .find_map(|layout| layout.parse(s))
            .ok_or_else(|| CheckError::parse(OPERATION, s.as_str())),
        Value::Int(v) => from_millis(*v as i64),
        Value::I8(v) => from_millis(i64::from(*v)),
        Value::I16(v) => from_millis(i64::from(*v)),
        Value::I32(v) => from_millis(i64::from(*v)),
        Value::I64(v) | Value::Duration(v) => from_millis(*v),
        Value::Uint(v) => from_millis(*v as i64),
        Value::U8(v) => from_millis(i64::from(*v)),
        Value::U16(v) => from_millis(i64::from(*v)),
        Value::U32(v) => from_millis(i64::from(*v)),
        Value::U64(v) => from_millis(*v as i64),
        Value::F32(v) => from_millis(*v as i64),
        Value::F64(v) => from_millis(*v as i64),
        Value::Pointer(inner) | Value::Interface(inner) => match inner {
            Some(inner) => to_timestamp(inner),
            None => Err(CheckError::nil(OPERATION)),
        },
        other => Err(CheckError::unsupported(OPERATION, other.kind())),
    }
}

fn from_millis(millis: i64) -> Result<Timestamp> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|t| t.fixed_offset())
        .ok_or_else(|| CheckError::parse(OPERATION, millis.to_string()))
}

/// [`to_timestamp`] truncated to midnight in the timestamp's own offset.
///
/// # Example
///
/// ```rust
/// use plumbline::convert::to_calendar_date;
/// use plumbline::Value;
///
/// let d = to_calendar_date(&Value::from("2024-05-06T17:30:00-03:00")).unwrap();
/// assert_eq!(d.to_rfc3339(), "2024-05-06T00:00:00-03:00");
/// ```
pub fn to_calendar_date(value: &Value) -> Result<Timestamp> {
    Ok(midnight(&to_timestamp(value)?))
}

fn midnight(t: &Timestamp) -> Timestamp {
    let offset = *t.offset();
    let local_midnight = t.date_naive().and_time(NaiveTime::MIN);
    let utc_midnight = local_midnight - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc_midnight, offset)
}

pub(crate) fn now() -> Timestamp {
    Local::now().fixed_offset()
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::Kind;
    use chrono::{Datelike, Timelike};

    fn parse(input: &str) -> Timestamp {
        to_timestamp(&Value::from(input)).unwrap()
    }

    #[test]
    fn test_layouts_in_order() {
        let cases = [
            ("01/02 03:04:05PM '06 -0700", "2006-01-02T15:04:05-07:00"),
            ("Mon Jan  2 15:04:05 2006", "2006-01-02T15:04:05+00:00"),
            ("Mon Jan  2 15:04:05 MST 2006", "2006-01-02T15:04:05+00:00"),
            ("Mon Jan 02 15:04:05 -0700 2006", "2006-01-02T15:04:05-07:00"),
            ("02 Jan 06 15:04 MST", "2006-01-02T15:04:00+00:00"),
            ("02 Jan 06 15:04 -0700", "2006-01-02T15:04:00-07:00"),
            ("Monday, 02-Jan-06 15:04:05 MST", "2006-01-02T15:04:05+00:00"),
            ("Mon, 02 Jan 2006 15:04:05 MST", "2006-01-02T15:04:05+00:00"),
            ("Mon, 02 Jan 2006 15:04:05 -0700", "2006-01-02T15:04:05-07:00"),
            ("2006-01-02T15:04:05.123Z", "2006-01-02T15:04:05.123+00:00"),
            ("2006-01-02 15:04:05", "2006-01-02T15:04:05+00:00"),
            ("2006-01-02", "2006-01-02T00:00:00+00:00"),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).to_rfc3339(), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_time_only_layouts_land_on_year_zero() {
        let kitchen = parse("3:04PM");
        assert_eq!((kitchen.year(), kitchen.hour(), kitchen.minute()), (0, 15, 4));

        let clock = parse("15:04:05");
        assert_eq!((clock.year(), clock.month(), clock.day()), (0, 1, 1));

        let stamp = parse("Jan  2 15:04:05");
        assert_eq!((stamp.year(), stamp.month(), stamp.day()), (0, 1, 2));
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let err = to_timestamp(&Value::from("202201-31")).unwrap_err();
        assert_eq!(
            err,
            CheckError::Parse { operation: OPERATION, input: "202201-31".into() }
        );
    }

    #[test]
    fn test_weekday_is_not_checked_against_date() {
        let cases = [
            ("Mon, 03 Jan 2006 15:04:05 -0700", "2006-01-03T15:04:05-07:00"),
            ("Fri, 02 Jan 2006 15:04:05 MST", "2006-01-02T15:04:05+00:00"),
            ("Sunday, 02-Jan-06 15:04:05 MST", "2006-01-02T15:04:05+00:00"),
            ("Sat Jan  2 15:04:05 2006", "2006-01-02T15:04:05+00:00"),
            ("Wed Jan 02 15:04:05 -0700 2006", "2006-01-02T15:04:05-07:00"),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).to_rfc3339(), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_malformed_weekday_is_parse_error() {
        for input in [
            "Moon, 02 Jan 2006 15:04:05 -0700",
            "Mon 02 Jan 2006 15:04:05 -0700",
            "Mon, 02-Jan-06 15:04:05 MST",
        ] {
            let err = to_timestamp(&Value::from(input)).unwrap_err();
            assert!(err.is_parse(), "input {:?}", input);
        }
    }

    #[test]
    fn test_date_fields_must_be_zero_padded() {
        for input in [
            "2024-1-5",
            "2024-01-5",
            "24-01-05",
            "2024-01-05 01:2:03",
            "2024-1-05 01:02:03",
        ] {
            assert_eq!(
                to_timestamp(&Value::from(input)),
                Err(CheckError::Parse { operation: OPERATION, input: input.into() })
            );
        }
        assert_eq!(parse("2024-01-05 1:02:03").to_rfc3339(), "2024-01-05T01:02:03+00:00");
    }

    #[test]
    fn test_numbers_are_epoch_milliseconds() {
        assert_eq!(to_timestamp(&Value::from(1_500_i64)).unwrap().timestamp_millis(), 1_500);
        assert_eq!(to_timestamp(&Value::from(2_000.9)).unwrap().timestamp_millis(), 2_000);
        assert_eq!(to_timestamp(&Value::from(0_u8)).unwrap().timestamp(), 0);
    }

    #[test]
    fn test_timestamps_pass_through_pointers() {
        let t = parse("2024-01-02T03:04:05+02:00");
        assert_eq!(to_timestamp(&Value::pointer(Value::Time(t))).unwrap(), t);
        assert!(to_timestamp(&Value::nil_pointer()).unwrap_err().is_unsupported_kind());
    }

    #[test]
    fn test_unsupported_kinds() {
        assert_eq!(
            to_timestamp(&Value::from(true)),
            Err(CheckError::UnsupportedKind { operation: OPERATION, kind: Kind::Bool })
        );
        assert!(to_timestamp(&Value::from(vec![1])).is_err());
    }

    #[test]
    fn test_calendar_date_keeps_offset() {
        let date = to_calendar_date(&Value::from("2024-05-06T23:59:59+09:00")).unwrap();
        assert_eq!(date.to_rfc3339(), "2024-05-06T00:00:00+09:00");
    }

    #[test]
    fn test_calendar_date_is_idempotent() {
        let once = to_calendar_date(&Value::from("Mon, 02 Jan 2006 15:04:05 -0700")).unwrap();
        let twice = to_calendar_date(&Value::Time(once)).unwrap();
        assert_eq!(once, twice);
    }
}
