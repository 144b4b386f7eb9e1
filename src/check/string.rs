//! String-format validators
//!
//! Every validator renders its input with
//! [`to_text`](crate::convert::to_text) and then matches the text. A value
//! with no text form is an error; text that does not match is `Ok(false)`.
//! Numbers are accepted and checked in their decimal form, so
//! `is_numeric(123)` holds.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use regex::Regex;

use crate::convert::to_text;
use crate::error::Result;
use crate::value::Value;

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid pattern {pattern}: {err}"))
}

static REQUEST_URI: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:\*|/\S*|[A-Za-z][A-Za-z0-9+.\-]*:\S*)$"));
static URL_PATH: LazyLock<Regex> = LazyLock::new(|| compile(r"^(/[^/?\s]*)*$"));
static ALPHA: LazyLock<Regex> = LazyLock::new(|| compile(r"^\p{L}+$"));
static ALPHA_SPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[\p{L} ]+$"));
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| compile(r"^[-.+0-9]+$"));
static NUMERIC_SPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9 ]+$"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));
static BCRYPT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\$2[abxy]?\$(\d{2})\$[./A-Za-z0-9]{53}$"));
static FULL_NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"^[\p{L}\s'-]+$"));
static IOS_DEVICE_ID: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^[A-F0-9]{8}-[A-F0-9]{4}-[A-F0-9]{4}-[A-F0-9]{4}-[A-F0-9]{12}$")
});
static ANDROID_DEVICE_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-fA-F0-9]{16,}$"));

const HTTP_METHODS: [&str; 9] = [
    "GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "CONNECT", "OPTIONS", "TRACE",
];

const MOBILE_PLATFORMS: [&str; 3] = ["android", "ios", "iphone os"];

pub(crate) fn text(value: impl Into<Value>) -> Result<String> {
    to_text(&value.into())
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn matches_non_blank(pattern: &Regex, value: impl Into<Value>) -> Result<bool> {
    let s = text(value)?;
    Ok(!is_blank(&s) && pattern.is_match(&s))
}

/// A request URI: an absolute URI with a scheme, an absolute path, or `*`.
///
/// # Example
///
/// ```rust
/// use plumbline::is_url;
///
/// assert!(is_url("https://example.com/a?b=c").unwrap());
/// assert!(is_url("/relative/path").unwrap());
/// assert!(!is_url("Not a URL").unwrap());
/// ```
pub fn is_url(value: impl Into<Value>) -> Result<bool> {
    Ok(REQUEST_URI.is_match(&text(value)?))
}

/// A non-empty absolute URL path without query.
///
/// ```rust
/// use plumbline::is_url_path;
///
/// assert!(is_url_path("/users/42").unwrap());
/// assert!(!is_url_path("/users?id=42").unwrap());
/// assert!(!is_url_path("").unwrap());
/// ```
pub fn is_url_path(value: impl Into<Value>) -> Result<bool> {
    matches_non_blank(&URL_PATH, value)
}

/// One of the nine standard HTTP method names, upper case.
pub fn is_http_method(value: impl Into<Value>) -> Result<bool> {
    let s = text(value)?;
    Ok(HTTP_METHODS.contains(&s.as_str()))
}

/// Letters only, any script.
pub fn is_alpha(value: impl Into<Value>) -> Result<bool> {
    matches_non_blank(&ALPHA, value)
}

/// Letters and spaces, not blank.
pub fn is_alpha_space(value: impl Into<Value>) -> Result<bool> {
    matches_non_blank(&ALPHA_SPACE, value)
}

/// Digits with optional sign and decimal point characters.
///
/// ```rust
/// use plumbline::is_numeric;
///
/// assert!(is_numeric("-12.5").unwrap());
/// assert!(is_numeric(42).unwrap());
/// assert!(!is_numeric("12a").unwrap());
/// ```
pub fn is_numeric(value: impl Into<Value>) -> Result<bool> {
    matches_non_blank(&NUMERIC, value)
}

/// Negation of [`is_numeric`].
pub fn is_not_numeric(value: impl Into<Value>) -> Result<bool> {
    is_numeric(value).map(|numeric| !numeric)
}

/// Digits and spaces, not blank.
pub fn is_numeric_space(value: impl Into<Value>) -> Result<bool> {
    matches_non_blank(&NUMERIC_SPACE, value)
}

/// A plain `local@domain.tld` address.
pub fn is_email(value: impl Into<Value>) -> Result<bool> {
    Ok(EMAIL.is_match(&text(value)?))
}

/// Negation of [`is_email`].
pub fn is_not_email(value: impl Into<Value>) -> Result<bool> {
    is_email(value).map(|email| !email)
}

/// Non-blank text that decodes as standard, padded base64.
pub fn is_base64(value: impl Into<Value>) -> Result<bool> {
    let s = text(value)?;
    Ok(!is_blank(&s) && STANDARD.decode(s.as_bytes()).is_ok())
}

/// A bcrypt hash in modular-crypt form with a cost between 4 and 31.
///
/// ```rust
/// use plumbline::is_bcrypt;
///
/// let hash = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";
/// assert!(is_bcrypt(hash).unwrap());
/// assert!(!is_bcrypt("$2a$03$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy").unwrap());
/// assert!(!is_bcrypt("password").unwrap());
/// ```
pub fn is_bcrypt(value: impl Into<Value>) -> Result<bool> {
    let s = text(value)?;
    let cost = BCRYPT
        .captures(&s)
        .and_then(|caps| caps.get(1))
        .and_then(|cost| cost.as_str().parse::<u8>().ok());
    Ok(cost.is_some_and(|cost| (4..=31).contains(&cost)))
}

/// Text whose first space-separated token is exactly `Bearer`.
///
/// ```rust
/// use plumbline::is_bearer;
///
/// assert!(is_bearer("Bearer token").unwrap());
/// assert!(!is_bearer("token").unwrap());
/// assert!(!is_bearer(12345).unwrap());
/// ```
pub fn is_bearer(value: impl Into<Value>) -> Result<bool> {
    let s = text(value)?;
    Ok(s.split(' ').next() == Some("Bearer"))
}

struct Block {
    network: IpAddr,
    prefix: u32,
}

impl Block {
    const fn v4(a: u8, b: u8, c: u8, d: u8, prefix: u32) -> Self {
        Block { network: IpAddr::V4(Ipv4Addr::new(a, b, c, d)), prefix }
    }

    const fn v6(first: u16, last: u16, prefix: u32) -> Self {
        Block { network: IpAddr::V6(Ipv6Addr::new(first, 0, 0, 0, 0, 0, 0, last)), prefix }
    }

    fn contains(&self, ip: IpAddr) -> bool {
        match (self.network, ip) {
            (IpAddr::V4(net), IpAddr::V4(ip)) => {
                let mask = u32::MAX.checked_shl(32 - self.prefix).unwrap_or(0);
                u32::from(net) & mask == u32::from(ip) & mask
            }
            (IpAddr::V6(net), IpAddr::V6(ip)) => {
                let mask = u128::MAX.checked_shl(128 - self.prefix).unwrap_or(0);
                u128::from(net) & mask == u128::from(ip) & mask
            }
            _ => false,
        }
    }
}

/// Loopback, private-use, unique-local and link-local ranges.
const PRIVATE_BLOCKS: [Block; 10] = [
    Block::v4(127, 0, 0, 0, 8),
    Block::v4(10, 0, 0, 0, 8),
    Block::v4(172, 16, 0, 0, 12),
    Block::v4(192, 168, 0, 0, 16),
    Block::v4(169, 254, 0, 0, 16),
    Block::v4(224, 0, 0, 0, 24),
    Block::v6(0, 1, 128),
    Block::v6(0xfe80, 0, 10),
    Block::v6(0xfc00, 0, 7),
    Block::v6(0xff02, 0, 16),
];

/// An IPv4 or IPv6 address in a loopback, private, unique-local or
/// link-local range. IPv4-mapped IPv6 addresses are checked as IPv4. Text
/// that is not an address is `false`.
///
/// ```rust
/// use plumbline::is_private_ip;
///
/// assert!(is_private_ip("192.168.0.1").unwrap());
/// assert!(is_private_ip("fc00::1").unwrap());
/// assert!(!is_private_ip("8.8.8.8").unwrap());
/// assert!(!is_private_ip("localhost").unwrap());
/// ```
pub fn is_private_ip(value: impl Into<Value>) -> Result<bool> {
    let ip = match text(value)?.parse::<IpAddr>() {
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped().map_or(IpAddr::V6(v6), IpAddr::V4),
        Ok(ip) => ip,
        Err(_) => return Ok(false),
    };
    Ok(PRIVATE_BLOCKS.iter().any(|block| block.contains(ip)))
}

/// At least two names made of letters, spaces, apostrophes and hyphens.
///
/// ```rust
/// use plumbline::is_full_name;
///
/// assert!(is_full_name("Ana Maria d'Ávila").unwrap());
/// assert!(!is_full_name("Ana").unwrap());
/// assert!(!is_full_name("R2 D2").unwrap());
/// ```
pub fn is_full_name(value: impl Into<Value>) -> Result<bool> {
    let s = text(value)?;
    Ok(s.split_whitespace().nth(1).is_some() && FULL_NAME.is_match(&s))
}

/// Negation of [`is_full_name`].
pub fn is_not_full_name(value: impl Into<Value>) -> Result<bool> {
    is_full_name(value).map(|name| !name)
}

/// An upper-case hexadecimal UUID, the iOS vendor identifier format.
pub fn is_ios_device_id(value: impl Into<Value>) -> Result<bool> {
    matches_non_blank(&IOS_DEVICE_ID, value)
}

/// At least 16 hexadecimal digits, the Android ID format.
pub fn is_android_device_id(value: impl Into<Value>) -> Result<bool> {
    matches_non_blank(&ANDROID_DEVICE_ID, value)
}

/// Either an iOS or an Android device id.
pub fn is_mobile_device_id(value: impl Into<Value>) -> Result<bool> {
    let value = value.into();
    Ok(is_ios_device_id(&value)? || is_android_device_id(&value)?)
}

/// `android`, `ios` or `iphone os`, in any case.
pub fn is_mobile_platform(value: impl Into<Value>) -> Result<bool> {
    let platform = text(value)?.to_lowercase();
    Ok(MOBILE_PLATFORMS.contains(&platform.as_str()))
}
