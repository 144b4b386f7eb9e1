//! Dynamic values
//!
//! [`Value`] is the loosely-typed input every check accepts. Native Rust
//! values convert into it through `From`, so checks can be called directly
//! with integers, strings, vectors, maps, options and timestamps:
//!
//! ```rust
//! use plumbline::{Value, StructValue};
//! use std::collections::HashMap;
//!
//! let n = Value::from(42_u8);
//! let list = Value::from(vec![1, 2, 3]);
//! let maybe = Value::from(Some("x"));          // pointer to a string
//! let nothing = Value::from(None::<i32>);      // nil pointer
//! let map = Value::from(HashMap::from([("one", 1)]));
//! let user = Value::from(StructValue::new("User").field("name", "Alice"));
//! # let _ = (n, list, maybe, nothing, map, user);
//! ```
//!
//! Heterogeneous lists for the variadic checks are built with [`values!`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use base64::Engine as _;
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta, TimeZone};
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

use crate::convert::format_map_key;
use crate::inspect::{kind_of, Kind};

/// A dynamically-typed value.
///
/// Equality (`==`) is deep structural equality: variants must match exactly,
/// so `Value::I32(1) != Value::I64(1)` and a nil slice differs from an empty
/// one.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absence of any value.
    #[default]
    Nil,
    /// Boolean.
    Bool(bool),
    /// Platform-width signed integer.
    Int(isize),
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// Platform-width unsigned integer.
    Uint(usize),
    /// 8-bit unsigned integer.
    U8(u8),
    /// 16-bit unsigned integer.
    U16(u16),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit unsigned integer.
    U64(u64),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// Complex number with `f32` parts.
    Complex64 {
        /// Real part.
        re: f32,
        /// Imaginary part.
        im: f32,
    },
    /// Complex number with `f64` parts.
    Complex128 {
        /// Real part.
        re: f64,
        /// Imaginary part.
        im: f64,
    },
    /// UTF-8 string.
    Str(String),
    /// Raw byte sequence.
    Bytes(Vec<u8>),
    /// Growable sequence; `None` is a nil slice.
    Slice(Option<Vec<Value>>),
    /// Fixed-length sequence.
    Array(Vec<Value>),
    /// Key/value map; `None` is a nil map.
    Map(Option<MapValue>),
    /// Named record.
    Struct(StructValue),
    /// Pointer; `None` is a nil pointer.
    Pointer(Option<Box<Value>>),
    /// Interface box; `None` is a nil interface.
    Interface(Option<Box<Value>>),
    /// Channel snapshot; `None` is a nil channel.
    Chan(Option<Channel>),
    /// Function handle; `None` is a nil function.
    Func(Option<Function>),
    /// Point in time.
    Time(DateTime<FixedOffset>),
    /// Signed duration in nanoseconds.
    Duration(i64),
}

impl Value {
    /// Non-nil pointer to `value`.
    pub fn pointer(value: impl Into<Value>) -> Self {
        Value::Pointer(Some(Box::new(value.into())))
    }

    /// Nil pointer.
    pub fn nil_pointer() -> Self {
        Value::Pointer(None)
    }

    /// Non-nil interface box around `value`.
    pub fn interface(value: impl Into<Value>) -> Self {
        Value::Interface(Some(Box::new(value.into())))
    }

    /// Nil slice.
    pub fn nil_slice() -> Self {
        Value::Slice(None)
    }

    /// Nil map.
    pub fn nil_map() -> Self {
        Value::Map(None)
    }

    /// Byte sequence.
    pub fn bytes(bytes: impl AsRef<[u8]>) -> Self {
        Value::Bytes(bytes.as_ref().to_vec())
    }

    /// Fixed-length array.
    pub fn array<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Dynamic kind of this value.
    pub fn kind(&self) -> Kind {
        kind_of(self)
    }

    /// Zero-value test for the value's own kind.
    ///
    /// Numbers are zero, strings and sequences are empty, nilable kinds are
    /// nil, and a struct is zero when all of its fields are.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Nil => true,
            Value::Bool(b) => !b,
            Value::Int(v) => *v == 0,
            Value::I8(v) => *v == 0,
            Value::I16(v) => *v == 0,
            Value::I32(v) => *v == 0,
            Value::I64(v) | Value::Duration(v) => *v == 0,
            Value::Uint(v) => *v == 0,
            Value::U8(v) => *v == 0,
            Value::U16(v) => *v == 0,
            Value::U32(v) => *v == 0,
            Value::U64(v) => *v == 0,
            Value::F32(v) => *v == 0.0,
            Value::F64(v) => *v == 0.0,
            Value::Complex64 { re, im } => *re == 0.0 && *im == 0.0,
            Value::Complex128 { re, im } => *re == 0.0 && *im == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::Bytes(b) => b.is_empty(),
            Value::Slice(items) => items.is_none(),
            Value::Array(items) => items.iter().all(Value::is_zero),
            Value::Map(map) => map.is_none(),
            Value::Struct(s) => s.fields.iter().all(|(_, v)| v.is_zero()),
            Value::Pointer(inner) | Value::Interface(inner) => inner.is_none(),
            Value::Chan(chan) => chan.is_none(),
            Value::Func(func) => func.is_none(),
            Value::Time(t) => *t == zero_time(),
        }
    }

    /// Deep structural equality.
    ///
    /// Pointers and interfaces compare their targets; non-nil functions are
    /// never equal, not even to themselves.
    pub fn deep_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::I16(a), Value::I16(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::U8(a), Value::U8(b)) => a == b,
            (Value::U16(a), Value::U16(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,
            (
                Value::Complex64 { re: ar, im: ai },
                Value::Complex64 { re: br, im: bi },
            ) => ar == br && ai == bi,
            (
                Value::Complex128 { re: ar, im: ai },
                Value::Complex128 { re: br, im: bi },
            ) => ar == br && ai == bi,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Slice(a), Value::Slice(b)) => match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => seq_equals(a, b),
                _ => false,
            },
            (Value::Array(a), Value::Array(b)) => seq_equals(a, b),
            (Value::Map(a), Value::Map(b)) => match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => a.deep_equals(b),
                _ => false,
            },
            (Value::Struct(a), Value::Struct(b)) => a.deep_equals(b),
            (Value::Pointer(a), Value::Pointer(b)) | (Value::Interface(a), Value::Interface(b)) => {
                match (a, b) {
                    (None, None) => true,
                    (Some(a), Some(b)) => a.deep_equals(b),
                    _ => false,
                }
            }
            (Value::Chan(a), Value::Chan(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => a.is_none() && b.is_none(),
            (Value::Time(a), Value::Time(b)) => a == b && a.offset() == b.offset(),
            (Value::Duration(a), Value::Duration(b)) => a == b,
            _ => false,
        }
    }
}

fn seq_equals(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.deep_equals(y))
}

/// Seconds from 0001-01-01T00:00:00Z to the Unix epoch.
const YEAR_ONE_TO_EPOCH_SECS: i64 = 62_135_596_800;

/// `0001-01-01T00:00:00Z`, the zero timestamp.
pub(crate) fn zero_time() -> DateTime<FixedOffset> {
    (DateTime::<chrono::Utc>::UNIX_EPOCH - TimeDelta::seconds(YEAR_ONE_TO_EPOCH_SECS)).fixed_offset()
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.deep_equals(other)
    }
}

/// Map with arbitrary [`Value`] keys, kept in insertion order.
///
/// Keys are compared with deep equality; inserting an equal key replaces the
/// previous entry.
#[derive(Clone, Debug, Default)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the replaced value if the key was present.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k.deep_equals(&key)) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style insert.
    pub fn entry(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a key.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.deep_equals(key))
            .map(|(_, v)| v)
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    fn deep_equals(&self, other: &MapValue) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|w| v.deep_equals(w)))
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MapValue::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Named record with ordered fields.
///
/// # Example
///
/// ```rust
/// use plumbline::{StructValue, Value};
///
/// let user = StructValue::new("User")
///     .field("name", "Alice")
///     .field("age", 30);
/// assert_eq!(user.len(), 2);
/// assert_eq!(user.get("age"), Some(&Value::from(30)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StructValue {
    name: String,
    fields: Vec<(String, Value)>,
}

impl StructValue {
    /// Record of the named type with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Whether a field with this name exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    fn deep_equals(&self, other: &StructValue) -> bool {
        self.name == other.name
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(&other.fields)
                .all(|((an, av), (bn, bv))| an == bn && av.deep_equals(bv))
    }
}

/// Snapshot of a channel: buffered element count and capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel {
    len: usize,
    capacity: usize,
}

impl Channel {
    /// Channel holding `len` buffered elements out of `capacity`.
    pub fn new(len: usize, capacity: usize) -> Self {
        Self { len, capacity }
    }

    /// Buffered element count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Buffer capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Opaque function handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    name: String,
}

impl Function {
    /// Handle with a descriptive name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Descriptive name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    isize => Int,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    usize => Uint,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
    StructValue => Struct,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Slice(Some(items.into_iter().map(Into::into).collect()))
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Slice(Some(items.iter().cloned().map(Into::into).collect()))
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::array(items)
    }
}

/// `Some` becomes a pointer to the value, `None` a nil pointer.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Value::Pointer(value.map(|v| Box::new(v.into())))
    }
}

impl<T: Into<Value>> From<Box<T>> for Value {
    fn from(value: Box<T>) -> Self {
        Value::pointer(*value)
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::Map(Some(map.into_iter().collect()))
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Map(Some(map.into_iter().collect()))
    }
}

impl From<MapValue> for Value {
    fn from(map: MapValue) -> Self {
        Value::Map(Some(map))
    }
}

impl From<Channel> for Value {
    fn from(chan: Channel) -> Self {
        Value::Chan(Some(chan))
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Func(Some(func))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(time: DateTime<Tz>) -> Self {
        Value::Time(time.fixed_offset())
    }
}

/// Saturates at `i64::MAX` nanoseconds.
impl From<std::time::Duration> for Value {
    fn from(duration: std::time::Duration) -> Self {
        Value::Duration(i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX))
    }
}

/// Saturates at the `i64` nanosecond range.
impl From<TimeDelta> for Value {
    fn from(delta: TimeDelta) -> Self {
        let nanos = delta.num_nanoseconds().unwrap_or(if delta < TimeDelta::zero() {
            i64::MIN
        } else {
            i64::MAX
        });
        Value::Duration(nanos)
    }
}

/// JSON documents map onto the dynamic model: objects become string-keyed
/// maps, arrays become slices and `null` becomes [`Value::Nil`].
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::I64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::U64(u)
                } else {
                    Value::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => items.into(),
            serde_json::Value::Object(object) => Value::Map(Some(object.into_iter().collect())),
        }
    }
}

/// Build a `Vec<Value>` from heterogeneous items.
///
/// # Example
///
/// ```rust
/// use plumbline::{values, all_nil, Value};
///
/// let list = values![1, "two", None::<i32>];
/// assert_eq!(list.len(), 3);
/// assert!(!all_nil(list));
/// assert!(all_nil(values![(), None::<u8>, Value::nil_map()]));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($item)),+]
    };
}

/// JSON encoding of the dynamic model.
///
/// Map entries are emitted sorted by key; keys must be strings or integers.
/// Byte sequences encode as standard base64, timestamps as RFC 3339 and
/// durations as nanoseconds. Complex numbers, channels and functions have no
/// JSON form and fail to encode.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Nil
            | Value::Slice(None)
            | Value::Map(None)
            | Value::Pointer(None)
            | Value::Interface(None) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(v) => serializer.serialize_i64(*v as i64),
            Value::I8(v) => serializer.serialize_i8(*v),
            Value::I16(v) => serializer.serialize_i16(*v),
            Value::I32(v) => serializer.serialize_i32(*v),
            Value::I64(v) | Value::Duration(v) => serializer.serialize_i64(*v),
            Value::Uint(v) => serializer.serialize_u64(*v as u64),
            Value::U8(v) => serializer.serialize_u8(*v),
            Value::U16(v) => serializer.serialize_u16(*v),
            Value::U32(v) => serializer.serialize_u32(*v),
            Value::U64(v) => serializer.serialize_u64(*v),
            Value::F32(v) => serializer.serialize_f32(*v),
            Value::F64(v) => serializer.serialize_f64(*v),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Bytes(b) => {
                serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(b))
            }
            Value::Slice(Some(items)) | Value::Array(items) => serializer.collect_seq(items),
            Value::Map(Some(map)) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, value) in map.iter() {
                    let key = format_map_key(key).ok_or_else(|| {
                        S::Error::custom(format!("unsupported map key kind `{}`", key.kind()))
                    })?;
                    entries.push((key, value));
                }
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    out.serialize_entry(&key, value)?;
                }
                out.end()
            }
            Value::Struct(record) => {
                let mut out = serializer.serialize_map(Some(record.len()))?;
                for (name, value) in record.fields() {
                    out.serialize_entry(name, value)?;
                }
                out.end()
            }
            Value::Pointer(Some(inner)) | Value::Interface(Some(inner)) => {
                inner.serialize(serializer)
            }
            Value::Time(t) => {
                serializer.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Value::Complex64 { .. } | Value::Complex128 { .. } | Value::Chan(_) | Value::Func(_) => {
                Err(S::Error::custom(format!(
                    "unsupported value kind `{}`",
                    self.kind()
                )))
            }
        }
    }
}

impl fmt::Display for Value {
    /// Text rendering; values without one render as `<kind>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::convert::to_text(self) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "<{}>", self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_native_types() {
        assert_eq!(Value::from(5_i64), Value::I64(5));
        assert_eq!(Value::from("a"), Value::Str("a".into()));
        assert_eq!(
            Value::from(vec![1_u8, 2]),
            Value::Slice(Some(vec![Value::U8(1), Value::U8(2)]))
        );
        assert_eq!(Value::from([1, 2]).kind(), Kind::Array);
        assert_eq!(Value::from(None::<i32>), Value::Pointer(None));
        assert_eq!(
            Value::from(std::time::Duration::from_millis(2)),
            Value::Duration(2_000_000)
        );
    }

    #[test]
    fn test_deep_equals_requires_same_variant() {
        assert_ne!(Value::I32(1), Value::I64(1));
        assert_ne!(Value::nil_slice(), Value::from(Vec::<i32>::new()));
        assert_ne!(Value::from([1, 2]), Value::from(vec![1, 2]));
        assert_eq!(Value::pointer(3), Value::pointer(3));
    }

    #[test]
    fn test_deep_equals_maps_ignore_order() {
        let a = MapValue::new().entry("a", 1).entry("b", 2);
        let b = MapValue::new().entry("b", 2).entry("a", 1);
        assert_eq!(Value::from(a), Value::from(b));
    }

    #[test]
    fn test_functions_are_never_equal() {
        let f = Value::from(Function::new("f"));
        assert_ne!(f, f.clone());
        assert_eq!(Value::Func(None), Value::Func(None));
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        assert_ne!(Value::F64(f64::NAN), Value::F64(f64::NAN));
    }

    #[test]
    fn test_map_insert_replaces_equal_key() {
        let mut map = MapValue::new();
        assert_eq!(map.insert("k", 1), None);
        assert_eq!(map.insert("k", 2), Some(Value::from(2)));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Value::from("k")), Some(&Value::from(2)));
    }

    #[test]
    fn test_is_zero() {
        assert!(Value::from(0.0).is_zero());
        assert!(Value::from(false).is_zero());
        assert!(Value::from(StructValue::new("P").field("x", 0).field("y", "")).is_zero());
        assert!(!Value::from(StructValue::new("P").field("x", 1)).is_zero());
        assert!(Value::Time(zero_time()).is_zero());
        assert!(!Value::from(chrono::Utc::now()).is_zero());
    }

    #[test]
    fn test_serialize_sorts_map_keys() {
        let map = MapValue::new().entry("b", 2).entry("a", 1).entry(3, true);
        let json = serde_json::to_string(&Value::from(map)).unwrap();
        assert_eq!(json, r#"{"3":true,"a":1,"b":2}"#);
    }

    #[test]
    fn test_serialize_struct_and_nil() {
        let user = StructValue::new("User")
            .field("Name", "Ann")
            .field("Tags", Value::nil_slice())
            .field("Raw", Value::bytes("hi"));
        let json = serde_json::to_string(&Value::from(user)).unwrap();
        assert_eq!(json, r#"{"Name":"Ann","Tags":null,"Raw":"aGk="}"#);
    }

    #[test]
    fn test_serialize_rejects_channels() {
        let value = Value::from(vec![Value::from(Channel::new(0, 0))]);
        assert!(serde_json::to_string(&value).is_err());
    }

    #[test]
    fn test_from_json() {
        let json: serde_json::Value = serde_json::json!({"a": [1, "x", null]});
        let value = Value::from(json);
        let expected = MapValue::new().entry("a", values![1_i64, "x", ()]);
        assert_eq!(value, Value::from(expected));
    }

    #[test]
    fn test_display_falls_back_to_kind() {
        assert_eq!(Value::from(12).to_string(), "12");
        assert_eq!(Value::Func(None).to_string(), "<func>");
    }
}
