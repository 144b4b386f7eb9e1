//! The predicate library
//!
//! Independent checks grouped by family. Each accepts anything that converts
//! into a [`Value`](crate::Value), so native Rust values can be passed
//! directly. Checks that go through a conversion return
//! [`Result<bool>`](crate::Result); checks that only look at kinds or nil
//! flags return `bool`.
//!
//! Negative checks are always the negation of their positive counterpart.
//!
//! # Example
//!
//! ```rust
//! use plumbline::check::*;
//!
//! assert!(is_empty("  "));
//! assert!(is_greater_than(3, "2.5").unwrap());
//! assert!(contains(vec!["a", "b"], "b").unwrap());
//! assert!(is_cpf("891.595.290-16").unwrap());
//! assert!(is_map_type(plumbline::MapValue::new()));
//! ```

mod contain;
mod document;
mod empty;
mod enumeration;
mod equal;
mod size;
mod string;
mod time;
mod types;

pub use contain::{contains, contains_ignore_case, contains_key, contains_on_slice};
pub use document::{is_cnpj, is_cpf, is_cpf_or_cnpj, is_document, Document};
pub use empty::{
    all_empty, all_nil, all_nil_or_empty, if_empty_returns, if_nil_returns, is_empty, is_nil,
    is_nil_or_empty, is_not_empty, is_not_nil, is_not_nil_or_empty, none_empty, none_nil,
    none_nil_or_empty,
};
pub use enumeration::{is_enum_valid, EnumValue};
pub use equal::{all_equals, equals, equals_ignore_case, none_equals, not_equals};
pub use size::{
    is_greater_than, is_greater_than_or_equal, is_length_equals, is_length_greater_than,
    is_length_greater_than_or_equal, is_length_less_than, is_length_less_than_or_equal,
    is_length_not_equals, is_less_than, is_less_than_or_equal,
};
pub use string::{
    is_alpha, is_alpha_space, is_android_device_id, is_base64, is_bcrypt, is_bearer, is_email,
    is_full_name, is_http_method, is_ios_device_id, is_mobile_device_id, is_mobile_platform,
    is_not_email, is_not_full_name, is_not_numeric, is_numeric, is_numeric_space, is_private_ip,
    is_url, is_url_path,
};
pub use time::{
    is_after, is_after_date, is_after_now, is_after_today, is_before, is_before_date,
    is_before_now, is_before_today, is_today,
};
pub use types::{
    is_array_type, is_bool, is_bool_type, is_byte_unit, is_bytes_type, is_chan_type,
    is_duration, is_duration_type, is_float, is_float32_type, is_float64_type, is_func_type,
    is_int, is_int16_type, is_int32_type, is_int64_type, is_int8_type, is_int_type, is_json,
    is_map, is_map_type, is_pointer_type, is_slice, is_slice_of_maps, is_slice_or_array_type,
    is_slice_type, is_string_type, is_struct_type, is_time, is_time_type, is_uint16_type,
    is_uint32_type, is_uint64_type, is_uint8_type, is_uint_type,
};
