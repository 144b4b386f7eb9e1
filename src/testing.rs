//! Testing utilities for code built on plumbline checks
//!
//! Fallible checks return `Result<bool>`, which makes plain `assert!` noisy:
//! a failing `assert!(check(..).unwrap())` does not say whether the check
//! answered `false` or the value could not be converted. The macros here keep
//! the three outcomes apart.
//!
//! # Examples
//!
//! ```rust
//! use plumbline::{assert_check_error, assert_holds, assert_rejects};
//! use plumbline::{is_greater_than, is_private_ip, CheckError};
//!
//! assert_holds!(is_private_ip("10.0.0.1"));
//! assert_rejects!(is_private_ip("8.8.8.8"));
//! assert_check_error!(is_greater_than("ten", 1), CheckError::Parse { .. });
//! ```
//!
//! With the `proptest` feature, [`Value`](crate::Value) implements
//! `proptest::arbitrary::Arbitrary`, generating nested slices, arrays,
//! pointers and structs over a handful of scalar kinds.

/// Assert that a fallible check answered `true`.
///
/// Panics if the check answered `false` or returned an error.
///
/// # Example
///
/// ```rust
/// use plumbline::{assert_holds, contains};
///
/// assert_holds!(contains("Hello World", "World"));
/// ```
#[macro_export]
macro_rules! assert_holds {
    ($check:expr) => {
        match $check {
            ::core::result::Result::Ok(true) => {}
            ::core::result::Result::Ok(false) => {
                panic!("Expected check to hold, got false: {}", stringify!($check));
            }
            ::core::result::Result::Err(e) => {
                panic!("Expected check to hold, got error: {}", e);
            }
        }
    };
}

/// Assert that a fallible check answered `false`.
///
/// Panics if the check answered `true` or returned an error.
///
/// # Example
///
/// ```rust
/// use plumbline::{assert_rejects, is_bearer};
///
/// assert_rejects!(is_bearer(12345));
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($check:expr) => {
        match $check {
            ::core::result::Result::Ok(false) => {}
            ::core::result::Result::Ok(true) => {
                panic!("Expected check to reject, got true: {}", stringify!($check));
            }
            ::core::result::Result::Err(e) => {
                panic!("Expected check to reject, got error: {}", e);
            }
        }
    };
}

/// Assert that a fallible check returned an error, optionally matching a
/// pattern.
///
/// # Example
///
/// ```rust
/// use plumbline::{assert_check_error, is_length_equals, CheckError, Kind};
///
/// assert_check_error!(is_length_equals(true, 1));
/// assert_check_error!(
///     is_length_equals(true, 1),
///     CheckError::UnsupportedKind { kind: Kind::Bool, .. }
/// );
/// ```
#[macro_export]
macro_rules! assert_check_error {
    ($check:expr) => {
        match $check {
            ::core::result::Result::Err(_) => {}
            ::core::result::Result::Ok(answer) => {
                panic!("Expected error, got Ok({:?})", answer);
            }
        }
    };
    ($check:expr, $pattern:pat) => {
        match $check {
            ::core::result::Result::Err(e) => {
                assert!(
                    matches!(e, $pattern),
                    "Expected error matching {}, got {:?}",
                    stringify!($pattern),
                    e
                );
            }
            ::core::result::Result::Ok(answer) => {
                panic!(
                    "Expected error matching {}, got Ok({:?})",
                    stringify!($pattern),
                    answer
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::value::{StructValue, Value};

    impl Arbitrary for Value {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            let leaf = prop_oneof![
                Just(Value::Nil),
                any::<bool>().prop_map(Value::Bool),
                any::<i32>().prop_map(Value::I32),
                any::<i64>().prop_map(Value::I64),
                any::<u8>().prop_map(Value::U8),
                any::<u64>().prop_map(Value::U64),
                proptest::num::f64::NORMAL.prop_map(Value::F64),
                "[a-zA-Z0-9 ]{0,12}".prop_map(Value::Str),
            ];
            leaf.prop_recursive(3, 24, 4, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..4)
                        .prop_map(|items| Value::Slice(Some(items))),
                    prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                    inner.clone().prop_map(|v| Value::pointer(v)),
                    prop::collection::vec(inner, 0..3).prop_map(|fields| {
                        let record = fields
                            .into_iter()
                            .enumerate()
                            .fold(StructValue::new("Generated"), |record, (i, v)| {
                                record.field(format!("F{}", i), v)
                            });
                        Value::Struct(record)
                    }),
                ]
            })
            .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{CheckError, Result};
    use crate::inspect::Kind;

    fn answer(b: bool) -> Result<bool> {
        Ok(b)
    }

    fn failure() -> Result<bool> {
        Err(CheckError::nil("test"))
    }

    #[test]
    fn assert_holds_macro() {
        assert_holds!(answer(true));
    }

    #[test]
    fn assert_rejects_macro() {
        assert_rejects!(answer(false));
    }

    #[test]
    fn assert_check_error_macro() {
        assert_check_error!(failure());
        assert_check_error!(failure(), CheckError::NilOperand { .. });
        assert_check_error!(
            crate::check::is_greater_than(true, 1),
            CheckError::UnsupportedKind { kind: Kind::Bool, .. }
        );
    }

    #[test]
    #[should_panic(expected = "Expected check to hold, got false")]
    fn assert_holds_panics_on_false() {
        assert_holds!(answer(false));
    }

    #[test]
    #[should_panic(expected = "Expected check to hold, got error")]
    fn assert_holds_panics_on_error() {
        assert_holds!(failure());
    }

    #[test]
    #[should_panic(expected = "Expected check to reject, got true")]
    fn assert_rejects_panics_on_true() {
        assert_rejects!(answer(true));
    }

    #[test]
    #[should_panic(expected = "Expected error, got Ok(true)")]
    fn assert_check_error_panics_on_answer() {
        assert_check_error!(answer(true));
    }

    #[test]
    #[should_panic(expected = "Expected error matching")]
    fn assert_check_error_panics_on_other_error() {
        assert_check_error!(failure(), CheckError::Parse { .. });
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::value::Value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_values_equal_themselves(value in any::<Value>()) {
                prop_assert!(value.deep_equals(&value.clone()));
            }
        }
    }
}
