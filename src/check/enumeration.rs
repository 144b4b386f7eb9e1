//! Enumeration validity

/// A closed set of values that knows which of its members are valid.
///
/// Implemented for types whose representation can hold out-of-range values,
/// such as an enum decoded from an integer or a string.
///
/// # Example
///
/// ```rust
/// use plumbline::{is_enum_valid, EnumValue};
///
/// struct Status(&'static str);
///
/// impl EnumValue for Status {
///     fn is_enum_valid(&self) -> bool {
///         matches!(self.0, "active" | "inactive")
///     }
/// }
///
/// assert!(is_enum_valid(Some(&Status("active"))));
/// assert!(!is_enum_valid(Some(&Status("deleted"))));
/// assert!(!is_enum_valid(None::<&Status>));
/// ```
pub trait EnumValue {
    /// Whether this value is a member of the enumeration.
    fn is_enum_valid(&self) -> bool;
}

impl<E: EnumValue + ?Sized> EnumValue for &E {
    fn is_enum_valid(&self) -> bool {
        (**self).is_enum_valid()
    }
}

impl<E: EnumValue + ?Sized> EnumValue for Box<E> {
    fn is_enum_valid(&self) -> bool {
        (**self).is_enum_valid()
    }
}

impl<E: EnumValue> EnumValue for Option<E> {
    fn is_enum_valid(&self) -> bool {
        self.as_ref().is_some_and(EnumValue::is_enum_valid)
    }
}

/// True when `value` is present and a valid member of its enumeration.
pub fn is_enum_valid<E: EnumValue + ?Sized>(value: Option<&E>) -> bool {
    value.is_some_and(EnumValue::is_enum_valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    struct Level(u8);

    impl EnumValue for Level {
        fn is_enum_valid(&self) -> bool {
            self.0 <= 3
        }
    }

    #[test]
    fn test_members_and_outsiders() {
        assert!(is_enum_valid(Some(&Level(0))));
        assert!(is_enum_valid(Some(&Level(3))));
        assert!(!is_enum_valid(Some(&Level(4))));
    }

    #[test]
    fn test_absent_value_is_invalid() {
        assert!(!is_enum_valid::<Level>(None));
        assert!(!is_enum_valid(Some(&None::<Level>)));
    }

    #[test]
    fn test_through_indirection() {
        let boxed: Box<dyn EnumValue> = Box::new(Level(1));
        assert!(is_enum_valid(Some(&boxed)));
        assert!(is_enum_valid(Some(boxed.as_ref())));
        assert!(is_enum_valid(Some(&Some(&Level(2)))));
    }
}
