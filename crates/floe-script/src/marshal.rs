//! Conversion of script-side values into host-native typed values.
//!
//! Conversions are pure and fail with [`ScriptError::TypeMismatch`] when
//! the value has the wrong type or falls outside the representable range.
//! The exception is `bool`, which follows the runtime's truthiness rule
//! and never fails. That asymmetry is part of the bridge contract.

use crate::error::ScriptError;
use crate::value::ScriptValue;

/// Integer conversions accept values up to the embedded runtime's native
/// signed maximum. Grid coordinate magnitudes stay below this ceiling.
const NATIVE_INT_MAX: i64 = i32::MAX as i64;

/// A host type a script value can convert into.
pub trait FromScript: Sized {
    /// Convert a script-side value into this host type.
    fn from_script(value: &ScriptValue) -> Result<Self, ScriptError>;
}

impl FromScript for f64 {
    fn from_script(value: &ScriptValue) -> Result<Self, ScriptError> {
        match value {
            ScriptValue::Integer(i) => Ok(*i as f64),
            ScriptValue::Float(f) => Ok(*f),
            other => Err(ScriptError::TypeMismatch {
                expected: "a float or integer",
                actual: other.type_name(),
            }),
        }
    }
}

impl FromScript for String {
    fn from_script(value: &ScriptValue) -> Result<Self, ScriptError> {
        match value {
            ScriptValue::Str(s) => Ok(s.clone()),
            other => Err(ScriptError::TypeMismatch {
                expected: "a string",
                actual: other.type_name(),
            }),
        }
    }
}

impl FromScript for u32 {
    fn from_script(value: &ScriptValue) -> Result<Self, ScriptError> {
        match value {
            ScriptValue::Integer(i) if (0..=NATIVE_INT_MAX).contains(i) => Ok(*i as u32),
            ScriptValue::Integer(_) => Err(ScriptError::TypeMismatch {
                expected: "an integer within native range",
                actual: "an out-of-range integer",
            }),
            other => Err(ScriptError::TypeMismatch {
                expected: "an integer within native range",
                actual: other.type_name(),
            }),
        }
    }
}

impl FromScript for i32 {
    fn from_script(value: &ScriptValue) -> Result<Self, ScriptError> {
        match value {
            ScriptValue::Integer(i) if i32::try_from(*i).is_ok() => Ok(*i as i32),
            ScriptValue::Integer(_) => Err(ScriptError::TypeMismatch {
                expected: "an integer within native range",
                actual: "an out-of-range integer",
            }),
            other => Err(ScriptError::TypeMismatch {
                expected: "an integer within native range",
                actual: other.type_name(),
            }),
        }
    }
}

impl FromScript for bool {
    // Truthiness, not a type check: nil and false are false, everything
    // else is true. The only conversion that cannot fail.
    fn from_script(value: &ScriptValue) -> Result<Self, ScriptError> {
        match value {
            ScriptValue::Nil | ScriptValue::Bool(false) => Ok(false),
            ScriptValue::Bool(true)
            | ScriptValue::Integer(_)
            | ScriptValue::Float(_)
            | ScriptValue::Str(_)
            | ScriptValue::Array(_)
            | ScriptValue::Other(_) => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn float_accepts_both_numeric_variants() {
        assert_eq!(f64::from_script(&ScriptValue::Float(0.5)).unwrap(), 0.5);
        assert_eq!(f64::from_script(&ScriptValue::Integer(3)).unwrap(), 3.0);
    }

    #[test]
    fn float_rejects_non_numeric() {
        let err = f64::from_script(&ScriptValue::Str("0.5".into())).unwrap_err();
        assert_eq!(
            err,
            ScriptError::TypeMismatch {
                expected: "a float or integer",
                actual: "string",
            }
        );
    }

    #[test]
    fn string_accepts_only_strings() {
        assert_eq!(
            String::from_script(&ScriptValue::Str("test string".into())).unwrap(),
            "test string"
        );
        assert!(String::from_script(&ScriptValue::Integer(1)).is_err());
    }

    #[test]
    fn unsigned_accepts_native_range_only() {
        assert_eq!(u32::from_script(&ScriptValue::Integer(0)).unwrap(), 0);
        assert_eq!(
            u32::from_script(&ScriptValue::Integer(i32::MAX as i64)).unwrap(),
            i32::MAX as u32
        );
        assert!(u32::from_script(&ScriptValue::Integer(i32::MAX as i64 + 1)).is_err());
        assert!(u32::from_script(&ScriptValue::Integer(-1)).is_err());
        assert!(u32::from_script(&ScriptValue::Float(1.0)).is_err());
    }

    #[test]
    fn signed_accepts_native_range_only() {
        assert_eq!(
            i32::from_script(&ScriptValue::Integer(i32::MAX as i64)).unwrap(),
            i32::MAX
        );
        assert_eq!(
            i32::from_script(&ScriptValue::Integer(i32::MIN as i64)).unwrap(),
            i32::MIN
        );
        assert!(i32::from_script(&ScriptValue::Integer(i32::MAX as i64 + 1)).is_err());
    }

    #[test]
    fn bool_follows_truthiness_and_never_fails() {
        assert!(!bool::from_script(&ScriptValue::Nil).unwrap());
        assert!(!bool::from_script(&ScriptValue::Bool(false)).unwrap());
        assert!(bool::from_script(&ScriptValue::Bool(true)).unwrap());
        // Zero is truthy; only nil and false are falsy.
        assert!(bool::from_script(&ScriptValue::Integer(0)).unwrap());
        assert!(bool::from_script(&ScriptValue::Str(String::new())).unwrap());
        assert!(bool::from_script(&ScriptValue::Other("function")).unwrap());
    }

    proptest! {
        #[test]
        fn unsigned_conversion_matches_range_predicate(i in proptest::num::i64::ANY) {
            let result = u32::from_script(&ScriptValue::Integer(i));
            prop_assert_eq!(result.is_ok(), (0..=i32::MAX as i64).contains(&i));
        }

        #[test]
        fn signed_conversion_matches_range_predicate(i in proptest::num::i64::ANY) {
            let result = i32::from_script(&ScriptValue::Integer(i));
            prop_assert_eq!(result.is_ok(), i32::try_from(i).is_ok());
        }

        #[test]
        fn every_value_converts_to_bool(f in proptest::num::f64::ANY) {
            prop_assert!(bool::from_script(&ScriptValue::Float(f)).is_ok());
        }
    }
}
