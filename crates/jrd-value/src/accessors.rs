//! Fallible typed accessors, kept for parity with the original's
//! `getInt`/`getFloat`/`getBool`/`getString`/`getArray`/`getObject`. Not
//! used by the core pipeline, which destructures `Value` directly.

use rustc_hash::FxHashMap;

use crate::Value;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
#[error("expected a {expected} value, found {found}")]
pub struct TypeMismatchError {
    pub expected: &'static str,
    pub found: &'static str,
}

macro_rules! accessor {
    ($name:ident, $variant:ident, $out:ty, $expected:literal) => {
        pub fn $name(&self) -> Result<&$out, TypeMismatchError> {
            match self {
                Value::$variant(v) => Ok(v),
                other => {
                    Err(TypeMismatchError { expected: $expected, found: other.kind_name() })
                },
            }
        }
    };
}

impl Value {
    accessor!(as_bool, Bool, bool, "bool");
    accessor!(as_int, Int, i64, "int");
    accessor!(as_float, Float, f64, "float");
    accessor!(as_str, String, String, "string");
    accessor!(as_array, Array, Vec<Value>, "array");
    accessor!(as_object, Object, FxHashMap<String, Value>, "object");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_kind_succeeds() {
        assert_eq!(Value::Int(5).as_int(), Ok(&5));
    }

    #[test]
    fn mismatched_kind_reports_both_kinds() {
        let err = Value::Bool(true).as_int().unwrap_err();
        assert_eq!(err.expected, "int");
        assert_eq!(err.found, "bool");
    }
}
