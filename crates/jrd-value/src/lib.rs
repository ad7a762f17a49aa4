//! The value model: a tagged sum type for the seven JSON value kinds.
//!
//! `examples/original_source/include/jsonTypes.h`'s `JsonValue` is a
//! `std::variant` wrapped in typed accessors (`getInt`, `getString`, ...)
//! that assert the tag and throw on mismatch. `Value` below replaces that
//! with an ordinary enum: consumers that need to branch on kind
//! destructure it, so a type-mismatch is a compile error rather than a
//! runtime one. The fallible accessors in `accessors.rs` exist only for API
//! parity with the original surface — the parser and pretty-printer never
//! call them.

mod accessors;
mod builder;

pub use accessors::TypeMismatchError;
pub use builder::{DefaultBuilder, ValueBuilder};

use rustc_hash::FxHashMap;

/// A fully materialized JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(FxHashMap<String, Value>),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}
