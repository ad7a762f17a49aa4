//! Pretty-printer: walks a [`Value`] and writes indented, human-readable
//! text. Not part of the original's typed-accessor surface — added to
//! support the round-trip property in spec §8 and the CLI's default
//! rendering, in the spirit of `faxc-drv`'s AST-to-text passes.

use std::fmt::{self, Write};

use jrd_value::Value;

/// Writes `value` to `out`, indenting nested containers by `indent_width`
/// spaces per level. Object keys are sorted for deterministic output,
/// since [`jrd_value::Value::Object`] is an unordered map.
pub fn write_value(out: &mut impl Write, value: &Value, indent_width: usize) -> fmt::Result {
    write_value_at(out, value, indent_width, 0)
}

pub fn to_string(value: &Value, indent_width: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, indent_width).expect("String writer never fails");
    out
}

fn write_value_at(out: &mut impl Write, value: &Value, indent_width: usize, depth: usize) -> fmt::Result {
    match value {
        Value::Null => write!(out, "null"),
        Value::Bool(b) => write!(out, "{b}"),
        Value::Int(i) => write!(out, "{i}"),
        Value::Float(f) => write!(out, "{f}"),
        Value::String(s) => write_escaped_string(out, s),
        Value::Array(items) => write_array(out, items, indent_width, depth),
        Value::Object(map) => write_object(out, map, indent_width, depth),
    }
}

fn write_array(out: &mut impl Write, items: &[Value], indent_width: usize, depth: usize) -> fmt::Result {
    if items.is_empty() {
        return write!(out, "[]");
    }
    writeln!(out, "[")?;
    let inner = indent(indent_width, depth + 1);
    for (i, item) in items.iter().enumerate() {
        write!(out, "{inner}")?;
        write_value_at(out, item, indent_width, depth + 1)?;
        if i + 1 < items.len() {
            write!(out, ",")?;
        }
        writeln!(out)?;
    }
    write!(out, "{}]", indent(indent_width, depth))
}

fn write_object(
    out: &mut impl Write,
    map: &rustc_hash::FxHashMap<String, Value>,
    indent_width: usize,
    depth: usize,
) -> fmt::Result {
    if map.is_empty() {
        return write!(out, "{{}}");
    }
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    writeln!(out, "{{")?;
    let inner = indent(indent_width, depth + 1);
    for (i, key) in keys.iter().enumerate() {
        write!(out, "{inner}")?;
        write_escaped_string(out, key)?;
        write!(out, ": ")?;
        write_value_at(out, &map[*key], indent_width, depth + 1)?;
        if i + 1 < keys.len() {
            write!(out, ",")?;
        }
        writeln!(out)?;
    }
    write!(out, "{}}}", indent(indent_width, depth))
}

fn write_escaped_string(out: &mut impl Write, s: &str) -> fmt::Result {
    write!(out, "\"")?;
    for c in s.chars() {
        match c {
            '"' => write!(out, "\\\"")?,
            '\\' => write!(out, "\\\\")?,
            '\n' => write!(out, "\\n")?,
            '\r' => write!(out, "\\r")?,
            '\t' => write!(out, "\\t")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32)?,
            c => write!(out, "{c}")?,
        }
    }
    write!(out, "\"")
}

fn indent(width: usize, depth: usize) -> String {
    " ".repeat(width * depth)
}
