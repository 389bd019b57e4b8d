//! Block-style YAML writer for `serde_yaml::Value` trees.
//!
//! - String scalars are always double-quoted; numbers, booleans and nulls
//!   are written bare.
//! - Mapping keys are plain unless they would read back as something other
//!   than the same string.
//! - Nested mappings and sequence items sit two spaces under their key, and
//!   a mapping inside a sequence starts on the `- ` line.
//! - Lines are never folded. An empty root mapping is an empty document.

use serde_yaml::{Mapping, Value};

const INDENT: usize = 2;

const RESERVED_WORDS: &[&str] = &[
    "null", "Null", "NULL", "true", "True", "TRUE", "false", "False", "FALSE",
];

pub(crate) fn document(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Mapping(entries) if entries.is_empty() => {}
        Value::Mapping(entries) => mapping(&mut out, entries, 0),
        Value::Sequence(items) if !items.is_empty() => sequence(&mut out, items, 0),
        other => {
            out.push_str(&inline(other));
            out.push('\n');
        }
    }
    out
}

fn mapping(out: &mut String, entries: &Mapping, indent: usize) {
    let pad = " ".repeat(indent);
    for (key, value) in entries {
        entry(out, &format!("{pad}{}:", mapping_key(key)), value, indent + INDENT);
    }
}

fn sequence(out: &mut String, items: &[Value], indent: usize) {
    let pad = " ".repeat(indent);
    for item in items {
        match item {
            Value::Mapping(entries) if !entries.is_empty() => {
                compact(out, &pad, |nested| mapping(nested, entries, indent + INDENT));
            }
            Value::Sequence(inner) if !inner.is_empty() => {
                compact(out, &pad, |nested| sequence(nested, inner, indent + INDENT));
            }
            _ => entry(out, &format!("{pad}-"), item, indent + INDENT),
        }
    }
}

/// Writes `value` after `lead`, either on the same line or as a nested block
/// at `indent`.
fn entry(out: &mut String, lead: &str, value: &Value, indent: usize) {
    match value {
        Value::Mapping(entries) if !entries.is_empty() => {
            out.push_str(lead);
            out.push('\n');
            mapping(out, entries, indent);
        }
        Value::Sequence(items) if !items.is_empty() => {
            out.push_str(lead);
            out.push('\n');
            sequence(out, items, indent);
        }
        Value::Tagged(tagged) => {
            entry(out, &format!("{lead} {}", tagged.tag), &tagged.value, indent);
        }
        scalar => {
            out.push_str(lead);
            out.push(' ');
            out.push_str(&inline(scalar));
            out.push('\n');
        }
    }
}

/// Renders a block collection one level deeper and pulls its first line up
/// onto the `- ` indicator.
fn compact(out: &mut String, pad: &str, render: impl FnOnce(&mut String)) {
    let mut nested = String::new();
    render(&mut nested);

    let nested_pad = " ".repeat(pad.len() + INDENT);
    out.push_str(pad);
    out.push_str("- ");
    out.push_str(nested.strip_prefix(&nested_pad).unwrap_or(&nested));
}

fn inline(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(inline).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", mapping_key(k), inline(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, inline(&tagged.value)),
    }
}

fn mapping_key(key: &Value) -> String {
    match key {
        Value::String(s) if is_plain_key(s) => s.clone(),
        other => inline(other),
    }
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !RESERVED_WORDS.contains(&key)
}

/// Double-quoted YAML scalar.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            '\u{1b}' => out.push_str("\\e"),
            '\u{85}' => out.push_str("\\N"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if c.is_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
