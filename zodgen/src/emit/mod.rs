//! Kind emitters.
//!
//! One function per type kind, grouped by family. Each turns a definition
//! into a Zod builder expression: a base constructor followed by zero or
//! more constraint calls, one per attribute that is present, in a fixed
//! order. Composite kinds take an [`Emit`] callback to generate children.
//!
//! | Family | Module |
//! |--------|--------|
//! | string, number, boolean, literal, enum, null, any | [`basic`] |
//! | array, object, tuple, anyOf, allOf, oneOf | [`composite`] |
//! | email, uuid, cuid, guid, ulid, nanoid, url, color, timezone | [`formatted`] |
//! | base32, base36, base64, base64url, hex, hash | [`binary`] |
//! | ipv4, ipv6, cidrv4, cidrv6, mac | [`network`] |
//! | date, time, datetime, duration | [`time`] |

pub mod basic;
pub mod binary;
pub mod composite;
pub mod formatted;
pub mod network;
pub mod time;

use crate::model::{LiteralValue, Type};

/// Expression that rejects every value.
pub const NEVER: &str = "z.never()";

/// Recursive generation callback handed to composite emitters.
pub trait Emit {
    /// Generate the expression for a child type.
    fn emit(&mut self, ty: &Type) -> String;
}

impl<F> Emit for F
where
    F: FnMut(&Type) -> String,
{
    fn emit(&mut self, ty: &Type) -> String {
        self(ty)
    }
}

/// Quote a string the way `JSON.stringify` does.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Format a number the way JavaScript prints it.
pub fn js_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        // Rust prints `1e21` / `1.5e-7`; JavaScript wants an explicit sign.
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", n)
}

/// Encode a literal the way `JSON.stringify` does.
pub fn js_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Null => "null".to_string(),
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Number(n) if n.is_finite() => js_number(*n),
        // JSON.stringify turns non-finite numbers into null.
        LiteralValue::Number(_) => "null".to_string(),
        LiteralValue::String(s) => js_string(s),
    }
}

/// Append `.method(arg)` when the attribute is present.
pub(crate) fn push_call<T: std::fmt::Display>(schema: &mut String, method: &str, arg: Option<T>) {
    if let Some(arg) = arg {
        schema.push_str(&format!(".{}({})", method, arg));
    }
}

/// Escape characters that are special inside a regex character class.
pub(crate) fn escape_class(chars: &str) -> String {
    let mut out = String::with_capacity(chars.len());
    for c in chars.chars() {
        if matches!(c, '\\' | ']' | '[' | '^' | '-' | '/') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
