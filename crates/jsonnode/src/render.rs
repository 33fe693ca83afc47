//! Canonical JSON text.
//!
//! Output is compact: no whitespace between tokens, members in insertion order.
use core::fmt::{self, Write};

use crate::{Array, Literal, Node, Object, Primitive};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => f.write_str("null"),
            Node::Primitive(literal) => fmt::Display::fmt(literal, f),
            Node::Object(object) => fmt::Display::fmt(object, f),
            Node::Array(array) => fmt::Display::fmt(array, f),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_string() {
            write_quoted(f, self.content())
        } else {
            f.write_str(self.content())
        }
    }
}

impl fmt::Display for Primitive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Null => f.write_str("null"),
            Primitive::Literal(literal) => fmt::Display::fmt(literal, f),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (idx, (key, value)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_char(',')?;
            }
            write_quoted(f, key)?;
            f.write_char(':')?;
            fmt::Display::fmt(value, f)?;
        }
        f.write_char('}')
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (idx, element) in self.iter().enumerate() {
            if idx > 0 {
                f.write_char(',')?;
            }
            fmt::Display::fmt(element, f)?;
        }
        f.write_char(']')
    }
}

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Write `value` as a JSON string literal, escaping quotes, backslashes and control characters.
pub(crate) fn write_quoted<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    out.write_char('"')?;
    let bytes = value.as_bytes();
    let mut start = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        let escape = match byte {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            0x08 => "\\b",
            0x0c => "\\f",
            0x00..=0x1f => "",
            _ => continue,
        };
        // Escapes only replace ASCII bytes, so `start..idx` is always on char boundaries
        out.write_str(&value[start..idx])?;
        if escape.is_empty() {
            out.write_str("\\u00")?;
            out.write_char(char::from(HEX[usize::from(byte >> 4)]))?;
            out.write_char(char::from(HEX[usize::from(byte & 0xf)]))?;
        } else {
            out.write_str(escape)?;
        }
        start = idx + 1;
    }
    out.write_str(&value[start..])?;
    out.write_char('"')
}
