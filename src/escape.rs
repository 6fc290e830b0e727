// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The escape table shared by the parser (resolving `\n` etc. in
//! strings) and the printer (writing them back).

/// Whitespace as separating tokens: the Unicode white space set,
/// without U+0085 (NEL) and with U+FEFF (BOM).
pub fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Characters that end a bare atom; they can only appear in one when
/// preceded by a backslash.
pub fn ends_atom(c: char) -> bool {
    is_whitespace(c) || matches!(c, '\\' | '"' | '\'' | '`' | ',' | '(' | ')')
}

/// The character denoted by `\c` inside a string. Anything not in the
/// table stands for itself.
pub fn unescape(c: char) -> char {
    match c {
        'r' => '\r',
        't' => '\t',
        'n' => '\n',
        'f' => '\x0C',
        'b' => '\x08',
        _ => c
    }
}

/// Append the resolution of the text consumed after a backslash; that
/// is one character, or a `\r\n` pair which is taken literally.
pub fn push_unescaped(out: &mut String, escaped: &str) {
    let mut cs = escaped.chars();
    match (cs.next(), cs.next()) {
        (Some(c), None) => out.push(unescape(c)),
        _ => out.push_str(escaped),
    }
}

/// Inverse of `unescape`, for characters that must not appear raw
/// between string delimiters.
pub fn char2escape(c: char) -> Option<&'static str> {
    match c {
        '"' => Some("\\\""),
        '\\' => Some("\\\\"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        '\n' => Some("\\n"),
        '\x0C' => Some("\\f"),
        '\x08' => Some("\\b"),
        _ => None
    }
}

pub fn push_escaped_string(out: &mut String, s: &str) {
    for c in s.chars() {
        if let Some(e) = char2escape(c) {
            out.push_str(e);
        } else {
            out.push(c);
        }
    }
}

pub fn push_escaped_atom(out: &mut String, s: &str) {
    for c in s.chars() {
        if ends_atom(c) {
            out.push('\\');
        }
        out.push(c);
    }
}
