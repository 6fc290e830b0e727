// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Printing a [Value](crate::value::Value) one token per line: every
//! atom and string on its own line, every list as an opening paren
//! line, its items one level deeper, and a closing paren line.

use crate::escape::{push_escaped_atom, push_escaped_string};
use crate::parse::{parse_with, SyntaxError};
use crate::settings::{Format, QuoteStyle, Settings, DEFAULT_FORMAT};
use crate::value::{QuoteKind, Value};

struct Indenter<'t> {
    format: &'t Format,
    unit: String,
    out: String,
}

impl<'t> Indenter<'t> {
    // `prefix` holds quote shorthands to put before the token.
    fn line_start(&mut self, depth: usize, prefix: &str) {
        for _ in 0..depth {
            self.out.push_str(&self.unit);
        }
        self.out.push_str(prefix);
    }

    fn line(&mut self, depth: usize, s: &str) {
        self.line_start(depth, "");
        self.out.push_str(s);
        self.out.push('\n');
    }

    fn value(&mut self, v: &Value, depth: usize, prefix: &str) {
        match v {
            Value::Atom(s) => {
                self.line_start(depth, prefix);
                if self.format.escape_strings {
                    if prefix.ends_with(',') && s.starts_with('@') {
                        // would read back as `,@`
                        self.out.push('\\');
                    }
                    push_escaped_atom(&mut self.out, s);
                } else {
                    self.out.push_str(s);
                }
                self.out.push('\n');
            }
            Value::String(s) => {
                self.line_start(depth, prefix);
                self.out.push('"');
                if self.format.escape_strings {
                    push_escaped_string(&mut self.out, s);
                } else {
                    self.out.push_str(s);
                }
                self.out.push_str("\"\n");
            }
            Value::List(vals) => {
                self.line_start(depth, prefix);
                self.out.push_str("(\n");
                for v in vals {
                    self.value(v, depth + 1, "");
                }
                self.line(depth, ")");
            }
            Value::Quoted(kind, v) => {
                match self.format.quote_style {
                    QuoteStyle::List => self.quoted_as_list(*kind, v, depth, prefix),
                    QuoteStyle::Shorthand => {
                        let prefix = format!("{}{}", prefix, kind.shorthand());
                        self.value(v, depth, &prefix)
                    }
                }
            }
        }
    }

    fn quoted_as_list(&mut self, kind: QuoteKind, v: &Value, depth: usize, prefix: &str) {
        self.line_start(depth, prefix);
        self.out.push_str("(\n");
        self.line(depth + 1, kind.name());
        self.value(v, depth + 1, "");
        self.line(depth, ")");
    }
}

/// Render `v` with `format.indent_width` spaces per nesting level;
/// every line, including the last, ends with `\n`.
pub fn indent_value(v: &Value, format: &Format) -> String {
    let mut indenter = Indenter {
        format,
        unit: " ".repeat(format.indent_width),
        out: String::new(),
    };
    indenter.value(v, 0, "");
    indenter.out
}

/// Parse `text` and print it with `indent_width` spaces per level,
/// otherwise using `DEFAULT_FORMAT`.
pub fn format(text: &str, indent_width: usize) -> Result<String, SyntaxError> {
    let format = Format { indent_width, ..DEFAULT_FORMAT };
    format_with(text, &Settings { format: &format, ..Settings::default() })
}

pub fn format_with(text: &str, settings: &Settings) -> Result<String, SyntaxError> {
    tracing::trace!(len = text.len(), indent_width = settings.format.indent_width,
                    quote_style = ?settings.format.quote_style, "format");
    let v = parse_with(text, settings.limits)?;
    Ok(indent_value(&v, settings.format))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{VERBATIM_FORMAT, DEFAULT_LIMITS};

    fn shorthand() -> Format {
        Format { quote_style: QuoteStyle::Shorthand, ..DEFAULT_FORMAT }
    }

    #[test]
    fn t_nested() {
        assert_eq!(format("(a (b) c)", 3).unwrap(),
                   "(\n   a\n   (\n      b\n   )\n   c\n)\n");
        assert_eq!(format("(a (b))", 0).unwrap(),
                   "(\na\n(\nb\n)\n)\n");
    }

    #[test]
    fn t_quoted_as_list() {
        assert_eq!(format("(f 'x)", 2).unwrap(),
                   "(\n  f\n  (\n    quote\n    x\n  )\n)\n");
        assert_eq!(format(",@(a)", 2).unwrap(),
                   "(\n  unquote-splicing\n  (\n    a\n  )\n)\n");
    }

    #[test]
    fn t_quoted_shorthand() {
        let v = parse_with("(f 'x `(a ,b ,@c) ''\"s\")", &DEFAULT_LIMITS).unwrap();
        assert_eq!(indent_value(&v, &shorthand()),
                   "(\n  f\n  'x\n  `(\n    a\n    ,b\n    ,@c\n  )\n  ''\"s\"\n)\n");
    }

    #[test]
    fn t_shorthand_unquote_at_atom() {
        let v = Value::quoted(QuoteKind::Unquote, Value::atom("@x"));
        let s = indent_value(&v, &shorthand());
        assert_eq!(s, ",\\@x\n");
        assert_eq!(parse_with(&s, &DEFAULT_LIMITS).unwrap(), v);
    }

    #[test]
    fn t_escaping() {
        let s = format(r#"("a\"b\\c\nd" x\ y)"#, 2).unwrap();
        assert_eq!(s, "(\n  \"a\\\"b\\\\c\\nd\"\n  x\\ y\n)\n");

        let v = parse_with(r#""a\"b\nc""#, &DEFAULT_LIMITS).unwrap();
        assert_eq!(indent_value(&v, &VERBATIM_FORMAT), "\"a\"b\nc\"\n");
    }
}
