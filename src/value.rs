// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runtime data types representing an S-expression value.

//! All atoms are text: numbers are not distinguished from symbols.
//! Strings are kept apart from atoms since they print with their
//! delimiters.

use kstring::KString;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    Quote,
    Quasiquote,
    Unquote,
    UnquoteSplicing,
}

impl QuoteKind {
    /// The kind introduced by a single shorthand character; `,@` is
    /// detected by the parser after seeing `,`.
    pub fn from_char(c: char) -> Option<QuoteKind> {
        match c {
            '\'' => Some(QuoteKind::Quote),
            '`' => Some(QuoteKind::Quasiquote),
            ',' => Some(QuoteKind::Unquote),
            _ => None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QuoteKind::Quote => "quote",
            QuoteKind::Quasiquote => "quasiquote",
            QuoteKind::Unquote => "unquote",
            QuoteKind::UnquoteSplicing => "unquote-splicing",
        }
    }

    pub fn shorthand(self) -> &'static str {
        match self {
            QuoteKind::Quote => "'",
            QuoteKind::Quasiquote => "`",
            QuoteKind::Unquote => ",",
            QuoteKind::UnquoteSplicing => ",@",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Bare token, never empty when produced by the parser
    Atom(KString),
    /// Contents of a `"..."` literal, escapes resolved
    String(KString),
    List(Vec<Value>),
    Quoted(QuoteKind, Box<Value>),
}

impl Value {
    /// Easily create an atom
    pub fn atom(s: &str) -> Value {
        Value::Atom(KString::from_ref(s))
    }

    /// Easily create a string
    pub fn string(s: &str) -> Value {
        Value::String(KString::from_ref(s))
    }

    pub fn list(vals: impl IntoIterator<Item = Value>) -> Value {
        Value::List(vals.into_iter().collect())
    }

    pub fn quoted(kind: QuoteKind, val: Value) -> Value {
        Value::Quoted(kind, Box::new(val))
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Value::Atom(s) => Some(s.as_str()),
            _ => None
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None
        }
    }
}
