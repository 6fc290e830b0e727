// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Recursive descent from text to a [Value](crate::value::Value).
//! Which rule applies is always decided by the next character, so
//! there is no backtracking: the first error ends the parse and is
//! returned with the position where it was detected.

use crate::escape::{ends_atom, push_unescaped};
use crate::pos::Pos;
use crate::scanner::Scanner;
use crate::settings::{Limits, DEFAULT_LIMITS};
use crate::value::{QuoteKind, Value};
use kstring::KString;
use thiserror::Error;

/// The character the parser was looking at when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seen(pub Option<char>);

impl std::fmt::Display for Seen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self.0 {
            Some(c) => f.write_fmt(format_args!("`{}`", c)),
            None => f.write_str("end of input"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Expected `(` - saw {0} instead.")]
    ExpectedOpenParen(Seen),
    #[error("Expected `)` - saw: {0}")]
    ExpectedCloseParen(Seen),
    #[error("Unexpected {seen} after `{shorthand}`")]
    MissingQuotedExpr { seen: Seen, shorthand: &'static str },
    #[error("Superfluous characters after expression: `{0}`")]
    Superfluous(char),
    #[error("Expected an expression, saw end of input")]
    EmptyInput,
    #[error("Nesting too deep")]
    NestingTooDeep,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Syntax error: {err} {pos}")]
pub struct SyntaxError {
    pub err: ParseError,
    pub pos: Pos
}

impl SyntaxError {
    pub fn message(&self) -> String {
        self.err.to_string()
    }

    /// 1-based
    pub fn line(&self) -> u32 {
        self.pos.line + 1
    }

    /// 1-based
    pub fn column(&self) -> u32 {
        self.pos.col + 1
    }
}

impl ParseError {
    fn at(self, p: Pos) -> SyntaxError {
        SyntaxError {
            err: self,
            pos: p
        }
    }
}

pub struct Parser<'s> {
    scanner: Scanner<'s>,
    depth_fuel: u32,
}

impl<'s> Parser<'s> {
    pub fn new(text: &'s str, limits: &Limits) -> Self {
        Parser {
            scanner: Scanner::new(text),
            depth_fuel: limits.max_depth,
        }
    }

    fn error<T>(&self, err: ParseError) -> Result<T, SyntaxError> {
        Err(err.at(self.scanner.pos()))
    }

    fn descend(&mut self) -> Result<(), SyntaxError> {
        if self.depth_fuel == 0 {
            return self.error(ParseError::NestingTooDeep)
        }
        self.depth_fuel -= 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth_fuel += 1;
    }

    /// One expression, with the whitespace around it. `Ok(None)` if
    /// there is nothing to parse here (end of input or a `)`).
    pub fn expr(&mut self) -> Result<Option<Value>, SyntaxError> {
        self.scanner.skip_whitespace();
        let c = self.scanner.peek();
        let v = if let Some(kind) = c.and_then(QuoteKind::from_char) {
            Some(self.quoted(kind)?)
        } else if c == Some('(') {
            Some(self.list()?)
        } else {
            self.atom()?
        };
        self.scanner.skip_whitespace();
        Ok(v)
    }

    /// Parse a whole input: exactly one expression and nothing after
    /// it.
    pub fn parse_expression(mut self) -> Result<Value, SyntaxError> {
        let v = self.expr()?;
        self.scanner.skip_whitespace();
        if let Some(c) = self.scanner.peek() {
            return self.error(ParseError::Superfluous(c))
        }
        match v {
            Some(v) => Ok(v),
            None => self.error(ParseError::EmptyInput),
        }
    }

    // The shorthand character is still unconsumed; `kind` is what it
    // stands for on its own.
    fn quoted(&mut self, kind: QuoteKind) -> Result<Value, SyntaxError> {
        self.descend()?;
        self.scanner.consume();
        let kind =
            if kind == QuoteKind::Unquote && self.scanner.peek() == Some('@') {
                self.scanner.consume();
                QuoteKind::UnquoteSplicing
            } else {
                kind
            };
        self.scanner.skip_whitespace();
        match self.expr()? {
            Some(v) => {
                self.ascend();
                Ok(Value::quoted(kind, v))
            }
            None => self.error(ParseError::MissingQuotedExpr {
                seen: Seen(self.scanner.peek()),
                shorthand: kind.shorthand()
            })
        }
    }

    fn list(&mut self) -> Result<Value, SyntaxError> {
        let c = self.scanner.peek();
        if c != Some('(') {
            return self.error(ParseError::ExpectedOpenParen(Seen(c)))
        }
        self.descend()?;
        self.scanner.consume();
        let mut vals = Vec::new();
        while let Some(v) = self.expr()? {
            vals.push(v);
        }
        let c = self.scanner.peek();
        if c != Some(')') {
            return self.error(ParseError::ExpectedCloseParen(Seen(c)))
        }
        self.scanner.consume();
        self.ascend();
        Ok(Value::List(vals))
    }

    // A backslash inside an atom takes the next character literally
    // and the atom continues.
    fn atom(&mut self) -> Result<Option<Value>, SyntaxError> {
        if self.scanner.peek() == Some('"') {
            return Ok(Some(self.string()?))
        }
        let mut out = String::new();
        loop {
            out.push_str(self.scanner.consume_until(ends_atom));
            if self.scanner.peek() == Some('\\') {
                self.scanner.consume();
                if let Some(s) = self.scanner.consume() {
                    out.push_str(s);
                }
            } else {
                break
            }
        }
        if out.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Value::Atom(KString::from_string(out))))
        }
    }

    fn string(&mut self) -> Result<Value, SyntaxError> {
        // opening delimiter
        self.scanner.consume();
        let mut out = String::new();
        loop {
            out.push_str(self.scanner.consume_until(|c| c == '"' || c == '\\'));
            match self.scanner.peek() {
                None => return self.error(ParseError::UnterminatedString),
                Some('"') => {
                    self.scanner.consume();
                    break
                }
                Some(_) => {
                    // backslash
                    self.scanner.consume();
                    if let Some(s) = self.scanner.consume() {
                        push_unescaped(&mut out, s);
                    }
                }
            }
        }
        Ok(Value::String(KString::from_string(out)))
    }
}

/// Parse exactly one expression from `text`.
pub fn parse(text: &str) -> Result<Value, SyntaxError> {
    parse_with(text, &DEFAULT_LIMITS)
}

pub fn parse_with(text: &str, limits: &Limits) -> Result<Value, SyntaxError> {
    tracing::trace!(len = text.len(), max_depth = limits.max_depth, "parse");
    Parser::new(text, limits).parse_expression().map_err(|e| {
        tracing::debug!(line = e.line(), column = e.column(), "{}", e.err);
        e
    })
}
