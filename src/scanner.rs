// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Get characters and their positions from a string slice, one at a
//! time. The parser never looks at the text or the offsets directly.

use crate::escape::is_whitespace;
use crate::pos::Pos;

#[derive(Debug, Clone)]
pub struct Scanner<'s> {
    text: &'s str,
    pos: Pos,
}

impl<'s> Scanner<'s> {
    pub fn new(text: &'s str) -> Self {
        Scanner { text, pos: Pos::START }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos.offset == self.text.len()
    }

    fn rest(&self) -> &'s str {
        &self.text[self.pos.offset..]
    }

    /// The next character, `None` at the end of the input.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Take the next character and update the position. A `\r\n`
    /// pair is taken as a whole and counts as one line break, hence
    /// the result is a slice, not a char. `None` at the end of the
    /// input, where consuming does nothing.
    pub fn consume(&mut self) -> Option<&'s str> {
        let start = self.pos.offset;
        let c = self.peek()?;
        self.pos.offset += c.len_utf8();
        match c {
            '\r' => {
                if self.peek() == Some('\n') {
                    self.pos.offset += 1;
                }
                self.pos.newline();
            }
            '\n' => self.pos.newline(),
            _ => self.pos.col += 1,
        }
        Some(&self.text[start..self.pos.offset])
    }

    /// Consume characters until `stop` accepts the next one or the
    /// input is exhausted; returns everything consumed.
    pub fn consume_until(&mut self, stop: impl Fn(char) -> bool) -> &'s str {
        let start = self.pos.offset;
        while let Some(c) = self.peek() {
            if stop(c) {
                break;
            }
            self.consume();
        }
        &self.text[start..self.pos.offset]
    }

    pub fn skip_whitespace(&mut self) {
        self.consume_until(|c| ! is_whitespace(c));
    }
}
