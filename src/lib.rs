// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This is an S-Expression parser and indenting printer:
//!
//! * `sexpr_indent::parse` reads exactly one expression (atoms,
//!   `"strings"` with backslash escapes, lists, and the `'` `` ` ``
//!   `,` `,@` quoting sugar) into a [Value](value::Value).
//!
//! * Errors carry the line and column where the input stopped making
//!   sense; the first error ends the parse.
//!
//! * `sexpr_indent::format` parses and prints back with one token per
//!   line, each nesting level indented by a fixed number of spaces.
//!   Output of `format` formats to itself.
//!
//! All atoms are plain text (numbers are not parsed), and there is no
//! support for comments.

pub mod escape;
pub mod parse;
pub mod pos;
pub mod print;
pub mod scanner;
pub mod settings;
pub mod value;

pub use parse::{parse, SyntaxError};
pub use print::format;
pub use value::Value;
