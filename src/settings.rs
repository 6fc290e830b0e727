// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for both reading (parsing) and writing (printing) data.

/// How a quoted form is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// As the two-element list it stands for: `(`, `quote`, `x`, `)`
    List,
    /// With the prefix character(s) in front: `'x`
    Shorthand,
}

#[derive(Debug, Clone)]
pub struct Format {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Write backslash escapes in strings and atoms so that the output
    /// parses back to the same values
    pub escape_strings: bool,
    pub quote_style: QuoteStyle,
}

pub const DEFAULT_FORMAT : Format = Format {
    indent_width: 2,
    escape_strings: true,
    quote_style: QuoteStyle::List,
};

/// Text is written exactly as stored, e.g. a string containing `"`
/// will not read back.
pub const VERBATIM_FORMAT : Format = Format {
    indent_width: 2,
    escape_strings: false,
    quote_style: QuoteStyle::List,
};


#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum nesting of lists and quoted forms
    pub max_depth: u32,
}

pub const DEFAULT_LIMITS : Limits = Limits {
    max_depth: 500,
    // ^ the stack limit with default settings on Linux is around 1200
};


#[derive(Debug)]
pub struct Settings<'t> {
    pub format: &'t Format,
    pub limits: &'t Limits,
}

impl Default for Settings<'static> {
    fn default() -> Self {
        Settings {
            format: &DEFAULT_FORMAT,
            limits: &DEFAULT_LIMITS,
        }
    }
}
