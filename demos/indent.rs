// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use sexpr_indent::print::format_with;
use sexpr_indent::settings::{Format, QuoteStyle, Settings, Limits,
                             DEFAULT_FORMAT, VERBATIM_FORMAT, DEFAULT_LIMITS};
use clap::Parser as ClapParser;
use std::io::{stdin, stdout, Read, Write, BufWriter};
use std::path::PathBuf;
use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;


#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of spaces per nesting level
    #[clap(short, long, value_parser, default_value_t = 2)]
    indent: usize,
    /// Print quoted forms as 'x instead of (quote x)
    #[clap(short, long, value_parser)]
    shorthand: bool,
    /// Print strings and atoms without re-escaping them
    #[clap(long, value_parser)]
    verbatim: bool,
    /// Maximum nesting depth accepted
    #[clap(long, value_parser, default_value_t = DEFAULT_LIMITS.max_depth)]
    max_depth: u32,
    /// Path to the input file (default: stdin)
    #[clap(value_parser)]
    input_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut text = String::new();
    if let Some(path) = &args.input_path {
        text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {:?}", path))?;
    } else {
        stdin().read_to_string(&mut text).context("reading stdin")?;
    }

    let base = if args.verbatim { VERBATIM_FORMAT } else { DEFAULT_FORMAT };
    let format = Format {
        indent_width: args.indent,
        quote_style: if args.shorthand { QuoteStyle::Shorthand } else { base.quote_style },
        ..base
    };
    let limits = Limits { max_depth: args.max_depth };
    let settings = Settings { format: &format, limits: &limits };

    match format_with(&text, &settings) {
        Ok(out) => {
            let mut out_fh = BufWriter::new(stdout());
            out_fh.write_all(out.as_bytes())?;
            out_fh.flush()?;
        }
        Err(e) => {
            if let Some(path) = &args.input_path {
                bail!("{} in {:?}{}", e.err, path, e.pos)
            } else {
                bail!("{} in (stdin){}", e.err, e.pos)
            }
        }
    }
    Ok(())
}
