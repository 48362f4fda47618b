#![allow(clippy::module_inception)]

use std::{
    io::{self, BufRead, Write},
    sync::Once,
};

use crate::{
    errors::errors::ErrorTip,
    lexer::tokens::Token,
};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Line that ends interactive input.
pub const PROMPT_TERMINATOR: &str = "#";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the driver.
///
/// Only installs a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=kindpp=debug`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Returns the text of the 1-based `line` in `source`, without its newline.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split_inclusive('\n')
        .nth(line - 1)
        .map(|text| text.trim_end_matches(['\n', '\r']))
}

/// Writes the token table, one fixed-width row per token.
pub fn print_tokens<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }

    Ok(())
}

/// Accumulates interactive input until a line containing only `#`.
///
/// Returns `None` when nothing was typed before the terminator (or EOF).
pub fn read_prompt_source<R: BufRead>(reader: R) -> io::Result<Option<String>> {
    let mut code = String::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim() == PROMPT_TERMINATOR {
            break;
        }

        code.push_str(&line);
        code.push('\n');
    }

    if code.is_empty() {
        Ok(None)
    } else {
        Ok(Some(code))
    }
}

pub fn display_error<W: Write>(
    out: &mut W,
    token: &Token,
    source: &str,
    file: &str,
) -> io::Result<()> {
    /*
        Error: UnexpectedCharacter (Did you mean `!=`?)
        -> main.kpp:20
           |
        20 | x ! y
           | unexpected character '!'
    */

    let Some(error) = token.error() else {
        return Ok(());
    };

    let line_string = token.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }
    writeln!(out, "-> {}:{}", file, token.line)?;
    writeln!(out, "{:>padding$}", "|")?;

    let line_text = get_line(source, token.line).unwrap_or_default();
    writeln!(out, "{} | {}", line_string, line_text.trim())?;
    writeln!(out, "{:>padding$} {}", "|", error)
}
