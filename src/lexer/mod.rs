//! Lexical analysis for Kind++ source code.
//!
//! This module converts source text into a stream of tokens. It handles:
//!
//! - Punctuation and one/two-character operators (`:)`, `<=`, `&&`, ...)
//! - String, character, integer and real literals
//! - Reserved words, the `adios:(` farewell marker and identifiers
//! - Line comments, whitespace and line tracking
//! - Error tokens for malformed input, without stopping the scan

pub mod lexer;
pub mod tokens;
