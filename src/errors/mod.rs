//! Error types for the lexer and its driver.
//!
//! This module defines:
//!
//! - `LexError`, the lexical error taxonomy carried inside error tokens
//! - `ErrorTip`, optional suggestions shown next to a diagnostic
//! - `DriverError`, I/O and usage failures of the command-line driver

pub mod errors;
