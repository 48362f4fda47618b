use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("malformed character literal: {lexeme}")]
    MalformedCharacter { lexeme: String },
    #[error("invalid identifier '{text}'")]
    InvalidIdentifier { text: String },
    #[error("unexpected character '{character}'")]
    UnexpectedCharacter { character: char },
    #[error("invalid number literal: {text}")]
    InvalidNumber { text: String },
}

impl LexError {
    pub fn get_error_name(&self) -> &str {
        match self {
            LexError::UnterminatedString => "UnterminatedString",
            LexError::MalformedCharacter { .. } => "MalformedCharacter",
            LexError::InvalidIdentifier { .. } => "InvalidIdentifier",
            LexError::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            LexError::InvalidNumber { .. } => "InvalidNumber",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            LexError::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Add a closing `\"` to the string"))
            }
            LexError::MalformedCharacter { .. } => ErrorTip::Suggestion(String::from(
                "Character literals hold exactly one character, like 'a'",
            )),
            LexError::InvalidIdentifier { .. } => ErrorTip::Suggestion(String::from(
                "Identifiers may only use ASCII letters, digits and `_`",
            )),
            LexError::UnexpectedCharacter { character: '!' } => {
                ErrorTip::Suggestion(String::from("Did you mean `!=`?"))
            }
            LexError::UnexpectedCharacter { character: '&' } => {
                ErrorTip::Suggestion(String::from("Did you mean `&&`?"))
            }
            LexError::UnexpectedCharacter { character: '|' } => {
                ErrorTip::Suggestion(String::from("Did you mean `||`?"))
            }
            LexError::UnexpectedCharacter { .. } => ErrorTip::None,
            LexError::InvalidNumber { text } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                text
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Failures of the command-line driver. Lexical problems never end up here.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read standard input: {0}")]
    Stdin(#[source] io::Error),
    #[error("could not write output: {0}")]
    Output(#[source] io::Error),
    #[error("Usage: kindpp [script]")]
    Usage,
}

impl DriverError {
    /// Exit status following the sysexits convention.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Usage => 64,
            DriverError::Io { .. } | DriverError::Stdin(_) => 66,
            DriverError::Output(_) => 74,
        }
    }
}
