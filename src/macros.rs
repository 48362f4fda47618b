//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR_TOKEN!` - Creates an error Token carrying a `LexError`

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source slice
/// * `$literal` - The decoded `Option<Literal>`
/// * `$line` - The source line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), Some(Literal::Integer(42)), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            line: $line,
        }
    };
}

/// Creates an error token whose literal is the given `LexError`.
///
/// # Example
///
/// ```ignore
/// let token = MK_ERROR_TOKEN!(LexError::UnterminatedString, "\"abc".to_string(), 3);
/// ```
#[macro_export]
macro_rules! MK_ERROR_TOKEN {
    ($error:expr, $lexeme:expr, $line:expr) => {
        $crate::MK_TOKEN!(
            $crate::lexer::tokens::TokenKind::Error,
            $lexeme,
            Some($crate::lexer::tokens::Literal::Error($error)),
            $line
        )
    };
}
