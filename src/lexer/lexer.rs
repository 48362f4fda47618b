use std::iter::FusedIterator;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::LexError, MK_ERROR_TOKEN, MK_TOKEN};

use super::tokens::{Literal, Token, TokenKind, FAREWELL, RESERVED_LOOKUP};

lazy_static! {
    static ref NUMBER: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap();
    static ref SYMBOL: Regex = Regex::new("^[\\p{Alphabetic}_][\\p{Alphabetic}\\p{N}_]*").unwrap();
    static ref COMMENT: Regex = Regex::new("^//[^\\n]*").unwrap();
    static ref VALID_IDENTIFIER: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref UPPER_IDENTIFIER: Regex = Regex::new("^[A-Z][A-Z0-9_]*$").unwrap();
}

/// Single-pass scanner over one source string.
///
/// `start` marks the first byte of the token being scanned and `current` the
/// next unread byte; both are byte offsets on char boundaries. The lexer is
/// an iterator that ends with exactly one `EOF` token and is fused afterwards.
pub struct Lexer<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            start: 0,
            current: 0,
            line: 1,
            finished: false,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.current..]
    }

    /// Source text from the start of the current token onwards.
    fn from_start(&self) -> &'a str {
        &self.source[self.start..]
    }

    fn lexeme(&self) -> String {
        String::from(&self.source[self.start..self.current])
    }

    fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Moves `current` to `start + len`. Only used for newline-free matches.
    fn advance_to(&mut self, len: usize) {
        self.current = self.start + len;
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn push(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        MK_TOKEN!(kind, self.lexeme(), literal, self.line)
    }

    fn error(&self, error: LexError) -> Token {
        MK_ERROR_TOKEN!(error, self.lexeme(), self.line)
    }

    fn either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) -> Token {
        let kind = if self.matches(expected) { matched } else { otherwise };
        self.push(kind, None)
    }

    /// Scans from `start`; `None` means the consumed text produced no token.
    fn scan_token(&mut self) -> Option<Token> {
        let c = self.advance()?;

        let token = match c {
            '(' => self.push(TokenKind::OpenParen, None),
            ')' => self.push(TokenKind::CloseParen, None),
            '{' => self.push(TokenKind::OpenCurly, None),
            '}' => self.push(TokenKind::CloseCurly, None),
            '[' => self.push(TokenKind::OpenBracket, None),
            ']' => self.push(TokenKind::CloseBracket, None),
            ',' => self.push(TokenKind::Comma, None),
            '.' => self.push(TokenKind::Dot, None),
            '-' => self.push(TokenKind::Minus, None),
            '+' => self.push(TokenKind::Plus, None),
            '*' => self.push(TokenKind::Star, None),
            '%' => self.push(TokenKind::Percent, None),

            ':' => self.either(')', TokenKind::Smiley, TokenKind::Colon),
            '=' => self.either('=', TokenKind::Equals, TokenKind::Assignment),
            '<' => self.either('=', TokenKind::LessEquals, TokenKind::Less),
            '>' => self.either('=', TokenKind::GreaterEquals, TokenKind::Greater),
            '!' => self.required('=', TokenKind::NotEquals, c),
            '&' => self.required('&', TokenKind::And, c),
            '|' => self.required('|', TokenKind::Or, c),

            '/' if self.peek() == Some('/') => {
                skip_handler(self);
                return None;
            }
            '/' => self.push(TokenKind::Slash, None),

            ' ' | '\r' | '\t' | '\n' => return None,

            '"' => string_handler(self),
            '\'' => character_handler(self),

            'a' if self.from_start().starts_with(FAREWELL) => {
                self.advance_to(FAREWELL.len());
                self.push(TokenKind::AdiosTriste, None)
            }
            c if c.is_ascii_digit() => number_handler(self),
            c if c.is_alphabetic() || c == '_' => symbol_handler(self),

            c => self.error(LexError::UnexpectedCharacter { character: c }),
        };

        Some(token)
    }

    /// Two-character operator with no single-character form.
    fn required(&mut self, expected: char, kind: TokenKind, first: char) -> Token {
        if self.matches(expected) {
            self.push(kind, None)
        } else {
            self.error(LexError::UnexpectedCharacter { character: first })
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        while !self.at_eof() {
            self.start = self.current;
            if let Some(token) = self.scan_token() {
                if let Some(error) = token.error() {
                    tracing::debug!(line = token.line, lexeme = %token.lexeme, %error, "lexical error");
                } else {
                    token.debug();
                }
                return Some(token);
            }
        }

        self.finished = true;
        self.start = self.current;
        Some(MK_TOKEN!(TokenKind::EOF, String::new(), None, self.line))
    }
}

impl FusedIterator for Lexer<'_> {}

fn skip_handler(lexer: &mut Lexer) {
    if let Some(comment) = COMMENT.find(lexer.from_start()) {
        lexer.advance_to(comment.end());
    }
}

fn string_handler(lexer: &mut Lexer) -> Token {
    loop {
        match lexer.peek() {
            None => return lexer.error(LexError::UnterminatedString),
            Some('"') => break,
            Some(_) => {
                lexer.advance();
            }
        }
    }

    // closing quote
    lexer.advance();

    let value = String::from(&lexer.source[lexer.start + 1..lexer.current - 1]);
    lexer.push(TokenKind::String, Some(Literal::String(value)))
}

fn character_handler(lexer: &mut Lexer) -> Token {
    let Some(value) = lexer.advance() else {
        return lexer.error(LexError::MalformedCharacter { lexeme: lexer.lexeme() });
    };

    if !lexer.matches('\'') {
        return lexer.error(LexError::MalformedCharacter { lexeme: lexer.lexeme() });
    }

    lexer.push(TokenKind::Character, Some(Literal::Character(value)))
}

fn number_handler(lexer: &mut Lexer) -> Token {
    let Some(matched) = NUMBER.find(lexer.from_start()) else {
        return lexer.error(LexError::InvalidNumber { text: lexer.lexeme() });
    };
    lexer.advance_to(matched.end());

    let text = matched.as_str();
    let literal = if text.contains('.') {
        text.parse::<f64>().ok().map(Literal::Real)
    } else {
        text.parse::<i64>().ok().map(Literal::Integer)
    };

    match literal {
        Some(literal @ Literal::Real(_)) => lexer.push(TokenKind::Real, Some(literal)),
        Some(literal) => lexer.push(TokenKind::Integer, Some(literal)),
        None => lexer.error(LexError::InvalidNumber { text: String::from(text) }),
    }
}

fn symbol_handler(lexer: &mut Lexer) -> Token {
    let Some(matched) = SYMBOL.find(lexer.from_start()) else {
        return lexer.error(LexError::InvalidIdentifier { text: lexer.lexeme() });
    };
    lexer.advance_to(matched.end());

    let text = matched.as_str();

    if let Some(kind) = RESERVED_LOOKUP.get(text) {
        let literal = match kind {
            TokenKind::Boolean => Some(Literal::Boolean(text == "true")),
            _ => None,
        };
        return lexer.push(*kind, literal);
    }

    if !VALID_IDENTIFIER.is_match(text) {
        return lexer.error(LexError::InvalidIdentifier { text: String::from(text) });
    }

    if UPPER_IDENTIFIER.is_match(text) {
        lexer.push(TokenKind::UpperIdentifier, None)
    } else {
        lexer.push(TokenKind::Identifier, None)
    }
}

/// Scans `source` to completion.
///
/// Never fails: malformed input shows up as `TokenKind::Error` tokens and the
/// result always ends with a single `TokenKind::EOF`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    let errors = tokens.iter().filter(|token| token.is_error()).count();

    tracing::debug!(tokens = tokens.len(), errors, "scan complete");
    tokens
}
