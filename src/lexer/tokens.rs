use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::errors::errors::LexError;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("principalsito", TokenKind::Principalsito);
        map.insert("porfavor", TokenKind::Porfavor);
        map.insert("favor", TokenKind::Favor);
        map.insert("podriasCrear", TokenKind::PodriasCrear);
        map.insert("metodillo", TokenKind::Metodillo);
        map.insert("podriasImprimir", TokenKind::PodriasImprimir);
        map.insert("podriasLeer", TokenKind::PodriasLeer);
        map.insert("aclama", TokenKind::Aclama);
        map.insert("siCumple", TokenKind::SiCumple);
        map.insert("peroSiCumple", TokenKind::PeroSiCumple);
        map.insert("casoContrario", TokenKind::CasoContrario);
        map.insert("siPersiste", TokenKind::SiPersiste);
        map.insert("saltear", TokenKind::Saltear);
        map.insert("parar", TokenKind::Parar);
        map.insert("enCasoSea", TokenKind::EnCasoSea);
        map.insert("oSino", TokenKind::OSino);
        map.insert("retorna", TokenKind::Retorna);
        map.insert("clona", TokenKind::Clona);
        map.insert("enterito", TokenKind::Enterito);
        map.insert("realito", TokenKind::Realito);
        map.insert("booleanito", TokenKind::Booleanito);
        map.insert("charsito", TokenKind::Charsito);
        map.insert("cadenita", TokenKind::Cadenita);
        map.insert("nulito", TokenKind::Nulito);
        map.insert("vacio", TokenKind::Vacio);
        map.insert("constantito", TokenKind::Constantito);
        map.insert("clasesita", TokenKind::Clasesita);
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map
    };
}

/// The farewell marker is the only reserved word that is not an identifier.
pub const FAREWELL: &str = "adios:(";

/// Broad grouping of token kinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenFamily {
    Punctuation,
    Literal,
    Reserved,
    Sentinel,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Colon,  // :
    Smiley, // :)
    Dot,
    Star,
    Plus,
    Minus,
    Less,
    Greater,
    Slash,
    Percent,
    And, // &&
    Or,  // ||
    Comma,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Assignment,    // =
    Equals,        // ==
    NotEquals,     // !=
    LessEquals,    // <=
    GreaterEquals, // >=
    OpenBracket,
    CloseBracket,

    // Literals
    Identifier,
    UpperIdentifier,
    String,
    Character,
    Integer,
    Real,
    Boolean,

    // Reserved
    Principalsito,
    Porfavor,
    Favor,
    PodriasCrear,
    Metodillo,
    PodriasImprimir,
    PodriasLeer,
    AdiosTriste, // adios:(
    Aclama,
    SiCumple,
    PeroSiCumple,
    CasoContrario,
    SiPersiste,
    Saltear,
    Parar,
    EnCasoSea,
    OSino,
    Retorna,
    Clona,
    Enterito,
    Realito,
    Booleanito,
    Charsito,
    Cadenita,
    Nulito,
    Vacio,
    Constantito,
    Clasesita,

    Error,
    EOF,
}

impl TokenKind {
    pub const ALL: [TokenKind; 61] = [
        TokenKind::Colon,
        TokenKind::Smiley,
        TokenKind::Dot,
        TokenKind::Star,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Comma,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Assignment,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::LessEquals,
        TokenKind::GreaterEquals,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::Identifier,
        TokenKind::UpperIdentifier,
        TokenKind::String,
        TokenKind::Character,
        TokenKind::Integer,
        TokenKind::Real,
        TokenKind::Boolean,
        TokenKind::Principalsito,
        TokenKind::Porfavor,
        TokenKind::Favor,
        TokenKind::PodriasCrear,
        TokenKind::Metodillo,
        TokenKind::PodriasImprimir,
        TokenKind::PodriasLeer,
        TokenKind::AdiosTriste,
        TokenKind::Aclama,
        TokenKind::SiCumple,
        TokenKind::PeroSiCumple,
        TokenKind::CasoContrario,
        TokenKind::SiPersiste,
        TokenKind::Saltear,
        TokenKind::Parar,
        TokenKind::EnCasoSea,
        TokenKind::OSino,
        TokenKind::Retorna,
        TokenKind::Clona,
        TokenKind::Enterito,
        TokenKind::Realito,
        TokenKind::Booleanito,
        TokenKind::Charsito,
        TokenKind::Cadenita,
        TokenKind::Nulito,
        TokenKind::Vacio,
        TokenKind::Constantito,
        TokenKind::Clasesita,
        TokenKind::Error,
        TokenKind::EOF,
    ];

    /// Stable numeric code used for display and serialization.
    ///
    /// Codes are fixed per kind and do not depend on declaration order.
    pub const fn code(self) -> u16 {
        match self {
            TokenKind::Colon => 50,
            TokenKind::Smiley => 51,
            TokenKind::Dot => 52,
            TokenKind::Star => 53,
            TokenKind::Plus => 54,
            TokenKind::Minus => 55,
            TokenKind::Less => 56,
            TokenKind::Greater => 57,
            TokenKind::Slash => 58,
            TokenKind::Percent => 59,
            TokenKind::And => 60,
            TokenKind::Or => 61,
            TokenKind::Comma => 62,
            TokenKind::OpenParen => 63,
            TokenKind::CloseParen => 64,
            TokenKind::OpenCurly => 65,
            TokenKind::CloseCurly => 66,
            TokenKind::Assignment => 67,
            TokenKind::Equals => 68,
            TokenKind::NotEquals => 69,
            TokenKind::LessEquals => 70,
            TokenKind::GreaterEquals => 71,
            TokenKind::OpenBracket => 72,
            TokenKind::CloseBracket => 73,

            TokenKind::Identifier => 1000,
            TokenKind::UpperIdentifier => 1010,
            TokenKind::String => 4000,
            TokenKind::Character => 3000,
            TokenKind::Integer => 2010,
            TokenKind::Real => 2020,
            TokenKind::Boolean => 2030,

            TokenKind::Principalsito => 10,
            TokenKind::Porfavor => 11,
            TokenKind::Favor => 12,
            TokenKind::PodriasCrear => 13,
            TokenKind::Metodillo => 14,
            TokenKind::PodriasImprimir => 15,
            TokenKind::PodriasLeer => 16,
            TokenKind::AdiosTriste => 17,
            TokenKind::Aclama => 18,
            TokenKind::SiCumple => 19,
            TokenKind::PeroSiCumple => 20,
            TokenKind::CasoContrario => 21,
            TokenKind::SiPersiste => 22,
            TokenKind::Saltear => 23,
            TokenKind::Parar => 24,
            TokenKind::EnCasoSea => 25,
            TokenKind::OSino => 26,
            TokenKind::Retorna => 27,
            TokenKind::Clona => 28,
            TokenKind::Enterito => 29,
            TokenKind::Realito => 30,
            TokenKind::Booleanito => 31,
            TokenKind::Charsito => 32,
            TokenKind::Cadenita => 33,
            TokenKind::Nulito => 34,
            TokenKind::Vacio => 35,
            TokenKind::Constantito => 36,
            TokenKind::Clasesita => 37,

            TokenKind::Error => 666,
            TokenKind::EOF => 0,
        }
    }

    pub fn from_code(code: u16) -> Option<TokenKind> {
        TokenKind::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    pub fn family(self) -> TokenFamily {
        match self.code() {
            0 | 666 => TokenFamily::Sentinel,
            10..=37 => TokenFamily::Reserved,
            50..=73 => TokenFamily::Punctuation,
            _ => TokenFamily::Literal,
        }
    }

    pub fn is_keyword(self) -> bool {
        self.family() == TokenFamily::Reserved
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Decoded value attached to literal and error tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Real(f64),
    Character(char),
    String(String),
    Boolean(bool),
    Error(LexError),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Integer(value) => write!(f, "{}", value),
            // Debug keeps the fractional part of whole reals (3.0, not 3)
            Literal::Real(value) => write!(f, "{:?}", value),
            Literal::Character(value) => write!(f, "{}", value),
            Literal::String(value) => write!(f, "{}", value),
            Literal::Boolean(value) => write!(f, "{}", value),
            Literal::Error(error) => write!(f, "{}", error),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = format!("{} ({})", self.kind, self.kind.code());
        let literal = match &self.literal {
            Some(literal) => literal.to_string(),
            None => String::from("null"),
        };

        write!(f, "{:<20} {:<15} {:<10}", kind, self.lexeme, literal)
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    pub fn error(&self) -> Option<&LexError> {
        match &self.literal {
            Some(Literal::Error(error)) => Some(error),
            _ => None,
        }
    }

    pub fn debug(&self) {
        tracing::trace!(kind = %self.kind, lexeme = %self.lexeme, line = self.line, "token");
    }
}
