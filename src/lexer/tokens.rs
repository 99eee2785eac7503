use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("True", TokenKind::True);
        map.insert("False", TokenKind::False);
        map.insert("int", TokenKind::Int);
        map.insert("bool", TokenKind::Bool);
        map.insert("float", TokenKind::Float);
        map.insert("char", TokenKind::Char);
        map.insert("string", TokenKind::String);
        map.insert("print", TokenKind::Print);
        map.insert("read", TokenKind::Read);
        map
    };
}

#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Keywords
    Int,
    Bool,
    Float,
    Char,
    String,

    // Misc
    Identifier,
    Print,
    Read,
    Equals,

    // Literals
    CharLiteral,
    StringLiteral,
    IntLiteral,
    FloatLiteral,
    True,
    False,

    // Array size annotation, spanning the digits inside the brackets
    Array,

    // Grouping
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Comma,

    // Language
    SemiColon,

    // Arithmetic
    Plus,
    Minus,
    Asterisk,
    ForwardSlash,

    // Relational
    LessThan,
    LessThanOrEquals,
    GreaterThan,
    GreaterThanOrEquals,
    EqualsEquals,
    NotEquals,

    // Logical
    And,
    Or,

    // Unary
    Not,

    Eof,

    // Type-checker sentinels, never produced by the lexer
    INVALID,
    ALL,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified span of source text. Tokens never own text; `start` and
/// `end` are inclusive byte offsets resolved against the source on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn invalid() -> Self {
        Token {
            kind: TokenKind::INVALID,
            start: 0,
            end: 0,
        }
    }

    /// The token's text in `source`. Empty for `Eof`, whose span sits one
    /// past the final byte.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..=self.end).unwrap_or("")
    }
}

/// Joins kind names with ` | ` for "expected one of" diagnostics.
pub fn join_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}
