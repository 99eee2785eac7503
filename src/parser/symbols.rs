use std::collections::HashMap;

use crate::lexer::tokens::TokenKind;

/// Declared (or inferred, for literal expressions) type and shape of a
/// value. `sizes` holds one extent per dimension; `[1]` is a scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolData {
    pub kind: TokenKind,
    pub sizes: Vec<usize>,
}

impl SymbolData {
    pub fn scalar(kind: TokenKind) -> Self {
        SymbolData {
            kind,
            sizes: vec![1],
        }
    }
}

/// Flat, case-sensitive identifier table. One per checked program; no
/// nested scopes and no shadowing. Redeclaration overwrites the entry.
pub type SymbolTable = HashMap<String, SymbolData>;

/// Maps a literal token kind to the basic type it carries. Basic types map
/// to themselves; anything else is INVALID.
pub fn de_literal_type(kind: TokenKind) -> TokenKind {
    match kind {
        TokenKind::Int | TokenKind::IntLiteral => TokenKind::Int,
        TokenKind::Bool | TokenKind::True | TokenKind::False => TokenKind::Bool,
        TokenKind::Float | TokenKind::FloatLiteral => TokenKind::Float,
        TokenKind::Char | TokenKind::CharLiteral => TokenKind::Char,
        TokenKind::String | TokenKind::StringLiteral => TokenKind::String,
        _ => TokenKind::INVALID,
    }
}

/// Element-wise shape comparison. A declared extent of 0 is a wildcard
/// matching any actual extent at that position; a missing actual dimension
/// never matches.
pub fn sizes_are_equal(declared: &[usize], actual: &[usize]) -> bool {
    for (index, &extent) in declared.iter().enumerate() {
        if extent == 0 {
            continue;
        }
        if actual.get(index) != Some(&extent) {
            return false;
        }
    }
    true
}

/// Renders a shape as `[2][3]` for diagnostics.
pub fn format_sizes(sizes: &[usize]) -> String {
    sizes.iter().map(|size| format!("[{}]", size)).collect()
}

/// As `format_sizes`, but outermost dimension first for shapes still in
/// literal accumulation order.
pub fn format_sizes_reversed(sizes: &[usize]) -> String {
    sizes.iter().rev().map(|size| format!("[{}]", size)).collect()
}
