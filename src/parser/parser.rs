use crate::{
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::Token, tokens::TokenKind},
};

use super::symbols::{SymbolData, SymbolTable};

/// The parser owns its lexer and its symbol table and borrows the source
/// text for both. One instance checks one program; nothing persists across
/// sources, so independent instances can run concurrently without any
/// synchronization.
pub struct Parser<'a> {
    source: &'a str,
    pub(super) lexer: Lexer<'a>,
    pub(super) symbol_table: SymbolTable,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source`. Lexing the first token happens here,
    /// so a lex error at the start of the input fails construction.
    pub fn new(source: &'a str) -> Result<Self, Error> {
        Ok(Parser {
            source,
            lexer: Lexer::new(source)?,
            symbol_table: SymbolTable::new(),
        })
    }

    /// Program -> Statement* Eof
    pub fn parse_program(&mut self) -> Result<(), Error> {
        while !self.lexer.is(&[TokenKind::Eof]) {
            self.parse_statement()?;
        }
        self.lexer.eat_expect(&[TokenKind::Eof], "parse_program")?;
        Ok(())
    }

    /// Resolves a token's span against the source text.
    pub(super) fn text(&self, token: Token) -> &'a str {
        token.text(self.source)
    }

    pub(super) fn symbol_kind(&self, name: &str) -> Option<TokenKind> {
        self.symbol_table.get(name).map(|symbol| symbol.kind)
    }

    pub(super) fn symbol(&self, name: &str) -> Option<&SymbolData> {
        self.symbol_table.get(name)
    }
}

/// Validates a complete source text: tokenizes, parses and type-checks it
/// in a single pass. This is the library entry point the driver calls once
/// per input file.
pub fn check(source: &str) -> Result<(), Error> {
    Parser::new(source)?.parse_program()
}
