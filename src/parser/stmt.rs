use crate::{
    errors::errors::{Error, ErrorKind},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    parser::Parser,
    symbols::{de_literal_type, format_sizes, sizes_are_equal, SymbolData},
};

pub(super) const BASIC_TYPES: [TokenKind; 5] = [
    TokenKind::Int,
    TokenKind::Bool,
    TokenKind::Float,
    TokenKind::Char,
    TokenKind::String,
];

impl<'a> Parser<'a> {
    /// Statement -> Declaration | Assignment | PrintCall | ReadCall
    pub(super) fn parse_statement(&mut self) -> Result<(), Error> {
        let token = self.lexer.peek_expect(
            &[
                TokenKind::Int,
                TokenKind::Bool,
                TokenKind::Float,
                TokenKind::Char,
                TokenKind::String,
                TokenKind::Identifier,
                TokenKind::Print,
                TokenKind::Read,
            ],
            "parse_statement",
        )?;

        match token.kind {
            TokenKind::Int
            | TokenKind::Bool
            | TokenKind::Float
            | TokenKind::Char
            | TokenKind::String => self.parse_declaration(),
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::Print => self.parse_print_call(),
            TokenKind::Read => self.parse_read_call(),
            _ => unreachable!(),
        }
    }

    /// Declaration -> BasicType Identifier ArrayExt* ';'
    ///
    /// Zero extents means scalar shape `[1]`. Redeclaring an existing name
    /// silently overwrites its entry.
    fn parse_declaration(&mut self) -> Result<(), Error> {
        let type_token = self.lexer.eat_expect(&BASIC_TYPES, "parse_declaration")?;
        let name_token = self
            .lexer
            .eat_expect(&[TokenKind::Identifier], "parse_declaration")?;
        let name = self.text(name_token).to_string();

        let mut sizes = Vec::new();
        while self.lexer.is(&[TokenKind::Array]) {
            let extent_token = self.lexer.eat_expect(&[TokenKind::Array], "parse_declaration")?;
            let text = self.text(extent_token);
            let extent = text.parse::<usize>().map_err(|_| {
                Error::new(
                    ErrorKind::NumberParseError {
                        text: text.to_string(),
                    },
                    extent_token.start,
                )
            })?;
            sizes.push(extent);
        }
        if sizes.is_empty() {
            sizes.push(1);
        }

        self.symbol_table.insert(
            name,
            SymbolData {
                kind: type_token.kind,
                sizes,
            },
        );

        self.lexer
            .eat_expect(&[TokenKind::SemiColon], "parse_declaration")?;
        Ok(())
    }

    /// Assignment -> Identifier '=' Expression ';'
    fn parse_assignment(&mut self) -> Result<(), Error> {
        let name_token = self
            .lexer
            .eat_expect(&[TokenKind::Identifier], "parse_assignment")?;
        self.lexer
            .eat_expect(&[TokenKind::Equals], "parse_assignment")?;

        let mut value = self.parse_expression()?;
        // Array literals accumulate extents innermost-first during descent;
        // the comparison against the declaration wants them outermost-first.
        value.sizes.reverse();
        self.validate_assignment(name_token, &value)?;

        self.lexer
            .eat_expect(&[TokenKind::SemiColon], "parse_assignment")?;
        Ok(())
    }

    /// PrintCall -> 'print' '(' Expression ')' ';'
    ///
    /// The argument goes through the normal expression checking path; any
    /// type may be printed.
    fn parse_print_call(&mut self) -> Result<(), Error> {
        self.lexer
            .eat_expect(&[TokenKind::Print], "parse_print_call")?;
        self.lexer
            .eat_expect(&[TokenKind::OpenParen], "parse_print_call")?;
        self.parse_expression()?;
        self.lexer
            .eat_expect(&[TokenKind::CloseParen], "parse_print_call")?;
        self.lexer
            .eat_expect(&[TokenKind::SemiColon], "parse_print_call")?;
        Ok(())
    }

    /// ReadCall -> 'read' '(' Expression ')' ';'
    fn parse_read_call(&mut self) -> Result<(), Error> {
        self.lexer.eat_expect(&[TokenKind::Read], "parse_read_call")?;
        self.lexer
            .eat_expect(&[TokenKind::OpenParen], "parse_read_call")?;
        self.parse_expression()?;
        self.lexer
            .eat_expect(&[TokenKind::CloseParen], "parse_read_call")?;
        self.lexer
            .eat_expect(&[TokenKind::SemiColon], "parse_read_call")?;
        Ok(())
    }

    fn validate_assignment(&self, name_token: Token, value: &SymbolData) -> Result<(), Error> {
        let name = self.text(name_token);
        let declared = self.symbol(name).ok_or_else(|| {
            Error::new(
                ErrorKind::VariableNotDeclared {
                    name: name.to_string(),
                },
                name_token.start,
            )
        })?;

        // An empty array literal matches any declaration
        if value.kind == TokenKind::ALL {
            return Ok(());
        }

        if declared.kind != de_literal_type(value.kind)
            || !sizes_are_equal(&declared.sizes, &value.sizes)
        {
            return Err(Error::new(
                ErrorKind::AssignmentTypeMismatch {
                    name: name.to_string(),
                    expected: format!("{}{}", declared.kind, format_sizes(&declared.sizes)),
                    found: format!(
                        "{}{}",
                        de_literal_type(value.kind),
                        format_sizes(&value.sizes)
                    ),
                },
                name_token.start,
            ));
        }
        Ok(())
    }
}
