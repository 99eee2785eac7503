use crate::{
    errors::errors::{Error, ErrorKind},
    lexer::tokens::TokenKind,
};

use super::{
    parser::Parser,
    symbols::{format_sizes, format_sizes_reversed, sizes_are_equal, SymbolData},
};

const ARITHMETIC_OPS: [TokenKind; 4] = [
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::ForwardSlash,
    TokenKind::Asterisk,
];

const COMPARISON_OPS: [TokenKind; 6] = [
    TokenKind::GreaterThan,
    TokenKind::LessThan,
    TokenKind::GreaterThanOrEquals,
    TokenKind::LessThanOrEquals,
    TokenKind::EqualsEquals,
    TokenKind::NotEquals,
];

const LOGICAL_OPS: [TokenKind; 2] = [TokenKind::And, TokenKind::Or];

const BASE_EXPRESSION_START: [TokenKind; 9] = [
    TokenKind::Identifier,
    TokenKind::Not,
    TokenKind::CharLiteral,
    TokenKind::True,
    TokenKind::False,
    TokenKind::IntLiteral,
    TokenKind::FloatLiteral,
    TokenKind::StringLiteral,
    TokenKind::OpenParen,
];

impl<'a> Parser<'a> {
    /// Expression -> ArrayExpression | BaseExpression
    pub(super) fn parse_expression(&mut self) -> Result<SymbolData, Error> {
        let token = self.lexer.peek_expect(
            &[
                TokenKind::OpenCurly,
                TokenKind::CharLiteral,
                TokenKind::Not,
                TokenKind::Identifier,
                TokenKind::True,
                TokenKind::False,
                TokenKind::IntLiteral,
                TokenKind::FloatLiteral,
                TokenKind::StringLiteral,
                TokenKind::OpenParen,
            ],
            "parse_expression",
        )?;

        if token.kind == TokenKind::OpenCurly {
            self.parse_array_expression()
        } else {
            self.parse_base_expression()
        }
    }

    /// ArrayExpression -> '{' ( element (',' element)* )? '}'
    ///
    /// Unifies a single element type and per-dimension shape across the
    /// level. The first element seeds the running type/shape; later
    /// elements must agree, except ALL (from a nested empty literal)
    /// unifies with anything. The level's element count is appended to the
    /// unified inner shape, so extents accumulate innermost-first.
    fn parse_array_expression(&mut self) -> Result<SymbolData, Error> {
        let open = self
            .lexer
            .eat_expect(&[TokenKind::OpenCurly], "parse_array_expression")?;

        let mut unified = SymbolData {
            kind: TokenKind::INVALID,
            sizes: vec![],
        };
        let mut count: usize = 0;
        let mut at = open.start;

        self.lexer.expect(
            &[
                TokenKind::OpenCurly,
                TokenKind::CloseCurly,
                TokenKind::Not,
                TokenKind::CharLiteral,
                TokenKind::Identifier,
                TokenKind::True,
                TokenKind::False,
                TokenKind::IntLiteral,
                TokenKind::FloatLiteral,
                TokenKind::StringLiteral,
                TokenKind::OpenParen,
            ],
            "parse_array_expression",
        )?;

        while !self.lexer.is(&[TokenKind::CloseCurly]) {
            if self.lexer.is(&[TokenKind::OpenCurly]) {
                let element = self.parse_array_expression()?;

                if unified.kind == TokenKind::INVALID || unified.kind == TokenKind::ALL {
                    unified.kind = element.kind;
                }
                if unified.sizes.is_empty() {
                    unified.sizes = element.sizes.clone();
                }

                if (unified.kind != element.kind
                    || !sizes_are_equal(&unified.sizes, &element.sizes))
                    && element.kind != TokenKind::ALL
                    && unified.kind != TokenKind::ALL
                {
                    return Err(Error::new(
                        ErrorKind::ArrayElementMismatch {
                            expected: format!("{}{}", unified.kind, format_sizes(&unified.sizes)),
                            found: format!(
                                "{}{}",
                                element.kind,
                                format_sizes_reversed(&element.sizes)
                            ),
                        },
                        at + 1,
                    ));
                }
            } else {
                let element = self.parse_base_expression()?;

                if unified.kind == TokenKind::INVALID || unified.kind == TokenKind::ALL {
                    unified.kind = element.kind;
                } else if unified.kind != element.kind && element.kind != TokenKind::ALL {
                    return Err(Error::new(
                        ErrorKind::ArrayElementMismatch {
                            expected: unified.kind.to_string(),
                            found: element.kind.to_string(),
                        },
                        at + 1,
                    ));
                }
            }

            count += 1;

            if !self.lexer.is(&[TokenKind::CloseCurly]) {
                at = self
                    .lexer
                    .eat_expect(&[TokenKind::Comma], "parse_array_expression")?
                    .start;
            }
        }

        self.lexer
            .eat_expect(&[TokenKind::CloseCurly], "parse_array_expression")?;

        unified.sizes.push(count);

        // An empty literal matches any element type
        if count == 0 {
            return Ok(SymbolData {
                kind: TokenKind::ALL,
                sizes: unified.sizes,
            });
        }

        Ok(unified)
    }

    /// BaseExpression -> CharLiteral | Identifier<Char> | BoolExpr
    ///
    /// Char values never participate in operator chains, so they short
    /// circuit here; everything else flows through the boolean expression
    /// chain.
    pub(super) fn parse_base_expression(&mut self) -> Result<SymbolData, Error> {
        let token = self
            .lexer
            .peek_expect(&BASE_EXPRESSION_START, "parse_base_expression")?;

        match token.kind {
            TokenKind::CharLiteral => {
                self.lexer.eat()?;
                Ok(SymbolData::scalar(TokenKind::Char))
            }
            TokenKind::Identifier => {
                let name = self.text(token);
                let Some(kind) = self.symbol_kind(name) else {
                    return Err(Error::new(
                        ErrorKind::VariableNotDeclared {
                            name: name.to_string(),
                        },
                        token.start,
                    ));
                };
                if kind == TokenKind::Char {
                    self.lexer.eat()?;
                    Ok(SymbolData::scalar(TokenKind::Char))
                } else {
                    self.parse_bool_expr()
                }
            }
            _ => self.parse_bool_expr(),
        }
    }

    /// BoolExpr -> LogicalExpr
    fn parse_bool_expr(&mut self) -> Result<SymbolData, Error> {
        self.parse_logical_expr()
    }

    /// LogicalExpr -> ComparisonExpr ( ('&&'|'||') ComparisonExpr )*
    ///
    /// Any logical operator makes the chain's result Bool. A String operand
    /// on either side is fatal.
    fn parse_logical_expr(&mut self) -> Result<SymbolData, Error> {
        let at = self.lexer.peek().start;
        let mut result = self.parse_comparison_expr()?;

        while self.lexer.is(&LOGICAL_OPS) {
            if result.kind == TokenKind::String {
                return Err(Error::new(ErrorKind::LogicalOpOnString, at));
            }
            result.kind = TokenKind::Bool;

            self.lexer.eat_expect(&LOGICAL_OPS, "parse_logical_expr")?;
            let rhs = self.parse_comparison_expr()?;
            if rhs.kind == TokenKind::String {
                return Err(Error::new(ErrorKind::LogicalOpOnString, at));
            }
        }

        Ok(result)
    }

    /// ComparisonExpr -> ArithmeticExpr ( relOp ArithmeticExpr )*
    fn parse_comparison_expr(&mut self) -> Result<SymbolData, Error> {
        let at = self.lexer.peek().start;
        let mut result = self.parse_arithmetic_expr()?;

        while self.lexer.is(&COMPARISON_OPS) {
            if result.kind == TokenKind::String {
                return Err(Error::new(ErrorKind::ComparisonOnString, at));
            }
            result.kind = TokenKind::Bool;

            self.lexer
                .eat_expect(&COMPARISON_OPS, "parse_comparison_expr")?;
            let rhs = self.parse_arithmetic_expr()?;
            if rhs.kind == TokenKind::String {
                return Err(Error::new(ErrorKind::ComparisonOnString, at));
            }
        }

        Ok(result)
    }

    /// ArithmeticExpr -> PrimaryExpr ( ('+'|'-'|'*'|'/') PrimaryExpr )*
    ///
    /// Bool and Int operands combine to Int. A Float operand anywhere
    /// promotes the chain to Float permanently. String permits only `+`
    /// against another String; mixing in either direction is fatal.
    fn parse_arithmetic_expr(&mut self) -> Result<SymbolData, Error> {
        let at = self.lexer.peek().start;
        let mut result = self.parse_primary_expr()?;
        let mut current = result.kind;

        if self.lexer.is(&ARITHMETIC_OPS)
            && result.kind != TokenKind::Float
            && result.kind != TokenKind::String
        {
            result.kind = TokenKind::Int;
            current = TokenKind::Int;
        }

        while self.lexer.is(&ARITHMETIC_OPS) {
            if current == TokenKind::String && !self.lexer.is(&[TokenKind::Plus]) {
                return Err(Error::new(ErrorKind::NonConcatOpOnString, at));
            }

            self.lexer.eat_expect(&ARITHMETIC_OPS, "parse_arithmetic_expr")?;
            let rhs = self.parse_primary_expr()?;

            if (current == TokenKind::String) != (rhs.kind == TokenKind::String) {
                return Err(Error::new(ErrorKind::StringOperandMismatch, at));
            }
            if rhs.kind == TokenKind::Float {
                result.kind = TokenKind::Float;
            }

            current = rhs.kind;
        }

        Ok(result)
    }

    /// PrimaryExpr -> '!' PrimaryExpr | '(' BaseExpression ')' | Identifier
    ///              | NumLiteral | BoolLiteral | StringLiteral
    fn parse_primary_expr(&mut self) -> Result<SymbolData, Error> {
        if self.lexer.is(&[TokenKind::Not]) {
            return self.parse_not_expr();
        }

        let token = self.lexer.peek_expect(
            &[
                TokenKind::OpenParen,
                TokenKind::Identifier,
                TokenKind::IntLiteral,
                TokenKind::FloatLiteral,
                TokenKind::True,
                TokenKind::False,
                TokenKind::StringLiteral,
            ],
            "parse_primary_expr",
        )?;

        match token.kind {
            TokenKind::Identifier => {
                self.lexer.eat()?;
                let name = self.text(token);
                let Some(symbol) = self.symbol(name) else {
                    return Err(Error::new(
                        ErrorKind::VariableNotDeclared {
                            name: name.to_string(),
                        },
                        token.start,
                    ));
                };
                // Char identifiers only appear via the base expression
                // short circuit
                if !matches!(
                    symbol.kind,
                    TokenKind::Int | TokenKind::Float | TokenKind::Bool | TokenKind::String
                ) {
                    return Err(Error::new(
                        ErrorKind::InvalidOperandType {
                            found: symbol.kind.to_string(),
                        },
                        token.start,
                    ));
                }
                Ok(symbol.clone())
            }
            TokenKind::OpenParen => {
                self.lexer
                    .eat_expect(&[TokenKind::OpenParen], "parse_primary_expr")?;
                let inner = self.parse_base_expression()?;
                self.lexer
                    .eat_expect(&[TokenKind::CloseParen], "parse_primary_expr")?;
                Ok(inner)
            }
            TokenKind::IntLiteral => {
                self.lexer.eat()?;
                Ok(SymbolData::scalar(TokenKind::Int))
            }
            TokenKind::FloatLiteral => {
                self.lexer.eat()?;
                Ok(SymbolData::scalar(TokenKind::Float))
            }
            TokenKind::StringLiteral => {
                self.lexer.eat()?;
                Ok(SymbolData::scalar(TokenKind::String))
            }
            TokenKind::True | TokenKind::False => {
                self.lexer.eat()?;
                Ok(SymbolData::scalar(TokenKind::Bool))
            }
            _ => unreachable!(),
        }
    }

    /// Unary `!` accepts only a boolean literal, an identifier declared as
    /// Bool, or a parenthesized sub-expression inferring Bool.
    fn parse_not_expr(&mut self) -> Result<SymbolData, Error> {
        let not_token = self.lexer.eat_expect(&[TokenKind::Not], "parse_primary_expr")?;

        if !self.lexer.is(&[
            TokenKind::Identifier,
            TokenKind::True,
            TokenKind::False,
            TokenKind::OpenParen,
        ]) {
            return Err(Error::new(
                ErrorKind::InvalidNotOperand {
                    found: self.lexer.peek().kind.to_string(),
                },
                not_token.start,
            ));
        }

        if self.lexer.is(&[TokenKind::Identifier]) {
            let token = self
                .lexer
                .eat_expect(&[TokenKind::Identifier], "parse_primary_expr")?;
            let name = self.text(token);
            let Some(kind) = self.symbol_kind(name) else {
                return Err(Error::new(
                    ErrorKind::VariableNotDeclared {
                        name: name.to_string(),
                    },
                    token.start,
                ));
            };
            if kind != TokenKind::Bool {
                return Err(Error::new(
                    ErrorKind::InvalidNotOperand {
                        found: kind.to_string(),
                    },
                    not_token.start,
                ));
            }
            Ok(SymbolData::scalar(TokenKind::Bool))
        } else if self.lexer.is(&[TokenKind::True, TokenKind::False]) {
            self.lexer
                .eat_expect(&[TokenKind::True, TokenKind::False], "parse_primary_expr")?;
            Ok(SymbolData::scalar(TokenKind::Bool))
        } else {
            self.lexer
                .eat_expect(&[TokenKind::OpenParen], "parse_primary_expr")?;
            let inner = self.parse_base_expression()?;
            self.lexer
                .eat_expect(&[TokenKind::CloseParen], "parse_primary_expr")?;
            if inner.kind != TokenKind::Bool {
                return Err(Error::new(
                    ErrorKind::InvalidNotOperand {
                        found: inner.kind.to_string(),
                    },
                    not_token.start,
                ));
            }
            Ok(SymbolData::scalar(TokenKind::Bool))
        }
    }
}
