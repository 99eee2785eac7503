use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::{Error, ErrorKind};

use super::tokens::{join_kinds, Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"^\s+").unwrap();
    static ref LINE_COMMENT_RE: Regex = Regex::new(r"^//[^\n\r]*").unwrap();
    static ref WORD_RE: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"^-?[0-9]*\.?[0-9]*").unwrap();
    static ref STRING_RE: Regex = Regex::new(r#"(?s)^"(?:[^"\\]|\\.)*""#).unwrap();
}

/// On-demand lexer with exactly one token of lookahead.
///
/// The lexer borrows the source text for its whole lifetime and hands out
/// span-only tokens; only the current and the most recently consumed token
/// are retained. Construction lexes the first token eagerly, so a lex error
/// at the very start of the input surfaces from `new`.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    current: Token,
    previous: Token,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Result<Self, Error> {
        let mut lexer = Lexer {
            source,
            pos: 0,
            current: Token::invalid(),
            previous: Token::invalid(),
        };
        lexer.current = lexer.next_token()?;
        Ok(lexer)
    }

    /// Returns the current token without consuming it.
    pub fn peek(&self) -> Token {
        self.current
    }

    /// Returns the token most recently consumed by `eat`.
    pub fn peek_previous(&self) -> Token {
        self.previous
    }

    /// Consumes and returns the current token, lexing the next one.
    pub fn eat(&mut self) -> Result<Token, Error> {
        self.previous = self.current;
        self.current = self.next_token()?;
        Ok(self.previous)
    }

    /// Membership test: is the current token one of `kinds`?
    pub fn is(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current.kind)
    }

    /// Fails with an unexpected-token error naming `rule` unless the current
    /// token is one of `kinds`.
    pub fn expect(&self, kinds: &[TokenKind], rule: &'static str) -> Result<(), Error> {
        if self.is(kinds) {
            return Ok(());
        }
        Err(Error::new(
            ErrorKind::UnexpectedToken {
                rule,
                expected: join_kinds(kinds),
                found: format!("{}({})", self.current.kind, self.current.text(self.source)),
            },
            self.current.start,
        ))
    }

    pub fn peek_expect(&self, kinds: &[TokenKind], rule: &'static str) -> Result<Token, Error> {
        self.expect(kinds, rule)?;
        Ok(self.current)
    }

    pub fn eat_expect(&mut self, kinds: &[TokenKind], rule: &'static str) -> Result<Token, Error> {
        self.expect(kinds, rule)?;
        self.eat()
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn current_char(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let token = Token {
            kind,
            start: self.pos,
            end: self.pos,
        };
        self.pos += 1;
        token
    }

    // `< > = !` followed by `=` form their two-character variant.
    fn one_or_two(&mut self, single_kind: TokenKind, double_kind: TokenKind) -> Token {
        if self.remainder().as_bytes().get(1) == Some(&b'=') {
            let token = Token {
                kind: double_kind,
                start: self.pos,
                end: self.pos + 1,
            };
            self.pos += 2;
            token
        } else {
            self.single(single_kind)
        }
    }

    // `&` and `|` must appear doubled; there are no bitwise operators.
    fn doubled(&mut self, operator: char, kind: TokenKind) -> Result<Token, Error> {
        if self.remainder().as_bytes().get(1) == Some(&(operator as u8)) {
            let token = Token {
                kind,
                start: self.pos,
                end: self.pos + 1,
            };
            self.pos += 2;
            Ok(token)
        } else {
            Err(Error::new(ErrorKind::UndoubledOperator { operator }, self.pos))
        }
    }

    fn next_token(&mut self) -> Result<Token, Error> {
        if let Some(matched) = WHITESPACE_RE.find(self.remainder()) {
            self.pos += matched.end();
        }

        if self.pos >= self.source.len() {
            return Ok(Token {
                kind: TokenKind::Eof,
                start: self.pos,
                end: self.pos,
            });
        }

        let character = self.current_char();

        // Dispatch order is significant: `-` and `.` always enter numeric
        // lexing, so a free-standing binary minus is a lex error.
        if character.is_ascii_digit() || character == '-' || character == '.' {
            return self.lex_number();
        }

        if character.is_ascii_alphabetic() || character == '_' {
            return Ok(self.lex_word());
        }

        match character {
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            '[' => self.lex_array_extent(),
            '(' => Ok(self.single(TokenKind::OpenParen)),
            ')' => Ok(self.single(TokenKind::CloseParen)),
            '{' => Ok(self.single(TokenKind::OpenCurly)),
            '}' => Ok(self.single(TokenKind::CloseCurly)),
            ',' => Ok(self.single(TokenKind::Comma)),
            ';' => Ok(self.single(TokenKind::SemiColon)),
            '+' => Ok(self.single(TokenKind::Plus)),
            '*' => Ok(self.single(TokenKind::Asterisk)),
            '/' => {
                if self.remainder().as_bytes().get(1) == Some(&b'/') {
                    let matched = LINE_COMMENT_RE.find(self.remainder()).unwrap();
                    self.pos += matched.end();
                    self.next_token()
                } else {
                    Ok(self.single(TokenKind::ForwardSlash))
                }
            }
            '<' => Ok(self.one_or_two(TokenKind::LessThan, TokenKind::LessThanOrEquals)),
            '>' => Ok(self.one_or_two(TokenKind::GreaterThan, TokenKind::GreaterThanOrEquals)),
            '=' => Ok(self.one_or_two(TokenKind::Equals, TokenKind::EqualsEquals)),
            '!' => Ok(self.one_or_two(TokenKind::Not, TokenKind::NotEquals)),
            '&' => self.doubled('&', TokenKind::And),
            '|' => self.doubled('|', TokenKind::Or),
            _ => Err(Error::new(
                ErrorKind::UnrecognisedCharacter { character },
                self.pos,
            )),
        }
    }

    fn lex_number(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        let matched = NUMBER_RE.find(self.remainder()).unwrap();
        let text = matched.as_str();

        if !text.bytes().any(|byte| byte.is_ascii_digit()) {
            return Err(Error::new(ErrorKind::MalformedNumber, start));
        }

        let kind = if text.contains('.') {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };
        self.pos += text.len();

        Ok(Token {
            kind,
            start,
            end: self.pos - 1,
        })
    }

    fn lex_word(&mut self) -> Token {
        let start = self.pos;
        let matched = WORD_RE.find(self.remainder()).unwrap();
        let kind = RESERVED_LOOKUP
            .get(matched.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.pos += matched.end();

        Token {
            kind,
            start,
            end: self.pos - 1,
        }
    }

    fn lex_string(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        match STRING_RE.find(self.remainder()) {
            Some(matched) => {
                self.pos += matched.end();
                Ok(Token {
                    kind: TokenKind::StringLiteral,
                    start,
                    end: self.pos - 1,
                })
            }
            None => Err(Error::new(ErrorKind::UnterminatedQuote, start)),
        }
    }

    // Exactly one character, or one escaped character, between the quotes.
    fn lex_char(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        self.pos += 1;

        let first = self
            .remainder()
            .chars()
            .next()
            .ok_or_else(|| Error::new(ErrorKind::UnterminatedQuote, start))?;
        if first == '\'' {
            return Err(Error::new(ErrorKind::EmptyCharLiteral, start));
        }
        if first == '\\' {
            self.pos += 1;
            let escaped = self
                .remainder()
                .chars()
                .next()
                .ok_or_else(|| Error::new(ErrorKind::UnterminatedQuote, start))?;
            self.pos += escaped.len_utf8();
        } else {
            self.pos += first.len_utf8();
        }

        match self.remainder().chars().next() {
            Some('\'') => {
                self.pos += 1;
                Ok(Token {
                    kind: TokenKind::CharLiteral,
                    start,
                    end: self.pos - 1,
                })
            }
            Some(found) => Err(Error::new(ErrorKind::MissingClosingQuote { found }, self.pos)),
            None => Err(Error::new(ErrorKind::UnterminatedQuote, start)),
        }
    }

    // `[ IntegerLiteral ]`; the returned Array token spans the digits so the
    // parser can convert them to an extent. No whitespace inside the
    // brackets.
    fn lex_array_extent(&mut self) -> Result<Token, Error> {
        let open = self.pos;
        self.pos += 1;

        if self.pos >= self.source.len() {
            return Err(Error::new(
                ErrorKind::MissingClosingBracket {
                    found: "end of input".to_string(),
                },
                open,
            ));
        }

        let number = self.lex_number()?;

        match self.remainder().chars().next() {
            Some(']') => self.pos += 1,
            Some(found) => {
                return Err(Error::new(
                    ErrorKind::MissingClosingBracket {
                        found: format!("{:?}", found),
                    },
                    self.pos,
                ))
            }
            None => {
                return Err(Error::new(
                    ErrorKind::MissingClosingBracket {
                        found: "end of input".to_string(),
                    },
                    self.pos,
                ))
            }
        }

        if number.kind == TokenKind::FloatLiteral {
            return Err(Error::new(
                ErrorKind::NonIntegerArraySize {
                    text: number.text(self.source).to_string(),
                },
                number.start,
            ));
        }

        Ok(Token {
            kind: TokenKind::Array,
            start: number.start,
            end: number.end,
        })
    }
}
