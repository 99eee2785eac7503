//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric, string and char literals
//! - Array-size annotations
//! - Operators, punctuation and comments
//! - Error cases

use super::lexer::Lexer;
use super::tokens::{Token, TokenKind};
use crate::errors::errors::{Error, ErrorKind};

fn collect_tokens(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source).unwrap();
    let mut tokens = vec![];
    loop {
        let token = lexer.eat().unwrap();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

fn collect_kinds(source: &str) -> Vec<TokenKind> {
    collect_tokens(source).iter().map(|token| token.kind).collect()
}

fn lex_error(source: &str) -> Error {
    match Lexer::new(source) {
        Err(error) => error,
        Ok(mut lexer) => loop {
            match lexer.eat() {
                Err(error) => break error,
                Ok(token) if token.kind == TokenKind::Eof => {
                    panic!("expected a lex error in {:?}", source)
                }
                Ok(_) => {}
            }
        },
    }
}

#[test]
fn test_tokenize_keywords() {
    let kinds = collect_kinds("int bool float char string print read True False");

    assert_eq!(
        kinds,
        vec![
            TokenKind::Int,
            TokenKind::Bool,
            TokenKind::Float,
            TokenKind::Char,
            TokenKind::String,
            TokenKind::Print,
            TokenKind::Read,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    // `true` is not a keyword, only `True` is
    let source = "true Int printx";
    let tokens = collect_tokens(source);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text(source), "true");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text(source), "Int");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].text(source), "printx");
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_123 _underscore CamelCase";
    let tokens = collect_tokens(source);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text(source), "foo");
    assert_eq!(tokens[1].text(source), "bar_123");
    assert_eq!(tokens[2].text(source), "_underscore");
    assert_eq!(tokens[3].text(source), "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 .5 1.";
    let tokens = collect_tokens(source);

    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].text(source), "42");
    assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[1].text(source), "3.14");
    assert_eq!(tokens[2].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[3].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[3].text(source), ".5");
    assert_eq!(tokens[4].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[4].text(source), "1.");
}

#[test]
fn test_tokenize_negative_numbers() {
    let source = "-3 -2.5 -.5";
    let tokens = collect_tokens(source);

    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].text(source), "-3");
    assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[1].text(source), "-2.5");
    assert_eq!(tokens[2].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[2].text(source), "-.5");
}

#[test]
fn test_bare_decimal_point_is_an_error() {
    let error = lex_error(". ");
    assert_eq!(*error.kind(), ErrorKind::MalformedNumber);
}

#[test]
fn minus_always_starts_a_numeric_literal() {
    // `-` dispatches to numeric lexing before operator dispatch is reached,
    // so a spaced binary minus is a lex error and `1 -2` is two literals.
    let error = lex_error("1 - 2");
    assert_eq!(*error.kind(), ErrorKind::MalformedNumber);

    let source = "1 -2";
    let tokens = collect_tokens(source);
    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[1].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[1].text(source), "-2");
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "two words" """#;
    let tokens = collect_tokens(source);

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text(source), r#""hello""#);
    assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[1].text(source), r#""two words""#);
    assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[2].text(source), r#""""#);
}

#[test]
fn test_string_escapes_are_consumed_not_interpreted() {
    let source = r#""quote\"inside" "backslash\\""#;
    let tokens = collect_tokens(source);

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text(source), r#""quote\"inside""#);
    assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[1].text(source), r#""backslash\\""#);
}

#[test]
fn test_unterminated_string_is_an_error() {
    let error = lex_error(r#""abc"#);
    assert_eq!(*error.kind(), ErrorKind::UnterminatedQuote);
    assert_eq!(error.offset(), 0);

    // A trailing escape swallows the would-be closing quote
    let error = lex_error(r#""abc\"#);
    assert_eq!(*error.kind(), ErrorKind::UnterminatedQuote);
}

#[test]
fn test_tokenize_char_literals() {
    let source = r"'a' '\n' '\''";
    let tokens = collect_tokens(source);

    assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[0].text(source), "'a'");
    assert_eq!(tokens[1].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[1].text(source), r"'\n'");
    assert_eq!(tokens[2].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[2].text(source), r"'\''");
}

#[test]
fn test_empty_char_literal_is_an_error() {
    let error = lex_error("''");
    assert_eq!(*error.kind(), ErrorKind::EmptyCharLiteral);
}

#[test]
fn test_char_literal_missing_closing_quote() {
    let error = lex_error("'ab'");
    assert_eq!(*error.kind(), ErrorKind::MissingClosingQuote { found: 'b' });

    let error = lex_error("'a");
    assert_eq!(*error.kind(), ErrorKind::UnterminatedQuote);
}

#[test]
fn test_tokenize_array_extents() {
    let source = "[3] [0] [12]";
    let tokens = collect_tokens(source);

    assert_eq!(tokens[0].kind, TokenKind::Array);
    assert_eq!(tokens[0].text(source), "3");
    assert_eq!(tokens[1].kind, TokenKind::Array);
    assert_eq!(tokens[1].text(source), "0");
    assert_eq!(tokens[2].kind, TokenKind::Array);
    assert_eq!(tokens[2].text(source), "12");
}

#[test]
fn test_float_array_extent_is_an_error() {
    let error = lex_error("[3.5]");
    assert_eq!(
        *error.kind(),
        ErrorKind::NonIntegerArraySize {
            text: "3.5".to_string()
        }
    );
}

#[test]
fn test_malformed_array_extents() {
    let error = lex_error("[x]");
    assert_eq!(*error.kind(), ErrorKind::MalformedNumber);

    let error = lex_error("[3");
    assert!(matches!(
        error.kind(),
        ErrorKind::MissingClosingBracket { .. }
    ));

    let error = lex_error("[3}");
    assert!(matches!(
        error.kind(),
        ErrorKind::MissingClosingBracket { .. }
    ));
}

#[test]
fn test_tokenize_operators() {
    let kinds = collect_kinds("+ * / < <= > >= = == != ! && ||");

    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Asterisk,
            TokenKind::ForwardSlash,
            TokenKind::LessThan,
            TokenKind::LessThanOrEquals,
            TokenKind::GreaterThan,
            TokenKind::GreaterThanOrEquals,
            TokenKind::Equals,
            TokenKind::EqualsEquals,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_two_character_operator_spans_are_inclusive() {
    let source = "<=";
    let tokens = collect_tokens(source);

    assert_eq!(tokens[0].start, 0);
    assert_eq!(tokens[0].end, 1);
    assert_eq!(tokens[0].text(source), "<=");
}

#[test]
fn test_undoubled_logical_operators_are_errors() {
    let error = lex_error("a & b");
    assert_eq!(*error.kind(), ErrorKind::UndoubledOperator { operator: '&' });
    assert_eq!(error.offset(), 2);

    let error = lex_error("a | b");
    assert_eq!(*error.kind(), ErrorKind::UndoubledOperator { operator: '|' });
}

#[test]
fn test_tokenize_punctuation() {
    let kinds = collect_kinds("( ) { } , ;");

    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::SemiColon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_line_comments_are_skipped() {
    let kinds = collect_kinds("int a; // declares a\nprint // trailing comment at eof");

    assert_eq!(
        kinds,
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::SemiColon,
            TokenKind::Print,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_slash_alone_is_division() {
    let kinds = collect_kinds("6 / x");
    assert_eq!(
        kinds,
        vec![
            TokenKind::IntLiteral,
            TokenKind::ForwardSlash,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unrecognised_character_cites_its_offset() {
    let error = lex_error("int @");
    assert_eq!(
        *error.kind(),
        ErrorKind::UnrecognisedCharacter { character: '@' }
    );
    assert_eq!(error.offset(), 4);
}

#[test]
fn test_empty_input_is_just_eof() {
    assert_eq!(collect_kinds(""), vec![TokenKind::Eof]);
    assert_eq!(collect_kinds("   \n\t "), vec![TokenKind::Eof]);
}

#[test]
fn test_peek_eat_and_peek_previous() {
    let source = "int a;";
    let mut lexer = Lexer::new(source).unwrap();

    assert_eq!(lexer.peek().kind, TokenKind::Int);
    // peek does not consume
    assert_eq!(lexer.peek().kind, TokenKind::Int);

    let eaten = lexer.eat().unwrap();
    assert_eq!(eaten.kind, TokenKind::Int);
    assert_eq!(lexer.peek_previous(), eaten);
    assert_eq!(lexer.peek().kind, TokenKind::Identifier);

    lexer.eat().unwrap();
    lexer.eat().unwrap();
    assert_eq!(lexer.peek().kind, TokenKind::Eof);
    assert_eq!(lexer.peek_previous().kind, TokenKind::SemiColon);
}

#[test]
fn test_expect_reports_rule_and_candidates() {
    let lexer = Lexer::new("42").unwrap();
    let error = lexer
        .expect(&[TokenKind::Identifier, TokenKind::Print], "parse_statement")
        .unwrap_err();

    match error.kind() {
        ErrorKind::UnexpectedToken {
            rule,
            expected,
            found,
        } => {
            assert_eq!(*rule, "parse_statement");
            assert_eq!(expected, "Identifier | Print");
            assert_eq!(found, "IntLiteral(42)");
        }
        other => panic!("unexpected error kind {:?}", other),
    }
}

#[test]
fn test_token_spans_resolve_against_source() {
    let source = "int abc;";
    let tokens = collect_tokens(source);

    assert_eq!(tokens[1].start, 4);
    assert_eq!(tokens[1].end, 6);
    assert_eq!(tokens[1].text(source), "abc");

    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.text(source), "");
}
