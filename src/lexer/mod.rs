//! Lexical analysis module for the validator.
//!
//! This module contains the lexer that turns source text into tokens on
//! demand, one token of lookahead at a time. It handles:
//!
//! - Recognition of keywords, identifiers, literals, and operators
//! - Array-size annotations and line comments
//! - Token span tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
