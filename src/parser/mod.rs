//! Parser module: recursive descent with inline type checking.
//!
//! The parser drives the lexer one token at a time and checks types and
//! array shapes while parsing. No syntax tree is built; each expression
//! rule returns the inferred type and shape of what it just consumed, and
//! statements validate those against the symbol table. The first violation
//! of any rule aborts the parse of that source.

pub mod expr;
pub mod parser;
pub mod stmt;
pub mod symbols;
