//! Error types and error handling for the validator.
//!
//! This module defines the error value returned up through the lexing and
//! parsing call chain. It includes:
//!
//! - An error kind for every lex, syntax and semantic failure
//! - Source offset tracking for diagnostics
//! - Error formatting and display functionality

pub mod errors;
