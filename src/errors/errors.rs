use std::fmt::Display;

use thiserror::Error;

/// A fatal validation error carrying its kind and the byte offset in the
/// source text where it was detected.
///
/// Every lexing and parsing function returns `Result<_, Error>`; the first
/// error propagates straight up to the driver, which alone decides what to
/// do with it. Nothing inside the core recovers or aborts the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    offset: usize,
}

impl Error {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Error { kind, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn error_name(&self) -> &str {
        match &self.kind {
            ErrorKind::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorKind::UnterminatedQuote => "UnterminatedQuote",
            ErrorKind::MissingClosingQuote { .. } => "MissingClosingQuote",
            ErrorKind::EmptyCharLiteral => "EmptyCharLiteral",
            ErrorKind::MalformedNumber => "MalformedNumber",
            ErrorKind::MissingClosingBracket { .. } => "MissingClosingBracket",
            ErrorKind::NonIntegerArraySize { .. } => "NonIntegerArraySize",
            ErrorKind::UndoubledOperator { .. } => "UndoubledOperator",
            ErrorKind::NumberParseError { .. } => "NumberParseError",
            ErrorKind::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorKind::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorKind::AssignmentTypeMismatch { .. } => "AssignmentTypeMismatch",
            ErrorKind::ArrayElementMismatch { .. } => "ArrayElementMismatch",
            ErrorKind::LogicalOpOnString => "LogicalOpOnString",
            ErrorKind::ComparisonOnString => "ComparisonOnString",
            ErrorKind::NonConcatOpOnString => "NonConcatOpOnString",
            ErrorKind::StringOperandMismatch => "StringOperandMismatch",
            ErrorKind::InvalidNotOperand { .. } => "InvalidNotOperand",
            ErrorKind::InvalidOperandType { .. } => "InvalidOperandType",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (offset {})", self.kind, self.offset)
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorKind {
    // Lex errors
    #[error("unexpected character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("could not locate closing quote for open quote")]
    UnterminatedQuote,
    #[error("expected closing quote, found {found:?}")]
    MissingClosingQuote { found: char },
    #[error("empty char literal")]
    EmptyCharLiteral,
    #[error("numeric literals require at least one digit on one side of the decimal point")]
    MalformedNumber,
    #[error("expected closing bracket for array size, found {found}")]
    MissingClosingBracket { found: String },
    #[error("array sizes must be integer literals, found float literal {text:?}")]
    NonIntegerArraySize { text: String },
    #[error("bitwise operations are not supported, expected doubled {operator:?}")]
    UndoubledOperator { operator: char },

    // Syntax errors
    #[error("error parsing number: {text:?}")]
    NumberParseError { text: String },
    #[error("expected token types ( {expected} ), got {found} in {rule}")]
    UnexpectedToken {
        rule: &'static str,
        expected: String,
        found: String,
    },

    // Semantic errors
    #[error("variable {name:?} used before declaration")]
    VariableNotDeclared { name: String },
    #[error("value of type {found} assigned to variable {name:?} of type {expected}")]
    AssignmentTypeMismatch {
        name: String,
        expected: String,
        found: String,
    },
    #[error("found expression of type {found} in array literal of type {expected}")]
    ArrayElementMismatch { expected: String, found: String },
    #[error("trying to perform a logical operation on a string")]
    LogicalOpOnString,
    #[error("trying to perform a comparison operation on a string")]
    ComparisonOnString,
    #[error("only + may be applied to string operands")]
    NonConcatOpOnString,
    #[error("string concatenation requires both operands to be strings")]
    StringOperandMismatch,
    #[error("not operation is not valid on {found}")]
    InvalidNotOperand { found: String },
    #[error("expected a variable of type Int, Float, Bool or String, got {found}")]
    InvalidOperandType { found: String },
}
