//! Word-expression interpreter.
//!
//! Expressions are whitespace-separated words joined by `+` (append) and `-`
//! (strike out the first occurrence). Evaluation is a single left-to-right
//! fold with no precedence and no nesting.

/// Token definitions for the expression language.
pub mod ast;
/// String operations applied by each operator.
pub mod operator;
/// Tokenizer for expression source text.
pub mod parser;
/// Left-to-right reducer.
pub mod reducer;

pub use ast::{Operator, Token, TokenKind};
pub use parser::tokenize;
pub use reducer::{Reducer, Reduction, Step, reduce};

use thiserror::Error;

/// Convenience result alias for interpreter operations.
pub type Result<T> = std::result::Result<T, ReduceError>;

/// Errors surfaced while tokenizing or reducing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    /// The input held no tokens at all.
    #[error("expression is empty")]
    EmptyExpression,

    /// An operator had nothing to act on, on one side or the other.
    #[error("operator '{operator}' at byte {offset} is missing an operand")]
    MissingOperand {
        /// The operator lacking an operand.
        operator: Operator,
        /// Byte offset of that operator.
        offset: usize,
    },

    /// Strike asked to remove text that is not present.
    #[error("cannot remove '{needle}': not found in '{haystack}'")]
    OperandNotFound {
        /// Text that was to be removed.
        needle: String,
        /// Text that was searched.
        haystack: String,
    },

    /// A token began with an operator symbol but was not a bare operator.
    #[error("invalid operator '{token}' at byte {offset}")]
    InvalidOperator {
        /// The offending token.
        token: String,
        /// Byte offset of the token.
        offset: usize,
    },
}
