//! Error types for the stack and the calculator built on it.

use thiserror::Error;

/// A rejected stack operation. The stack is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `push` on a full stack.
    #[error("stack full")]
    Overflow,

    /// `pop` or `peek` on an empty stack.
    #[error("stack empty")]
    Underflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Stack(#[from] StackError),

    #[error("unknown token: {0:?}")]
    UnknownToken(String),

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("entry too long")]
    EntryTooLong,
}
