use thiserror::Error;

/// Errors produced while tokenizing or parsing an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expression is empty")]
    EmptyExpression,

    #[error("invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("function '{name}' takes one argument, got {got}")]
    WrongArity { name: String, got: usize },

    #[error("expected {expected}, got '{got}'")]
    UnexpectedToken { expected: &'static str, got: String },

    #[error("unexpected end of expression")]
    UnexpectedEnd,
}

/// Errors produced while numerically evaluating an expression.
///
/// These are the domain failures the evaluator refuses to fold into a
/// float: anything else (overflow, `0^0`, ...) follows plain `f64`
/// semantics and may propagate NaN or infinity into the result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unknown variable '{name}'")]
    UnknownVariable { name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("logarithm of non-positive value {value}")]
    LogNonPositive { value: f64 },

    #[error("square root of negative value {value}")]
    SqrtNegative { value: f64 },
}
