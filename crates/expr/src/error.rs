use thiserror::Error;

/// Errors that can occur when compiling an expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("syntax error at position {position}: expected {expected}")]
    Syntax {
        position: usize,
        expected: &'static str,
    },

    #[error("unexpected input at position {position}: {remaining:?}")]
    TrailingInput { position: usize, remaining: String },

    #[error("unknown identifier {name:?}")]
    UnknownIdentifier { name: String },

    #[error("unknown function {name:?}")]
    UnknownFunction { name: String },

    #[error("{name:?} is not a function")]
    NotCallable { name: String },

    #[error("invalid variable name {name:?}")]
    InvalidVariable { name: String },
}

/// Errors that can occur when evaluating a compiled expression.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{function} is undefined at {argument}")]
    Domain {
        function: &'static str,
        argument: f64,
    },

    #[error("result is not finite ({value})")]
    NonFinite { value: f64 },
}
