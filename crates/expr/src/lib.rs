//! Compiles textual single-variable expressions into evaluable functions.
//!
//! The accepted syntax is standard infix notation:
//!
//! - operators `+ - * /`, powers `**` (or `^`, right-associative), unary `-`/`+`
//! - constants `pi`, `tau`, `e` (also `E`)
//! - functions `sin cos tan asin acos atan sinh cosh tanh exp ln log log10
//!   log2 sqrt cbrt abs`, where `log` is the natural logarithm
//! - an optional `lhs = rhs`, compiled as the residual `lhs - rhs`
//!
//! ```
//! use rootscan_expr::compile;
//!
//! let f = compile("x**2 - 4").unwrap();
//! assert_eq!(f.eval(3.0), Ok(5.0));
//! ```

mod ast;
mod error;
mod eval;
mod expression;
mod parser;

#[cfg(test)]
mod proptests;

pub use ast::{BinaryOp, Constant, Expr, Func};
pub use error::{EvalError, ParseError};
pub use expression::{DEFAULT_VARIABLE, Expression, compile, compile_in};
