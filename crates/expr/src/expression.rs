use std::{fmt, str::FromStr};

use rootscan_core::Equation;

use crate::{
    ast::{Constant, Expr, Func},
    error::{EvalError, ParseError},
    parser,
};

/// The free variable used by [`compile`].
pub const DEFAULT_VARIABLE: &str = "x";

/// A compiled, immutable expression in one free variable.
///
/// `Expression` owns its syntax tree and holds no interior state, so it can be
/// evaluated any number of times and shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    variable: String,
    root: Expr,
}

/// Compiles an expression in the free variable `x`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is not a valid expression or
/// references an unknown name.
pub fn compile(source: &str) -> Result<Expression, ParseError> {
    compile_in(source, DEFAULT_VARIABLE)
}

/// Compiles an expression in the named free variable.
///
/// # Errors
///
/// Returns [`ParseError::InvalidVariable`] if `variable` is not an identifier
/// or collides with a constant or function name, and any other
/// [`ParseError`] if the text does not compile.
pub fn compile_in(source: &str, variable: &str) -> Result<Expression, ParseError> {
    if !parser::is_identifier(variable)
        || Constant::from_name(variable).is_some()
        || Func::from_name(variable).is_some()
    {
        return Err(ParseError::InvalidVariable {
            name: variable.to_owned(),
        });
    }

    let root = parser::parse(source, variable)?;

    Ok(Expression {
        source: source.to_owned(),
        variable: variable.to_owned(),
        root,
    })
}

impl Expression {
    /// Returns the text the expression was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the name of the free variable.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the compiled syntax tree.
    #[must_use]
    pub fn ast(&self) -> &Expr {
        &self.root
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if the expression is undefined at `x`.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.root.eval(x)
    }
}

impl Equation for Expression {
    type Error = EvalError;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        self.eval(x)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        compile(source)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
