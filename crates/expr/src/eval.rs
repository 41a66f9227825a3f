use crate::{
    ast::{BinaryOp, Expr, Func},
    error::EvalError,
};

impl Expr {
    /// Evaluates the tree with the free variable bound to `x`.
    ///
    /// Every intermediate value must be finite.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] on division by zero, when a function is
    /// evaluated outside its real domain, or when a value overflows.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Constant(constant) => constant.value(),
            Self::Variable(_) => x,
            Self::Neg(inner) => -inner.eval(x)?,
            Self::Binary { op, lhs, rhs } => apply_binary(*op, lhs.eval(x)?, rhs.eval(x)?)?,
            Self::Call { func, arg } => apply_func(*func, arg.eval(x)?)?,
        };
        finite(value)
    }
}

fn finite(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { value })
    }
}

fn apply_binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Sub => Ok(lhs - rhs),
        BinaryOp::Mul => Ok(lhs * rhs),
        BinaryOp::Div => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(lhs / rhs)
        }
        BinaryOp::Pow => {
            if lhs == 0.0 && rhs < 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            if lhs < 0.0 && rhs.fract() != 0.0 {
                return Err(EvalError::Domain {
                    function: "pow",
                    argument: lhs,
                });
            }
            Ok(lhs.powf(rhs))
        }
    }
}

fn apply_func(func: Func, arg: f64) -> Result<f64, EvalError> {
    let defined = match func {
        Func::Ln | Func::Log10 | Func::Log2 => arg > 0.0,
        Func::Sqrt => arg >= 0.0,
        Func::Asin | Func::Acos => (-1.0..=1.0).contains(&arg),
        _ => true,
    };
    if !defined {
        return Err(EvalError::Domain {
            function: func.name(),
            argument: arg,
        });
    }

    let value = match func {
        Func::Sin => arg.sin(),
        Func::Cos => arg.cos(),
        Func::Tan => arg.tan(),
        Func::Asin => arg.asin(),
        Func::Acos => arg.acos(),
        Func::Atan => arg.atan(),
        Func::Sinh => arg.sinh(),
        Func::Cosh => arg.cosh(),
        Func::Tanh => arg.tanh(),
        Func::Exp => arg.exp(),
        Func::Ln => arg.ln(),
        Func::Log10 => arg.log10(),
        Func::Log2 => arg.log2(),
        Func::Sqrt => arg.sqrt(),
        Func::Cbrt => arg.cbrt(),
        Func::Abs => arg.abs(),
    };
    Ok(value)
}
