//! Numeric evaluation of expressions.

use crate::{EvalError, Expr, Func};

impl Expr {
    /// Evaluates the expression with the variable `var` bound to `x`.
    ///
    /// Domain failures (division by exactly zero, `ln` of a non-positive
    /// value, `sqrt` of a negative value) and references to any variable
    /// other than `var` return an [`EvalError`]. Everything else follows
    /// plain `f64` arithmetic, so NaN and infinities propagate
    /// unsanitized.
    pub fn eval(&self, var: &str, x: f64) -> Result<f64, EvalError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Var(name) => {
                if name == var {
                    Ok(x)
                } else {
                    Err(EvalError::UnknownVariable { name: name.clone() })
                }
            }
            Expr::Add(a, b) => Ok(a.eval(var, x)? + b.eval(var, x)?),
            Expr::Sub(a, b) => Ok(a.eval(var, x)? - b.eval(var, x)?),
            Expr::Mul(a, b) => Ok(a.eval(var, x)? * b.eval(var, x)?),
            Expr::Div(a, b) => {
                let denom = b.eval(var, x)?;
                if denom == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a.eval(var, x)? / denom)
            }
            Expr::Pow(a, b) => Ok(a.eval(var, x)?.powf(b.eval(var, x)?)),
            Expr::Call(func, arg) => {
                let v = arg.eval(var, x)?;
                match func {
                    Func::Sin => Ok(v.sin()),
                    Func::Cos => Ok(v.cos()),
                    Func::Tan => Ok(v.tan()),
                    Func::Exp => Ok(v.exp()),
                    Func::Ln => {
                        if v <= 0.0 {
                            Err(EvalError::LogNonPositive { value: v })
                        } else {
                            Ok(v.ln())
                        }
                    }
                    Func::Sqrt => {
                        if v < 0.0 {
                            Err(EvalError::SqrtNegative { value: v })
                        } else {
                            Ok(v.sqrt())
                        }
                    }
                    Func::Abs => Ok(v.abs()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{EvalError, parse};

    fn eval(input: &str, x: f64) -> Result<f64, EvalError> {
        parse(input).unwrap().eval("x", x)
    }

    #[test]
    fn evaluates_arithmetic() {
        assert_relative_eq!(eval("x^3 - x - 2", 2.0).unwrap(), 4.0);
        assert_relative_eq!(eval("x**3 - 4*x - 9", 3.0).unwrap(), 6.0);
        assert_relative_eq!(eval("(x + 1)/(x - 1)", 3.0).unwrap(), 2.0);
        assert_relative_eq!(eval("-x^2", 3.0).unwrap(), -9.0);
    }

    #[test]
    fn evaluates_functions() {
        assert_relative_eq!(eval("sin(x)", std::f64::consts::PI / 2.0).unwrap(), 1.0);
        assert_relative_eq!(eval("exp(x)", 1.0).unwrap(), std::f64::consts::E);
        assert_relative_eq!(eval("ln(e)", 0.0).unwrap(), 1.0);
        assert_relative_eq!(eval("sqrt(x)", 16.0).unwrap(), 4.0);
        assert_relative_eq!(eval("abs(x)", -2.5).unwrap(), 2.5);
        assert_relative_eq!(eval("cos(pi)", 0.0).unwrap(), -1.0);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(eval("1/x", 0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn log_domain_is_checked() {
        assert_eq!(
            eval("ln(x)", -1.0),
            Err(EvalError::LogNonPositive { value: -1.0 })
        );
        assert_eq!(
            eval("log(x)", 0.0),
            Err(EvalError::LogNonPositive { value: 0.0 })
        );
    }

    #[test]
    fn sqrt_domain_is_checked() {
        assert_eq!(
            eval("sqrt(x)", -4.0),
            Err(EvalError::SqrtNegative { value: -4.0 })
        );
    }

    #[test]
    fn unknown_variable_is_an_error() {
        assert_eq!(
            eval("x + y", 1.0),
            Err(EvalError::UnknownVariable {
                name: "y".to_string()
            })
        );
    }

    #[test]
    fn nan_propagates_without_error() {
        // 0^0 and friends stay in float semantics
        let v = eval("x^x", 0.0).unwrap();
        assert_relative_eq!(v, 1.0); // f64::powf(0, 0) is 1
    }
}
