//! Solving from expression text.
//!
//! The solvers in [`bisection`](crate::bisection) and
//! [`newton`](crate::newton) work on plain numeric closures. This module
//! supplies the symbolic side: a narrow [`SymbolicEngine`] contract
//! (parse, evaluate, differentiate — nothing else), the [`AstEngine`]
//! implementation backed by `radical-expr`, and the text-level entry
//! points that compose the two.

use std::fmt::Display;

use thiserror::Error;

use crate::{Config, Solution, Status, newton};

/// The three-operation contract a symbolic-math backend must satisfy.
///
/// The solvers never inspect the symbolic form; any library that can
/// parse text, evaluate at a point, and differentiate is substitutable
/// here.
pub trait SymbolicEngine {
    /// Opaque parsed expression.
    type Expr;
    /// Parse or evaluation failure, rendered into solver messages.
    type Error: Display;

    fn parse(&self, text: &str) -> Result<Self::Expr, Self::Error>;
    fn eval(&self, expr: &Self::Expr, x: f64) -> Result<f64, Self::Error>;
    fn differentiate(&self, expr: &Self::Expr) -> Self::Expr;
}

/// Parse or evaluation failure from [`AstEngine`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] radical_expr::ParseError),
    #[error(transparent)]
    Eval(#[from] radical_expr::EvalError),
}

/// [`SymbolicEngine`] backed by `radical-expr`, with the solve variable
/// fixed to `x`. Expressions mentioning any other variable fail at
/// evaluation time.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstEngine;

impl AstEngine {
    const VAR: &'static str = "x";
}

impl SymbolicEngine for AstEngine {
    type Expr = radical_expr::Expr;
    type Error = EngineError;

    fn parse(&self, text: &str) -> Result<Self::Expr, Self::Error> {
        Ok(radical_expr::parse(text)?)
    }

    fn eval(&self, expr: &Self::Expr, x: f64) -> Result<f64, Self::Error> {
        Ok(expr.eval(Self::VAR, x)?)
    }

    fn differentiate(&self, expr: &Self::Expr) -> Self::Expr {
        expr.diff(Self::VAR)
    }
}

/// Solves `text = 0` on the bracket `[a, b]` by bisection, using a
/// caller-supplied engine.
pub fn bisection_with<S: SymbolicEngine>(
    engine: &S,
    text: &str,
    a: f64,
    b: f64,
    config: &Config,
) -> Solution<crate::bisection::Step> {
    let expr = match engine.parse(text) {
        Ok(expr) => expr,
        Err(err) => return parse_failure(err),
    };
    crate::bisection::solve(|x| engine.eval(&expr, x), a, b, config)
}

/// Solves `text = 0` from the initial guess `x0` by Newton-Raphson,
/// using a caller-supplied engine. The derivative comes from the
/// engine's symbolic differentiation.
pub fn newton_raphson_with<S: SymbolicEngine>(
    engine: &S,
    text: &str,
    x0: f64,
    config: &Config,
) -> Solution<newton::Step> {
    let expr = match engine.parse(text) {
        Ok(expr) => expr,
        Err(err) => return parse_failure(err),
    };
    let derivative = engine.differentiate(&expr);
    newton::solve(
        |x| engine.eval(&expr, x),
        |x| engine.eval(&derivative, x),
        x0,
        config,
    )
}

/// Solves `text = 0` on the bracket `[a, b]` by bisection.
pub fn bisection(text: &str, a: f64, b: f64, config: &Config) -> Solution<crate::bisection::Step> {
    bisection_with(&AstEngine, text, a, b, config)
}

/// Solves `text = 0` from the initial guess `x0` by Newton-Raphson.
pub fn newton_raphson(text: &str, x0: f64, config: &Config) -> Solution<newton::Step> {
    newton_raphson_with(&AstEngine, text, x0, config)
}

fn parse_failure<R>(err: impl Display) -> Solution<R> {
    Solution::failed(
        Status::EvaluationError,
        Vec::new(),
        format!("failed to parse expression: {err}"),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn bisection_from_text() {
        let solution = bisection("x^3 - x - 2", 1.0, 2.0, &Config::default());

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.root_estimate.unwrap(), 1.521_380, epsilon = 1e-5);
    }

    #[test]
    fn newton_derives_its_own_derivative() {
        let solution = newton_raphson("x^3 - x - 2", 1.5, &Config::default());

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.root_estimate.unwrap(), 1.521_380, epsilon = 1e-5);
        // the recorded derivative is 3x^2 - 1 evaluated at the iterate
        let first = &solution.trace[0];
        assert_relative_eq!(first.df_x, 3.0 * 1.5 * 1.5 - 1.0);
    }

    #[test]
    fn parse_failure_becomes_evaluation_error() {
        let solution = bisection("x +* 2", 0.0, 1.0, &Config::default());

        assert_eq!(solution.status, Status::EvaluationError);
        assert!(solution.trace.is_empty());
        assert!(
            solution
                .message
                .as_deref()
                .unwrap()
                .starts_with("failed to parse expression")
        );

        let solution = newton_raphson("", 1.0, &Config::default());
        assert_eq!(solution.status, Status::EvaluationError);
    }

    #[test]
    fn foreign_variable_fails_at_evaluation() {
        let solution = bisection("x + y", -2.0, 2.0, &Config::default());

        assert_eq!(solution.status, Status::EvaluationError);
        assert!(solution.message.as_deref().unwrap().contains("'y'"));
    }
}
