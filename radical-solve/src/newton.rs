//! Root finding via the Newton-Raphson method.

use std::fmt::Display;

use crate::{Config, Solution, Status};

/// One Newton iteration: the current iterate, the function and
/// derivative values there, and the updated iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// 1-based iteration index.
    pub iter: usize,
    /// Iterate at the start of this iteration.
    pub x: f64,
    /// Function value at `x`.
    pub f_x: f64,
    /// Derivative value at `x`.
    pub df_x: f64,
    /// Updated iterate `x - f_x / df_x`.
    pub x_next: f64,
}

/// Finds a root of `f` starting from `x0`, using the explicit
/// derivative `df`.
///
/// No bracket is required; the tradeoff against bisection is fast
/// (quadratic) local convergence with no global guarantee. Convergence
/// fires when the step size `|x_next - x|` drops below the tolerance.
///
/// A derivative of exactly zero stops the solve with
/// [`Status::ZeroDerivative`]; the trace keeps only the iterations
/// completed before the degenerate one. The exact-equality test is a
/// deliberate simplification: a near-zero threshold would introduce a
/// tunable this interface does not have, so tiny nonzero derivatives are
/// not guarded against the resulting large steps.
pub fn solve<F, D, E>(f: F, df: D, x0: f64, config: &Config) -> Solution<Step>
where
    F: Fn(f64) -> Result<f64, E>,
    D: Fn(f64) -> Result<f64, E>,
    E: Display,
{
    let mut x = x0;
    let mut trace = Vec::new();
    let mut x_next = x0;

    for iter in 1..=config.max_iterations {
        let f_x = match f(x) {
            Ok(v) => v,
            Err(e) => return eval_failure(trace, x, e),
        };
        let df_x = match df(x) {
            Ok(v) => v,
            Err(e) => return eval_failure(trace, x, e),
        };

        if df_x == 0.0 {
            return Solution::failed(
                Status::ZeroDerivative,
                trace,
                format!("derivative vanished at iteration {iter}, x = {x}"),
            );
        }

        x_next = x - f_x / df_x;
        trace.push(Step {
            iter,
            x,
            f_x,
            df_x,
            x_next,
        });

        if (x_next - x).abs() < config.tolerance {
            return Solution::converged(x_next, trace);
        }

        x = x_next;
    }

    Solution::max_iterations(
        x_next,
        trace,
        format!(
            "no convergence within {} iterations; last iterate is {x_next}",
            config.max_iterations
        ),
    )
}

fn eval_failure<E: Display>(trace: Vec<Step>, x: f64, err: E) -> Solution<Step> {
    Solution::failed(
        Status::EvaluationError,
        trace,
        format!("evaluation failed at x = {x}: {err}"),
    )
}
