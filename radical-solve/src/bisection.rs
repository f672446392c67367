//! Root finding via the bisection method.

use std::fmt::Display;

use crate::{Config, Solution, Status};

/// One bisection iteration: the bracket it started from, the midpoint
/// probed, and the function value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// 1-based iteration index.
    pub iter: usize,
    /// Left endpoint of the bracket at the start of this iteration.
    pub a: f64,
    /// Right endpoint of the bracket at the start of this iteration.
    pub b: f64,
    /// Midpoint `(a + b) / 2`.
    pub midpoint: f64,
    /// Function value at the midpoint.
    pub f_midpoint: f64,
}

/// Finds a root of `f` on the bracket `[a, b]`.
///
/// The bracket must straddle a sign change: when `f(a) * f(b) >= 0` the
/// solve fails with [`Status::InvalidBracket`] before iterating. The
/// non-strict comparison deliberately rejects brackets whose endpoint
/// already touches zero.
///
/// Convergence fires when `|f(c)| < tolerance` or the full bracket width
/// `|b - a|` drops below the tolerance. Exhausting the iteration budget
/// yields [`Status::MaxIterationsReached`] with the last midpoint as the
/// estimate.
///
/// Evaluator failures surface as [`Status::EvaluationError`], keeping
/// whatever trace had accumulated. NaN from an otherwise-successful
/// evaluation is not sanitized and flows into the records.
pub fn solve<F, E>(f: F, a: f64, b: f64, config: &Config) -> Solution<Step>
where
    F: Fn(f64) -> Result<f64, E>,
    E: Display,
{
    let mut a = a;
    let mut b = b;

    let mut f_a = match f(a) {
        Ok(v) => v,
        Err(e) => return eval_failure(Vec::new(), a, e),
    };
    let f_b = match f(b) {
        Ok(v) => v,
        Err(e) => return eval_failure(Vec::new(), b, e),
    };

    if f_a * f_b >= 0.0 {
        return Solution::failed(
            Status::InvalidBracket,
            Vec::new(),
            format!(
                "f(a) and f(b) must have opposite signs to bracket a root: \
                 f({a}) = {f_a}, f({b}) = {f_b}"
            ),
        );
    }

    let mut trace = Vec::new();
    let mut midpoint = f64::NAN;

    for iter in 1..=config.max_iterations {
        midpoint = (a + b) / 2.0;
        let f_midpoint = match f(midpoint) {
            Ok(v) => v,
            Err(e) => return eval_failure(trace, midpoint, e),
        };

        trace.push(Step {
            iter,
            a,
            b,
            midpoint,
            f_midpoint,
        });

        if f_midpoint.abs() < config.tolerance || (b - a).abs() < config.tolerance {
            return Solution::converged(midpoint, trace);
        }

        if f_a * f_midpoint < 0.0 {
            // root lies in [a, c]
            b = midpoint;
        } else {
            // Root lies in [c, b]. An exact f(c) == 0 would land here
            // too, but the convergence test above has already returned
            // in that case.
            a = midpoint;
            f_a = f_midpoint;
        }
    }

    Solution::max_iterations(
        midpoint,
        trace,
        format!(
            "no convergence within {} iterations; best midpoint estimate is {midpoint}",
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
