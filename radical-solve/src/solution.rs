/// How a solve run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,
    /// Reached the iteration limit; the estimate is best-effort, not
    /// a failure.
    MaxIterationsReached,
    /// Bisection precondition failed: f(a) and f(b) do not have
    /// opposite signs.
    InvalidBracket,
    /// Newton degeneracy: the derivative evaluated to exactly zero.
    ZeroDerivative,
    /// The expression could not be parsed, or its evaluator returned
    /// an error mid-solve.
    EvaluationError,
}

/// The outcome of a solve run, generic over the per-method iteration
/// record type.
///
/// Created fresh per call and never mutated afterwards. The trace holds
/// every completed iteration in chronological order, including the
/// iterations leading up to a mid-solve failure; it is empty only when
/// a precondition check fails before the first iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<R> {
    /// Final solver status.
    pub status: Status,
    /// Best root estimate. Present iff the status is [`Status::Converged`]
    /// or [`Status::MaxIterationsReached`].
    pub root_estimate: Option<f64>,
    /// Per-iteration diagnostic records, insertion order = iteration order.
    pub trace: Vec<R>,
    /// Human-readable explanation. Present for every non-converged status.
    pub message: Option<String>,
}

impl<R> Solution<R> {
    pub(crate) fn converged(root: f64, trace: Vec<R>) -> Self {
        Self {
            status: Status::Converged,
            root_estimate: Some(root),
            trace,
            message: None,
        }
    }

    pub(crate) fn max_iterations(root: f64, trace: Vec<R>, message: String) -> Self {
        Self {
            status: Status::MaxIterationsReached,
            root_estimate: Some(root),
            trace,
            message: Some(message),
        }
    }

    pub(crate) fn failed(status: Status, trace: Vec<R>, message: String) -> Self {
        Self {
            status,
            root_estimate: None,
            trace,
            message: Some(message),
        }
    }

    /// True when the run converged within tolerance.
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Number of iterations actually performed.
    pub fn iterations(&self) -> usize {
        self.trace.len()
    }
}
