/// Configuration shared by both solvers.
///
/// Plain data: a non-positive `tolerance` never fires the convergence
/// test and the solve ends in
/// [`MaxIterationsReached`](crate::Status::MaxIterationsReached);
/// `max_iterations` is the sole termination bound either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Convergence tolerance.
    pub tolerance: f64,
    /// Hard bound on the number of iterations.
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 50,
        }
    }
}

impl Config {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}
