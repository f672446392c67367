//! Scalar root finding: bisection and Newton-Raphson with per-iteration
//! diagnostic traces.
//!
//! Each solve is a pure function of its inputs: it takes evaluator
//! closures (or expression text, via [`bisection`] / [`newton_raphson`])
//! plus a [`Config`], and returns a [`Solution`] holding the final
//! [`Status`], the root estimate when one exists, and the full iteration
//! trace for rendering. Nothing is shared across calls and every failure
//! mode is a status, not a panic.
//!
//! ```
//! use radical_solve::{Config, Status, bisection, newton_raphson};
//!
//! let config = Config::default();
//!
//! let slow = bisection("x^3 - x - 2", 1.0, 2.0, &config);
//! let fast = newton_raphson("x^3 - x - 2", 1.5, &config);
//!
//! assert_eq!(slow.status, Status::Converged);
//! assert_eq!(fast.status, Status::Converged);
//! assert!(fast.iterations() < slow.iterations());
//! ```

pub mod bisection;
pub mod newton;

mod config;
mod expression;
mod solution;

pub use config::Config;
pub use expression::{
    AstEngine, EngineError, SymbolicEngine, bisection, bisection_with, newton_raphson,
    newton_raphson_with,
};
pub use solution::{Solution, Status};
