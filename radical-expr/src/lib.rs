//! Expression parsing, numeric evaluation, and symbolic differentiation.
//!
//! This crate turns a textual expression such as `x^3 - x - 2` into an
//! [`Expr`] tree that can be evaluated at a point ([`Expr::eval`]) and
//! differentiated symbolically ([`Expr::diff`]). It is the symbolic
//! engine behind the `radical-solve` root finders, but has no dependency
//! on them and can be used on its own.
//!
//! ```
//! use radical_expr::parse;
//!
//! let f = parse("x^2 - 2").unwrap();
//! let df = f.diff("x");
//!
//! assert_eq!(f.eval("x", 2.0).unwrap(), 2.0);
//! assert_eq!(df.eval("x", 2.0).unwrap(), 4.0);
//! ```

mod ast;
mod diff;
mod error;
mod eval;
mod parser;

pub use ast::{Expr, Func};
pub use error::{EvalError, ParseError};
pub use parser::parse;
