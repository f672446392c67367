//! Symbolic differentiation.

use crate::{Expr, Func};

impl Expr {
    /// Returns the symbolic derivative with respect to `var`.
    ///
    /// Applies the standard rules (linearity, product, quotient, chain,
    /// power) with just enough constant folding to keep derivatives of
    /// simple expressions readable. No general simplification is
    /// attempted.
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Number(_) => Expr::number(0.0),
            Expr::Var(name) => {
                if name == var {
                    Expr::number(1.0)
                } else {
                    Expr::number(0.0)
                }
            }
            Expr::Add(a, b) => fold_add(a.diff(var), b.diff(var)),
            Expr::Sub(a, b) => fold_sub(a.diff(var), b.diff(var)),
            Expr::Mul(a, b) => {
                // a'b + ab'
                fold_add(
                    fold_mul(a.diff(var), (**b).clone()),
                    fold_mul((**a).clone(), b.diff(var)),
                )
            }
            Expr::Div(a, b) => {
                // (a'b - ab') / b^2
                fold_div(
                    fold_sub(
                        fold_mul(a.diff(var), (**b).clone()),
                        fold_mul((**a).clone(), b.diff(var)),
                    ),
                    fold_pow((**b).clone(), Expr::number(2.0)),
                )
            }
            Expr::Pow(base, exponent) => diff_pow(base, exponent, var),
            Expr::Call(func, arg) => {
                let inner = arg.diff(var);
                fold_mul(diff_func(*func, arg), inner)
            }
        }
    }
}

/// Power rule. Constant exponents take the familiar n*u^(n-1) form; the
/// general case goes through u^v * (v'*ln(u) + v*u'/u).
fn diff_pow(base: &Expr, exponent: &Expr, var: &str) -> Expr {
    if let Some(n) = exponent.as_number() {
        return fold_mul(
            fold_mul(
                Expr::number(n),
                fold_pow((*base).clone(), Expr::number(n - 1.0)),
            ),
            base.diff(var),
        );
    }

    let u = base.clone();
    let v = exponent.clone();
    fold_mul(
        fold_pow(u.clone(), v.clone()),
        fold_add(
            fold_mul(exponent.diff(var), Expr::call(Func::Ln, u.clone())),
            fold_mul(v, fold_div(base.diff(var), u)),
        ),
    )
}

/// Derivative of `func(u)` with respect to u.
fn diff_func(func: Func, arg: &Expr) -> Expr {
    let u = arg.clone();
    match func {
        Func::Sin => Expr::call(Func::Cos, u),
        Func::Cos => Expr::neg(Expr::call(Func::Sin, u)),
        Func::Tan => fold_div(
            Expr::number(1.0),
            fold_pow(Expr::call(Func::Cos, u), Expr::number(2.0)),
        ),
        Func::Exp => Expr::call(Func::Exp, u),
        Func::Ln => fold_div(Expr::number(1.0), u),
        Func::Sqrt => fold_div(
            Expr::number(1.0),
            fold_mul(Expr::number(2.0), Expr::call(Func::Sqrt, u)),
        ),
        // d|u|/du written as u/|u|; undefined at u = 0, where evaluation
        // reports division by zero
        Func::Abs => fold_div(u.clone(), Expr::call(Func::Abs, u)),
    }
}

fn fold_add(a: Expr, b: Expr) -> Expr {
    if a.as_number() == Some(0.0) {
        return b;
    }
    if b.as_number() == Some(0.0) {
        return a;
    }
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => Expr::number(x + y),
        _ => Expr::add(a, b),
    }
}

fn fold_sub(a: Expr, b: Expr) -> Expr {
    if b.as_number() == Some(0.0) {
        return a;
    }
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => Expr::number(x - y),
        _ => Expr::sub(a, b),
    }
}

fn fold_mul(a: Expr, b: Expr) -> Expr {
    if a.as_number() == Some(0.0) || b.as_number() == Some(0.0) {
        return Expr::number(0.0);
    }
    if a.as_number() == Some(1.0) {
        return b;
    }
    if b.as_number() == Some(1.0) {
        return a;
    }
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => Expr::number(x * y),
        _ => Expr::mul(a, b),
    }
}

fn fold_div(a: Expr, b: Expr) -> Expr {
    if a.as_number() == Some(0.0) {
        return Expr::number(0.0);
    }
    if b.as_number() == Some(1.0) {
        return a;
    }
    Expr::div(a, b)
}

fn fold_pow(base: Expr, exponent: Expr) -> Expr {
    match exponent.as_number() {
        Some(1.0) => base,
        Some(0.0) => Expr::number(1.0),
        _ => Expr::pow(base, exponent),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::parse;

    /// Checks d/dx of `input` against a central finite difference at
    /// several sample points.
    fn assert_derivative_matches(input: &str, points: &[f64]) {
        let expr = parse(input).unwrap();
        let derivative = expr.diff("x");
        let h = 1e-6;

        for &x in points {
            let numeric =
                (expr.eval("x", x + h).unwrap() - expr.eval("x", x - h).unwrap()) / (2.0 * h);
            let symbolic = derivative.eval("x", x).unwrap();
            assert_relative_eq!(symbolic, numeric, max_relative = 1e-4, epsilon = 1e-6);
        }
    }

    #[test]
    fn polynomial_derivative() {
        let d = parse("x^3 - x - 2").unwrap().diff("x");
        assert_eq!(d.to_string(), "3*x^2 - 1");
    }

    #[test]
    fn constant_and_variable() {
        assert_eq!(parse("7").unwrap().diff("x").to_string(), "0");
        assert_eq!(parse("x").unwrap().diff("x").to_string(), "1");
    }

    #[test]
    fn product_and_quotient_rules() {
        assert_derivative_matches("x*sin(x)", &[0.5, 1.0, 2.0]);
        assert_derivative_matches("(x + 1)/(x^2 + 1)", &[0.0, 1.0, 3.0]);
    }

    #[test]
    fn chain_rule_through_functions() {
        assert_derivative_matches("sin(x^2)", &[0.5, 1.0, 1.5]);
        assert_derivative_matches("exp(-x^2)", &[0.0, 0.7, 1.3]);
        assert_derivative_matches("ln(x^2 + 1)", &[0.0, 1.0, 2.0]);
        assert_derivative_matches("sqrt(x^2 + 1)", &[0.0, 1.0, 2.0]);
        assert_derivative_matches("tan(x)", &[0.3, 0.8]);
        assert_derivative_matches("abs(x)", &[-2.0, 1.5]);
    }

    #[test]
    fn general_power_rule() {
        // x^x needs the u^v form
        assert_derivative_matches("x^x", &[0.5, 1.0, 2.0]);
    }

    #[test]
    fn derivative_of_derivative() {
        // second derivative of x^3 is 6x
        let d2 = parse("x^3").unwrap().diff("x").diff("x");
        assert_relative_eq!(d2.eval("x", 2.0).unwrap(), 12.0);
    }
}
