//! Abstract syntax tree for parsed expressions.

use std::fmt;

/// A parsed mathematical expression in one or more symbols.
///
/// Unary minus has no dedicated node; the parser spells `-e` as
/// `Mul(Number(-1), e)`, which keeps the differentiation and evaluation
/// rules down to the binary operators plus function calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Constant number (e.g. `3.14`, `1e-6`).
    Number(f64),
    /// Named variable (e.g. `x`).
    Var(String),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    /// Exponentiation, right-associative in the source syntax.
    Pow(Box<Expr>, Box<Expr>),
    /// Built-in unary function call.
    Call(Func, Box<Expr>),
}

/// Built-in unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    Ln,
    Sqrt,
    Abs,
}

impl Func {
    /// Canonical source-syntax name.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }

    /// Looks up a function by source-syntax name. `log` is accepted as an
    /// alias for the natural logarithm.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Func::Sin),
            "cos" => Some(Func::Cos),
            "tan" => Some(Func::Tan),
            "exp" => Some(Func::Exp),
            "ln" | "log" => Some(Func::Ln),
            "sqrt" => Some(Func::Sqrt),
            "abs" => Some(Func::Abs),
            _ => None,
        }
    }
}

impl Expr {
    pub fn number(n: f64) -> Self {
        Expr::Number(n)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(Box::new(left), Box::new(right))
    }

    pub fn sub(left: Expr, right: Expr) -> Self {
        Expr::Sub(Box::new(left), Box::new(right))
    }

    pub fn mul(left: Expr, right: Expr) -> Self {
        Expr::Mul(Box::new(left), Box::new(right))
    }

    pub fn div(left: Expr, right: Expr) -> Self {
        Expr::Div(Box::new(left), Box::new(right))
    }

    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Expr::Pow(Box::new(base), Box::new(exponent))
    }

    pub fn call(func: Func, arg: Expr) -> Self {
        Expr::Call(func, Box::new(arg))
    }

    /// Negation, spelled as multiplication by -1.
    pub fn neg(expr: Expr) -> Self {
        Expr::mul(Expr::number(-1.0), expr)
    }

    /// Returns the constant value if this node is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 10,
            Expr::Mul(..) | Expr::Div(..) => 20,
            Expr::Pow(..) => 30,
            Expr::Number(n) if *n < 0.0 => 25,
            Expr::Number(_) | Expr::Var(_) | Expr::Call(..) => u8::MAX,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, parent_prec: u8) -> fmt::Result {
        if self.precedence() < parent_prec {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Var(name) => write!(f, "{name}"),
            Expr::Add(a, b) => {
                a.fmt_child(f, 10)?;
                write!(f, " + ")?;
                b.fmt_child(f, 10)
            }
            Expr::Sub(a, b) => {
                a.fmt_child(f, 10)?;
                write!(f, " - ")?;
                // 1 - (2 - 3) must keep its parentheses
                b.fmt_child(f, 11)
            }
            Expr::Mul(a, b) => {
                a.fmt_child(f, 20)?;
                write!(f, "*")?;
                b.fmt_child(f, 20)
            }
            Expr::Div(a, b) => {
                a.fmt_child(f, 20)?;
                write!(f, "/")?;
                b.fmt_child(f, 21)
            }
            Expr::Pow(a, b) => {
                // Base binds tighter than the power itself so x^2^3 re-parses
                // right-associatively.
                a.fmt_child(f, 31)?;
                write!(f, "^")?;
                b.fmt_child(f, 30)
            }
            Expr::Call(func, arg) => write!(f, "{}({arg})", func.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn func_names_round_trip() {
        for func in [
            Func::Sin,
            Func::Cos,
            Func::Tan,
            Func::Exp,
            Func::Ln,
            Func::Sqrt,
            Func::Abs,
        ] {
            assert_eq!(Func::from_name(func.name()), Some(func));
        }
        assert_eq!(Func::from_name("log"), Some(Func::Ln));
        assert_eq!(Func::from_name("sinh"), None);
    }

    #[test]
    fn display_respects_precedence() {
        // (x + 1) * 2
        let e = Expr::mul(
            Expr::add(Expr::var("x"), Expr::number(1.0)),
            Expr::number(2.0),
        );
        assert_eq!(e.to_string(), "(x + 1)*2");

        // x + 2 * 3 needs no parentheses
        let e = Expr::add(
            Expr::var("x"),
            Expr::mul(Expr::number(2.0), Expr::number(3.0)),
        );
        assert_eq!(e.to_string(), "x + 2*3");
    }

    #[test]
    fn display_power_associativity() {
        // x^(2^3): right child of pow prints bare
        let e = Expr::pow(
            Expr::var("x"),
            Expr::pow(Expr::number(2.0), Expr::number(3.0)),
        );
        assert_eq!(e.to_string(), "x^2^3");

        // (x^2)^3: left child needs parentheses
        let e = Expr::pow(
            Expr::pow(Expr::var("x"), Expr::number(2.0)),
            Expr::number(3.0),
        );
        assert_eq!(e.to_string(), "(x^2)^3");
    }

    #[test]
    fn display_nested_subtraction() {
        let e = Expr::sub(
            Expr::number(1.0),
            Expr::sub(Expr::number(2.0), Expr::number(3.0)),
        );
        assert_eq!(e.to_string(), "1 - (2 - 3)");
    }
}
