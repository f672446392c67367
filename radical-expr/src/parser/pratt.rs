//! Pratt parser over the token stream.

use crate::{Expr, Func, ParseError};

use super::Token;

// Binding powers. Unary minus sits between Mul and Pow so that -x^2
// parses as -(x^2) while -x*y parses as (-x)*y.
const PREC_ADD: u8 = 10;
const PREC_MUL: u8 = 20;
const PREC_UNARY: u8 = 25;
const PREC_POW: u8 = 30;

pub(crate) fn parse_tokens(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr(0)?;

    match parser.current() {
        None => Ok(expr),
        Some(token) => Err(ParseError::UnexpectedToken {
            expected: "end of expression",
            got: token.describe(),
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn expect_right_paren(&mut self) -> Result<(), ParseError> {
        match self.current() {
            Some(Token::RightParen) => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: "')'",
                got: token.describe(),
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn parse_expr(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;

        while let Some(token) = self.current() {
            let precedence = match token {
                Token::Plus | Token::Minus => PREC_ADD,
                Token::Star | Token::Slash => PREC_MUL,
                Token::Caret => PREC_POW,
                _ => break,
            };

            if precedence < min_precedence {
                break;
            }

            left = self.parse_infix(left, precedence)?;
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().ok_or(ParseError::UnexpectedEnd)?.clone();

        match token {
            Token::Number(n) => {
                self.advance();
                Ok(Expr::number(n))
            }

            Token::Ident(name) => {
                self.advance();

                if let Some(Token::LeftParen) = self.current() {
                    self.parse_call(&name)
                } else {
                    // Well-known constants resolve at parse time
                    match name.as_str() {
                        "pi" => Ok(Expr::number(std::f64::consts::PI)),
                        "e" => Ok(Expr::number(std::f64::consts::E)),
                        _ => Ok(Expr::var(name)),
                    }
                }
            }

            Token::Minus => {
                self.advance();
                let expr = self.parse_expr(PREC_UNARY)?;
                Ok(Expr::neg(expr))
            }

            Token::Plus => {
                self.advance();
                self.parse_expr(PREC_UNARY)
            }

            Token::LeftParen => {
                self.advance();
                let expr = self.parse_expr(0)?;
                self.expect_right_paren()?;
                Ok(expr)
            }

            other => Err(ParseError::UnexpectedToken {
                expected: "a value",
                got: other.describe(),
            }),
        }
    }

    fn parse_call(&mut self, name: &str) -> Result<Expr, ParseError> {
        let func = Func::from_name(name).ok_or_else(|| ParseError::UnknownFunction {
            name: name.to_string(),
        })?;

        self.advance(); // consume (

        let mut args = vec![self.parse_expr(0)?];
        while let Some(Token::Comma) = self.current() {
            self.advance();
            args.push(self.parse_expr(0)?);
        }
        self.expect_right_paren()?;

        if args.len() != 1 {
            return Err(ParseError::WrongArity {
                name: name.to_string(),
                got: args.len(),
            });
        }
        let arg = args.pop().expect("arity checked above");
        Ok(Expr::call(func, arg))
    }

    fn parse_infix(&mut self, left: Expr, precedence: u8) -> Result<Expr, ParseError> {
        let token = self.current().ok_or(ParseError::UnexpectedEnd)?.clone();
        self.advance();

        // Power is right-associative, everything else left
        let next_precedence = if token == Token::Caret {
            precedence
        } else {
            precedence + 1
        };

        let right = self.parse_expr(next_precedence)?;

        Ok(match token {
            Token::Plus => Expr::add(left, right),
            Token::Minus => Expr::sub(left, right),
            Token::Star => Expr::mul(left, right),
            Token::Slash => Expr::div(left, right),
            Token::Caret => Expr::pow(left, right),
            other => {
                return Err(ParseError::UnexpectedToken {
                    expected: "an operator",
                    got: other.describe(),
                });
            }
        })
    }
}
