//! Tokenizer and parser for the expression syntax.
//!
//! Syntax: `+ - * / ^` with the usual precedence, `**` as a synonym for
//! `^`, parentheses, unary plus/minus, decimal and scientific number
//! literals, the built-in functions of [`Func`](crate::Func), and the
//! constants `pi` and `e`. There is no implicit multiplication: `2x` is
//! a parse error, write `2*x`.

mod pratt;

use crate::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LeftParen,
    RightParen,
    Comma,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Ident(name) => name.clone(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Caret => "^".to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
            Token::Comma => ",".to_string(),
        }
    }
}

/// Parses an expression string into an AST.
pub fn parse(input: &str) -> Result<crate::Expr, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    pratt::parse_tokens(&tokens)
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let ch = bytes[pos] as char;
        match ch {
            ' ' | '\t' | '\n' | '\r' => pos += 1,
            '+' => {
                tokens.push(Token::Plus);
                pos += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                pos += 1;
            }
            '*' => {
                // Python-style ** is accepted as a power spelling
                if bytes.get(pos + 1) == Some(&b'*') {
                    tokens.push(Token::Caret);
                    pos += 2;
                } else {
                    tokens.push(Token::Star);
                    pos += 1;
                }
            }
            '/' => {
                tokens.push(Token::Slash);
                pos += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                pos += 1;
            }
            '(' => {
                tokens.push(Token::LeftParen);
                pos += 1;
            }
            ')' => {
                tokens.push(Token::RightParen);
                pos += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                pos += 1;
            }
            '0'..='9' | '.' => {
                let start = pos;
                pos = scan_number(bytes, pos);
                // A trailing '.' after a complete literal (as in "1.2.3")
                // would otherwise start a fresh number token
                if bytes.get(pos) == Some(&b'.') {
                    return Err(ParseError::InvalidNumber {
                        text: input[start..=pos].to_string(),
                        pos: start,
                    });
                }
                let text = &input[start..pos];
                let value = text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    text: text.to_string(),
                    pos: start,
                })?;
                tokens.push(Token::Number(value));
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                let start = pos;
                while pos < bytes.len()
                    && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                tokens.push(Token::Ident(input[start..pos].to_string()));
            }
            _ => return Err(ParseError::InvalidCharacter { ch, pos }),
        }
    }

    Ok(tokens)
}

/// Scans one number literal starting at `pos`: digits, optional decimal
/// point, optional `e`/`E` exponent with sign.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
    }
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_end = pos + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        // Only consume the exponent marker when digits actually follow,
        // so "2e" tokenizes as the number 2 and the identifier e.
        if exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            pos = exp_end;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_operators_and_numbers() {
        let tokens = tokenize("1.5 + x*2 - 3/4 ^ 2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(1.5),
                Token::Plus,
                Token::Ident("x".to_string()),
                Token::Star,
                Token::Number(2.0),
                Token::Minus,
                Token::Number(3.0),
                Token::Slash,
                Token::Number(4.0),
                Token::Caret,
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn double_star_is_power() {
        let tokens = tokenize("x**3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("x".to_string()),
                Token::Caret,
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn scientific_notation() {
        let tokens = tokenize("1e-6 + 2.5E3").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Number(1e-6), Token::Plus, Token::Number(2.5e3)]
        );
    }

    #[test]
    fn bare_e_after_number_is_identifier() {
        let tokens = tokenize("2e").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Number(2.0), Token::Ident("e".to_string())]
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = tokenize("x # 2").unwrap_err();
        assert_eq!(err, ParseError::InvalidCharacter { ch: '#', pos: 2 });
    }

    #[test]
    fn rejects_bad_number() {
        let err = tokenize("1.2.3").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(parse("   "), Err(ParseError::EmptyExpression));
        assert_eq!(parse(""), Err(ParseError::EmptyExpression));
    }
}
