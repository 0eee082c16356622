//! Arithmetic expression evaluation for the `=` key.
//!
//! A small tokenizer plus recursive-descent evaluator over digits, `.`,
//! and the four binary operators. Standard precedence: `*` and `/` bind
//! tighter than `+` and `-`, both levels left-associative, with unary
//! `+`/`-` allowed before a factor. Malformed input fails closed with a
//! typed error; the caller maps any failure to the `"Error"` display.

use thiserror::Error;

// ── Errors ─────────────────────────────────────────────────

/// Evaluation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("unexpected token: {0}")]
    UnexpectedToken(char),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("division by zero")]
    DivisionByZero,
}

// ── Tokenizer ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
}

fn tokenize(expr: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '+' => {
                tokens.push(Token::Plus);
                chars.next();
            }
            '-' => {
                tokens.push(Token::Minus);
                chars.next();
            }
            '*' => {
                tokens.push(Token::Star);
                chars.next();
            }
            '/' => {
                tokens.push(Token::Slash);
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value: f64 = literal
                    .parse()
                    .map_err(|_| EvalError::InvalidNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
            }
            other => return Err(EvalError::UnexpectedToken(other)),
        }
    }

    Ok(tokens)
}

// ── Parser ─────────────────────────────────────────────────

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.next();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.next();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.next();
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.next();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// factor := ('+' | '-') factor | number
    fn factor(&mut self) -> Result<f64, EvalError> {
        match self.next() {
            Some(Token::Plus) => self.factor(),
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::Number(n)) => Ok(*n),
            Some(Token::Star) => Err(EvalError::UnexpectedToken('*')),
            Some(Token::Slash) => Err(EvalError::UnexpectedToken('/')),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

// ── Public API ─────────────────────────────────────────────

/// Evaluate an infix arithmetic expression.
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }
    let mut parser = Parser::new(&tokens);
    let value = parser.expr()?;
    if parser.peek().is_some() {
        // Leftover tokens after a complete expression cannot occur with
        // this grammar, but fail closed rather than silently ignore.
        return Err(EvalError::UnexpectedEnd);
    }
    Ok(value)
}

/// Format an evaluation result for display.
///
/// Integral results render without a decimal point (`"2"`, not `"2.0"`);
/// everything else uses the standard shortest float form.
pub fn format_result(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate("42"), Ok(42.0));
        assert_eq!(evaluate("3.5"), Ok(3.5));
    }

    #[test]
    fn test_addition_and_subtraction() {
        assert_eq!(evaluate("1+1"), Ok(2.0));
        assert_eq!(evaluate("10-4-3"), Ok(3.0));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("1+2*3"), Ok(7.0));
        assert_eq!(evaluate("2*3+1"), Ok(7.0));
        assert_eq!(evaluate("10-6/2"), Ok(7.0));
    }

    #[test]
    fn test_left_associative_division() {
        assert_eq!(evaluate("8/2/2"), Ok(2.0));
    }

    #[test]
    fn test_fractional_result() {
        assert_eq!(evaluate("5/2"), Ok(2.5));
    }

    #[test]
    fn test_unary_signs() {
        assert_eq!(evaluate("-5"), Ok(-5.0));
        assert_eq!(evaluate("--5"), Ok(5.0));
        assert_eq!(evaluate("5*-2"), Ok(-10.0));
        assert_eq!(evaluate("+3"), Ok(3.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(evaluate(""), Err(EvalError::Empty));
    }

    #[test]
    fn test_trailing_operator() {
        assert_eq!(evaluate("5+"), Err(EvalError::UnexpectedEnd));
    }

    #[test]
    fn test_doubled_operator_as_sign() {
        // "5++3" reads as 5 + (+3); the keypad appends without grammar
        // checks, so doubled signs must stay evaluable.
        assert_eq!(evaluate("5++3"), Ok(8.0));
        assert_eq!(evaluate("5+*3"), Err(EvalError::UnexpectedToken('*')));
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(
            evaluate("1.2.3"),
            Err(EvalError::InvalidNumber("1.2.3".to_string())),
        );
        assert_eq!(evaluate("."), Err(EvalError::InvalidNumber(".".to_string())));
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(evaluate("1+a"), Err(EvalError::UnexpectedToken('a')));
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(2.0), "2");
        assert_eq!(format_result(-7.0), "-7");
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(0.1 + 0.2), format!("{}", 0.1 + 0.2));
    }
}
