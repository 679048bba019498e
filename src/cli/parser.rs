use std::str::FromStr;

use rust_decimal::Decimal;

use super::lexer::{CallLexer, Token};
use crate::context::EvalContext;
use crate::datum::Datum;
use crate::error::{MathError, MathResult};
use crate::expression::Expression;
use crate::registry;

static EOF: Token = Token::Eof;

/// Parses `NAME(arg, ...)` input and binds every call through the registry.
pub struct CallParser<'a> {
    tokens: Vec<Token>,
    position: usize,
    ctx: &'a EvalContext,
}

impl<'a> CallParser<'a> {
    pub fn new(input: &str, ctx: &'a EvalContext) -> MathResult<Self> {
        let mut lexer = CallLexer::new(input);
        let tokens = lexer.tokenize()?;

        Ok(Self {
            tokens,
            position: 0,
            ctx,
        })
    }

    fn current_token(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&EOF)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn expect(&mut self, expected: Token) -> MathResult<()> {
        if *self.current_token() == expected {
            self.advance();
            Ok(())
        } else {
            Err(MathError::ParseError(format!(
                "Expected {:?}, found {:?}",
                expected,
                self.current_token()
            )))
        }
    }

    /// Parse the whole input as one expression.
    pub fn parse(&mut self) -> MathResult<Expression> {
        let expr = self.parse_expression()?;
        self.expect(Token::Eof)?;
        Ok(expr)
    }

    fn parse_expression(&mut self) -> MathResult<Expression> {
        match self.current_token().clone() {
            Token::Null => {
                self.advance();
                Ok(Expression::constant(Datum::Null))
            }
            Token::String(s) => {
                self.advance();
                Ok(Expression::constant(s))
            }
            Token::Minus => {
                self.advance();
                self.parse_number(true)
            }
            Token::Integer(_) | Token::Decimal(_) | Token::Float(_) => self.parse_number(false),
            Token::Identifier(name) => {
                self.advance();
                self.parse_call(&name)
            }
            other => Err(MathError::ParseError(format!(
                "Unexpected token {:?}",
                other
            ))),
        }
    }

    fn parse_number(&mut self, negative: bool) -> MathResult<Expression> {
        let token = self.current_token().clone();
        self.advance();
        let sign = if negative { "-" } else { "" };
        let datum = match token {
            Token::Integer(digits) => integer_literal(&format!("{}{}", sign, digits))?,
            Token::Decimal(text) => {
                let text = format!("{}{}", sign, text);
                Decimal::from_str(&text).map(Datum::Decimal).map_err(|_| {
                    MathError::ParseError(format!("Invalid decimal number: {}", text))
                })?
            }
            Token::Float(text) => {
                let text = format!("{}{}", sign, text);
                text.parse::<f64>().map(Datum::Float64).map_err(|_| {
                    MathError::ParseError(format!("Invalid float number: {}", text))
                })?
            }
            other => {
                return Err(MathError::ParseError(format!(
                    "Expected number after '-', found {:?}",
                    other
                )))
            }
        };
        Ok(Expression::constant(datum))
    }

    fn parse_call(&mut self, name: &str) -> MathResult<Expression> {
        let class = registry::lookup(name)
            .ok_or_else(|| MathError::BindError(format!("FUNCTION {} does not exist", name)))?;

        self.expect(Token::LeftParen)?;
        let mut args = Vec::new();
        if *self.current_token() != Token::RightParen {
            loop {
                args.push(self.parse_expression()?);
                if *self.current_token() == Token::Comma {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(Token::RightParen)?;

        let bound = class.get_function(args, self.ctx)?;
        Ok(Expression::function(bound))
    }
}

/// Integers that overflow `i64` become unsigned, then decimal.
fn integer_literal(text: &str) -> MathResult<Datum> {
    if let Ok(v) = text.parse::<i64>() {
        return Ok(Datum::Int64(v));
    }
    if let Ok(v) = text.parse::<u64>() {
        return Ok(Datum::Uint64(v));
    }
    Decimal::from_str(text)
        .map(Datum::Decimal)
        .map_err(|_| MathError::ParseError(format!("Integer literal out of range: {}", text)))
}
