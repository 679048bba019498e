use crate::error::{MathError, MathResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Null,

    // Literals and identifiers, numbers kept as source text
    Identifier(String),
    Integer(String),
    Decimal(String),
    Float(String),
    String(String),

    Minus,
    Comma,
    LeftParen,
    RightParen,

    Eof,
}

pub struct CallLexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl CallLexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            input: chars,
            position: 0,
            current_char,
        }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_digits(&mut self, out: &mut String) {
        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                out.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    /// `123` is an integer, `1.5` a decimal, anything with an exponent a float.
    fn read_number(&mut self) -> MathResult<Token> {
        let mut num_str = String::new();
        let mut has_dot = false;

        if self.current_char == Some('.') {
            num_str.push('0');
        }
        self.read_digits(&mut num_str);
        if self.current_char == Some('.') {
            has_dot = true;
            num_str.push('.');
            self.advance();
            self.read_digits(&mut num_str);
        }

        if matches!(self.current_char, Some('e') | Some('E')) {
            num_str.push('e');
            self.advance();
            if let Some(sign @ ('+' | '-')) = self.current_char {
                num_str.push(sign);
                self.advance();
            }
            let before = num_str.len();
            self.read_digits(&mut num_str);
            if num_str.len() == before {
                return Err(MathError::ParseError(format!(
                    "Invalid float number: {}",
                    num_str
                )));
            }
            return Ok(Token::Float(num_str));
        }

        if has_dot {
            Ok(Token::Decimal(num_str))
        } else {
            Ok(Token::Integer(num_str))
        }
    }

    fn read_string(&mut self) -> MathResult<Token> {
        let quote = self.current_char.unwrap_or('\'');
        self.advance(); // Skip opening quote

        let mut string = String::new();

        while let Some(ch) = self.current_char {
            if ch == quote {
                // Doubled quote is an escaped quote
                if self.peek() == Some(quote) {
                    string.push(quote);
                    self.advance();
                    self.advance();
                } else {
                    self.advance();
                    return Ok(Token::String(string));
                }
            } else if ch == '\\' {
                self.advance();
                if let Some(escaped) = self.current_char {
                    string.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        _ => escaped,
                    });
                    self.advance();
                }
            } else {
                string.push(ch);
                self.advance();
            }
        }

        Err(MathError::ParseError("Unterminated string".to_string()))
    }

    fn read_identifier(&mut self) -> Token {
        let mut ident = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if ident.eq_ignore_ascii_case("NULL") {
            Token::Null
        } else {
            Token::Identifier(ident)
        }
    }

    pub fn next_token(&mut self) -> MathResult<Token> {
        self.skip_whitespace();

        let token = match self.current_char {
            None => Token::Eof,
            Some(ch) if ch.is_ascii_digit() => return self.read_number(),
            Some('.') if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                return self.read_number()
            }
            Some('\'') | Some('"') => return self.read_string(),
            Some(ch) if ch.is_alphabetic() || ch == '_' => return Ok(self.read_identifier()),
            Some('-') => {
                self.advance();
                Token::Minus
            }
            Some(',') => {
                self.advance();
                Token::Comma
            }
            Some('(') => {
                self.advance();
                Token::LeftParen
            }
            Some(')') => {
                self.advance();
                Token::RightParen
            }
            Some(ch) => {
                return Err(MathError::ParseError(format!(
                    "Unexpected character '{}' at position {}",
                    ch, self.position
                )))
            }
        };

        Ok(token)
    }

    pub fn tokenize(&mut self) -> MathResult<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        Ok(tokens)
    }
}
