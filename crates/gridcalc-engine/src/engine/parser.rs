//! Formula tokenizer and recursive descent parser.
//!
//! Grammar of a formula body (the cell text after `=`):
//!
//! ```text
//! expression := argument | function
//! function   := NAME '(' argument (',' argument)* ')'
//! argument   := number | cellRef
//! number     := [+-]? [0-9]+ ('.' [0-9]+)?
//! cellRef    := [A-Z]+ [0-9]+
//! NAME       := [A-Za-z]+
//! ```
//!
//! Whitespace may only surround the commas between arguments. Function
//! calls do not nest. A `cellRef` is kept as written and resolved when the
//! formula is evaluated, so `A0` parses but fails to read.

use std::fmt;

use log::trace;

use crate::error::{EvalError, Result};

/// A function operand.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    Number(f64),
    /// Cell reference text such as `B12`.
    Cell(String),
}

/// A parsed formula body.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Argument(Argument),
    Call { name: String, args: Vec<Argument> },
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Number(f64),
    CellRef(String),
    Name(String),
    LeftParen,
    RightParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {n}"),
            Token::CellRef(cell) => write!(f, "cell reference {cell}"),
            Token::Name(name) => write!(f, "name '{name}'"),
            Token::LeftParen => f.write_str("'('"),
            Token::RightParen => f.write_str("')'"),
            Token::Comma => f.write_str("','"),
        }
    }
}

/// Parse a formula body into an [`Expr`].
///
/// # Example
/// ```
/// use gridcalc_engine::engine::{parse_expression, Argument, Expr};
///
/// let expr = parse_expression("ADD(A1, 5)").unwrap();
/// assert_eq!(
///     expr,
///     Expr::Call {
///         name: "ADD".to_string(),
///         args: vec![Argument::Cell("A1".to_string()), Argument::Number(5.0)],
///     }
/// );
/// ```
pub fn parse_expression(body: &str) -> Result<Expr> {
    let invalid = |reason: String| EvalError::InvalidExpression {
        expression: body.to_string(),
        reason,
    };

    let tokens = Lexer::new(body).tokenize().map_err(invalid)?;
    trace!("tokens for '{}': {:?}", body, tokens);

    let mut parser = Parser {
        tokens,
        pos: 0,
        end: body.len(),
    };
    parser.parse_expression().map_err(invalid)
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &self.input[start..self.pos]
    }

    fn tokenize(mut self) -> std::result::Result<Vec<Lexeme>, String> {
        let mut tokens = Vec::new();
        loop {
            let space_start = self.pos;
            let spaced = !self.eat_while(char::is_whitespace).is_empty();
            let start = self.pos;
            let Some(c) = self.peek() else {
                if spaced && !tokens.is_empty() {
                    return Err(format!("unexpected whitespace at offset {space_start}"));
                }
                return Ok(tokens);
            };
            let token = match c {
                '(' => {
                    self.bump();
                    Token::LeftParen
                }
                ')' => {
                    self.bump();
                    Token::RightParen
                }
                ',' => {
                    self.bump();
                    Token::Comma
                }
                '+' | '-' | '0'..='9' => self.number(start)?,
                c if c.is_ascii_alphabetic() => self.word(start)?,
                other => return Err(format!("unexpected character '{other}' at offset {start}")),
            };
            tokens.push(Lexeme {
                token,
                offset: start,
                space_before: spaced.then_some(space_start),
            });
        }
    }

    fn number(&mut self, start: usize) -> std::result::Result<Token, String> {
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        if self.eat_while(|c| c.is_ascii_digit()).is_empty() {
            return Err(format!("expected digit at offset {}", self.pos));
        }
        if self.peek() == Some('.') {
            self.bump();
            if self.eat_while(|c| c.is_ascii_digit()).is_empty() {
                return Err(format!("expected digit after '.' at offset {}", self.pos));
            }
        }
        let text = &self.input[start..self.pos];
        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|e| format!("invalid number '{text}' at offset {start}: {e}"))
    }

    fn word(&mut self, start: usize) -> std::result::Result<Token, String> {
        let letters = self.eat_while(|c| c.is_ascii_alphabetic());
        let digits = self.eat_while(|c| c.is_ascii_digit());
        if digits.is_empty() {
            return Ok(Token::Name(letters.to_string()));
        }
        let text = &self.input[start..self.pos];
        if !letters.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(format!("invalid cell reference '{text}' at offset {start}"));
        }
        Ok(Token::CellRef(text.to_string()))
    }
}

#[derive(Clone, Debug)]
struct Lexeme {
    token: Token,
    offset: usize,
    /// Offset of the whitespace run directly before the token, if any.
    space_before: Option<usize>,
}

struct Parser {
    tokens: Vec<Lexeme>,
    pos: usize,
    end: usize,
}

impl Parser {
    fn next(&mut self) -> Option<(Token, usize)> {
        let item = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some((item.token.clone(), item.offset))
    }

    /// Like [`Parser::next`], but the token must follow the previous one
    /// directly.
    fn next_adjacent(&mut self) -> std::result::Result<Option<(Token, usize)>, String> {
        if let Some(space) = self.tokens.get(self.pos).and_then(|l| l.space_before) {
            return Err(format!("unexpected whitespace at offset {space}"));
        }
        Ok(self.next())
    }

    fn unexpected(&self, found: Option<(Token, usize)>, expected: &str) -> String {
        match found {
            Some((token, offset)) => {
                format!("expected {expected}, found {token} at offset {offset}")
            }
            None => format!("expected {expected}, found end of input at offset {}", self.end),
        }
    }

    fn parse_expression(&mut self) -> std::result::Result<Expr, String> {
        let expr = match self.next() {
            Some((Token::Number(n), _)) => Expr::Argument(Argument::Number(n)),
            Some((Token::CellRef(cell), _)) => Expr::Argument(Argument::Cell(cell)),
            Some((Token::Name(name), _)) => self.parse_call(name)?,
            None => return Err("empty formula".to_string()),
            found => return Err(self.unexpected(found, "number, cell reference or function")),
        };
        match self.next() {
            None => Ok(expr),
            found => Err(self.unexpected(found, "end of input")),
        }
    }

    fn parse_call(&mut self, name: String) -> std::result::Result<Expr, String> {
        match self.next_adjacent()? {
            Some((Token::LeftParen, _)) => {}
            found => return Err(self.unexpected(found, &format!("'(' after '{name}'"))),
        }
        let first = self.next_adjacent()?;
        let mut args = vec![self.parse_argument(first)?];
        loop {
            let at_comma = matches!(self.tokens.get(self.pos), Some(l) if l.token == Token::Comma);
            let separator = if at_comma { self.next() } else { self.next_adjacent()? };
            match separator {
                Some((Token::Comma, _)) => {
                    let arg = self.next();
                    args.push(self.parse_argument(arg)?);
                }
                Some((Token::RightParen, _)) => return Ok(Expr::Call { name, args }),
                found => return Err(self.unexpected(found, "',' or ')'")),
            }
        }
    }

    fn parse_argument(&self, found: Option<(Token, usize)>) -> std::result::Result<Argument, String> {
        match found {
            Some((Token::Number(n), _)) => Ok(Argument::Number(n)),
            Some((Token::CellRef(cell), _)) => Ok(Argument::Cell(cell)),
            found => Err(self.unexpected(found, "number or cell reference")),
        }
    }
}
