use crate::token::{Op, Token};
use std::iter::Peekable;
use std::str::Chars;

/// Literal used for the `true` value
pub const BOOLEAN_TRUE: &str = "T";
/// Literal used for the `false` value
pub const BOOLEAN_FALSE: &str = "F";

/// Split `expression` into tokens.
///
/// Whitespace separates operands, and every operator or parenthesis is a
/// token on its own, so `"T&F"` and `"T & F"` give the same tokens. Any other
/// run of characters is kept as an operand, valid boolean or not.
///
/// # Examples
///
/// ```
/// # use boolyard::{tokenize, Op, Token};
///
/// assert_eq!(
///     tokenize("!(T&F)"),
///     vec![
///         Token::Op(Op::Not),
///         Token::LParen,
///         Token::operand("T"),
///         Token::Op(Op::And),
///         Token::operand("F"),
///         Token::RParen,
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    Lexer::new(expression).collect()
}

#[must_use]
/// Check if `operand` is one of the boolean literals, `T` or `F`
///
/// # Examples
///
/// ```
/// # use boolyard::is_boolean;
///
/// assert_eq!(is_boolean("T"), true);
/// assert_eq!(is_boolean("true"), false);
/// ```
pub fn is_boolean(operand: &str) -> bool {
    operand == BOOLEAN_TRUE || operand == BOOLEAN_FALSE
}

#[must_use]
/// Check if `c` is an operator symbol or a parenthesis, and thus always a
/// token by itself
pub fn is_reserved(c: char) -> bool {
    reserved_token(c).is_some()
}

fn reserved_token(c: char) -> Option<Token> {
    match c {
        '(' => Some(Token::LParen),
        ')' => Some(Token::RParen),
        c => Op::from_symbol(c).map(Token::Op),
    }
}

/// An helper struct for lexing the input, yielding one token at a time
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &str) -> Lexer {
        Lexer {
            input: string.chars().peekable(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut operand = String::new();
        while let Some(&c) = self.input.peek() {
            if c.is_whitespace() {
                self.input.next();
                if !operand.is_empty() {
                    return Some(Token::Operand(operand));
                }
            } else if let Some(token) = reserved_token(c) {
                // Leave `c` in the input, it is the next token
                if !operand.is_empty() {
                    return Some(Token::Operand(operand));
                }
                self.input.next();
                return Some(token);
            } else {
                self.input.next();
                operand.push(c);
            }
        }

        if operand.is_empty() {
            None
        } else {
            Some(Token::Operand(operand))
        }
    }
}
