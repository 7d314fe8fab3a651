use crate::lexer::tokenize;
use crate::shunting::convert;
use crate::token::Token;
use crate::Error;
use std::fmt::{self, Display, Formatter};

/// Convert a single infix boolean expression from `input` into postfix order.
///
/// Returns `Ok(tokens)` with every token rendered as it appears in the input,
/// or `Err(cause)` if the parentheses do not match.
///
/// # Example
///
/// ```
/// # use boolyard::{to_postfix};
///
/// assert_eq!(to_postfix("( T | F ) & T").unwrap(), ["T", "F", "|", "T", "&"]);
/// assert!(to_postfix("( T").is_err());
/// ```
pub fn to_postfix(input: &str) -> Result<Vec<String>, Error> {
    Postfix::parse(input).map(|postfix| {
        postfix
            .into_tokens()
            .into_iter()
            .map(|token| match token {
                Token::Operand(value) => value,
                other => other.to_string(),
            })
            .collect()
    })
}

/// A boolean expression, converted to postfix order.
///
/// # Examples
/// ```
/// # use boolyard::{Postfix};
/// let postfix = Postfix::parse("T | F & T").unwrap();
/// assert_eq!(postfix.to_string(), "T F T & |");
/// assert_eq!(postfix.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// Parse the given infix `expression` into a `Postfix`.
    ///
    /// # Examples
    /// ```
    /// # use boolyard::Postfix;
    /// // balanced parentheses
    /// assert!(Postfix::parse("!(T & F)").is_ok());
    /// // an unclosed parenthesis
    /// assert!(Postfix::parse("!(T & F").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let tokens = convert(tokenize(expression))?;
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Display for Postfix {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let mut tokens = self.tokens.iter();
        if let Some(first) = tokens.next() {
            write!(fmt, "{}", first)?;
            for token in tokens {
                write!(fmt, " {}", token)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{to_postfix, Postfix};
    use crate::error::{Error, Mismatch};
    use crate::token::{Op, Token};

    #[test]
    fn parse() {
        let valid_expressions = [
            "T",
            "T&F",
            "( true & false | ( true & ! true ) )",
            "!!!T",
            "x1 = y2",
            "",
        ];
        for expr in &valid_expressions {
            assert!(Postfix::parse(expr).is_ok(), "{}", expr);
        }

        let invalid_expressions = ["(", ")", "T)", "(T", "((T)", "(T))"];
        for expr in &invalid_expressions {
            assert!(Postfix::parse(expr).is_err(), "{}", expr);
        }
    }

    #[test]
    fn postfix() {
        let pairs = [
            ("T & F", "T F &"),
            ("T|F&T", "T F T & |"),
            ("T + F + T", "T F + T +"),
            ("! ! T", "T ! !"),
            ("( T | F ) & T", "T F | T &"),
            ("( true & false | ( true & ! true ) )", "true false & true true ! & |"),
            ("", ""),
        ];
        for pair in &pairs {
            assert_eq!(Postfix::parse(pair.0).unwrap().to_string(), pair.1);
        }
    }

    #[test]
    fn tokens() {
        let postfix = Postfix::parse("!T").unwrap();
        assert_eq!(postfix.tokens(), &[Token::operand("T"), Token::Op(Op::Not)]);
        assert!(!postfix.is_empty());
        assert!(Postfix::parse("  ").unwrap().is_empty());
        assert_eq!(Postfix::default(), Postfix::parse("").unwrap());
    }

    #[test]
    fn strings() {
        assert_eq!(to_postfix("T | F & T").unwrap(), ["T", "F", "T", "&", "|"]);
        assert_eq!(
            to_postfix("T )"),
            Err(Error::MismatchedParentheses(Mismatch::MissingLeft))
        );
        assert_eq!(
            to_postfix("( T").err().unwrap().to_string(),
            "mismatched parentheses: leftover parenthesis in operator stack"
        );
    }
}
