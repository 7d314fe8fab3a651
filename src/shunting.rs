use crate::error::{Error, Mismatch};
use crate::token::Token;
use log::{debug, trace};

/// Reorder infix `tokens` into postfix order using the shunting-yard
/// algorithm.
///
/// Operands go straight to the output. Operators wait on a stack until an
/// operator that binds looser (or as loose, for left associative operators)
/// comes in. Parentheses are never part of the output.
///
/// # Errors
///
/// Returns [`Error::MismatchedParentheses`] if a `)` has no matching `(`, or
/// if a `(` is never closed.
///
/// # Examples
///
/// ```
/// # use boolyard::{convert, tokenize};
///
/// let postfix = convert(tokenize("T | F & T")).unwrap();
/// let postfix: Vec<_> = postfix.iter().map(|t| t.as_str()).collect();
/// assert_eq!(postfix, ["T", "F", "T", "&", "|"]);
/// ```
pub fn convert<I>(tokens: I) -> Result<Vec<Token>, Error>
where
    I: IntoIterator<Item = Token>,
{
    let mut output: Vec<Token> = Vec::new();
    let mut operators: Vec<Token> = Vec::new();
    let mut count = 0_usize;

    'tokens: for token in tokens {
        count += 1;
        match token {
            Token::Operand(_) => output.push(token),
            Token::Op(o1) => {
                'operators: while let Some(&Token::Op(o2)) = operators.last() {
                    let pop_me = o1.is_left_associative() && o1.precedence() <= o2.precedence();
                    let pop_me =
                        pop_me || o1.is_right_associative() && o1.precedence() < o2.precedence();
                    if pop_me {
                        trace!("`{}` yields to `{}`", o2, o1);
                        operators.pop();
                        output.push(Token::Op(o2));
                    } else {
                        break 'operators;
                    }
                }
                operators.push(token);
            }
            Token::LParen => operators.push(token),
            Token::RParen => {
                while let Some(token) = operators.pop() {
                    if token == Token::LParen {
                        continue 'tokens;
                    }
                    trace!("`{}` closed by `)`", token);
                    output.push(token);
                }
                debug!("`)` without a matching `(` at token {}", count);
                return Err(Error::MismatchedParentheses(Mismatch::MissingLeft));
            }
        }
    }

    while let Some(token) = operators.pop() {
        if token.is_paren() {
            debug!("unclosed `(` after {} tokens", count);
            return Err(Error::MismatchedParentheses(Mismatch::Unclosed));
        }
        output.push(token);
    }

    debug!("converted {} tokens into {} postfix tokens", count, output.len());
    Ok(output)
}
