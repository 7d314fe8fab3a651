#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

//! Boolyard, a crate for converting infix boolean expressions to postfix
//! order.
//!
//! The easiest way to use this crate is with the
//! [`to_postfix`](fn.to_postfix.html) function:
//!
//! ```
//! assert_eq!(boolyard::to_postfix("T | F & T").unwrap(), ["T", "F", "T", "&", "|"]);
//! ```
//!
//! The [`Postfix`](struct.Postfix.html) type keeps the typed tokens around,
//! and displays them the way they would be written:
//!
//! ```
//! use boolyard::{Postfix, Op, Token};
//!
//! let postfix = Postfix::parse("!(T & F)").unwrap();
//! assert_eq!(postfix.to_string(), "T F & !");
//! assert_eq!(postfix.tokens()[2], Token::Op(Op::And));
//! ```
//!
//! The two steps are also available separately, with
//! [`tokenize`](fn.tokenize.html) and [`convert`](fn.convert.html).
//!
//! ```
//! use boolyard::{convert, tokenize};
//!
//! let tokens = tokenize("( T | F ) & T");
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(convert(tokens).unwrap().len(), 5);
//! ```
//!
//! # Language definition
//!
//! An expression can contain the following elements:
//!
//! - operands: any run of characters that is not whitespace, an operator or a
//!   parenthesis. `T` and `F` are the boolean literals, but operands are not
//!   validated, so `true`, `x1` or `42` are accepted as well;
//! - left and right parenthesis;
//! - operators, from the tightest to the loosest binding: `!` for not,
//!   `+` for greater than and `-` for less than, `=` for equality, `&` for
//!   and, `|` for or.
//!
//! All the binary operators are left associative, and `!` is a right
//! associative prefix operator, so `! ! T` gives `T ! !`.
//!
//! # Technical details
//!
//! The conversion uses the Shunting-Yard algorithm. Expressions are not
//! evaluated, the only error is mismatched parentheses.

#[macro_use]
extern crate lazy_static;

mod error;
mod expr;
mod lexer;
mod shunting;
mod token;
mod util;

pub use error::{Error, Mismatch};
pub use expr::{to_postfix, Postfix};
pub use lexer::{is_boolean, is_reserved, tokenize, Lexer, BOOLEAN_FALSE, BOOLEAN_TRUE};
pub use shunting::convert;
pub use token::{Associativity, Op, Token};
pub use util::OPERATORS;
