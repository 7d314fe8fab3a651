use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Any run of characters that is not whitespace, an operator or a
    /// parenthesis. Operands are not validated.
    Operand(String),
    /// A boolean operator
    Op(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl Token {
    /// Build an operand token
    pub fn operand<S: Into<String>>(value: S) -> Self {
        Self::Operand(value.into())
    }

    /// Check if the token is a left or right parenthesis
    pub fn is_paren(&self) -> bool {
        matches!(self, Self::LParen | Self::RParen)
    }

    /// The token as it appears in the input
    pub fn as_str(&self) -> &str {
        match self {
            Self::Operand(value) => value,
            Self::Op(op) => op.as_str(),
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

impl From<Op> for Token {
    fn from(op: Op) -> Self {
        Self::Op(op)
    }
}

/// Direction in which operators of equal precedence group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`, greater than
    Gt,
    /// `-`, less than
    Lt,
    /// `=`, equality
    Eq,
    /// `&`, logical and
    And,
    /// `|`, logical or
    Or,
    /// `!`, logical not (unary, prefix)
    Not,
}

impl Op {
    /// All the operators, from the loosest to the tightest binding
    pub const ALL: [Op; 6] = [Op::Or, Op::And, Op::Eq, Op::Gt, Op::Lt, Op::Not];

    /// Get the operator written with `symbol`, if any
    pub fn from_symbol(symbol: char) -> Option<Self> {
        crate::util::OPERATORS.get(&symbol).copied()
    }

    /// The single character used for this operator in expressions
    pub fn symbol(self) -> char {
        match self {
            Self::Gt => '+',
            Self::Lt => '-',
            Self::Eq => '=',
            Self::And => '&',
            Self::Or => '|',
            Self::Not => '!',
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Gt => "+",
            Self::Lt => "-",
            Self::Eq => "=",
            Self::And => "&",
            Self::Or => "|",
            Self::Not => "!",
        }
    }

    /// Get the operator precedence. Operators with higher precedence bind
    /// tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Or => 0,
            Self::And => 1,
            Self::Eq => 2,
            Self::Gt | Self::Lt => 3,
            Self::Not => 4,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Self::Gt | Self::Lt | Self::Eq | Self::And | Self::Or => Associativity::Left,
            Self::Not => Associativity::Right,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        self.associativity() == Associativity::Left
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// Check if the operator takes a single operand
    pub fn is_unary(self) -> bool {
        self == Self::Not
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Op::Or => 0)]
    #[test_case(Op::And => 1)]
    #[test_case(Op::Eq => 2)]
    #[test_case(Op::Gt => 3)]
    #[test_case(Op::Lt => 3)]
    #[test_case(Op::Not => 4)]
    fn precedence(op: Op) -> u8 {
        op.precedence()
    }

    #[test]
    fn only_not_is_right_associative() {
        for op in &Op::ALL {
            assert_eq!(op.is_right_associative(), *op == Op::Not);
            assert_eq!(op.is_unary(), op.is_right_associative());
        }
    }

    #[test]
    fn symbols() {
        for op in &Op::ALL {
            assert_eq!(Op::from_symbol(op.symbol()), Some(*op));
            assert_eq!(op.to_string(), op.symbol().to_string());
        }
        assert_eq!(Op::from_symbol('('), None);
        assert_eq!(Op::from_symbol('T'), None);
    }

    #[test]
    fn display() {
        assert_eq!(Token::operand("true").to_string(), "true");
        assert_eq!(Token::from(Op::And).to_string(), "&");
        assert_eq!(Token::LParen.to_string(), "(");
        assert_eq!(Token::RParen.to_string(), ")");
        assert!(Token::LParen.is_paren());
        assert!(!Token::operand("T").is_paren());
    }
}
