use thiserror::Error;

/// Error type for the boolyard crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Parentheses in the expression do not pair up
    #[error("mismatched parentheses: {0}")]
    MismatchedParentheses(Mismatch),
}

/// Which side of a parenthesis pair is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Mismatch {
    /// A `)` was found with no `(` left on the operator stack
    #[error("missing matching left parenthesis")]
    MissingLeft,
    /// A `(` was still on the operator stack at the end of the input
    #[error("leftover parenthesis in operator stack")]
    Unclosed,
}

#[cfg(test)]
mod tests {
    use super::{Error, Mismatch};

    #[test]
    fn display() {
        assert_eq!(
            Error::MismatchedParentheses(Mismatch::MissingLeft).to_string(),
            "mismatched parentheses: missing matching left parenthesis"
        );
        assert_eq!(
            Error::MismatchedParentheses(Mismatch::Unclosed).to_string(),
            "mismatched parentheses: leftover parenthesis in operator stack"
        );
    }
}
