use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while reducing an expression.
pub enum RuntimeError {
    /// An opening parenthesis was still on the operator stack when the
    /// expression ended.
    MismatchedOpenParen {
        /// The column of the unclosed `(`.
        position: usize,
    },
    /// A closing parenthesis emptied the operator stack without finding its
    /// opening counterpart.
    MismatchedCloseParen {
        /// The column of the stray `)`.
        position: usize,
    },
    /// An operator found too few operands, or values were left over.
    MalformedExpression {
        /// The column of the operator, or of the end of the sub-expression.
        position: usize,
    },
    /// Factorial of a negative, fractional or non-finite value.
    FactorialDomain {
        /// The rejected operand.
        value:    f64,
        /// The column of the `!`.
        position: usize,
    },
    /// `$n` where `n` is not an integer in `1..=available`.
    InvalidResultIndex {
        /// The requested index.
        index:     f64,
        /// The number of results that can be referenced.
        available: usize,
        /// The column of the `$`.
        position:  usize,
    },
}

impl RuntimeError {
    /// Returns the taxonomy entry of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MismatchedOpenParen { .. } => ErrorKind::MismatchedOpenParen,
            Self::MismatchedCloseParen { .. } => ErrorKind::MismatchedCloseParen,
            Self::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            Self::FactorialDomain { .. } => ErrorKind::FactorialDomainError,
            Self::InvalidResultIndex { .. } => ErrorKind::InvalidResultIndex,
        }
    }

    /// Returns the 1-based column the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::MismatchedOpenParen { position }
            | Self::MismatchedCloseParen { position }
            | Self::MalformedExpression { position }
            | Self::FactorialDomain { position, .. }
            | Self::InvalidResultIndex { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedOpenParen { position } => {
                write!(f, "Error at column {position}: Mismatched '('.")
            },
            Self::MismatchedCloseParen { position } => {
                write!(f, "Error at column {position}: Mismatched ')'.")
            },
            Self::MalformedExpression { position } => {
                write!(f, "Error at column {position}: Malformed expression.")
            },
            Self::FactorialDomain { value, position } => write!(f,
                                                                "Error at column {position}: Factorial is only defined for natural numbers, but found {value}."),
            Self::InvalidResultIndex { index,
                                       available,
                                       position, } => write!(f,
                                                             "Error at column {position}: Invalid result index {index}. {available} result(s) available."),
        }
    }
}

impl std::error::Error for RuntimeError {}
