use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum ParseError {
    /// No valid floating-point literal could be read.
    InvalidConstant {
        /// The text that was rejected.
        text:     String,
        /// The column where the literal starts.
        position: usize,
    },
    /// The literal is larger than the largest finite `f64`.
    ConstantOverflow {
        /// The text of the literal.
        text:     String,
        /// The column where the literal starts.
        position: usize,
    },
    /// The identifier is neither a function nor a known symbol.
    UndefinedIdentifier {
        /// The identifier, folded to lower case.
        name:     String,
        /// The column where the identifier starts.
        position: usize,
    },
    /// The character does not belong to the expression grammar.
    InvalidToken {
        /// The offending character.
        character: char,
        /// The column of the character.
        position:  usize,
    },
}

impl ParseError {
    /// Returns the taxonomy entry of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConstant { .. } => ErrorKind::InvalidConstant,
            Self::ConstantOverflow { .. } => ErrorKind::ConstantOverflow,
            Self::UndefinedIdentifier { .. } => ErrorKind::UndefinedIdentifier,
            Self::InvalidToken { .. } => ErrorKind::InvalidToken,
        }
    }

    /// Returns the 1-based column the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidConstant { position, .. }
            | Self::ConstantOverflow { position, .. }
            | Self::UndefinedIdentifier { position, .. }
            | Self::InvalidToken { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConstant { text, position } => {
                write!(f, "Error at column {position}: Invalid constant '{text}'.")
            },
            Self::ConstantOverflow { text, position } => write!(f,
                                                                "Error at column {position}: Constant '{text}' is too large for a double."),
            Self::UndefinedIdentifier { name, position } => write!(f,
                                                                   "Error at column {position}: Undefined function/symbol \"{name}\"."),
            Self::InvalidToken { character, position } => {
                write!(f, "Error at column {position}: Invalid token '{character}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
