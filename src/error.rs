/// Lexical errors.
///
/// Defines all error types that can occur while scanning and classifying the
/// characters of an expression: malformed or oversized numeric literals,
/// unknown identifiers and characters that are not part of the grammar.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while the shunting-yard engine
/// reduces an expression: unbalanced parentheses, operand count mismatches
/// and domain violations of individual operators.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Flat classification of every failure an expression can produce.
///
/// Useful when the caller only cares about *what* went wrong and not about
/// where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric literal could not be parsed.
    InvalidConstant,
    /// A numeric literal does not fit in an `f64`.
    ConstantOverflow,
    /// An identifier names neither a function nor a symbol.
    UndefinedIdentifier,
    /// A character is not part of the expression grammar.
    InvalidToken,
    /// An opening parenthesis was never closed.
    MismatchedOpenParen,
    /// A closing parenthesis has no matching opening one.
    MismatchedCloseParen,
    /// Operators and operands do not line up.
    MalformedExpression,
    /// Factorial applied to something other than a natural number.
    FactorialDomainError,
    /// Back-reference to a result that does not exist.
    InvalidResultIndex,
}

/// Any error produced while evaluating a single expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Raised by the tokenizer.
    Parse(ParseError),
    /// Raised by the shunting-yard engine or the evaluator.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the taxonomy entry of this error.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     Config,
    ///     error::ErrorKind,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new(Config::default());
    /// let err = context.eval_expression("(2+3").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::MismatchedOpenParen);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Returns the 1-based column the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
