use crate::interpreter::evaluator::function::Function;

/// Precedence of every builtin function.
///
/// Functions bind tighter than any operator, so an operator arriving after a
/// function's argument always reduces the function first.
pub const FUNCTION_PRECEDENCE: u8 = 5;

/// Number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand.
    Unary,
    /// Two operands.
    Binary,
}

/// An arithmetic operator, already disambiguated between its unary and binary
/// readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
    /// `a % b`, floating-point remainder.
    Remainder,
    /// `a ^ b`
    Power,
    /// Prefix `+`, written `_` internally.
    Identity,
    /// Prefix `-` or `~`.
    Negate,
    /// Postfix `!`.
    Factorial,
    /// Prefix `$`, the result back-reference.
    ResultRef,
}

impl Operator {
    /// Resolves an operator character.
    ///
    /// `unary` reports whether the character appears where an operand is
    /// expected; in that position `+` and `-` become [`Operator::Identity`] and
    /// [`Operator::Negate`].
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('-', false), Some(Operator::Subtract));
    /// assert_eq!(Operator::from_symbol('-', true), Some(Operator::Negate));
    /// assert_eq!(Operator::from_symbol('+', true), Some(Operator::Identity));
    /// assert_eq!(Operator::from_symbol('*', true), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_symbol('#', false), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char, unary: bool) -> Option<Self> {
        Some(match symbol {
            '+' if unary => Self::Identity,
            '-' if unary => Self::Negate,
            '+' => Self::Add,
            '-' => Self::Subtract,
            '*' => Self::Multiply,
            '/' => Self::Divide,
            '%' => Self::Remainder,
            '^' => Self::Power,
            '~' => Self::Negate,
            '!' => Self::Factorial,
            '$' => Self::ResultRef,
            _ => return None,
        })
    }

    /// Returns the internal symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Remainder => '%',
            Self::Power => '^',
            Self::Identity => '_',
            Self::Negate => '~',
            Self::Factorial => '!',
            Self::ResultRef => '$',
        }
    }

    /// Returns the binding strength of the operator. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::Remainder => 2,
            Self::Power => 3,
            Self::Identity | Self::Negate | Self::Factorial | Self::ResultRef => 4,
        }
    }

    /// Returns `true` if equal-precedence chains group from the left.
    ///
    /// `^` and all unary operators group from the right, which lets `--3` and
    /// `-3!` nest the way they read.
    #[must_use]
    pub const fn is_left_associative(self) -> bool {
        matches!(self,
                 Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Remainder)
    }

    /// Returns the number of operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Identity | Self::Negate | Self::Factorial | Self::ResultRef => Arity::Unary,
            _ => Arity::Binary,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified lexical unit of an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal or a resolved symbol such as `pi`.
    Number(f64),
    /// An arithmetic operator.
    Operator(Operator),
    /// A builtin function name.
    Function(Function),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`, the boundary between two sub-expressions.
    Separator,
}

/// A token together with the 1-based column it starts at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    /// The token.
    pub token:    Token,
    /// Column of the first character of the token.
    pub position: usize,
}
