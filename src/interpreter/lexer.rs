use logos::Logos;

/// Represents a raw lexeme of an expression.
///
/// This is the first, context-free pass over the input. Words are not yet
/// resolved into functions or symbols and operator characters are not yet
/// split into unary and binary readings; the
/// [`Tokenizer`](crate::interpreter::tokenizer::Tokenizer) does that.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum Lexeme {
    /// Numeric literal lexemes, such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// A `.` that does not start a literal.
    #[token(".")]
    Dot,
    /// A run of letters, folded to lower case.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_ascii_lowercase())]
    Word(String),
    /// One of `+ - * / % ^ ! ~ $`.
    #[regex(r"[-+*/%^!~$]", |lex| lex.slice().chars().next())]
    Operator(char),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// Failure reported by the lexer for a single lexeme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexError {
    /// The character does not start any lexeme.
    #[default]
    UnknownCharacter,
    /// The literal text is not a valid floating-point number.
    InvalidConstant,
    /// The literal is larger than the largest finite `f64`.
    ConstantOverflow,
}

/// Parses a floating-point literal from the current lexeme slice.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexError::InvalidConstant)`: If the slice is not a valid float.
/// - `Err(LexError::ConstantOverflow)`: If the value rounds to infinity.
fn parse_number(lex: &mut logos::Lexer<Lexeme>) -> Result<f64, LexError> {
    let value: f64 = lex.slice().parse().map_err(|_| LexError::InvalidConstant)?;
    if value.is_infinite() {
        return Err(LexError::ConstantOverflow);
    }
    Ok(value)
}
