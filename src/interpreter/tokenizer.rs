use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::function::{Function, lookup_symbol},
        lexer::{LexError, Lexeme},
        token::{Operator, Spanned, Token},
    },
};

/// A specialized `Result` type for tokenizing.
///
/// Every failure is a [`ParseError`] carrying the offending column.
pub type ParseResult<T> = Result<T, ParseError>;

/// Lazily turns the characters of an expression into classified tokens.
///
/// On top of the raw [`Lexeme`] stream the tokenizer
/// - resolves words into builtin functions or into the value of a symbol,
/// - decides whether `+` and `-` are prefix or infix operators,
/// - attaches a 1-based column to every token and error.
///
/// The unary flag starts out set; it is set again after `(`, `,`, a function
/// or any operator, and cleared after a number, a symbol or `)`.
///
/// # Example
/// ```
/// use calc::interpreter::{
///     token::{Operator, Token},
///     tokenizer::Tokenizer,
/// };
///
/// let tokens = Tokenizer::new("-3 - 4").map(|t| t.unwrap().token).collect::<Vec<_>>();
/// assert_eq!(tokens,
///            vec![Token::Operator(Operator::Negate),
///                 Token::Number(3.0),
///                 Token::Operator(Operator::Subtract),
///                 Token::Number(4.0)]);
/// ```
pub struct Tokenizer<'src> {
    source: &'src str,
    lexer:  logos::Lexer<'src, Lexeme>,
    unary:  bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               lexer: Lexeme::lexer(source),
               unary: true }
    }

    /// Converts a byte offset of the source into a 1-based column.
    fn column(&self, offset: usize) -> usize {
        self.source
            .get(..offset)
            .map_or(offset, |prefix| prefix.chars().count())
        + 1
    }

    fn classify(&mut self, lexeme: Lexeme, position: usize) -> ParseResult<Token> {
        let token = match lexeme {
            Lexeme::Number(value) => Token::Number(value),
            Lexeme::Dot => {
                return Err(ParseError::InvalidConstant { text: ".".to_string(),
                                                         position });
            },
            Lexeme::Word(name) => {
                if let Some(function) = Function::from_name(&name) {
                    Token::Function(function)
                } else if let Some(value) = lookup_symbol(&name) {
                    Token::Number(value)
                } else {
                    return Err(ParseError::UndefinedIdentifier { name, position });
                }
            },
            Lexeme::Operator(symbol) => match Operator::from_symbol(symbol, self.unary) {
                Some(op) => Token::Operator(op),
                None => {
                    return Err(ParseError::InvalidToken { character: symbol,
                                                          position });
                },
            },
            Lexeme::LParen => Token::LParen,
            Lexeme::RParen => Token::RParen,
            Lexeme::Comma => Token::Separator,
        };

        self.unary = match token {
            Token::Number(_) | Token::RParen => false,
            Token::Operator(_) | Token::Function(_) | Token::LParen | Token::Separator => true,
        };

        Ok(token)
    }

    fn lex_error(&self, error: LexError, position: usize) -> ParseError {
        match error {
            LexError::InvalidConstant => {
                ParseError::InvalidConstant { text: self.lexer.slice().to_string(),
                                              position }
            },
            LexError::ConstantOverflow => {
                ParseError::ConstantOverflow { text: self.lexer.slice().to_string(),
                                               position }
            },
            LexError::UnknownCharacter => {
                let character = self.source
                                    .get(self.lexer.span().start..)
                                    .and_then(|rest| rest.chars().next())
                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                ParseError::InvalidToken { character, position }
            },
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = ParseResult<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        let lexeme = self.lexer.next()?;
        let position = self.column(self.lexer.span().start);

        Some(match lexeme {
                 Ok(lexeme) => self.classify(lexeme, position)
                                   .map(|token| Spanned { token, position }),
                 Err(error) => Err(self.lex_error(error, position)),
             })
    }
}
