use tracing::debug;

use crate::{
    config::AngleMode,
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::core::{Callable, Context},
        registry::Transaction,
        token::{Operator, Spanned, Token},
        tokenizer::ParseResult,
    },
};

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy)]
enum Entry {
    /// An operator or function waiting for its operands.
    Call(Callable),
    /// An opening parenthesis. Reductions never cross it.
    Barrier,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    entry:    Entry,
    position: usize,
}

/// Evaluates a token stream with Dijkstra's shunting-yard algorithm.
///
/// Instead of emitting postfix notation, the engine reduces operators as soon
/// as precedence forces them off the operator stack, so the value stack only
/// ever holds finished numbers. Each completed sub-expression (ended by `,` or
/// by the end of input) is staged in the result transaction.
///
/// An incoming operator `op` reduces the top of the stack while the top is not
/// a barrier and `op.precedence < top.precedence + (op is left-associative)`.
/// This holds for prefix operators too, so `sin -1` reduces `sin` before its
/// argument exists.
pub struct ShuntingYard<'a, 'reg> {
    mode:      AngleMode,
    results:   &'a mut Transaction<'reg>,
    operators: Vec<Pending>,
    values:    Vec<f64>,
}

impl<'a, 'reg> ShuntingYard<'a, 'reg> {
    /// Creates an engine with empty stacks that stages its results in
    /// `results`.
    pub const fn new(mode: AngleMode, results: &'a mut Transaction<'reg>) -> Self {
        Self { mode,
               results,
               operators: Vec::new(),
               values: Vec::new() }
    }

    /// Consumes `tokens` to completion.
    ///
    /// `end` is the column just past the input, reported when the final
    /// sub-expression has the wrong number of operands.
    ///
    /// # Errors
    /// Returns the first tokenizer or evaluation error. Sub-expressions
    /// completed before the error stay staged; the caller decides whether to
    /// commit them.
    pub fn run<I>(mut self, tokens: I, end: usize) -> Result<(), Error>
        where I: Iterator<Item = ParseResult<Spanned>>
    {
        for spanned in tokens {
            let Spanned { token, position } = spanned?;

            match token {
                Token::Number(value) => self.values.push(value),
                Token::Function(function) => {
                    self.operators.push(Pending { entry: Entry::Call(Callable::Function(function)),
                                                  position });
                },
                Token::LParen => self.operators.push(Pending { entry: Entry::Barrier,
                                                               position }),
                Token::RParen => self.close_paren(position)?,
                Token::Operator(op) => self.push_operator(op, position)?,
                Token::Separator => self.finish(position)?,
            }
        }

        Ok(self.finish(end)?)
    }

    /// Reduces what `op` outranks, then pushes `op`.
    fn push_operator(&mut self, op: Operator, position: usize) -> Result<(), RuntimeError> {
        while let Some(top) = self.operators.last() {
            let Entry::Call(callable) = top.entry else {
                break;
            };
            if op.precedence() >= callable.precedence() + u8::from(op.is_left_associative()) {
                break;
            }
            self.reduce_top()?;
        }

        self.operators.push(Pending { entry: Entry::Call(Callable::Operator(op)),
                                      position });
        Ok(())
    }

    /// Reduces everything up to the matching `(` and discards it.
    fn close_paren(&mut self, position: usize) -> Result<(), RuntimeError> {
        loop {
            let Some(top) = self.operators.pop() else {
                return Err(RuntimeError::MismatchedCloseParen { position });
            };
            match top.entry {
                Entry::Barrier => return Ok(()),
                Entry::Call(callable) => self.reduce(callable, top.position)?,
            }
        }
    }

    /// Drains the operator stack and stages the single remaining value.
    fn finish(&mut self, position: usize) -> Result<(), RuntimeError> {
        while let Some(top) = self.operators.pop() {
            match top.entry {
                Entry::Barrier => {
                    return Err(RuntimeError::MismatchedOpenParen { position: top.position });
                },
                Entry::Call(callable) => self.reduce(callable, top.position)?,
            }
        }

        let &[value] = self.values.as_slice() else {
            return Err(RuntimeError::MalformedExpression { position });
        };
        self.values.clear();
        self.results.push(value);
        debug!(index = self.results.len(), value, "result staged");
        Ok(())
    }

    fn reduce_top(&mut self) -> Result<(), RuntimeError> {
        match self.operators.pop() {
            Some(Pending { entry: Entry::Call(callable),
                           position, }) => self.reduce(callable, position),
            Some(Pending { entry: Entry::Barrier,
                           position, }) => Err(RuntimeError::MismatchedOpenParen { position }),
            None => Ok(()),
        }
    }

    fn reduce(&mut self, callable: Callable, position: usize) -> Result<(), RuntimeError> {
        Context::execute(callable, position, &mut self.values, &*self.results, self.mode)
    }
}
