use tracing::{debug, trace};

use crate::{
    config::{AngleMode, Config},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::function::Function,
        registry::{ResultRegistry, Transaction},
        shunting_yard::ShuntingYard,
        token::{Arity, FUNCTION_PRECEDENCE, Operator},
        tokenizer::Tokenizer,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Anything the engine can reduce: an operator or a builtin function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callable {
    /// An arithmetic operator.
    Operator(Operator),
    /// A builtin function.
    Function(Function),
}

impl Callable {
    /// Returns the binding strength used when comparing against an incoming
    /// operator.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Operator(op) => op.precedence(),
            Self::Function(_) => FUNCTION_PRECEDENCE,
        }
    }

    /// Returns how many values the callable pops from the value stack.
    #[must_use]
    pub const fn operand_count(self) -> usize {
        match self {
            Self::Operator(op) => match op.arity() {
                Arity::Unary => 1,
                Arity::Binary => 2,
            },
            Self::Function(_) => 1,
        }
    }
}

impl std::fmt::Display for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator(op) => op.fmt(f),
            Self::Function(function) => function.fmt(f),
        }
    }
}

/// Stores the state shared by all expressions of a batch.
///
/// ## Usage
///
/// `Context` is created once per batch and reused for every expression in it,
/// so that `$n` can reach the results of earlier expressions. The
/// configuration is fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Settings the evaluator honours.
    pub config:  Config,
    /// Results committed by the expressions evaluated so far.
    pub results: ResultRegistry,
}

impl Context {
    /// Creates a context with an empty result registry.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config,
               results: ResultRegistry::new() }
    }

    /// Evaluates one input string and returns the value of each of its
    /// comma-separated sub-expressions.
    ///
    /// The values are appended to the result registry only if every
    /// sub-expression succeeds; on error the registry is left untouched.
    ///
    /// # Errors
    /// Returns the first tokenizer or evaluation error encountered.
    ///
    /// # Example
    /// ```
    /// use calc::{Config, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new(Config::default());
    /// assert_eq!(context.eval_expression("3+4, $1*2").unwrap(), vec![7.0, 14.0]);
    /// assert!(context.eval_expression("$3, (").is_err());
    /// assert_eq!(context.results.len(), 2);
    /// ```
    pub fn eval_expression(&mut self, source: &str) -> Result<Vec<f64>, Error> {
        debug!(expression = source, "evaluating");

        let mut transaction = self.results.transaction();
        let end = source.chars().count() + 1;

        let engine = ShuntingYard::new(self.config.angle_mode, &mut transaction);
        if let Err(e) = engine.run(Tokenizer::new(source), end) {
            debug!(expression = source, error = %e, "rejected");
            return Err(e);
        }

        Ok(transaction.commit())
    }

    /// Applies `callable` to the top of the value stack.
    ///
    /// The operands are read in place and replaced by the single result only
    /// once evaluation succeeded, so a failure leaves `values` untouched.
    ///
    /// # Errors
    /// - `MalformedExpression` if fewer operands are available than the
    ///   callable needs.
    /// - Any domain error raised by the operator itself.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     config::AngleMode,
    ///     interpreter::{
    ///         evaluator::core::{Callable, Context},
    ///         registry::ResultRegistry,
    ///         token::Operator,
    ///     },
    /// };
    ///
    /// let mut registry = ResultRegistry::new();
    /// let results = registry.transaction();
    /// let mut values = vec![2.0, 3.0];
    ///
    /// Context::execute(Callable::Operator(Operator::Add), 1, &mut values, &results, AngleMode::Radians).unwrap();
    /// assert_eq!(values, vec![5.0]);
    ///
    /// let err = Context::execute(Callable::Operator(Operator::Add), 1, &mut values, &results, AngleMode::Radians);
    /// assert!(err.is_err());
    /// assert_eq!(values, vec![5.0]);
    /// ```
    pub fn execute(callable: Callable,
                   position: usize,
                   values: &mut Vec<f64>,
                   results: &Transaction<'_>,
                   mode: AngleMode)
                   -> EvalResult<()> {
        let split = values.len()
                          .checked_sub(callable.operand_count())
                          .ok_or(RuntimeError::MalformedExpression { position })?;

        let result = match (callable, &values[split..]) {
            (Callable::Function(function), &[x]) => function.apply(x, mode),
            (Callable::Operator(op), &[x]) => Self::eval_unary(op, x, results, position)?,
            (Callable::Operator(op), &[lhs, rhs]) => Self::eval_binary(op, lhs, rhs, position)?,
            _ => return Err(RuntimeError::MalformedExpression { position }),
        };

        trace!(%callable, operands = ?&values[split..], result, "reduced");

        values.truncate(split);
        values.push(result);
        Ok(())
    }
}
