//! # calc
//!
//! calc is a command-line arithmetic expression evaluator written in Rust.
//! It tokenizes infix expressions, orders them with the shunting-yard
//! algorithm and evaluates them on a value stack, with support for builtin
//! functions, named constants, factorials and back-references to earlier
//! results.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{interpreter::evaluator::core::Context, util::format::format_result};

/// Settings threaded through evaluation and output.
///
/// Holds the angle mode used by trigonometric functions and the separator
/// placed between the results of consecutive expressions. The value is built
/// once by the caller and passed down explicitly.
pub mod config;
/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines all errors that can be raised while scanning or
/// reducing an expression. Every error carries the column it refers to and
/// enough detail to produce a human-readable message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, engine, evaluator).
/// - Classifies every error into a flat [`ErrorKind`](error::ErrorKind).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of a single expression.
///
/// This module ties together lexing, tokenizing, the shunting-yard engine,
/// the evaluator and the result registry.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides the [`Context`] entry point for evaluating expressions.
/// - Manages the flow of values and errors between phases.
pub mod interpreter;
/// General utilities for numeric checks and output formatting.
///
/// # Responsibilities
/// - Validate integral operands and convert them into indices.
/// - Render results with C `%G` semantics.
pub mod util;

pub use config::{AngleMode, Config};
pub use error::{Error, ErrorKind};

/// The outcome of one input string: one value per comma-separated
/// sub-expression, or the error that aborted it.
pub type Outcome = Result<Vec<f64>, Error>;

/// Evaluates every expression of a batch in order.
///
/// All expressions share one result registry, so `$n` in a later expression
/// can refer to the results of earlier ones. A failing expression does not
/// stop the batch; it simply contributes no results to the registry.
///
/// # Examples
/// ```
/// use calc::{Config, evaluate_batch};
///
/// let outcomes = evaluate_batch(&["3+4", "(", "$1*2"], Config::default());
/// assert_eq!(outcomes[0], Ok(vec![7.0]));
/// assert!(outcomes[1].is_err());
/// assert_eq!(outcomes[2], Ok(vec![14.0]));
/// ```
pub fn evaluate_batch<S: AsRef<str>>(expressions: &[S], config: Config) -> Vec<Outcome> {
    let mut context = Context::new(config);

    expressions.iter()
               .map(|expression| context.eval_expression(expression.as_ref()))
               .collect()
}

/// Renders the successful outcomes of a batch.
///
/// Values of one expression are joined with `,`; expressions are joined with
/// the separator chosen by `config`. Failed outcomes are skipped.
///
/// # Examples
/// ```
/// use calc::{Config, evaluate_batch, render};
///
/// let config = Config::default();
/// let outcomes = evaluate_batch(&["1+1, 2^10", "1/3"], config);
/// assert_eq!(render(&outcomes, &config), "2,1024 0.3333333333");
/// ```
#[must_use]
pub fn render(outcomes: &[Outcome], config: &Config) -> String {
    outcomes.iter()
            .filter_map(|outcome| outcome.as_ref().ok())
            .map(|values| {
                values.iter()
                      .map(|value| format_result(*value))
                      .collect::<Vec<_>>()
                      .join(",")
            })
            .collect::<Vec<_>>()
            .join(config.separator())
}

/// Evaluates a batch and returns its rendered output.
///
/// Unlike [`evaluate_batch`], this stops at the first failing expression.
///
/// # Errors
/// Returns the error of the first expression that fails.
///
/// # Examples
/// ```
/// use calc::{Config, ErrorKind, get_result};
///
/// assert_eq!(get_result(&["2+3*4", "(2+3)*4"], Config::default()).unwrap(), "14 20");
///
/// let err = get_result(&["2+3", "2+3)"], Config::default()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MismatchedCloseParen);
/// ```
pub fn get_result<S: AsRef<str>>(expressions: &[S], config: Config) -> Result<String, Error> {
    let mut context = Context::new(config);
    let mut outcomes = Vec::with_capacity(expressions.len());

    for expression in expressions {
        outcomes.push(Ok(context.eval_expression(expression.as_ref())?));
    }

    Ok(render(&outcomes, &config))
}
