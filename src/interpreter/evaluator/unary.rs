use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        registry::Transaction,
        token::Operator,
    },
    util::num::is_natural,
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Identity`: returns the value unchanged (prefix `+`).
    /// - `Negate`: arithmetic negation (prefix `-` or `~`).
    /// - `Factorial`: `n!` for natural numbers, computed as an iterative
    ///   product. Results beyond the `f64` range are infinite.
    /// - `ResultRef`: `$n` resolves to the `n`-th result visible in `results`.
    ///
    /// # Errors
    /// - `FactorialDomain` if the factorial operand is negative, fractional or
    ///   not finite.
    /// - `InvalidResultIndex` if `$n` does not name an existing result.
    /// - `MalformedExpression` if `op` is a binary operator.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::{
    ///     evaluator::core::Context,
    ///     registry::ResultRegistry,
    ///     token::Operator,
    /// };
    ///
    /// let mut registry = ResultRegistry::new();
    /// let mut results = registry.transaction();
    ///
    /// assert_eq!(Context::eval_unary(Operator::Negate, 5.0, &results, 1).unwrap(), -5.0);
    /// assert_eq!(Context::eval_unary(Operator::Factorial, 5.0, &results, 1).unwrap(), 120.0);
    /// assert!(Context::eval_unary(Operator::Factorial, 2.5, &results, 1).is_err());
    ///
    /// results.push(42.0);
    /// assert_eq!(Context::eval_unary(Operator::ResultRef, 1.0, &results, 1).unwrap(), 42.0);
    /// assert!(Context::eval_unary(Operator::ResultRef, 2.0, &results, 1).is_err());
    /// ```
    pub fn eval_unary(op: Operator,
                      value: f64,
                      results: &Transaction<'_>,
                      position: usize)
                      -> EvalResult<f64> {
        match op {
            Operator::Identity => Ok(value),
            Operator::Negate => Ok(-value),
            Operator::Factorial => {
                if !is_natural(value) {
                    return Err(RuntimeError::FactorialDomain { value, position });
                }
                Ok(factorial(value))
            },
            Operator::ResultRef => {
                results.get(value)
                       .ok_or_else(|| RuntimeError::InvalidResultIndex { index: value,
                                                                         available: results.len(),
                                                                         position })
            },
            Operator::Add
            | Operator::Subtract
            | Operator::Multiply
            | Operator::Divide
            | Operator::Remainder
            | Operator::Power => Err(RuntimeError::MalformedExpression { position }),
        }
    }
}

/// Computes `n!` for a natural number held in an `f64`.
///
/// Stops as soon as the product overflows to infinity, so huge operands do not
/// loop for long.
fn factorial(n: f64) -> f64 {
    let mut result: f64 = 1.0;
    let mut factor = 2.0;
    while factor <= n && result.is_finite() {
        result *= factor;
        factor += 1.0;
    }
    result
}
