use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        token::Operator,
    },
};

impl Context {
    /// Evaluates a binary operation on two values.
    ///
    /// Supported operators:
    /// - `Add`, `Subtract`, `Multiply`, `Divide`: IEEE 754 arithmetic. Division
    ///   by zero yields an infinity or NaN rather than an error.
    /// - `Remainder`: floating-point remainder, carrying the sign of `lhs`.
    /// - `Power`: `lhs` raised to `rhs`.
    ///
    /// A unary operator has no two-operand form and is reported as a
    /// malformed expression.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::{evaluator::core::Context, token::Operator};
    ///
    /// assert_eq!(Context::eval_binary(Operator::Subtract, 8.0, 3.0, 1).unwrap(), 5.0);
    /// assert_eq!(Context::eval_binary(Operator::Remainder, -7.0, 3.0, 1).unwrap(), -1.0);
    /// assert_eq!(Context::eval_binary(Operator::Power, 2.0, 9.0, 1).unwrap(), 512.0);
    /// assert!(Context::eval_binary(Operator::Divide, 1.0, 0.0, 1).unwrap().is_infinite());
    /// ```
    pub fn eval_binary(op: Operator, lhs: f64, rhs: f64, position: usize) -> EvalResult<f64> {
        match op {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => Ok(lhs / rhs),
            Operator::Remainder => Ok(lhs % rhs),
            Operator::Power => Ok(lhs.powf(rhs)),
            Operator::Identity | Operator::Negate | Operator::Factorial | Operator::ResultRef => {
                Err(RuntimeError::MalformedExpression { position })
            },
        }
    }
}
