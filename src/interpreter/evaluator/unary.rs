use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// # Errors
    /// Negating `i64::MIN` returns [`RuntimeError::Overflow`].
    ///
    /// # Example
    /// ```
    /// use minicalc::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Negate, 5, 1), Ok(-5));
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Plus, -5, 1), Ok(-5));
    /// assert!(Evaluator::eval_unary(UnaryOperator::Negate, i64::MIN, 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: i64, column: usize) -> EvalResult<i64> {
        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => match value.checked_neg() {
                Some(negated) => Ok(negated),
                None => Err(RuntimeError::Overflow { column }),
            },
        }
    }
}
