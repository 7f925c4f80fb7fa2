use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a chain of binary operations rooted at `node`.
    ///
    /// Left-associative chains nest on their left operand, so the left spine
    /// is walked with a loop and the right operands are folded in from the
    /// innermost operator outward. Recursion only happens for the operands
    /// themselves, whose depth the parser bounds.
    pub(in crate::interpreter::evaluator) fn eval_binary_chain(&mut self,
                                                               node: &Node)
                                                               -> EvalResult<i64> {
        let mut pending = Vec::new();
        let mut leftmost = node;
        let mut column = 0;
        while let Node::BinaryOp { left,
                                   op,
                                   right,
                                   column: op_column, } = leftmost
        {
            pending.push((*op, right.as_ref(), *op_column));
            column = *op_column;
            leftmost = left.as_ref();
        }

        let mut value = self.eval_operand(leftmost, column)?;
        while let Some((op, right, column)) = pending.pop() {
            let right = self.eval_operand(right, column)?;
            value = Self::eval_binary(op, value, right, column)?;
        }
        Ok(value)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// All arithmetic is checked. Division rounds toward negative infinity,
    /// so `-7 / 2` is `-4`, not `-3`.
    ///
    /// # Errors
    /// - [`RuntimeError::Overflow`] if the result does not fit an `i64`.
    /// - [`RuntimeError::DivisionByZero`] for a zero divisor.
    ///
    /// # Example
    /// ```
    /// use minicalc::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Add, 3, 4, 1), Ok(7));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, -7, 2, 1), Ok(-4));
    /// assert!(Evaluator::eval_binary(BinaryOperator::Div, 1, 0, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       column: usize)
                       -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => return floor_div(left, right, column),
        };
        result.ok_or(RuntimeError::Overflow { column })
    }
}

/// Divides `left` by `right`, rounding toward negative infinity.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] for a zero divisor and
/// [`RuntimeError::Overflow`] for `i64::MIN / -1`.
fn floor_div(left: i64, right: i64, column: usize) -> EvalResult<i64> {
    if right == 0 {
        return Err(RuntimeError::DivisionByZero { column });
    }

    let quotient = left.checked_div(right)
                       .ok_or(RuntimeError::Overflow { column })?;
    if left % right != 0 && (left < 0) != (right < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}
