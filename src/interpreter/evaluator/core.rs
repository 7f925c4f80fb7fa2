use crate::{
    ast::{Node, VariableRef},
    error::RuntimeError,
    interpreter::store::Store,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks an AST and computes its value.
///
/// The evaluator borrows the session's [`Store`] for the duration of one
/// line: variable reads go to it, and assignments write to it immediately,
/// so an assignment that completed before a later failure on the same line
/// stays in effect.
pub struct Evaluator<'store> {
    store: &'store mut Store,
}

impl<'store> Evaluator<'store> {
    /// Creates an evaluator that reads and writes `store`.
    pub const fn new(store: &'store mut Store) -> Self {
        Self { store }
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation and dispatches on the
    /// node variant. Operands are always evaluated left before right.
    ///
    /// # Returns
    /// `Some(value)` for expressions and statements, `None` for
    /// [`Node::NoOp`] and for a compound statement with no statements.
    ///
    /// # Example
    /// ```
    /// use minicalc::{
    ///     interpreter::{evaluator::core::Evaluator, parser::core::parse, store::Store},
    /// };
    ///
    /// let mut store = Store::new();
    /// let tree = parse("x = (3 + 4) * 2;").unwrap();
    ///
    /// let value = Evaluator::new(&mut store).eval(&tree).unwrap();
    /// assert_eq!(value, Some(14));
    /// assert_eq!(store.get("x"), Some(14));
    /// ```
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<i64>> {
        match node {
            Node::IntLiteral { value, .. } => Ok(Some(*value)),
            Node::Variable(var) => self.eval_variable(var).map(Some),
            Node::UnaryOp { op, expr, column } => {
                let value = self.eval_operand(expr, *column)?;
                Self::eval_unary(*op, value, *column).map(Some)
            },
            Node::BinaryOp { .. } => self.eval_binary_chain(node).map(Some),
            Node::Assignment { target, value } => self.eval_assignment(target, value).map(Some),
            Node::Compound { statements } => {
                let mut result = None;
                for statement in statements {
                    if let Some(value) = self.eval(statement)? {
                        result = Some(value);
                    }
                }
                Ok(result)
            },
            Node::NoOp => Ok(None),
        }
    }

    /// Evaluates a node that must produce a value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MissingValue`], reported at `column`, if the
    /// node yields nothing.
    pub(in crate::interpreter::evaluator) fn eval_operand(&mut self,
                                                          node: &Node,
                                                          column: usize)
                                                          -> EvalResult<i64> {
        self.eval(node)?
            .ok_or(RuntimeError::MissingValue { column })
    }

    /// Looks up a variable in the store.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if the variable has never
    /// been assigned. There is no default value.
    pub fn eval_variable(&self, var: &VariableRef) -> EvalResult<i64> {
        self.store
            .get(&var.name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name:   var.name.clone(),
                                                             column: var.column, })
    }

    /// Evaluates the right-hand side and binds it to `target`.
    ///
    /// # Returns
    /// The assigned value.
    pub fn eval_assignment(&mut self, target: &VariableRef, value: &Node) -> EvalResult<i64> {
        let value = self.eval_operand(value, target.column)?;
        let previous = self.store.assign(&target.name, value);

        tracing::debug!(name = %target.name, value, ?previous, "assigned variable");
        Ok(value)
    }
}
