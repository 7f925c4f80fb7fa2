/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read a variable that has never been assigned.
    #[error("Error at column {column}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The 1-based column of the reference.
        column: usize,
    },
    /// Arithmetic on 64-bit integers overflowed.
    #[error("Error at column {column}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The 1-based column of the operator.
        column: usize,
    },
    /// An operand or right-hand side produced no value.
    #[error("Error at column {column}: Value missing.")]
    MissingValue {
        /// The 1-based column of the construct that needed the value.
        column: usize,
    },
    /// Attempted division by zero.
    #[error("Error at column {column}: Division by zero.")]
    DivisionByZero {
        /// The 1-based column of the operator.
        column: usize,
    },
}
