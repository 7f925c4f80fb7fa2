/// Core evaluation logic.
///
/// Contains the evaluator type, node dispatch, variable lookup and
/// assignment.
pub mod core;

/// Unary operator evaluation.
///
/// Implements the prefix signs.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements checked addition, subtraction, multiplication and floor
/// division.
pub mod binary;
