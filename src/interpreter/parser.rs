/// Parser state, token handling and the entry points.
///
/// Holds the current token, consumes expected kinds and checks that a
/// program is followed by the end of input.
pub mod core;

/// Statement parsing.
///
/// Parses assignment statements and chains of them.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels.
pub mod binary;

/// Unary operator and primary parsing.
///
/// Handles prefix signs, literals, variables and parenthesized grouping.
pub mod unary;
