use crate::interpreter::lexer::TokenKind;

/// Represents all errors the parser can raise on a well-tokenized input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// A specific kind of token was required but another one was found.
    #[error("Error at column {column}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually present.
        found:    TokenKind,
        /// The 1-based column of the offending token.
        column:   usize,
    },
    /// A complete program was parsed but input remained after it.
    #[error("Error at column {column}: Unexpected {found} after the end of the statement.")]
    TrailingInput {
        /// The first token past the end of the program.
        found:  TokenKind,
        /// The 1-based column of that token.
        column: usize,
    },
    /// Unary operators or parentheses were nested past the supported depth.
    #[error("Error at column {column}: Expression nests deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// The 1-based column where the limit was exceeded.
        column: usize,
    },
}
