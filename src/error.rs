/// Lexical errors.
///
/// Raised while turning raw input into tokens: characters the language does
/// not know and malformed integer literals.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// reading a variable that was never assigned or overflowing a 64-bit integer.
pub mod runtime_error;
/// Syntax errors.
///
/// Defines the failures the parser reports when the token stream does not
/// match the grammar: a missing token, leftover input, or runaway nesting.
pub mod syntax_error;

pub use lex_error::{LexError, LexErrorKind};
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any failure that can abort the processing of one input line.
///
/// Each phase reports its own error family; this enum lets callers that run
/// the whole pipeline propagate all of them with `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The lexer rejected part of the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid statement.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Evaluation of a well-formed statement failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
