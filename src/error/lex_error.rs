/// The reason a piece of input could not be tokenized.
///
/// This is also the error type of the `logos` lexer itself, which is why it
/// carries no location: the lexer wrapper attaches the offending text and its
/// column when it converts the failure into a [`LexError`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token, such as `/`, `.` or `$`.
    #[default]
    #[error("Unrecognized character")]
    UnrecognizedCharacter,
    /// A multi-digit integer literal with a leading zero, such as `007`.
    #[error("Invalid integer literal")]
    InvalidIntegerLiteral,
    /// An integer literal that does not fit a signed 64-bit integer.
    #[error("Integer literal is too large")]
    LiteralTooLarge,
}

/// Represents a failure to tokenize the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error at column {column}: {kind} '{lexeme}'.")]
pub struct LexError {
    /// What went wrong.
    pub kind:   LexErrorKind,
    /// The source text the lexer choked on.
    pub lexeme: String,
    /// The 1-based column where `lexeme` starts.
    pub column: usize,
}
