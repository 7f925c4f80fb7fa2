use logos::Logos;

use crate::error::{LexError, LexErrorKind};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw token produced by the generated `logos` lexer.
///
/// Only what the input can actually contain appears here; [`Lexer`] converts
/// each raw token into a [`Token`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"\s+")]
enum RawToken {
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Mul,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Identifier,
    #[token("=")]
    Assign,
    #[token(";")]
    Semicolon,
}

/// Represents a lexical token in the source input.
///
/// Every token is a `(kind, value)` pair: the variant is the kind and the
/// payload, where there is one, is the value. `Div` and `Dot` belong to the
/// token vocabulary but no input ever produces them; `/` and `.` are rejected
/// as unrecognized characters. `EndOfInput` is produced once the source is
/// exhausted.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `0` or `42`.
    Integer(i64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// Division. Never produced by the lexer.
    Div,
    /// Dot. Never produced by the lexer.
    Dot,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Variable names such as `x` or `total_2`. There are no keywords.
    Identifier(String),
    /// `=`
    Assign,
    /// `;`
    Semicolon,
    /// The end of the input line.
    EndOfInput,
}

/// The payload-free kind of a [`Token`].
///
/// The parser states its expectations in terms of kinds, and syntax errors
/// report them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `.`
    Dot,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// A variable name.
    Identifier,
    /// `=`
    Assign,
    /// `;`
    Semicolon,
    /// The end of the input line.
    EndOfInput,
}

impl Token {
    /// Returns the kind of this token, dropping its payload.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(7).kind(), TokenKind::Integer);
    /// assert_eq!(Token::Identifier("x".to_string()).kind(), TokenKind::Identifier);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
            Self::Dot => TokenKind::Dot,
            Self::OpenParen => TokenKind::OpenParen,
            Self::CloseParen => TokenKind::CloseParen,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Assign => TokenKind::Assign,
            Self::Semicolon => TokenKind::Semicolon,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Self::Integer => "integer literal",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Mul => "'*'",
            Self::Div => "'/'",
            Self::Dot => "'.'",
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::Identifier => "identifier",
            Self::Assign => "'='",
            Self::Semicolon => "';'",
            Self::EndOfInput => "end of input",
        };
        write!(f, "{description}")
    }
}

/// Parses an integer literal from the current token slice.
///
/// Only `0` and digit runs without a leading zero are valid literals.
///
/// # Returns
/// - `Ok(i64)`: The literal value.
/// - `Err(LexErrorKind::InvalidIntegerLiteral)`: For forms like `007`.
/// - `Err(LexErrorKind::LiteralTooLarge)`: If the value exceeds `i64::MAX`.
fn parse_integer(lex: &logos::Lexer<RawToken>) -> Result<i64, LexErrorKind> {
    let digits = lex.slice();
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(LexErrorKind::InvalidIntegerLiteral);
    }
    digits.parse().map_err(|_| LexErrorKind::LiteralTooLarge)
}

/// Produces tokens from one line of input on demand.
///
/// Wraps the generated `logos` lexer. Raw tokens are converted into
/// [`Token`]s paired with their 1-based column, and exhaustion turns into a
/// sticky [`Token::EndOfInput`]: once the end is reached, every further call
/// returns it again.
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, RawToken>,
    finished: bool,
    /// Byte offset up to which characters have been counted.
    scanned:  usize,
    /// Characters before `scanned`.
    chars:    usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    RawToken::lexer(source),
               finished: false,
               scanned:  0,
               chars:    0, }
    }

    /// Returns the next token together with its 1-based column.
    ///
    /// # Errors
    /// Returns a [`LexError`] for unrecognized characters and invalid integer
    /// literals. The failing text is skipped, so the lexer stays usable, but
    /// callers are expected to abandon the line.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("x = 5;");
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("x".to_string()), 1));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Assign, 3));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Integer(5), 5));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Semicolon, 6));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::EndOfInput, 7));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::EndOfInput, 7));
    /// ```
    pub fn next_token(&mut self) -> LexResult<(Token, usize)> {
        if self.finished {
            return Ok((Token::EndOfInput, self.end_column()));
        }

        match self.inner.next() {
            Some(Ok(raw)) => {
                let token = self.cook(raw);
                let start = self.inner.span().start;
                let column = self.column_of(start);
                tracing::trace!(?token, column, "lexed token");
                Ok((token, column))
            },
            Some(Err(kind)) => {
                let lexeme = self.inner.slice().to_string();
                let start = self.inner.span().start;
                Err(LexError { kind,
                               lexeme,
                               column: self.column_of(start) })
            },
            None => {
                self.finished = true;
                Ok((Token::EndOfInput, self.end_column()))
            },
        }
    }

    /// Converts a raw token, attaching the identifier text where needed.
    fn cook(&self, raw: RawToken) -> Token {
        match raw {
            RawToken::Integer(value) => Token::Integer(value),
            RawToken::Plus => Token::Plus,
            RawToken::Minus => Token::Minus,
            RawToken::Mul => Token::Mul,
            RawToken::OpenParen => Token::OpenParen,
            RawToken::CloseParen => Token::CloseParen,
            RawToken::Identifier => Token::Identifier(self.inner.slice().to_string()),
            RawToken::Assign => Token::Assign,
            RawToken::Semicolon => Token::Semicolon,
        }
    }

    /// Converts a byte offset into a 1-based column.
    ///
    /// Offsets only move forward, so counting resumes from the previous one
    /// and a whole line is counted once.
    fn column_of(&mut self, offset: usize) -> usize {
        if offset < self.scanned {
            self.scanned = 0;
            self.chars = 0;
        }
        self.chars += self.inner.source()[self.scanned..offset].chars().count();
        self.scanned = offset;
        self.chars + 1
    }

    fn end_column(&mut self) -> usize {
        self.column_of(self.inner.source().len())
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<(Token, usize)>;

    /// Yields every token up to and including the first `EndOfInput`, then
    /// stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}
