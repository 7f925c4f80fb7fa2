use crate::{
    ast::Node,
    error::{Error, SyntaxError},
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Result type used by the parser.
///
/// Parsing pulls tokens lazily, so a parse can fail with a lexical error as
/// well as a syntax error.
pub type ParseResult<T> = Result<T, Error>;

/// How deeply unary operators and parentheses may nest.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A recursive-descent parser with a single token of lookahead.
///
/// The parser owns its [`Lexer`] and the current token. Grammar rules live in
/// the sibling `statement`, `binary` and `unary` modules as further `impl`
/// blocks on this type.
pub struct Parser<'src> {
    lexer:              Lexer<'src>,
    current:            Token,
    pub(super) column:  usize,
    depth:              usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and primes it with the first token of `lexer`.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be produced.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let (current, column) = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  column,
                  depth: 0 })
    }

    /// Parses the whole input line.
    ///
    /// Grammar: `line := program EndOfInput`
    ///
    /// # Errors
    /// Returns a [`SyntaxError::TrailingInput`] if tokens remain after the
    /// program, and propagates any lexical or syntax error raised on the way.
    ///
    /// # Example
    /// ```
    /// use minicalc::{
    ///     ast::{Node, VariableRef},
    ///     interpreter::{lexer::Lexer, parser::core::Parser},
    /// };
    ///
    /// let tree = Parser::new(Lexer::new("x = 7;")).and_then(Parser::parse).unwrap();
    ///
    /// assert_eq!(tree,
    ///            Node::Assignment { target: VariableRef { name:   "x".to_string(),
    ///                                                     column: 1, },
    ///                               value:  Box::new(Node::IntLiteral { value:  7,
    ///                                                                   column: 5, }), });
    /// ```
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(mut self) -> ParseResult<Node> {
        let program = self.parse_program()?;

        if self.current != Token::EndOfInput {
            return Err(SyntaxError::TrailingInput { found:  self.current.kind(),
                                                    column: self.column, }.into());
        }

        tracing::debug!(column = self.column, "parsed line");
        Ok(program)
    }

    /// Returns the kind of the current token.
    pub(in crate::interpreter::parser) const fn current_kind(&self) -> TokenKind {
        self.current.kind()
    }

    /// Moves to the next token and returns the one that was current.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let (next, column) = self.lexer.next_token()?;
        self.column = column;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it has the `expected` kind.
    ///
    /// # Errors
    /// Returns a [`SyntaxError::UnexpectedToken`] naming `expected` and the
    /// kind that was found instead.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  expected: TokenKind)
                                                  -> ParseResult<Token> {
        if self.current_kind() == expected {
            self.advance()
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Builds the error for finding the current token where `expected` was
    /// required.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: TokenKind) -> Error {
        SyntaxError::UnexpectedToken { expected,
                                       found: self.current_kind(),
                                       column: self.column }.into()
    }

    /// Records one more level of unary or parenthesized nesting.
    ///
    /// # Errors
    /// Returns a [`SyntaxError::NestingTooDeep`] once the depth passes
    /// [`MAX_NESTING_DEPTH`].
    pub(in crate::interpreter::parser) fn enter_nesting(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                     column: self.column, }.into());
        }
        Ok(())
    }

    pub(in crate::interpreter::parser) fn leave_nesting(&mut self) {
        self.depth -= 1;
    }
}

/// Parses one line of source text into an AST.
///
/// Convenience wrapper that builds a fresh [`Lexer`] and [`Parser`].
///
/// # Errors
/// Returns the first lexical or syntax error in `source`.
///
/// # Example
/// ```
/// use minicalc::{error::Error, interpreter::parser::core::parse};
///
/// assert!(parse("x = 3 + 4 * 2;").is_ok());
/// assert!(matches!(parse("x = 3 +;"), Err(Error::Syntax(_))));
/// assert!(matches!(parse("x = 007;"), Err(Error::Lex(_))));
/// ```
pub fn parse(source: &str) -> ParseResult<Node> {
    Parser::new(Lexer::new(source))?.parse()
}
