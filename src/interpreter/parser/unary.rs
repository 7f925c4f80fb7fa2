use crate::{
    ast::{Node, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: a signed operand, a literal, a grouping or a variable.
    ///
    /// Signs are right-associative and may repeat, so `--5` parses as
    /// `-(-(5))`. Anything that is not a sign, a literal or `(` is parsed as a
    /// variable, which is why `x = 3 +;` reports a missing identifier.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | INTEGER
    ///             | "(" expr ")"
    ///             | identifier
    /// ```
    ///
    /// # Errors
    /// Returns a `SyntaxError` for an unbalanced `(`, a missing operand, or
    /// nesting deeper than [`MAX_NESTING_DEPTH`].
    ///
    /// [`MAX_NESTING_DEPTH`]: crate::interpreter::parser::core::MAX_NESTING_DEPTH
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Node> {
        match self.current_kind() {
            TokenKind::Plus => self.parse_signed(UnaryOperator::Plus),
            TokenKind::Minus => self.parse_signed(UnaryOperator::Negate),
            TokenKind::Integer => self.parse_literal(),
            TokenKind::OpenParen => self.parse_grouping(),
            _ => Ok(Node::Variable(self.parse_variable()?)),
        }
    }

    fn parse_signed(&mut self, op: UnaryOperator) -> ParseResult<Node> {
        let column = self.column;
        self.advance()?;

        self.enter_nesting()?;
        let expr = self.parse_factor()?;
        self.leave_nesting();

        Ok(Node::UnaryOp { op,
                           expr: Box::new(expr),
                           column })
    }

    fn parse_literal(&mut self) -> ParseResult<Node> {
        let column = self.column;
        match self.consume(TokenKind::Integer)? {
            Token::Integer(value) => Ok(Node::IntLiteral { value, column }),
            other => Err(SyntaxError::UnexpectedToken { expected: TokenKind::Integer,
                                                        found: other.kind(),
                                                        column }.into()),
        }
    }

    /// Grammar: `grouping := "(" expr ")"`
    fn parse_grouping(&mut self) -> ParseResult<Node> {
        self.consume(TokenKind::OpenParen)?;

        self.enter_nesting()?;
        let expr = self.parse_expression()?;
        self.leave_nesting();

        self.consume(TokenKind::CloseParen)?;
        Ok(expr)
    }
}
