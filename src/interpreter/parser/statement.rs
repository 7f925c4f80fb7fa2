use crate::{
    ast::{Node, VariableRef},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a chain of assignment statements.
    ///
    /// A line holds one or more statements written back to back; the chain
    /// continues while the current token can start another statement.
    ///
    /// Grammar: `program := assignment_stmt assignment_stmt*`
    ///
    /// # Returns
    /// The lone [`Node::Assignment`] for a single statement, otherwise a
    /// [`Node::Compound`] holding every statement in source order.
    pub(in crate::interpreter::parser) fn parse_program(&mut self) -> ParseResult<Node> {
        let first = self.parse_assignment()?;
        if self.current_kind() != TokenKind::Identifier {
            return Ok(first);
        }

        let mut statements = vec![first];
        while self.current_kind() == TokenKind::Identifier {
            statements.push(self.parse_assignment()?);
        }
        Ok(Node::Compound { statements })
    }

    /// Parses a single assignment statement.
    ///
    /// Grammar: `assignment_stmt := identifier "=" expr ";"`
    ///
    /// # Errors
    /// Returns a `SyntaxError` naming the missing token if the target, the
    /// `=`, or the terminating `;` is absent, and propagates errors from the
    /// right-hand side.
    pub(in crate::interpreter::parser) fn parse_assignment(&mut self) -> ParseResult<Node> {
        let target = self.parse_variable()?;
        self.consume(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        self.consume(TokenKind::Semicolon)?;

        Ok(Node::Assignment { target,
                              value: Box::new(value) })
    }

    /// Parses a plain identifier into a variable reference.
    ///
    /// # Errors
    /// Returns a `SyntaxError` if the current token is not an identifier.
    pub(in crate::interpreter::parser) fn parse_variable(&mut self) -> ParseResult<VariableRef> {
        let column = self.column;
        match self.consume(TokenKind::Identifier)? {
            Token::Identifier(name) => Ok(VariableRef { name, column }),
            other => Err(SyntaxError::UnexpectedToken { expected: TokenKind::Identifier,
                                                        found: other.kind(),
                                                        column }.into()),
        }
    }
}
