use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// Handles left-associative `+` and `-`, so `1 - 2 - 3` parses as
    /// `(1 - 2) - 3`.
    ///
    /// Grammar: `expr := term (("+" | "-") term)*`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Sub,
                _ => break,
            };
            let column = self.column;
            self.advance()?;

            let right = self.parse_term()?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column };
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Grammar: `term := factor ("*" factor)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_factor()?;
        while self.current_kind() == TokenKind::Mul {
            let column = self.column;
            self.advance()?;

            let right = self.parse_factor()?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::Mul,
                                    right: Box::new(right),
                                    column };
        }
        Ok(left)
    }
}
