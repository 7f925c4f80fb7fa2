use minicalc::{
    ast::{BinaryOperator, Node, UnaryOperator, VariableRef},
    error::{Error, SyntaxError},
    interpreter::{
        lexer::TokenKind,
        parser::core::{MAX_NESTING_DEPTH, parse},
    },
};
use pretty_assertions::assert_eq;

fn var(name: &str, column: usize) -> VariableRef {
    VariableRef { name: name.to_string(),
                  column }
}

fn int(value: i64, column: usize) -> Box<Node> {
    Box::new(Node::IntLiteral { value, column })
}

fn assignment(target: VariableRef, value: Box<Node>) -> Node {
    Node::Assignment { target, value }
}

#[test]
fn precedence_shapes_the_tree() {
    assert_eq!(parse("x = 3 + 4 * 2;").unwrap(),
               assignment(var("x", 1),
                          Box::new(Node::BinaryOp { left:   int(3, 5),
                                                    op:     BinaryOperator::Add,
                                                    right:  Box::new(Node::BinaryOp {
                                                        left:   int(4, 9),
                                                        op:     BinaryOperator::Mul,
                                                        right:  int(2, 13),
                                                        column: 11,
                                                    }),
                                                    column: 7, })));
}

#[test]
fn binary_chains_are_left_associative() {
    assert_eq!(parse("x = 1 - 2 + 3;").unwrap(),
               assignment(var("x", 1),
                          Box::new(Node::BinaryOp { left:   Box::new(Node::BinaryOp {
                                                        left:   int(1, 5),
                                                        op:     BinaryOperator::Sub,
                                                        right:  int(2, 9),
                                                        column: 7,
                                                    }),
                                                    op:     BinaryOperator::Add,
                                                    right:  int(3, 13),
                                                    column: 11, })));
}

#[test]
fn grouping_leaves_no_node() {
    assert_eq!(parse("x = (y);").unwrap(),
               assignment(var("x", 1), Box::new(Node::Variable(var("y", 6)))));
}

#[test]
fn unary_operators_nest() {
    assert_eq!(parse("x = -+5;").unwrap(),
               assignment(var("x", 1),
                          Box::new(Node::UnaryOp { op:     UnaryOperator::Negate,
                                                   expr:   Box::new(Node::UnaryOp {
                                                       op:     UnaryOperator::Plus,
                                                       expr:   int(5, 7),
                                                       column: 6,
                                                   }),
                                                   column: 5, })));
}

#[test]
fn several_statements_form_a_compound() {
    assert_eq!(parse("a = 1; b = a;").unwrap(),
               Node::Compound { statements: vec![assignment(var("a", 1), int(1, 5)),
                                                 assignment(var("b", 8),
                                                            Box::new(Node::Variable(var("a", 12))))], });
}

#[test]
fn missing_token_names_expected_kind() {
    let cases = [("x 1;", TokenKind::Assign, TokenKind::Integer, 3),
                 ("= 1;", TokenKind::Identifier, TokenKind::Assign, 1),
                 ("x = (1;", TokenKind::CloseParen, TokenKind::Semicolon, 7),
                 ("x = 1 1;", TokenKind::Semicolon, TokenKind::Integer, 7),
                 ("", TokenKind::Identifier, TokenKind::EndOfInput, 1)];

    for (source, expected, found, column) in cases {
        assert_eq!(parse(source),
                   Err(Error::Syntax(SyntaxError::UnexpectedToken { expected,
                                                                    found,
                                                                    column })),
                   "{source}");
    }
}

#[test]
fn lexical_errors_surface_while_parsing() {
    assert!(matches!(parse("x = 1 + 02;"), Err(Error::Lex(_))));
    assert!(matches!(parse("x = 1; y = 2 / 1;"), Err(Error::Lex(_))));
}

#[test]
fn deep_nesting_is_rejected() {
    let within = format!("x = {}1{};", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert!(parse(&within).is_ok());

    let beyond = format!("x = {}1;", "-".repeat(MAX_NESTING_DEPTH + 1));
    assert!(matches!(parse(&beyond),
                     Err(Error::Syntax(SyntaxError::NestingTooDeep { .. }))));
}

#[test]
fn long_chains_parse_and_drop() {
    let line = format!("x = {};", vec!["1"; 100_000].join(" + "));
    let tree = parse(&line).unwrap();

    match &tree {
        Node::Assignment { value, .. } => {
            assert!(matches!(value.as_ref(),
                             Node::BinaryOp { op: BinaryOperator::Add, .. }));
        },
        other => panic!("Expected an assignment, found {other:?}"),
    }
    drop(tree);
}
