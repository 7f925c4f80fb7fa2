use minicalc::{
    error::{Error, LexErrorKind, RuntimeError, SyntaxError},
    interpret,
    interpreter::{lexer::TokenKind, store::Store},
    repl::Session,
};

fn run(lines: &[&str]) -> Result<Store, Error> {
    let mut store = Store::new();
    for line in lines {
        interpret(line, &mut store)?;
    }
    Ok(store)
}

fn assert_binds(lines: &[&str], name: &str, expected: i64) {
    match run(lines) {
        Ok(store) => assert_eq!(store.get(name),
                                Some(expected),
                                "{name} after {lines:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(lines: &[&str]) -> Error {
    match run(lines) {
        Ok(store) => panic!("Script succeeded but was expected to fail, store:\n{store}"),
        Err(e) => e,
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_binds(&["x = 3 + 4 * 2;"], "x", 11);
    assert_binds(&["x = 2 * 3 + 4;"], "x", 10);
}

#[test]
fn parentheses_override_precedence() {
    assert_binds(&["x = (3 + 4) * 2;"], "x", 14);
    assert_binds(&["x = ((((1))));"], "x", 1);
}

#[test]
fn subtraction_is_left_associative() {
    assert_binds(&["x = 10 - 3 - 2;"], "x", 5);
    assert_binds(&["x = 10 - (3 - 2);"], "x", 9);
}

#[test]
fn nested_unary_operators() {
    assert_binds(&["x = --5;"], "x", 5);
    assert_binds(&["x = -5;"], "x", -5);
    assert_binds(&["x = +-+5;"], "x", -5);
    assert_binds(&["x = -(2 + 3) * -2;"], "x", 10);
}

#[test]
fn variables_persist_across_lines() {
    assert_binds(&["x = 11;", "y = x + 1;"], "y", 12);
    assert_binds(&["a = 2;", "b = a * a;", "c = b * a - a;"], "c", 6);
}

#[test]
fn reassignment_overwrites() {
    let store = run(&["x = 1;", "x = 2;"]).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.to_string(), "x = 2");

    assert_binds(&["x = 1;", "x = x + 1;"], "x", 2);
}

#[test]
fn chained_statements_on_one_line() {
    let store = run(&["x = 1; x = 2;"]).unwrap();
    assert_eq!(store.to_string(), "x = 2");

    assert_binds(&["a = 4; b = a * 2; c = b - a;"], "c", 4);
}

#[test]
fn chained_line_returns_last_value() {
    let mut store = Store::new();
    assert_eq!(interpret("a = 1; b = 2;", &mut store), Ok(Some(2)));
}

#[test]
fn undefined_variable_is_error() {
    let e = assert_failure(&["y = z + 1;"]);
    assert_eq!(e,
               Error::Runtime(RuntimeError::UndefinedVariable { name:   "z".to_string(),
                                                                column: 5, }));
}

#[test]
fn self_reference_before_assignment_is_error() {
    assert_failure(&["x = x + 1;"]);
}

#[test]
fn missing_operand_is_syntax_error() {
    let e = assert_failure(&["x = 3 +;"]);
    assert_eq!(e,
               Error::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::Identifier,
                                                            found:    TokenKind::Semicolon,
                                                            column:   8, }));
}

#[test]
fn missing_semicolon_is_syntax_error() {
    let e = assert_failure(&["x = 3"]);
    assert_eq!(e,
               Error::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::Semicolon,
                                                            found:    TokenKind::EndOfInput,
                                                            column:   6, }));
}

#[test]
fn unbalanced_parentheses_are_syntax_errors() {
    assert!(matches!(assert_failure(&["x = (1 + 2;"]), Error::Syntax(_)));
    assert!(matches!(assert_failure(&["x = 1 + 2);"]), Error::Syntax(_)));
}

#[test]
fn statement_needs_an_assignment() {
    assert!(matches!(assert_failure(&["3 + 4;"]), Error::Syntax(_)));
    assert!(matches!(assert_failure(&["x;"]), Error::Syntax(_)));
    assert!(matches!(assert_failure(&["x = ;"]), Error::Syntax(_)));
}

#[test]
fn trailing_input_is_syntax_error() {
    let e = assert_failure(&["x = 1; 2"]);
    assert_eq!(e,
               Error::Syntax(SyntaxError::TrailingInput { found:  TokenKind::Integer,
                                                          column: 8, }));
}

#[test]
fn leading_zero_literal_is_lex_error() {
    match assert_failure(&["x = 007;"]) {
        Error::Lex(e) => {
            assert_eq!(e.kind, LexErrorKind::InvalidIntegerLiteral);
            assert_eq!(e.lexeme, "007");
            assert_eq!(e.column, 5);
        },
        other => panic!("Expected a lexical error, found {other:?}"),
    }
    assert_binds(&["x = 0;"], "x", 0);
}

#[test]
fn division_has_no_surface_syntax() {
    match assert_failure(&["x = 6 / 2;"]) {
        Error::Lex(e) => {
            assert_eq!(e.kind, LexErrorKind::UnrecognizedCharacter);
            assert_eq!(e.lexeme, "/");
        },
        other => panic!("Expected a lexical error, found {other:?}"),
    }
}

#[test]
fn overflow_is_error() {
    assert!(matches!(assert_failure(&["x = 9223372036854775807 + 1;"]),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure(&["x = 99999999999999999999;"]),
                     Error::Lex(_)));
    assert_binds(&["x = -9223372036854775807 - 1;"], "x", i64::MIN);
}

#[test]
fn failed_line_keeps_earlier_assignments() {
    let mut session = Session::new();
    session.run_line("x = 1;").unwrap();

    assert!(session.run_line("y = 2; z = w;").is_err());
    assert_eq!(session.store().get("y"), Some(2));
    assert_eq!(session.store().get("z"), None);

    assert!(session.run_line("x = 5 +;").is_err());
    assert_eq!(session.store().get("x"), Some(1));
}

#[test]
fn long_operator_chains_evaluate() {
    let sum = format!("x = {};", vec!["1"; 100_000].join(" + "));
    assert_binds(&[sum.as_str()], "x", 100_000);

    let product = format!("x = {};", vec!["1"; 100_000].join(" * "));
    assert_binds(&[product.as_str()], "x", 1);

    let mixed = format!("x = 10 - {};", vec!["2 * 1"; 50_000].join(" - "));
    assert_binds(&[mixed.as_str()], "x", 10 - 100_000);
}

#[test]
fn long_chain_failure_points_at_the_last_term() {
    let mut terms = vec!["1"; 100_000];
    terms[99_999] = "z";
    let line = format!("x = {};", terms.join(" + "));

    match assert_failure(&[line.as_str()]) {
        Error::Runtime(RuntimeError::UndefinedVariable { name, column }) => {
            assert_eq!(name, "z");
            assert_eq!(column, 400_001);
        },
        other => panic!("Expected an undefined variable, found {other:?}"),
    }
}
