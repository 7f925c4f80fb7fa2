//! # minicalc
//!
//! minicalc is a miniature imperative expression language written in Rust.
//! It lexes, parses and evaluates integer assignment statements such as
//! `x = 3 + 4 * 2;`, keeping variables alive across inputs for the length of
//! a session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Evaluator, parser::core::parse, store::Store},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the operator types that represent
/// one input line as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per language construct.
/// - Attaches source columns to expression nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every failure carries the 1-based column it refers to. The [`Error`] enum
/// unifies the three families so the whole pipeline can use `?`.
///
/// [`Error`]: error::Error
pub mod error;
/// Orchestrates the text-to-value pipeline.
///
/// This module ties together the lexer, the parser, the evaluator and the
/// variable store.
pub mod interpreter;
/// The interactive shell around the interpreter.
///
/// Reads lines, runs each one against a session-wide store, and prints the
/// store after every successful line.
pub mod repl;

/// Lexes, parses and evaluates one line of source against `store`.
///
/// A fresh lexer and parser are built for `source`; only `store` carries
/// state from one call to the next.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error. Assignments that
/// completed before a runtime error remain in `store`.
///
/// # Examples
/// ```
/// use minicalc::{error::Error, interpret, interpreter::store::Store};
///
/// let mut store = Store::new();
///
/// assert_eq!(interpret("x = 3 + 4 * 2;", &mut store).unwrap(), Some(11));
/// assert_eq!(interpret("y = x + 1;", &mut store).unwrap(), Some(12));
///
/// // 'z' has never been assigned.
/// assert!(matches!(interpret("y = z + 1;", &mut store), Err(Error::Runtime(_))));
/// assert_eq!(store.get("y"), Some(12));
/// ```
pub fn interpret(source: &str, store: &mut Store) -> Result<Option<i64>, Error> {
    let tree = parse(source)?;
    Ok(Evaluator::new(store).eval(&tree)?)
}
