/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, performs checked integer arithmetic,
/// reads and writes the variable store, and produces the value of each
/// statement.
///
/// # Responsibilities
/// - Evaluates every node kind by exhaustive pattern matching.
/// - Resolves variables strictly: an unassigned name is an error.
/// - Reports runtime errors such as overflow or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one line of raw text and produces tokens on demand:
/// integer literals, identifiers, operators and punctuation, each paired with
/// its source column. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with location.
/// - Rejects unknown characters and leading-zero integer literals.
/// - Keeps returning end-of-input once the line is exhausted.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer one at a time and constructs the
/// AST for one line: a single assignment statement or a chain of them.
///
/// # Responsibilities
/// - Implements the grammar by recursive descent with one token of
///   lookahead.
/// - Reports the expected token kind whenever the input does not match.
/// - Rejects input left over after a complete line.
pub mod parser;
/// The store module holds variable bindings for a session.
///
/// The store outlives individual lines: it is created once and every
/// statement of the session reads and writes it.
pub mod store;
