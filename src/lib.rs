//! # sprig
//!
//! sprig is a small interpreted expression language written in Rust.
//! Source text is tokenized, parsed into an abstract syntax tree by an
//! operator-precedence ("Pratt") parser, and executed by a recursive
//! tree-walking evaluator that models early returns and runtime errors as
//! ordinary values.

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
    error::ParseError,
    interpreter::{
        evaluator::block::eval_program, lexer::TokenStream, object::Object, parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression node types for all language constructs.
/// - Provides the canonical, fully parenthesized textual rendering of every
///   node, used by diagnostics and parser tests.
pub mod ast;
/// Provides the error types raised while turning text into an AST.
///
/// This module defines all errors that can be reported during lexing and
/// parsing. Runtime failures are not represented here: the evaluator models
/// them as first-class error objects that flow through evaluation as values.
///
/// # Responsibilities
/// - Defines the diagnostic enum for all parse failure modes.
/// - Attaches line numbers and readable messages for user feedback.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the lexer, parser, runtime object model, and
/// evaluator to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and objects.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads one line at a time, parses it, reports any parser diagnostics, and
/// otherwise prints the inspection string of the evaluated result.
pub mod repl;

/// Parses and evaluates a complete source string.
///
/// This is the main library entry point. The source is tokenized and parsed
/// in full; if the parser collected any diagnostics the program is not
/// evaluated and the ordered diagnostics are returned instead. Otherwise the
/// program is evaluated and the resulting object returned. Runtime failures
/// do not produce an `Err`: they surface as an [`Object::Error`] value.
///
/// # Errors
/// Returns the ordered list of parser diagnostics when the source is
/// syntactically malformed.
///
/// # Examples
/// ```
/// use sprig::{eval_source, interpreter::object::Object};
///
/// let result = eval_source("5 + 5 + 5 + 5 - 10").unwrap();
/// assert_eq!(result, Object::Integer(10));
///
/// // Runtime failures are ordinary objects, not `Err` values.
/// let result = eval_source("5 + true").unwrap();
/// assert_eq!(result, Object::Error("type mismatch: INTEGER + BOOLEAN".to_string()));
///
/// // Syntax errors are collected diagnostics.
/// assert!(eval_source("let x 5;").is_err());
/// ```
pub fn eval_source(source: &str) -> Result<Object, Vec<ParseError>> {
    let mut parser = Parser::new(TokenStream::new(source));
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(eval_program(&program))
    } else {
        Err(parser.into_errors())
    }
}
