/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively, dispatching on node kind to
/// perform arithmetic, comparisons, truthiness tests, and conditional
/// branching. Early returns and runtime errors are modeled as ordinary
/// objects that bubble up through the evaluation, so the evaluator never
/// panics and never throws.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Propagates return and error signals with exact absorb/bubble rules.
/// - Reports runtime failures as first-class error objects.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// integers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source line.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Surfaces unrecognized input as explicit illegal tokens instead of
///   failing, so the parser can diagnose it.
pub mod lexer;
/// The object module defines the runtime data types produced by evaluation.
///
/// This module declares the object model of the language: integers, booleans,
/// strings, the null object, and the two signal objects used internally for
/// return propagation and runtime errors. It also provides the inspection
/// rendering shown by the REPL.
///
/// # Responsibilities
/// - Defines the `Object` enum and all supported object variants.
/// - Names each object's type tag for dispatch and error formatting.
/// - Renders objects into their human-readable inspection strings.
pub mod object;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. Expressions are parsed with precedence climbing over a
/// binding-power table, so nesting comes out correct without backtracking.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Collects diagnostics for malformed input and keeps parsing, producing a
///   best-effort AST rather than stopping at the first error.
pub mod parser;
