/// Binary operator evaluation.
///
/// Implements evaluation for all infix operations: integer arithmetic and
/// comparison, equality across object types, and the error objects produced
/// for mismatched or unsupported operand combinations.
pub mod binary;

/// Program and block evaluation.
///
/// Holds the two statement-sequence entry points whose difference carries
/// the language's `return` semantics: the program unwraps a bubbled return
/// value, a block forwards it still wrapped.
pub mod block;

/// Core evaluation dispatch.
///
/// Walks expression and statement nodes, evaluating literals, operator
/// applications, conditionals, and return statements, and short-circuiting
/// on error objects after every sub-evaluation.
pub mod core;

/// Prefix operator evaluation.
///
/// Handles truthiness negation (`!`) and checked arithmetic negation (`-`).
pub mod unary;

/// Utility functions for the evaluator.
///
/// Provides the truthiness rule, the shared boolean constants mapping, and
/// the error-object helpers used at every propagation site.
pub mod utils;
