/// Core parsing machinery.
///
/// Contains the parser itself: the two-token cursor over the token stream,
/// the program loop, diagnostic collection, and statement-boundary
/// resynchronization after an error.
pub mod core;

/// Expression parsing.
///
/// Implements precedence climbing: prefix dispatch for everything an
/// expression can start with, and infix dispatch that folds binary
/// operators, calls, and subscripts onto an already-parsed left-hand side.
pub mod expression;

/// The binding-power table.
///
/// Orders every operator token by precedence and maps operator tokens to
/// their AST operator variants.
pub mod precedence;

/// Statement parsing.
///
/// Handles `let` and `return` statements, bare expression statements, and
/// brace-delimited blocks.
pub mod statement;
