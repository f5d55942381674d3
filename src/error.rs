/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unexpected tokens, unrecognized characters,
/// unterminated blocks, and any other issues detected before evaluation.
///
/// Runtime failures have no counterpart here: the evaluator reports them as
/// first-class error objects carried through evaluation as ordinary values.
pub mod parse_error;

pub use parse_error::ParseError;
