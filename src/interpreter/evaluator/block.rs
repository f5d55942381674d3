use crate::{
    ast::{Block, Program},
    interpreter::{
        evaluator::core::eval_statement,
        object::{Object, NULL},
    },
};

/// Evaluates a program: the top-level statement sequence.
///
/// Statements run in order. A bubbled-up return value ends the program and is
/// unwrapped to its inner value here — the program boundary is where a
/// top-level `return` takes effect. An error object ends the program and is
/// returned as-is. Otherwise the result of the final statement is the result
/// of the program, and an empty program yields the null object.
///
/// # Examples
/// ```
/// use sprig::interpreter::{evaluator::block::eval_program, lexer::TokenStream,
///                          object::Object, parser::core::Parser};
///
/// let mut parser = Parser::new(TokenStream::new("return 10; 9;"));
/// let program = parser.parse_program();
///
/// assert_eq!(eval_program(&program), Object::Integer(10));
/// ```
#[must_use]
pub fn eval_program(program: &Program) -> Object {
    let mut result = NULL;

    for statement in &program.statements {
        match eval_statement(statement) {
            Object::ReturnValue(value) => return *value,
            error @ Object::Error(_) => return error,
            object => result = object,
        }
    }

    result
}

/// Evaluates a block: a nested statement sequence.
///
/// Statements run in order, stopping at the first return value or error
/// object. Unlike [`eval_program`], a return value leaves this function
/// still wrapped: a block only stops early and passes the signal up, because
/// the enclosing program (or, in a fuller language, a function call
/// boundary) is responsible for the actual unwrap. This is what makes a
/// `return` inside nested conditionals skip every remaining outer statement.
#[must_use]
pub fn eval_block(block: &Block) -> Object {
    let mut result = NULL;

    for statement in &block.statements {
        match eval_statement(statement) {
            signal @ (Object::ReturnValue(_) | Object::Error(_)) => return signal,
            object => result = object,
        }
    }

    result
}
