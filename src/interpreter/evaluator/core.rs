use crate::{
    ast::{Block, Expr, Statement},
    interpreter::{
        evaluator::{
            binary::eval_infix_expression,
            block::eval_block,
            unary::eval_prefix_expression,
            utils::{is_error, is_truthy, native_bool},
        },
        object::{Object, NULL},
    },
};

/// Evaluates a single expression into an object.
///
/// This is the evaluator's dispatch point: every expression kind is matched
/// exhaustively, so adding a node variant forces this site to be revisited.
/// Sub-evaluations are checked after every step, and an error object is
/// forwarded unchanged the moment one appears.
///
/// Identifiers, function literals, calls, arrays, subscripts, and hash
/// literals parse into the AST but evaluate to the null object until an
/// environment exists.
#[must_use]
pub fn eval_expression(expr: &Expr) -> Object {
    match expr {
        Expr::IntegerLiteral { value } => Object::Integer(*value),
        Expr::BooleanLiteral { value } => native_bool(*value),
        Expr::StringLiteral { value } => Object::Str(value.clone()),
        Expr::Prefix { op, operand } => {
            let operand = eval_expression(operand);
            if is_error(&operand) {
                return operand;
            }
            eval_prefix_expression(*op, &operand)
        },
        Expr::Infix { left, op, right } => {
            let left = eval_expression(left);
            if is_error(&left) {
                return left;
            }
            let right = eval_expression(right);
            if is_error(&right) {
                return right;
            }
            eval_infix_expression(*op, left, right)
        },
        Expr::If { condition, consequence, alternative } => {
            eval_if_expression(condition, consequence, alternative.as_ref())
        },
        Expr::Identifier { .. }
        | Expr::Function { .. }
        | Expr::Call { .. }
        | Expr::Array { .. }
        | Expr::Index { .. }
        | Expr::Hash { .. } => NULL,
    }
}

/// Evaluates a single statement into an object.
///
/// A `let` statement evaluates to the null object for now: binding requires
/// an environment, which is outside this evaluator's scope.
#[must_use]
pub fn eval_statement(statement: &Statement) -> Object {
    match statement {
        Statement::Expression { expr } => eval_expression(expr),
        Statement::Return { value } => eval_return_statement(value.as_ref()),
        Statement::Let { .. } => NULL,
    }
}

/// Evaluates a `return` statement by wrapping its value.
///
/// The wrapping is what lets the return travel through enclosing blocks:
/// every block forwards the wrapped object untouched, and only the program
/// boundary unwraps it. A bare `return;` wraps the null object. An error in
/// the returned expression is forwarded unwrapped.
fn eval_return_statement(value: Option<&Expr>) -> Object {
    let value = match value {
        Some(expr) => eval_expression(expr),
        None => NULL,
    };
    if is_error(&value) {
        return value;
    }

    Object::ReturnValue(Box::new(value))
}

/// Evaluates a conditional expression.
///
/// The condition is evaluated first and checked for an error object. A
/// truthy condition selects the consequence block, a falsy one the
/// alternative; a falsy condition without an alternative yields the null
/// object.
fn eval_if_expression(condition: &Expr, consequence: &Block, alternative: Option<&Block>) -> Object {
    let condition = eval_expression(condition);
    if is_error(&condition) {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block(consequence)
    } else if let Some(alternative) = alternative {
        eval_block(alternative)
    } else {
        NULL
    }
}
