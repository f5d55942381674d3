use crate::{
    ast::PrefixOperator,
    interpreter::{
        evaluator::utils::{is_truthy, native_bool, new_error},
        object::Object,
    },
};

/// Evaluates a prefix operator applied to an already-evaluated operand.
///
/// The caller has verified the operand is not an error object.
#[must_use]
pub fn eval_prefix_expression(op: PrefixOperator, operand: &Object) -> Object {
    match op {
        PrefixOperator::Bang => eval_bang_expression(operand),
        PrefixOperator::Minus => eval_minus_expression(operand),
    }
}

/// Truthiness negation: the null object and `false` negate to `true`,
/// everything else — including zero — negates to `false`.
fn eval_bang_expression(operand: &Object) -> Object {
    native_bool(!is_truthy(operand))
}

/// Arithmetic negation, defined for integers only.
///
/// Negating any other object type produces an error object, and negating a
/// value with no positive counterpart reports an overflow instead of
/// wrapping.
fn eval_minus_expression(operand: &Object) -> Object {
    match operand {
        Object::Integer(value) => match value.checked_neg() {
            Some(negated) => Object::Integer(negated),
            None => new_error(format!("integer overflow: -{value}")),
        },
        other => new_error(format!("unknown operator: -{}", other.type_name())),
    }
}
