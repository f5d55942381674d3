use crate::{
    ast::InfixOperator,
    interpreter::{
        evaluator::utils::{native_bool, new_error},
        object::{Object, NULL},
    },
};

/// Evaluates an infix operator applied to two already-evaluated operands.
///
/// Dispatch order matters and is part of the language:
/// 1. two integers go to integer arithmetic and comparison;
/// 2. `==` and `!=` compare any remaining pair of objects, so mixed-type
///    equality is `false` rather than a type mismatch;
/// 3. operands of different types are a `type mismatch` error;
/// 4. anything else is an `unknown operator` error.
///
/// The caller has verified that neither operand is an error object.
#[must_use]
pub fn eval_infix_expression(op: InfixOperator, left: Object, right: Object) -> Object {
    match (left, right) {
        (Object::Integer(left), Object::Integer(right)) => {
            eval_integer_infix_expression(op, left, right)
        },
        (left, right) => match op {
            InfixOperator::Equal => native_bool(objects_equal(&left, &right)),
            InfixOperator::NotEqual => native_bool(!objects_equal(&left, &right)),
            _ if left.type_name() != right.type_name() => {
                new_error(format!("type mismatch: {} {op} {}",
                                  left.type_name(),
                                  right.type_name()))
            },
            _ => new_error(format!("unknown operator: {} {op} {}",
                                   left.type_name(),
                                   right.type_name())),
        },
    }
}

/// Integer arithmetic and comparison on native values.
///
/// Arithmetic is checked: overflow produces an error object rather than a
/// panic. Division by zero yields the null object, not an error; the test
/// suite pins that behavior deliberately.
fn eval_integer_infix_expression(op: InfixOperator, left: i64, right: i64) -> Object {
    match op {
        InfixOperator::Add => integer_result(left.checked_add(right), left, op, right),
        InfixOperator::Sub => integer_result(left.checked_sub(right), left, op, right),
        InfixOperator::Mul => integer_result(left.checked_mul(right), left, op, right),
        InfixOperator::Div if right == 0 => NULL,
        InfixOperator::Div => integer_result(left.checked_div(right), left, op, right),
        InfixOperator::Less => native_bool(left < right),
        InfixOperator::Greater => native_bool(left > right),
        InfixOperator::Equal => native_bool(left == right),
        InfixOperator::NotEqual => native_bool(left != right),
    }
}

/// Wraps a checked arithmetic result, reporting overflow as an error object.
fn integer_result(result: Option<i64>, left: i64, op: InfixOperator, right: i64) -> Object {
    match result {
        Some(value) => Object::Integer(value),
        None => new_error(format!("integer overflow: {left} {op} {right}")),
    }
}

/// Type-specific equality for non-integer operand pairs.
///
/// Booleans and strings compare by value, null equals null, and any pair of
/// differing types is unequal. Integer pairs never reach this function; they
/// are compared natively by the integer dispatch.
fn objects_equal(left: &Object, right: &Object) -> bool {
    match (left, right) {
        (Object::Boolean(left), Object::Boolean(right)) => left == right,
        (Object::Str(left), Object::Str(right)) => left == right,
        (Object::Null, Object::Null) => true,
        _ => false,
    }
}
