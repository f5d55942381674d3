use crate::interpreter::object::{Object, FALSE, TRUE};

/// The truthiness rule used by conditions and `!`.
///
/// The null object and `false` are falsy; every other object is truthy,
/// including `0` and the empty string.
///
/// # Examples
/// ```
/// use sprig::interpreter::{evaluator::utils::is_truthy, object::Object};
///
/// assert!(is_truthy(&Object::Integer(0)));
/// assert!(!is_truthy(&Object::Boolean(false)));
/// assert!(!is_truthy(&Object::Null));
/// ```
#[must_use]
pub const fn is_truthy(object: &Object) -> bool {
    match object {
        Object::Null => false,
        Object::Boolean(value) => *value,
        _ => true,
    }
}

/// Maps a native boolean onto the shared boolean objects.
#[must_use]
pub const fn native_bool(value: bool) -> Object {
    if value {
        TRUE
    } else {
        FALSE
    }
}

/// Whether an object is an error signal. Checked after every sub-evaluation
/// so that errors short-circuit the enclosing evaluation immediately.
#[must_use]
pub const fn is_error(object: &Object) -> bool {
    object.is_error()
}

/// Builds an error object from a rendered message.
#[must_use]
pub fn new_error(message: String) -> Object {
    Object::Error(message)
}
