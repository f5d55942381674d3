/// Represents a runtime value produced by evaluation.
///
/// This enum models every object that can flow out of the evaluator:
/// ordinary data values (integers, booleans, strings, null) and the two
/// internal signal objects — a wrapped return value and a runtime error.
/// Signal objects are never user-visible data; they exist so that early
/// returns and failures can travel through nested evaluation as ordinary
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by boolean literals, comparisons (`<`, `==`, `!=`, etc.) and
    /// truthiness negation (`!`).
    Boolean(bool),
    /// A string value.
    Str(String),
    /// The null object: the result of a conditional without a taken branch,
    /// and the placeholder result of constructs the evaluator does not yet
    /// execute.
    Null,
    /// Wraps the value of a `return` statement while it bubbles out of nested
    /// blocks. Unwrapped only at the program boundary.
    ReturnValue(Box<Object>),
    /// A recoverable evaluation failure carrying a human-readable message.
    Error(String),
}

/// The boolean `true` object.
///
/// The three constants below are the process-wide shared instances of the
/// language: every `true`, `false`, and "no value" the evaluator produces is
/// one of them. They carry no interior state, so copying them per use is
/// free and equality stays purely structural.
pub const TRUE: Object = Object::Boolean(true);
/// The boolean `false` object.
pub const FALSE: Object = Object::Boolean(false);
/// The null object.
pub const NULL: Object = Object::Null;

impl Object {
    /// Returns the type tag of this object, as used in runtime error
    /// messages and for dispatch.
    ///
    /// # Examples
    /// ```
    /// use sprig::interpreter::object::Object;
    ///
    /// assert_eq!(Object::Integer(5).type_name(), "INTEGER");
    /// assert_eq!(Object::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::Error(_) => "ERROR",
        }
    }

    /// Returns `true` if the object is [`Integer`].
    ///
    /// [`Integer`]: Object::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the object is [`Error`].
    ///
    /// [`Error`]: Object::Error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        if value {
            TRUE
        } else {
            FALSE
        }
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl std::fmt::Display for Object {
    /// Renders the inspection string shown to users.
    ///
    /// Error objects render their message verbatim; a wrapped return value
    /// renders as its inner value.
    ///
    /// # Examples
    /// ```
    /// use sprig::interpreter::object::Object;
    ///
    /// assert_eq!(Object::Integer(5).to_string(), "5");
    /// assert_eq!(Object::Boolean(true).to_string(), "true");
    /// assert_eq!(Object::Null.to_string(), "null");
    /// assert_eq!(Object::Error("type mismatch: INTEGER + BOOLEAN".into()).to_string(),
    ///            "type mismatch: INTEGER + BOOLEAN");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::ReturnValue(inner) => write!(f, "{inner}"),
            Self::Error(message) => write!(f, "{message}"),
        }
    }
}
