use std::fmt;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all types of expressions, from literals and identifiers to
/// operator applications, conditionals, function literals, calls, arrays,
/// indexing, and hash literals. Each variant models a distinct syntactic
/// construct. Nodes are immutable once built: the evaluator only ever reads
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a name, such as `x` or `add`.
    Identifier {
        /// The name being referenced.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
    },
    /// A boolean literal value: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// A string literal, without its surrounding quotes.
    StringLiteral {
        /// The literal text.
        value: String,
    },
    /// A prefix operator applied to a single operand, such as `!ok` or `-x`.
    Prefix {
        /// The prefix operator.
        op:      PrefixOperator,
        /// The operand expression.
        operand: Box<Expr>,
    },
    /// A binary operator applied to two operands, such as `a + b`.
    Infix {
        /// Left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Expr>,
    },
    /// Conditional expression with a mandatory consequence block and an
    /// optional `else` block.
    If {
        /// The condition expression.
        condition:   Box<Expr>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated when the condition is falsy, if present.
        alternative: Option<Block>,
    },
    /// Function literal: parameter names and a body block.
    Function {
        /// The parameter names.
        parameters: Vec<String>,
        /// The body block.
        body:       Block,
    },
    /// Call expression: a callee applied to argument expressions.
    Call {
        /// The expression being called.
        callee:    Box<Expr>,
        /// The argument expressions, in source order.
        arguments: Vec<Expr>,
    },
    /// Array literal expression.
    Array {
        /// Elements of the array, in source order.
        elements: Vec<Expr>,
    },
    /// Subscript expression, such as `items[0]`.
    Index {
        /// The expression being indexed.
        container: Box<Expr>,
        /// The index expression.
        index:     Box<Expr>,
    },
    /// Hash literal expression. Pair order is preserved from the source but
    /// carries no meaning.
    Hash {
        /// Key and value expression pairs.
        pairs: Vec<(Expr, Expr)>,
    },
}

/// A sequence of statements enclosed in braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The statements inside the block, in source order.
    pub statements: Vec<Statement>,
}

/// A complete parsed program: the root of the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// A single statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A binding declaration: `let <name> = <value>;`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value expression.
        value: Expr,
    },
    /// An early return: `return;` or `return <value>;`.
    Return {
        /// The returned expression, if one was written.
        value: Option<Expr>,
    },
    /// A bare expression used as a statement.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Truthiness negation (`!x`).
    Bang,
    /// Arithmetic negation (`-x`).
    Minus,
}

/// Represents an infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Bang => "!",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Expr {
    /// Renders the canonical textual form of the expression, with explicit
    /// parenthesization of prefix and infix applications.
    ///
    /// # Examples
    /// ```
    /// use sprig::ast::{Expr, InfixOperator, PrefixOperator};
    ///
    /// let negated = Expr::Prefix { op:      PrefixOperator::Minus,
    ///                              operand: Box::new(Expr::Identifier { name: "a".into() }), };
    /// let product = Expr::Infix { left:  Box::new(negated),
    ///                             op:    InfixOperator::Mul,
    ///                             right: Box::new(Expr::Identifier { name: "b".into() }), };
    ///
    /// assert_eq!(product.to_string(), "((-a) * b)");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "\"{value}\""),
            Self::Prefix { op, operand } => write!(f, "({op}{operand})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition, consequence, alternative } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { callee, arguments } => write!(f, "{callee}({})", join(arguments)),
            Self::Array { elements } => write!(f, "[{}]", join(elements)),
            Self::Index { container, index } => write!(f, "({container}[{index}])"),
            Self::Hash { pairs } => {
                let rendered: Vec<String> =
                    pairs.iter().map(|(key, value)| format!("{key}: {value}")).collect();
                write!(f, "{{{}}}", rendered.join(", "))
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value) } => write!(f, "return {value};"),
            Self::Return { value: None } => write!(f, "return;"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for statement in &self.statements {
            write!(f, " {statement}")?;
        }
        write!(f, " }}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// Joins expression renderings with `", "`, the shared layout of argument and
/// element lists.
fn join(exprs: &[Expr]) -> String {
    exprs.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
