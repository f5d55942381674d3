use crate::{ast::InfixOperator, interpreter::lexer::Token};

/// Binding power of an upcoming token, ordered from loosest to tightest.
///
/// The parser folds infix rules onto the left-hand expression only while the
/// upcoming token binds tighter than the level it was invoked at; this single
/// comparison is what produces correct nesting without backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that is not an operator.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `!` and `-`
    Prefix,
    /// The `(` of a call expression.
    Call,
    /// The `[` of a subscript expression.
    Index,
}

impl Precedence {
    /// Looks up the binding power of a token.
    ///
    /// Tokens that never introduce an infix construct map to
    /// [`Precedence::Lowest`], which keeps them from binding at all.
    ///
    /// # Examples
    /// ```
    /// use sprig::interpreter::{lexer::Token, parser::precedence::Precedence};
    ///
    /// assert!(Precedence::of(&Token::Asterisk) > Precedence::of(&Token::Plus));
    /// assert_eq!(Precedence::of(&Token::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(token: &Token) -> Self {
        match token {
            Token::EqualEqual | Token::BangEqual => Self::Equals,
            Token::Less | Token::Greater => Self::LessGreater,
            Token::Plus | Token::Minus => Self::Sum,
            Token::Asterisk | Token::Slash => Self::Product,
            Token::LParen => Self::Call,
            Token::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// Maps a token to its corresponding infix operator.
///
/// Returns `Some(InfixOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `<`, `>`, `==`, `!=`). Returns `None` for all other
/// tokens, including `(` and `[`, which introduce call and subscript
/// expressions instead of operator applications.
///
/// # Examples
/// ```
/// use sprig::{ast::InfixOperator,
///             interpreter::{lexer::Token, parser::precedence::token_to_infix_operator}};
///
/// assert_eq!(token_to_infix_operator(&Token::Plus), Some(InfixOperator::Add));
/// assert_eq!(token_to_infix_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Asterisk => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::EqualEqual => Some(InfixOperator::Equal),
        Token::BangEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}
