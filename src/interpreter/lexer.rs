use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// String literal tokens, such as `"hello"`. The quotes are stripped.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// `let`
    #[token("let")]
    Let,
    /// `fn`
    #[token("fn")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// Newlines are skipped but counted for diagnostics.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Anything the lexer does not recognize, including integer literals too
    /// large for `i64`. Carries the offending text.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "'{value}'"),
            Self::Bool(value) => write!(f, "'{value}'"),
            Self::Str(value) => write!(f, "'\"{value}\"'"),
            Self::Let => write!(f, "'let'"),
            Self::Function => write!(f, "'fn'"),
            Self::Return => write!(f, "'return'"),
            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::Identifier(name) => write!(f, "'{name}'"),
            Self::Assign => write!(f, "'='"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Bang => write!(f, "'!'"),
            Self::Asterisk => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::Comma => write!(f, "','"),
            Self::Semicolon => write!(f, "';'"),
            Self::Colon => write!(f, "':'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Comment | Self::NewLine | Self::Ignored => write!(f, "''"),
            Self::Illegal(text) => write!(f, "'{text}'"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// A lazily produced stream of tokens with their source lines.
///
/// `TokenStream` is the seam between the lexer and the parser: tokens come
/// out strictly left to right, one at a time, and once the input is exhausted
/// every further call keeps reporting the end of input. The parser drives it
/// through a cursor holding the current token and one token of lookahead.
///
/// # Examples
/// ```
/// use sprig::interpreter::lexer::{Token, TokenStream};
///
/// let mut tokens = TokenStream::new("let x");
///
/// assert_eq!(tokens.next_token(), (Some(Token::Let), 1));
/// assert_eq!(tokens.next_token(), (Some(Token::Identifier("x".to_string())), 1));
///
/// // The end-of-input sentinel repeats forever.
/// assert_eq!(tokens.next_token(), (None, 1));
/// assert_eq!(tokens.next_token(), (None, 1));
/// ```
pub struct TokenStream<'src> {
    lexer: logos::Lexer<'src, Token>,
}

impl<'src> TokenStream<'src> {
    /// Creates a token stream over the given source text, with line counting
    /// starting at 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Produces the next token and the line it starts on.
    ///
    /// Returns `(None, line)` once the input is exhausted, and keeps doing so
    /// on every subsequent call. Input the lexer cannot make sense of is
    /// returned as [`Token::Illegal`] rather than an error, so the stream
    /// itself never fails.
    pub fn next_token(&mut self) -> (Option<Token>, usize) {
        match self.lexer.next() {
            Some(Ok(token)) => (Some(token), self.lexer.extras.line),
            Some(Err(())) => {
                (Some(Token::Illegal(self.lexer.slice().to_string())), self.lexer.extras.line)
            },
            None => (None, self.lexer.extras.line),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
/// Strips the surrounding quotes from a string literal token.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
