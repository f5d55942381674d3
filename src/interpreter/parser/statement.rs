use crate::{
    ast::{Block, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser},
            precedence::Precedence,
        },
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `let` declaration,
    /// - a `return` statement,
    /// - a bare expression, optionally terminated by `;`.
    ///
    /// The cursor must be on the first token of the statement, and is left on
    /// the last token of the statement (the `;` when one was written).
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cur_token {
            Some(Token::Let) => self.parse_let_statement(),
            Some(Token::Return) => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression> ;`.
    ///
    /// The bound value goes through the full expression parser, so anything
    /// an expression statement accepts is a valid binding value.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let name = self.expect_ident()?;
        self.expect_peek(&Token::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Let { name, value })
    }

    /// Parses `return ;` or `return <expression> ;`.
    ///
    /// The returned value is optional: a `return` immediately followed by a
    /// statement or block boundary returns no value.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let value = if self.peek_is(&Token::Semicolon)
                       || self.peek_is(&Token::RBrace)
                       || self.peek_token.is_none()
        {
            None
        } else {
            self.next_token();
            Some(self.parse_expression(Precedence::Lowest)?)
        };

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Return { value })
    }

    /// Parses a bare expression used as a statement, with an optional
    /// trailing `;`.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Expression { expr })
    }

    /// Parses a brace-delimited block of statements.
    ///
    /// The cursor must be on the opening `{`; on success it is left on the
    /// closing `}`. Reaching the end of input before the closing brace is a
    /// diagnostic pointing at the line the block was opened on.
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        let opening_line = self.cur_line;
        self.next_token();

        let mut statements = Vec::new();
        while !self.cur_is(&Token::RBrace) {
            if self.cur_token.is_none() {
                return Err(ParseError::UnclosedBlock { line: opening_line });
            }
            statements.push(self.parse_statement()?);
            self.next_token();
        }

        Ok(Block { statements })
    }
}
