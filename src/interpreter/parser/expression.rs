use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser},
            precedence::{token_to_infix_operator, Precedence},
        },
    },
};

impl Parser<'_> {
    /// Parses an expression by precedence climbing.
    ///
    /// The prefix rule for the current token produces the initial left-hand
    /// expression; then, while the upcoming token binds tighter than
    /// `min_precedence`, the matching infix rule folds it onto the left-hand
    /// side. Binary operators parse their right-hand side at their own
    /// precedence, which makes chains of equal precedence left-associative.
    ///
    /// The cursor must be on the first token of the expression, and is left
    /// on its last token.
    pub(crate) fn parse_expression(&mut self, min_precedence: Precedence) -> ParseResult<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&Token::Semicolon) && min_precedence < self.peek_precedence() {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    /// Dispatches on everything an expression can start with.
    ///
    /// A token with no prefix rule is a diagnostic, not a crash: the error
    /// carries the token's rendering and the parser recovers at the next
    /// statement boundary.
    fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let token = self.cur_token.clone();
        match token {
            Some(Token::Identifier(name)) => Ok(Expr::Identifier { name }),
            Some(Token::Integer(value)) => Ok(Expr::IntegerLiteral { value }),
            Some(Token::Bool(value)) => Ok(Expr::BooleanLiteral { value }),
            Some(Token::Str(value)) => Ok(Expr::StringLiteral { value }),
            Some(Token::Bang) => self.parse_prefix_operator(PrefixOperator::Bang),
            Some(Token::Minus) => self.parse_prefix_operator(PrefixOperator::Minus),
            Some(Token::LParen) => self.parse_grouped(),
            Some(Token::If) => self.parse_if(),
            Some(Token::Function) => self.parse_function_literal(),
            Some(Token::LBracket) => self.parse_array_literal(),
            Some(Token::LBrace) => self.parse_hash_literal(),
            Some(Token::Illegal(text)) => {
                Err(ParseError::IllegalCharacter { text, line: self.cur_line })
            },
            Some(token) => Err(ParseError::NoPrefixParseFunction { token: token.to_string(),
                                                                   line:  self.cur_line, }),
            None => Err(ParseError::UnexpectedEndOfInput { line: self.cur_line }),
        }
    }

    /// Dispatches on the operator token sitting on the cursor, folding it
    /// onto the already-parsed left-hand expression.
    fn parse_infix(&mut self, left: Expr) -> ParseResult<Expr> {
        let token = self.cur_token.clone();
        match token {
            Some(Token::LParen) => self.parse_call(left),
            Some(Token::LBracket) => self.parse_index(left),
            Some(token) => match token_to_infix_operator(&token) {
                Some(op) => {
                    let precedence = self.cur_precedence();
                    self.next_token();
                    let right = self.parse_expression(precedence)?;

                    Ok(Expr::Infix { left: Box::new(left),
                                     op,
                                     right: Box::new(right) })
                },
                // Tokens without an infix rule have the lowest binding power,
                // so the climbing loop never lands here for them.
                None => Ok(left),
            },
            None => Ok(left),
        }
    }

    fn cur_precedence(&self) -> Precedence {
        self.cur_token.as_ref().map_or(Precedence::Lowest, Precedence::of)
    }

    fn peek_precedence(&self) -> Precedence {
        self.peek_token.as_ref().map_or(Precedence::Lowest, Precedence::of)
    }

    /// Parses a prefix operator application such as `!ok` or `-x`.
    ///
    /// The operand binds at prefix precedence: `-a * b` parses as
    /// `((-a) * b)`, not `-(a * b)`.
    fn parse_prefix_operator(&mut self, op: PrefixOperator) -> ParseResult<Expr> {
        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Prefix { op, operand: Box::new(operand) })
    }

    /// Parses a parenthesized grouping: the inner expression restarts at the
    /// lowest precedence and the closing `)` is required.
    fn parse_grouped(&mut self) -> ParseResult<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        Ok(expr)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    fn parse_if(&mut self) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;
        self.expect_peek(&Token::LBrace)?;

        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(&Token::Else) {
            self.next_token();
            self.expect_peek(&Token::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative })
    }

    /// Parses a function literal: `fn(<parameters>) { ... }`.
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        let parameters = self.parse_parameters()?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::Function { parameters, body })
    }

    /// Parses a comma-separated parameter name list up to the closing `)`.
    fn parse_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        parameters.push(self.expect_ident()?);
        while self.peek_is(&Token::Comma) {
            self.next_token();
            parameters.push(self.expect_ident()?);
        }
        self.expect_peek(&Token::RParen)?;

        Ok(parameters)
    }

    /// Parses a call expression; the callee is whatever expression the `(`
    /// was folded onto.
    fn parse_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let arguments = self.parse_expression_list(&Token::RParen)?;

        Ok(Expr::Call { callee: Box::new(callee), arguments })
    }

    /// Parses an array literal: `[<elements>]`.
    fn parse_array_literal(&mut self) -> ParseResult<Expr> {
        let elements = self.parse_expression_list(&Token::RBracket)?;

        Ok(Expr::Array { elements })
    }

    /// Parses a subscript expression; the container is whatever expression
    /// the `[` was folded onto.
    fn parse_index(&mut self, container: Expr) -> ParseResult<Expr> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RBracket)?;

        Ok(Expr::Index { container: Box::new(container),
                         index:     Box::new(index), })
    }

    /// Parses a hash literal: `{<key>: <value>, ...}`. Keys and values are
    /// arbitrary expressions.
    fn parse_hash_literal(&mut self) -> ParseResult<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(&Token::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(&Token::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(&Token::RBrace) {
                self.expect_peek(&Token::Comma)?;
            }
        }
        self.expect_peek(&Token::RBrace)?;

        Ok(Expr::Hash { pairs })
    }

    /// Parses a comma-separated expression list terminated by `end`.
    ///
    /// The cursor must be on the opening delimiter; on success it is left on
    /// `end`.
    fn parse_expression_list(&mut self, end: &Token) -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Ok(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.expect_peek(end)?;

        Ok(items)
    }
}
