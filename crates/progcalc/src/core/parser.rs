//! Tokenizer and recursive-descent parser for flat infix arithmetic
//!
//! The accepted language is deliberately small: decimal literals (with an
//! optional exponent), the words `Infinity` and `NaN`, the four binary
//! operators and unary signs. There are no parentheses and no functions.

use crate::core::{CalcError, CalcResult, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal (including `Infinity` and `NaN`)
    Number(f64),
    /// Operator; `+`/`-` may also act as a unary sign
    Operator(Operation),
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        if ch.is_ascii_digit() || ch == '.' {
            return self.read_number().map(Some);
        }
        if ch.is_ascii_alphabetic() {
            return self.read_word().map(Some);
        }
        if let Some(op) = Operation::from_char(ch) {
            self.advance();
            return Ok(Some(Token::Operator(op)));
        }

        Err(CalcError::UnexpectedChar {
            ch,
            offset: self.pos,
        })
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char(&self, skip: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(skip)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn skip_digits(&mut self) -> usize {
        let mut count = 0;
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            count += 1;
        }
        count
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;

        let mut digits = self.skip_digits();
        if self.current_char() == Some('.') {
            self.advance();
            digits += self.skip_digits();
        }

        let literal = &self.input[start..self.pos];
        if digits == 0 {
            return Err(CalcError::InvalidNumber(literal.to_string()));
        }

        // An exponent only counts when digits follow; "5e" is left for
        // read_word to reject.
        if matches!(self.current_char(), Some('e' | 'E')) {
            let sign_len = usize::from(matches!(self.peek_char(1), Some('+' | '-')));
            if self
                .peek_char(1 + sign_len)
                .is_some_and(|c| c.is_ascii_digit())
            {
                for _ in 0..=sign_len {
                    self.advance();
                }
                self.skip_digits();
            }
        }

        let literal = &self.input[start..self.pos];
        literal
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| CalcError::InvalidNumber(literal.to_string()))
    }

    fn read_word(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        match &self.input[start..self.pos] {
            "Infinity" => Ok(Token::Number(f64::INFINITY)),
            "NaN" => Ok(Token::Number(f64::NAN)),
            other => Err(CalcError::UnknownIdentifier(other.to_string())),
        }
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('+' | '-') unary | NUMBER
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let tokens = Tokenizer::new(trimmed).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses tokens into an AST, requiring every token to be consumed
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression()?;
        if let Some(extra) = self.current() {
            return Err(CalcError::UnexpectedToken(format!("{extra:?}")));
        }
        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(&Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            self.advance();
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(&Token::Operator(op @ (Operation::Multiply | Operation::Divide))) =
            self.current()
        {
            self.advance();
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(AstNode::number(n)),
            Some(Token::Operator(Operation::Subtract)) => Ok(AstNode::negate(self.parse_unary()?)),
            Some(Token::Operator(Operation::Add)) => self.parse_unary(),
            Some(token) => Err(CalcError::UnexpectedToken(format!("{token:?}"))),
            None => Err(CalcError::UnexpectedEnd),
        }
    }
}
