use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{
        scanner::Scanner,
        token::{
            core::{Associativity, Operator, Token},
            stack::TokenStack,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Converts an infix expression to postfix order with the shunting-yard
/// algorithm.
///
/// A parser owns its scanner and both working stacks, so every expression
/// gets fresh state. [`Parser::parse`] consumes the parser and hands the
/// output sequence to the caller.
pub struct Parser<'a> {
    scanner:   Scanner<'a>,
    operators: TokenStack,
    output:    TokenStack,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { scanner:   Scanner::new(source),
               operators: TokenStack::new(),
               output:    TokenStack::new(), }
    }

    /// Runs the conversion and returns the postfix sequence.
    ///
    /// Literals go straight to the output. An incoming operator first moves
    /// every stacked operator that binds tighter (or equally tight, if the
    /// incoming one is left-associative) to the output. Parentheses group,
    /// commas are ignored, and a reserved function must be followed by `(`;
    /// it is emitted after its closing parenthesis.
    ///
    /// # Errors
    /// - Any scanner error.
    /// - `ParseError::UnbalancedParentheses` for a `)` without a matching `(`
    ///   or a `(` that is never closed.
    /// - `ParseError::UnexpectedToken` for identifiers, or a function name
    ///   that is not followed by `(`.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::parser::Parser;
    ///
    /// let postfix = Parser::new("3 + 4 * 2").parse().unwrap();
    /// assert_eq!(postfix.to_string(), "3 4 2 * +");
    /// ```
    pub fn parse(mut self) -> ParseResult<TokenStack> {
        loop {
            let token = self.scanner.next_token()?;
            let offset = self.scanner.offset();

            match token {
                Token::EndOfInput => break,
                Token::Integer(_) | Token::Float(_) | Token::StringLiteral(_) => {
                    self.output.push(token);
                },
                Token::Operator(op) => self.push_operator(op)?,
                Token::LParen => self.operators.push(token),
                Token::RParen => self.close_paren(offset)?,
                // Argument separator; every function takes a single argument.
                Token::Comma => {},
                Token::Function(_) => self.open_call(token)?,
                Token::Identifier(_) => {
                    return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                             offset });
                },
            }
        }

        self.finish()
    }

    fn push_operator(&mut self, op: Operator) -> ParseResult<()> {
        let incoming = Token::Operator(op);

        while let Some(top) = self.operators.top()
              && *top != Token::LParen
              && Self::yields_to(top, &incoming)?
        {
            self.move_top_to_output();
        }

        self.operators.push(incoming);
        Ok(())
    }

    /// Whether the stacked operator `top` has to be emitted before `incoming`
    /// is pushed.
    fn yields_to(top: &Token, incoming: &Token) -> ParseResult<bool> {
        let top_precedence = top.precedence()?;
        let precedence = incoming.precedence()?;

        Ok(top_precedence > precedence
           || (top_precedence == precedence
               && incoming.associativity()? == Associativity::Left))
    }

    fn close_paren(&mut self, offset: usize) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                None => return Err(ParseError::UnbalancedParentheses { offset }),
                Some(Token::LParen) => break,
                Some(token) => self.output.push(token),
            }
        }

        if matches!(self.operators.top(), Some(Token::Function(_))) {
            self.move_top_to_output();
        }
        Ok(())
    }

    /// Stacks a function together with the `(` that has to follow it.
    fn open_call(&mut self, function: Token) -> ParseResult<()> {
        let next = self.scanner.next_token()?;
        if next != Token::LParen {
            return Err(ParseError::UnexpectedToken { token:  next.to_string(),
                                                     offset: self.scanner.offset(), });
        }

        self.operators.push(function);
        self.operators.push(next);
        Ok(())
    }

    fn move_top_to_output(&mut self) {
        if let Some(token) = self.operators.pop() {
            self.output.push(token);
        }
    }

    fn finish(mut self) -> ParseResult<TokenStack> {
        let offset = self.scanner.offset();

        while let Some(token) = self.operators.pop() {
            if token == Token::LParen {
                return Err(ParseError::UnbalancedParentheses { offset });
            }
            self.output.push(token);
        }

        debug!(postfix = %self.output, "converted to postfix");
        Ok(self.output)
    }
}
