use crate::interpreter::token::core::Token;

/// Number of tokens a fresh stack has room for before it has to grow.
pub const INITIAL_STACK_CAPACITY: usize = 64;

/// A growable last-in-first-out sequence of tokens.
///
/// The same type serves as the parser's operator stack, the parser's output
/// queue (push only) and the evaluator's operand stack. Tokens are stored in
/// push order, so iterating a stack walks it from the bottom to the top.
///
/// Capacity grows geometrically and never shrinks. Dropping the stack drops
/// every token it still holds, releasing their string payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStack {
    tokens: Vec<Token>,
}

impl Default for TokenStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStack {
    /// Creates an empty stack with room for [`INITIAL_STACK_CAPACITY`] tokens.
    #[must_use]
    pub fn new() -> Self {
        Self { tokens: Vec::with_capacity(INITIAL_STACK_CAPACITY) }
    }

    /// Pushes a token, moving it into the stack.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Removes and returns the top token, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Returns the top token without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Number of tokens on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the stack holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens the stack can hold before it has to grow.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The tokens in push order.
    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl FromIterator<Token> for TokenStack {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.tokens.extend(iter);
        stack
    }
}

impl IntoIterator for TokenStack {
    type IntoIter = std::vec::IntoIter<Token>;
    type Item = Token;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStack {
    type IntoIter = std::slice::Iter<'a, Token>;
    type Item = &'a Token;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Space separated tokens, bottom first. For a postfix sequence this is the
/// familiar reverse Polish notation, e.g. `3 4 2 * +`.
impl std::fmt::Display for TokenStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            write!(f, "{token}")?;
        }

        Ok(())
    }
}
