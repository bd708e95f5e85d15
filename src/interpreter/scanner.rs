use logos::Logos;
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        parser::ParseResult,
        token::core::{Function, Operator, Token},
    },
};

/// Longest identifier, in bytes, the scanner accepts.
pub const MAX_IDENTIFIER_LENGTH: usize = 32;

/// Why the lexer could not produce a lexeme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanError {
    /// No token starts with the current character.
    #[default]
    UnrecognizedCharacter,
    /// An identifier exceeded [`MAX_IDENTIFIER_LENGTH`].
    IdentifierTooLong,
    /// An integer literal does not fit into an `i64`.
    LiteralTooLarge,
}

/// Raw lexemes as matched in the source text.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = ScanError)]
#[logos(skip r"[ \t\n\r\f\x0B]+")]
enum Lexeme {
    /// `3.14` or `3.`
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// `42`
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `"text"`. A missing closing quote ends the string at end of input.
    #[regex(r#""[^"]*"?"#, parse_string, allow_greedy = true)]
    Str(String),
    /// Identifiers and reserved words.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", parse_word)]
    Word(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

fn parse_float(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Result<i64, ScanError> {
    lex.slice().parse().map_err(|_| ScanError::LiteralTooLarge)
}

fn parse_string(lex: &logos::Lexer<Lexeme>) -> String {
    let body = &lex.slice()[1..];
    body.strip_suffix('"').unwrap_or(body).to_string()
}

fn parse_word(lex: &logos::Lexer<Lexeme>) -> Result<String, ScanError> {
    let word = lex.slice();
    if word.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ScanError::IdentifierTooLong);
    }
    Ok(word.to_string())
}

impl Lexeme {
    fn into_token(self) -> Token {
        match self {
            Self::Float(x) => Token::Float(x),
            Self::Integer(n) => Token::Integer(n),
            Self::Str(s) => Token::StringLiteral(s),
            Self::Word(word) => {
                Function::from_name(&word).map_or(Token::Identifier(word), Token::Function)
            },
            Self::Plus => Token::Operator(Operator::Add),
            Self::Minus => Token::Operator(Operator::Sub),
            Self::Star => Token::Operator(Operator::Mul),
            Self::Slash => Token::Operator(Operator::Div),
            Self::Percent => Token::Operator(Operator::Mod),
            Self::Caret => Token::Operator(Operator::Exp),
            Self::LParen => Token::LParen,
            Self::RParen => Token::RParen,
            Self::Comma => Token::Comma,
        }
    }
}

/// Turns an expression into a lazy sequence of tokens.
///
/// A scanner is created for exactly one expression and only moves forward.
/// The expression ends at its first NUL character, if it has one; nothing
/// after it is ever looked at.
pub struct Scanner<'a> {
    lexer:  logos::Lexer<'a, Lexeme>,
    offset: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let source = source.find('\0').map_or(source, |end| &source[..end]);
        Self { lexer:  Lexeme::lexer(source),
               offset: 0, }
    }

    /// Byte offset of the most recently scanned token, or the length of the
    /// input once the end has been reached.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Scans the next token.
    ///
    /// Whitespace is skipped. Once the input is exhausted every further call
    /// returns `Token::EndOfInput`.
    ///
    /// # Errors
    /// - `ParseError::ScanFault` for a character no token starts with.
    /// - `ParseError::IdentifierTooLong` for identifiers longer than
    ///   [`MAX_IDENTIFIER_LENGTH`].
    /// - `ParseError::LiteralTooLarge` for integers outside the `i64` range.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::{
    ///     scanner::Scanner,
    ///     token::core::{Operator, Token},
    /// };
    ///
    /// let mut scanner = Scanner::new("2 * 3.5");
    /// assert_eq!(scanner.next_token().unwrap(), Token::Integer(2));
    /// assert_eq!(scanner.next_token().unwrap(), Token::Operator(Operator::Mul));
    /// assert_eq!(scanner.next_token().unwrap(), Token::Float(3.5));
    /// assert_eq!(scanner.next_token().unwrap(), Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> ParseResult<Token> {
        let Some(lexeme) = self.lexer.next() else {
            self.offset = self.lexer.source().len();
            return Ok(Token::EndOfInput);
        };

        self.offset = self.lexer.span().start;
        let offset = self.offset;

        let token = match lexeme {
            Ok(lexeme) => lexeme.into_token(),
            Err(e) => {
                let text = self.lexer.slice().to_string();
                return Err(match e {
                               ScanError::UnrecognizedCharacter => {
                                   ParseError::ScanFault { text, offset }
                               },
                               ScanError::IdentifierTooLong => {
                                   ParseError::IdentifierTooLong { name: text, offset }
                               },
                               ScanError::LiteralTooLarge => {
                                   ParseError::LiteralTooLarge { literal: text, offset }
                               },
                           });
            },
        };

        trace!(offset, %token, "scanned token");
        Ok(token)
    }
}

/// Yields tokens up to, but not including, `Token::EndOfInput`.
impl Iterator for Scanner<'_> {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token::EndOfInput) => None,
            result => Some(result),
        }
    }
}
