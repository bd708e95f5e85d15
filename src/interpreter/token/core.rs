use crate::{error::ParseError, interpreter::parser::ParseResult};

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Exp,
}

/// Tie-break rule for operators of equal precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// A reserved function name recognized by the scanner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
}

/// Reserved words and the functions they stand for.
pub const RESERVED: [(&str, Function); 3] = [("sin", Function::Sin),
                                             ("cos", Function::Cos),
                                             ("tan", Function::Tan)];

impl Operator {
    /// Returns the binding strength of the operator: `+ -` bind at 2,
    /// `* / %` at 3 and `^` at 4.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Exp => 4,
        }
    }

    /// Only exponentiation is right-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod => Associativity::Left,
        }
    }

    /// The canonical symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Exp => "^",
        }
    }
}

impl Function {
    /// Looks a word up in the reserved word table.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::token::core::Function;
    ///
    /// assert_eq!(Function::from_name("cos"), Some(Function::Cos));
    /// assert_eq!(Function::from_name("cosh"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        RESERVED.iter().find(|(word, _)| *word == name).map(|(_, function)| *function)
    }

    /// The reserved word of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }
}

/// A single classified lexical unit.
///
/// Tokens flow through the whole pipeline: the scanner produces them, the
/// parser reorders them into postfix order and the evaluator consumes them.
/// Payloads live inside the variants, so a token's kind and its payload can
/// never disagree. String payloads are owned and move with the token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// The scanner reached the end of the expression.
    EndOfInput,
    /// A binary arithmetic operator.
    Operator(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// A name that is not a reserved word, such as `x`.
    Identifier(String),
    /// A quoted string, without its quotes.
    StringLiteral(String),
    /// An integer literal such as `42`.
    Integer(i64),
    /// A floating-point literal such as `3.14` or `3.`.
    Float(f64),
    /// A reserved function such as `sin`.
    Function(Function),
}

impl From<i64> for Token {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Token {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl Token {
    /// Returns `true` for integer and float literals.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns the precedence of an operator token.
    ///
    /// # Errors
    /// Returns `ParseError::UnsupportedOperator` if the token is not an
    /// operator. This indicates a bug in the caller, not bad input.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::token::core::{Operator, Token};
    ///
    /// assert_eq!(Token::Operator(Operator::Mul).precedence().unwrap(), 3);
    /// assert!(Token::LParen.precedence().is_err());
    /// ```
    pub fn precedence(&self) -> ParseResult<u8> {
        match self {
            Self::Operator(op) => Ok(op.precedence()),
            _ => Err(self.unsupported_operator()),
        }
    }

    /// Returns the associativity of an operator token.
    ///
    /// # Errors
    /// Returns `ParseError::UnsupportedOperator` if the token is not an
    /// operator.
    pub fn associativity(&self) -> ParseResult<Associativity> {
        match self {
            Self::Operator(op) => Ok(op.associativity()),
            _ => Err(self.unsupported_operator()),
        }
    }

    fn unsupported_operator(&self) -> ParseError {
        ParseError::UnsupportedOperator { token: self.to_string() }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "EOF"),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Identifier(s) | Self::StringLiteral(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            // Fixed notation with six decimals, like C's `%f`.
            Self::Float(r) => write!(f, "{r:.6}"),
            Self::Function(func) => write!(f, "{}", func.name()),
        }
    }
}
