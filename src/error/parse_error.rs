#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning or parsing an
/// expression.
pub enum ParseError {
    /// Found a character that does not start any token.
    ScanFault {
        /// The unrecognized text.
        text:   String,
        /// Byte offset of the text in the expression.
        offset: usize,
    },
    /// An identifier exceeded the maximum identifier length.
    IdentifierTooLong {
        /// The identifier as written.
        name:   String,
        /// Byte offset of the identifier in the expression.
        offset: usize,
    },
    /// An integer literal does not fit into a 64 bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal in the expression.
        offset:  usize,
    },
    /// A `(` was never closed, or a `)` has no matching `(`.
    UnbalancedParentheses {
        /// Byte offset of the offending parenthesis.
        offset: usize,
    },
    /// Found a token the parser cannot place into the postfix sequence.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Byte offset of the token in the expression.
        offset: usize,
    },
    /// Asked for the precedence or associativity of a token that is not an
    /// operator.
    UnsupportedOperator {
        /// The token that was asked about.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScanFault { text, offset } => {
                write!(f, "Error at offset {offset}: Unrecognized character '{text}'.")
            },
            Self::IdentifierTooLong { name, offset } => write!(f,
                                                               "Error at offset {offset}: Identifier '{name}' is longer than {} characters.",
                                                               crate::interpreter::scanner::MAX_IDENTIFIER_LENGTH),
            Self::LiteralTooLarge { literal, offset } => {
                write!(f, "Error at offset {offset}: Literal {literal} is too large.")
            },
            Self::UnbalancedParentheses { offset } => {
                write!(f, "Error at offset {offset}: Unbalanced parentheses.")
            },
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Error at offset {offset}: Unexpected token: {token}.")
            },
            Self::UnsupportedOperator { token } => {
                write!(f, "Internal error: '{token}' is not an operator.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
