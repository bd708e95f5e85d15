/// Scanning and parsing errors.
///
/// Defines all error types that can occur while turning an expression into a
/// postfix sequence: unrecognized characters, malformed literals, unbalanced
/// parentheses and tokens the parser cannot place.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence, such as type mismatches, stack underflow or division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Exit code for malformed input (`EX_DATAERR`).
pub const EXIT_DATA_ERROR: u8 = 65;
/// Exit code for failures during evaluation (`EX_SOFTWARE`).
pub const EXIT_SOFTWARE_ERROR: u8 = 70;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error that aborts the evaluation of an expression.
pub enum CalcError {
    /// The expression could not be scanned or converted to postfix.
    Parse(ParseError),
    /// The postfix sequence could not be evaluated.
    Runtime(RuntimeError),
}

impl CalcError {
    /// Returns the process exit code reported for this error.
    ///
    /// Problems with the input itself map to `65`, everything that goes wrong
    /// while evaluating (or an internal contract violation) maps to `70`.
    ///
    /// # Example
    /// ```
    /// use calc::error::{CalcError, ParseError, RuntimeError};
    ///
    /// let err = CalcError::from(ParseError::UnbalancedParentheses { offset: 0 });
    /// assert_eq!(err.exit_code(), 65);
    ///
    /// let err = CalcError::from(RuntimeError::DivisionByZero);
    /// assert_eq!(err.exit_code(), 70);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(ParseError::UnsupportedOperator { .. }) | Self::Runtime(_) => {
                EXIT_SOFTWARE_ERROR
            },
            Self::Parse(_) => EXIT_DATA_ERROR,
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
