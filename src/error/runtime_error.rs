#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An arithmetic operation received a non-numeric operand.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// An operator needed more operands than the stack held.
    StackUnderflow {
        /// The operator or function being applied.
        instruction: String,
        /// Position of the instruction in the postfix sequence.
        index:       usize,
    },
    /// The operand stack did not hold exactly one value after evaluation.
    MalformedProgram {
        /// How many values were left on the stack.
        remaining: usize,
    },
    /// A token reached the evaluator that it cannot execute.
    UnsupportedInstruction {
        /// The token encountered.
        token: String,
        /// Position of the token in the postfix sequence.
        index: usize,
    },
    /// Integer division or remainder by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed, or a float could not be narrowed to an
    /// integer.
    Overflow {
        /// The operation that overflowed.
        operation: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { details } => write!(f, "Type error: {details}."),
            Self::StackUnderflow { instruction, index } => write!(f,
                                                                  "Error at instruction {index}: Not enough operands for '{instruction}'."),
            Self::MalformedProgram { remaining } => write!(f,
                                                           "Malformed expression: expected exactly one result but {remaining} values remain."),
            Self::UnsupportedInstruction { token, index } => {
                write!(f, "Error at instruction {index}: Cannot evaluate '{token}'.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow { operation } => {
                write!(f, "Integer overflow while trying to compute {operation}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
