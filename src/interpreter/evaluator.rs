use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::token::{
        arithmetic::{apply, apply_function},
        core::Token,
        stack::TokenStack,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix sequence with an operand stack.
///
/// An evaluator starts with an empty operand stack and is consumed by
/// [`Evaluator::evaluate`], so leftovers from one expression can never leak
/// into the next.
#[derive(Debug, Default)]
pub struct Evaluator {
    operands: TokenStack,
}

impl Evaluator {
    /// Creates an evaluator with an empty operand stack.
    #[must_use]
    pub fn new() -> Self {
        Self { operands: TokenStack::new() }
    }

    /// Walks `program` front to back and returns its single result.
    ///
    /// Numbers are pushed. An operator pops its right operand, then its left
    /// operand, and pushes the result. A function pops its only argument.
    ///
    /// # Errors
    /// - `RuntimeError::StackUnderflow` if an operator or function lacks
    ///   operands.
    /// - `RuntimeError::UnsupportedInstruction` for anything that is not a
    ///   number, operator or function (strings, identifiers, punctuation).
    /// - `RuntimeError::MalformedProgram` if zero or several values remain.
    /// - Any arithmetic error.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::{evaluator::Evaluator, parser::Parser, token::core::Token};
    ///
    /// let program = Parser::new("(3 + 4) * 2").parse().unwrap();
    /// assert_eq!(Evaluator::new().evaluate(&program).unwrap(), Token::Integer(14));
    /// ```
    pub fn evaluate(mut self, program: &TokenStack) -> EvalResult<Token> {
        for (index, instruction) in program.iter().enumerate() {
            match instruction {
                Token::Integer(_) | Token::Float(_) => self.operands.push(instruction.clone()),
                Token::Operator(op) => {
                    let right = self.pop_operand(instruction, index)?;
                    let left = self.pop_operand(instruction, index)?;
                    let result = apply(*op, &left, &right)?;
                    trace!(index, %left, %right, %result, "applied {}", op.symbol());
                    self.operands.push(result);
                },
                Token::Function(function) => {
                    let arg = self.pop_operand(instruction, index)?;
                    let result = apply_function(*function, &arg)?;
                    trace!(index, %arg, %result, "applied {}", function.name());
                    self.operands.push(result);
                },
                Token::EndOfInput
                | Token::LParen
                | Token::RParen
                | Token::Comma
                | Token::Identifier(_)
                | Token::StringLiteral(_) => {
                    return Err(RuntimeError::UnsupportedInstruction { token: instruction.to_string(),
                                                                      index });
                },
            }
        }

        if self.operands.len() != 1 {
            return Err(RuntimeError::MalformedProgram { remaining: self.operands.len() });
        }
        let result = self.operands
                         .pop()
                         .ok_or(RuntimeError::MalformedProgram { remaining: 0 })?;
        debug!(%result, "evaluated");
        Ok(result)
    }

    fn pop_operand(&mut self, instruction: &Token, index: usize) -> EvalResult<Token> {
        self.operands
            .pop()
            .ok_or_else(|| RuntimeError::StackUnderflow { instruction: instruction.to_string(),
                                                          index })
    }
}
