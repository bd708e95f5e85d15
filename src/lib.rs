//! # calc
//!
//! calc is a small arithmetic expression calculator written in Rust.
//! It scans an expression, converts it to postfix order with the shunting-yard
//! algorithm and evaluates the postfix sequence on an operand stack. Integers
//! and floats are both supported, with integer arithmetic kept exact until a
//! float takes part.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::{CalcError, ParseError},
    interpreter::{
        evaluator::Evaluator,
        parser::{ParseResult, Parser},
        scanner::Scanner,
        token::{core::Token, stack::TokenStack},
    },
};

/// Provides the error types for scanning, parsing and evaluation.
///
/// This module defines every error that can abort an expression, grouped into
/// problems with the input (`ParseError`) and problems while computing
/// (`RuntimeError`), plus `CalcError` which wraps both and knows the process
/// exit code for each.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches source offsets or postfix positions for context.
/// - Maps failures to stable exit codes.
pub mod error;
/// Implements the calculation pipeline.
///
/// This module ties together the token model, the scanner, the shunting-yard
/// parser and the postfix evaluator.
///
/// # Responsibilities
/// - Coordinates scanning, parsing and evaluation.
/// - Keeps every piece of mutable state local to one expression.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Truncate `f64` to `i64` without silent saturation.
pub mod util;

/// Evaluates an expression and returns its result.
///
/// Every call scans, parses and evaluates with fresh state, so calls are
/// independent of each other.
///
/// # Errors
/// Returns a `CalcError` if the expression cannot be scanned, parsed or
/// evaluated.
///
/// # Examples
/// ```
/// use calc::{evaluate, interpreter::token::core::Token};
///
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), Token::Integer(512));
/// assert_eq!(evaluate("3.0 / 2").unwrap().to_string(), "1.500000");
///
/// // An unclosed parenthesis is a parse error.
/// assert!(evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Token, CalcError> {
    let program = to_postfix(source)?;
    let result = Evaluator::new().evaluate(&program)?;
    debug!(source, %result, "expression evaluated");
    Ok(result)
}

/// Converts an expression to its postfix sequence without evaluating it.
///
/// # Errors
/// Returns a `ParseError` if the expression cannot be scanned or parsed.
///
/// # Examples
/// ```
/// use calc::to_postfix;
///
/// assert_eq!(to_postfix("(3 + 4) * 2").unwrap().to_string(), "3 4 + 2 *");
/// ```
pub fn to_postfix(source: &str) -> ParseResult<TokenStack> {
    Parser::new(source).parse()
}

/// Scans an expression into its tokens, without the trailing end-of-input
/// marker.
///
/// # Errors
/// Returns the first `ParseError` the scanner reports.
///
/// # Examples
/// ```
/// use calc::{interpreter::token::core::Token, tokenize};
///
/// let tokens = tokenize("sin(x)").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[2], Token::Identifier("x".into()));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    Scanner::new(source).collect()
}
