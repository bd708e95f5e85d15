/// The evaluator module executes postfix sequences.
///
/// The evaluator walks a postfix sequence from front to back, keeping
/// intermediate results on an operand stack, and collapses it to a single
/// token.
///
/// # Responsibilities
/// - Applies operators and reserved functions in postfix order.
/// - Reports stack underflow and malformed sequences.
pub mod evaluator;
/// The parser module converts infix token streams to postfix order.
///
/// The parser implements the shunting-yard algorithm on top of the scanner,
/// driven by the precedence and associativity of each operator.
///
/// # Responsibilities
/// - Reorders tokens into postfix (reverse Polish) order.
/// - Detects unbalanced parentheses and misplaced tokens.
pub mod parser;
/// The scanner module tokenizes expressions.
///
/// The scanner reads the raw expression and produces tokens one at a time:
/// numbers, strings, identifiers, reserved words, operators and punctuation.
///
/// # Responsibilities
/// - Skips whitespace and classifies integer and float literals.
/// - Maps reserved words to functions.
/// - Reports characters and literals it cannot scan.
pub mod scanner;
/// The token module defines the data that flows through the pipeline.
///
/// # Responsibilities
/// - Declares `Token` with its operator metadata and display form.
/// - Implements arithmetic with integer/float promotion.
/// - Provides the token stack shared by parser and evaluator.
pub mod token;
