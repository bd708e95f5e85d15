/// Arithmetic on numeric tokens.
///
/// Implements the six binary operators and the reserved functions, including
/// the promotion rules between integers and floats.
pub mod arithmetic;
/// The token type and its metadata.
///
/// Declares `Token`, the operators with their precedence and associativity,
/// the reserved function table and the display form of every token.
pub mod core;
/// The token stack.
///
/// A growable LIFO container of owned tokens, used by both the parser and the
/// evaluator.
pub mod stack;
