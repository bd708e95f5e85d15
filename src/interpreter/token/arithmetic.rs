//! Arithmetic on numeric tokens.
//!
//! Two integers produce an integer. As soon as one operand is a float, both
//! are widened and the result is a float. Modulo is the exception: float
//! operands are truncated to integers and the integer remainder is returned,
//! so `3 % 2.5` is `1`.

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::EvalResult,
        token::core::{Function, Operator, Token},
    },
    util::num::f64_to_i64_truncated,
};

/// Both operands of a binary operation, after integer/float unification.
enum Operands {
    Integers(i64, i64),
    Floats(f64, f64),
}

fn type_mismatch(op: Operator, left: &Token, right: &Token) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("Cannot use {} on {left} and {right}",
                                                  op.symbol()) }
}

fn overflow(op: Operator, a: i64, b: i64) -> RuntimeError {
    RuntimeError::Overflow { operation: format!("{a} {} {b}", op.symbol()) }
}

/// Converts an integer operand to a float, rounding to the nearest `f64`
/// above 2^53.
#[allow(clippy::cast_precision_loss)]
fn widen(n: i64) -> f64 {
    n as f64
}

fn operands(op: Operator, left: &Token, right: &Token) -> EvalResult<Operands> {
    match (left, right) {
        (Token::Integer(a), Token::Integer(b)) => Ok(Operands::Integers(*a, *b)),
        (Token::Integer(a), Token::Float(b)) => Ok(Operands::Floats(widen(*a), *b)),
        (Token::Float(a), Token::Integer(b)) => Ok(Operands::Floats(*a, widen(*b))),
        (Token::Float(a), Token::Float(b)) => Ok(Operands::Floats(*a, *b)),
        _ => Err(type_mismatch(op, left, right)),
    }
}

/// Applies a binary operator to two numeric tokens.
///
/// `left` is the operand written before the operator.
///
/// # Errors
/// Returns a `RuntimeError` if an operand is not numeric or the integer
/// computation fails.
///
/// # Example
/// ```
/// use calc::interpreter::token::{
///     arithmetic::apply,
///     core::{Operator, Token},
/// };
///
/// let result = apply(Operator::Sub, &Token::Integer(7), &Token::Float(0.5)).unwrap();
/// assert_eq!(result, Token::Float(6.5));
/// ```
pub fn apply(op: Operator, left: &Token, right: &Token) -> EvalResult<Token> {
    match op {
        Operator::Add => add(left, right),
        Operator::Sub => sub(left, right),
        Operator::Mul => mul(left, right),
        Operator::Div => div(left, right),
        Operator::Mod => modulo(left, right),
        Operator::Exp => exp(left, right),
    }
}

/// `left + right`
///
/// # Errors
/// `TypeMismatch` for non-numeric operands, `Overflow` if the integer sum
/// does not fit.
pub fn add(left: &Token, right: &Token) -> EvalResult<Token> {
    match operands(Operator::Add, left, right)? {
        Operands::Integers(a, b) => a.checked_add(b)
                                     .map(Token::Integer)
                                     .ok_or_else(|| overflow(Operator::Add, a, b)),
        Operands::Floats(a, b) => Ok(Token::Float(a + b)),
    }
}

/// `left - right`
///
/// # Errors
/// `TypeMismatch` for non-numeric operands, `Overflow` if the integer
/// difference does not fit.
pub fn sub(left: &Token, right: &Token) -> EvalResult<Token> {
    match operands(Operator::Sub, left, right)? {
        Operands::Integers(a, b) => a.checked_sub(b)
                                     .map(Token::Integer)
                                     .ok_or_else(|| overflow(Operator::Sub, a, b)),
        Operands::Floats(a, b) => Ok(Token::Float(a - b)),
    }
}

/// `left * right`
///
/// # Errors
/// `TypeMismatch` for non-numeric operands, `Overflow` if the integer
/// product does not fit.
pub fn mul(left: &Token, right: &Token) -> EvalResult<Token> {
    match operands(Operator::Mul, left, right)? {
        Operands::Integers(a, b) => a.checked_mul(b)
                                     .map(Token::Integer)
                                     .ok_or_else(|| overflow(Operator::Mul, a, b)),
        Operands::Floats(a, b) => Ok(Token::Float(a * b)),
    }
}

/// `left / right`
///
/// Integer division truncates toward zero. Float division by zero yields an
/// infinity or NaN.
///
/// # Errors
/// `TypeMismatch` for non-numeric operands, `DivisionByZero` for an integer
/// zero divisor, `Overflow` for `i64::MIN / -1`.
pub fn div(left: &Token, right: &Token) -> EvalResult<Token> {
    match operands(Operator::Div, left, right)? {
        Operands::Integers(_, 0) => Err(RuntimeError::DivisionByZero),
        Operands::Integers(a, b) => a.checked_div(b)
                                     .map(Token::Integer)
                                     .ok_or_else(|| overflow(Operator::Div, a, b)),
        Operands::Floats(a, b) => Ok(Token::Float(a / b)),
    }
}

/// `left % right`
///
/// Always an integer remainder with the sign of the dividend. Float operands
/// are truncated toward zero first, so `7.9 % 2.5` is `7 % 2`.
///
/// # Errors
/// `TypeMismatch` for non-numeric operands, `DivisionByZero` if the divisor
/// is (or truncates to) zero, `Overflow` if a float has no integer
/// counterpart or for `i64::MIN % -1`.
///
/// # Example
/// ```
/// use calc::interpreter::token::{arithmetic::modulo, core::Token};
///
/// assert_eq!(modulo(&Token::Integer(3), &Token::Float(2.5)).unwrap(), Token::Integer(1));
/// assert_eq!(modulo(&Token::Integer(-7), &Token::Integer(2)).unwrap(), Token::Integer(-1));
/// ```
pub fn modulo(left: &Token, right: &Token) -> EvalResult<Token> {
    let truncate = |token: &Token| match token {
        Token::Integer(n) => Ok(*n),
        Token::Float(x) => f64_to_i64_truncated(*x, &format!("{left} % {right}")),
        _ => Err(type_mismatch(Operator::Mod, left, right)),
    };
    let a = truncate(left)?;
    let b = truncate(right)?;

    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    a.checked_rem(b).map(Token::Integer).ok_or_else(|| overflow(Operator::Mod, a, b))
}

/// `left ^ right`
///
/// Two integers are raised in floating point and the result is truncated
/// back to an integer, so `2 ^ -1` is `0`.
///
/// # Errors
/// `TypeMismatch` for non-numeric operands, `Overflow` if an integer power
/// is not representable as `i64`.
pub fn exp(left: &Token, right: &Token) -> EvalResult<Token> {
    match operands(Operator::Exp, left, right)? {
        Operands::Integers(a, b) => {
            // Integer powers go through `f64`, like C's `pow`.
            let power = widen(a).powf(widen(b));
            f64_to_i64_truncated(power, &format!("{a} ^ {b}")).map(Token::Integer)
        },
        Operands::Floats(a, b) => Ok(Token::Float(a.powf(b))),
    }
}

/// Applies a reserved function to a numeric token, always producing a float.
///
/// # Errors
/// `TypeMismatch` for a non-numeric argument.
///
/// # Example
/// ```
/// use calc::interpreter::token::{
///     arithmetic::apply_function,
///     core::{Function, Token},
/// };
///
/// let result = apply_function(Function::Cos, &Token::Integer(0)).unwrap();
/// assert_eq!(result, Token::Float(1.0));
/// ```
pub fn apply_function(function: Function, arg: &Token) -> EvalResult<Token> {
    let x = match arg {
        Token::Integer(n) => widen(*n),
        Token::Float(x) => *x,
        _ => {
            return Err(RuntimeError::TypeMismatch { details: format!("Cannot apply {} to {arg}",
                                                                     function.name()) });
        },
    };

    Ok(Token::Float(match function {
                        Function::Sin => x.sin(),
                        Function::Cos => x.cos(),
                        Function::Tan => x.tan(),
                    }))
}

/// `sin(arg)`
///
/// # Errors
/// See [`apply_function`].
pub fn sin(arg: &Token) -> EvalResult<Token> {
    apply_function(Function::Sin, arg)
}

/// `cos(arg)`
///
/// # Errors
/// See [`apply_function`].
pub fn cos(arg: &Token) -> EvalResult<Token> {
    apply_function(Function::Cos, arg)
}

/// `tan(arg)`
///
/// # Errors
/// See [`apply_function`].
pub fn tan(arg: &Token) -> EvalResult<Token> {
    apply_function(Function::Tan, arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Token {
        Token::Integer(n)
    }

    fn float(x: f64) -> Token {
        Token::Float(x)
    }

    #[test]
    fn integers_stay_integers() {
        assert_eq!(add(&int(2), &int(3)).unwrap(), int(5));
        assert_eq!(sub(&int(2), &int(3)).unwrap(), int(-1));
        assert_eq!(mul(&int(-4), &int(3)).unwrap(), int(-12));
        assert_eq!(div(&int(7), &int(2)).unwrap(), int(3));
        assert_eq!(div(&int(-7), &int(2)).unwrap(), int(-3));
        assert_eq!(modulo(&int(7), &int(3)).unwrap(), int(1));
        assert_eq!(exp(&int(2), &int(10)).unwrap(), int(1024));
    }

    #[test]
    fn any_float_widens_the_result() {
        assert_eq!(add(&int(1), &float(0.5)).unwrap(), float(1.5));
        assert_eq!(sub(&float(0.5), &int(1)).unwrap(), float(-0.5));
        assert_eq!(mul(&float(1.5), &float(2.0)).unwrap(), float(3.0));
        assert_eq!(div(&float(3.0), &int(2)).unwrap(), float(1.5));
        assert_eq!(exp(&float(4.0), &float(0.5)).unwrap(), float(2.0));
        assert_eq!(exp(&int(2), &float(-1.0)).unwrap(), float(0.5));
    }

    #[test]
    fn modulo_truncates_float_operands() {
        // Unlike every other operator, modulo narrows instead of widening.
        assert_eq!(modulo(&int(3), &float(2.5)).unwrap(), int(1));
        assert_eq!(modulo(&float(7.9), &float(2.5)).unwrap(), int(1));
        assert_eq!(modulo(&float(-7.9), &int(2)).unwrap(), int(-1));
        assert_eq!(modulo(&int(3), &float(0.5)), Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn integer_powers_are_narrowed() {
        assert_eq!(exp(&int(2), &int(-1)).unwrap(), int(0));
        assert_eq!(exp(&int(-2), &int(3)).unwrap(), int(-8));
        assert_eq!(exp(&int(5), &int(0)).unwrap(), int(1));
        assert!(matches!(exp(&int(10), &int(19)), Err(RuntimeError::Overflow { .. })));
        assert!(matches!(exp(&int(0), &int(-1)), Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn integer_division_by_zero_is_reported() {
        assert_eq!(div(&int(1), &int(0)), Err(RuntimeError::DivisionByZero));
        assert_eq!(modulo(&int(1), &int(0)), Err(RuntimeError::DivisionByZero));
        assert_eq!(div(&int(1), &float(0.0)).unwrap(), float(f64::INFINITY));
    }

    #[test]
    fn integer_overflow_is_reported() {
        assert!(matches!(add(&int(i64::MAX), &int(1)), Err(RuntimeError::Overflow { .. })));
        assert!(matches!(sub(&int(i64::MIN), &int(1)), Err(RuntimeError::Overflow { .. })));
        assert!(matches!(mul(&int(i64::MAX), &int(2)), Err(RuntimeError::Overflow { .. })));
        assert!(matches!(div(&int(i64::MIN), &int(-1)), Err(RuntimeError::Overflow { .. })));
        assert!(matches!(modulo(&int(i64::MIN), &int(-1)),
                         Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn large_integers_widen_to_the_nearest_float() {
        assert_eq!(add(&int(9_007_199_254_740_993), &float(0.5)).unwrap(),
                   float(9_007_199_254_740_992.0));
        assert_eq!(mul(&float(2.0), &int(i64::MAX)).unwrap(), float(2.0_f64.powi(64)));
        assert_eq!(apply_function(Function::Cos, &int(i64::MIN)).unwrap(),
                   float((-(2.0_f64.powi(63))).cos()));
    }

    #[test]
    fn non_numeric_operands_are_rejected() {
        let s = Token::StringLiteral("abc".into());
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div, Operator::Mod,
                   Operator::Exp]
        {
            assert!(matches!(apply(op, &s, &int(1)), Err(RuntimeError::TypeMismatch { .. })));
            assert!(matches!(apply(op, &int(1), &s), Err(RuntimeError::TypeMismatch { .. })));
        }
        assert!(matches!(sin(&s), Err(RuntimeError::TypeMismatch { .. })));
    }

    #[test]
    fn transcendental_functions() {
        assert_eq!(sin(&int(0)).unwrap(), float(0.0));
        assert_eq!(cos(&float(0.0)).unwrap(), float(1.0));
        assert_eq!(tan(&int(0)).unwrap(), float(0.0));

        let Token::Float(x) = sin(&float(std::f64::consts::FRAC_PI_2)).unwrap() else {
            panic!("sin must produce a float");
        };
        assert!((x - 1.0).abs() < 1e-12);
    }
}
