use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Lower bound of the `i64` range as an `f64` (`-2^63`, exact).
const I64_MIN_AS_F64: f64 = -9_223_372_036_854_775_808.0;
/// Upper bound of the `i64` range as an `f64` (`2^63`, exclusive).
const I64_END_AS_F64: f64 = 9_223_372_036_854_775_808.0;

/// Narrows an `f64` to `i64` by truncating toward zero.
///
/// This is the C-style `(int64_t) x` conversion, except that values with no
/// integer counterpart are reported instead of producing garbage.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` naming `operation` if the value is NaN,
/// infinite, or outside the `i64` range after truncation.
///
/// ## Example
/// ```
/// use calc::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(2.9, "test").unwrap(), 2);
/// assert_eq!(f64_to_i64_truncated(-2.9, "test").unwrap(), -2);
/// assert!(f64_to_i64_truncated(f64::NAN, "test").is_err());
/// assert!(f64_to_i64_truncated(1e19, "test").is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64, operation: &str) -> EvalResult<i64> {
    let truncated = value.trunc();
    if !(I64_MIN_AS_F64..I64_END_AS_F64).contains(&truncated) {
        return Err(RuntimeError::Overflow { operation: operation.to_string() });
    }
    Ok(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_the_i64_range() {
        assert_eq!(f64_to_i64_truncated(I64_MIN_AS_F64, "x").unwrap(), i64::MIN);
        assert!(f64_to_i64_truncated(I64_END_AS_F64, "x").is_err());
        assert!(f64_to_i64_truncated(f64::INFINITY, "x").is_err());
        assert_eq!(f64_to_i64_truncated(-0.5, "x").unwrap(), 0);
    }
}
