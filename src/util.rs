/// Numeric conversion helpers.
///
/// Narrowing from `f64` to `i64` truncates toward zero but refuses values
/// with no integer counterpart, reporting them as runtime errors.
pub mod num;
