/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Values outside the `i64` range saturate at `i64::MIN` or `i64::MAX`, and
/// `NaN` becomes `0`. No rounding takes place.
///
/// # Example
/// ```
/// use rpncalc::util::num::truncate_to_i64;
///
/// assert_eq!(truncate_to_i64(3.99), 3);
/// assert_eq!(truncate_to_i64(-2.5), -2);
/// assert_eq!(truncate_to_i64(1e300), i64::MAX);
/// assert_eq!(truncate_to_i64(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate_to_i64(value: f64) -> i64 {
    value.trunc() as i64
}
