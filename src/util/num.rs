/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Returns `true` if `value` is a finite, non-negative integer.
///
/// ## Example
/// ```
/// use calc::util::num::is_natural;
///
/// assert!(is_natural(0.0));
/// assert!(is_natural(5.0));
/// assert!(!is_natural(2.5));
/// assert!(!is_natural(-1.0));
/// assert!(!is_natural(f64::INFINITY));
/// assert!(!is_natural(f64::NAN));
/// ```
#[must_use]
pub fn is_natural(value: f64) -> bool {
    value.is_finite() && value >= 0.0 && value.fract() == 0.0
}

/// Converts a 1-based index held in an `f64` into a 0-based `usize`.
///
/// Returns `None` unless `value` is an integer in `1..=len`.
///
/// ## Example
/// ```
/// use calc::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(1.0, 3), Some(0));
/// assert_eq!(f64_to_index(3.0, 3), Some(2));
/// assert_eq!(f64_to_index(4.0, 3), None);
/// assert_eq!(f64_to_index(0.0, 3), None);
/// assert_eq!(f64_to_index(1.5, 3), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_index(value: f64, len: usize) -> Option<usize> {
    if !is_natural(value) || value < 1.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }

    let index = usize::try_from(value as u64).ok()?;
    (index <= len).then(|| index - 1)
}
