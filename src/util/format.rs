/// Number of significant digits used when printing results.
pub const RESULT_PRECISION: usize = 10;

/// Formats `value` like C's `printf("%.*G", precision, value)`.
///
/// The value is rounded to `precision` significant digits. Scientific
/// notation (`1.5E+12`) is used when the decimal exponent is below `-4` or not
/// below `precision`; fixed notation is used otherwise. Trailing zeros and a
/// dangling decimal point are removed. Infinities and NaN print as `INF` and
/// `NAN`.
///
/// # Example
/// ```
/// use calc::util::format::format_general;
///
/// assert_eq!(format_general(512.0, 10), "512");
/// assert_eq!(format_general(0.1 + 0.2, 10), "0.3");
/// assert_eq!(format_general(1e10, 10), "1E+10");
/// assert_eq!(format_general(0.00001, 10), "1E-05");
/// assert_eq!(format_general(-2.5, 10), "-2.5");
/// assert_eq!(format_general(f64::INFINITY, 10), "INF");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-NAN" } else { "NAN" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-INF" } else { "INF" }.to_string();
    }

    let precision = precision.max(1);
    // The exponent must be taken after rounding: 9999999999.5 becomes 1E+10.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let limit = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}E{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs());
    }

    let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

/// Formats a result with [`RESULT_PRECISION`] significant digits.
#[must_use]
pub fn format_result(value: f64) -> String {
    format_general(value, RESULT_PRECISION)
}

/// Strips trailing zeros after a decimal point, then the point itself.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
