/// Numeric conversion helpers.
///
/// Checks used by operators that only accept integral operands, such as the
/// factorial and the result back-reference, and the conversion of such
/// operands into registry indices.
pub mod num;
/// Output formatting.
///
/// Renders `f64` values the way C's `%G` conversion does: a fixed number of
/// significant digits, trailing zeros removed, and an exponent only when the
/// magnitude demands it.
pub mod format;
