/// Floating point type used throughout the segment model.
pub type Real = f64;

/// Marker for a quantity that has not been specified yet.
///
/// Finite and far below any physical value so that ordered comparisons
/// such as `value < 0.5 * INVALID_VALUE` stay meaningful.
pub const INVALID_VALUE: Real = -1.0e100;

/// True unless `v` carries the [`INVALID_VALUE`] marker.
#[inline]
pub fn is_valid_value(v: Real) -> bool {
    v > INVALID_VALUE
}
