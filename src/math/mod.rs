pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod polygon_3d;

/// 3D point type used by the raw routines.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type used by the raw routines.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Two coordinates closer than this are the same coordinate. City models are
/// measured in metres, so this is a micrometre.
pub const EPSILON: f64 = 1e-6;

/// The circle constant, re-exported so callers share one definition.
pub const PI: f64 = std::f64::consts::PI;

/// Returns `true` if `value` is within [`EPSILON`] of zero.
#[inline]
#[must_use]
pub fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Returns `true` if `a` is below `b` by at least [`EPSILON`].
#[inline]
#[must_use]
pub fn definitely_less(a: f64, b: f64) -> bool {
    a <= b - EPSILON
}

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// 2D cross product: `(ax * by - ay * bx)`.
#[inline]
#[must_use]
pub fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}
