use super::{cross_2d, is_zero, EPSILON};

/// Squared length below which a segment is treated as a single point.
const DEGENERATE_LEN_SQ: f64 = EPSILON * EPSILON;

/// Projection parameter of point `(px, py)` onto the infinite line through
/// `(ax, ay)` and `(bx, by)`, unclamped.
///
/// Returns `None` for a zero-length segment.
#[must_use]
pub fn segment_parameter_2d(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> Option<f64> {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;
    if len_sq < DEGENERATE_LEN_SQ {
        return None;
    }
    Some(((px - ax) * dx + (py - ay) * dy) / len_sq)
}

/// Perpendicular distance from `(px, py)` to the infinite line through
/// `(ax, ay)` and `(bx, by)`.
///
/// For a zero-length segment this is the distance to `(ax, ay)`.
#[must_use]
pub fn point_to_line_dist_2d(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len = (dx * dx + dy * dy).sqrt();
    if len * len < DEGENERATE_LEN_SQ {
        return (px - ax).hypot(py - ay);
    }
    cross_2d(dx, dy, px - ax, py - ay).abs() / len
}

/// Returns the minimum distance from point `(px, py)` to the line segment
/// from `(ax, ay)` to `(bx, by)`.
#[must_use]
pub fn point_to_segment_dist_2d(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let Some(t) = segment_parameter_2d(px, py, ax, ay, bx, by) else {
        return (px - ax).hypot(py - ay);
    };
    let t = t.clamp(0.0, 1.0);

    let closest_x = ax + t * (bx - ax);
    let closest_y = ay + t * (by - ay);

    (px - closest_x).hypot(py - closest_y)
}

/// Tests whether `(px, py)` lies on the segment `(ax, ay)`-`(bx, by)`.
///
/// The point must be collinear with the segment (distance from the line below
/// [`EPSILON`]) and its projection parameter must fall in `[0, 1]` with a
/// slack of [`EPSILON`] in distance units.
#[must_use]
pub fn point_on_segment_2d(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> bool {
    let Some(t) = segment_parameter_2d(px, py, ax, ay, bx, by) else {
        return is_zero((px - ax).hypot(py - ay));
    };
    if !is_zero(point_to_line_dist_2d(px, py, ax, ay, bx, by)) {
        return false;
    }
    let slack = EPSILON / (bx - ax).hypot(by - ay);
    t >= -slack && t <= 1.0 + slack
}
