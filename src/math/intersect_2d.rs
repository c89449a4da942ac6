use super::{cross_2d, Point3, Vector3, EPSILON};

/// Parametric 2D line-line intersection, ignoring z.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Directions count as parallel when the sine of the angle between them is
/// below [`EPSILON`], so a zero-length direction is always parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point3,
    d1: &Vector3,
    p2: &Point3,
    d2: &Vector3,
) -> Option<(f64, f64)> {
    let cross = cross_2d(d1.x, d1.y, d2.x, d2.y);
    let scale = d1.xy().norm() * d2.xy().norm();
    if cross.abs() <= EPSILON * scale {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = cross_2d(dx, dy, d2.x, d2.y) / cross;
    let u = cross_2d(dx, dy, d1.x, d1.y) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Endpoints touching within [`EPSILON`] count as an intersection. The
/// returned point carries the z of segment `a` at parameter `t`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point3,
    a1: &Point3,
    b0: &Point3,
    b1: &Point3,
) -> Option<(Point3, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db)?;

    // Parameter slack equivalent to EPSILON of distance along each segment.
    let eps_t = EPSILON / da.xy().norm();
    let eps_u = EPSILON / db.xy().norm();
    if t >= -eps_t && t <= 1.0 + eps_t && u >= -eps_u && u <= 1.0 + eps_u {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((point_at(a0, &da, t_clamped), t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point3, dir: &Vector3, t: f64) -> Point3 {
    origin + dir * t
}
