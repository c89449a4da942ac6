use super::distance_2d::point_on_segment_2d;
use super::{Point3, Vector3};

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the (unnormalized) normal of a polygon using Newell's method.
///
/// The length of the result is twice the polygon area. Collinear or
/// too-short input gives the zero vector.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal
}

/// Returns `true` if `(px, py)` lies on any edge of the closed polygon `verts`.
#[must_use]
pub fn point_on_boundary_2d(px: f64, py: f64, verts: &[(f64, f64)]) -> bool {
    let n = verts.len();
    (0..n).any(|i| {
        let (x0, y0) = verts[i];
        let (x1, y1) = verts[(i + 1) % n];
        point_on_segment_2d(px, py, x0, y0, x1, y1)
    })
}

/// Odd-even ray casting of point `(px, py)` against polygon `verts`.
///
/// Casts a ray towards +X and counts edge crossings. Each edge is treated as
/// half-open in y (`[min_y, max_y)`), so a ray passing through a vertex
/// counts it once and horizontal edges never count. Points exactly on the
/// boundary are not classified consistently; test them with
/// [`point_on_boundary_2d`] first.
#[must_use]
pub fn ray_cast_2d(px: f64, py: f64, verts: &[(f64, f64)]) -> bool {
    let n = verts.len();
    let mut inside = false;
    for i in 0..n {
        let (x0, y0) = verts[i];
        let (x1, y1) = verts[(i + 1) % n];
        if (y0 > py) != (y1 > py) {
            let x_cross = x0 + (py - y0) * (x1 - x0) / (y1 - y0);
            if px < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Inclusive point-in-polygon test: boundary points are enclosed.
#[must_use]
pub fn point_in_polygon_2d(px: f64, py: f64, verts: &[(f64, f64)]) -> bool {
    if verts.len() < 3 {
        return false;
    }
    point_on_boundary_2d(px, py, verts) || ray_cast_2d(px, py, verts)
}
