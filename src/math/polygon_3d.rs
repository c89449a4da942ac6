use super::polygon_2d::{newell_normal, point_in_polygon_2d};
use super::{is_zero, Point3, Vector3, EPSILON};

/// Local coordinate frame of a planar polygon.
///
/// `u_dir`, `v_dir` and `normal` are orthonormal; `origin` is a vertex of the
/// polygon.
#[derive(Debug, Clone, Copy)]
pub struct PolygonPlane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl PolygonPlane {
    /// Builds the plane of `polygon` from its Newell normal.
    ///
    /// Returns `None` when the polygon has no well-defined plane (fewer than
    /// three vertices, or all vertices collinear).
    #[must_use]
    pub fn from_polygon(polygon: &[Point3]) -> Option<Self> {
        let origin = *polygon.first()?;
        let normal = newell_normal(polygon);
        let len = normal.norm();
        if is_zero(len) {
            return None;
        }
        let normal = normal / len;

        // Choose a reference vector not parallel to the normal
        let reference = if normal.x.abs() < 0.9 {
            Vector3::new(1.0, 0.0, 0.0)
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };

        let u_dir = normal.cross(&reference).normalize();
        let v_dir = normal.cross(&u_dir);

        Some(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed distance of `point` from the plane along its normal.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.normal)
    }

    /// Projects a 3D point onto the UV coordinate system of the plane.
    #[must_use]
    pub fn project_to_uv(&self, point: &Point3) -> (f64, f64) {
        let diff = point - self.origin;
        (diff.dot(&self.u_dir), diff.dot(&self.v_dir))
    }
}

/// Point-in-polygon test for a 3D point and a planar 3D polygon.
///
/// The point must lie within [`EPSILON`] of the polygon's plane. Both are then
/// projected to the plane's UV space and tested with the inclusive 2D rule.
#[must_use]
pub fn point_in_polygon_3d(point: &Point3, polygon: &[Point3], plane: &PolygonPlane) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    if !is_zero(plane.signed_distance(point)) {
        return false;
    }

    let (pu, pv) = plane.project_to_uv(point);
    let uvs: Vec<(f64, f64)> = polygon.iter().map(|p| plane.project_to_uv(p)).collect();

    point_in_polygon_2d(pu, pv, &uvs)
}
