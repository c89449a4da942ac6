use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{newell_normal, point_in_polygon_2d, signed_area_2d};
use crate::math::polygon_3d::{point_in_polygon_3d, PolygonPlane};
use crate::math::{is_zero, Point3};

use super::{LineSegment, Point, Vector};

/// A closed polygon given by its vertices in order.
///
/// The last vertex connects back to the first. Methods suffixed `_2d` work on
/// the projection to the XY plane; the others take the polygon's own plane
/// into account.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Appends a vertex.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.points.len()
    }

    /// Iterates over the edges, including the closing edge from the last
    /// vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| LineSegment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Tests whether `point` is inside or on the boundary, ignoring z.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if the polygon has fewer
    /// than three vertices.
    pub fn encloses_2d(&self, point: &Point) -> Result<bool> {
        self.check_vertex_count()?;
        Ok(point_in_polygon_2d(point.x(), point.y(), &self.vertices_2d()))
    }

    /// Tests whether `point` is inside or on the boundary of the polygon in
    /// its own plane. Points off the plane are never enclosed.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] for fewer than three vertices
    /// and [`GeometryError::Degenerate`] if the vertices are collinear.
    pub fn encloses(&self, point: &Point) -> Result<bool> {
        let (vertices, plane) = self.plane()?;
        Ok(point_in_polygon_3d(&point.coords(), &vertices, &plane))
    }

    /// Tests whether every vertex of `polygon` is enclosed, ignoring z.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if either polygon has fewer
    /// than three vertices.
    pub fn encloses_polygon_2d(&self, polygon: &Polygon) -> Result<bool> {
        polygon.check_vertex_count()?;
        for point in &polygon.points {
            if !self.encloses_2d(point)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Tests whether every vertex of `polygon` is enclosed in this polygon's
    /// plane.
    ///
    /// # Errors
    ///
    /// Same as [`Polygon::encloses`], checked for both polygons' vertex counts.
    pub fn encloses_polygon(&self, polygon: &Polygon) -> Result<bool> {
        polygon.check_vertex_count()?;
        let (vertices, plane) = self.plane()?;
        Ok(polygon
            .points
            .iter()
            .all(|p| point_in_polygon_3d(&p.coords(), &vertices, &plane)))
    }

    /// Signed area of the XY projection; positive for counter-clockwise order.
    #[must_use]
    pub fn signed_area_2d(&self) -> f64 {
        signed_area_2d(&self.vertices_3d())
    }

    /// Area of the polygon in its own plane.
    #[must_use]
    pub fn area(&self) -> f64 {
        newell_normal(&self.vertices_3d()).norm() * 0.5
    }

    /// Unit normal by Newell's method, oriented by the vertex order
    /// (counter-clockwise seen from the tip).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the polygon has no area.
    pub fn normal(&self) -> Result<Vector> {
        let normal = newell_normal(&self.vertices_3d());
        if is_zero(normal.norm()) {
            return Err(GeometryError::Degenerate(format!("{self} has no area")).into());
        }
        Ok(Vector::from(normal.normalize()))
    }

    /// Average of the vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] for an empty polygon.
    pub fn centroid(&self) -> Result<Point> {
        if self.points.is_empty() {
            return Err(GeometryError::TooFewVertices { count: 0 }.into());
        }
        let sum = self
            .points
            .iter()
            .fold(Vector::zero(), |acc, p| acc + Vector::between(&Point::origin(), p));
        #[allow(clippy::cast_precision_loss)]
        let n = self.points.len() as f64;
        Ok(Point::origin() + sum / n)
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: &Vector) {
        for point in &mut self.points {
            point.translate(offset);
        }
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector) -> Polygon {
        let mut moved = self.clone();
        moved.translate(offset);
        moved
    }

    pub(crate) fn check_vertex_count(&self) -> Result<()> {
        let count = self.points.len();
        if count < 3 {
            tracing::debug!(count, "polygon has too few vertices for an enclosure test");
            return Err(GeometryError::TooFewVertices { count }.into());
        }
        Ok(())
    }

    fn plane(&self) -> Result<(Vec<Point3>, PolygonPlane)> {
        self.check_vertex_count()?;
        let vertices = self.vertices_3d();
        let plane = PolygonPlane::from_polygon(&vertices).ok_or_else(|| {
            GeometryError::Degenerate(format!("{self} does not span a plane"))
        })?;
        Ok((vertices, plane))
    }

    fn vertices_2d(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x(), p.y())).collect()
    }

    fn vertices_3d(&self) -> Vec<Point3> {
        self.points.iter().map(Point::coords).collect()
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon(")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{point}")?;
        }
        write!(f, ")")
    }
}
