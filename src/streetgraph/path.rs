use std::fmt;

use crate::error::{OperationError, Result};
use crate::geometry::{Intersection, LineSegment, Point, Polygon, Vector};

/// A directed street-graph edge between two intersections.
///
/// Cloning a path copies its segment; paths never share geometry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    segment: LineSegment,
}

impl Path {
    #[must_use]
    pub fn new(segment: LineSegment) -> Self {
        Self { segment }
    }

    /// Creates a path running from `begin` to `end`.
    #[must_use]
    pub fn from_points(begin: Point, end: Point) -> Self {
        Self::new(LineSegment::new(begin, end))
    }

    #[must_use]
    pub fn segment(&self) -> &LineSegment {
        &self.segment
    }

    #[must_use]
    pub fn begin(&self) -> Point {
        self.segment.begin()
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.segment.end()
    }

    pub fn set_begin(&mut self, begin: Point) {
        self.segment.set_begin(begin);
    }

    pub fn set_end(&mut self, end: Point) {
        self.segment.set_end(end);
    }

    /// Returns `true` if at least one endpoint lies in `area` (XY projection).
    ///
    /// A path that only passes through `area` with both endpoints outside is
    /// not inside.
    ///
    /// # Errors
    ///
    /// Returns an error if `area` has fewer than three vertices.
    pub fn is_inside(&self, area: &Polygon) -> Result<bool> {
        Ok(area.encloses_2d(&self.begin())? || area.encloses_2d(&self.end())?)
    }

    /// Returns `true` if `point` lies on the path, ignoring z.
    #[must_use]
    pub fn goes_through(&self, point: &Point) -> bool {
        self.segment.has_point_2d(point)
    }

    /// Classifies how this path meets `other` in the XY plane.
    #[must_use]
    pub fn crosses(&self, other: &Path) -> Intersection {
        self.segment.intersection_2d(&other.segment)
    }

    #[must_use]
    pub fn nearest_point(&self, point: &Point) -> Point {
        self.segment.nearest_point(point)
    }

    #[must_use]
    pub fn distance(&self, point: &Point) -> f64 {
        self.segment.distance(point)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.segment.length()
    }

    /// Replaces both endpoints with points lying on the current path.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::PointNotOnPath`] if either point is off the
    /// path. The path is left unchanged in that case.
    pub fn shorten(&mut self, new_begin: Point, new_end: Point) -> Result<()> {
        for point in [&new_begin, &new_end] {
            if !self.goes_through(point) {
                tracing::debug!(path = %self, point = %point, "refusing to shorten path");
                return Err(OperationError::PointNotOnPath {
                    point: point.to_string(),
                    path: self.to_string(),
                }
                .into());
            }
        }

        self.segment.set_begin(new_begin);
        self.segment.set_end(new_end);
        Ok(())
    }

    /// Unit vector pointing from the end back to the beginning.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GeometryError::ZeroVector`] for a zero-length path.
    pub fn begining_direction_vector(&self) -> Result<Vector> {
        Vector::between(&self.end(), &self.begin()).normalized()
    }

    /// Unit vector pointing from the beginning to the end.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GeometryError::ZeroVector`] for a zero-length path.
    pub fn end_direction_vector(&self) -> Result<Vector> {
        Vector::between(&self.begin(), &self.end()).normalized()
    }
}

impl From<LineSegment> for Path {
    fn from(segment: LineSegment) -> Self {
        Self::new(segment)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({})", self.segment)
    }
}
