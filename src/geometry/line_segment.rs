use std::fmt;

use crate::math::distance_2d::{point_on_segment_2d, point_to_line_dist_2d, segment_parameter_2d};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::{cross_2d, is_zero, Point3, EPSILON};

use super::{Point, Vector};

/// Relationship between two segments projected onto the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The segments do not touch.
    None,
    /// The segments meet in exactly one point (endpoints included).
    Intersects(Point),
    /// The segments lie on the same infinite line. They may or may not overlap.
    Collinear,
    /// The segments lie on distinct parallel lines.
    Parallel,
    /// Both segments have the same endpoints, in either order.
    Identical,
}

impl Intersection {
    /// The crossing point, if the segments meet in a single point.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match self {
            Intersection::Intersects(point) => Some(*point),
            _ => None,
        }
    }
}

/// A straight segment between two points.
///
/// `begin` and `end` may coincide; such a degenerate segment behaves like a
/// single point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineSegment {
    begin: Point,
    end: Point,
}

impl LineSegment {
    /// Creates a segment from `begin` to `end`.
    #[must_use]
    pub fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }

    #[must_use]
    pub fn begin(&self) -> Point {
        self.begin
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn set_begin(&mut self, begin: Point) {
        self.begin = begin;
    }

    pub fn set_end(&mut self, end: Point) {
        self.end = end;
    }

    /// Distance between the two endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.begin.distance(&self.end)
    }

    /// Returns `true` if the endpoints coincide within [`EPSILON`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        is_zero(self.length())
    }

    /// Vector from `begin` to `end`.
    #[must_use]
    pub fn direction(&self) -> Vector {
        Vector::between(&self.begin, &self.end)
    }

    /// Tests whether `point` lies on the segment, ignoring z.
    #[must_use]
    pub fn has_point_2d(&self, point: &Point) -> bool {
        point_on_segment_2d(
            point.x(),
            point.y(),
            self.begin.x(),
            self.begin.y(),
            self.end.x(),
            self.end.y(),
        )
    }

    /// Classifies how this segment and `other` meet in the XY plane.
    ///
    /// The point reported by [`Intersection::Intersects`] carries the z of
    /// this segment at the crossing.
    #[must_use]
    pub fn intersection_2d(&self, other: &LineSegment) -> Intersection {
        if self.same_endpoints_2d(other) {
            return Intersection::Identical;
        }

        if self.is_degenerate_2d() || other.is_degenerate_2d() {
            return self.degenerate_intersection_2d(other);
        }

        let a0: Point3 = self.begin.into();
        let a1: Point3 = self.end.into();
        let b0: Point3 = other.begin.into();
        let b1: Point3 = other.end.into();

        if let Some((point, _, _)) = segment_segment_intersect_2d(&a0, &a1, &b0, &b1) {
            let hit = Point::from(point);
            tracing::trace!(segment = %self, other = %other, point = %hit, "segments intersect");
            return Intersection::Intersects(hit);
        }

        let (dax, day) = (a1.x - a0.x, a1.y - a0.y);
        let (dbx, dby) = (b1.x - b0.x, b1.y - b0.y);
        let parallel = cross_2d(dax, day, dbx, dby).abs()
            <= EPSILON * dax.hypot(day) * dbx.hypot(dby);
        if !parallel {
            return Intersection::None;
        }

        if is_zero(point_to_line_dist_2d(b0.x, b0.y, a0.x, a0.y, a1.x, a1.y)) {
            Intersection::Collinear
        } else {
            Intersection::Parallel
        }
    }

    /// Closest point on the segment to `point`.
    #[must_use]
    pub fn nearest_point(&self, point: &Point) -> Point {
        let direction = self.direction();
        let len_sq = direction.dot_product(&direction);
        if is_zero(len_sq.sqrt()) {
            return self.begin;
        }
        let t = (Vector::between(&self.begin, point).dot_product(&direction) / len_sq).clamp(0.0, 1.0);
        self.begin + direction * t
    }

    /// Euclidean distance from `point` to the segment.
    #[must_use]
    pub fn distance(&self, point: &Point) -> f64 {
        point.distance(&self.nearest_point(point))
    }

    fn is_degenerate_2d(&self) -> bool {
        is_zero(self.begin.distance_2d(&self.end))
    }

    fn same_endpoints_2d(&self, other: &LineSegment) -> bool {
        let same = |a: &Point, b: &Point| is_zero(a.distance_2d(b));
        (same(&self.begin, &other.begin) && same(&self.end, &other.end))
            || (same(&self.begin, &other.end) && same(&self.end, &other.begin))
    }

    /// At least one side is a single point; the pair is not identical.
    fn degenerate_intersection_2d(&self, other: &LineSegment) -> Intersection {
        if self.is_degenerate_2d() {
            if other.has_point_2d(&self.begin) {
                return Intersection::Intersects(self.begin);
            }
        } else if self.has_point_2d(&other.begin) {
            return Intersection::Intersects(self.point_at_2d(&other.begin));
        }
        Intersection::None
    }

    /// Point of this segment above or below `point`, keeping this segment's z.
    fn point_at_2d(&self, point: &Point) -> Point {
        let t = segment_parameter_2d(
            point.x(),
            point.y(),
            self.begin.x(),
            self.begin.y(),
            self.end.x(),
            self.end.y(),
        )
        .map_or(0.0, |t| t.clamp(0.0, 1.0));
        self.begin + self.direction() * t
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineSegment({}, {})", self.begin, self.end)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn segment(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::new(Point::new_2d(x0, y0), Point::new_2d(x1, y1))
    }

    #[test]
    fn accessors_and_length() {
        let mut s = LineSegment::new(Point::new(0.0, 0.0, 0.0), Point::new(3.0, 4.0, 0.0));
        assert_abs_diff_eq!(s.length(), 5.0, epsilon = EPSILON);
        assert_eq!(s.direction(), Vector::new(3.0, 4.0, 0.0));

        s.set_begin(Point::new(3.0, 0.0, 0.0));
        s.set_end(Point::new(3.0, 0.0, 2.0));
        assert_eq!(s.begin(), Point::new(3.0, 0.0, 0.0));
        assert_eq!(s.end(), Point::new(3.0, 0.0, 2.0));
        assert_abs_diff_eq!(s.length(), 2.0, epsilon = EPSILON);
        assert!(!s.is_degenerate());
        assert!(LineSegment::default().is_degenerate());
    }

    #[test]
    fn has_point_2d() {
        let s = segment(0.0, 0.0, 10.0, 10.0);
        assert!(s.has_point_2d(&Point::new_2d(5.0, 5.0)));
        assert!(s.has_point_2d(&Point::new_2d(0.0, 0.0)));
        assert!(s.has_point_2d(&Point::new_2d(10.0, 10.0)));
        assert!(s.has_point_2d(&Point::new(5.0, 5.0, 100.0)));
        assert!(!s.has_point_2d(&Point::new_2d(11.0, 11.0)));
        assert!(!s.has_point_2d(&Point::new_2d(5.0, 5.1)));
    }

    #[test]
    fn crossing_segments_report_point() {
        let a = segment(0.0, 0.0, 4.0, 4.0);
        let b = segment(0.0, 4.0, 4.0, 0.0);
        assert_eq!(a.intersection_2d(&b), Intersection::Intersects(Point::new_2d(2.0, 2.0)));
        assert_eq!(b.intersection_2d(&a), Intersection::Intersects(Point::new_2d(2.0, 2.0)));
    }

    #[test]
    fn crossing_point_round_trip() {
        let p = Point::new_2d(3.25, -1.5);
        let a = LineSegment::new(p + Vector::new_2d(-2.0, -1.0), p + Vector::new_2d(4.0, 2.0));
        let b = LineSegment::new(p + Vector::new_2d(1.0, -5.0), p + Vector::new_2d(-0.5, 2.5));
        let hit = a.intersection_2d(&b).point().unwrap();
        assert_eq!(hit, p);
    }

    #[test]
    fn touching_endpoints_intersect() {
        let a = segment(0.0, 0.0, 1.0, 0.0);
        let b = segment(1.0, 0.0, 1.0, 5.0);
        assert_eq!(a.intersection_2d(&b), Intersection::Intersects(Point::new_2d(1.0, 0.0)));
    }

    #[test]
    fn separate_segments_do_not_intersect() {
        let a = segment(0.0, 0.0, 1.0, 0.0);
        let b = segment(2.0, -1.0, 2.0, 1.0);
        assert_eq!(a.intersection_2d(&b), Intersection::None);
    }

    #[test]
    fn parallel_segments() {
        let a = segment(0.0, 0.0, 1.0, 0.0);
        let b = segment(0.0, 1.0, 1.0, 1.0);
        assert_eq!(a.intersection_2d(&b), Intersection::Parallel);
    }

    #[test]
    fn collinear_segments() {
        let a = segment(0.0, 0.0, 1.0, 1.0);
        assert_eq!(a.intersection_2d(&segment(2.0, 2.0, 3.0, 3.0)), Intersection::Collinear);
        assert_eq!(a.intersection_2d(&segment(0.5, 0.5, 3.0, 3.0)), Intersection::Collinear);
    }

    #[test]
    fn identical_segments() {
        let a = segment(0.0, 0.0, 1.0, 1.0);
        assert_eq!(a.intersection_2d(&a), Intersection::Identical);
        assert_eq!(a.intersection_2d(&segment(1.0, 1.0, 0.0, 0.0)), Intersection::Identical);
    }

    #[test]
    fn degenerate_segments_act_as_points() {
        let dot = segment(1.0, 1.0, 1.0, 1.0);
        let line = segment(0.0, 0.0, 2.0, 2.0);
        assert_eq!(dot.intersection_2d(&line), Intersection::Intersects(Point::new_2d(1.0, 1.0)));
        assert_eq!(line.intersection_2d(&dot), Intersection::Intersects(Point::new_2d(1.0, 1.0)));
        assert_eq!(dot.intersection_2d(&segment(0.0, 1.0, 0.0, 2.0)), Intersection::None);
        assert_eq!(dot.intersection_2d(&dot), Intersection::Identical);
    }

    #[test]
    fn intersection_takes_z_from_self() {
        let a = LineSegment::new(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 0.0, 2.0));
        let b = LineSegment::new(Point::new(1.0, -1.0, 7.0), Point::new(1.0, 1.0, 7.0));
        assert_eq!(a.intersection_2d(&b).point().unwrap(), Point::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn nearest_point_is_clamped() {
        let s = segment(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.nearest_point(&Point::new_2d(5.0, 3.0)), Point::new_2d(5.0, 0.0));
        assert_eq!(s.nearest_point(&Point::new_2d(-5.0, 3.0)), Point::new_2d(0.0, 0.0));
        assert_eq!(s.nearest_point(&Point::new_2d(15.0, -3.0)), Point::new_2d(10.0, 0.0));
    }

    #[test]
    fn nearest_point_on_degenerate_segment() {
        let s = segment(2.0, 2.0, 2.0, 2.0);
        assert_eq!(s.nearest_point(&Point::new_2d(5.0, 6.0)), Point::new_2d(2.0, 2.0));
        assert_abs_diff_eq!(s.distance(&Point::new_2d(5.0, 6.0)), 5.0, epsilon = EPSILON);
    }

    #[test]
    fn distance_to_point() {
        let s = segment(0.0, 0.0, 10.0, 0.0);
        assert_abs_diff_eq!(s.distance(&Point::new_2d(5.0, 3.0)), 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(s.distance(&Point::new_2d(13.0, 4.0)), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(s.distance(&Point::new(5.0, 0.0, 2.0)), 2.0, epsilon = EPSILON);
    }

    #[test]
    fn display() {
        let s = segment(0.0, 1.0, 2.0, 3.0);
        assert_eq!(s.to_string(), "LineSegment(Point(0, 1, 0), Point(2, 3, 0))");
    }
}
