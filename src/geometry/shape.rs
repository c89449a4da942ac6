use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::definitely_less;

use super::{Point, Polygon, Vector};

/// A right prism: a polygon base extruded straight up by `height`.
///
/// The base is expected to be horizontal; its plane is taken from the z of
/// the first base vertex. A height of 0 makes the shape a flat polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    base: Polygon,
    height: f64,
}

impl Shape {
    /// Creates a shape from a base polygon and a height.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeHeight`] if `height` is negative or NaN.
    pub fn new(base: Polygon, height: f64) -> Result<Self> {
        check_height(height)?;
        Ok(Self { base, height })
    }

    #[must_use]
    pub fn base(&self) -> &Polygon {
        &self.base
    }

    /// The base translated up by the height.
    #[must_use]
    pub fn top(&self) -> Polygon {
        self.base.translated(&Vector::new(0.0, 0.0, self.height))
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_base(&mut self, base: Polygon) {
        self.base = base;
    }

    /// Changes the height.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeHeight`] if `height` is negative or
    /// NaN; the shape keeps its previous height.
    pub fn set_height(&mut self, height: f64) -> Result<()> {
        check_height(height)?;
        self.height = height;
        Ok(())
    }

    /// Tests whether `point` lies inside the prism or on its surface.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if the base has fewer than
    /// three vertices.
    pub fn encloses(&self, point: &Point) -> Result<bool> {
        let floor = self.base.points().first().map_or(0.0, Point::z);
        let level = point.z() - floor;
        if definitely_less(level, 0.0) || definitely_less(self.height, level) {
            // Validate the base even when the point is out of vertical range.
            self.base.encloses_2d(point)?;
            return Ok(false);
        }
        self.base.encloses_2d(point)
    }

    /// Tests whether every vertex of `shape`'s base and top is enclosed.
    ///
    /// # Errors
    ///
    /// Same as [`Shape::encloses`], for either shape's base.
    pub fn encloses_shape(&self, shape: &Shape) -> Result<bool> {
        if !self.encloses_polygon(&shape.base)? {
            return Ok(false);
        }
        self.encloses_polygon(&shape.top())
    }

    /// Tests whether every vertex of `polygon` is enclosed.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if `polygon` or the base has
    /// fewer than three vertices.
    pub fn encloses_polygon(&self, polygon: &Polygon) -> Result<bool> {
        polygon.check_vertex_count()?;
        for point in polygon.points() {
            if !self.encloses(point)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn check_height(height: f64) -> Result<()> {
    if height.is_nan() || height < 0.0 {
        tracing::debug!(height, "rejecting negative shape height");
        return Err(GeometryError::NegativeHeight(height).into());
    }
    Ok(())
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape(base: {}, height: {})", self.base, self.height)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{CityError, EPSILON};

    fn square(x: f64, y: f64, size: f64, z: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(x, y, z),
            Point::new(x + size, y, z),
            Point::new(x + size, y + size, z),
            Point::new(x, y + size, z),
        ])
    }

    fn block() -> Shape {
        Shape::new(square(0.0, 0.0, 10.0, 0.0), 20.0).unwrap()
    }

    #[test]
    fn base_and_top() {
        let shape = block();
        assert_eq!(shape.base(), &square(0.0, 0.0, 10.0, 0.0));
        assert_eq!(shape.top(), square(0.0, 0.0, 10.0, 20.0));
        assert_eq!(shape.height(), 20.0);
    }

    #[test]
    fn negative_height_is_rejected() {
        assert!(matches!(
            Shape::new(square(0.0, 0.0, 1.0, 0.0), -1.0),
            Err(CityError::Geometry(GeometryError::NegativeHeight(_)))
        ));
        assert!(Shape::new(square(0.0, 0.0, 1.0, 0.0), f64::NAN).is_err());

        let mut shape = block();
        assert!(shape.set_height(-0.5).is_err());
        assert_eq!(shape.height(), 20.0);
        shape.set_height(3.0).unwrap();
        assert_eq!(shape.height(), 3.0);
    }

    #[test]
    fn set_base() {
        let mut shape = block();
        shape.set_base(square(5.0, 5.0, 1.0, 0.0));
        assert_eq!(shape.top(), square(5.0, 5.0, 1.0, 20.0));
    }

    #[test]
    fn encloses_point() {
        let shape = block();
        assert!(shape.encloses(&Point::new(5.0, 5.0, 10.0)).unwrap());
        assert!(shape.encloses(&Point::new(5.0, 5.0, 0.0)).unwrap());
        assert!(shape.encloses(&Point::new(10.0, 5.0, 20.0)).unwrap());
        assert!(!shape.encloses(&Point::new(5.0, 5.0, 20.5)).unwrap());
        assert!(!shape.encloses(&Point::new(5.0, 5.0, -0.5)).unwrap());
        assert!(!shape.encloses(&Point::new(15.0, 5.0, 10.0)).unwrap());
    }

    #[test]
    fn vertical_extent_uses_tolerance() {
        let shape = block();
        assert!(shape.encloses(&Point::new(5.0, 5.0, 20.0 + EPSILON / 2.0)).unwrap());
        assert!(shape.encloses(&Point::new(5.0, 5.0, -EPSILON / 2.0)).unwrap());
        assert!(!shape.encloses(&Point::new(5.0, 5.0, 20.0 + 2.0 * EPSILON)).unwrap());
    }

    #[test]
    fn encloses_point_above_raised_base() {
        let shape = Shape::new(square(0.0, 0.0, 10.0, 100.0), 5.0).unwrap();
        assert!(shape.encloses(&Point::new(1.0, 1.0, 102.0)).unwrap());
        assert!(!shape.encloses(&Point::new(1.0, 1.0, 2.0)).unwrap());
    }

    #[test]
    fn flat_shape_encloses_only_its_plane() {
        let shape = Shape::new(square(0.0, 0.0, 10.0, 0.0), 0.0).unwrap();
        assert!(shape.encloses(&Point::new(5.0, 5.0, 0.0)).unwrap());
        assert!(!shape.encloses(&Point::new(5.0, 5.0, 1.0)).unwrap());
    }

    #[test]
    fn encloses_shape() {
        let outer = block();
        let inner = Shape::new(square(2.0, 2.0, 3.0, 1.0), 10.0).unwrap();
        assert!(outer.encloses_shape(&inner).unwrap());
        assert!(!inner.encloses_shape(&outer).unwrap());
        assert!(outer.encloses_shape(&outer).unwrap());

        let too_tall = Shape::new(square(2.0, 2.0, 3.0, 1.0), 30.0).unwrap();
        assert!(!outer.encloses_shape(&too_tall).unwrap());
    }

    #[test]
    fn encloses_polygon() {
        let shape = block();
        assert!(shape.encloses_polygon(&square(1.0, 1.0, 2.0, 7.0)).unwrap());
        assert!(!shape.encloses_polygon(&square(9.0, 1.0, 2.0, 7.0)).unwrap());
    }

    #[test]
    fn malformed_base_is_invalid() {
        let shape = Shape::new(Polygon::new(vec![Point::new_2d(0.0, 0.0)]), 1.0).unwrap();
        assert!(shape.encloses(&Point::new_2d(0.0, 0.0)).is_err());
        assert!(shape.encloses(&Point::new(0.0, 0.0, 5.0)).is_err());
        assert!(block().encloses_shape(&shape).is_err());
    }

    #[test]
    fn short_polygon_is_invalid() {
        let shape = Shape::new(square(0.0, 0.0, 10.0, 0.0), 5.0).unwrap();
        assert!(matches!(
            shape.encloses_polygon(&Polygon::default()),
            Err(CityError::Geometry(GeometryError::TooFewVertices { count: 0 }))
        ));
        let pair = Polygon::new(vec![Point::new_2d(1.0, 1.0), Point::new_2d(2.0, 2.0)]);
        assert!(matches!(
            shape.encloses_polygon(&pair),
            Err(CityError::Geometry(GeometryError::TooFewVertices { count: 2 }))
        ));
    }

    #[test]
    fn clone_is_deep() {
        let original = block();
        let mut copy = original.clone();
        copy.set_base(square(1.0, 1.0, 1.0, 0.0));
        assert_eq!(original.base(), &square(0.0, 0.0, 10.0, 0.0));
    }

    #[test]
    fn display() {
        let shape = Shape::new(
            Polygon::new(vec![
                Point::new_2d(0.0, 0.0),
                Point::new_2d(1.0, 0.0),
                Point::new_2d(0.0, 1.0),
            ]),
            2.5,
        )
        .unwrap();
        assert_eq!(
            shape.to_string(),
            "Shape(base: Polygon(Point(0, 0, 0), Point(1, 0, 0), Point(0, 1, 0)), height: 2.5)"
        );
    }
}
