use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use approx::AbsDiffEq;

use crate::math::{Point3, EPSILON};

use super::Vector;

/// A position in 3D space.
///
/// Equality follows the same tolerance rule as [`Vector`].
#[derive(Debug, Clone, Copy)]
pub struct Point {
    coords: Point3,
}

impl Point {
    /// Creates a point from three coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coords: Point3::new(x, y, z),
        }
    }

    /// Creates a point in the XY plane (`z = 0`).
    #[must_use]
    pub fn new_2d(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// The origin.
    #[must_use]
    pub fn origin() -> Self {
        Self {
            coords: Point3::origin(),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.coords.z
    }

    pub fn set_x(&mut self, x: f64) {
        self.coords.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.coords.y = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.coords.z = z;
    }

    /// Sets all three coordinates.
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.coords = Point3::new(x, y, z);
    }

    /// Sets x and y; z is reset to 0.
    pub fn set_2d(&mut self, x: f64, y: f64) {
        self.set(x, y, 0.0);
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        nalgebra::distance(&self.coords, &other.coords)
    }

    /// Distance to `other` in the XY plane, ignoring z.
    #[must_use]
    pub fn distance_2d(&self, other: &Point) -> f64 {
        (self.x() - other.x()).hypot(self.y() - other.y())
    }

    /// Moves the point by `offset`.
    pub fn translate(&mut self, offset: &Vector) {
        self.coords += offset.coords();
    }

    /// Returns a copy of the point moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector) -> Point {
        *self + *offset
    }

    pub(crate) fn coords(&self) -> Point3 {
        self.coords
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl From<Point3> for Point {
    fn from(coords: Point3) -> Self {
        Self { coords }
    }
}

impl From<Point> for Point3 {
    fn from(value: Point) -> Self {
        value.coords
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        (self.x() - other.x()).abs() < epsilon
            && (self.y() - other.y()).abs() < epsilon
            && (self.z() - other.z()).abs() < epsilon
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Self {
            coords: self.coords + rhs.coords(),
        }
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.coords += rhs.coords();
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        Self {
            coords: self.coords - rhs.coords(),
        }
    }
}

impl SubAssign<Vector> for Point {
    fn sub_assign(&mut self, rhs: Vector) {
        self.coords -= rhs.coords();
    }
}

/// `a - b` is the vector pointing from `b` to `a`.
impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::between(&rhs, &self)
    }
}
