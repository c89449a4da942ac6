use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::AbsDiffEq;
use nalgebra::Rotation3;

use crate::error::{GeometryError, Result};
use crate::math::{degrees_to_radians, is_zero, Vector3, EPSILON, PI};

use super::Point;

/// A displacement or direction in 3D space.
///
/// Equality is tolerance-based: two vectors are equal when every component
/// differs by less than [`EPSILON`].
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    coords: Vector3,
}

impl Vector {
    /// Creates a vector from three components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coords: Vector3::new(x, y, z),
        }
    }

    /// Creates a vector in the XY plane (`z = 0`).
    #[must_use]
    pub fn new_2d(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coords: Vector3::zeros(),
        }
    }

    /// The vector pointing from `from` to `to`.
    #[must_use]
    pub fn between(from: &Point, to: &Point) -> Self {
        Self {
            coords: to.coords() - from.coords(),
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

    /// Sets all three components.
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.coords = Vector3::new(x, y, z);
    }

    /// Sets x and y; z is reset to 0.
    pub fn set_2d(&mut self, x: f64, y: f64) {
        self.set(x, y, 0.0);
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.coords.norm()
    }

    /// Returns `true` if the vector is shorter than [`EPSILON`].
    #[must_use]
    pub fn is_zero(&self) -> bool {
        is_zero(self.length())
    }

    /// Scales the vector to unit length in place.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the vector has (near) zero
    /// length. The vector is left unchanged in that case.
    pub fn normalize(&mut self) -> Result<()> {
        let len = self.length();
        if is_zero(len) {
            tracing::debug!(vector = %self, "cannot normalize zero-length vector");
            return Err(GeometryError::ZeroVector.into());
        }
        self.coords /= len;
        Ok(())
    }

    /// Returns a unit-length copy of the vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the vector has (near) zero length.
    pub fn normalized(&self) -> Result<Self> {
        let mut unit = *self;
        unit.normalize()?;
        Ok(unit)
    }

    /// Rotates the vector about the Z axis.
    ///
    /// * `degrees` - Rotation angle; positive is counter-clockwise seen from +Z.
    pub fn rotate_around_z(&mut self, degrees: f64) {
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), degrees_to_radians(degrees));
        self.coords = rotation * self.coords;
    }

    /// Unsigned angle to `other` in radians, in `[0, π]`.
    ///
    /// The angle involving a zero vector is 0.
    #[must_use]
    pub fn angle_to(&self, other: &Vector) -> f64 {
        let lengths = self.length() * other.length();
        if is_zero(self.length()) || is_zero(other.length()) {
            return 0.0;
        }
        // Rounding can push the cosine just past ±1, where acos returns NaN.
        let cos = (self.dot_product(other) / lengths).clamp(-1.0, 1.0);
        cos.acos()
    }

    /// Angle of the XY projection measured counter-clockwise from +X,
    /// in `[0, 2π)`. The zero vector maps to 0.
    #[must_use]
    pub fn angle_to_x_axis(&self) -> f64 {
        if is_zero(self.coords.xy().norm()) {
            return 0.0;
        }
        let angle = self.y().atan2(self.x());
        if angle < 0.0 {
            let wrapped = angle + 2.0 * PI;
            // -tiny + 2π can round up to exactly 2π.
            if wrapped >= 2.0 * PI {
                0.0
            } else {
                wrapped
            }
        } else {
            angle
        }
    }

    /// Standard 3D cross product.
    #[must_use]
    pub fn cross_product(&self, other: &Vector) -> Vector {
        Self {
            coords: self.coords.cross(&other.coords),
        }
    }

    /// Standard dot product.
    #[must_use]
    pub fn dot_product(&self, other: &Vector) -> f64 {
        self.coords.dot(&other.coords)
    }

    pub(crate) fn coords(&self) -> Vector3 {
        self.coords
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vector3> for Vector {
    fn from(coords: Vector3) -> Self {
        Self { coords }
    }
}

impl From<Vector> for Vector3 {
    fn from(value: Vector) -> Self {
        value.coords
    }
}

impl AbsDiffEq for Vector {
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

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Self {
            coords: self.coords + rhs.coords,
        }
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.coords += rhs.coords;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Self {
            coords: self.coords - rhs.coords,
        }
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.coords -= rhs.coords;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Self {
            coords: -self.coords,
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Self {
            coords: self.coords * rhs,
        }
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.coords *= rhs;
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Self {
            coords: self.coords / rhs,
        }
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, rhs: f64) {
        self.coords /= rhs;
    }
}
