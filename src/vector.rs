use core::ops::{Div, Mul};
use crate::MathError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector
{
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<[f64; 3]> for Vector {
    fn from(values: [f64; 3]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            z: values[2],
        }
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = MathError;

    /// Slices are only accepted when they hold exactly 3 elements.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [x, y, z] => Ok(Vector { x: *x, y: *y, z: *z }),
            _ => Err(MathError::InvalidArgument("vector must have exactly 3 elements")),
        }
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Vector
{
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// Returns a zero vector.
    ///
    pub const fn zero() -> Self {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Calculate the length/magnitude of the vector
    ///
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize the vector. A zero-length vector has no direction and
    /// cannot be normalized.
    ///
    pub fn normalize(&self) -> Result<Vector, MathError> {
        let len = self.magnitude();
        if len == 0.0 {
            return Err(MathError::InvalidArgument("cannot normalize a zero-length vector"));
        }
        Ok(self / len)
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f64) -> bool {
        libm::fabs(self.x - other.x) <= tol
            && libm::fabs(self.y - other.y) <= tol
            && libm::fabs(self.z - other.z) <= tol
    }
}

impl Div<f64> for &Vector
{
    type Output = Vector;

    fn div(self, other: f64) -> Self::Output {
        Vector {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl Mul<f64> for Vector
{
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Vector {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
