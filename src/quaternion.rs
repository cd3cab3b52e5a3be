use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign};
use crate::*;

/// Tolerance used by [`Quaternion::is_unit`] to absorb floating-point
/// inaccuracy in the norm.
const UNIT_EPSILON: f64 = 1e-10;

/// A quaternion `a + bi + cj + dk`, the 4-dimensional extension of the
/// complex numbers. Unit quaternions encode 3D rotations without gimbal
/// lock, see [`Quaternion::from_axis_angle`] and [`Quaternion::rotate`].
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion
{
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl From<[f64; 4]> for Quaternion {
    fn from(values: [f64; 4]) -> Self {
        Self {
            a: values[0],
            b: values[1],
            c: values[2],
            d: values[3],
        }
    }
}


impl Quaternion
{
    /// Create a new quaternion with the given components.
    ///
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Quaternion { a, b, c, d }
    }

    /// Returns the identity quaternion (no rotation)
    ///
    pub const fn identity() -> Self {
        Quaternion {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
        }
    }

    /// Constructs a quaternion from a real part and an imaginary/vector part.
    ///
    pub const fn from_parts(a: f64, im: Vector) -> Self {
        Quaternion {
            a,
            b: im.x,
            c: im.y,
            d: im.z,
        }
    }

    /// Constructs the unit quaternion encoding a rotation of `angle` radians
    /// (right-hand rule) around `axis`. The axis is normalized internally and
    /// must be a 3-element slice with nonzero length.
    ///
    pub fn from_axis_angle(angle: f64, axis: &[f64]) -> Result<Self, MathError> {
        let axis = Vector::try_from(axis)?.normalize()?;

        let half_angle = angle / 2.0;

        Ok(Quaternion::from_parts(
            libm::cos(half_angle),
            axis * libm::sin(half_angle),
        ))
    }

    /// Returns the real part of the quaternion.
    ///
    pub fn re(&self) -> f64 {
        self.a
    }

    /// Returns the imaginary part `[b, c, d]` as a fresh array.
    ///
    pub fn im(&self) -> [f64; 3] {
        [self.b, self.c, self.d]
    }

    /// Overwrites the real part of the quaternion.
    ///
    pub fn set_re(&mut self, re: f64) {
        self.a = re;
    }

    /// Overwrites the imaginary part, the slice must hold exactly 3 elements.
    ///
    pub fn set_im(&mut self, im: &[f64]) -> Result<(), MathError> {
        let im = Vector::try_from(im)?;
        self.b = im.x;
        self.c = im.y;
        self.d = im.z;
        Ok(())
    }

    /// Checks whether this is a unit quaternion, i.e. whether its norm is 1
    /// within a fixed tolerance of 1e-10.
    ///
    pub fn is_unit(&self) -> bool {
        libm::fabs(self.norm() - 1.0) < UNIT_EPSILON
    }

    /// The determinant (norm squared) of the quaternion, `a² + b² + c² + d²`.
    ///
    pub fn determinant(&self) -> f64 {
        self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d
    }

    /// Get the norm/magnitude of the quaternion.
    ///
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.determinant())
    }

    /// Normalize the quaternion in place to make it a unit quaternion.
    /// The zero quaternion cannot be normalized.
    ///
    pub fn normalize(&mut self) -> Result<(), MathError> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(MathError::Arithmetic("cannot normalize a zero quaternion"));
        }
        self.a /= norm;
        self.b /= norm;
        self.c /= norm;
        self.d /= norm;
        Ok(())
    }

    /// Compute the conjugate of the quaternion, `(a, -b, -c, -d)`.
    ///
    pub fn conjugate(&self) -> Self {
        Quaternion {
            a: self.a,
            b: -self.b,
            c: -self.c,
            d: -self.d,
        }
    }

    /// The Hamilton product `self ⊗ other`. Quaternion multiplication is not
    /// commutative, `self` is the left-hand operand.
    ///
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            a: self.a * other.a - self.b * other.b - self.c * other.c - self.d * other.d,
            b: self.a * other.b + self.b * other.a + self.c * other.d - self.d * other.c,
            c: self.a * other.c - self.b * other.d + self.c * other.a + self.d * other.b,
            d: self.a * other.d + self.b * other.c - self.c * other.b + self.d * other.a,
        }
    }

    /// The inverse `q⁻¹ = q̄ / ‖q‖²`. The zero quaternion has no inverse.
    ///
    pub fn inverse(&self) -> Result<Quaternion, MathError> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            return Err(MathError::Arithmetic("cannot invert a quaternion with zero norm"));
        }
        Ok(self.conjugate() * (1.0 / determinant))
    }

    /// Rotates a 3D vector by this quaternion using `v' = q ⊗ v ⊗ q⁻¹`.
    /// For unit quaternions the conjugate is the exact inverse and is used
    /// directly, otherwise the general inverse is computed. The vector must
    /// be a 3-element slice.
    ///
    pub fn rotate(&self, vector: &[f64]) -> Result<[f64; 3], MathError> {
        let v = Quaternion::from_parts(0.0, Vector::try_from(vector)?);

        let inverse = if self.is_unit() {
            self.conjugate()
        } else {
            self.inverse()?
        };

        // Multiplication order matters: (q ⊗ v) ⊗ q⁻¹.
        let rotated = self.multiply(&v).multiply(&inverse);

        // The real part of the result is ~0 and is discarded.
        Ok(rotated.im())
    }

    /// Approximate equality check with a given tolerance.
    ///
    pub fn approx_eq(&self, other: &Quaternion, tol: f64) -> bool {
        libm::fabs(self.a - other.a) <= tol
            && libm::fabs(self.b - other.b) <= tol
            && libm::fabs(self.c - other.c) <= tol
            && libm::fabs(self.d - other.d) <= tol
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.3} + {:.3}i + {:.3}j + {:.3}k", self.a, self.b, self.c, self.d)
    }
}

impl Add for Quaternion
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Quaternion {
            a: self.a + other.a,
            b: self.b + other.b,
            c: self.c + other.c,
            d: self.d + other.d,
        }
    }
}

impl AddAssign for Quaternion
{
    fn add_assign(&mut self, other: Self) {
        self.a += other.a;
        self.b += other.b;
        self.c += other.c;
        self.d += other.d;
    }
}

impl Mul<f64> for Quaternion
{
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Quaternion {
            a: self.a * other,
            b: self.b * other,
            c: self.c * other,
            d: self.d * other,
        }
    }
}

impl MulAssign<f64> for Quaternion
{
    fn mul_assign(&mut self, other: f64) {
        self.a *= other;
        self.b *= other;
        self.c *= other;
        self.d *= other;
    }
}

impl Mul<Quaternion> for &Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        self.multiply(&other)
    }
}
impl Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;
    fn mul(self, other: &Quaternion) -> Self::Output {
        self.multiply(other)
    }
}
impl Mul<Quaternion> for Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        (&self).multiply(&other)
    }
}
impl Mul<&Quaternion> for Quaternion {
    type Output = Quaternion;
    fn mul(self, other: &Quaternion) -> Self::Output {
        (&self).multiply(other)
    }
}

impl MulAssign for Quaternion
{
    fn mul_assign(&mut self, other: Self) {
        *self = self.multiply(&other);
    }
}
