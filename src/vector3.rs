use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::error::{Result, Rigid3Error};
use crate::float;

const VECTOR_SIZE: usize = 3;

/// A fixed 3-element real-valued vector with value semantics.
///
/// Arithmetic operators are elementwise; `*` between two vectors is the
/// Hadamard product, not the dot product. Scalar multiplication works
/// with the scalar on either side. Division follows IEEE-754, so a zero
/// divisor yields infinity or NaN rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    elems: [f64; VECTOR_SIZE],
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// The unit vector along the X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// The unit vector along the Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// The unit vector along the Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from its three components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { elems: [x, y, z] }
    }

    /// Creates a vector from a slice of components.
    ///
    /// # Errors
    ///
    /// Returns [`Rigid3Error::InvalidLength`] unless the slice has
    /// exactly three elements.
    pub fn from_slice(elems: &[f64]) -> Result<Self> {
        match elems {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(Rigid3Error::InvalidLength {
                expected: VECTOR_SIZE,
                actual: elems.len(),
            }),
        }
    }

    /// Returns the X component.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.elems[0]
    }

    /// Returns the Y component.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.elems[1]
    }

    /// Returns the Z component.
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.elems[2]
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Rigid3Error::IndexOutOfRange`] unless `index` is in
    /// `{0, 1, 2}`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.elems
            .get(index)
            .copied()
            .ok_or(Rigid3Error::IndexOutOfRange { index })
    }

    /// Sets the component at `index` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Rigid3Error::IndexOutOfRange`] unless `index` is in
    /// `{0, 1, 2}`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let slot = self
            .elems
            .get_mut(index)
            .ok_or(Rigid3Error::IndexOutOfRange { index })?;
        *slot = value;
        Ok(())
    }

    /// Returns the dot product with `other`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Returns the right-handed cross product with `other`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Returns the Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Compares two vectors for approximate equality within `ulps`
    /// units in the last place per component.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, ulps: u32) -> bool {
        float::almost_equal(self.x(), other.x(), ulps)
            && float::almost_equal(self.y(), other.y(), ulps)
            && float::almost_equal(self.z(), other.z(), ulps)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

/// Elementwise (Hadamard) product; use [`Vector3::dot`] for the dot
/// product.
impl Mul for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x() * rhs.x(), self.y() * rhs.y(), self.z() * rhs.z())
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(self.x() * factor, self.y() * factor, self.z() * factor)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div for Vector3 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x() / rhs.x(), self.y() / rhs.y(), self.z() / rhs.z())
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, factor: f64) -> Self {
        Self::new(self.x() / factor, self.y() / factor, self.z() / factor)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if `index` is not in `{0, 1, 2}`; use [`Vector3::get`]
    /// for fallible access.
    fn index(&self, index: usize) -> &f64 {
        &self.elems[index]
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.elems[index]
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {}, y: {}, z: {})",
            float::format_scalar(self.x()),
            float::format_scalar(self.y()),
            float::format_scalar(self.z())
        )
    }
}
