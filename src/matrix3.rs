use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use crate::error::{Result, Rigid3Error};
use crate::float;
use crate::vector3::Vector3;

const MATRIX_ROWS: usize = 3;
const MATRIX_ELEMENTS: usize = 9;

/// A fixed 3x3 real-valued matrix stored as three row vectors.
///
/// The `*` operator between two matrices is the elementwise (Hadamard)
/// product; the true row-by-column matrix product lives under the
/// distinct name [`Matrix3::product`] so the two cannot be confused.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matrix3 {
    rows: [Vector3; MATRIX_ROWS],
}

impl Matrix3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z);

    /// The all-zeros matrix.
    pub const ZERO: Self = Self::new(Vector3::ZERO, Vector3::ZERO, Vector3::ZERO);

    /// The all-ones matrix.
    pub const ONES: Self = Self::new(
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0, 1.0, 1.0),
    );

    /// Creates a matrix from its three rows.
    #[must_use]
    pub const fn new(row0: Vector3, row1: Vector3, row2: Vector3) -> Self {
        Self {
            rows: [row0, row1, row2],
        }
    }

    /// Creates a matrix from a row-major slice of nine elements.
    ///
    /// # Errors
    ///
    /// Returns [`Rigid3Error::InvalidLength`] unless the slice has
    /// exactly nine elements.
    pub fn from_row_major(elems: &[f64]) -> Result<Self> {
        match elems {
            [a, b, c, d, e, f, g, h, i] => Ok(Self::new(
                Vector3::new(*a, *b, *c),
                Vector3::new(*d, *e, *f),
                Vector3::new(*g, *h, *i),
            )),
            _ => Err(Rigid3Error::InvalidLength {
                expected: MATRIX_ELEMENTS,
                actual: elems.len(),
            }),
        }
    }

    /// Returns the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Rigid3Error::IndexOutOfRange`] unless `index` is in
    /// `{0, 1, 2}`.
    pub fn row(&self, index: usize) -> Result<Vector3> {
        self.rows
            .get(index)
            .copied()
            .ok_or(Rigid3Error::IndexOutOfRange { index })
    }

    /// Returns the column at `index` as a snapshot, not a live view.
    ///
    /// # Errors
    ///
    /// Returns [`Rigid3Error::IndexOutOfRange`] unless `index` is in
    /// `{0, 1, 2}`.
    pub fn col(&self, index: usize) -> Result<Vector3> {
        if index >= MATRIX_ROWS {
            return Err(Rigid3Error::IndexOutOfRange { index });
        }
        Ok(Vector3::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
        ))
    }

    /// Returns the element at row `row` and column `col`.
    ///
    /// # Errors
    ///
    /// Returns [`Rigid3Error::IndexOutOfRange`] unless both indices are
    /// in `{0, 1, 2}`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.rows
            .get(row)
            .ok_or(Rigid3Error::IndexOutOfRange { index: row })?
            .get(col)
    }

    /// Sets the element at row `row` and column `col` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Rigid3Error::IndexOutOfRange`] unless both indices are
    /// in `{0, 1, 2}`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.rows
            .get_mut(row)
            .ok_or(Rigid3Error::IndexOutOfRange { index: row })?
            .set(col, value)
    }

    /// Returns the determinant, expanded along the first row.
    #[must_use]
    pub fn det(&self) -> f64 {
        let [r0, r1, r2] = self.rows;
        r0.x() * (r1.y() * r2.z() - r1.z() * r2.y())
            - r0.y() * (r1.x() * r2.z() - r1.z() * r2.x())
            + r0.z() * (r1.x() * r2.y() - r1.y() * r2.x())
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::new(
            Vector3::new(self.rows[0][0], self.rows[1][0], self.rows[2][0]),
            Vector3::new(self.rows[0][1], self.rows[1][1], self.rows[2][1]),
            Vector3::new(self.rows[0][2], self.rows[1][2], self.rows[2][2]),
        )
    }

    /// Returns the inverse via the adjugate-transpose over the
    /// determinant.
    ///
    /// A singular matrix does not fault: dividing the adjugate by a
    /// zero determinant propagates IEEE-754 infinities and NaNs, and
    /// callers that care must check [`Matrix3::det`] themselves.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let [r0, r1, r2] = self.rows;
        let det = self.det();
        // Rows of the adjugate are the cross products of the column
        // pairs, which equal the transposed cofactor matrix.
        Self::new(
            r1.cross(&r2) / det,
            r2.cross(&r0) / det,
            r0.cross(&r1) / det,
        )
        .transpose()
    }

    /// Returns the true matrix product `self · rhs` (row-by-column dot
    /// products), as opposed to the elementwise `*` operator.
    #[must_use]
    pub fn product(&self, rhs: &Self) -> Self {
        let t = rhs.transpose();
        let mut res = Self::ZERO;
        for i in 0..MATRIX_ROWS {
            for j in 0..MATRIX_ROWS {
                res[i][j] = self.rows[i].dot(&t.rows[j]);
            }
        }
        res
    }

    /// Returns the matrix-vector product `self · v`.
    #[must_use]
    pub fn transform(&self, v: &Vector3) -> Vector3 {
        Vector3::new(
            self.rows[0].dot(v),
            self.rows[1].dot(v),
            self.rows[2].dot(v),
        )
    }

    /// Compares two matrices for approximate equality within `ulps`
    /// units in the last place per element.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, ulps: u32) -> bool {
        self.rows[0].approx_eq(&other.rows[0], ulps)
            && self.rows[1].approx_eq(&other.rows[1], ulps)
            && self.rows[2].approx_eq(&other.rows[2], ulps)
    }
}

impl Add for Matrix3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.rows[0] + rhs.rows[0],
            self.rows[1] + rhs.rows[1],
            self.rows[2] + rhs.rows[2],
        )
    }
}

impl Sub for Matrix3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.rows[0] - rhs.rows[0],
            self.rows[1] - rhs.rows[1],
            self.rows[2] - rhs.rows[2],
        )
    }
}

/// Elementwise (Hadamard) product; use [`Matrix3::product`] for the
/// true matrix product.
impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.rows[0] * rhs.rows[0],
            self.rows[1] * rhs.rows[1],
            self.rows[2] * rhs.rows[2],
        )
    }
}

impl Mul<f64> for Matrix3 {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(
            self.rows[0] * factor,
            self.rows[1] * factor,
            self.rows[2] * factor,
        )
    }
}

impl Mul<Matrix3> for f64 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        rhs * self
    }
}

impl Div for Matrix3 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.rows[0] / rhs.rows[0],
            self.rows[1] / rhs.rows[1],
            self.rows[2] / rhs.rows[2],
        )
    }
}

impl Index<usize> for Matrix3 {
    type Output = Vector3;

    /// # Panics
    ///
    /// Panics if `index` is not in `{0, 1, 2}`; use [`Matrix3::row`]
    /// for fallible access.
    fn index(&self, index: usize) -> &Vector3 {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Matrix3 {
    fn index_mut(&mut self, index: usize) -> &mut Vector3 {
        &mut self.rows[index]
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |r: &Vector3| {
            format!(
                "[{}, {}, {}]",
                float::format_scalar(r.x()),
                float::format_scalar(r.y()),
                float::format_scalar(r.z())
            )
        };
        write!(
            f,
            "[{}, {}, {}]",
            row(&self.rows[0]),
            row(&self.rows[1]),
            row(&self.rows[2])
        )
    }
}
