use crate::{Axis, Error, Result};
use crate::{Row, Column, Vector};

use ::std::convert::TryFrom;
use ::std::fmt;
use ::std::ops::Index;
use ::echelon_assert_close::{CheckClose, CheckCloseError, Tolerance, DEFAULT_EPSILON};

/// Owned rectangular matrix, stored as a list of rows.
///
/// A matrix built from zero rows is `0x0`.  To get zero rows but a nonzero
/// number of columns, use [`Matrix::zero`].
// please resist the urge to go n-dimensional
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(try_from = "Vec<Row>", into = "Vec<Row>"))]
pub struct Matrix {
    // invariant: every row has length `width`
    pub(crate) rows: Vec<Row>,
    pub(crate) width: usize,
}

impl Matrix {
    /// Build a matrix from (a copy of) some rows.
    ///
    /// Fails with [`Error::JaggedInput`] unless all rows have the same length;
    /// nothing is ever truncated or padded.
    pub fn new<V: AsRef<[f64]>>(rows: &[V]) -> Result<Matrix>
    {
        let rows = rows.iter().map(|row| Vector::from(row.as_ref())).collect();
        Matrix::from_rows(rows)
    }

    /// Build a matrix that takes ownership of the rows.
    pub fn from_rows(rows: Vec<Row>) -> Result<Matrix>
    {
        let width = rows.first().map_or(0, |row| row.len());
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(Error::JaggedInput { row, len: bad.len(), expected: width });
        }
        Ok(Matrix { rows, width })
    }

    /// All-zero matrix.  Unlike [`Matrix::new`], this can make `0xN` matrices.
    pub fn zero(height: usize, width: usize) -> Matrix
    { Matrix {
        rows: (0..height).map(|_| Vector::zeros(width)).collect(),
        width,
    }}

    /// `(number of rows, number of columns)`
    pub fn size(&self) -> (usize, usize) { (self.rows.len(), self.width) }
    pub fn num_rows(&self) -> usize { self.rows.len() }
    pub fn num_cols(&self) -> usize { self.width }

    pub fn rows(&self) -> ::std::slice::Iter<'_, Row> { self.rows.iter() }
    pub fn into_rows(self) -> Vec<Row> { self.rows }

    /// Equal sizes, and every row [`equals`](Vector::equals) its counterpart.
    ///
    /// Note that `0x0` and `0x3` matrices are *not* equal.
    pub fn equals(&self, other: &Matrix) -> bool
    { self.equals_with_epsilon(other, DEFAULT_EPSILON) }

    pub fn equals_with_epsilon(&self, other: &Matrix, epsilon: f64) -> bool
    {
        self.size() == other.size()
            && self.rows.iter().zip(&other.rows).all(|(a, b)| a.equals_with_epsilon(b, epsilon))
    }

    pub fn get_row(&self, row: usize) -> Result<&Row>
    {
        Error::check_index(Axis::Row, row, self.num_rows())?;
        Ok(&self.rows[row])
    }

    /// Copy out a column.
    pub fn get_column(&self, col: usize) -> Result<Column>
    {
        Error::check_index(Axis::Column, col, self.num_cols())?;
        Ok(self.rows.iter().map(|row| row[col]).collect())
    }

    /// Bounds-checked `self[(row, col)]`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64>
    {
        self.check_element(row, col)?;
        Ok(self.rows[row][col])
    }

    /// Bounds-checked `self[(row, col)] = value`.
    pub fn set(&mut self, value: f64, row: usize, col: usize) -> Result<()>
    {
        self.check_element(row, col)?;
        self.rows[row].as_mut_slice()[col] = value;
        Ok(())
    }

    /// A new matrix whose rows are the columns of this one.
    ///
    /// The shape is always exactly flipped, so an `Nx0` matrix becomes `0xN`.
    pub fn transpose(&self) -> Matrix
    { Matrix {
        rows: (0..self.width).map(|c| self.rows.iter().map(|row| row[c]).collect()).collect(),
        width: self.num_rows(),
    }}

    /// Exchange two rows in place.  Swapping a row with itself does nothing.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<()>
    {
        Error::check_index(Axis::Row, r1, self.num_rows())?;
        Error::check_index(Axis::Row, r2, self.num_rows())?;
        self.rows.swap(r1, r2);
        Ok(())
    }

    /// No NaNs or infinities anywhere.
    pub fn is_finite(&self) -> bool
    { self.rows.iter().all(|row| row.iter().all(|x| x.is_finite())) }

    fn check_element(&self, row: usize, col: usize) -> Result<()>
    {
        Error::check_index(Axis::Row, row, self.num_rows())?;
        Error::check_index(Axis::Column, col, self.num_cols())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &f64
    { &self.rows[r][c] }
}

impl TryFrom<Vec<Row>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Row>) -> Result<Matrix> { Matrix::from_rows(rows) }
}

impl From<Matrix> for Vec<Row> {
    fn from(m: Matrix) -> Self { m.rows }
}

impl CheckClose for Matrix {
    fn check_close(&self, other: &Matrix, tol: Tolerance) -> ::std::result::Result<(), CheckCloseError>
    {
        // the row check alone can't see this for matrices with no rows
        if self.width != other.width {
            return Err(CheckCloseError::LengthMismatch { left: self.width, right: other.width });
        }
        self.rows[..].check_close(&other.rows[..], tol)
    }
}

/// Formats like
///
/// ```text
/// [[1 2 3]
///  [4 5 6]]
/// ```
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            fmt::Display::fmt(row, f)?;
        }
        write!(f, "]")
    }
}
