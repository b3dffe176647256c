//! Math on variable length contiguous vectors.
//!
//! Every operation here produces a new `Vector`; nothing mutates in place.

use crate::{Error, Result};

use ::std::fmt;
use ::std::iter::FromIterator;
use ::std::ops::{Index, Mul};
use ::echelon_assert_close::{scalar_equals, scalar_equals_with_epsilon};
use ::echelon_assert_close::{CheckClose, CheckCloseError, Tolerance};

/// A fixed-length sequence of `f64`.
///
/// The length is decided at construction and never changes.  `clone()` is a
/// deep copy.
///
/// Arithmetic follows plain IEEE semantics (`inf * 0.0` is NaN, and so on),
/// while [`Vector::equals`] uses the NaN-aware tolerance comparison.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(transparent))]
pub struct Vector(Vec<f64>);

/// A row of a [`Matrix`](crate::Matrix).
pub type Row = Vector;
/// A column of a [`Matrix`](crate::Matrix), materialized on demand.
pub type Column = Vector;

impl Vector {
    pub fn new(data: Vec<f64>) -> Self { Vector(data) }

    pub fn zeros(len: usize) -> Self { Vector(vec![0.0; len]) }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn as_slice(&self) -> &[f64] { &self.0 }
    pub fn iter(&self) -> ::std::slice::Iter<'_, f64> { self.0.iter() }
    pub fn into_vec(self) -> Vec<f64> { self.0 }

    /// Checked element access.
    pub fn get(&self, index: usize) -> Option<f64> { self.0.get(index).cloned() }

    /// Multiply every element by `c`.
    pub fn scalar_mul(&self, c: f64) -> Vector
    { self.iter().map(|&x| x * c).collect() }

    /// Element-wise equality within [`DEFAULT_EPSILON`].
    ///
    /// Vectors of different length are never equal.
    ///
    /// [`DEFAULT_EPSILON`]: ::echelon_assert_close::DEFAULT_EPSILON
    pub fn equals(&self, other: &Vector) -> bool
    {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(&a, &b)| scalar_equals(a, b))
    }

    /// Element-wise equality within `epsilon`.
    pub fn equals_with_epsilon(&self, other: &Vector, epsilon: f64) -> bool
    {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(&a, &b)| scalar_equals_with_epsilon(a, b, epsilon))
    }

    /// Euclidean norm.  The empty vector has magnitude zero.
    pub fn magnitude(&self) -> f64
    { self.iter().map(|&x| x * x).sum::<f64>().sqrt() }

    /// Element-wise sum.
    pub fn add(&self, other: &Vector) -> Result<Vector>
    {
        Error::check_lengths(self.len(), other.len())?;
        Ok(self.zip_map(other, |a, b| a + b))
    }

    /// Sum of element-wise products.
    pub fn dot(&self, other: &Vector) -> Result<f64>
    {
        Error::check_lengths(self.len(), other.len())?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    // callers are responsible for checking lengths
    pub(crate) fn zip_map<F>(&self, other: &Vector, mut f: F) -> Vector
    where F: FnMut(f64, f64) -> f64,
    {
        ::itertools::zip_eq(self.iter(), other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect()
    }

    pub(crate) fn iter_mut(&mut self) -> ::std::slice::IterMut<'_, f64> { self.0.iter_mut() }
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] { &mut self.0 }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self { Vector(data) }
}

impl<'a> From<&'a [f64]> for Vector {
    fn from(data: &'a [f64]) -> Self { Vector(data.to_vec()) }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self { v.0 }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self
    { Vector(iter.into_iter().collect()) }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] { &self.0 }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = ::std::slice::Iter<'a, f64>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = ::std::vec::IntoIter<f64>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

/// Panics when out of range, like slice indexing.  See [`Vector::get`].
impl Index<usize> for Vector {
    type Output = f64;

    #[inline(always)]
    fn index(&self, index: usize) -> &f64 { &self.0[index] }
}

impl<'a> Mul<f64> for &'a Vector {
    type Output = Vector;
    fn mul(self, c: f64) -> Vector { self.scalar_mul(c) }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(mut self, c: f64) -> Vector {
        for x in self.iter_mut() { *x *= c; }
        self
    }
}

impl<'a> Mul<&'a Vector> for f64 {
    type Output = Vector;
    fn mul(self, v: &'a Vector) -> Vector { v.scalar_mul(self) }
}

impl CheckClose for Vector {
    fn check_close(&self, other: &Vector, tol: Tolerance) -> ::std::result::Result<(), CheckCloseError>
    { self.as_slice().check_close(other.as_slice(), tol) }
}

/// Formats like `[1 2.5 -3]`.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        write!(f, "]")
    }
}
