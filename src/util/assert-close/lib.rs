/* ************************************************************************ **
** This file is part of echelon, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Scalar equality under an absolute tolerance.
//!
//! Two rules here differ from what `==` does on floats:
//!
//! * `NaN` is equal to `NaN`. (A NaN is still unequal to every number.)
//! * Infinities of the same sign are equal, even though `inf - inf` is NaN.
//!
//! The first rule is load-bearing for code that compares matrices which
//! picked up NaNs during elimination; please don't "fix" it.

use ::std::fmt;
use ::thiserror::Error;

/// Tolerance used by [`scalar_equals`] and everything built on top of it.
///
/// `2^-32 ~= 2.33e-10`, which is a reasonable practical resolution for an `f64`.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Absolute-tolerance assertion, using the comparison rules of this crate.
///
/// ```
/// # #[macro_use] extern crate echelon_assert_close;
/// # fn main() {
/// assert_close!(1.0, 1.0 + 1e-12);
/// assert_close!(eps=1e-3, 2.0, 2.0001);
/// assert_close!(vec![std::f64::NAN, 3.0], vec![std::f64::NAN, 3.0], "with a {}", "message");
/// # }
/// ```
#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => { $crate::assert_close_impl!{@parsing [$($t)*] [[@eps $crate::DEFAULT_EPSILON]]} };
}

/// Like [`assert_close!`], but only checked when `debug_assertions` are on.
#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [eps=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@eps $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut eps: f64;
            $(
                $crate::assert_close_impl!{@stmt::assign [eps] $assignment}
            )*

            if let Err(e) = $crate::CheckClose::check_close(&a, &b, $crate::Tolerance { eps }) {
                panic!(
                "{} (eps={})\n left: {:?}\nright: {:?}\n{}",
                 format!($($fmt)+), eps, a, b, e);
            }
        }
    };
    (@stmt::assign [$eps:ident] [@eps $tol:expr]) => { $eps = $tol; };
}

/// Equality with [`DEFAULT_EPSILON`].
#[inline]
pub fn scalar_equals(a: f64, b: f64) -> bool
{ scalar_equals_with_epsilon(a, b, DEFAULT_EPSILON) }

/// Test `|a - b| <= epsilon`, where NaN equals NaN and same-signed infinities are equal.
///
/// This is total over all bit patterns.  In particular a NaN `epsilon` makes
/// every pair of distinct non-NaN numbers unequal.
#[inline]
pub fn scalar_equals_with_epsilon(a: f64, b: f64, epsilon: f64) -> bool
{
    match (a.is_nan(), b.is_nan()) {
        (true, true) => return true,
        (true, false) | (false, true) => return false,
        (false, false) => {},
    }

    // inf - inf is NaN, which compares false against any epsilon
    if a.is_infinite() && a == b {
        return true;
    }

    (a - b).abs() <= epsilon
}

/// Absolute tolerance for [`CheckClose`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self { Tolerance { eps: DEFAULT_EPSILON } }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckCloseError {
    #[error("failed at:\n  left: {left:?}\n right: {right:?}\n   tol: {tol}")]
    NotClose { left: f64, right: f64, tol: Tolerance },

    #[error("lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A failure inside some element of a container.
    #[error("at index {index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<CheckCloseError>,
    },
}

impl CheckCloseError {
    /// Attach the position of the element that failed.
    pub fn at_index(self, index: usize) -> Self
    { CheckCloseError::AtIndex { index, source: Box::new(self) } }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { write!(f, "eps={}", self.eps) }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerance) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerance) -> Result<(), CheckCloseError>
    {
        if scalar_equals_with_epsilon(*self, *other, tol.eps) {
            Ok(())
        } else {
            Err(CheckCloseError::NotClose { left: *self, right: *other, tol })
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerance) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &Self, tol: Tolerance) -> Result<(), CheckCloseError>
    {
        if self.len() != other.len() {
            return Err(CheckCloseError::LengthMismatch { left: self.len(), right: other.len() });
        }
        self.iter().zip(other).enumerate()
            .map(|(i, (a, b))| a.check_close(b, tol).map_err(|e| e.at_index(i)))
            .collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Self, tol: Tolerance) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    fn check_close(&self, other: &[T], tol: Tolerance) -> Result<(), CheckCloseError>
    { self[..].check_close(other, tol) }
}

impl<T: CheckClose> CheckClose<Vec<T>> for [T] {
    fn check_close(&self, other: &Vec<T>, tol: Tolerance) -> Result<(), CheckCloseError>
    { self.check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &Self, tol: Tolerance) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}
