/* ************************************************************************ **
** This file is part of echelon, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense `f64` vectors and rectangular matrices, plus reduction to row-echelon form.
//!
//! Matrices are row-based: a [`Matrix`] owns a list of [`Row`]s, all of the same
//! length.  All indices are zero-based.
//!
//! Equality throughout this crate is the tolerance-based equality of
//! `echelon_assert_close`, where NaN equals NaN.

#[macro_use] extern crate log;
#[cfg_attr(test, macro_use)] extern crate echelon_assert_close;

pub use crate::error::{Error, Result, Axis};
mod error;

pub use crate::vector::{Vector, Row, Column};
mod vector;

pub use crate::matrix::Matrix;
mod matrix;

pub use crate::echelon::{reduce, reduce_with, is_row_echelon, ReduceSettings, RowEchelon};
mod echelon;

#[cfg(test)]
pub(crate) mod test_util;
