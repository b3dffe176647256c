/* ************************************************************************ **
** This file is part of echelon, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small dense linear algebra over `f64`, centered on row-echelon reduction.
//!
//! ```
//! use echelon::{Matrix, RowEchelon};
//!
//! let m = Matrix::new(&[
//!     [2.0, -4.0, 1.5],
//!     [6.0, -4.0, 0.0],
//! ]).unwrap();
//!
//! let expected = Matrix::new(&[
//!     [1.0, -2.0, 0.75],
//!     [0.0, 1.0, -0.5625],
//! ]).unwrap();
//!
//! assert!(m.row_echelon().equals(&expected));
//! ```
//!
//! The pieces live in workspace crates and are re-exported here:
//!
//! * `echelon-assert-close`: the scalar comparison rules (NaN equals NaN),
//!   plus `assert_close!` for tests.
//! * `echelon-matrix`: [`Vector`], [`Matrix`], and the reduction itself.

pub use ::echelon_assert_close::{scalar_equals, scalar_equals_with_epsilon, DEFAULT_EPSILON};
pub use ::echelon_assert_close::{CheckClose, CheckCloseError, Tolerance};
pub use ::echelon_assert_close::{assert_close, debug_assert_close};

pub use ::echelon_matrix::{Vector, Row, Column, Matrix};
pub use ::echelon_matrix::{Error, Result, Axis};
pub use ::echelon_matrix::{reduce, reduce_with, is_row_echelon, ReduceSettings, RowEchelon};
