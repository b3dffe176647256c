/* ************************************************************************ **
** This file is part of echelon, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Gaussian elimination to row-echelon form.

use crate::{Matrix, Row};
use ::echelon_assert_close::{scalar_equals_with_epsilon, DEFAULT_EPSILON};

/// Tunables for [`reduce_with`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(default, deny_unknown_fields, rename_all = "kebab-case"))]
pub struct ReduceSettings {
    /// Entries that are this close to zero are never used as pivots.
    pub zero_tol: f64,
}

impl Default for ReduceSettings {
    fn default() -> Self { ReduceSettings { zero_tol: DEFAULT_EPSILON } }
}

/// [`reduce_with`] using the default settings.
pub fn reduce(matrix: &Matrix) -> Matrix
{ reduce_with(&ReduceSettings::default(), matrix) }

/// Reduce (a copy of) a matrix to row-echelon form by Gaussian elimination.
///
/// For each row in turn, the pivot is the *first* entry at or below that row
/// (in the current column) that is not within `zero_tol` of zero.  It is
/// swapped up, its row is scaled so that the pivot is 1, and multiples of it
/// are added to every row below to clear that column.
///
/// When a column has no usable pivot, the column is skipped and the *same* row
/// tries again with the next column.  Once the columns run out, all remaining
/// rows are left exactly as they are.
///
/// Entries above pivots are not eliminated. (this is not the *reduced*
/// row-echelon form)
///
/// This never fails.  Non-finite input just flows through the arithmetic;
/// a NaN entry counts as nonzero and can be picked as a pivot.
pub fn reduce_with(settings: &ReduceSettings, matrix: &Matrix) -> Matrix
{
    let mut out = matrix.clone();
    let (height, width) = out.size();
    if height == 0 || width == 0 {
        return out;
    }

    let mut col = 0;
    'rows: for r in 0..height {
        let pivot_row = loop {
            if col >= width {
                trace!("ran out of columns at row {}", r);
                break 'rows;
            }
            match find_pivot(&out.rows[r..], col, settings.zero_tol) {
                Some(offset) => break r + offset,
                None => {
                    trace!("no pivot in column {} at or below row {}", col, r);
                    col += 1;
                },
            }
        };

        out.rows.swap(r, pivot_row);
        trace!("pivot {} from row {} used for ({}, {})", out.rows[r][col], pivot_row, r, col);

        out.rows[r] = out.rows[r].scalar_mul(1.0 / out.rows[r][col]);

        let (above, below) = out.rows.split_at_mut(r + 1);
        let pivot = &above[r];
        for row in below {
            // the pivot is (roughly) 1 by now, but divide anyway so that
            // non-finite pivots propagate the same way everywhere
            let factor = -row[col] / pivot[col];
            let negation = pivot.scalar_mul(factor);
            *row = row.zip_map(&negation, |a, b| a + b);
        }

        col += 1;
    }

    debug!("row-echelon form:\n{}", out);
    out
}

// index into `rows` of the first usable pivot in `col`
fn find_pivot(rows: &[Row], col: usize, zero_tol: f64) -> Option<usize>
{ rows.iter().position(|row| !scalar_equals_with_epsilon(row[col], 0.0, zero_tol)) }

/// Test the shape of a row-echelon matrix.
///
/// Treating anything within `tol` of zero as zero, this checks that:
///
/// * the leading entry of every nonzero row is 1,
/// * leading entries move strictly to the right going down,
/// * zero rows only appear after all of the nonzero rows.
///
/// (together, the first two imply that everything below a pivot is zero)
pub fn is_row_echelon(matrix: &Matrix, tol: f64) -> bool
{
    let is_zero = |x: f64| scalar_equals_with_epsilon(x, 0.0, tol);

    let mut prev_lead = None;
    let mut seen_zero_row = false;
    for row in matrix.rows() {
        match row.iter().position(|&x| !is_zero(x)) {
            None => seen_zero_row = true,
            Some(lead) => {
                if seen_zero_row || !scalar_equals_with_epsilon(row[lead], 1.0, tol) {
                    return false;
                }
                if prev_lead.map_or(false, |prev| lead <= prev) {
                    return false;
                }
                prev_lead = Some(lead);
            },
        }
    }
    true
}

/// Provides conversions into row-echelon form.
pub trait RowEchelon: Sized {
    /// Row-echelon form with default settings.  See [`reduce_with`].
    fn row_echelon(&self) -> Self;
}

impl RowEchelon for Matrix {
    fn row_echelon(&self) -> Matrix { reduce(self) }
}
