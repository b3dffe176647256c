use ::std::fmt;
use ::thiserror::Error;

pub type Result<T> = ::std::result::Result<T, Error>;

/// Which index of a matrix was out of bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Rows given to a matrix constructor did not all have the same length.
    #[error("jagged matrices are not supported: row {row} has length {len}, but row 0 has length {expected}")]
    JaggedInput { row: usize, len: usize, expected: usize },

    #[error("{axis} index {index} is outside of the matrix bounds (there are {bound} {axis}s)")]
    IndexOutOfBounds { axis: Axis, index: usize, bound: usize },

    /// Vector arithmetic on vectors of different length.
    #[error("vectors have different lengths: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

impl Error {
    pub(crate) fn check_index(axis: Axis, index: usize, bound: usize) -> Result<()> {
        match index < bound {
            true => Ok(()),
            false => Err(Error::IndexOutOfBounds { axis, index, bound }),
        }
    }

    pub(crate) fn check_lengths(left: usize, right: usize) -> Result<()> {
        match left == right {
            true => Ok(()),
            false => Err(Error::DimensionMismatch { left, right }),
        }
    }
}
