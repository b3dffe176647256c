#![allow(dead_code)] // not every test file uses every helper

use ::echelon::Matrix;
use ::rand::Rng;

pub fn init_logger() {
    let _ = ::env_logger::builder().is_test(true).try_init();
}

pub fn mat<V: AsRef<[f64]>>(rows: &[V]) -> Matrix { Matrix::new(rows).unwrap() }

/// Random dimensions in `0..max`, where either side may be zero.
pub fn random_dims(max: usize) -> (usize, usize) {
    let mut rng = ::rand::thread_rng();
    (rng.gen_range(0..max), rng.gen_range(0..max))
}

/// Entries are drawn from `values`, so that exact zeros and cancellations
/// show up regularly.
pub fn random_matrix_from((height, width): (usize, usize), values: &[f64]) -> Matrix {
    let mut rng = ::rand::thread_rng();
    let mut m = Matrix::zero(height, width);
    for r in 0..height {
        for c in 0..width {
            m.set(values[rng.gen_range(0..values.len())], r, c).unwrap();
        }
    }
    m
}

/// Uniform entries in `[-1, 1)`.
pub fn random_uniform_matrix((height, width): (usize, usize)) -> Matrix {
    let mut rng = ::rand::thread_rng();
    let mut m = Matrix::zero(height, width);
    for r in 0..height {
        for c in 0..width {
            m.set(rng.gen_range(-1.0..1.0), r, c).unwrap();
        }
    }
    m
}

/// The raw entries, for structural comparisons.
pub fn entries(m: &Matrix) -> Vec<Vec<f64>> {
    m.rows().map(|row| row.as_slice().to_vec()).collect()
}
