use crate::{Matrix, Vector};
use ::rand::Rng;

/// Uniform in `[-10, 10)`.
pub(crate) fn random_vector(len: usize) -> Vector
{
    let mut rng = ::rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

/// Small integers, so that exact cancellation actually happens now and then.
pub(crate) fn random_int_matrix((height, width): (usize, usize)) -> Matrix
{
    let mut rng = ::rand::thread_rng();
    let rows = (0..height)
        .map(|_| (0..width).map(|_| rng.gen_range(-3..=3) as f64).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    match height {
        0 => Matrix::zero(0, width),
        _ => Matrix::new(&rows).unwrap(),
    }
}

pub(crate) fn init_logger() {
    let _ = ::env_logger::builder().is_test(true).try_init();
}
