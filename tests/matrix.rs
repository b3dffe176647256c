use ::echelon::{assert_close, CheckClose, Tolerance};
use ::echelon::{Axis, Error, Matrix, Vector};
use ::echelon::{scalar_equals, scalar_equals_with_epsilon};
use ::pretty_assertions::assert_eq;
use ::rand::Rng;
use ::std::f64::{INFINITY as INF, NEG_INFINITY as NEG_INF, NAN};

mod shared;
use self::shared::{mat, entries, random_dims, random_uniform_matrix};

#[test]
fn scalar_comparison() {
    assert!(scalar_equals(NAN, NAN));
    assert!(!scalar_equals(NAN, 0.0));
    assert!(scalar_equals(INF, INF));
    assert!(!scalar_equals(INF, NEG_INF));
    assert!(!scalar_equals(INF, 1e300));
    assert!(scalar_equals(1.0, 1.0 + 1e-11));
    assert!(!scalar_equals(1.0, 1.0 + 1e-9));
    assert!(scalar_equals_with_epsilon(1.0, 1.5, 0.5));
    assert!(!scalar_equals_with_epsilon(1.0, 1.5, 0.25));
}

#[test]
fn construction_errors() {
    assert_eq!(
        Matrix::new(&[vec![1.0], vec![], vec![2.0]]).unwrap_err(),
        Error::JaggedInput { row: 1, len: 0, expected: 1 },
    );
    assert!(Matrix::new(&[vec![1.0, 2.0], vec![3.0, 4.0]]).is_ok());
}

#[test]
fn error_messages() {
    let err = Matrix::zero(2, 2).get(0, 5).unwrap_err();
    assert_eq!(err, Error::IndexOutOfBounds { axis: Axis::Column, index: 5, bound: 2 });
    assert_eq!(err.to_string(), "column index 5 is outside of the matrix bounds (there are 2 columns)");

    let err = Vector::zeros(2).dot(&Vector::zeros(3)).unwrap_err();
    assert_eq!(err.to_string(), "vectors have different lengths: 2 vs 3");
}

#[test]
fn bounds() {
    let mut m = mat(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert!(m.get_row(2).is_err());
    assert!(m.get_column(3).is_err());
    assert!(m.get(2, 0).is_err());
    assert!(m.set(0.0, 0, 3).is_err());
    assert!(m.swap_rows(0, 2).is_err());

    m.swap_rows(0, 1).unwrap();
    assert_eq!(entries(&m), vec![vec![4.0, 5.0, 6.0], vec![1.0, 2.0, 3.0]]);
    assert_eq!(m.get_column(1).unwrap().as_slice(), &[5.0, 2.0][..]);
}

#[test]
fn transpose_twice_is_identity() {
    for _ in 0..100 {
        let m = random_uniform_matrix(random_dims(6));
        let tt = m.transpose().transpose();
        assert_eq!(tt.size(), m.size());
        assert_eq!(entries(&tt), entries(&m));
    }
}

#[test]
fn transpose_entries() {
    let m = random_uniform_matrix((3, 5));
    let t = m.transpose();
    assert_eq!(t.size(), (5, 3));
    for r in 0..3 {
        for c in 0..5 {
            assert_eq!(t[(c, r)], m[(r, c)]);
        }
    }
}

#[test]
fn vector_arithmetic_commutes() {
    let mut rng = ::rand::thread_rng();
    for _ in 0..100 {
        let len = rng.gen_range(0..10);
        let a: Vector = (0..len).map(|_| rng.gen_range(-5.0..5.0)).collect();
        let b: Vector = (0..len).map(|_| rng.gen_range(-5.0..5.0)).collect();

        assert_close!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_close!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
        assert_close!(a.dot(&a).unwrap(), a.magnitude() * a.magnitude(), "{}", a);

        let c: f64 = rng.gen_range(-5.0..5.0);
        assert_close!(&a * c, a.scalar_mul(c));
        assert_close!(c * &a, a.scalar_mul(c));
        assert_close!(a.clone() * c, a.scalar_mul(c));
    }
}

#[test]
fn matrix_equality() {
    let a = mat(&[[1.0, NAN], [INF, 0.0]]);
    let b = mat(&[[1.0 + 1e-12, NAN], [INF, -1e-12]]);
    assert!(a.equals(&b));
    assert!(a.check_close(&b, Tolerance::default()).is_ok());
    assert!(!a.equals(&mat(&[[1.0, 0.0], [INF, 0.0]])));
    assert!(!a.equals(&a.transpose()));

    assert!(!Matrix::zero(0, 0).equals(&Matrix::zero(0, 2)));
    assert!(Matrix::zero(0, 2).equals(&Matrix::zero(0, 2)));
}
