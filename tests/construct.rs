use flatnum::{array, Array, ErrorKind, Tolerance};

use itertools::assert_equal;

#[test]
fn zeros_ones_full() {
    assert_eq!(flatnum::zeros(3).unwrap(), array![0., 0., 0.]);
    assert_eq!(flatnum::zeros([3]).unwrap(), array![0., 0., 0.]);
    assert_eq!(flatnum::ones(3).unwrap(), array![1., 1., 1.]);
    assert_eq!(flatnum::ones(vec![3]).unwrap(), array![1., 1., 1.]);
    assert_eq!(flatnum::full(2, 0.5).unwrap(), array![0.5, 0.5]);
    assert!(flatnum::zeros(0).unwrap().is_empty());
}

#[test]
fn multi_dimensional_shapes() {
    let err = flatnum::zeros([2, 3]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidShape);
    assert_eq!(err.to_string(), "invalid shape: expected 1 dimension, got 2");
    let err = flatnum::full(&[1usize, 1, 1][..], 3.).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidShape);
}

#[test]
fn linspace_closed() {
    let a = flatnum::linspace(-3., 3., 7, true).unwrap();
    assert_eq!(a, array![-3., -2., -1., 0., 1., 2., 3.]);
    let a = flatnum::linspace(0., 1., 11, true).unwrap();
    assert_eq!(a.len(), 11);
    assert_eq!(a[10], 1.);
}

#[test]
fn linspace_half_open() {
    let a = flatnum::linspace(-3., 3., 6, false).unwrap();
    assert_eq!(a, array![-3., -2., -1., 0., 1., 2.]);
}

#[test]
fn linspace_degenerate() {
    let a = flatnum::linspace(0., 0., 1, true).unwrap();
    assert_eq!(a, array![0.]);
    assert!(!a.is_any_nan());
    assert!(flatnum::linspace(0., 0., 0, false).unwrap().is_empty());
    assert!(flatnum::linspace(0., 1., 0, true).unwrap().is_empty());

    let err = flatnum::linspace(0., 1., -2, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn logspace() {
    let a = flatnum::logspace(-3., 3., 7, true, 10.).unwrap();
    let expected = array![1e-3, 1e-2, 1e-1, 1., 1e1, 1e2, 1e3];
    assert!(a.all_close(&expected, Tolerance::default()).unwrap());

    let a = flatnum::logspace(0., 4., 4, false, 2.).unwrap();
    assert_eq!(a, array![1., 2., 4., 8.]);

    let err = flatnum::logspace(0., 1., -1, true, 10.).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn iterators() {
    assert_equal(flatnum::linspace::linspace(0., 1., 3, true), vec![0., 0.5, 1.]);
    assert_equal(
        flatnum::logspace::logspace(1., 3., 3, true, 10.).rev().map(|x: f64| x.round()),
        vec![1000., 100., 10.],
    );
}

#[test]
fn copy_is_defensive() {
    let a = array![1., 2., 3.];
    let b = flatnum::copy(&a).unwrap();
    let mut v = b.clone().into_vec();
    v[0] = 100.;
    assert_eq!(b, array![1., 2., 3.]);
    assert_eq!(a, b);

    let mut src = vec![1., 2.];
    let c = flatnum::copy(&src).unwrap();
    src[0] = -1.;
    assert_eq!(c, array![1., 2.]);
}

#[test]
fn array_macro() {
    let a: Array = array![1., 2.];
    assert_eq!(a.as_slice(), &[1., 2.]);
    assert_eq!(array![], Array::empty());
}

#[test]
#[should_panic]
fn array_macro_rejects_nan() {
    let _ = array![1., f64::NAN];
}
