use flatnum::{array, ErrorKind};

#[test]
fn sum_mean_min_max() {
    let a = [1., 2., 3.];
    assert_eq!(flatnum::sum(&a).unwrap(), 6.);
    assert_eq!(flatnum::mean(&a).unwrap(), 2.);
    assert_eq!(flatnum::min(&a).unwrap(), 1.);
    assert_eq!(flatnum::max(&a).unwrap(), 3.);
}

#[test]
fn reductions_of_scalars() {
    assert_eq!(flatnum::sum(4.).unwrap(), 4.);
    assert_eq!(flatnum::min(-2).unwrap(), -2.);
    assert_eq!(flatnum::median(7.5).unwrap(), 7.5);
}

#[test]
fn median() {
    assert!(flatnum::median(Vec::<f64>::new()).unwrap().is_nan());
    assert_eq!(flatnum::median(&[1., 2., 3., 5.]).unwrap(), 2.5);
    assert_eq!(flatnum::median(&[1., 2., 5.]).unwrap(), 2.);
    assert_eq!(flatnum::median(&[5., 2., 1.]).unwrap(), 2.);
}

#[test]
fn mean_of_empty_is_nan() {
    assert!(flatnum::mean(Vec::<f64>::new()).unwrap().is_nan());
    assert_eq!(flatnum::sum(Vec::<f64>::new()).unwrap(), 0.);
}

#[test]
fn min_max_of_empty() {
    let err = flatnum::min(Vec::<f64>::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyArray);
    assert_eq!(err.to_string(), "min of an empty array");
    let err = flatnum::max(&array![]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyArray);
}

#[test]
fn custom_reduce() {
    let a = array![1., 2., 3., 4.];
    assert_eq!(flatnum::reduce(&a, 1., |acc, x| acc * x), 24.);
    assert_eq!(flatnum::reduce(&a, 0., f64::max), 4.);
    assert_eq!(flatnum::reduce(&array![], 5., |acc, x| acc + x), 5.);
}

#[test]
fn large_sum() {
    // long enough to take the parallel path with the `rayon` feature
    let n = flatnum::parallel::PARALLEL_THRESHOLD * 2 + 3;
    let a = flatnum::ones(n).unwrap();
    assert_eq!(flatnum::sum(&a).unwrap(), n as f64);
    assert_eq!(flatnum::max(&a).unwrap(), 1.);
    assert_eq!(a.mean(), 1.);
}

#[test]
fn nan_from_arithmetic_reaches_min_max() {
    let q = flatnum::divide(&[0., 1.], &[0., 1.]).unwrap();
    assert!(flatnum::min(&q).unwrap().is_nan());
    assert!(flatnum::max(&q).unwrap().is_nan());
    assert!(flatnum::median(&q).unwrap().is_nan());
}

#[test]
fn nan_in_large_min_max() {
    let n = flatnum::parallel::PARALLEL_THRESHOLD + 7;
    let zeros = flatnum::zeros(n).unwrap();
    let q = flatnum::divide(&zeros, &zeros).unwrap();
    let q = flatnum::minimum(&q, &flatnum::linspace(0., 1., n as i64, true).unwrap()).unwrap();
    assert!(flatnum::min(&q).unwrap().is_nan());
    assert!(flatnum::max(&q).unwrap().is_nan());
}
