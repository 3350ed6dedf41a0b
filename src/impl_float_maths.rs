// Element-wise methods for arrays

use crate::array_struct::Array;
use crate::error::ArrayError;

macro_rules! unary_ops {
    ($($(#[$meta:meta])* fn $id:ident = $f:expr;)+) => {
        $($(#[$meta])*
        #[must_use = "method returns a new array and does not mutate the original value"]
        pub fn $id(&self) -> Array {
            self.map($f)
        })+
    };
}

macro_rules! binary_ops {
    ($($(#[$meta:meta])* fn $id:ident = $f:expr;)+) => {
        $($(#[$meta])*
        pub fn $id(&self, rhs: &Array) -> Result<Array, ArrayError> {
            self.zip_with(rhs, $f)
        })+
    };
}

/// The logistic sigmoid, `1 / (1 + e^-x)`.
#[inline]
pub(crate) fn expit(x: f64) -> f64 {
    1. / (1. + (-x).exp())
}

/// The inverse of [`expit`], `ln(p / (1 - p))`.
///
/// Outside of `(0, 1)` the result is infinite or NaN.
#[inline]
pub(crate) fn logit(p: f64) -> f64 {
    (p / (1. - p)).ln()
}

/// `x` raised to the power `y`.
#[inline]
pub(crate) fn power(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// The smaller of `x` and `y`; NaN if either is NaN.
#[inline]
pub(crate) fn minimum(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        f64::NAN
    } else {
        x.min(y)
    }
}

/// The larger of `x` and `y`; NaN if either is NaN.
#[inline]
pub(crate) fn maximum(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        f64::NAN
    } else {
        x.max(y)
    }
}

/// # Element-wise methods
///
/// Results follow IEEE semantics: domain errors give infinities or NaN,
/// they do not fail.
impl Array {
    unary_ops! {
        /// Absolute of each element.
        fn abs = f64::abs;
        /// The reciprocal (inverse) of each element, `1/x`.
        fn recip = f64::recip;
        /// The logistic sigmoid of each element, `1 / (1 + e^-x)`.
        fn expit = expit;
        /// The log-odds of each element, `ln(x / (1 - x))`.
        fn logit = logit;
        /// The square of each element.
        fn square = |x| x * x;
    }

    binary_ops! {
        /// Elementwise `self` raised to the power `rhs`, broadcasting an
        /// operand of length 1.
        fn pow = power;
        /// Elementwise minimum, broadcasting an operand of length 1. NaN in
        /// either operand gives NaN.
        fn minimum = minimum;
        /// Elementwise maximum, broadcasting an operand of length 1. NaN in
        /// either operand gives NaN.
        fn maximum = maximum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sigmoid() {
        assert_eq!(expit(0.), 0.5);
        assert_abs_diff_eq!(logit(0.5), 0., epsilon = 1e-15);
        assert_eq!(logit(1.), f64::INFINITY);
        assert_eq!(logit(0.), f64::NEG_INFINITY);
        assert!(logit(2.).is_nan());
    }

    #[test]
    fn unary_methods() {
        let a = array![-2., 0.5];
        assert_eq!(a.abs(), array![2., 0.5]);
        assert_eq!(a.recip(), array![-0.5, 2.]);
        assert_eq!(a.square(), array![4., 0.25]);
        assert_eq!(array![0.].recip(), array![f64::INFINITY]);
    }

    #[test]
    fn binary_methods() {
        let a = array![1., 2.];
        let b = array![4., 3.];
        assert_eq!(a.pow(&array![2.]).unwrap(), array![1., 4.]);
        assert_eq!(a.minimum(&b).unwrap(), a);
        assert_eq!(a.maximum(&b).unwrap(), b);
        assert!(a.pow(&array![1., 2., 3.]).is_err());
    }

    #[test]
    fn minimum_maximum_keep_nan() {
        assert!(minimum(f64::NAN, 1.).is_nan());
        assert!(minimum(1., f64::NAN).is_nan());
        assert!(maximum(f64::NAN, -1.).is_nan());
        assert_eq!(minimum(-0.5, 2.), -0.5);
        assert_eq!(maximum(-0.5, 2.), 2.);

        let q = array![0., 1.].zip_with(&array![0., 1.], |x, y| x / y).unwrap();
        let m = q.minimum(&array![5.]).unwrap();
        assert!(m[0].is_nan());
        assert_eq!(m[1], 1.);
        let m = q.maximum(&array![-5.]).unwrap();
        assert!(m[0].is_nan());
        assert_eq!(m[1], 1.);
    }
}
