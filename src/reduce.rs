// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::array_struct::Array;
use crate::error::{self, ArrayError};
use crate::impl_float_maths;
use crate::parallel;

/// Fold the elements of `a` from left to right, starting with `init`.
///
/// ```
/// use flatnum::{array, reduce};
///
/// let a = array![1., 2., 3.];
/// assert_eq!(reduce(&a, 0., |acc, x| acc + x), 6.);
/// assert_eq!(reduce(&a, 1., |acc, x| acc * x), 6.);
/// ```
pub fn reduce<F>(a: &Array, init: f64, combine: F) -> f64
where
    F: FnMut(f64, f64) -> f64,
{
    a.iter().copied().fold(init, combine)
}

/// Reductions.
impl Array {
    /// Return the sum of all elements, `0.` for an empty array.
    ///
    /// ```
    /// use flatnum::array;
    ///
    /// assert_eq!(array![1., 2., 3.].sum(), 6.);
    /// ```
    pub fn sum(&self) -> f64 {
        if let Some(sum) = parallel::sum(self.as_slice()) {
            return sum;
        }
        reduce(self, 0., |acc, x| acc + x)
    }

    /// Return the arithmetic mean of all elements.
    ///
    /// The mean of an empty array is NaN, the result of `0. / 0.`.
    pub fn mean(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    /// Return the smallest element.
    ///
    /// The result is NaN if any element is NaN.
    ///
    /// **Errors** with `EmptyArray` if the array is empty.
    pub fn min(&self) -> Result<f64, ArrayError> {
        self.fold_from_first("min", impl_float_maths::minimum)
    }

    /// Return the largest element.
    ///
    /// The result is NaN if any element is NaN.
    ///
    /// **Errors** with `EmptyArray` if the array is empty.
    pub fn max(&self) -> Result<f64, ArrayError> {
        self.fold_from_first("max", impl_float_maths::maximum)
    }

    /// Return the median: the middle element of the sorted elements, or the
    /// average of the two middle elements for an even length.
    ///
    /// The median of an empty array is NaN.
    ///
    /// ```
    /// use flatnum::array;
    ///
    /// assert_eq!(array![5., 1., 2.].median(), 2.);
    /// assert_eq!(array![1., 2., 3., 5.].median(), 2.5);
    /// assert!(array![].median().is_nan());
    /// ```
    pub fn median(&self) -> f64 {
        let sorted = self.sorted();
        let n = sorted.len();
        if n == 0 {
            f64::NAN
        } else if n % 2 == 1 {
            sorted[(n - 1) / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.
        }
    }

    fn fold_from_first(&self, op: &'static str, f: fn(f64, f64) -> f64) -> Result<f64, ArrayError> {
        let first = match self.get(0) {
            Some(x) => x,
            None => return Err(error::empty_array(op)),
        };
        if let Some(r) = parallel::reduce_from(self.as_slice(), first, f) {
            return Ok(r);
        }
        Ok(reduce(self, first, f))
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, ErrorKind};

    #[test]
    fn sum_and_mean() {
        let a = array![1., 2., 3.];
        assert_eq!(a.sum(), 6.);
        assert_eq!(a.mean(), 2.);
        assert_eq!(array![].sum(), 0.);
        assert!(array![].mean().is_nan());
    }

    #[test]
    fn min_max() {
        let a = array![2., 1., 3.];
        assert_eq!(a.min().unwrap(), 1.);
        assert_eq!(a.max().unwrap(), 3.);
        assert_eq!(array![-0.5].min().unwrap(), -0.5);
    }

    #[test]
    fn min_max_keep_nan() {
        let q = array![0., 1.].zip_with(&array![0., 1.], |x, y| x / y).unwrap();
        assert!(q.min().unwrap().is_nan());
        assert!(q.max().unwrap().is_nan());
        assert!(q.median().is_nan());
    }

    #[test]
    fn min_max_of_empty() {
        assert_eq!(array![].min().unwrap_err().kind(), ErrorKind::EmptyArray);
        assert_eq!(array![].max().unwrap_err().kind(), ErrorKind::EmptyArray);
    }

    #[test]
    fn median_does_not_reorder() {
        let a = array![3., 1., 2., 10.];
        assert_eq!(a.median(), 2.5);
        assert_eq!(a, array![3., 1., 2., 10.]);
    }
}
