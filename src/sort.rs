// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::cmp::Ordering;

use crate::array_struct::Array;
use crate::error::{self, ArrayError};

/// Ascending order with NaN after every number, and `-0. == 0.`.
fn ascending(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Sorting based queries.
impl Array {
    /// Return a sorted copy of the array, in ascending order.
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn sorted(&self) -> Array {
        let mut data = self.to_vec();
        data.sort_by(ascending);
        Array::from_vec_unchecked(data)
    }

    /// Return the indices that would sort the array in ascending order.
    ///
    /// The sort is stable: equal elements keep their relative order. Any NaN
    /// sorts after all numbers.
    ///
    /// ```
    /// use flatnum::array;
    ///
    /// assert_eq!(array![1., 3., 2.].argsort(), vec![0, 2, 1]);
    /// ```
    pub fn argsort(&self) -> Vec<usize> {
        let xs = self.as_slice();
        let mut indices: Vec<usize> = (0..xs.len()).collect();
        indices.sort_by(|&i, &j| ascending(&xs[i], &xs[j]));
        indices
    }

    /// Return the index of the first occurrence of the smallest element.
    ///
    /// **Errors** with `EmptyArray` if the array is empty.
    ///
    /// ```
    /// use flatnum::array;
    ///
    /// assert_eq!(array![4., 1., 3., 1.].argmin().unwrap(), 1);
    /// ```
    pub fn argmin(&self) -> Result<usize, ArrayError> {
        self.first_best("argmin", |x, best| x < best)
    }

    /// Return the index of the first occurrence of the largest element.
    ///
    /// **Errors** with `EmptyArray` if the array is empty.
    pub fn argmax(&self) -> Result<usize, ArrayError> {
        self.first_best("argmax", |x, best| x > best)
    }

    // left to right scan, only a strict improvement moves the index
    fn first_best<F>(&self, op: &'static str, better: F) -> Result<usize, ArrayError>
    where
        F: Fn(f64, f64) -> bool,
    {
        let xs = self.as_slice();
        if xs.is_empty() {
            return Err(error::empty_array(op));
        }
        let mut best = 0;
        for (i, &x) in xs.iter().enumerate().skip(1) {
            if better(x, xs[best]) {
                best = i;
            }
        }
        Ok(best)
    }
}
