// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::Index;
use std::slice;
use std::vec;

use crate::array_struct::Array;
use crate::error::ArrayError;

/// Access the element at `index`.
///
/// **Panics** if index is out of bounds.
impl Index<usize> for Array {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Array {
    type Item = f64;
    type IntoIter = vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl AsRef<[f64]> for Array {
    fn as_ref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl From<Array> for Vec<f64> {
    fn from(a: Array) -> Vec<f64> {
        a.into_vec()
    }
}

/// Create an array from a vector, rejecting NaN.
impl TryFrom<Vec<f64>> for Array {
    type Error = ArrayError;

    fn try_from(v: Vec<f64>) -> Result<Array, ArrayError> {
        Array::from_vec(v)
    }
}

/// Create an array from a copy of a slice, rejecting NaN.
impl TryFrom<&[f64]> for Array {
    type Error = ArrayError;

    fn try_from(xs: &[f64]) -> Result<Array, ArrayError> {
        Array::from_vec(xs.to_vec())
    }
}
