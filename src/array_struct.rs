// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::slice;

use crate::error::{self, ArrayError};

/// A one-dimensional, owned array of `f64`.
///
/// Every operation in this crate returns a freshly allocated `Array`; an
/// `Array` never shares its buffer with the input it was built from.
///
/// Arrays created from caller data (`from_vec`, `TryFrom`, the adapter) are
/// checked for NaN. Arrays produced by arithmetic may hold NaN (for example
/// `0. / 0.`), and are not checked again when used as input later.
///
/// ```
/// use flatnum::Array;
///
/// let a = Array::from_vec(vec![1., 2., 3.]).unwrap();
/// assert_eq!(a.len(), 3);
/// assert_eq!(a[1], 2.);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array {
    data: Vec<f64>,
}

impl Array {
    /// Create an array from a vector, taking ownership of it.
    ///
    /// **Errors** with `InvalidValue` if any element is NaN.
    pub fn from_vec(data: Vec<f64>) -> Result<Array, ArrayError> {
        check_no_nan(&data)?;
        Ok(Array { data })
    }

    /// Create an array without looking at the elements.
    #[inline]
    pub(crate) fn from_vec_unchecked(data: Vec<f64>) -> Array {
        Array { data }
    }

    /// Create an empty array.
    pub fn empty() -> Array {
        Array { data: Vec::new() }
    }

    /// Return the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return `true` if the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Return the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Return an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Return a copy of the elements as a vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Consume the array and return its elements.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Return `true` if any element is NaN.
    pub fn is_any_nan(&self) -> bool {
        self.data.iter().any(|x| x.is_nan())
    }
}

/// Return the first NaN position as an `InvalidValue` error.
pub(crate) fn check_no_nan(xs: &[f64]) -> Result<(), ArrayError> {
    match xs.iter().position(|x| x.is_nan()) {
        Some(index) => Err(error::invalid_value(index)),
        None => Ok(()),
    }
}
