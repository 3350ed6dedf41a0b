// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for arrays.

use crate::array_struct::Array;
use crate::error::{self, ArrayError};
use crate::{linspace, logspace};

/// The requested shape of a new array.
///
/// Only one-dimensional shapes are supported: a bare length (`3`) or a
/// shape with exactly one axis (`[3]`, `vec![3]`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// A bare length.
    Len(usize),
    /// Lengths of each axis.
    Dims(Vec<usize>),
}

impl Shape {
    /// Return the number of axes.
    pub fn ndim(&self) -> usize {
        match self {
            Shape::Len(_) => 1,
            Shape::Dims(dims) => dims.len(),
        }
    }

    /// Return the length of the single axis.
    ///
    /// **Errors** with `InvalidShape` if the shape does not have exactly one
    /// axis.
    pub fn to_len(&self) -> Result<usize, ArrayError> {
        match self {
            Shape::Len(n) => Ok(*n),
            Shape::Dims(dims) => match dims.as_slice() {
                [n] => Ok(*n),
                _ => Err(error::invalid_shape(dims.len())),
            },
        }
    }
}

impl From<usize> for Shape {
    fn from(n: usize) -> Self {
        Shape::Len(n)
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Shape::Dims(dims.to_vec())
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape::Dims(dims.to_vec())
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape::Dims(dims)
    }
}

/// Constructor methods.
impl Array {
    /// Create an array of the given shape with every element equal to
    /// `value`.
    ///
    /// **Errors** with `InvalidShape` for a shape with other than one axis,
    /// and with `InvalidValue` if `value` is NaN.
    ///
    /// ```
    /// use flatnum::Array;
    ///
    /// let a = Array::full(3, 7.).unwrap();
    /// assert_eq!(a.as_slice(), &[7., 7., 7.]);
    /// assert!(Array::full([2, 2], 7.).is_err());
    /// ```
    pub fn full<Sh>(shape: Sh, value: f64) -> Result<Array, ArrayError>
    where
        Sh: Into<Shape>,
    {
        let n = shape.into().to_len()?;
        if value.is_nan() {
            return Err(error::invalid_value(0));
        }
        Ok(Array::from_vec_unchecked(vec![value; n]))
    }

    /// Create an array of zeros.
    ///
    /// **Errors** with `InvalidShape` for a shape with other than one axis.
    pub fn zeros<Sh>(shape: Sh) -> Result<Array, ArrayError>
    where
        Sh: Into<Shape>,
    {
        Array::full(shape, 0.)
    }

    /// Create an array of ones.
    ///
    /// **Errors** with `InvalidShape` for a shape with other than one axis.
    pub fn ones<Sh>(shape: Sh) -> Result<Array, ArrayError>
    where
        Sh: Into<Shape>,
    {
        Array::full(shape, 1.)
    }

    /// Create an array of `num` evenly spaced elements from `start` to
    /// `stop`.
    ///
    /// With `endpoint` the last element is exactly `stop`, otherwise `stop`
    /// is excluded.
    ///
    /// **Errors** with `InvalidArgument` if `num` is negative.
    ///
    /// ```
    /// use flatnum::Array;
    ///
    /// let a = Array::linspace(0., 1., 5, true).unwrap();
    /// assert_eq!(a.as_slice(), &[0., 0.25, 0.5, 0.75, 1.]);
    ///
    /// let a = Array::linspace(0., 1., 4, false).unwrap();
    /// assert_eq!(a.as_slice(), &[0., 0.25, 0.5, 0.75]);
    /// ```
    pub fn linspace(start: f64, stop: f64, num: i64, endpoint: bool) -> Result<Array, ArrayError> {
        let n = count(num)?;
        Ok(Array::from_vec_unchecked(
            linspace::linspace(start, stop, n, endpoint).collect(),
        ))
    }

    /// Create an array of `num` elements `base.powf(x)`, where `x` runs over
    /// `Array::linspace(start, stop, num, endpoint)`.
    ///
    /// **Errors** with `InvalidArgument` if `num` is negative.
    pub fn logspace(
        start: f64,
        stop: f64,
        num: i64,
        endpoint: bool,
        base: f64,
    ) -> Result<Array, ArrayError> {
        let n = count(num)?;
        Ok(Array::from_vec_unchecked(
            logspace::logspace(start, stop, n, endpoint, base).collect(),
        ))
    }
}

fn count(num: i64) -> Result<usize, ArrayError> {
    usize::try_from(num).map_err(|_| error::invalid_argument("number of samples must be non-negative"))
}
