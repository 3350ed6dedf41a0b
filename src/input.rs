// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion of numbers and flat sequences into [`Array`].

use std::borrow::Cow;

use crate::array_struct::{check_no_nan, Array};
use crate::error::{self, ArrayError};

/// A single `f64` that acts as an array of length one.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Elem(pub f64);

impl Elem {
    /// Always `1`.
    #[inline]
    pub fn len(&self) -> usize {
        1
    }

    /// Always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Return the value for `index == 0`, `None` otherwise.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        if index == 0 {
            Some(self.0)
        } else {
            None
        }
    }
}

/// Whether NaN is accepted when adapting caller data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NanPolicy {
    /// Fail with `InvalidValue` at the first NaN.
    #[default]
    Reject,
    /// Accept NaN as any other value.
    Allow,
}

/// The accepted kinds of array-like input.
///
/// Every public operation takes `impl Into<ArrayInput>`, so numbers, slices,
/// vectors and arrays can be passed directly:
///
/// ```
/// use flatnum::add;
///
/// let a = add(&[1., 2.][..], 1.).unwrap();
/// assert_eq!(a.as_slice(), &[2., 3.]);
///
/// let b = add(&a, vec![0.5, 0.5]).unwrap();
/// assert_eq!(b.as_slice(), &[2.5, 3.5]);
/// ```
///
/// Nested sequences convert to `ArrayInput::Nested` and are rejected by
/// [`to_array`]; only flat arrays are supported.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayInput<'a> {
    /// A single number.
    Scalar(f64),
    /// A single integer, converted to `f64`.
    Int(i64),
    /// A flat sequence of numbers.
    Sequence(Cow<'a, [f64]>),
    /// An existing array; not checked for NaN again.
    Array(Cow<'a, Array>),
    /// A nested sequence.
    Nested(Vec<ArrayInput<'a>>),
}

impl ArrayInput<'_> {
    /// Return the input kind as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ArrayInput::Scalar(_) => "scalar",
            ArrayInput::Int(_) => "integer",
            ArrayInput::Sequence(_) => "sequence",
            ArrayInput::Array(_) => "array",
            ArrayInput::Nested(_) => "nested sequence",
        }
    }
}

/// Convert `input` into an array, rejecting NaN.
///
/// **Errors** with `UnsupportedInputKind` for nested input and with
/// `InvalidValue` if the input holds NaN.
///
/// ```
/// use flatnum::{to_array, ErrorKind};
///
/// assert_eq!(to_array(2.).unwrap().as_slice(), &[2.]);
/// assert_eq!(to_array(vec![1., 2.]).unwrap().len(), 2);
///
/// let err = to_array(vec![vec![1.], vec![2.]]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnsupportedInputKind);
/// ```
pub fn to_array<'a, I>(input: I) -> Result<Array, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    to_array_with(input, NanPolicy::Reject)
}

/// Convert `input` into an array using the given NaN policy.
pub fn to_array_with<'a, I>(input: I, policy: NanPolicy) -> Result<Array, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    let data = match input.into() {
        ArrayInput::Array(a) => return Ok(a.into_owned()),
        ArrayInput::Scalar(x) => vec![x],
        ArrayInput::Int(i) => vec![i as f64],
        ArrayInput::Sequence(xs) => xs.into_owned(),
        nested @ ArrayInput::Nested(_) => return Err(error::unsupported_input(nested.kind_name())),
    };
    if policy == NanPolicy::Reject {
        check_no_nan(&data)?;
    }
    Ok(Array::from_vec_unchecked(data))
}

impl From<f64> for ArrayInput<'_> {
    fn from(x: f64) -> Self {
        ArrayInput::Scalar(x)
    }
}

impl From<Elem> for ArrayInput<'_> {
    fn from(x: Elem) -> Self {
        ArrayInput::Scalar(x.0)
    }
}

impl From<i32> for ArrayInput<'_> {
    fn from(x: i32) -> Self {
        ArrayInput::Int(x as i64)
    }
}

impl From<i64> for ArrayInput<'_> {
    fn from(x: i64) -> Self {
        ArrayInput::Int(x)
    }
}

impl<'a> From<&'a [f64]> for ArrayInput<'a> {
    fn from(xs: &'a [f64]) -> Self {
        ArrayInput::Sequence(Cow::Borrowed(xs))
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for ArrayInput<'a> {
    fn from(xs: &'a [f64; N]) -> Self {
        ArrayInput::Sequence(Cow::Borrowed(&xs[..]))
    }
}

impl<const N: usize> From<[f64; N]> for ArrayInput<'_> {
    fn from(xs: [f64; N]) -> Self {
        ArrayInput::Sequence(Cow::Owned(xs.to_vec()))
    }
}

impl From<Vec<f64>> for ArrayInput<'_> {
    fn from(xs: Vec<f64>) -> Self {
        ArrayInput::Sequence(Cow::Owned(xs))
    }
}

impl<'a> From<&'a Vec<f64>> for ArrayInput<'a> {
    fn from(xs: &'a Vec<f64>) -> Self {
        ArrayInput::Sequence(Cow::Borrowed(xs.as_slice()))
    }
}

impl<'a> From<&'a Array> for ArrayInput<'a> {
    fn from(a: &'a Array) -> Self {
        ArrayInput::Array(Cow::Borrowed(a))
    }
}

impl From<Array> for ArrayInput<'_> {
    fn from(a: Array) -> Self {
        ArrayInput::Array(Cow::Owned(a))
    }
}

impl From<Vec<Vec<f64>>> for ArrayInput<'_> {
    fn from(xss: Vec<Vec<f64>>) -> Self {
        ArrayInput::Nested(xss.into_iter().map(ArrayInput::from).collect())
    }
}

impl<'a> From<&'a [Vec<f64>]> for ArrayInput<'a> {
    fn from(xss: &'a [Vec<f64>]) -> Self {
        ArrayInput::Nested(xss.iter().map(ArrayInput::from).collect())
    }
}
