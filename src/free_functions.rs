// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The numpy-like function surface. Every function adapts its inputs with
//! [`to_array`] and returns a new value; inputs are never modified.

use crate::array_struct::Array;
use crate::elementwise::{fold_at_least, map_binary, map_unary};
use crate::error::ArrayError;
use crate::impl_constructors::Shape;
use crate::impl_float_maths;
use crate::input::{to_array, ArrayInput};
use crate::tolerance::Tolerance;

/// Create an [**`Array`**](crate::Array) from a list of numbers.
///
/// ```
/// use flatnum::array;
///
/// let a = array![1., 2., 3., 4.];
/// assert_eq!(a.len(), 4);
/// ```
///
/// **Panics** if an element is NaN.
#[macro_export]
macro_rules! array {
    ($($x:expr),* $(,)*) => {{
        $crate::Array::from_literals(vec![$($x,)*])
    }};
}

/// Build an array of [`ArrayInput`](crate::ArrayInput) from operands of
/// different kinds, for the variadic functions.
///
/// ```
/// use flatnum::{add_all, array, operands};
///
/// let a = array![1., 2.];
/// let sum = add_all(operands![&a, 10., vec![100., 200.]]).unwrap();
/// assert_eq!(sum, array![111., 212.]);
/// ```
#[macro_export]
macro_rules! operands {
    ($($x:expr),* $(,)*) => {
        [$($crate::ArrayInput::from($x),)*]
    };
}

impl Array {
    #[doc(hidden)]
    pub fn from_literals(data: Vec<f64>) -> Array {
        match Array::from_vec(data) {
            Ok(a) => a,
            Err(e) => panic!("array!: {}", e),
        }
    }
}

/// Return a copy of `a` as a new array.
pub fn copy<'a, I>(a: I) -> Result<Array, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    to_array(a)
}

/// Return the sum of the elements of `a`.
///
/// ```
/// assert_eq!(flatnum::sum(&[1., 2., 3.]).unwrap(), 6.);
/// ```
pub fn sum<'a, I>(a: I) -> Result<f64, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    Ok(to_array(a)?.sum())
}

/// Return the smallest element of `a`.
///
/// **Errors** with `EmptyArray` if `a` is empty.
pub fn min<'a, I>(a: I) -> Result<f64, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    to_array(a)?.min()
}

/// Return the largest element of `a`.
///
/// **Errors** with `EmptyArray` if `a` is empty.
pub fn max<'a, I>(a: I) -> Result<f64, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    to_array(a)?.max()
}

/// Return the arithmetic mean of `a`; NaN if `a` is empty.
pub fn mean<'a, I>(a: I) -> Result<f64, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    Ok(to_array(a)?.mean())
}

/// Return the median of `a`; NaN if `a` is empty.
///
/// ```
/// assert_eq!(flatnum::median(&[1., 2., 3., 5.]).unwrap(), 2.5);
/// assert_eq!(flatnum::median(&[1., 2., 5.]).unwrap(), 2.);
/// ```
pub fn median<'a, I>(a: I) -> Result<f64, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    Ok(to_array(a)?.median())
}

macro_rules! binary_functions {
    ($($(#[$meta:meta])* fn $id:ident, $all:ident, $min_operands:expr, $what:expr, $f:expr;)+) => {
        $(
        $(#[$meta])*
        ///
        /// **Errors** with `LengthMismatch` if the lengths can not be
        /// broadcast.
        pub fn $id<'a, 'b, I, J>(a: I, b: J) -> Result<Array, ArrayError>
        where
            I: Into<ArrayInput<'a>>,
            J: Into<ArrayInput<'b>>,
        {
            map_binary(a, b, $f)
        }

        $(#[$meta])*
        ///
        /// The operands are combined left to right, starting from a copy of
        /// the first one.
        ///
        #[doc = concat!("**Errors** with `InvalidArgument` for fewer than ", stringify!($min_operands), " operand(s),")]
        /// and with `LengthMismatch` if the lengths can not be broadcast.
        pub fn $all<'a, I>(operands: I) -> Result<Array, ArrayError>
        where
            I: IntoIterator,
            I::Item: Into<ArrayInput<'a>>,
        {
            fold_at_least(operands, $min_operands, $what, $f)
        }
        )+
    };
}

binary_functions! {
    /// Elementwise addition.
    fn add, add_all, 2, "expected at least 2 operands", |x, y| x + y;
    /// Elementwise subtraction.
    fn sub, sub_all, 2, "expected at least 2 operands", |x, y| x - y;
    /// Elementwise multiplication.
    fn multiply, multiply_all, 2, "expected at least 2 operands", |x, y| x * y;
    /// Elementwise division.
    fn divide, divide_all, 2, "expected at least 2 operands", |x, y| x / y;
    /// Elementwise power, `a` raised to `b`.
    fn power, power_all, 2, "expected at least 2 operands", impl_float_maths::power;
    /// Elementwise minimum; NaN in either operand gives NaN.
    fn minimum, minimum_all, 1, "expected at least 1 operand", impl_float_maths::minimum;
    /// Elementwise maximum; NaN in either operand gives NaN.
    fn maximum, maximum_all, 1, "expected at least 1 operand", impl_float_maths::maximum;
}

/// Elementwise square, `multiply(a, a)`.
pub fn square<'a, I>(a: I) -> Result<Array, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    let a = to_array(a)?;
    multiply(&a, &a)
}

/// Elementwise absolute value.
pub fn absolute<'a, I>(a: I) -> Result<Array, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    map_unary(a, f64::abs)
}

/// Elementwise reciprocal, `1/x`.
pub fn reciprocal<'a, I>(a: I) -> Result<Array, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    map_unary(a, f64::recip)
}

/// Elementwise logistic sigmoid, `1 / (1 + e^-x)`.
pub fn expit<'a, I>(a: I) -> Result<Array, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    map_unary(a, impl_float_maths::expit)
}

/// Elementwise log-odds, `ln(x / (1 - x))`, the inverse of [`expit`].
///
/// Values outside of `(0, 1)` give infinities or NaN.
pub fn logit<'a, I>(a: I) -> Result<Array, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    map_unary(a, impl_float_maths::logit)
}

/// Return the indices that would sort `a` in ascending order.
///
/// ```
/// assert_eq!(flatnum::argsort(&[1., 3., 2.]).unwrap(), vec![0, 2, 1]);
/// ```
pub fn argsort<'a, I>(a: I) -> Result<Vec<usize>, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    Ok(to_array(a)?.argsort())
}

/// Return the index of the first occurrence of the smallest element.
///
/// **Errors** with `EmptyArray` if `a` is empty.
pub fn argmin<'a, I>(a: I) -> Result<usize, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    to_array(a)?.argmin()
}

/// Return the index of the first occurrence of the largest element.
///
/// **Errors** with `EmptyArray` if `a` is empty.
pub fn argmax<'a, I>(a: I) -> Result<usize, ArrayError>
where
    I: Into<ArrayInput<'a>>,
{
    to_array(a)?.argmax()
}

/// Return `true` if `a` and `b` are elementwise equal within the default
/// [`Tolerance`] (`rtol = 1e-5`, `atol = 1e-8`).
///
/// **Errors** with `LengthMismatch` if the lengths differ; there is no
/// broadcasting.
///
/// ```
/// use flatnum::allclose;
///
/// assert!(allclose(&[1., 2., 3.], &[1., 2., 3. + 1e-9]).unwrap());
/// assert!(!allclose(&[1., 2., 3.], &[1., 2., 4.]).unwrap());
/// ```
pub fn allclose<'a, 'b, I, J>(a: I, b: J) -> Result<bool, ArrayError>
where
    I: Into<ArrayInput<'a>>,
    J: Into<ArrayInput<'b>>,
{
    allclose_with(a, b, Tolerance::default())
}

/// Return `true` if `a` and `b` are elementwise equal within `tol`.
///
/// **Errors** with `LengthMismatch` if the lengths differ.
pub fn allclose_with<'a, 'b, I, J>(a: I, b: J, tol: Tolerance) -> Result<bool, ArrayError>
where
    I: Into<ArrayInput<'a>>,
    J: Into<ArrayInput<'b>>,
{
    let a = to_array(a)?;
    let b = to_array(b)?;
    a.all_close(&b, tol)
}

/// Create an array of the given shape filled with `value`.
///
/// See [`Array::full`].
pub fn full<Sh>(shape: Sh, value: f64) -> Result<Array, ArrayError>
where
    Sh: Into<Shape>,
{
    Array::full(shape, value)
}

/// Create an array of zeros.
///
/// ```
/// assert_eq!(flatnum::zeros(3).unwrap().as_slice(), &[0., 0., 0.]);
/// assert_eq!(flatnum::zeros([3]).unwrap().as_slice(), &[0., 0., 0.]);
/// ```
pub fn zeros<Sh>(shape: Sh) -> Result<Array, ArrayError>
where
    Sh: Into<Shape>,
{
    Array::zeros(shape)
}

/// Create an array of ones.
pub fn ones<Sh>(shape: Sh) -> Result<Array, ArrayError>
where
    Sh: Into<Shape>,
{
    Array::ones(shape)
}

/// Create an array of `num` evenly spaced elements from `start` to `stop`.
///
/// See [`Array::linspace`].
pub fn linspace(start: f64, stop: f64, num: i64, endpoint: bool) -> Result<Array, ArrayError> {
    Array::linspace(start, stop, num, endpoint)
}

/// Create an array of `num` logarithmically spaced elements.
///
/// See [`Array::logspace`].
pub fn logspace(
    start: f64,
    stop: f64,
    num: i64,
    endpoint: bool,
    base: f64,
) -> Result<Array, ArrayError> {
    Array::logspace(start, stop, num, endpoint, base)
}
