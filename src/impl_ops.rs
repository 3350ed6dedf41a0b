// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::array_struct::Array;

macro_rules! impl_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`,
/// and return the result as a new `Array`.
///
/// If one operand has length 1 and the other is longer, the short one is
/// broadcast.
///
/// **Panics** if broadcasting isn’t possible. Use the free functions of this
/// crate for a `Result` instead.
impl<'a> $trt<&'a Array> for &'a Array {
    type Output = Array;
    fn $mth(self, rhs: &'a Array) -> Array {
        match self.zip_with(rhs, |x, y| x $operator y) {
            Ok(out) => out,
            Err(e) => panic!("{}: {}", stringify!($mth), e),
        }
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`,
/// and return the result.
///
/// **Panics** if broadcasting isn’t possible.
impl $trt<Array> for Array {
    type Output = Array;
    fn $mth(self, rhs: Array) -> Array {
        (&self).$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and reference `rhs`,
/// and return the result.
///
/// **Panics** if broadcasting isn’t possible.
impl<'a> $trt<&'a Array> for Array {
    type Output = Array;
    fn $mth(self, rhs: &'a Array) -> Array {
        (&self).$mth(rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between reference `self` and the scalar `x`,
/// and return the result as a new `Array`.
impl<'a> $trt<f64> for &'a Array {
    type Output = Array;
    fn $mth(self, x: f64) -> Array {
        self.map(|elt| elt $operator x)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and the scalar `x`,
/// and return the result.
impl $trt<f64> for Array {
    type Output = Array;
    fn $mth(self, x: f64) -> Array {
        (&self).$mth(x)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the scalar `self` and reference `rhs`,
/// and return the result as a new `Array`.
impl<'a> $trt<&'a Array> for f64 {
    type Output = Array;
    fn $mth(self, rhs: &'a Array) -> Array {
        rhs.map(|elt| self $operator elt)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the scalar `self` and `rhs`,
/// and return the result.
impl $trt<Array> for f64 {
    type Output = Array;
    fn $mth(self, rhs: Array) -> Array {
        self.$mth(&rhs)
    }
}
    );
);

impl_binary_op!(Add, +, add, "addition");
impl_binary_op!(Sub, -, sub, "subtraction");
impl_binary_op!(Mul, *, mul, "multiplication");
impl_binary_op!(Div, /, div, "division");

impl<'a> Neg for &'a Array {
    type Output = Array;
    /// Perform an elementwise negation of reference `self` and return the
    /// result as a new `Array`.
    fn neg(self) -> Array {
        self.map(|x| -x)
    }
}

impl Neg for Array {
    type Output = Array;
    /// Perform an elementwise negation of `self` and return the result.
    fn neg(self) -> Array {
        -&self
    }
}
