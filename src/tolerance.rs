// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::array_struct::Array;
use crate::error::{self, ArrayError};

/// Relative and absolute tolerance for approximate equality.
///
/// Two numbers `a` and `b` are close when
/// `|a - b| <= atol + rtol * |b|`. Note that this is not symmetric in `a`
/// and `b`.
///
/// ```
/// use flatnum::Tolerance;
///
/// let tol = Tolerance::default();
/// assert_eq!(tol.rtol, 1e-5);
/// assert_eq!(tol.atol, 1e-8);
///
/// let tol = Tolerance::new(1e-3, 0.);
/// assert!(tol.is_close(1000.5, 1000.));
/// assert!(!tol.is_close(1e-9, 0.));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance {
    /// relative tolerance
    pub rtol: f64,
    /// absolute tolerance
    pub atol: f64,
}

impl Tolerance {
    /// Default relative tolerance.
    pub const DEFAULT_RTOL: f64 = 1e-5;
    /// Default absolute tolerance.
    pub const DEFAULT_ATOL: f64 = 1e-8;

    /// Create a tolerance from `rtol` and `atol`, in that order.
    pub const fn new(rtol: f64, atol: f64) -> Self {
        Tolerance { rtol, atol }
    }

    /// Replace the relative tolerance.
    pub const fn with_rtol(self, rtol: f64) -> Self {
        Tolerance { rtol, ..self }
    }

    /// Replace the absolute tolerance.
    pub const fn with_atol(self, atol: f64) -> Self {
        Tolerance { atol, ..self }
    }

    /// Return `true` if `a` is within tolerance of the reference `b`.
    ///
    /// Only a difference that compares greater than the tolerance counts as
    /// not close. A NaN difference, from a NaN operand or from equal
    /// infinities, is close.
    #[inline]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        !((a - b).abs() > self.atol + self.rtol * b.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::new(Self::DEFAULT_RTOL, Self::DEFAULT_ATOL)
    }
}

impl Array {
    /// Return `true` if every element of `self` is within tolerance of the
    /// element at the same position of `rhs`.
    ///
    /// There is no broadcasting.
    ///
    /// **Errors** with `LengthMismatch` if the lengths differ.
    ///
    /// ```
    /// use flatnum::{array, Tolerance};
    ///
    /// let a = array![1., 2., 3.];
    /// assert!(a.all_close(&a, Tolerance::default()).unwrap());
    /// assert!(!a.all_close(&array![1., 2., 4.], Tolerance::default()).unwrap());
    /// assert!(a.all_close(&array![1., 2.], Tolerance::default()).is_err());
    /// ```
    pub fn all_close(&self, rhs: &Array, tol: Tolerance) -> Result<bool, ArrayError> {
        if self.len() != rhs.len() {
            return Err(error::length_mismatch(self.len(), rhs.len()));
        }
        Ok(self.iter().zip(rhs.iter()).all(|(&a, &b)| tol.is_close(a, b)))
    }
}
