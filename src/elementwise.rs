// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementwise combinators: the building blocks of every arithmetic and
//! transform operation.
//!
//! Broadcasting is one-sided: an operand of length 1 is repeated to the
//! length of the other operand when that one is longer. Any other pair of
//! unequal lengths is a `LengthMismatch`.

use log::trace;

use crate::array_struct::Array;
use crate::error::{self, ArrayError};
use crate::input::{to_array, ArrayInput};

/// How two operand lengths line up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Broadcast {
    /// equal lengths
    Aligned,
    /// the left operand has length 1 and is repeated
    StretchLhs,
    /// the right operand has length 1 and is repeated
    StretchRhs,
}

pub(crate) fn co_broadcast(lhs: usize, rhs: usize) -> Result<Broadcast, ArrayError> {
    if lhs == rhs {
        Ok(Broadcast::Aligned)
    } else if lhs == 1 && rhs > 1 {
        trace!("broadcasting left operand from 1 to {}", rhs);
        Ok(Broadcast::StretchLhs)
    } else if lhs > 1 && rhs == 1 {
        trace!("broadcasting right operand from 1 to {}", lhs);
        Ok(Broadcast::StretchRhs)
    } else {
        Err(error::length_mismatch(lhs, rhs))
    }
}

impl Array {
    /// Call `f` by value on each element and return a new array with the
    /// results.
    ///
    /// ```
    /// use flatnum::array;
    ///
    /// let a = array![1., 2., 3.];
    /// assert_eq!(a.map(|x| x * 2.), array![2., 4., 6.]);
    /// ```
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn map<F>(&self, f: F) -> Array
    where
        F: FnMut(f64) -> f64,
    {
        Array::from_vec_unchecked(self.iter().copied().map(f).collect())
    }

    /// Call `f` on each pair of elements of `self` and `rhs` and return a new
    /// array with the results.
    ///
    /// If one operand has length 1 and the other is longer, the short one is
    /// broadcast.
    ///
    /// **Errors** with `LengthMismatch` if the lengths differ and can not be
    /// broadcast.
    ///
    /// ```
    /// use flatnum::array;
    ///
    /// let a = array![1., 2., 3.];
    /// let b = array![10.];
    /// assert_eq!(a.zip_with(&b, |x, y| x + y).unwrap(), array![11., 12., 13.]);
    /// assert!(a.zip_with(&array![1., 2.], |x, y| x + y).is_err());
    /// ```
    pub fn zip_with<F>(&self, rhs: &Array, mut f: F) -> Result<Array, ArrayError>
    where
        F: FnMut(f64, f64) -> f64,
    {
        let (xs, ys) = (self.as_slice(), rhs.as_slice());
        let data = match co_broadcast(xs.len(), ys.len())? {
            Broadcast::Aligned => xs.iter().zip(ys).map(|(&x, &y)| f(x, y)).collect(),
            Broadcast::StretchLhs => {
                let x = xs[0];
                ys.iter().map(|&y| f(x, y)).collect()
            }
            Broadcast::StretchRhs => {
                let y = ys[0];
                xs.iter().map(|&x| f(x, y)).collect()
            }
        };
        Ok(Array::from_vec_unchecked(data))
    }
}

/// Adapt `a` and apply `f` to every element.
///
/// Domain errors of `f` are not detected; they show up as infinities or NaN
/// in the result.
pub fn map_unary<'a, I, F>(a: I, f: F) -> Result<Array, ArrayError>
where
    I: Into<ArrayInput<'a>>,
    F: FnMut(f64) -> f64,
{
    Ok(to_array(a)?.map(f))
}

/// Adapt `a` and `b` and combine them elementwise with `f`, broadcasting an
/// operand of length 1.
///
/// **Errors** with `LengthMismatch` if the lengths can not be broadcast.
pub fn map_binary<'a, 'b, I, J, F>(a: I, b: J, f: F) -> Result<Array, ArrayError>
where
    I: Into<ArrayInput<'a>>,
    J: Into<ArrayInput<'b>>,
    F: FnMut(f64, f64) -> f64,
{
    let a = to_array(a)?;
    let b = to_array(b)?;
    a.zip_with(&b, f)
}

/// Copy the first operand and combine it with each following operand in
/// turn, left to right: `fold_operands([a, b, c], f)` is `f(f(a, b), c)`
/// elementwise.
///
/// **Errors** with `InvalidArgument` if there are no operands, and with any
/// error of adapting or combining the operands.
///
/// ```
/// use flatnum::{fold_operands, operands};
///
/// let r = fold_operands(operands![[1., 2.], 10., [100., 200.]], |x, y| x + y).unwrap();
/// assert_eq!(r.as_slice(), &[111., 212.]);
/// ```
pub fn fold_operands<'a, I, F>(operands: I, f: F) -> Result<Array, ArrayError>
where
    I: IntoIterator,
    I::Item: Into<ArrayInput<'a>>,
    F: FnMut(f64, f64) -> f64,
{
    fold_at_least(operands, 1, "expected at least 1 operand", f)
}

pub(crate) fn fold_at_least<'a, I, F>(
    operands: I,
    min_operands: usize,
    what: &'static str,
    mut f: F,
) -> Result<Array, ArrayError>
where
    I: IntoIterator,
    I::Item: Into<ArrayInput<'a>>,
    F: FnMut(f64, f64) -> f64,
{
    let operands: Vec<ArrayInput<'a>> = operands.into_iter().map(Into::into).collect();
    if operands.len() < min_operands {
        return Err(error::invalid_argument(what));
    }
    let mut operands = operands.into_iter();
    let mut acc = match operands.next() {
        Some(first) => to_array(first)?,
        None => return Err(error::invalid_argument(what)),
    };
    for operand in operands {
        acc = acc.zip_with(&to_array(operand)?, &mut f)?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{operands, ErrorKind};

    #[test]
    fn broadcast_rules() {
        assert_eq!(co_broadcast(3, 3).unwrap(), Broadcast::Aligned);
        assert_eq!(co_broadcast(0, 0).unwrap(), Broadcast::Aligned);
        assert_eq!(co_broadcast(1, 4).unwrap(), Broadcast::StretchLhs);
        assert_eq!(co_broadcast(4, 1).unwrap(), Broadcast::StretchRhs);
        assert_eq!(co_broadcast(1, 0).unwrap_err().lengths(), Some((1, 0)));
        assert_eq!(co_broadcast(2, 3).unwrap_err().kind(), ErrorKind::LengthMismatch);
    }

    #[test]
    fn unary() {
        let r = map_unary(vec![1., -2.], f64::abs).unwrap();
        assert_eq!(r.as_slice(), &[1., 2.]);
        assert!(map_unary(Vec::<f64>::new(), f64::abs).unwrap().is_empty());
    }

    #[test]
    fn binary_broadcast_both_sides() {
        let r = map_binary(2., vec![1., 2., 4.], |x, y| x / y).unwrap();
        assert_eq!(r.as_slice(), &[2., 1., 0.5]);
        let r = map_binary(vec![1., 2., 4.], 2., |x, y| x / y).unwrap();
        assert_eq!(r.as_slice(), &[0.5, 1., 2.]);
    }

    #[test]
    fn binary_mismatch() {
        let err = map_binary(vec![1., 2.], vec![3., 4., 5.], |x, y| x + y).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
        assert_eq!(err.lengths(), Some((2, 3)));
    }

    #[test]
    fn fold_is_left_to_right() {
        let r = fold_operands(operands![[8.], [2.], [2.]], |x, y| x / y).unwrap();
        assert_eq!(r.as_slice(), &[2.]);
    }

    #[test]
    fn fold_single_operand_copies() {
        let v = vec![1., 2.];
        let r = fold_operands([&v], |x, y| x + y).unwrap();
        assert_eq!(r.as_slice(), v.as_slice());
    }

    #[test]
    fn fold_no_operands() {
        let none: [f64; 0] = [];
        let err = fold_operands(none, |x, y| x + y).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn fold_at_least_two() {
        let err = fold_at_least([1.], 2, "expected at least 2 operands", |x, y| x + y).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
