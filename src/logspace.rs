// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Logarithmically spaced sequences of floats.

use num_traits::Float;

use crate::linspace::{linspace, Linspace};

/// An iterator of a sequence of logarithmically spaced number.
///
/// Iterator element type is `F`.
#[derive(Clone, Debug)]
pub struct Logspace<F> {
    base: F,
    exponents: Linspace<F>,
}

impl<F> Iterator for Logspace<F>
where
    F: Float,
{
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        let base = self.base;
        self.exponents.next().map(|x| base.powf(x))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.exponents.size_hint()
    }
}

impl<F> DoubleEndedIterator for Logspace<F>
where
    F: Float,
{
    #[inline]
    fn next_back(&mut self) -> Option<F> {
        let base = self.base;
        self.exponents.next_back().map(|x| base.powf(x))
    }
}

impl<F> ExactSizeIterator for Logspace<F> where Logspace<F>: Iterator {}

/// An iterator of `n` logarithmically spaced numbers.
///
/// The elements are `base.powf(x)` for every `x` of
/// [`linspace(a, b, n, endpoint)`](crate::linspace::linspace). A negative
/// base follows `powf`, so non-integral exponents give NaN.
///
/// Iterator element type is `F`, where `F` must be either `f32` or `f64`.
#[inline]
pub fn logspace<F>(a: F, b: F, n: usize, endpoint: bool, base: F) -> Logspace<F>
where
    F: Float,
{
    Logspace {
        base,
        exponents: linspace(a, b, n, endpoint),
    }
}

#[cfg(test)]
mod tests {
    use super::logspace;
    use approx::assert_relative_eq;

    #[test]
    fn valid() {
        let v: Vec<f64> = logspace(-3., 3., 7, true, 10.).collect();
        let expected = [1e-3, 1e-2, 1e-1, 1e0, 1e1, 1e2, 1e3];
        assert_eq!(v.len(), expected.len());
        for (x, e) in v.iter().zip(&expected) {
            assert_relative_eq!(*x, *e, max_relative = 1e-12);
        }

        let v: Vec<f64> = logspace(0., 3., 3, false, 2.).collect();
        assert_eq!(v, vec![1., 2., 4.]);
    }

    #[test]
    fn both_ends() {
        let mut iter = logspace(0.0f64, 3.0, 4, true, 10.0);
        assert_eq!(iter.len(), 4);

        assert_relative_eq!(iter.next_back().unwrap(), 1e3);
        assert_relative_eq!(iter.next().unwrap(), 1e0);
        assert_eq!(iter.len(), 2);
        assert_relative_eq!(iter.next_back().unwrap(), 1e2);
        assert_relative_eq!(iter.next().unwrap(), 1e1);
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }

    #[test]
    fn negative_base() {
        let v: Vec<f64> = logspace(0., 2., 3, true, -2.).collect();
        assert_eq!(v, vec![1., -2., 4.]);
        assert!(logspace(0.5, 0.5, 1, true, -2.).all(|x: f64| x.is_nan()));
    }
}
