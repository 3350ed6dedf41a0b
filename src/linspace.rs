// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Evenly spaced sequences of floats.

use num_traits::Float;

/// An iterator of a sequence of evenly spaced floats.
///
/// Iterator element type is `F`.
#[derive(Clone, Debug)]
pub struct Linspace<F> {
    start: F,
    step: F,
    // exact last element, when the interval is closed
    end: Option<F>,
    total: usize,
    index: usize,
    len: usize,
}

#[inline]
fn to_float<F: Float>(i: usize) -> F {
    F::from(i).unwrap_or_else(F::nan)
}

impl<F> Linspace<F>
where
    F: Float,
{
    #[inline]
    fn value(&self, i: usize) -> F {
        match self.end {
            Some(end) if i + 1 == self.total => end,
            // Calculate the value just like numpy.linspace does
            _ => self.start + self.step * to_float(i),
        }
    }
}

impl<F> Iterator for Linspace<F>
where
    F: Float,
{
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            Some(self.value(i))
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F> DoubleEndedIterator for Linspace<F>
where
    F: Float,
{
    #[inline]
    fn next_back(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            self.len -= 1;
            let i = self.len;
            Some(self.value(i))
        }
    }
}

impl<F> ExactSizeIterator for Linspace<F> where Linspace<F>: Iterator {}

/// Return an iterator of `n` evenly spaced floats starting at `a`.
///
/// With `endpoint`, the interval `[a, b]` is closed: the step is
/// `(b - a) / (n - 1)` and the last element is exactly `b`. A single element
/// is just `a`.
///
/// Without `endpoint`, the interval `[a, b)` is half-open: the step is
/// `(b - a) / n` and `b` is not included.
///
/// Iterator element type is `F`, where `F` must be either `f32` or `f64`.
#[inline]
pub fn linspace<F>(a: F, b: F, n: usize, endpoint: bool) -> Linspace<F>
where
    F: Float,
{
    let (step, end) = if endpoint {
        if n > 1 {
            ((b - a) / to_float(n - 1), Some(b))
        } else {
            (F::zero(), None)
        }
    } else if n > 0 {
        ((b - a) / to_float(n), None)
    } else {
        (F::zero(), None)
    };
    Linspace {
        start: a,
        step,
        end,
        total: n,
        index: 0,
        len: n,
    }
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn closed_interval() {
        let v: Vec<f64> = linspace(-3., 3., 7, true).collect();
        assert_eq!(v, vec![-3., -2., -1., 0., 1., 2., 3.]);
    }

    #[test]
    fn half_open_interval() {
        let v: Vec<f64> = linspace(-3., 3., 6, false).collect();
        assert_eq!(v, vec![-3., -2., -1., 0., 1., 2.]);
    }

    #[test]
    fn endpoint_is_exact() {
        let v: Vec<f64> = linspace(0., 1., 49, true).collect();
        assert_eq!(v.len(), 49);
        assert_eq!(*v.last().unwrap(), 1.);
        assert_eq!(linspace(0.1, 0.7, 3, true).next_back(), Some(0.7));
    }

    #[test]
    fn degenerate_lengths() {
        let v: Vec<f64> = linspace(0., 0., 1, true).collect();
        assert_eq!(v, vec![0.]);
        assert_eq!(linspace(5., 9., 1, false).collect::<Vec<f64>>(), vec![5.]);
        assert_eq!(linspace(0., 0., 0, false).count(), 0);
        assert_eq!(linspace(0., 1., 0, true).count(), 0);
    }

    #[test]
    fn iter_forward() {
        let mut iter = linspace(0.0f64, 3.0, 4, true);

        assert!(iter.size_hint() == (4, Some(4)));

        assert_eq!(iter.next(), Some(0.));
        assert_eq!(iter.next(), Some(1.));
        assert_eq!(iter.next(), Some(2.));
        assert_eq!(iter.next(), Some(3.));
        assert!(iter.next().is_none());

        assert!(iter.size_hint() == (0, Some(0)));
    }

    #[test]
    fn iter_backward() {
        let mut iter = linspace(0.0f64, 4.0, 4, false);

        assert!(iter.size_hint() == (4, Some(4)));

        assert_eq!(iter.next_back(), Some(3.));
        assert_eq!(iter.next_back(), Some(2.));
        assert_eq!(iter.next(), Some(0.));
        assert_eq!(iter.next_back(), Some(1.));
        assert!(iter.next_back().is_none());
    }
}
