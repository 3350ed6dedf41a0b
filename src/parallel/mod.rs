//! Parallel reductions.
//!
//! With the crate feature `rayon`, `sum`, `min` and `max` on arrays of at
//! least [`PARALLEL_THRESHOLD`] elements are computed with rayon's parallel
//! iterators. These reductions are associative, so splitting the work does
//! not change the result beyond floating point rounding of `sum`.
//! Without the feature every helper here returns `None` and the caller
//! falls back to the sequential fold.
//!
//! `mean` and `median` only ever use the result of the reduction; the
//! division and the sort run after the parallel phase.

#[cfg(feature = "rayon")]
use log::trace;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Minimum array length for which a reduction runs in parallel.
pub const PARALLEL_THRESHOLD: usize = 1 << 15;

#[cfg(feature = "rayon")]
pub(crate) fn sum(xs: &[f64]) -> Option<f64> {
    if xs.len() < PARALLEL_THRESHOLD {
        return None;
    }
    trace!("parallel sum of {} elements", xs.len());
    Some(xs.par_iter().copied().sum())
}

#[cfg(not(feature = "rayon"))]
#[inline(always)]
pub(crate) fn sum(_xs: &[f64]) -> Option<f64> {
    None
}

/// Reduce with an idempotent `f` (min, max), seeding every split with
/// `first`.
#[cfg(feature = "rayon")]
pub(crate) fn reduce_from(xs: &[f64], first: f64, f: fn(f64, f64) -> f64) -> Option<f64> {
    if xs.len() < PARALLEL_THRESHOLD {
        return None;
    }
    trace!("parallel reduction of {} elements", xs.len());
    Some(xs.par_iter().copied().reduce(|| first, f))
}

#[cfg(not(feature = "rayon"))]
#[inline(always)]
pub(crate) fn reduce_from(_xs: &[f64], _first: f64, _f: fn(f64, f64) -> f64) -> Option<f64> {
    None
}
