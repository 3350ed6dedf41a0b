// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/flatnum/0.1/")]
#![warn(missing_docs)]

//! The `flatnum` crate provides [`Array`], a flat sequence of `f64`, and a
//! small numpy-like set of functions on it.
//!
//! - Construction: [`zeros`], [`ones`], [`full`], [`linspace()`],
//!   [`logspace()`], [`copy`] and the [`array!`] macro.
//! - Reductions: [`sum`], [`min`], [`max`], [`mean`], [`median`].
//! - Elementwise arithmetic with broadcasting of length-1 operands:
//!   [`add`], [`sub`], [`multiply`], [`divide`], [`power`], [`minimum`],
//!   [`maximum`], each with a variadic `*_all` form, and [`square`].
//! - Elementwise transforms: [`absolute`], [`reciprocal`], [`expit`],
//!   [`logit`].
//! - Queries: [`argsort`], [`argmin`], [`argmax`], [`allclose`].
//!
//! Every function takes its operands as `impl Into<ArrayInput>`, so numbers,
//! slices, vectors and arrays can be mixed freely, and returns a freshly
//! allocated result. Nothing is modified in place and there is no shared
//! state.
//!
//! ```
//! use flatnum::{array, Tolerance};
//!
//! let x = flatnum::linspace(-3., 3., 7, true)?;
//! assert_eq!(x, array![-3., -2., -1., 0., 1., 2., 3.]);
//!
//! let y = flatnum::add(&x, 1.)?;
//! assert_eq!(flatnum::sum(&y)?, 7.);
//!
//! let p = flatnum::expit(&x)?;
//! let back = flatnum::logit(&p)?;
//! assert!(flatnum::allclose_with(&back, &x, Tolerance::default())?);
//! # Ok::<(), flatnum::ArrayError>(())
//! ```
//!
//! ## Errors
//!
//! Fallible functions return [`ArrayError`]; use [`ArrayError::kind`] to
//! match on the [`ErrorKind`]. Caller data is checked for NaN when it is
//! adapted (see [`NanPolicy`]), while NaN produced by arithmetic such as
//! `0. / 0.` flows through like any other value.
//!
//! ## Crate Feature Flags
//!
//! - `approx`: implementations of the [`approx`](https://docs.rs/approx)
//!   comparison traits for `Array`.
//! - `serde`: serialization of `Array` as a sequence of numbers.
//! - `rayon`: parallel `sum`, `min` and `max` for arrays of at least
//!   [`PARALLEL_THRESHOLD`](parallel::PARALLEL_THRESHOLD) elements.

mod array_struct;
mod arrayformat;
mod arraytraits;
mod elementwise;
mod error;
mod free_functions;
mod impl_constructors;
mod impl_float_maths;
mod impl_ops;
mod input;
pub mod linspace;
pub mod logspace;
pub mod parallel;
pub mod prelude;
mod reduce;
mod sort;
mod tolerance;

#[cfg(feature = "approx")]
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;

pub use crate::array_struct::Array;
pub use crate::elementwise::{fold_operands, map_binary, map_unary};
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::free_functions::*;
pub use crate::impl_constructors::Shape;
pub use crate::input::{to_array, to_array_with, ArrayInput, Elem, NanPolicy};
pub use crate::reduce::reduce;
pub use crate::tolerance::Tolerance;
