// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! flatnum prelude.
//!
//! This module contains the most used types and macros that you can import
//! easily as a group. The free functions are left out, since names like
//! `min`, `max` and `sum` are easily confused with those of `std`; call
//! them with the `flatnum::` path instead.
//!
//! ```
//! use flatnum::prelude::*;
//!
//! let a: Array = array![1., 2.];
//! assert_eq!(a.all_close(&a, Tolerance::default()), Ok(true));
//! ```

#[doc(no_inline)]
pub use crate::{Array, ArrayError, ArrayInput, Elem, ErrorKind, NanPolicy, Shape, Tolerance};

#[doc(no_inline)]
pub use crate::{array, operands};
