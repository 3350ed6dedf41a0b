// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::array_struct::Array;

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in bracketed, comma separated form.
///
/// ```
/// use flatnum::array;
///
/// let a = array![1., 2.5, -3.];
/// assert_eq!(format!("{}", a), "[1, 2.5, -3]");
/// assert_eq!(format!("{:.2}", a), "[1.00, 2.50, -3.00]");
/// ```
impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elt) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            elt.fmt(f)?;
        }
        f.write_str("]")
    }
}
