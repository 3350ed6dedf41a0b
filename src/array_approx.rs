//! Implementations of the `approx` comparison traits for [`Array`].
//!
//! **Requires crate feature `"approx"`**

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::array_struct::Array;

/// Arrays of different lengths are never equal.
impl AbsDiffEq for Array {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Array, epsilon: f64) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .zip(other.iter())
            .all(|(a, b)| f64::abs_diff_eq(a, b, epsilon))
    }
}

/// Arrays of different lengths are never equal.
impl RelativeEq for Array {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Array, epsilon: f64, max_relative: f64) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .zip(other.iter())
            .all(|(a, b)| f64::relative_eq(a, b, epsilon, max_relative))
    }
}

/// Arrays of different lengths are never equal.
impl UlpsEq for Array {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Array, epsilon: f64, max_ulps: u32) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .zip(other.iter())
            .all(|(a, b)| f64::ulps_eq(a, b, epsilon, max_ulps))
    }
}
