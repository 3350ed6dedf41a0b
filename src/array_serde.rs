// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::array_struct::Array;

/// An array serializes as a plain sequence of numbers.
///
/// **Requires crate feature `"serde"`**
impl Serialize for Array {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for elt in self.iter() {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

/// An array deserializes from a sequence of numbers; NaN is rejected.
///
/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Array {
    fn deserialize<D>(deserializer: D) -> Result<Array, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = Vec::<f64>::deserialize(deserializer)?;
        Array::from_vec(data).map_err(de::Error::custom)
    }
}
