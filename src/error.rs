// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error produced by an array operation.
///
/// The error carries the context needed to diagnose it, for example both
/// operand lengths of a failed elementwise combination. Use
/// [`.kind()`](ArrayError::kind) to match on the category only.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayError {
    // we want to be able to change this representation later
    repr: Repr,
}

#[derive(Clone, Debug, PartialEq)]
enum Repr {
    UnsupportedInputKind(&'static str),
    InvalidValue { index: usize },
    LengthMismatch { lhs: usize, rhs: usize },
    InvalidShape { ndim: usize },
    InvalidArgument(&'static str),
    EmptyArray(&'static str),
}

/// Error code for an error produced by an array operation.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// input is neither a number nor a flat sequence of numbers
    UnsupportedInputKind,
    /// NaN where the NaN policy forbids it
    InvalidValue,
    /// lengths can neither be matched nor broadcast
    LengthMismatch,
    /// shape with other than exactly one dimension
    InvalidShape,
    /// malformed argument, such as a negative count
    InvalidArgument,
    /// operation requires at least one element
    EmptyArray,
}

impl ArrayError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            Repr::UnsupportedInputKind(_) => ErrorKind::UnsupportedInputKind,
            Repr::InvalidValue { .. } => ErrorKind::InvalidValue,
            Repr::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Repr::InvalidShape { .. } => ErrorKind::InvalidShape,
            Repr::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Repr::EmptyArray(_) => ErrorKind::EmptyArray,
        }
    }

    /// Return the two operand lengths of a `LengthMismatch` error.
    pub fn lengths(&self) -> Option<(usize, usize)> {
        match self.repr {
            Repr::LengthMismatch { lhs, rhs } => Some((lhs, rhs)),
            _ => None,
        }
    }

    /// Return the position of the offending element of an `InvalidValue` error.
    pub fn index(&self) -> Option<usize> {
        match self.repr {
            Repr::InvalidValue { index } => Some(index),
            _ => None,
        }
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::UnsupportedInputKind(what) => write!(f, "unsupported input kind: {}", what),
            Repr::InvalidValue { index } => write!(f, "nan at index {}", index),
            Repr::LengthMismatch { lhs, rhs } => {
                write!(f, "length mismatch: {} and {} can not be combined", lhs, rhs)
            }
            Repr::InvalidShape { ndim } => {
                write!(f, "invalid shape: expected 1 dimension, got {}", ndim)
            }
            Repr::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
            Repr::EmptyArray(op) => write!(f, "{} of an empty array", op),
        }
    }
}

#[inline]
pub(crate) fn unsupported_input(what: &'static str) -> ArrayError {
    log::debug!("rejected input: {}", what);
    ArrayError {
        repr: Repr::UnsupportedInputKind(what),
    }
}

#[inline]
pub(crate) fn invalid_value(index: usize) -> ArrayError {
    log::debug!("rejected input: nan at index {}", index);
    ArrayError {
        repr: Repr::InvalidValue { index },
    }
}

#[inline]
pub(crate) fn length_mismatch(lhs: usize, rhs: usize) -> ArrayError {
    ArrayError {
        repr: Repr::LengthMismatch { lhs, rhs },
    }
}

#[inline]
pub(crate) fn invalid_shape(ndim: usize) -> ArrayError {
    ArrayError {
        repr: Repr::InvalidShape { ndim },
    }
}

#[inline]
pub(crate) fn invalid_argument(what: &'static str) -> ArrayError {
    ArrayError {
        repr: Repr::InvalidArgument(what),
    }
}

#[inline]
pub(crate) fn empty_array(op: &'static str) -> ArrayError {
    ArrayError {
        repr: Repr::EmptyArray(op),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_context() {
        let e = length_mismatch(2, 3);
        assert_eq!(e.kind(), ErrorKind::LengthMismatch);
        assert_eq!(e.lengths(), Some((2, 3)));
        assert_eq!(e.index(), None);
        assert_eq!(e.to_string(), "length mismatch: 2 and 3 can not be combined");

        let e = invalid_value(4);
        assert_eq!(e.kind(), ErrorKind::InvalidValue);
        assert_eq!(e.index(), Some(4));
        assert_eq!(e.to_string(), "nan at index 4");
    }

    #[test]
    fn display() {
        assert_eq!(empty_array("min").to_string(), "min of an empty array");
        assert_eq!(
            invalid_shape(2).to_string(),
            "invalid shape: expected 1 dimension, got 2"
        );
    }
}
