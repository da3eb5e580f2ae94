#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! Allocation-free sequence containers with constant capacity.
//!
//! The two containers, [`InlineVector`] and [`InlineDeque`], embed their
//! storage in the container value. Every size-dependent operation is
//! implemented once on the capacity-erased [`Vector`] and [`Deque`] types,
//! which the inline containers dereference to; code that does not care about
//! the exact capacity can take `&mut Vector<T>` or `&mut Deque<T>`.
//!
//! The containers never allocate and never grow. Operations that would exceed
//! the capacity *saturate*: excess elements are dropped, and the container
//! stays valid. Where overflow must be observed, use the `try_*` variants or
//! the counts returned by [`Vector::insert_n`] and [`Vector::insert_iter`].
//!
//! The lower layers are public as well:
//!
//! * [`storage`] computes alignments, provides raw aligned byte blocks and
//!   classifies integral types,
//! * [`cursor`] defines the movable positions all range operations work on,
//! * [`memory`] constructs and destroys values in uninitialized slots,
//! * [`algorithm`] provides fill, copy, comparison, reversal and rotation.
//!
//! # Features
//! * `log`: emit a `trace` record through the [`log`](https://docs.rs/log)
//!   crate whenever an operation saturates.

#[cfg(test)]
extern crate std;

/// Reports an operation that was clamped to the remaining capacity.
macro_rules! saturated {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        {
            log::trace!(target: "fixcap", $($arg)+);
        }
    }};
}

pub mod algorithm;
pub mod cursor;
pub mod deque;
pub mod memory;
pub mod storage;
pub mod vector;

pub use crate::deque::{Deque, InlineDeque};
pub use crate::vector::{InlineVector, Vector};

/// Clamps a request for `requested` new elements to the `free` slots left,
/// reporting the dropped remainder.
#[inline]
#[cfg_attr(not(feature = "log"), allow(unused_variables))]
pub(crate) fn clamp_to_free(requested: usize, free: usize, op: &str) -> usize {
    if requested <= free {
        return requested;
    }

    saturated!("{}: dropped {} of {} elements", op, requested - free, requested);
    free
}

/// The error type for operations that would exceed a container's capacity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CapacityError;

impl core::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("insufficient capacity")
    }
}

impl core::error::Error for CapacityError {}

/// A specialized [`Result`](core::result::Result) type for operations that
/// can fail because of insufficient capacity.
pub type Result<T> = core::result::Result<T, CapacityError>;
