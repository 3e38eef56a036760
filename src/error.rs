// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.
//!
//! The taxonomy is deliberately small: the pipeline itself is pure
//! and deterministic and cannot fail halfway, so the only errors are
//! rejections of malformed input, surfaced synchronously before any
//! work is done.  There is nothing to retry.

use failure::Fail;

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum CarveError {
    /// A pixel buffer or energy map has a zero dimension.
    #[fail(display = "degenerate input: {}x{} image", width, height)]
    DegenerateInput { width: u32, height: u32 },

    /// A seam (or a raw byte vector) does not span the dimension it
    /// is supposed to.  This is a contract violation by the caller;
    /// nothing is truncated or wrapped to compensate.
    #[fail(
        display = "dimension mismatch: expected length {}, got {}",
        expected, actual
    )]
    DimensionMismatch { expected: usize, actual: usize },

    /// More seams requested than the shrinking dimension can lose
    /// while still leaving an image behind.
    #[fail(
        display = "cannot remove {} seams, only {} available",
        requested, available
    )]
    ExhaustedDimension { requested: u32, available: u32 },
}
