// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Face-aware seam carving.
//!
//! Shrink an image one pixel-wide seam at a time, always deleting the
//! connected path of least visual importance.  Importance is a plain
//! gradient-magnitude energy with one twist: pixels that look like
//! skin (and a halo around them) are priced so high that no seam will
//! cross them unless there is literally nowhere else to go.
//!
//! The crate is a pure library.  The host hands us a decoded RGBA
//! buffer and tells us how many seams to remove and in which
//! direction; we hand back a smaller buffer.  Decoding, encoding,
//! display, and progress bars are the host's problem.

extern crate image;

mod ternary;
pub mod twodmap;

pub mod carver;
pub mod direction;
pub mod energy;
pub mod error;
pub mod pixelbuffer;
pub mod seamfinder;
pub mod skin;

pub use carver::{carve, carve_with, highlight_seam, remove_seam};
pub use direction::Direction;
pub use energy::{calculate_energy, EnergyMap};
pub use error::CarveError;
pub use pixelbuffer::PixelBuffer;
pub use seamfinder::{find_seam, Seam};
pub use skin::is_skin_pixel;
