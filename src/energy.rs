// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turn a pixel buffer into a per-pixel importance cost.
//!
//! Two passes over the image.  The first is a Sobel-ish local
//! contrast measure: per color channel, square the horizontal and
//! vertical central differences, sum across the three color channels
//! (alpha carries no content and is ignored), square root.  Flat
//! regions land near zero, edges land high.  The second pass hunts
//! for skin-tone pixels and floors the energy of everything in an
//! 11x11 window around each hit at [`SKIN_ENERGY`], so the seam
//! search prices faces as effectively un-removable.

use crate::cq;
use crate::pixelbuffer::PixelBuffer;
use crate::skin::{is_skin_pixel, SKIN_ENERGY, SKIN_HALO};
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

/// The importance cost map: one non-negative f64 per pixel, same
/// row-major addressing as the buffer it was derived from.  Built
/// fresh for every seam, never mutated afterwards.
pub type EnergyMap = TwoDimensionalMap<f64>;

/// Compute the energy of every pixel in an image.  Pure and
/// deterministic; identical buffers always produce identical maps.
pub fn calculate_energy(image: &PixelBuffer) -> EnergyMap {
    let (width, height) = image.dimensions();
    let mut emap = EnergyMap::new(width, height);
    if width == 0 || height == 0 {
        return emap;
    }
    let (mw, mh) = (width - 1, height - 1);

    for (y, x) in iproduct!(0..height, 0..width) {
        let here = image.get_pixel(x, y);
        // At the border the missing neighbor is the pixel itself, so
        // the gradient there contributes zero.
        let left = cq!(x == 0, here, image.get_pixel(x - 1, y));
        let right = cq!(x >= mw, here, image.get_pixel(x + 1, y));
        let up = cq!(y == 0, here, image.get_pixel(x, y - 1));
        let down = cq!(y >= mh, here, image.get_pixel(x, y + 1));

        let mut energy = 0.0;
        for c in 0..3 {
            let dx = f64::from(right[c]) - f64::from(left[c]);
            let dy = f64::from(down[c]) - f64::from(up[c]);
            energy += dx * dx + dy * dy;
        }
        emap[(x, y)] = energy.sqrt();
    }

    for (y, x) in iproduct!(0..height, 0..width) {
        let here = image.get_pixel(x, y);
        if is_skin_pixel(here[0], here[1], here[2]) {
            let x0 = x.saturating_sub(SKIN_HALO);
            let y0 = y.saturating_sub(SKIN_HALO);
            let x1 = (x + SKIN_HALO).min(mw);
            let y1 = (y + SKIN_HALO).min(mh);
            for (ny, nx) in iproduct!(y0..=y1, x0..=x1) {
                // A floor, not a sum: overlapping windows don't
                // double-penalize.
                let cell = &mut emap[(nx, ny)];
                if *cell < SKIN_ENERGY {
                    *cell = SKIN_ENERGY;
                }
            }
        }
    }

    emap
}
