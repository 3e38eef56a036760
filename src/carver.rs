// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Remove located seams from pixel buffers, plus the driver loop
//! that strings energy, search, and removal together.
//!
//! Removal is a structural edit, not a resample: every surviving
//! pixel keeps all four channels verbatim, positions just compact by
//! one.  The driver recomputes the energy map from scratch on every
//! iteration, because deleting a seam changes the gradient of every
//! pixel that used to border it; there is nothing to cache.

use crate::direction::Direction;
use crate::energy::calculate_energy;
use crate::error::CarveError;
use crate::pixelbuffer::{PixelBuffer, CHANNELS};
use crate::seamfinder::find_seam;

fn check_span(seam: &[u32], span: u32) -> Result<(), CarveError> {
    if seam.len() != span as usize {
        return Err(CarveError::DimensionMismatch {
            expected: span as usize,
            actual: seam.len(),
        });
    }
    Ok(())
}

/// Delete one seam from the buffer, shrinking the width (vertical)
/// or height (horizontal) by exactly one.  The seam must span the
/// full traversal axis, and the shrinking dimension must have
/// something left to lose.
pub fn remove_seam(
    image: PixelBuffer,
    seam: &[u32],
    direction: Direction,
) -> Result<PixelBuffer, CarveError> {
    let (width, height) = image.dimensions();
    match direction {
        Direction::Vertical => {
            check_span(seam, height)?;
            if width <= 1 {
                return Err(CarveError::ExhaustedDimension {
                    requested: 1,
                    available: width.saturating_sub(1),
                });
            }
            // Row-major layout makes the vertical case pure slice
            // splicing: each output row is the input row minus four
            // bytes.
            let stride = width as usize * CHANNELS;
            let mut data = Vec::with_capacity((width as usize - 1) * CHANNELS * height as usize);
            for (y, &cut) in seam.iter().enumerate() {
                debug_assert!(cut < width);
                let row = &image.data()[y * stride..(y + 1) * stride];
                let at = cut as usize * CHANNELS;
                data.extend_from_slice(&row[..at]);
                data.extend_from_slice(&row[at + CHANNELS..]);
            }
            PixelBuffer::from_raw(width - 1, height, data)
        }
        Direction::Horizontal => {
            check_span(seam, width)?;
            if height <= 1 {
                return Err(CarveError::ExhaustedDimension {
                    requested: 1,
                    available: height.saturating_sub(1),
                });
            }
            let mut carved = PixelBuffer::new(width, height - 1);
            for (x, &cut) in seam.iter().enumerate() {
                debug_assert!(cut < height);
                let x = x as u32;
                let mut ny = 0;
                for y in 0..height {
                    if y == cut {
                        continue;
                    }
                    carved.put_pixel(x, ny, image.get_pixel(x, y));
                    ny += 1;
                }
            }
            Ok(carved)
        }
    }
}

/// Paint a seam opaque red in place.  The host shows this as a
/// preview flash before the seam disappears; the engine only does
/// the painting.
pub fn highlight_seam(
    image: &mut PixelBuffer,
    seam: &[u32],
    direction: Direction,
) -> Result<(), CarveError> {
    const SEAM_RED: [u8; 4] = [255, 0, 0, 255];
    match direction {
        Direction::Vertical => {
            check_span(seam, image.height())?;
            for (y, &x) in seam.iter().enumerate() {
                image.put_pixel(x, y as u32, SEAM_RED);
            }
        }
        Direction::Horizontal => {
            check_span(seam, image.width())?;
            for (x, &y) in seam.iter().enumerate() {
                image.put_pixel(x as u32, y, SEAM_RED);
            }
        }
    }
    Ok(())
}

/// Remove `seams` seams one after another, calling `after_each` with
/// the count removed so far and the current buffer once per removal.
/// The callback is the host's progress and repaint hook; the engine
/// has no other suspension points and no cancellation beyond the
/// caller declining to continue.
///
/// The whole request is validated up front: asking for more seams
/// than the shrinking dimension can lose fails before any pixel is
/// touched, never partway through.
pub fn carve_with<F>(
    mut image: PixelBuffer,
    seams: u32,
    direction: Direction,
    mut after_each: F,
) -> Result<PixelBuffer, CarveError>
where
    F: FnMut(u32, &PixelBuffer),
{
    let available = match direction {
        Direction::Vertical => image.width().saturating_sub(1),
        Direction::Horizontal => image.height().saturating_sub(1),
    };
    if seams > available {
        return Err(CarveError::ExhaustedDimension {
            requested: seams,
            available,
        });
    }

    for removed in 1..=seams {
        let energy = calculate_energy(&image);
        let seam = find_seam(&energy, direction)?;
        image = remove_seam(image, &seam, direction)?;
        after_each(removed, &image);
    }
    Ok(image)
}

/// [`carve_with`] without the progress hook.
pub fn carve(
    image: PixelBuffer,
    seams: u32,
    direction: Direction,
) -> Result<PixelBuffer, CarveError> {
    carve_with(image, seams, direction, |_, _| {})
}
