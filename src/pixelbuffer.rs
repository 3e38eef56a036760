// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The engine-side image representation.
//!
//! A `PixelBuffer` is nothing more than a decoded RGBA image: width,
//! height, and one flat row-major byte vector, four bytes per pixel.
//! It is the only currency the pipeline trades in, and it moves by
//! value from stage to stage; a stage that wants to keep a copy has
//! to clone it explicitly.  Decoding and encoding stay on the host's
//! side of the fence, with `From` conversions to and from the image
//! crate's `RgbaImage` as the hand-off point.

use crate::error::CarveError;
use image::RgbaImage;

/// Bytes per pixel: red, green, blue, alpha.
pub const CHANNELS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// An all-zero (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        PixelBuffer {
            width,
            height,
            data: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    /// Wrap an existing RGBA byte vector.  The length must be exactly
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CarveError> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(CarveError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    // Keep the index math in a single location and never, ever mess
    // with it.
    fn byte_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS
    }

    /// The four channels at one address.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.byte_index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        let i = self.byte_index(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&pixel);
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        PixelBuffer {
            width,
            height,
            data: image.into_raw(),
        }
    }
}

impl From<PixelBuffer> for RgbaImage {
    fn from(buffer: PixelBuffer) -> Self {
        // The length invariant makes from_raw infallible here.
        RgbaImage::from_raw(buffer.width, buffer.height, buffer.data)
            .expect("PixelBuffer length invariant broken")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_checks_the_byte_length() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 16]).is_ok());
        assert_eq!(
            PixelBuffer::from_raw(2, 2, vec![0; 15]),
            Err(CarveError::DimensionMismatch {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn pixels_round_trip_through_the_flat_buffer() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.put_pixel(2, 1, [1, 2, 3, 4]);
        assert_eq!(buffer.get_pixel(2, 1), [1, 2, 3, 4]);
        assert_eq!(buffer.get_pixel(0, 0), [0, 0, 0, 0]);
        // (2, 1) is the last pixel of a 3x2 buffer.
        assert_eq!(&buffer.data()[20..], &[1, 2, 3, 4]);
    }

    #[test]
    fn converts_to_and_from_the_image_crate() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.put_pixel(1, 0, [9, 8, 7, 6]);
        let image: RgbaImage = buffer.clone().into();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(1, 0).0, [9, 8, 7, 6]);
        let back: PixelBuffer = image.into();
        assert_eq!(back, buffer);
    }
}
