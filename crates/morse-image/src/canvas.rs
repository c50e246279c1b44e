/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A truecolor RGBA canvas
//!
//! Truecolor canvases have no palette, the index of a pixel is its
//! color packed into 32 bits
//!
//! ```text
//! bits 31..24  255 - alpha
//! bits 23..16  red
//! bits 15..8   green
//! bits  7..0   blue
//! ```
//!
//! so opaque colors have a zero top byte.
use morse_core::PixelIndex;

use crate::errors::ImageErrors;

/// Number of bytes per pixel in a canvas
pub const RGBA_COMPONENTS: usize = 4;

/// A single 8-bit RGBA color
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba { r, g, b, a }
    }
    pub const fn opaque(r: u8, g: u8, b: u8) -> Rgba {
        Rgba::new(r, g, b, 255)
    }
    /// Pack this color into a truecolor index
    ///
    /// # Example
    /// ```
    /// use morse_image::canvas::Rgba;
    /// assert_eq!(Rgba::opaque(0, 0, 5).truecolor_index(), 5);
    /// assert_eq!(Rgba::new(0, 0, 0, 0).truecolor_index(), 255 << 24);
    /// ```
    pub const fn truecolor_index(self) -> PixelIndex {
        ((255 - self.a as u32) << 24)
            | ((self.r as u32) << 16)
            | ((self.g as u32) << 8)
            | (self.b as u32)
    }
    /// Unpack a truecolor index, every `u32` is a valid color
    pub const fn from_truecolor_index(index: PixelIndex) -> Rgba {
        Rgba {
            r: (index >> 16) as u8,
            g: (index >> 8) as u8,
            b: index as u8,
            a: 255 - (index >> 24) as u8
        }
    }
}

/// An image held as interleaved 8-bit RGBA
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width:  usize,
    height: usize,
    pixels: Vec<u8>
}

impl Canvas {
    /// Create a new canvas filled with opaque black
    pub fn new(width: usize, height: usize) -> Canvas {
        let mut pixels = vec![0; width * height * RGBA_COMPONENTS];

        pixels
            .chunks_exact_mut(RGBA_COMPONENTS)
            .for_each(|pix| pix[3] = 255);

        Canvas {
            width,
            height,
            pixels
        }
    }
    /// Create a canvas from interleaved RGBA bytes
    ///
    /// # Errors
    /// `ImageDecodeFailure` if the buffer length does not match the dimensions
    pub fn from_rgba(width: usize, height: usize, pixels: Vec<u8>) -> Result<Canvas, ImageErrors> {
        let expected = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(RGBA_COMPONENTS));

        if expected != Some(pixels.len()) {
            let msg = format!(
                "Expected {:?} bytes for a {width}x{height} RGBA image but found {}",
                expected,
                pixels.len()
            );
            return Err(ImageErrors::ImageDecodeFailure(msg));
        }
        Ok(Canvas {
            width,
            height,
            pixels
        })
    }
    /// Create a canvas by calling `func` for every coordinate
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Canvas
    where
        F: FnMut(usize, usize) -> Rgba
    {
        let mut pixels = Vec::with_capacity(width * height * RGBA_COMPONENTS);

        for (x, y) in morse_core::scan(width, height) {
            let color = func(x, y);
            pixels.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        Canvas {
            width,
            height,
            pixels
        }
    }
    /// Return a tuple of `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * RGBA_COMPONENTS)
    }
    /// Color at `(x, y)`, `None` when outside the canvas
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        let start = self.offset(x, y)?;
        let pix = &self.pixels[start..start + RGBA_COMPONENTS];

        Some(Rgba::new(pix[0], pix[1], pix[2], pix[3]))
    }
    /// Set the color at `(x, y)`
    ///
    /// # Errors
    /// `OutOfBounds` when the coordinate is outside the canvas
    pub fn put_pixel(&mut self, x: usize, y: usize, color: Rgba) -> Result<(), ImageErrors> {
        let start = self.offset(x, y).ok_or(ImageErrors::OutOfBounds(x, y))?;

        self.pixels[start..start + RGBA_COMPONENTS]
            .copy_from_slice(&[color.r, color.g, color.b, color.a]);
        Ok(())
    }
    /// Interleaved RGBA bytes, row-major
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truecolor_index_round_trip() {
        let colors = [
            Rgba::opaque(0, 0, 0),
            Rgba::opaque(255, 255, 255),
            Rgba::new(1, 2, 3, 4),
            Rgba::new(200, 100, 50, 0)
        ];
        for color in colors {
            assert_eq!(Rgba::from_truecolor_index(color.truecolor_index()), color);
        }
        assert_eq!(Rgba::opaque(0x12, 0x34, 0x56).truecolor_index(), 0x0012_3456);
    }

    #[test]
    fn new_canvas_is_opaque_black() {
        let canvas = Canvas::new(3, 2);

        assert_eq!(canvas.as_rgba().len(), 24);
        assert_eq!(canvas.get_pixel(2, 1), Some(Rgba::opaque(0, 0, 0)));
        assert_eq!(canvas.get_pixel(3, 1), None);
    }

    #[test]
    fn put_and_get() {
        let mut canvas = Canvas::new(2, 2);
        let color = Rgba::new(9, 8, 7, 6);

        canvas.put_pixel(1, 0, color).unwrap();
        assert_eq!(canvas.get_pixel(1, 0), Some(color));
        assert_eq!(&canvas.as_rgba()[4..8], &[9, 8, 7, 6]);
        assert!(matches!(
            canvas.put_pixel(0, 2, color),
            Err(ImageErrors::OutOfBounds(0, 2))
        ));
    }

    #[test]
    fn from_rgba_checks_length() {
        assert!(Canvas::from_rgba(1, 1, vec![0; 4]).is_ok());
        assert!(Canvas::from_rgba(1, 1, vec![0; 3]).is_err());
    }
}
