/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Default image backend, built on the zune decoders
//!
//! Each format can be disabled through its cargo feature, asking for a
//! disabled format returns [`ImageErrors::FormatNotIncluded`].
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, trace};
use morse_core::{FormatCode, PixelIndex};

use crate::backend::{ImageBackend, ImageMeta};
use crate::canvas::{Canvas, Rgba, RGBA_COMPONENTS};
use crate::errors::ImageErrors;
use crate::media::guess_media_kind;

pub mod jpeg;
pub mod png;

/// Truecolor backend decoding with `zune-png` and `zune-jpeg`
/// and encoding with `zune-png` and `jpeg-encoder`
///
/// Pixel indices are packed RGBA values, see [`crate::canvas`],
/// so any index resolves on any canvas.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZuneBackend;

impl ZuneBackend {
    pub const fn new() -> ZuneBackend {
        ZuneBackend
    }
    /// Encode a canvas into an in-memory image
    pub fn encode_bytes(
        &self, canvas: &Canvas, format: FormatCode, quality: u8
    ) -> Result<Vec<u8>, ImageErrors> {
        match format {
            FormatCode::Png => {
                #[cfg(feature = "png")]
                {
                    png::encode_png(canvas)
                }
                #[cfg(not(feature = "png"))]
                {
                    Err(ImageErrors::FormatNotIncluded(format))
                }
            }
            FormatCode::Jpeg => {
                #[cfg(feature = "jpeg")]
                {
                    jpeg::encode_jpeg(canvas, quality)
                }
                #[cfg(not(feature = "jpeg"))]
                {
                    let _ = quality;
                    Err(ImageErrors::FormatNotIncluded(format))
                }
            }
        }
    }
}

impl ImageBackend for ZuneBackend {
    type Canvas = Canvas;

    fn name(&self) -> &'static str {
        "zune"
    }

    fn read_meta(&self, bytes: &[u8]) -> Result<ImageMeta, ImageErrors> {
        let kind = guess_media_kind(bytes);

        let format = kind.format().ok_or_else(|| {
            ImageErrors::UnsupportedInput(format!("{kind} is not a supported image type"))
        })?;

        let (width, height) = match format {
            FormatCode::Png => png::probe_dimensions(bytes)?,
            FormatCode::Jpeg => {
                #[cfg(feature = "jpeg")]
                {
                    jpeg::probe_dimensions(bytes)?
                }
                #[cfg(not(feature = "jpeg"))]
                {
                    return Err(ImageErrors::FormatNotIncluded(format));
                }
            }
        };
        trace!("Image format: {format:?}");
        trace!("Image width: {width}");
        trace!("Image height: {height}");

        Ok(ImageMeta {
            width,
            height,
            format
        })
    }

    fn decode(&self, bytes: &[u8], format: FormatCode) -> Result<Canvas, ImageErrors> {
        match format {
            FormatCode::Png => {
                #[cfg(feature = "png")]
                {
                    png::decode_png(bytes)
                }
                #[cfg(not(feature = "png"))]
                {
                    Err(ImageErrors::FormatNotIncluded(format))
                }
            }
            FormatCode::Jpeg => {
                #[cfg(feature = "jpeg")]
                {
                    jpeg::decode_jpeg(bytes)
                }
                #[cfg(not(feature = "jpeg"))]
                {
                    Err(ImageErrors::FormatNotIncluded(format))
                }
            }
        }
    }

    fn canvas_dimensions(&self, canvas: &Canvas) -> (usize, usize) {
        canvas.dimensions()
    }

    fn palette_index_at(&self, canvas: &Canvas, x: usize, y: usize) -> Result<PixelIndex, ImageErrors> {
        canvas
            .get_pixel(x, y)
            .map(Rgba::truecolor_index)
            .ok_or(ImageErrors::OutOfBounds(x, y))
    }

    fn rgba_for_index(&self, _: &Canvas, index: PixelIndex) -> Result<Rgba, ImageErrors> {
        Ok(Rgba::from_truecolor_index(index))
    }

    fn new_canvas(&self, width: usize, height: usize) -> Result<Canvas, ImageErrors> {
        Ok(Canvas::new(width, height))
    }

    fn allocate_color(&self, _: &mut Canvas, color: Rgba) -> Result<PixelIndex, ImageErrors> {
        Ok(color.truecolor_index())
    }

    fn set_pixel(
        &self, canvas: &mut Canvas, x: usize, y: usize, index: PixelIndex
    ) -> Result<(), ImageErrors> {
        canvas.put_pixel(x, y, Rgba::from_truecolor_index(index))
    }

    fn save(
        &self, canvas: &Canvas, path: &Path, format: FormatCode, quality: u8
    ) -> Result<(), ImageErrors> {
        let bytes = self.encode_bytes(canvas, format, quality)?;

        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        file.flush()?;

        debug!("Wrote {} bytes to {:?}", bytes.len(), path);
        Ok(())
    }
}

/// Expand decoded 8-bit samples to RGBA
///
/// The number of channels is derived from the buffer length,
/// one to four channels are understood as Luma, LumaA, RGB and RGBA.
pub(crate) fn expand_to_rgba(
    data: Vec<u8>, width: usize, height: usize
) -> Result<Vec<u8>, ImageErrors> {
    let pixels = width * height;

    if pixels == 0 || data.len() % pixels != 0 {
        let msg = format!(
            "Decoded {} bytes which do not divide into {width}x{height} pixels",
            data.len()
        );
        return Err(ImageErrors::ImageDecodeFailure(msg));
    }
    let channels = data.len() / pixels;

    trace!("Expanding {channels} channel image to RGBA");

    let expanded: Vec<u8> = match channels {
        1 => data.iter().flat_map(|&l| [l, l, l, 255]).collect(),
        2 => data
            .chunks_exact(2)
            .flat_map(|la| [la[0], la[0], la[0], la[1]])
            .collect(),
        3 => data
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        RGBA_COMPONENTS => data,
        _ => {
            let msg = format!("Cannot convert an image with {channels} channels to RGBA");
            return Err(ImageErrors::ImageDecodeFailure(msg));
        }
    };
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_gray_and_rgb() {
        assert_eq!(
            expand_to_rgba(vec![7, 9], 2, 1).unwrap(),
            [7, 7, 7, 255, 9, 9, 9, 255]
        );
        assert_eq!(
            expand_to_rgba(vec![1, 2, 3, 4, 5, 6], 2, 1).unwrap(),
            [1, 2, 3, 255, 4, 5, 6, 255]
        );
        assert_eq!(expand_to_rgba(vec![1, 2], 1, 1).unwrap(), [1, 1, 1, 2]);
        assert!(expand_to_rgba(vec![1, 2, 3], 2, 1).is_err());
        assert!(expand_to_rgba(vec![0; 5], 1, 1).is_err());
    }

    #[test]
    fn any_index_resolves() {
        let backend = ZuneBackend::new();
        let mut canvas = backend.new_canvas(1, 1).unwrap();
        let color = Rgba::new(10, 20, 30, 40);

        let index = backend.allocate_color(&mut canvas, color).unwrap();
        assert_eq!(backend.rgba_for_index(&canvas, index).unwrap(), color);

        backend.set_pixel(&mut canvas, 0, 0, index).unwrap();
        assert_eq!(backend.palette_index_at(&canvas, 0, 0).unwrap(), index);
    }
}
