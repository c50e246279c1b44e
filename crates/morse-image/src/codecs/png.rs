/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG support
//!
//! Header probing is always available, decoding and encoding need the `png` feature
#[cfg(feature = "png")]
use zune_core::bit_depth::BitDepth;
#[cfg(feature = "png")]
use zune_core::colorspace::ColorSpace;
#[cfg(feature = "png")]
use zune_core::options::EncoderOptions;
#[cfg(feature = "png")]
use zune_core::result::DecodingResult;
#[cfg(feature = "png")]
use zune_png::{PngDecoder, PngEncoder};

#[cfg(feature = "png")]
use crate::canvas::Canvas;
#[cfg(feature = "png")]
use crate::codecs::expand_to_rgba;
use crate::errors::ImageErrors;

/// PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Read width and height from the IHDR chunk
///
/// IHDR is always the first chunk, so the dimensions sit at a fixed
/// offset after the signature, chunk length and chunk type.
pub fn probe_dimensions(bytes: &[u8]) -> Result<(usize, usize), ImageErrors> {
    if bytes.len() < 24 || !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(ImageErrors::ImageDecodeFailure(
            "Not a PNG file, signature missing".to_string()
        ));
    }
    if &bytes[12..16] != b"IHDR" {
        return Err(ImageErrors::ImageDecodeFailure(
            "First PNG chunk is not IHDR".to_string()
        ));
    }
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);

    Ok((width as usize, height as usize))
}

#[cfg(feature = "png")]
pub(crate) fn decode_png(bytes: &[u8]) -> Result<Canvas, ImageErrors> {
    let (width, height) = probe_dimensions(bytes)?;

    let mut decoder = PngDecoder::new(bytes);

    let pixels = match decoder
        .decode()
        .map_err(|e| ImageErrors::ImageDecodeFailure(format!("{e:?}")))?
    {
        DecodingResult::U8(data) => data,
        // keep the most significant byte
        DecodingResult::U16(data) => data.iter().map(|v| (v >> 8) as u8).collect(),
        _ => {
            return Err(ImageErrors::ImageDecodeFailure(
                "Unsupported PNG sample type".to_string()
            ))
        }
    };
    Canvas::from_rgba(width, height, expand_to_rgba(pixels, width, height)?)
}

#[cfg(feature = "png")]
pub(crate) fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, ImageErrors> {
    let (width, height) = canvas.dimensions();

    let options = EncoderOptions::new(width, height, ColorSpace::RGBA, BitDepth::Eight);

    Ok(PngEncoder::new(canvas.as_rgba(), options).encode())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_rejects_garbage() {
        assert!(probe_dimensions(b"definitely not a png file").is_err());

        let mut header = PNG_SIGNATURE.to_vec();
        header.extend_from_slice(&[0, 0, 0, 13]);
        header.extend_from_slice(b"IHDR");
        header.extend_from_slice(&[0, 0, 1, 0, 0, 0, 0, 3]);

        assert_eq!(probe_dimensions(&header).unwrap(), (256, 3));
    }
}
