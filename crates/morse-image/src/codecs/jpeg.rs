/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "jpeg")]

//! JPEG support, decoding through `zune-jpeg` and encoding through `jpeg-encoder`
use jpeg_encoder::{ColorType, Encoder};
use log::debug;
use zune_jpeg::JpegDecoder;

use crate::canvas::Canvas;
use crate::codecs::expand_to_rgba;
use crate::errors::ImageErrors;

fn decode_error<E: std::fmt::Debug>(error: E) -> ImageErrors {
    ImageErrors::ImageDecodeFailure(format!("{error:?}"))
}

fn dimensions(decoder: &JpegDecoder<&[u8]>) -> Result<(usize, usize), ImageErrors> {
    decoder
        .dimensions()
        .ok_or_else(|| ImageErrors::ImageDecodeFailure("jpeg headers were not decoded".into()))
}

pub(crate) fn probe_dimensions(bytes: &[u8]) -> Result<(usize, usize), ImageErrors> {
    let mut decoder = JpegDecoder::new(bytes);

    decoder.decode_headers().map_err(decode_error)?;

    dimensions(&decoder)
}

pub(crate) fn decode_jpeg(bytes: &[u8]) -> Result<Canvas, ImageErrors> {
    let mut decoder = JpegDecoder::new(bytes);

    let pixels = decoder.decode().map_err(decode_error)?;
    let (width, height) = dimensions(&decoder)?;

    Canvas::from_rgba(width, height, expand_to_rgba(pixels, width, height)?)
}

pub(crate) fn encode_jpeg(canvas: &Canvas, quality: u8) -> Result<Vec<u8>, ImageErrors> {
    let (width, height) = canvas.dimensions();

    let too_large = || {
        ImageErrors::ImageEncodeFailure(format!(
            "{width}x{height} is too large for jpeg, sides are limited to {}",
            u16::MAX
        ))
    };
    let w = u16::try_from(width).map_err(|_| too_large())?;
    let h = u16::try_from(height).map_err(|_| too_large())?;

    debug!("Encoding jpeg at quality {quality}");

    let mut output = Vec::new();
    let encoder = Encoder::new(&mut output, quality);

    encoder
        .encode(canvas.as_rgba(), w, h, ColorType::Rgba)
        .map_err(|e| ImageErrors::ImageEncodeFailure(format!("{e:?}")))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_jpeg_reports_its_dimensions() {
        let canvas = Canvas::from_rgba(9, 4, vec![128; 9 * 4 * 4]).unwrap();
        let bytes = encode_jpeg(&canvas, 90).unwrap();

        assert_eq!(probe_dimensions(&bytes).unwrap(), (9, 4));

        let decoded = decode_jpeg(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (9, 4));
    }

    #[test]
    fn garbage_is_a_decode_failure() {
        assert!(matches!(
            probe_dimensions(&[0xff, 0xd8, 0x00]),
            Err(ImageErrors::ImageDecodeFailure(_))
        ));
    }
}
