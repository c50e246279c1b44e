/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when turning images into Morse text and back
use std::fmt::{Debug, Display, Formatter};

use morse_core::{FormatCode, MorseErrors, PixelIndex};

/// All errors possible while running an encode or decode workflow
pub enum ImageErrors {
    /// The input path is missing, not a file, or of the wrong media type
    UnsupportedInput(String),
    /// The image backend could not decode the image
    ImageDecodeFailure(String),
    /// The image backend could not write the image
    ImageEncodeFailure(String),
    /// A palette index could not be turned back into a color
    UnresolvedColor(PixelIndex),
    /// A coordinate outside the canvas
    ///
    /// # Arguments
    /// - x coordinate
    /// - y coordinate
    OutOfBounds(usize, usize),
    /// Support for this format was not compiled in
    FormatNotIncluded(FormatCode),
    /// Errors from reading or writing a Morse frame
    FrameErrors(MorseErrors),
    IoError(std::io::Error)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedInput(reason) => {
                writeln!(f, "Unsupported input: {reason}")
            }
            Self::ImageDecodeFailure(reason) => {
                writeln!(f, "Image decoding failed: {reason}")
            }
            Self::ImageEncodeFailure(reason) => {
                writeln!(f, "Image encoding failed: {reason}")
            }
            Self::UnresolvedColor(index) => {
                writeln!(f, "Palette index {index} does not resolve to a color")
            }
            Self::OutOfBounds(x, y) => {
                writeln!(f, "Pixel ({x},{y}) is outside the canvas")
            }
            Self::FormatNotIncluded(format) => {
                writeln!(
                    f,
                    "Support for {format:?} was not included, enable the `{}` feature",
                    format.extension()
                )
            }
            Self::FrameErrors(err) => {
                writeln!(f, "{err:?}")
            }
            Self::IoError(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}

impl From<MorseErrors> for ImageErrors {
    fn from(value: MorseErrors) -> Self {
        match value {
            // keep I/O errors flat so callers match on one variant
            MorseErrors::IoError(err) => ImageErrors::IoError(err),
            err => ImageErrors::FrameErrors(err)
        }
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(value: std::io::Error) -> Self {
        ImageErrors::IoError(value)
    }
}
