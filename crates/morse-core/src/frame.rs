/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Frame layout, the ordered token stream describing one image
use std::io::Write;

use log::{debug, trace};

use crate::digits::{decode_integer, encode_integer_into, group_token_into};
use crate::errors::MorseErrors;
use crate::format::FormatCode;

/// Color handle of a single pixel, as handed out by an image backend
pub type PixelIndex = u32;

/// Written between two tokens
pub const TOKEN_SEPARATOR: &str = " / \n";

/// Number of tokens before the first pixel
pub const HEADER_TOKENS: usize = 3;

const MAX_DIMENSIONS: usize = 1 << 14;

/// Width and height of an image, both at least one
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width:  usize,
    height: usize
}

impl Dimensions {
    /// Create new dimensions
    ///
    /// # Errors
    /// - `InvalidDimensions` if either side is zero
    /// - `Overflow` if `width*height` does not fit a `usize`
    pub fn new(width: usize, height: usize) -> Result<Dimensions, MorseErrors> {
        if width == 0 || height == 0 {
            return Err(MorseErrors::InvalidDimensions(width, height));
        }
        if width.checked_mul(height).is_none() {
            let msg = format!("{width}x{height} pixels do not fit in a usize");
            return Err(MorseErrors::Overflow(msg));
        }
        Ok(Dimensions { width, height })
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Number of pixels, and therefore pixel tokens, of an image
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// The first three tokens of a frame
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Header {
    format:     FormatCode,
    dimensions: Dimensions
}

impl Header {
    pub const fn new(format: FormatCode, dimensions: Dimensions) -> Header {
        Header { format, dimensions }
    }
    pub const fn format(&self) -> FormatCode {
        self.format
    }
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}

/// A decoded frame, header plus one palette index per pixel in raster order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    header: Header,
    pixels: Vec<PixelIndex>
}

impl Frame {
    /// Create a new frame
    ///
    /// # Errors
    /// `PixelCountMismatch` if the number of pixels is not `width*height`
    pub fn new(header: Header, pixels: Vec<PixelIndex>) -> Result<Frame, MorseErrors> {
        let expected = header.dimensions.pixel_count();

        if pixels.len() != expected {
            return Err(MorseErrors::PixelCountMismatch(expected, pixels.len()));
        }
        Ok(Frame { header, pixels })
    }
    pub const fn header(&self) -> &Header {
        &self.header
    }
    pub fn pixels(&self) -> &[PixelIndex] {
        &self.pixels
    }
    pub fn into_pixels(self) -> Vec<PixelIndex> {
        self.pixels
    }
    /// Total number of tokens, header included
    pub fn token_count(&self) -> usize {
        HEADER_TOKENS + self.pixels.len()
    }
    /// Render this frame as Morse text
    pub fn to_text(&self) -> Result<String, MorseErrors> {
        frame_to_string(self)
    }
}

/// Limits applied to frames being read
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameOptions {
    max_width:  usize,
    max_height: usize
}

impl Default for FrameOptions {
    fn default() -> Self {
        FrameOptions {
            max_width:  MAX_DIMENSIONS,
            max_height: MAX_DIMENSIONS
        }
    }
}

impl FrameOptions {
    pub const fn new(max_width: usize, max_height: usize) -> FrameOptions {
        FrameOptions {
            max_width,
            max_height
        }
    }
    pub const fn max_width(&self) -> usize {
        self.max_width
    }
    pub const fn max_height(&self) -> usize {
        self.max_height
    }
    /// Check that dimensions are within the limits
    ///
    /// # Errors
    /// `LargeDimensions` carrying the limit and the offending side
    pub fn check(&self, dimensions: &Dimensions) -> Result<(), MorseErrors> {
        if dimensions.width() > self.max_width {
            return Err(MorseErrors::LargeDimensions(
                self.max_width,
                dimensions.width()
            ));
        }
        if dimensions.height() > self.max_height {
            return Err(MorseErrors::LargeDimensions(
                self.max_height,
                dimensions.height()
            ));
        }
        Ok(())
    }
}

/// Write a frame to `sink`, one token at a time
///
/// Tokens are separated by `" / "` and a line break, nothing follows
/// the last token.
///
/// Returns the number of bytes written.
///
/// # Errors
/// - `PixelCountMismatch`: `pixels` does not hold `width*height` items,
///   nothing is written in that case
/// - `IoError`: the sink failed, bytes already written stay there
pub fn serialize<W, I>(header: &Header, pixels: I, sink: &mut W) -> Result<usize, MorseErrors>
where
    W: Write,
    I: IntoIterator<Item = PixelIndex>,
    I::IntoIter: ExactSizeIterator
{
    let pixels = pixels.into_iter();
    let expected = header.dimensions.pixel_count();

    if pixels.len() != expected {
        return Err(MorseErrors::PixelCountMismatch(expected, pixels.len()));
    }
    let dims = header.dimensions;
    let header_values = [
        header.format.code(),
        dims.width() as u64,
        dims.height() as u64
    ];
    let values = header_values
        .into_iter()
        .chain(pixels.map(u64::from));

    let mut digits = String::new();
    let mut rendered = String::new();
    let mut written = 0;

    for (position, value) in values.enumerate() {
        digits.clear();
        rendered.clear();

        if position != 0 {
            rendered.push_str(TOKEN_SEPARATOR);
        }
        encode_integer_into(value, &mut digits);
        group_token_into(&digits, &mut rendered);

        sink.write_all(rendered.as_bytes())?;
        written += rendered.len();
    }
    trace!("Wrote {} tokens, {} bytes", HEADER_TOKENS + expected, written);

    Ok(written)
}

/// Serialize a frame into memory
pub fn frame_to_string(frame: &Frame) -> Result<String, MorseErrors> {
    let mut buffer = Vec::new();

    serialize(&frame.header, frame.pixels.iter().copied(), &mut buffer)?;
    // only dots, dashes, spaces, slashes and newlines were written
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Read a frame from Morse text with the default limits
///
/// See [`deserialize_with_options`]
pub fn deserialize(text: &str) -> Result<Frame, MorseErrors> {
    deserialize_with_options(text, &FrameOptions::default())
}

/// Read a frame from Morse text
///
/// Tokens end at a `/` or a line break (`\n`, `\r\n` or `\r`), spaces
/// between digit groups are dropped and empty tokens are skipped, so a
/// trailing newline or a frame written on a single line is accepted.
///
/// # Errors
/// - `TruncatedHeader`: fewer than three tokens
/// - `MalformedToken`, `InvalidSymbol`: a token is not valid Morse digits
/// - `UnknownFormat`: format code is neither 0 nor 1
/// - `InvalidDimensions`, `LargeDimensions`: bad width or height
/// - `PixelCountMismatch`: pixel tokens do not match `width*height`
/// - `Overflow`: a value does not fit its integer type
pub fn deserialize_with_options(text: &str, options: &FrameOptions) -> Result<Frame, MorseErrors> {
    let mut tokens = text
        .split(|c: char| matches!(c, '/' | '\n' | '\r'))
        .map(|piece| piece.replace(' ', ""))
        .filter(|token| !token.is_empty());

    let mut header_values = [0_u64; HEADER_TOKENS];

    for (found, value) in header_values.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or(MorseErrors::TruncatedHeader(found))?;
        *value = decode_integer(&token)?;
    }
    let [format, width, height] = header_values;

    let format = FormatCode::from_code(format)?;
    let dimensions = Dimensions::new(to_usize(width)?, to_usize(height)?)?;

    options.check(&dimensions)?;

    debug!(
        "Frame header: format {:?}, {}x{}",
        format,
        dimensions.width(),
        dimensions.height()
    );

    let pixel_tokens: Vec<String> = tokens.collect();
    let expected = dimensions.pixel_count();

    if pixel_tokens.len() != expected {
        return Err(MorseErrors::PixelCountMismatch(
            expected,
            pixel_tokens.len()
        ));
    }
    let pixels = pixel_tokens
        .into_iter()
        .map(|token| {
            let value = decode_integer(&token)?;
            PixelIndex::try_from(value).map_err(|_| {
                MorseErrors::Overflow(format!("pixel index {value} does not fit in 32 bits"))
            })
        })
        .collect::<Result<Vec<PixelIndex>, MorseErrors>>()?;

    Frame::new(Header::new(format, dimensions), pixels)
}

fn to_usize(value: u64) -> Result<usize, MorseErrors> {
    usize::try_from(value)
        .map_err(|_| MorseErrors::Overflow(format!("dimension {value} does not fit a usize")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(width: usize, height: usize) -> Header {
        Header::new(FormatCode::Png, Dimensions::new(width, height).unwrap())
    }

    #[test]
    fn two_by_one_png() {
        let mut sink = Vec::new();
        let written = serialize(&header(2, 1), [5, 0], &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert_eq!(text, "----- / \n..--- / \n.---- / \n..... / \n-----");
        assert_eq!(written, text.len());

        let frame = deserialize(&text).unwrap();
        assert_eq!(frame.header(), &header(2, 1));
        assert_eq!(frame.pixels(), &[5, 0]);
        assert_eq!(frame.token_count(), 5);
    }

    #[test]
    fn multi_digit_tokens_are_grouped() {
        let frame = Frame::new(header(1, 1), vec![1234]).unwrap();
        let text = frame.to_text().unwrap();

        assert!(text.ends_with(".---- ..--- ...-- ....-"));
        assert_eq!(deserialize(&text).unwrap(), frame);
    }

    #[test]
    fn mismatched_pixels_write_nothing() {
        let mut sink = Vec::new();
        let err = serialize(&header(2, 2), [1, 2, 3], &mut sink).unwrap_err();

        assert!(matches!(err, MorseErrors::PixelCountMismatch(4, 3)));
        assert!(sink.is_empty());
    }

    #[test]
    fn zero_dimensions() {
        assert!(matches!(
            Dimensions::new(0, 3),
            Err(MorseErrors::InvalidDimensions(0, 3))
        ));
    }

    #[test]
    fn line_endings_and_trailing_newline() {
        let text = "----- / \r\n.---- / \r.---- / \n--...\n\n";
        let frame = deserialize(text).unwrap();
        assert_eq!(frame.pixels(), &[7]);
    }

    #[test]
    fn single_line_frame() {
        let frame = deserialize("----- / .---- / ..--- / ....- / ---..").unwrap();
        assert_eq!(frame.header().dimensions(), Dimensions::new(1, 2).unwrap());
        assert_eq!(frame.pixels(), &[4, 8]);
    }

    #[test]
    fn limits_are_applied() {
        let frame = Frame::new(header(3, 1), vec![0, 0, 0]).unwrap();
        let text = frame.to_text().unwrap();

        let err = deserialize_with_options(&text, &FrameOptions::new(2, 2)).unwrap_err();
        assert!(matches!(err, MorseErrors::LargeDimensions(2, 3)));
    }
}
