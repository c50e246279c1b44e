/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when encoding or decoding a Morse frame
use std::fmt::{Debug, Display, Formatter};

/// Possible errors that may occur while reading or writing
/// Morse frames
pub enum MorseErrors {
    /// A five symbol group contains a character other than `.` or `-`,
    /// or does not spell any decimal digit.
    ///
    /// The string describes the offending group
    InvalidSymbol(String),
    /// A token whose length is not a positive multiple of five
    ///
    /// The argument is the length of the token
    MalformedToken(usize),
    /// A decoded number does not fit the integer type it is stored in
    Overflow(String),
    /// The header carries a format code we do not know
    UnknownFormat(u64),
    /// The number of pixel tokens does not match the dimensions
    ///
    /// # Arguments
    /// - 1st argument is the number of pixels expected (`width*height`)
    /// - 2nd argument is the number of pixels found
    PixelCountMismatch(usize, usize),
    /// The frame ended before the three header tokens were read.
    ///
    /// The argument is the number of header tokens that were present
    TruncatedHeader(usize),
    /// Width or height is zero
    InvalidDimensions(usize, usize),
    /// Width or height is above the configured limit
    ///
    /// # Arguments
    /// - 1st argument is the maximum allowed
    /// - 2nd argument is the value found
    LargeDimensions(usize, usize),
    IoError(std::io::Error)
}

impl Debug for MorseErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MorseErrors::InvalidSymbol(reason) => {
                writeln!(f, "Invalid Morse symbol: {reason}")
            }
            MorseErrors::MalformedToken(length) => {
                writeln!(
                    f,
                    "Malformed token of length {length}, expected a positive multiple of 5"
                )
            }
            MorseErrors::Overflow(reason) => {
                writeln!(f, "Number overflow: {reason}")
            }
            MorseErrors::UnknownFormat(code) => {
                writeln!(f, "Unknown format code {code}, expected either 0 or 1")
            }
            MorseErrors::PixelCountMismatch(expected, found) => {
                writeln!(
                    f,
                    "Pixel count mismatch, dimensions need {expected} pixels but found {found}"
                )
            }
            MorseErrors::TruncatedHeader(found) => {
                writeln!(f, "Truncated header, expected 3 tokens but found {found}")
            }
            MorseErrors::InvalidDimensions(width, height) => {
                writeln!(
                    f,
                    "Invalid dimensions {width}x{height}, width and height must be at least 1"
                )
            }
            MorseErrors::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            MorseErrors::IoError(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for MorseErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for MorseErrors {}

impl From<std::io::Error> for MorseErrors {
    fn from(value: std::io::Error) -> Self {
        MorseErrors::IoError(value)
    }
}
