/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::errors::MorseErrors;

/// Image formats a frame can be restored to
///
/// The discriminant is the code written in the first token of a frame
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FormatCode {
    Png  = 0,
    Jpeg = 1
}

impl FormatCode {
    /// Numeric code of this format
    pub const fn code(self) -> u64 {
        self as u64
    }
    /// Map a header code back to a format
    ///
    /// # Errors
    /// `UnknownFormat` for any code other than 0 or 1
    pub fn from_code(code: u64) -> Result<FormatCode, MorseErrors> {
        match code {
            0 => Ok(FormatCode::Png),
            1 => Ok(FormatCode::Jpeg),
            _ => Err(MorseErrors::UnknownFormat(code))
        }
    }
    /// Media subtype, the part after `image/`
    pub const fn mime_subtype(self) -> &'static str {
        match self {
            FormatCode::Png => "png",
            FormatCode::Jpeg => "jpeg"
        }
    }
    pub fn from_mime_subtype(subtype: &str) -> Option<FormatCode> {
        match subtype.to_ascii_lowercase().as_str() {
            "png" => Some(FormatCode::Png),
            "jpeg" | "jpg" => Some(FormatCode::Jpeg),
            _ => None
        }
    }
    /// File extension used when an image of this format is written
    pub const fn extension(self) -> &'static str {
        self.mime_subtype()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for format in [FormatCode::Png, FormatCode::Jpeg] {
            assert_eq!(FormatCode::from_code(format.code()).unwrap(), format);
        }
        assert!(matches!(
            FormatCode::from_code(2),
            Err(MorseErrors::UnknownFormat(2))
        ));
    }

    #[test]
    fn subtypes() {
        assert_eq!(FormatCode::from_mime_subtype("JPG"), Some(FormatCode::Jpeg));
        assert_eq!(FormatCode::from_mime_subtype("gif"), None);
        assert_eq!(FormatCode::Jpeg.extension(), "jpeg");
    }
}
