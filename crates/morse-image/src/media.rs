/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Media type detection from the leading bytes of a file
use std::fmt::{Display, Formatter};

use morse_core::FormatCode;

/// A media type split into its type and subtype, e.g `image/png`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MediaKind {
    pub kind:    &'static str,
    pub subtype: &'static str
}

impl MediaKind {
    pub const PNG: MediaKind = MediaKind::new("image", "png");
    pub const JPEG: MediaKind = MediaKind::new("image", "jpeg");
    pub const TEXT: MediaKind = MediaKind::new("text", "plain");
    pub const EMPTY: MediaKind = MediaKind::new("application", "x-empty");
    pub const BINARY: MediaKind = MediaKind::new("application", "octet-stream");

    pub const fn new(kind: &'static str, subtype: &'static str) -> MediaKind {
        MediaKind { kind, subtype }
    }
    pub fn is_image(&self) -> bool {
        self.kind == "image"
    }
    pub fn is_text(&self) -> bool {
        *self == MediaKind::TEXT
    }
    /// The frame format for this media type, if it is an image we handle
    pub fn format(&self) -> Option<FormatCode> {
        if !self.is_image() {
            return None;
        }
        FormatCode::from_mime_subtype(self.subtype)
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.subtype)
    }
}

impl From<FormatCode> for MediaKind {
    fn from(value: FormatCode) -> Self {
        match value {
            FormatCode::Png => MediaKind::PNG,
            FormatCode::Jpeg => MediaKind::JPEG
        }
    }
}

/// Guess the media type of a file from its contents
///
/// Images are recognised by their magic bytes, anything that is valid
/// UTF-8 and has no control characters other than whitespace is text.
pub fn guess_media_kind(bytes: &[u8]) -> MediaKind {
    let magic_bytes: [(&[u8], MediaKind); 2] = [
        (&[137, 80, 78, 71, 13, 10, 26, 10], MediaKind::PNG),
        // only the SOI marker, some jpeg images lack the trailing 0xff
        (&[0xff, 0xd8], MediaKind::JPEG)
    ];

    if bytes.is_empty() {
        return MediaKind::EMPTY;
    }
    for (magic, kind) in magic_bytes {
        if bytes.starts_with(magic) {
            return kind;
        }
    }
    if is_text(bytes) {
        return MediaKind::TEXT;
    }
    MediaKind::BINARY
}

fn is_text(bytes: &[u8]) -> bool {
    let binary = bytes
        .iter()
        .any(|&c| matches!(c, 0x00..=0x08 | 0x0E..=0x1F | 0x7F));

    !binary && std::str::from_utf8(bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_bytes() {
        assert_eq!(guess_media_kind(&[137, 80, 78, 71, 13, 10, 26, 10, 0]), MediaKind::PNG);
        assert_eq!(guess_media_kind(&[0xff, 0xd8, 0xff, 0xe0]), MediaKind::JPEG);
        assert_eq!(guess_media_kind(&[]), MediaKind::EMPTY);
    }

    #[test]
    fn text_and_binary() {
        assert_eq!(guess_media_kind(b"----- / \r\n.----\t"), MediaKind::TEXT);
        assert_eq!(guess_media_kind(b"abc\0def"), MediaKind::BINARY);
        assert_eq!(guess_media_kind(&[0xc3, 0x28]), MediaKind::BINARY);
    }

    #[test]
    fn formats() {
        assert_eq!(MediaKind::JPEG.format(), Some(FormatCode::Jpeg));
        assert_eq!(MediaKind::TEXT.format(), None);
        assert_eq!(MediaKind::PNG.to_string(), "image/png");
    }
}
