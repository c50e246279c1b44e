/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use morse_core::Header;
use morse_image::backend::ImageMeta;
use morse_image::media::MediaKind;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// What a probe found inside a file
pub enum Probed {
    /// A Morse text file, with its frame header
    Frame(Header),
    /// An image that can be encoded
    Image(ImageMeta)
}

pub struct Metadata {
    file:       OsString,
    media_type: MediaKind,
    probed:     Probed
}

impl Metadata {
    pub fn new(file: OsString, media_type: MediaKind, probed: Probed) -> Metadata {
        Metadata {
            file,
            media_type,
            probed
        }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("media_type", &self.media_type)?;

        match &self.probed {
            Probed::Frame(header) => state.serialize_field("header", header)?,
            Probed::Image(meta) => state.serialize_field("image", meta)?
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use morse_core::{Dimensions, FormatCode};

    use super::*;

    #[test]
    fn frame_metadata_json() {
        let header = Header::new(FormatCode::Jpeg, Dimensions::new(3, 2).unwrap());
        let metadata = Metadata::new("a.txt".into(), MediaKind::TEXT, Probed::Frame(header));

        let json: serde_json::Value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["file"], "a.txt");
        assert_eq!(json["media_type"], "text/plain");
        assert_eq!(json["header"]["format"], "Jpeg");
        assert_eq!(json["header"]["format_code"], 1);
        assert_eq!(json["header"]["pixels"], 6);
    }

    #[test]
    fn image_metadata_json() {
        let meta = ImageMeta {
            width:  10,
            height: 4,
            format: FormatCode::Png
        };
        let metadata = Metadata::new("b.png".into(), MediaKind::PNG, Probed::Image(meta));
        let json: serde_json::Value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["image"]["media_type"], "image/png");
        assert_eq!(json["image"]["width"], 10);
    }
}
