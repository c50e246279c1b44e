/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Options shared by the encode and decode workflows
use morse_core::FrameOptions;

/// Workflow options
///
/// The same options can be reused for any number of files
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MorseOptions {
    /// Largest image width accepted on either side of the codec
    ///
    /// - Default value: 16384
    max_width:    usize,
    /// Largest image height accepted on either side of the codec
    ///
    /// - Default value: 16384
    max_height:   usize,
    /// Quality used when a frame is restored as JPEG, 1 to 100
    ///
    /// - Default value: 100
    jpeg_quality: u8,
    /// Refuse to decode files that do not look like plain text
    ///
    /// - Default value: true
    strict_text:  bool
}

impl Default for MorseOptions {
    fn default() -> Self {
        MorseOptions {
            max_width:    1 << 14,
            max_height:   1 << 14,
            jpeg_quality: 100,
            strict_text:  true
        }
    }
}

impl MorseOptions {
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }
    pub const fn get_jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }
    pub const fn get_strict_text(&self) -> bool {
        self.strict_text
    }
    /// Set the maximum width of images
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }
    /// Set the maximum height of images
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
    /// Set the JPEG quality, values are clamped to `1..=100`
    pub fn set_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }
    /// Whether input to the decoder must sniff as `text/plain`
    pub fn set_strict_text(mut self, yes: bool) -> Self {
        self.strict_text = yes;
        self
    }
    /// Limits to apply when reading frames
    pub const fn frame_options(&self) -> FrameOptions {
        FrameOptions::new(self.max_width, self.max_height)
    }
}
