/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image side of the codec
//!
//! Workflows read each input file once and hand its bytes over,
//! everything they need from an image library goes through [`ImageBackend`].
use std::path::Path;

use morse_core::{FormatCode, PixelIndex};

use crate::canvas::Rgba;
use crate::errors::ImageErrors;
use crate::media::{guess_media_kind, MediaKind};

/// Format and dimensions of an image on disk
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageMeta {
    pub width:  usize,
    pub height: usize,
    pub format: FormatCode
}

/// Capabilities the encode and decode workflows need from an image library
///
/// Palette indices are only meaningful to the backend that produced them,
/// a backend may refuse to resolve an index it did not allocate on the
/// canvas it is asked about by returning [`ImageErrors::UnresolvedColor`].
pub trait ImageBackend {
    /// The in-memory image this backend works on
    type Canvas;

    /// Name of the backend, used in logs
    fn name(&self) -> &'static str;

    /// Media type of a file's contents
    ///
    /// The default implementation sniffs magic bytes
    fn detect_kind(&self, bytes: &[u8]) -> MediaKind {
        guess_media_kind(bytes)
    }

    /// Read the format and dimensions of an encoded image without decoding pixels
    fn read_meta(&self, bytes: &[u8]) -> Result<ImageMeta, ImageErrors>;

    /// Decode an encoded image
    fn decode(&self, bytes: &[u8], format: FormatCode) -> Result<Self::Canvas, ImageErrors>;

    /// Return a tuple of `(width, height)` of a canvas
    fn canvas_dimensions(&self, canvas: &Self::Canvas) -> (usize, usize);

    /// Palette index of the pixel at `(x, y)`
    fn palette_index_at(
        &self, canvas: &Self::Canvas, x: usize, y: usize
    ) -> Result<PixelIndex, ImageErrors>;

    /// Color behind a palette index of `canvas`
    fn rgba_for_index(
        &self, canvas: &Self::Canvas, index: PixelIndex
    ) -> Result<Rgba, ImageErrors>;

    /// A new blank canvas
    fn new_canvas(&self, width: usize, height: usize) -> Result<Self::Canvas, ImageErrors>;

    /// Allocate `color` on `canvas`, returning its index there
    fn allocate_color(
        &self, canvas: &mut Self::Canvas, color: Rgba
    ) -> Result<PixelIndex, ImageErrors>;

    /// Paint the pixel at `(x, y)` with a color allocated on `canvas`
    fn set_pixel(
        &self, canvas: &mut Self::Canvas, x: usize, y: usize, index: PixelIndex
    ) -> Result<(), ImageErrors>;

    /// Write `canvas` to `path` in `format`
    ///
    /// `quality` is only used by lossy formats
    fn save(
        &self, canvas: &Self::Canvas, path: &Path, format: FormatCode, quality: u8
    ) -> Result<(), ImageErrors>;
}
