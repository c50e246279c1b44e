/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encode and decode workflows
//!
//! Each call runs as a small state machine that owns everything it
//! produces along the way, nothing is shared between two calls.
//!
//! ```text
//! encode: ValidateInput -> ReadImageMeta -> DecodeImagePixels -> BuildFrame -> WriteFrame -> Done
//! decode: ValidateInput -> ReadFrame -> RebuildCanvas -> ResolvePixelColors -> PaintPixels -> PersistImage -> Done
//! ```
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info, warn};
use morse_core::{
    deserialize_with_options, scan, serialize, Dimensions, FormatCode, Frame, Header, PixelIndex
};

use crate::backend::{ImageBackend, ImageMeta};
use crate::codecs::ZuneBackend;
use crate::errors::ImageErrors;
use crate::options::MorseOptions;

/// Extension of files holding Morse frames
pub const TEXT_EXTENSION: &str = "txt";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EncodeState {
    ValidateInput,
    ReadImageMeta,
    DecodeImagePixels,
    BuildFrame,
    WriteFrame,
    Done
}

impl EncodeState {
    pub fn next(self) -> Option<Self> {
        match self {
            EncodeState::ValidateInput => Some(EncodeState::ReadImageMeta),
            EncodeState::ReadImageMeta => Some(EncodeState::DecodeImagePixels),
            EncodeState::DecodeImagePixels => Some(EncodeState::BuildFrame),
            EncodeState::BuildFrame => Some(EncodeState::WriteFrame),
            EncodeState::WriteFrame => Some(EncodeState::Done),
            EncodeState::Done => None
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeState {
    ValidateInput,
    ReadFrame,
    RebuildCanvas,
    ResolvePixelColors,
    PaintPixels,
    PersistImage,
    Done
}

impl DecodeState {
    pub fn next(self) -> Option<Self> {
        match self {
            DecodeState::ValidateInput => Some(DecodeState::ReadFrame),
            DecodeState::ReadFrame => Some(DecodeState::RebuildCanvas),
            DecodeState::RebuildCanvas => Some(DecodeState::ResolvePixelColors),
            DecodeState::ResolvePixelColors => Some(DecodeState::PaintPixels),
            DecodeState::PaintPixels => Some(DecodeState::PersistImage),
            DecodeState::PersistImage => Some(DecodeState::Done),
            DecodeState::Done => None
        }
    }
}

fn missing(what: &str) -> ImageErrors {
    ImageErrors::UnsupportedInput(format!("workflow reached a state without {what}"))
}

fn check_is_file(path: &Path) -> Result<(), ImageErrors> {
    if !path.exists() {
        return Err(ImageErrors::UnsupportedInput(format!(
            "{path:?} does not exist"
        )));
    }
    if !path.is_file() {
        return Err(ImageErrors::UnsupportedInput(format!(
            "{path:?} is not a file"
        )));
    }
    Ok(())
}

/// Path next to `input` with `extension`
///
/// # Errors
/// `UnsupportedInput` when that path is `input` itself
fn output_path(input: &Path, extension: &str) -> Result<PathBuf, ImageErrors> {
    let output = input.with_extension(extension);

    if output == input {
        return Err(ImageErrors::UnsupportedInput(format!(
            "{input:?} already ends in .{extension}, the output would overwrite it"
        )));
    }
    Ok(output)
}

/// Turns one image file into a Morse text file next to it
pub struct EncodeWorkFlow<'a, B: ImageBackend> {
    backend: &'a B,
    options: MorseOptions,
    input:   PathBuf,
    state:   Option<EncodeState>,
    bytes:   Vec<u8>,
    meta:    Option<ImageMeta>,
    header:  Option<Header>,
    pixels:  Vec<PixelIndex>,
    frame:   Option<Frame>,
    output:  Option<PathBuf>
}

impl<'a, B: ImageBackend> EncodeWorkFlow<'a, B> {
    pub fn new<P: AsRef<Path>>(backend: &'a B, input: P, options: MorseOptions) -> Self {
        EncodeWorkFlow {
            backend,
            options,
            input: input.as_ref().to_path_buf(),
            state: Some(EncodeState::ValidateInput),
            bytes: vec![],
            meta: None,
            header: None,
            pixels: vec![],
            frame: None,
            output: None
        }
    }
    /// The state the next call to `advance` will run, `None` once finished
    pub fn current_state(&self) -> Option<EncodeState> {
        self.state
    }
    /// Path of the text file, available once the frame is written
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
    /// Run the current state and move to the next one
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let state = match self.state {
            Some(state) => state,
            None => return Ok(())
        };
        info!("Current state: {:?}", state);

        let start = Instant::now();

        match state {
            EncodeState::ValidateInput => {
                check_is_file(&self.input)?;
                output_path(&self.input, TEXT_EXTENSION)?;

                self.bytes = std::fs::read(&self.input)?;

                let kind = self.backend.detect_kind(&self.bytes);

                if kind.format().is_none() {
                    return Err(ImageErrors::UnsupportedInput(format!(
                        "{:?} is {kind}, expected image/png or image/jpeg",
                        self.input
                    )));
                }
                debug!("Input media type: {kind}");
            }
            EncodeState::ReadImageMeta => {
                let meta = self.backend.read_meta(&self.bytes)?;
                let dimensions = Dimensions::new(meta.width, meta.height)?;

                self.options.frame_options().check(&dimensions)?;

                self.header = Some(Header::new(meta.format, dimensions));
                self.meta = Some(meta);
            }
            EncodeState::DecodeImagePixels => {
                let meta = self.meta.ok_or_else(|| missing("image metadata"))?;
                let bytes = std::mem::take(&mut self.bytes);
                let canvas = self.backend.decode(&bytes, meta.format)?;

                let found = self.backend.canvas_dimensions(&canvas);

                if found != (meta.width, meta.height) {
                    return Err(ImageErrors::ImageDecodeFailure(format!(
                        "Header says {}x{} but decoded image is {}x{}",
                        meta.width, meta.height, found.0, found.1
                    )));
                }
                self.pixels = collect_indices(self.backend, &canvas, meta.width, meta.height)?;
            }
            EncodeState::BuildFrame => {
                let header = self.header.ok_or_else(|| missing("a frame header"))?;
                let pixels = std::mem::take(&mut self.pixels);

                self.frame = Some(Frame::new(header, pixels)?);
            }
            EncodeState::WriteFrame => {
                let frame = self.frame.as_ref().ok_or_else(|| missing("a frame"))?;
                let output = output_path(&self.input, TEXT_EXTENSION)?;

                let written = append_frame(frame, &output)?;

                info!("Wrote {} tokens ({written} bytes) to {:?}", frame.token_count(), output);

                self.output = Some(output);
            }
            EncodeState::Done => {
                info!("Finished encoding {:?}", self.input);
            }
        }
        let stop = Instant::now();

        info!("Finished {:?} in {} ms", state, (stop - start).as_millis());

        self.state = state.next();

        Ok(())
    }
    /// Run every remaining state, returning the path of the text file
    pub fn advance_to_end(&mut self) -> Result<PathBuf, ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        self.output.clone().ok_or_else(|| missing("an output path"))
    }
}

/// Turns one Morse text file back into an image next to it
pub struct DecodeWorkFlow<'a, B: ImageBackend> {
    backend: &'a B,
    options: MorseOptions,
    input:   PathBuf,
    state:   Option<DecodeState>,
    bytes:   Vec<u8>,
    frame:   Option<Frame>,
    canvas:  Option<B::Canvas>,
    colors:  Vec<PixelIndex>,
    output:  Option<PathBuf>
}

impl<'a, B: ImageBackend> DecodeWorkFlow<'a, B> {
    pub fn new<P: AsRef<Path>>(backend: &'a B, input: P, options: MorseOptions) -> Self {
        DecodeWorkFlow {
            backend,
            options,
            input: input.as_ref().to_path_buf(),
            state: Some(DecodeState::ValidateInput),
            bytes: vec![],
            frame: None,
            canvas: None,
            colors: vec![],
            output: None
        }
    }
    /// The state the next call to `advance` will run, `None` once finished
    pub fn current_state(&self) -> Option<DecodeState> {
        self.state
    }
    /// Path of the restored image, available once it is saved
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
    /// Run the current state and move to the next one
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let state = match self.state {
            Some(state) => state,
            None => return Ok(())
        };
        info!("Current state: {:?}", state);

        let start = Instant::now();

        match state {
            DecodeState::ValidateInput => {
                check_is_file(&self.input)?;

                self.bytes = std::fs::read(&self.input)?;

                let kind = self.backend.detect_kind(&self.bytes);

                if !kind.is_text() {
                    if self.options.get_strict_text() {
                        return Err(ImageErrors::UnsupportedInput(format!(
                            "{:?} is {kind}, expected text/plain",
                            self.input
                        )));
                    }
                    warn!("{:?} is {kind}, decoding anyway", self.input);
                }
            }
            DecodeState::ReadFrame => {
                let text = String::from_utf8(std::mem::take(&mut self.bytes)).map_err(|_| {
                    ImageErrors::UnsupportedInput(format!("{:?} is not UTF-8 text", self.input))
                })?;
                let frame = deserialize_with_options(&text, &self.options.frame_options())?;

                self.frame = Some(frame);
            }
            DecodeState::RebuildCanvas => {
                let frame = self.frame.as_ref().ok_or_else(|| missing("a frame"))?;
                let dims = frame.header().dimensions();

                self.canvas = Some(self.backend.new_canvas(dims.width(), dims.height())?);
            }
            DecodeState::ResolvePixelColors => {
                let frame = self.frame.as_ref().ok_or_else(|| missing("a frame"))?;
                let canvas = self.canvas.as_mut().ok_or_else(|| missing("a canvas"))?;

                self.colors = resolve_colors(self.backend, canvas, frame.pixels())?;
            }
            DecodeState::PaintPixels => {
                let frame = self.frame.as_ref().ok_or_else(|| missing("a frame"))?;
                let canvas = self.canvas.as_mut().ok_or_else(|| missing("a canvas"))?;
                let dims = frame.header().dimensions();

                paint(self.backend, canvas, dims, &self.colors)?;
            }
            DecodeState::PersistImage => {
                let frame = self.frame.as_ref().ok_or_else(|| missing("a frame"))?;
                let canvas = self.canvas.as_ref().ok_or_else(|| missing("a canvas"))?;
                let format = frame.header().format();
                let output = output_path(&self.input, format.extension())?;

                self.backend
                    .save(canvas, &output, format, self.options.get_jpeg_quality())?;

                info!("Saved {:?} image to {:?}", format, output);

                self.output = Some(output);
            }
            DecodeState::Done => {
                info!("Finished decoding {:?}", self.input);
            }
        }
        let stop = Instant::now();

        info!("Finished {:?} in {} ms", state, (stop - start).as_millis());

        self.state = state.next();

        Ok(())
    }
    /// Run every remaining state, returning the path of the restored image
    pub fn advance_to_end(&mut self) -> Result<PathBuf, ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        self.output.clone().ok_or_else(|| missing("an output path"))
    }
}

/// Palette index of every pixel, in raster order
fn collect_indices<B: ImageBackend>(
    backend: &B, canvas: &B::Canvas, width: usize, height: usize
) -> Result<Vec<PixelIndex>, ImageErrors> {
    scan(width, height)
        .map(|(x, y)| backend.palette_index_at(canvas, x, y))
        .collect()
}

/// Turn frame indices into colors allocated on `canvas`
///
/// Each distinct index is resolved and allocated once.
fn resolve_colors<B: ImageBackend>(
    backend: &B, canvas: &mut B::Canvas, pixels: &[PixelIndex]
) -> Result<Vec<PixelIndex>, ImageErrors> {
    let mut allocated: HashMap<PixelIndex, PixelIndex> = HashMap::new();
    let mut colors = Vec::with_capacity(pixels.len());

    for &index in pixels {
        let color = match allocated.get(&index) {
            Some(color) => *color,
            None => {
                let rgba = backend.rgba_for_index(canvas, index)?;
                let color = backend.allocate_color(canvas, rgba)?;

                allocated.insert(index, color);
                color
            }
        };
        colors.push(color);
    }
    debug!("Allocated {} distinct colors", allocated.len());

    Ok(colors)
}

fn paint<B: ImageBackend>(
    backend: &B, canvas: &mut B::Canvas, dimensions: Dimensions, colors: &[PixelIndex]
) -> Result<(), ImageErrors> {
    let pixels = scan(dimensions.width(), dimensions.height());

    if pixels.len() != colors.len() {
        return Err(morse_core::MorseErrors::PixelCountMismatch(pixels.len(), colors.len()).into());
    }
    for ((x, y), &color) in pixels.zip(colors) {
        backend.set_pixel(canvas, x, y, color)?;
    }
    Ok(())
}

fn append_frame(frame: &Frame, output: &Path) -> Result<usize, ImageErrors> {
    let file = OpenOptions::new().create(true).append(true).open(output)?;
    let mut writer = BufWriter::new(file);

    let written = serialize(frame.header(), frame.pixels().iter().copied(), &mut writer)?;
    writer.flush()?;

    Ok(written)
}

/// Image to Morse codec over an image backend
///
/// # Example
/// ```no_run
/// use morse_image::workflow::MorseCodec;
///
/// let codec = MorseCodec::new();
/// let text = codec.encode_file("photo.png").unwrap();
/// let image = codec.decode_file(&text).unwrap();
/// ```
pub struct MorseCodec<B: ImageBackend = ZuneBackend> {
    backend: B,
    options: MorseOptions
}

impl MorseCodec<ZuneBackend> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> MorseCodec<ZuneBackend> {
        MorseCodec::with_backend(ZuneBackend::new(), MorseOptions::default())
    }
}

impl<B: ImageBackend> MorseCodec<B> {
    pub fn with_backend(backend: B, options: MorseOptions) -> MorseCodec<B> {
        MorseCodec { backend, options }
    }
    pub fn set_options(&mut self, options: MorseOptions) {
        self.options = options;
    }
    pub const fn options(&self) -> &MorseOptions {
        &self.options
    }
    pub const fn backend(&self) -> &B {
        &self.backend
    }
    /// Write the Morse text of an image to a `.txt` file next to it
    ///
    /// The text file is opened in append mode
    pub fn encode_file<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, ImageErrors> {
        info!("Encoding {:?} with the {} backend", path.as_ref(), self.backend.name());

        EncodeWorkFlow::new(&self.backend, path, self.options).advance_to_end()
    }
    /// Restore the image spelled out in a Morse text file
    ///
    /// The image is written next to the text file with the extension of its format
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, ImageErrors> {
        info!("Decoding {:?} with the {} backend", path.as_ref(), self.backend.name());

        DecodeWorkFlow::new(&self.backend, path, self.options).advance_to_end()
    }
    /// Build the frame of an in-memory canvas
    pub fn encode_canvas(&self, canvas: &B::Canvas, format: FormatCode) -> Result<Frame, ImageErrors> {
        let (width, height) = self.backend.canvas_dimensions(canvas);
        let dimensions = Dimensions::new(width, height)?;

        self.options.frame_options().check(&dimensions)?;

        let pixels = collect_indices(&self.backend, canvas, width, height)?;

        Ok(Frame::new(Header::new(format, dimensions), pixels)?)
    }
    /// Paint a frame onto a new canvas
    pub fn decode_frame(&self, frame: &Frame) -> Result<B::Canvas, ImageErrors> {
        let dimensions = frame.header().dimensions();

        self.options.frame_options().check(&dimensions)?;

        let mut canvas = self
            .backend
            .new_canvas(dimensions.width(), dimensions.height())?;

        let colors = resolve_colors(&self.backend, &mut canvas, frame.pixels())?;
        paint(&self.backend, &mut canvas, dimensions, &colors)?;

        Ok(canvas)
    }
    /// Encode a file, reporting success as a boolean
    pub fn to_morse<P: AsRef<Path>>(&self, path: P) -> bool {
        report(path.as_ref(), self.encode_file(path.as_ref()))
    }
    /// Decode a file, reporting success as a boolean
    pub fn from_morse<P: AsRef<Path>>(&self, path: P) -> bool {
        report(path.as_ref(), self.decode_file(path.as_ref()))
    }
}

fn report(path: &Path, result: Result<PathBuf, ImageErrors>) -> bool {
    match result {
        Ok(output) => {
            debug!("{:?} written from {:?}", output, path);
            true
        }
        Err(err) => {
            warn!("Could not convert {:?}: {:?}", path, err);
            false
        }
    }
}

/// Encode the image at `path` into a `.txt` file next to it
///
/// Returns whether the text file was written
pub fn to_morse<P: AsRef<Path>>(path: P) -> bool {
    MorseCodec::new().to_morse(path)
}

/// Decode the Morse text file at `path` into an image next to it
///
/// Returns whether the image was written
pub fn from_morse<P: AsRef<Path>>(path: P) -> bool {
    MorseCodec::new().from_morse(path)
}

/// Encode the image at `path`, returning the path of the text file
pub fn encode_file<P: AsRef<Path>>(path: P, options: MorseOptions) -> Result<PathBuf, ImageErrors> {
    MorseCodec::with_backend(ZuneBackend::new(), options).encode_file(path)
}

/// Decode the text file at `path`, returning the path of the image
pub fn decode_file<P: AsRef<Path>>(path: P, options: MorseOptions) -> Result<PathBuf, ImageErrors> {
    MorseCodec::with_backend(ZuneBackend::new(), options).decode_file(path)
}
