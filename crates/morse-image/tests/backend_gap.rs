/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A palette backend whose indices only make sense on the canvas that
//! allocated them

use std::path::Path;

use morse_core::{FormatCode, PixelIndex};
use morse_image::backend::{ImageBackend, ImageMeta};
use morse_image::canvas::Rgba;
use morse_image::errors::ImageErrors;
use morse_image::options::MorseOptions;
use morse_image::MorseCodec;

struct PaletteCanvas {
    width:   usize,
    height:  usize,
    palette: Vec<Rgba>,
    pixels:  Vec<PixelIndex>
}

/// New canvases start with `initial_palette` already allocated
struct PaletteBackend {
    initial_palette: Vec<Rgba>
}

fn no_files() -> ImageErrors {
    ImageErrors::UnsupportedInput("palette backend has no file support".to_string())
}

impl ImageBackend for PaletteBackend {
    type Canvas = PaletteCanvas;

    fn name(&self) -> &'static str {
        "palette"
    }
    fn read_meta(&self, _: &[u8]) -> Result<ImageMeta, ImageErrors> {
        Err(no_files())
    }
    fn decode(&self, _: &[u8], _: FormatCode) -> Result<PaletteCanvas, ImageErrors> {
        Err(no_files())
    }
    fn canvas_dimensions(&self, canvas: &PaletteCanvas) -> (usize, usize) {
        (canvas.width, canvas.height)
    }
    fn palette_index_at(
        &self, canvas: &PaletteCanvas, x: usize, y: usize
    ) -> Result<PixelIndex, ImageErrors> {
        canvas
            .pixels
            .get(y * canvas.width + x)
            .copied()
            .ok_or(ImageErrors::OutOfBounds(x, y))
    }
    fn rgba_for_index(
        &self, canvas: &PaletteCanvas, index: PixelIndex
    ) -> Result<Rgba, ImageErrors> {
        canvas
            .palette
            .get(index as usize)
            .copied()
            .ok_or(ImageErrors::UnresolvedColor(index))
    }
    fn new_canvas(&self, width: usize, height: usize) -> Result<PaletteCanvas, ImageErrors> {
        Ok(PaletteCanvas {
            width,
            height,
            palette: self.initial_palette.clone(),
            pixels: vec![0; width * height]
        })
    }
    fn allocate_color(
        &self, canvas: &mut PaletteCanvas, color: Rgba
    ) -> Result<PixelIndex, ImageErrors> {
        let position = match canvas.palette.iter().position(|c| *c == color) {
            Some(position) => position,
            None => {
                canvas.palette.push(color);
                canvas.palette.len() - 1
            }
        };
        Ok(position as PixelIndex)
    }
    fn set_pixel(
        &self, canvas: &mut PaletteCanvas, x: usize, y: usize, index: PixelIndex
    ) -> Result<(), ImageErrors> {
        let width = canvas.width;
        let pixel = canvas
            .pixels
            .get_mut(y * width + x)
            .ok_or(ImageErrors::OutOfBounds(x, y))?;
        *pixel = index;
        Ok(())
    }
    fn save(&self, _: &PaletteCanvas, _: &Path, _: FormatCode, _: u8) -> Result<(), ImageErrors> {
        Err(no_files())
    }
}

fn source_canvas() -> PaletteCanvas {
    PaletteCanvas {
        width:   2,
        height:  2,
        palette: vec![
            Rgba::opaque(255, 0, 0),
            Rgba::opaque(0, 255, 0),
            Rgba::opaque(0, 0, 255),
        ],
        pixels:  vec![2, 1, 0, 2]
    }
}

#[test]
fn test_unrelated_palettes_are_reported() {
    let codec = MorseCodec::with_backend(
        PaletteBackend {
            initial_palette: vec![]
        },
        MorseOptions::default()
    );
    let frame = codec.encode_canvas(&source_canvas(), FormatCode::Png).unwrap();
    assert_eq!(frame.pixels(), &[2, 1, 0, 2]);

    let result = codec.decode_frame(&frame);
    assert!(matches!(result, Err(ImageErrors::UnresolvedColor(2))));
}

#[test]
fn test_shared_palette_round_trips() {
    let source = source_canvas();
    let codec = MorseCodec::with_backend(
        PaletteBackend {
            initial_palette: source.palette.clone()
        },
        MorseOptions::default()
    );
    let frame = codec.encode_canvas(&source, FormatCode::Png).unwrap();
    let restored = codec.decode_frame(&frame).unwrap();

    assert_eq!(restored.pixels, source.pixels);
    assert_eq!(restored.palette, source.palette);
}
