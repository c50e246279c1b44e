/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Spell images out in Morse code, and read them back
//!
//! An image becomes a text file holding its format, width, height and the
//! palette index of every pixel in row-major order, each number written
//! digit by digit in Morse. The layout is described in [`morse_core`].
//!
//! # Example
//! ```no_run
//! // writes photo.txt next to photo.png
//! assert!(morse_image::to_morse("photo.png"));
//! // and back, writes photo.png
//! assert!(morse_image::from_morse("photo.txt"));
//! ```
//!
//! Image decoding and encoding is done by an [`backend::ImageBackend`],
//! the default [`codecs::ZuneBackend`] handles PNG and JPEG as truecolor images.
//!
//! # Features
//!  - `png`: PNG decoding and encoding
//!  - `jpeg`: JPEG decoding and encoding
//!  - `serde-support`: Serializing frame headers and image metadata
pub use morse_core;
pub use workflow::{decode_file, encode_file, from_morse, to_morse, MorseCodec};

pub mod backend;
pub mod canvas;
pub mod codecs;
pub mod errors;
pub mod media;
pub mod options;
mod serde;
pub mod workflow;
