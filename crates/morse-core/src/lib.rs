/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines for spelling images out in Morse code.
//!
//! Every number in a frame, be it the format code, a dimension or a pixel's
//! palette index, is written digit by digit, each digit being five Morse symbols.
//!
//! ```text
//! ╔═════════════╤═══════════════════════════════════════════════════════╗
//! ║ Token       │ Description                                           ║
//! ╠═════════════╪═══════════════════════════════════════════════════════╣
//! ║ 1           │ Format code, 0 for PNG, 1 for JPEG                    ║
//! ╟─────────────┼───────────────────────────────────────────────────────╢
//! ║ 1           │ Image width                                           ║
//! ╟─────────────┼───────────────────────────────────────────────────────╢
//! ║ 1           │ Image height                                          ║
//! ╟─────────────┼───────────────────────────────────────────────────────╢
//! ║ [w*h]       │ One palette index per pixel, row-major                ║
//! ╚═════════════╧═══════════════════════════════════════════════════════╝
//! ```
//!
//! Digits inside a token are separated by a single space, tokens are separated
//! by `" / "` and a line break, the last token is not followed by anything.
//!
//! A 2x1 PNG whose pixels have the indices 5 and 0 is written as
//! ```text
//! ----- /
//! ..--- /
//! .---- /
//! ..... /
//! -----
//! ```
//!
//! # Features
//!  - `serde`: Enables serializing of frame headers

pub use errors::MorseErrors;
pub use format::FormatCode;
pub use frame::*;
pub use raster::{scan, RasterScan};

pub mod alphabet;
pub mod digits;
mod errors;
mod format;
mod frame;
pub mod raster;
mod serde;
