/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::path::Path;

use log::debug;
use morse_core::deserialize_with_options;
use morse_image::backend::ImageBackend;
use morse_image::codecs::ZuneBackend;
use morse_image::errors::ImageErrors;
use morse_image::options::MorseOptions;

use crate::serde::{Metadata, Probed};

/// Probe an input file, extract its header, and print it to standard output.
///
/// Text files are read as Morse frames, images only have their headers read.
pub fn probe_input_file(in_file: &OsStr, options: &MorseOptions) -> Result<(), ImageErrors> {
    let backend = ZuneBackend::new();
    let path = Path::new(in_file);

    if !path.is_file() {
        return Err(ImageErrors::UnsupportedInput(format!(
            "{path:?} is not a file"
        )));
    }
    let bytes = std::fs::read(path)?;
    let media_type = backend.detect_kind(&bytes);

    debug!("Probing {:?} as {}", path, media_type);

    let probed = if media_type.is_text() {
        let text = String::from_utf8_lossy(&bytes);
        let frame = deserialize_with_options(&text, &options.frame_options())?;

        Probed::Frame(*frame.header())
    } else if media_type.format().is_some() {
        Probed::Image(backend.read_meta(&bytes)?)
    } else {
        return Err(ImageErrors::UnsupportedInput(format!(
            "{path:?} is {media_type}, nothing to probe"
        )));
    };
    let metadata = Metadata::new(in_file.to_os_string(), media_type, probed);
    let json = serde_json::to_string_pretty(&metadata).map_err(std::io::Error::from)?;

    println!("{json}");

    Ok(())
}
