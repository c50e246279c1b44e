/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;

use clap::ArgMatches;
use log::{error, info};
use morse_image::codecs::ZuneBackend;
use morse_image::errors::ImageErrors;
use morse_image::options::MorseOptions;
use morse_image::MorseCodec;

use crate::cmd_parsers::input_files;
use crate::probe_files::probe_input_file;

/// Run the chosen subcommand on every input file
///
/// A failing file does not stop the others, the first failure is returned
/// once all files have been tried.
pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, options: &MorseOptions
) -> Result<(), ImageErrors> {
    info!("Creating workflows from input");

    let codec = MorseCodec::with_backend(ZuneBackend::new(), *options);

    let (command, sub_args) = match args.subcommand() {
        Some(sub) => sub,
        None => {
            return Err(ImageErrors::UnsupportedInput(
                "No subcommand given, expected one of encode, decode or probe".to_string()
            ))
        }
    };
    let mut first_error = None;

    for in_file in input_files(sub_args) {
        let result = run_one(command, &codec, &in_file, options);

        if let Err(err) = result {
            error!("{:?} failed: {:?}", in_file, err);

            first_error.get_or_insert(err);
        }
    }
    match first_error {
        Some(err) => Err(err),
        None => Ok(())
    }
}

fn run_one(
    command: &str, codec: &MorseCodec<ZuneBackend>, in_file: &OsStr, options: &MorseOptions
) -> Result<(), ImageErrors> {
    match command {
        "encode" => {
            let output = codec.encode_file(in_file)?;
            info!("Wrote {:?}", output);
        }
        "decode" => {
            let output = codec.decode_file(in_file)?;
            info!("Wrote {:?}", output);
        }
        "probe" => probe_input_file(in_file, options)?,
        _ => {
            return Err(ImageErrors::UnsupportedInput(format!(
                "Unknown subcommand {command}"
            )))
        }
    }
    Ok(())
}
