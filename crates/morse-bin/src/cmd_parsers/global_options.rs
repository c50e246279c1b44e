/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, warn, Level};
use morse_image::options::MorseOptions;

pub fn parse_options(options: &ArgMatches) -> MorseOptions {
    let mut morse_options = MorseOptions::default();

    if let Some(width) = options.get_one::<usize>("max-width") {
        morse_options = morse_options.set_max_width(*width);
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        morse_options = morse_options.set_max_height(*height);
    }
    if let Some(quality) = options.get_one::<u8>("quality") {
        if options.value_source("quality") == Some(ValueSource::CommandLine) {
            info!("Setting jpeg quality to {quality}");
        }
        morse_options = morse_options.set_jpeg_quality(*quality);
    }
    morse_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }
    if log_level < Level::Info {
        warn!("Only warnings and errors will be shown, use --info for more");
    }
    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn defaults_match_library_defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["morse", "probe", "a.txt"])
            .unwrap();

        assert_eq!(parse_options(&matches), MorseOptions::default());
    }

    #[test]
    fn limits_from_command_line() {
        let matches = create_cmd_args()
            .try_get_matches_from(["morse", "--max-width", "64", "decode", "a.txt", "--max-height", "32"])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.get_max_width(), 64);
        assert_eq!(options.get_max_height(), 32);
        assert_eq!(options.get_jpeg_quality(), 100);
    }
}
