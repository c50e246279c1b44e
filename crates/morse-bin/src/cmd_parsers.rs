/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::ArgMatches;

pub mod global_options;

/// Input files of a subcommand, in the order given
pub fn input_files(options: &ArgMatches) -> Vec<OsString> {
    options
        .get_raw("in")
        .map(|files| files.map(|f| f.to_os_string()).collect())
        .unwrap_or_default()
}
