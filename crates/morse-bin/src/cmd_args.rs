/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

fn input_files(help: &'static str) -> Arg {
    Arg::new("in")
        .help(help)
        .value_name("FILE")
        .action(ArgAction::Append)
        .num_args(1..)
        .required(true)
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("morse")
        .about("Spell images out in Morse code and read them back")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("encode")
            .about("Write the Morse text of PNG or JPEG images to .txt files next to them")
            .arg(input_files("Images to encode")))
        .subcommand(Command::new("decode")
            .about("Restore images from Morse text files, writing them next to the text")
            .arg(input_files("Morse text files to decode")))
        .subcommand(Command::new("probe")
            .about("Print the header of Morse text files or images as JSON")
            .arg(input_files("Files to probe")))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about each workflow state"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Largest image width to accept")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Largest image height to accept")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("quality")
            .long("quality")
            .global(true)
            .help_heading("ADVANCED")
            .help("Quality of restored JPEG images, 1 to 100")
            .value_parser(value_parser!(u8).range(1..=100))
            .default_value("100"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cmd() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let matches = create_cmd_args()
            .try_get_matches_from(["morse", "encode", "a.png", "b.jpg", "--quality", "80", "--info"])
            .unwrap();

        assert_eq!(matches.get_one::<u8>("quality"), Some(&80));
        assert!(matches.get_flag("info"));

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "encode");

        let files: Vec<&String> = sub.get_many::<String>("in").unwrap().collect();
        assert_eq!(files, ["a.png", "b.jpg"]);
    }

    #[test]
    fn quality_out_of_range() {
        let result = create_cmd_args().try_get_matches_from(["morse", "decode", "x.txt", "--quality", "0"]);
        assert!(result.is_err());
    }
}
