/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decimal digits in Morse code.
//!
//! Each digit is a fixed group of five symbols
//!
//! ```text
//! 0 -----    5 .....
//! 1 .----    6 -....
//! 2 ..---    7 --...
//! 3 ...--    8 ---..
//! 4 ....-    9 ----.
//! ```
use crate::errors::MorseErrors;

/// Number of symbols making up one digit
pub const GROUP_LEN: usize = 5;

/// Morse patterns, indexed by the digit they spell
pub const DIGITS_IN_MORSE: [&str; 10] = [
    "-----", // 0
    ".----", // 1
    "..---", // 2
    "...--", // 3
    "....-", // 4
    ".....", // 5
    "-....", // 6
    "--...", // 7
    "---..", // 8
    "----."  // 9
];

const NO_DIGIT: u8 = u8::MAX;

/// Reverse table, a group is read as a 5-bit number where a dash is a set bit.
static MORSE_TO_DIGIT: [u8; 1 << GROUP_LEN] = build_reverse_table();

const fn group_key(group: &[u8]) -> usize {
    let mut key = 0;
    let mut i = 0;

    while i < GROUP_LEN {
        key = (key << 1) | (group[i] == b'-') as usize;
        i += 1;
    }
    key
}

const fn build_reverse_table() -> [u8; 1 << GROUP_LEN] {
    let mut table = [NO_DIGIT; 1 << GROUP_LEN];
    let mut digit = 0;

    while digit < DIGITS_IN_MORSE.len() {
        table[group_key(DIGITS_IN_MORSE[digit].as_bytes())] = digit as u8;
        digit += 1;
    }
    table
}

/// Return the Morse pattern of a single decimal digit
///
/// # Errors
/// `InvalidSymbol` if `digit` is greater than 9
///
/// # Example
/// ```
/// use morse_core::alphabet::digit_to_morse;
/// assert_eq!(digit_to_morse(7).unwrap(), "--...");
/// assert!(digit_to_morse(10).is_err());
/// ```
pub fn digit_to_morse(digit: u8) -> Result<&'static str, MorseErrors> {
    DIGITS_IN_MORSE
        .get(usize::from(digit))
        .copied()
        .ok_or_else(|| MorseErrors::InvalidSymbol(format!("{digit} is not a decimal digit")))
}

/// Return the digit spelled by a group of five Morse symbols
///
/// # Errors
/// - `MalformedToken` if the group is not exactly five symbols long
/// - `InvalidSymbol` if the group has characters other than `.` and `-`
///   or is not one of the ten digit patterns
pub fn morse_to_digit(group: &[u8]) -> Result<u8, MorseErrors> {
    if group.len() != GROUP_LEN {
        return Err(MorseErrors::MalformedToken(group.len()));
    }
    if let Some(symbol) = group.iter().find(|c| !matches!(**c, b'.' | b'-')) {
        let msg = format!(
            "unexpected character {:?} in group {:?}",
            char::from(*symbol),
            String::from_utf8_lossy(group)
        );
        return Err(MorseErrors::InvalidSymbol(msg));
    }
    match MORSE_TO_DIGIT[group_key(group)] {
        NO_DIGIT => {
            let msg = format!(
                "group {:?} does not spell a digit",
                String::from_utf8_lossy(group)
            );
            Err(MorseErrors::InvalidSymbol(msg))
        }
        digit => Ok(digit)
    }
}
