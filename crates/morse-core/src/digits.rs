/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Integers as concatenated Morse digits
use crate::alphabet::{morse_to_digit, DIGITS_IN_MORSE, GROUP_LEN};
use crate::errors::MorseErrors;

/// Separator between the digits of a rendered token
pub const DIGIT_SEPARATOR: char = ' ';

/// Encode a number into Morse, digit by digit, with no separator
///
/// # Example
/// ```
/// use morse_core::digits::encode_integer;
/// assert_eq!(encode_integer(21), "..---.----");
/// assert_eq!(encode_integer(0), "-----");
/// ```
pub fn encode_integer(value: u64) -> String {
    let mut output = String::new();
    encode_integer_into(value, &mut output);
    output
}

/// Append the Morse form of `value` to `output`
pub fn encode_integer_into(value: u64, output: &mut String) {
    let decimal = value.to_string();

    output.reserve(decimal.len() * GROUP_LEN);

    for digit in decimal.bytes() {
        // to_string only produces ascii digits
        output.push_str(DIGITS_IN_MORSE[usize::from(digit - b'0')]);
    }
}

/// Decode a concatenated Morse token back into a number
///
/// Groups are read left to right, the first group is the most
/// significant digit. Leading zeros are accepted.
///
/// # Errors
/// - `MalformedToken`: length is zero or not a multiple of 5
/// - `InvalidSymbol`: a group is not a digit
/// - `Overflow`: the value does not fit in a `u64`
pub fn decode_integer(token: &str) -> Result<u64, MorseErrors> {
    let bytes = token.as_bytes();

    if bytes.is_empty() || bytes.len() % GROUP_LEN != 0 {
        return Err(MorseErrors::MalformedToken(bytes.len()));
    }
    let mut value: u64 = 0;

    for group in bytes.chunks_exact(GROUP_LEN) {
        let digit = morse_to_digit(group)?;

        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| {
                let msg = format!("{} digit number does not fit in 64 bits", bytes.len() / 5);
                MorseErrors::Overflow(msg)
            })?;
    }
    Ok(value)
}

/// Render a token for writing, five symbol groups separated by a space
///
/// # Example
/// ```
/// use morse_core::digits::{encode_integer, group_token};
/// assert_eq!(group_token(&encode_integer(21)), "..--- .----");
/// ```
pub fn group_token(token: &str) -> String {
    let mut output = String::with_capacity(token.len() + token.len() / GROUP_LEN);
    group_token_into(token, &mut output);
    output
}

pub(crate) fn group_token_into(token: &str, output: &mut String) {
    // tokens are ascii so splitting on byte boundaries is safe
    for (i, group) in token.as_bytes().chunks(GROUP_LEN).enumerate() {
        if i != 0 {
            output.push(DIGIT_SEPARATOR);
        }
        output.push_str(&String::from_utf8_lossy(group));
    }
}
