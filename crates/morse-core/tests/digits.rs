/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use morse_core::digits::{decode_integer, encode_integer, group_token};
use morse_core::MorseErrors;
use nanorand::{Rng, WyRand};

#[test]
fn test_small_numbers() {
    for value in 0..2000_u64 {
        let token = encode_integer(value);

        assert_eq!(token.len(), value.to_string().len() * 5);
        assert_eq!(decode_integer(&token).unwrap(), value);
    }
}

#[test]
fn test_random_numbers() {
    let mut rand = WyRand::new_seed(0x5eed);

    for _ in 0..500 {
        let value = rand.generate::<u64>();
        assert_eq!(decode_integer(&encode_integer(value)).unwrap(), value);
    }
    assert_eq!(decode_integer(&encode_integer(u64::MAX)).unwrap(), u64::MAX);
}

#[test]
fn test_leading_zeros_are_accepted() {
    // 007
    let token = "-----".repeat(2) + "--...";
    assert_eq!(token.len(), 15);
    assert_eq!(decode_integer(&token).unwrap(), 7);
    assert_eq!(decode_integer("----------.----").unwrap(), 1);
}

#[test]
fn test_malformed_lengths() {
    assert!(matches!(decode_integer(""), Err(MorseErrors::MalformedToken(0))));
    assert!(matches!(
        decode_integer("-----."),
        Err(MorseErrors::MalformedToken(6))
    ));
}

#[test]
fn test_overflow() {
    // u64::MAX is 18446744073709551615, one more digit always overflows
    let token = encode_integer(u64::MAX) + &encode_integer(0);
    assert!(matches!(decode_integer(&token), Err(MorseErrors::Overflow(_))));
}

#[test]
fn test_grouping() {
    assert_eq!(group_token(&encode_integer(0)), "-----");
    assert_eq!(group_token(&encode_integer(90)), "----. -----");
    assert_eq!(
        group_token(&encode_integer(305)),
        "...-- ----- ....."
    );
}
