/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use morse_core::{
    deserialize, deserialize_with_options, scan, serialize, Dimensions, FormatCode, Frame,
    FrameOptions, Header, MorseErrors, PixelIndex
};
use nanorand::{Rng, WyRand};

fn header(format: FormatCode, width: usize, height: usize) -> Header {
    Header::new(format, Dimensions::new(width, height).unwrap())
}

#[test]
fn test_concrete_frame() {
    let frame = Frame::new(header(FormatCode::Png, 2, 1), vec![5, 0]).unwrap();
    let text = frame.to_text().unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, ["----- / ", "..--- / ", ".---- / ", "..... / ", "-----"]);
    assert!(!text.ends_with('\n'));

    let back = deserialize(&text).unwrap();
    assert_eq!(back.header().format(), FormatCode::Png);
    assert_eq!(back.header().dimensions().width(), 2);
    assert_eq!(back.header().dimensions().height(), 1);
    assert_eq!(back.pixels(), &[5, 0]);
}

#[test]
fn test_random_frames() {
    let mut rand = WyRand::new_seed(42);

    for _ in 0..20 {
        let width = rand.generate_range(1_usize..=17);
        let height = rand.generate_range(1_usize..=17);
        let format = if rand.generate::<bool>() {
            FormatCode::Jpeg
        } else {
            FormatCode::Png
        };
        let pixels: Vec<PixelIndex> = scan(width, height)
            .map(|_| rand.generate::<PixelIndex>())
            .collect();

        let frame = Frame::new(header(format, width, height), pixels).unwrap();
        let text = frame.to_text().unwrap();

        assert_eq!(text.lines().count(), frame.token_count());
        assert_eq!(deserialize(&text).unwrap(), frame);
    }
}

#[test]
fn test_serialize_appends_to_sink() {
    let mut sink = b"existing".to_vec();
    let hdr = header(FormatCode::Jpeg, 1, 1);

    let written = serialize(&hdr, [3], &mut sink).unwrap();

    assert!(sink.starts_with(b"existing"));
    assert_eq!(sink.len(), "existing".len() + written);
}

#[test]
fn test_truncated_header() {
    assert!(matches!(deserialize(""), Err(MorseErrors::TruncatedHeader(0))));
    assert!(matches!(
        deserialize("----- / \n..---"),
        Err(MorseErrors::TruncatedHeader(2))
    ));
}

#[test]
fn test_unknown_format() {
    // format 2
    let text = "..--- / \n.---- / \n.---- / \n-----";
    assert!(matches!(deserialize(text), Err(MorseErrors::UnknownFormat(2))));
}

#[test]
fn test_malformed_token() {
    let text = "----- / \n.---- / \n.---- / \n----";
    assert!(matches!(deserialize(text), Err(MorseErrors::MalformedToken(4))));
}

#[test]
fn test_invalid_symbol() {
    let text = "----- / \n.---- / \n.---- / \n--x--";
    assert!(matches!(deserialize(text), Err(MorseErrors::InvalidSymbol(_))));
}

#[test]
fn test_pixel_count_mismatch() {
    let too_few = "----- / \n..--- / \n..--- / \n----- / \n-----";
    assert!(matches!(
        deserialize(too_few),
        Err(MorseErrors::PixelCountMismatch(4, 2))
    ));

    let too_many = "----- / \n.---- / \n.---- / \n----- / \n-----";
    assert!(matches!(
        deserialize(too_many),
        Err(MorseErrors::PixelCountMismatch(1, 2))
    ));
}

#[test]
fn test_zero_dimensions() {
    let text = "----- / \n----- / \n.---- / \n-----";
    assert!(matches!(
        deserialize(text),
        Err(MorseErrors::InvalidDimensions(0, 1))
    ));
}

#[test]
fn test_pixel_overflow() {
    // 4294967296 is one more than u32::MAX
    let mut text = String::from("----- / \n.---- / \n.---- / \n");
    text.push_str(&morse_core::digits::group_token(
        &morse_core::digits::encode_integer(u64::from(u32::MAX) + 1)
    ));
    assert!(matches!(deserialize(&text), Err(MorseErrors::Overflow(_))));
}

#[test]
fn test_large_dimensions() {
    let frame = Frame::new(header(FormatCode::Png, 1, 5), vec![0; 5]).unwrap();
    let text = frame.to_text().unwrap();

    let options = FrameOptions::new(10, 4);
    assert!(matches!(
        deserialize_with_options(&text, &options),
        Err(MorseErrors::LargeDimensions(4, 5))
    ));
    assert!(deserialize_with_options(&text, &FrameOptions::default()).is_ok());
}
