//! Integration tests for Quietmark
//!
//! Each test goes through the public API the way a caller would: load a
//! carrier, encode, render or save it, load it back and decode.

use image::{ImageBuffer, Rgb, RgbImage};
use quietmark::text::{frame, unframe, transform, untransform, ClassTag, ClassifiedByte};
use quietmark::{
    decode_image, decode_image_text, decode_text, encode_image, encode_text, CodecConfig,
    ExtractMode, ImageStego, InvisibleCodeMap, Payload, StegoError, TextCarrier,
};

fn words(n: usize) -> String {
    (0..n).map(|i| format!("word{}", i)).collect::<Vec<_>>().join(" ")
}

fn gradient(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x ^ y) % 256) as u8])
    })
}

/// Five words hold zero characters
#[test]
fn test_five_word_carrier_rejects_hi() {
    let carrier = TextCarrier::parse("the quick brown fox jumps");
    let result = encode_text(&carrier, &Payload::from("Hi"), &CodecConfig::default());
    assert!(matches!(result, Err(StegoError::MessageTooLarge { .. })));
}

/// Twelve words hold exactly two characters
#[test]
fn test_twelve_word_carrier_roundtrip() {
    let config = CodecConfig::default();
    let carrier = TextCarrier::parse(&words(12));

    let encoded = encode_text(&carrier, &Payload::from("Hi"), &config).unwrap();
    let received = TextCarrier::parse(&encoded.carrier.to_string());

    assert_eq!(decode_text(&received, &config).unwrap(), "Hi");
}

/// At capacity succeeds, one over fails
#[test]
fn test_text_capacity_boundary() {
    let config = CodecConfig::default();
    let carrier = TextCarrier::parse(&words(30));

    assert!(encode_text(&carrier, &Payload::from("12345"), &config).is_ok());
    assert!(matches!(
        encode_text(&carrier, &Payload::from("123456"), &config),
        Err(StegoError::MessageTooLarge {
            needed: 6,
            capacity: 5,
            ..
        })
    ));
}

/// Visible characters are untouched, layout included
#[test]
fn test_visible_text_invariance() {
    let config = CodecConfig::default();
    let cover = "Dear team,\n\n  the quarterly numbers look fine.\tPlease review the\nattached notes before Friday, and bring questions.\n";
    let cover = cover.repeat(4);
    let carrier = TextCarrier::parse(&cover);

    let encoded = encode_text(&carrier, &Payload::from("ok!"), &config).unwrap();
    let stego = encoded.carrier.to_string();

    assert_ne!(stego, cover);
    assert_eq!(encoded.carrier.visible_text(&config.code_points), cover);

    let original_words: Vec<&str> = cover.split_whitespace().collect();
    let stego_words: Vec<String> = stego
        .split_whitespace()
        .map(|w| w.chars().filter(|&c| !config.code_points.contains(c)).collect())
        .collect();
    assert_eq!(stego_words, original_words);
}

/// Text files survive a trip through the filesystem
#[test]
fn test_text_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let cover_path = dir.path().join("cover.txt");
    let stego_path = dir.path().join("stego.txt");
    std::fs::write(&cover_path, words(120)).unwrap();

    let config = CodecConfig::default();
    let carrier = TextCarrier::from_file(&cover_path).unwrap();
    let encoded = encode_text(&carrier, &Payload::from("Über 20 chars, ok?"), &config).unwrap();
    std::fs::write(&stego_path, encoded.carrier.to_string()).unwrap();

    let received = TextCarrier::from_file(&stego_path).unwrap();
    assert_eq!(decode_text(&received, &config).unwrap(), "Über 20 chars, ok?");
}

/// Re-encoding replaces the previous message
#[test]
fn test_reencode_replaces_message() {
    let config = CodecConfig::default();
    let carrier = TextCarrier::parse(&words(60));

    let first = encode_text(&carrier, &Payload::from("first"), &config).unwrap();
    let second = encode_text(&first.carrier, &Payload::from("2nd"), &config).unwrap();

    assert_eq!(decode_text(&second.carrier, &config).unwrap(), "2nd");
}

/// Streaming and full extraction agree on a well-formed carrier
#[test]
fn test_extract_modes_agree() {
    let streaming = CodecConfig::default();
    let full = CodecConfig {
        extract_mode: ExtractMode::Full,
        ..Default::default()
    };
    let carrier = TextCarrier::parse(&words(48));
    let encoded = encode_text(&carrier, &Payload::from("modes"), &streaming).unwrap();

    assert_eq!(
        decode_text(&encoded.carrier, &streaming).unwrap(),
        decode_text(&encoded.carrier, &full).unwrap()
    );
}

/// A carrier without hidden characters reports no message, not a crash
#[test]
fn test_plain_text_reports_no_message() {
    let carrier = TextCarrier::parse(&words(20));
    let err = decode_text(&carrier, &CodecConfig::default()).unwrap_err();
    assert!(err.is_no_message());
}

/// A different code point table can't read the message
#[test]
fn test_mismatched_code_points_find_nothing() {
    let sender = CodecConfig::default();
    let receiver = CodecConfig {
        code_points: InvisibleCodeMap {
            zero_zero: '\u{200B}',
            zero_one: '\u{2060}',
            one_zero: '\u{200D}',
            one_one: '\u{FEFF}',
        },
        ..Default::default()
    };
    let carrier = TextCarrier::parse(&words(12));
    let encoded = encode_text(&carrier, &Payload::from("Hi"), &sender).unwrap();

    assert!(decode_text(&encoded.carrier, &receiver)
        .unwrap_err()
        .is_no_message());
}

/// Space goes through the range branch and back
#[test]
fn test_space_transform_scenario() {
    let t = transform(' ').unwrap();
    assert_eq!(t.tag.prefix(), 0b0011);
    assert_eq!(t.byte, 0b1101_1010);
    assert_eq!(
        untransform(ClassifiedByte {
            tag: ClassTag::Range,
            byte: 0b1101_1010
        }),
        Some(' ')
    );
}

/// Empty message frames to the terminator alone
#[test]
fn test_empty_message_frame() {
    let framed = frame("").unwrap();
    assert_eq!(framed.len(), 12);
    assert_eq!(unframe(&framed).unwrap(), "");
}

/// 4x4 black image holds the bare delimiter
#[test]
fn test_empty_message_in_four_by_four_image() {
    let config = CodecConfig::default();
    let image = ImageStego::from_pixels(RgbImage::new(4, 4));

    let hidden = encode_image(&image, &Payload::from(""), &config).unwrap();
    assert_eq!(decode_image_text(&hidden, &config).unwrap(), "");
}

/// Image round trip through a PNG file
#[test]
fn test_image_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let cover_path = dir.path().join("cover.png");
    let stego_path = dir.path().join("stego.png");
    gradient(64, 48).save(&cover_path).unwrap();

    let config = CodecConfig::default();
    let image = ImageStego::from_file(&cover_path).unwrap();
    let hidden = encode_image(&image, &Payload::from("meet at the old bridge"), &config).unwrap();
    hidden.save(&stego_path).unwrap();

    let received = ImageStego::from_file(&stego_path).unwrap();
    assert_eq!(
        decode_image_text(&received, &config).unwrap(),
        "meet at the old bridge"
    );
}

/// Image capacity boundary counts the delimiter
#[test]
fn test_image_capacity_boundary() {
    let config = CodecConfig::default();
    // 8x8 = 64 pixels = 192 bits = 24 bytes, 19 after the delimiter
    let image = ImageStego::from_pixels(gradient(8, 8));

    let fits = "x".repeat(19);
    let hidden = encode_image(&image, &Payload::from(fits.as_str()), &config).unwrap();
    assert_eq!(decode_image_text(&hidden, &config).unwrap(), fits);

    let too_big = "x".repeat(20);
    assert!(matches!(
        encode_image(&image, &Payload::from(too_big.as_str()), &config),
        Err(StegoError::MessageTooLarge {
            needed: 25,
            capacity: 24,
            ..
        })
    ));
}

/// Only bit 0 of any channel changes, and only where bits were written
#[test]
fn test_channel_bit_isolation() {
    let config = CodecConfig::default();
    let original = gradient(32, 32);
    let image = ImageStego::from_pixels(original.clone());
    let hidden = encode_image(&image, &Payload::from("isolation"), &config).unwrap();
    let written_bits = ("isolation".len() + config.delimiter.len()) * 8;

    let channels_before = original.as_raw();
    let channels_after = hidden.pixels().as_raw();
    for (i, (before, after)) in channels_before.iter().zip(channels_after).enumerate() {
        assert_eq!(before & 0xFE, after & 0xFE, "channel {}", i);
        if i >= written_bits {
            assert_eq!(before, after, "channel {}", i);
        }
    }
}

/// Binary payloads need the image channel
#[test]
fn test_binary_payload_channels() {
    let config = CodecConfig::default();
    let data = vec![0x00, 0xFF, 0x80, 0x7F];

    let text_carrier = TextCarrier::parse(&words(60));
    assert!(matches!(
        encode_text(&text_carrier, &Payload::from(data.clone()), &config),
        Err(StegoError::UnsupportedPayloadType(_))
    ));

    let image = ImageStego::from_pixels(gradient(16, 16));
    let hidden = encode_image(&image, &Payload::from(data.clone()), &config).unwrap();
    assert_eq!(decode_image(&hidden, &config).unwrap(), data);
}

/// A custom delimiter must match on both ends
#[test]
fn test_custom_delimiter() {
    let sender = CodecConfig {
        delimiter: "<END>".to_string(),
        ..Default::default()
    };
    let image = ImageStego::from_pixels(RgbImage::new(20, 20));
    let hidden = encode_image(&image, &Payload::from("custom"), &sender).unwrap();

    assert_eq!(decode_image_text(&hidden, &sender).unwrap(), "custom");
    assert!(matches!(
        decode_image(&hidden, &CodecConfig::default()),
        Err(StegoError::DelimiterNotFound)
    ));
}
