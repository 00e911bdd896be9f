//! Message decoding for both channels.
//!
//! Carriers without a message fail with an error for which
//! [`StegoError::is_no_message`](crate::StegoError::is_no_message) is true;
//! callers report that as "no hidden message".

use tracing::{debug, info};

use crate::config::CodecConfig;
use crate::error::Result;
use crate::stego::image::ImageStego;
use crate::stego::payload::bytes_to_text;
use crate::text::carrier::TextCarrier;
use crate::text::embed::extract;
use crate::text::framer::unframe;

/// Recovers a message hidden by [`encode_text`](crate::encode_text).
pub fn decode_text(carrier: &TextCarrier, config: &CodecConfig) -> Result<String> {
    let bits = extract(carrier.words(), &config.code_points, config.extract_mode);
    debug!(bits = bits.len(), mode = ?config.extract_mode, "collected hidden bits");

    let message = unframe(&bits)?;
    info!(chars = message.chars().count(), "decoded message from text carrier");
    Ok(message)
}

/// Recovers the raw bytes hidden by [`encode_image`](crate::encode_image).
pub fn decode_image(image: &ImageStego, config: &CodecConfig) -> Result<Vec<u8>> {
    let bytes = image.extract(&config.delimiter)?;
    info!(bytes = bytes.len(), "decoded message from image");
    Ok(bytes)
}

/// Recovers a message hidden in an image and decodes it as text.
pub fn decode_image_text(image: &ImageStego, config: &CodecConfig) -> Result<String> {
    decode_image(image, config).map(|bytes| bytes_to_text(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode_image, encode_text};
    use crate::error::StegoError;
    use crate::stego::payload::Payload;
    use crate::text::embed::ExtractMode;
    use image::RgbImage;

    #[test]
    fn test_text_roundtrip() {
        let config = CodecConfig::default();
        let carrier = TextCarrier::parse(&"word ".repeat(100));
        let encoded = encode_text(&carrier, &Payload::from("Meet @ 9, ok?"), &config).unwrap();

        let reparsed = TextCarrier::parse(&encoded.carrier.to_string());
        assert_eq!(decode_text(&reparsed, &config).unwrap(), "Meet @ 9, ok?");
    }

    #[test]
    fn test_text_roundtrip_full_scan() {
        let config = CodecConfig {
            extract_mode: ExtractMode::Full,
            ..Default::default()
        };
        let carrier = TextCarrier::parse(&"w ".repeat(30));
        let encoded = encode_text(&carrier, &Payload::from("full"), &config).unwrap();
        assert_eq!(decode_text(&encoded.carrier, &config).unwrap(), "full");
    }

    #[test]
    fn test_plain_text_has_no_message() {
        let carrier = TextCarrier::parse("just an ordinary sentence");
        let err = decode_text(&carrier, &CodecConfig::default()).unwrap_err();
        assert!(err.is_no_message());
    }

    #[test]
    fn test_image_roundtrip_utf8() {
        let config = CodecConfig::default();
        let image = ImageStego::from_pixels(RgbImage::new(40, 40));
        let hidden = encode_image(&image, &Payload::from("naïve café"), &config).unwrap();
        assert_eq!(decode_image_text(&hidden, &config).unwrap(), "naïve café");
    }

    #[test]
    fn test_image_roundtrip_bytes() {
        let config = CodecConfig::default();
        let image = ImageStego::from_pixels(RgbImage::new(40, 40));
        let data = vec![0u8, 255, 7, 42];
        let hidden = encode_image(&image, &Payload::from(data.clone()), &config).unwrap();
        assert_eq!(decode_image(&hidden, &config).unwrap(), data);
    }

    #[test]
    fn test_blank_image_has_no_message() {
        let image = ImageStego::from_pixels(RgbImage::new(8, 8));
        let err = decode_image(&image, &CodecConfig::default()).unwrap_err();
        assert!(matches!(err, StegoError::DelimiterNotFound));
        assert!(err.is_no_message());
    }
}
