//! Message encoding for both channels.
//!
//! Text: validate capacity, frame the message, append invisible code points
//! to carrier words. Image: validate capacity, append the delimiter, write
//! the bits into pixel LSBs.
//!
//! Capacity is always checked before a carrier is copied, so a failed encode
//! leaves nothing behind.

use tracing::{debug, info};

use crate::capacity;
use crate::config::CodecConfig;
use crate::error::Result;
use crate::stego::image::ImageStego;
use crate::stego::payload::Payload;
use crate::text::carrier::TextCarrier;
use crate::text::embed::embed;
use crate::text::framer::{frame, record_count};

/// Result of hiding a message in a text carrier.
#[derive(Debug, Clone)]
pub struct EncodedText {
    /// The carrier with invisible code points appended to its first words.
    pub carrier: TextCarrier,
    /// Number of 12-bit records written (characters plus terminator).
    pub records: usize,
    /// Number of framed bits written.
    pub bits: usize,
}

/// Hides a text payload in a text carrier.
///
/// Code points already present in the carrier are stripped first, so an
/// encoded carrier can be reused. Fails with
/// [`StegoError::MessageTooLarge`](crate::StegoError::MessageTooLarge) when
/// the message exceeds `word_count / 6` characters, and with
/// [`StegoError::UnsupportedPayloadType`](crate::StegoError::UnsupportedPayloadType)
/// for binary payloads.
pub fn encode_text(
    carrier: &TextCarrier,
    payload: &Payload,
    config: &CodecConfig,
) -> Result<EncodedText> {
    let message = payload.as_text()?;
    capacity::check_text(message.chars().count(), carrier.word_count())?;

    let bits = frame(message)?;
    debug!(
        bits = bits.len(),
        framed = %render_bits(&bits),
        "framed message"
    );

    let mut clean = carrier.clone();
    clean.strip_hidden(&config.code_points);
    let words = embed(&bits, clean.words(), &config.code_points)?;
    let records = record_count(bits.len());

    info!(
        chars = message.chars().count(),
        records,
        words = carrier.word_count(),
        "encoded message into text carrier"
    );
    Ok(EncodedText {
        carrier: clean.with_words(words),
        records,
        bits: bits.len(),
    })
}

/// Hides a payload (text or bytes) in an image, followed by the delimiter.
///
/// Fails with [`StegoError::MessageTooLarge`](crate::StegoError::MessageTooLarge)
/// when payload plus delimiter exceed `pixels * 3 / 8` bytes.
pub fn encode_image(
    image: &ImageStego,
    payload: &Payload,
    config: &CodecConfig,
) -> Result<ImageStego> {
    let hidden = image.hide(payload.as_bytes(), &config.delimiter)?;
    info!(
        bytes = payload.len(),
        capacity = capacity::image_capacity(image.pixel_count()),
        "encoded message into image"
    );
    Ok(hidden)
}

fn render_bits(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}
