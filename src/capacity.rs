//! Capacity checks run before any carrier is modified.
//!
//! The text formula (`words / 6`) is deliberately coarse. A message of `n`
//! characters really needs `n + 1` words (one 12-bit record each, plus the
//! terminator), so the check is far stricter than the embedder needs. It is
//! kept as-is so that carriers accepted here are accepted by every other
//! implementation of this format.

use crate::error::{Result, StegoError};

/// Words of carrier text budgeted per message character.
pub const WORDS_PER_CHAR: usize = 6;

/// Bits available per pixel (one per colour channel).
pub const BITS_PER_PIXEL: usize = 3;

/// Capacity of both channels for a given carrier size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    /// Maximum message length in characters for a text carrier.
    pub text_chars: usize,
    /// Maximum payload length in bytes (delimiter included) for an image.
    pub image_bytes: usize,
}

impl CapacityReport {
    /// Capacities for a text carrier of `word_count` words and an image of
    /// `pixel_count` pixels.
    pub fn new(word_count: usize, pixel_count: usize) -> Self {
        Self {
            text_chars: text_capacity(word_count),
            image_bytes: image_capacity(pixel_count),
        }
    }
}

/// Maximum message length, in characters, for a text carrier.
pub fn text_capacity(word_count: usize) -> usize {
    word_count / WORDS_PER_CHAR
}

/// Maximum payload length, in bytes including the delimiter, for an image.
pub fn image_capacity(pixel_count: usize) -> usize {
    pixel_count * BITS_PER_PIXEL / 8
}

/// Rejects a text message longer than [`text_capacity`].
pub fn check_text(message_chars: usize, word_count: usize) -> Result<()> {
    let capacity = text_capacity(word_count);
    if message_chars > capacity {
        return Err(StegoError::MessageTooLarge {
            needed: message_chars,
            capacity,
            unit: "characters",
        });
    }
    Ok(())
}

/// Rejects an image payload longer than [`image_capacity`].
///
/// `payload_bytes` must already include the delimiter.
pub fn check_image(payload_bytes: usize, pixel_count: usize) -> Result<()> {
    let capacity = image_capacity(pixel_count);
    if payload_bytes > capacity {
        return Err(StegoError::MessageTooLarge {
            needed: payload_bytes,
            capacity,
            unit: "bytes",
        });
    }
    Ok(())
}
