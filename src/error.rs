//! Error type shared by both steganography channels.

use thiserror::Error;

/// Errors that can occur while hiding or recovering a message.
///
/// Every error is raised before the carrier is touched (capacity and input
/// validation) or while reading a carrier back. A failed encode never leaves a
/// carrier half-written.
#[derive(Error, Debug)]
pub enum StegoError {
    #[error("Message too large: needs {needed} {unit}, carrier holds {capacity}")]
    MessageTooLarge {
        needed: usize,
        capacity: usize,
        unit: &'static str,
    },

    #[error("Carrier too small: needs {needed} words, has {available}")]
    CarrierTooSmall { needed: usize, available: usize },

    #[error("Character {ch:?} at position {position} cannot be encoded")]
    OutOfRangeCharacter { ch: char, position: usize },

    #[error("Invalid frame tag {tag:04b} in record {record}")]
    InvalidFrameTag { tag: u8, record: usize },

    #[error("Bitstream ended after {bits} bits without a terminator")]
    TruncatedStream { bits: usize },

    #[error("Delimiter not found in carrier")]
    DelimiterNotFound,

    #[error("Unsupported payload type: {0}")]
    UnsupportedPayloadType(String),

    #[error("Image load error: {0}")]
    ImageLoad(String),

    #[error("Image save error: {0}")]
    ImageSave(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StegoError {
    /// Returns true when the carrier simply holds no recognisable message.
    ///
    /// Callers use this to report "no hidden message" for foreign carriers
    /// instead of treating them as a hard failure.
    pub fn is_no_message(&self) -> bool {
        matches!(
            self,
            StegoError::TruncatedStream { .. } | StegoError::DelimiterNotFound
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StegoError>;
