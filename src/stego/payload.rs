//! Payloads and their raw bit expansion.

use std::path::Path;

use crate::error::{Result, StegoError};

/// Data to hide.
///
/// The image channel takes either kind. The text channel's transform only
/// covers characters, so it accepts [`Payload::Text`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Bytes(Vec<u8>),
}

impl Payload {
    /// Reads a file; valid UTF-8 becomes text, anything else stays bytes.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Ok(match String::from_utf8(data) {
            Ok(text) => Payload::Text(text),
            Err(e) => Payload::Bytes(e.into_bytes()),
        })
    }

    /// Raw bytes of the payload (UTF-8 for text).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(text) => text.as_bytes(),
            Payload::Bytes(bytes) => bytes,
        }
    }

    /// The payload as text.
    ///
    /// Fails with [`StegoError::UnsupportedPayloadType`] for binary payloads.
    pub fn as_text(&self) -> Result<&str> {
        match self {
            Payload::Text(text) => Ok(text),
            Payload::Bytes(bytes) => Err(StegoError::UnsupportedPayloadType(format!(
                "text channel cannot carry {} raw bytes",
                bytes.len()
            ))),
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload::Bytes(bytes.to_vec())
    }
}

/// Expands bytes into bits, most significant bit first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
        .collect()
}

/// Groups bits into bytes, most significant bit first.
///
/// A trailing group shorter than eight bits is dropped.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
        .collect()
}

/// Decodes recovered bytes as text.
///
/// Valid UTF-8 is decoded as such; otherwise each byte maps to the code
/// point of the same value.
pub fn bytes_to_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
