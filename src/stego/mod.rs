//! Image steganography and payload handling.
//!
//! Supports:
//! - Image LSB steganography (any format the `image` crate reads; PNG out)
//! - Text and binary payloads

pub mod image;
pub mod payload;

pub use self::image::{embed_bits, extract_bits, ImageStego};
pub use payload::{bits_to_bytes, bytes_to_bits, Payload};
