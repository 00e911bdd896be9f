//! Text channel.
//!
//! This module provides:
//! - The reversible character transform
//! - 12-bit record framing with a terminator
//! - Invisible code point embedding into carrier words
//! - A whitespace-preserving text carrier

pub mod carrier;
pub mod embed;
pub mod framer;
pub mod invisible;
pub mod transform;

pub use carrier::TextCarrier;
pub use embed::{embed, extract, ExtractMode};
pub use framer::{frame, unframe, Unframer, RECORD_BITS, TERMINATOR};
pub use invisible::InvisibleCodeMap;
pub use transform::{transform, untransform, ClassTag, ClassifiedByte};
