//! # Quietmark - hide a message in plain sight
//!
//! Quietmark embeds a secret message in an innocuous carrier so the
//! carrier looks unchanged, and recovers the exact message later.
//!
//! ## Channels
//!
//! - **Text**: each character is scrambled into a 12-bit record
//!   (`[4-bit class][8-bit byte]`), the records are terminated by
//!   `111111111111`, and every 2-bit group becomes one invisible code point
//!   appended to a carrier word. One record per word.
//! - **Image**: the message bytes plus a delimiter (`*^*^*` by default) are
//!   written MSB first into the least significant bit of each colour channel,
//!   pixel by pixel in raster order.
//!
//! The two channels use independent framing; a carrier of one kind can't be
//! read as the other.
//!
//! ## Example Usage
//!
//! ```rust
//! use quietmark::{decode_text, encode_text, CodecConfig, Payload, TextCarrier};
//!
//! let config = CodecConfig::default();
//! let carrier = TextCarrier::parse("a b c d e f g h i j k l");
//!
//! let encoded = encode_text(&carrier, &Payload::from("Hi"), &config).unwrap();
//! let stego_text = encoded.carrier.to_string();
//!
//! let received = TextCarrier::parse(&stego_text);
//! assert_eq!(decode_text(&received, &config).unwrap(), "Hi");
//! ```
//!
//! ## Modules
//!
//! - [`text`]: character transform, bitstream framing, text embedding
//! - [`stego`]: image LSB embedding and payload handling
//! - [`capacity`]: capacity checks for both channels
//! - [`encoder`] / [`decoder`]: channel orchestration
//! - [`config`]: shared codec constants

pub mod capacity;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod stego;
pub mod text;

// Re-export commonly used types at the crate root
pub use capacity::CapacityReport;
pub use config::{CodecConfig, DEFAULT_DELIMITER};
pub use decoder::{decode_image, decode_image_text, decode_text};
pub use encoder::{encode_image, encode_text, EncodedText};
pub use error::{Result, StegoError};
pub use stego::{ImageStego, Payload};
pub use text::{ExtractMode, InvisibleCodeMap, TextCarrier};
