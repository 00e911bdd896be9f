//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.
//! Commands only load and save carriers; all codec work happens in the library.

mod capacity;
mod decode_image;
mod decode_text;
mod encode_image;
mod encode_text;
mod prompt;

pub use capacity::CapacityCommand;
pub use decode_image::DecodeImageCommand;
pub use decode_text::DecodeTextCommand;
pub use encode_image::EncodeImageCommand;
pub use encode_text::EncodeTextCommand;

use anyhow::Result;
use quietmark::CodecConfig;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self, config: &CodecConfig) -> Result<()>;
}
