//! Encode-image command - hide a message in an image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use quietmark::{encode_image, CodecConfig, ImageStego};

use super::prompt::{with_message, MessageSource};
use super::CommandExecutor;

/// Hide a message in the least significant bits of an image.
///
/// Any format the image decoder understands is accepted as a carrier. The
/// output is always PNG: lossy formats destroy the hidden bits.
#[derive(Args, Debug)]
pub struct EncodeImageCommand {
    /// Path to the cover image
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// Message to hide (prompts if neither --message nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Hide the contents of a file (text or binary)
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Output image path (written as PNG)
    #[arg(short, long)]
    pub output: PathBuf,
}

impl CommandExecutor for EncodeImageCommand {
    fn execute(&self, config: &CodecConfig) -> Result<()> {
        let image = ImageStego::from_file(&self.carrier)
            .with_context(|| format!("Failed to load image {}", self.carrier.display()))?;

        // The delimiter shares the byte budget with the message.
        let capacity = image.capacity().saturating_sub(config.delimiter.len());
        tracing::debug!(pixels = image.pixel_count(), capacity, "loaded image carrier");

        let source = MessageSource::new(self.message.as_deref(), self.file.as_deref());
        let hidden = with_message(source, capacity, "bytes", |payload| {
            encode_image(&image, payload, config)
        })?;

        hidden
            .save(&self.output)
            .with_context(|| format!("Failed to save image {}", self.output.display()))?;
        eprintln!("Image saved as {}", self.output.display());

        Ok(())
    }
}
