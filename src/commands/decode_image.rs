//! Decode-image command - recover a message from an image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use quietmark::stego::payload::bytes_to_text;
use quietmark::{decode_image, CodecConfig, ImageStego};

use super::CommandExecutor;

/// Recover a message hidden with encode-image.
///
/// Without -o/--output the message is printed as text.
#[derive(Args, Debug)]
pub struct DecodeImageCommand {
    /// Path to the stego image
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the raw recovered bytes to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for DecodeImageCommand {
    fn execute(&self, config: &CodecConfig) -> Result<()> {
        let image = ImageStego::from_file(&self.input)
            .with_context(|| format!("Failed to load image {}", self.input.display()))?;

        let bytes = match decode_image(&image, config) {
            Ok(bytes) => bytes,
            Err(e) if e.is_no_message() => {
                eprintln!("No hidden message found");
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to decode image"),
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("Wrote {} bytes to {}", bytes.len(), path.display());
            }
            None => println!("Hidden message: {}", bytes_to_text(&bytes)),
        }

        Ok(())
    }
}
