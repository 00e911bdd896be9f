//! Capacity command - report how much a carrier can hold.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use quietmark::capacity::{image_capacity, text_capacity};
use quietmark::{CodecConfig, ImageStego, TextCarrier};

use super::CommandExecutor;

/// Show the maximum message size for a text and/or image carrier.
#[derive(Args, Debug)]
pub struct CapacityCommand {
    /// Cover text to measure
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// Cover image to measure
    #[arg(short, long)]
    pub image: Option<PathBuf>,
}

impl CommandExecutor for CapacityCommand {
    fn execute(&self, config: &CodecConfig) -> Result<()> {
        if self.text.is_none() && self.image.is_none() {
            bail!("Specify --text and/or --image");
        }

        if let Some(path) = &self.text {
            let carrier = TextCarrier::from_file(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            println!(
                "Text carrier: {} words, max {} characters",
                carrier.word_count(),
                text_capacity(carrier.word_count())
            );
        }

        if let Some(path) = &self.image {
            let image = ImageStego::from_file(path)
                .with_context(|| format!("Failed to load image {}", path.display()))?;
            let total = image_capacity(image.pixel_count());
            println!(
                "Image carrier: {} pixels, max {} bytes ({} after the {}-byte delimiter)",
                image.pixel_count(),
                total,
                total.saturating_sub(config.delimiter.len()),
                config.delimiter.len()
            );
        }

        Ok(())
    }
}
