//! Decode-text command - recover a message from a text carrier.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use quietmark::{decode_text, CodecConfig, TextCarrier};

use super::CommandExecutor;

/// Recover a message hidden with encode-text.
#[derive(Args, Debug)]
pub struct DecodeTextCommand {
    /// Path to the stego text
    #[arg(short, long)]
    pub input: PathBuf,
}

impl CommandExecutor for DecodeTextCommand {
    fn execute(&self, config: &CodecConfig) -> Result<()> {
        let carrier = TextCarrier::from_file(&self.input)
            .with_context(|| format!("Failed to read {}", self.input.display()))?;

        match decode_text(&carrier, config) {
            Ok(message) => println!("{}", message),
            Err(e) if e.is_no_message() => {
                eprintln!("No hidden message found");
                tracing::debug!(error = %e, "text decode found nothing");
            }
            Err(e) => return Err(e).context("Failed to decode message"),
        }

        Ok(())
    }
}
