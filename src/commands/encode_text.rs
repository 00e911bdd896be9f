//! Encode-text command - hide a message in a text carrier.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use quietmark::capacity::text_capacity;
use quietmark::{encode_text, CodecConfig, TextCarrier};

use super::prompt::{with_message, MessageSource};
use super::CommandExecutor;

/// Hide a message in a text file using invisible characters.
///
/// Visible text is unchanged; one invisible group of up to six code points
/// is appended to each of the first words. Capacity is one character per six
/// carrier words.
#[derive(Args, Debug)]
pub struct EncodeTextCommand {
    /// Path to the cover text
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// Message to hide (prompts if neither --message nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message from a file (must be UTF-8 text)
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Output file for the stego text (prints to stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for EncodeTextCommand {
    fn execute(&self, config: &CodecConfig) -> Result<()> {
        let carrier = TextCarrier::from_file(&self.carrier)
            .with_context(|| format!("Failed to read carrier from {}", self.carrier.display()))?;
        let capacity = text_capacity(carrier.word_count());

        tracing::debug!(words = carrier.word_count(), capacity, "loaded text carrier");

        let source = MessageSource::new(self.message.as_deref(), self.file.as_deref());
        let encoded = with_message(source, capacity, "characters", |payload| {
            encode_text(&carrier, payload, config)
        })?;

        let stego_text = encoded.carrier.to_string();
        match &self.output {
            Some(path) => {
                std::fs::write(path, stego_text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("Steganography file created: {}", path.display());
            }
            None => print!("{}", stego_text),
        }

        Ok(())
    }
}
