//! Quietmark - hide a message in plain sight
//!
//! A CLI for text (invisible character) and image (LSB) steganography.

mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use quietmark::CodecConfig;

use crate::commands::{
    CapacityCommand, CommandExecutor, DecodeImageCommand, DecodeTextCommand, EncodeImageCommand,
    EncodeTextCommand,
};
use crate::logging::{init_logging, LogFormat, LogLevel};

/// Quietmark - hide a message in plain sight
///
/// Text carriers get invisible Unicode characters after their words; image
/// carriers get the message in the least significant bit of each channel.
#[derive(Parser, Debug)]
#[command(name = "quietmark", version, about = "Text and image steganography")]
struct Cli {
    /// Codec configuration file (defaults to ~/.quietmark/config.toml if present)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Log output format (stderr)
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr)
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Verbose output (shows framing and embedding details)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hide a message in a text file
    #[command(name = "encode-text")]
    EncodeText(EncodeTextCommand),

    /// Recover a message from a text file
    #[command(name = "decode-text")]
    DecodeText(DecodeTextCommand),

    /// Hide a message in an image
    #[command(name = "encode-image")]
    EncodeImage(EncodeImageCommand),

    /// Recover a message from an image
    #[command(name = "decode-image")]
    DecodeImage(DecodeImageCommand),

    /// Show how much a carrier can hold
    Capacity(CapacityCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::EncodeText(cmd) => cmd,
            Commands::DecodeText(cmd) => cmd,
            Commands::EncodeImage(cmd) => cmd,
            Commands::DecodeImage(cmd) => cmd,
            Commands::Capacity(cmd) => cmd,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<CodecConfig> {
    match path {
        Some(path) => CodecConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => CodecConfig::load_default().context("Failed to load default config"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level.with_verbose(cli.verbose));

    let config = load_config(cli.config.as_ref())?;
    cli.command.executor().execute(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_encode_text() {
        let cli = Cli::try_parse_from([
            "quietmark",
            "encode-text",
            "--carrier",
            "cover.txt",
            "--message",
            "Hi",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::EncodeText(_)));
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_rejects_message_and_file_together() {
        let err = Cli::try_parse_from([
            "quietmark",
            "encode-image",
            "-c",
            "cover.png",
            "-m",
            "hi",
            "-f",
            "msg.bin",
            "-o",
            "out.png",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_global_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["quietmark", "decode-text", "-i", "in.txt", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_load_config_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qm.toml");
        std::fs::write(&path, "delimiter = \"END\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.delimiter, "END");
    }
}
