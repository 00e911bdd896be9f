//! Message input shared by the encode commands.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use quietmark::{Payload, StegoError};

/// Where the message to hide comes from.
pub enum MessageSource<'a> {
    Inline(&'a str),
    File(&'a Path),
    Prompt,
}

impl<'a> MessageSource<'a> {
    pub fn new(message: Option<&'a str>, file: Option<&'a Path>) -> Self {
        match (message, file) {
            (Some(m), _) => MessageSource::Inline(m),
            (None, Some(f)) => MessageSource::File(f),
            (None, None) => MessageSource::Prompt,
        }
    }
}

/// Runs `attempt` with the message from `source`.
///
/// When prompting, a message that doesn't fit is rejected and the user is
/// asked again until one fits or stdin closes.
pub fn with_message<T>(
    source: MessageSource<'_>,
    capacity: usize,
    unit: &str,
    mut attempt: impl FnMut(&Payload) -> quietmark::Result<T>,
) -> Result<T> {
    match source {
        MessageSource::Inline(message) => {
            attempt(&Payload::from(message)).context("Failed to hide message")
        }
        MessageSource::File(path) => {
            let payload = Payload::from_file(path)
                .with_context(|| format!("Failed to read message from {}", path.display()))?;
            attempt(&payload).context("Failed to hide message")
        }
        MessageSource::Prompt => {
            eprintln!("Max encodable {}: {}", unit, capacity);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            loop {
                eprint!("Enter message to encode: ");
                io::stderr().flush()?;

                let mut line = String::new();
                if input.read_line(&mut line).context("Failed to read message from stdin")? == 0 {
                    bail!("No message entered");
                }
                let message = line.trim_end_matches(['\r', '\n']);

                match attempt(&Payload::from(message)) {
                    Err(StegoError::MessageTooLarge {
                        needed, capacity, ..
                    }) => {
                        eprintln!(
                            "Message too long ({} {}, max {}). Try again.",
                            needed, unit, capacity
                        );
                    }
                    result => return result.context("Failed to hide message"),
                }
            }
        }
    }
}
