//! Bitstream framing for the text channel.
//!
//! Format: one 12-bit record per character, `[4-bit class prefix][8-bit byte]`,
//! MSB first, followed by a 12-bit all-ones terminator. Neither class prefix
//! is `1111`, so the terminator can never be mistaken for a character record.

use crate::error::{Result, StegoError};
use crate::text::transform::{transform, untransform, ClassTag, ClassifiedByte};

/// Bits per character record (and per terminator).
pub const RECORD_BITS: usize = 12;

/// Width of the class prefix inside a record.
pub const PREFIX_BITS: usize = 4;

/// End-of-message record.
pub const TERMINATOR: u16 = 0xFFF;

/// Appends the low `width` bits of `value`, most significant first.
pub(crate) fn push_bits(out: &mut Vec<bool>, value: u16, width: usize) {
    for shift in (0..width).rev() {
        out.push((value >> shift) & 1 == 1);
    }
}

/// Packs a slice of bits (MSB first) into an integer.
pub(crate) fn pack_bits(bits: &[bool]) -> u16 {
    bits.iter().fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit))
}

/// Number of 12-bit records in a framed stream of `bit_len` bits.
pub fn record_count(bit_len: usize) -> usize {
    bit_len.div_ceil(RECORD_BITS)
}

/// Frames a message into a terminated bitstream.
///
/// Fails with [`StegoError::OutOfRangeCharacter`] on the first character the
/// transform cannot represent; nothing is produced in that case.
pub fn frame(message: &str) -> Result<Vec<bool>> {
    let mut bits = Vec::with_capacity((message.chars().count() + 1) * RECORD_BITS);

    for (position, ch) in message.chars().enumerate() {
        let classified =
            transform(ch).ok_or(StegoError::OutOfRangeCharacter { ch, position })?;
        push_bits(&mut bits, u16::from(classified.tag.prefix()), PREFIX_BITS);
        push_bits(&mut bits, u16::from(classified.byte), RECORD_BITS - PREFIX_BITS);
    }

    push_bits(&mut bits, TERMINATOR, RECORD_BITS);
    Ok(bits)
}

/// Recovers a message from a framed bitstream.
///
/// Reading stops at the first terminator record; anything after it is
/// ignored. A stream that runs out first fails with
/// [`StegoError::TruncatedStream`].
pub fn unframe(bits: &[bool]) -> Result<String> {
    let mut unframer = Unframer::new();
    for &bit in bits {
        if unframer.push(bit)? {
            break;
        }
    }
    unframer.finish()
}

/// Incremental decoder for framed bitstreams.
///
/// Bits are pushed one at a time as they are found in a carrier; the caller
/// signals end of input with [`Unframer::finish`].
#[derive(Debug, Default)]
pub struct Unframer {
    record: Vec<bool>,
    message: String,
    records: usize,
    bits_seen: usize,
    complete: bool,
}

impl Unframer {
    pub fn new() -> Self {
        Self {
            record: Vec::with_capacity(RECORD_BITS),
            ..Default::default()
        }
    }

    /// Feeds one bit. Returns true once the terminator has been read.
    ///
    /// Bits pushed after the terminator are ignored.
    pub fn push(&mut self, bit: bool) -> Result<bool> {
        if self.complete {
            return Ok(true);
        }

        self.bits_seen += 1;
        self.record.push(bit);
        if self.record.len() < RECORD_BITS {
            return Ok(false);
        }

        let value = pack_bits(&self.record);
        self.record.clear();

        if value == TERMINATOR {
            self.complete = true;
            return Ok(true);
        }

        let prefix = (value >> (RECORD_BITS - PREFIX_BITS)) as u8;
        let tag = ClassTag::from_prefix(prefix).ok_or(StegoError::InvalidFrameTag {
            tag: prefix,
            record: self.records,
        })?;
        let classified = ClassifiedByte {
            tag,
            byte: (value & 0xFF) as u8,
        };
        let ch = untransform(classified).ok_or(StegoError::InvalidFrameTag {
            tag: prefix,
            record: self.records,
        })?;

        self.message.push(ch);
        self.records += 1;
        Ok(false)
    }

    /// True once a terminator has been read.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Ends the stream and returns the decoded message.
    pub fn finish(self) -> Result<String> {
        if !self.complete {
            return Err(StegoError::TruncatedStream {
                bits: self.bits_seen,
            });
        }
        Ok(self.message)
    }
}
