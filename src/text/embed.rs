//! Text channel: hides framed bits as invisible code points after words.
//!
//! Each carrier word takes at most one 12-bit record, written as up to six
//! invisible code points appended after its visible characters. Words are
//! used in order; words past the last record are left alone.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StegoError};
use crate::text::framer::{pack_bits, record_count, RECORD_BITS, TERMINATOR};
use crate::text::invisible::{InvisibleCodeMap, BITS_PER_CODE_POINT};

/// How far extraction reads into a carrier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Stop as soon as a terminator record has been read.
    #[default]
    Streaming,
    /// Scan the whole carrier.
    Full,
}

/// Appends `bits` to `words` as invisible code points, one record per word.
///
/// Fails with [`StegoError::CarrierTooSmall`] before touching anything if
/// there are more records than words. A trailing odd bit is padded with a
/// zero to complete its pair.
pub fn embed(bits: &[bool], words: &[String], map: &InvisibleCodeMap) -> Result<Vec<String>> {
    let needed = record_count(bits.len());
    if needed > words.len() {
        return Err(StegoError::CarrierTooSmall {
            needed,
            available: words.len(),
        });
    }

    let mut out = words.to_vec();
    for (word, record) in out.iter_mut().zip(bits.chunks(RECORD_BITS)) {
        for pair in record.chunks(BITS_PER_CODE_POINT) {
            let high = pair[0];
            let low = pair.get(1).copied().unwrap_or(false);
            word.push(map.encode(high, low));
        }
    }

    debug!(records = needed, words = words.len(), "embedded records into text carrier");
    Ok(out)
}

/// Collects the bits carried by invisible code points, in encounter order.
///
/// In [`ExtractMode::Streaming`] reading stops once a complete, aligned
/// terminator record has been collected. Both modes give the same message
/// when the carrier was produced by [`embed`].
pub fn extract<S: AsRef<str>>(words: &[S], map: &InvisibleCodeMap, mode: ExtractMode) -> Vec<bool> {
    let mut bits = Vec::new();

    for word in words {
        for ch in word.as_ref().chars() {
            let Some((high, low)) = map.decode(ch) else {
                continue;
            };
            bits.push(high);
            bits.push(low);

            if mode == ExtractMode::Streaming && ends_with_terminator(&bits) {
                debug!(bits = bits.len(), "terminator found, stopping extraction");
                return bits;
            }
        }
    }

    debug!(bits = bits.len(), "extracted bits from text carrier");
    bits
}

fn ends_with_terminator(bits: &[bool]) -> bool {
    if bits.is_empty() || bits.len() % RECORD_BITS != 0 {
        return false;
    }
    pack_bits(&bits[bits.len() - RECORD_BITS..]) == TERMINATOR
}
