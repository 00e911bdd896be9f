//! Mapping between 2-bit groups and non-printing code points.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StegoError};

/// Bits carried by one invisible code point.
pub const BITS_PER_CODE_POINT: usize = 2;

/// Bijection between the four 2-bit values and four invisible characters.
///
/// Both sides of an exchange must use the same table. The defaults are
/// ZWNJ (`00`), PDF (`01`), LRO (`11`) and LRM (`10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvisibleCodeMap {
    #[serde(rename = "00")]
    pub zero_zero: char,
    #[serde(rename = "01")]
    pub zero_one: char,
    #[serde(rename = "10")]
    pub one_zero: char,
    #[serde(rename = "11")]
    pub one_one: char,
}

impl Default for InvisibleCodeMap {
    fn default() -> Self {
        Self {
            zero_zero: '\u{200C}',
            zero_one: '\u{202C}',
            one_zero: '\u{200E}',
            one_one: '\u{202D}',
        }
    }
}

impl InvisibleCodeMap {
    /// Table indexed by the 2-bit value.
    fn table(&self) -> [char; 4] {
        [self.zero_zero, self.zero_one, self.one_zero, self.one_one]
    }

    /// Code point for a pair of bits.
    pub fn encode(&self, high: bool, low: bool) -> char {
        self.table()[(usize::from(high) << 1) | usize::from(low)]
    }

    /// Bits for a code point, or None if `ch` is not in the table.
    pub fn decode(&self, ch: char) -> Option<(bool, bool)> {
        self.table()
            .iter()
            .position(|&c| c == ch)
            .map(|value| (value & 0b10 != 0, value & 0b01 != 0))
    }

    /// True if `ch` is one of the four code points.
    pub fn contains(&self, ch: char) -> bool {
        self.table().contains(&ch)
    }

    /// Checks that the table is a usable bijection.
    ///
    /// Code points must be distinct, and must not be whitespace or visible
    /// ASCII, or words would split and the carrier would change visibly.
    pub fn validate(&self) -> Result<()> {
        let table = self.table();
        for (i, &ch) in table.iter().enumerate() {
            if ch.is_whitespace() || ch.is_ascii_graphic() {
                return Err(StegoError::Config(format!(
                    "code point U+{:04X} is visible or whitespace",
                    ch as u32
                )));
            }
            if table[..i].contains(&ch) {
                return Err(StegoError::Config(format!(
                    "code point U+{:04X} is mapped twice",
                    ch as u32
                )));
            }
        }
        Ok(())
    }
}
