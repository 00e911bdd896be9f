//! Reversible per-character scramble used by the text channel.
//!
//! Each character becomes one byte plus a class tag. Characters in the
//! `' '..='@'` band are shifted up, everything else is shifted down, and the
//! result is XORed with a fixed key. This is obfuscation, not encryption.

/// XOR key applied after the offset.
pub const XOR_KEY: u8 = 0xAA;

/// Offset added to (range class) or subtracted from (other class) the code point.
pub const OFFSET: u32 = 48;

/// Code points that take the upward shift.
const RANGE_BAND: std::ops::RangeInclusive<u32> = 32..=64;

/// Code points that take the downward shift and still fit in a byte.
const OTHER_BAND: std::ops::RangeInclusive<u32> = 65..=(255 + OFFSET);

/// Class of a transformed character, carried as a 4-bit prefix on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassTag {
    /// Original code point in `32..=64`. Prefix `0011`.
    Range,
    /// Any other supported code point. Prefix `0110`.
    Other,
}

impl ClassTag {
    /// The 4-bit prefix written before the payload byte.
    pub fn prefix(self) -> u8 {
        match self {
            ClassTag::Range => 0b0011,
            ClassTag::Other => 0b0110,
        }
    }

    /// Parses a 4-bit prefix. Returns None for anything but the two known tags.
    pub fn from_prefix(prefix: u8) -> Option<Self> {
        match prefix {
            0b0011 => Some(ClassTag::Range),
            0b0110 => Some(ClassTag::Other),
            _ => None,
        }
    }
}

/// A transformed character: class tag plus scrambled byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedByte {
    pub tag: ClassTag,
    pub byte: u8,
}

/// Scrambles one character.
///
/// Returns None for code points whose shifted value would not fit in a byte
/// (control characters below space, and anything above U+012F).
pub fn transform(ch: char) -> Option<ClassifiedByte> {
    let p = ch as u32;
    let (tag, shifted) = if RANGE_BAND.contains(&p) {
        (ClassTag::Range, p + OFFSET)
    } else if OTHER_BAND.contains(&p) {
        (ClassTag::Other, p - OFFSET)
    } else {
        return None;
    };

    let byte = u8::try_from(shifted).ok()? ^ XOR_KEY;
    Some(ClassifiedByte { tag, byte })
}

/// Exact inverse of [`transform`].
///
/// Returns None when the byte does not decode into the band its tag claims,
/// which only happens for data that was never produced by [`transform`].
pub fn untransform(classified: ClassifiedByte) -> Option<char> {
    let decrypted = u32::from(classified.byte ^ XOR_KEY);
    let p = match classified.tag {
        ClassTag::Range => decrypted.checked_sub(OFFSET)?,
        ClassTag::Other => decrypted + OFFSET,
    };

    let in_band = match classified.tag {
        ClassTag::Range => RANGE_BAND.contains(&p),
        ClassTag::Other => OTHER_BAND.contains(&p),
    };
    if !in_band {
        return None;
    }

    char::from_u32(p)
}
