use crate::constants::{HASHED_RADIX, PACKED_RADIX, UNDERSCORE_CODE};

/// The symbol set an identifier encoder accepts.
///
/// Letters are case-folded: `A..Z` share the codes of `a..z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Alphabet {
    /// `a-z`, `0-9` (radix 37). Used by `PackedIdentifier`.
    Packed,

    /// `a-z`, `0-9`, `_` (radix 38). Used by `identifier_hash`.
    Hashed,
}

impl Alphabet {
    #[inline]
    pub(crate) const fn radix(self) -> u64 {
        match self {
            Alphabet::Packed => PACKED_RADIX,
            Alphabet::Hashed => HASHED_RADIX,
        }
    }

    /// Maps an input byte to its symbol code, or `None` if the byte is not
    /// part of this alphabet.
    #[inline]
    pub(crate) const fn code(self, byte: u8) -> Option<u8> {
        match byte {
            b'a'..=b'z' => Some(byte - b'a'),
            b'A'..=b'Z' => Some(byte - b'A'),
            b'0'..=b'9' => Some(byte - b'0' + 26),
            b'_' if matches!(self, Alphabet::Hashed) => Some(UNDERSCORE_CODE),
            _ => None,
        }
    }

    /// Inverse of [`Alphabet::code`]; letters always decode to lower case.
    #[inline]
    pub(crate) const fn symbol(self, code: u8) -> Option<char> {
        match code {
            0..=25 => Some((b'a' + code) as char),
            26..=35 => Some((b'0' + code - 26) as char),
            // Mirrors `code`; no public API decodes hashed words
            UNDERSCORE_CODE if matches!(self, Alphabet::Hashed) => Some('_'),
            _ => None,
        }
    }
}
