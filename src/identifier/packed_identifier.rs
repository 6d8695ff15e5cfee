use super::IdentifierError;
use super::alphabet::Alphabet;
use super::radix::{pack_word, symbol_count, write_word};
use crate::constants::{PACKED_IDENTIFIER_SIZE, PACKED_MAX_LENGTH, SYMBOLS_PER_WORD, WORD_SIZE};
use std::fmt;
use std::str::FromStr;

/// A case-insensitive identifier of up to 24 symbols (`a-z`, `A-Z`, `0-9`)
/// packed into two `u64` words.
///
/// The first 12 symbols are radix-packed into `a`, the next 12 into `b`.
/// Letters are folded to lower case, so `"Abc"` and `"abc"` pack to the same
/// value, and converting back to a string always yields lower case.
///
/// Ordering compares `(a, b)` as unsigned integers. Because the first symbol
/// of each word is its *least* significant digit, this is not alphabetical
/// order: `"b" < "aa"`, for example. Do not rely on a sorted collection of
/// `PackedIdentifier`s being sorted by name.
///
/// ```rust
/// use idpack::identifier::PackedIdentifier;
///
/// let id: PackedIdentifier = "MaxConnections".parse().unwrap();
/// assert_eq!(id, PackedIdentifier::new("maxconnections").unwrap());
/// assert_eq!(id.to_string(), "maxconnections");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PackedIdentifier {
    // Field order matters: the derived `Ord` compares `a` first.
    a: u64,
    b: u64,
}

impl PackedIdentifier {
    /// Maximum number of symbols a `PackedIdentifier` holds.
    pub const MAX_LENGTH: usize = PACKED_MAX_LENGTH;

    /// The empty identifier; the only value whose `a` word is zero.
    pub const EMPTY: PackedIdentifier = PackedIdentifier { a: 0, b: 0 };

    /// Packs `identifier`.
    ///
    /// Fails with [`IdentifierError::LengthExceeded`] for identifiers longer
    /// than [`Self::MAX_LENGTH`] and with [`IdentifierError::InvalidCharacter`]
    /// for the first symbol outside `a-z`, `A-Z`, `0-9`. The length is
    /// checked first. An empty string yields [`Self::EMPTY`].
    pub fn new(identifier: &str) -> Result<Self, IdentifierError> {
        let length = identifier.chars().count();
        if length > PACKED_MAX_LENGTH {
            tracing::debug!(
                length,
                max = PACKED_MAX_LENGTH,
                "rejecting identifier: too long to pack"
            );
            return Err(IdentifierError::LengthExceeded {
                length,
                max: PACKED_MAX_LENGTH,
            });
        }

        pack_pair(identifier.as_bytes()).map_err(|position| {
            let err = IdentifierError::invalid_character_at(identifier, position);
            tracing::debug!(%err, "rejecting identifier");
            err
        })
    }

    /// Like [`Self::new`], but an absent identifier maps to [`Self::EMPTY`].
    pub fn from_option(identifier: Option<&str>) -> Result<Self, IdentifierError> {
        match identifier {
            Some(identifier) => Self::new(identifier),
            None => Ok(Self::EMPTY),
        }
    }

    /// Packs `identifier` in a `const` context, panicking (at compile time
    /// when evaluated as a constant) if it cannot be packed.
    ///
    /// Prefer the [`packed_identifier!`](crate::packed_identifier) macro, which
    /// forces compile-time evaluation.
    pub const fn from_literal(identifier: &str) -> Self {
        let bytes = identifier.as_bytes();
        if char_count(bytes) > PACKED_MAX_LENGTH {
            panic!("identifier is longer than 24 symbols");
        }

        match pack_pair(bytes) {
            Ok(packed) => packed,
            Err(_) => panic!("identifier may only contain a-z, A-Z and 0-9"),
        }
    }

    /// Rebuilds an identifier from its two words.
    ///
    /// Only words produced by packing are accepted; anything else fails with
    /// [`IdentifierError::MalformedWords`].
    pub const fn from_words(a: u64, b: u64) -> Result<Self, IdentifierError> {
        let a_len = symbol_count(Alphabet::Packed, a);
        let b_len = symbol_count(Alphabet::Packed, b);

        let is_valid = match (a_len, b_len) {
            (Some(_), Some(0)) => true,
            // `b` only carries symbols once `a` is full
            (Some(SYMBOLS_PER_WORD), Some(_)) => true,
            _ => false,
        };

        if is_valid {
            Ok(PackedIdentifier { a, b })
        } else {
            Err(IdentifierError::MalformedWords { a, b })
        }
    }

    /// Decodes the 16-byte layout produced by [`Self::to_le_bytes`].
    pub fn from_le_bytes(bytes: [u8; PACKED_IDENTIFIER_SIZE]) -> Result<Self, IdentifierError> {
        let mut a = [0u8; WORD_SIZE];
        let mut b = [0u8; WORD_SIZE];
        a.copy_from_slice(&bytes[..WORD_SIZE]);
        b.copy_from_slice(&bytes[WORD_SIZE..]);

        Self::from_words(u64::from_le_bytes(a), u64::from_le_bytes(b))
    }

    /// Serializes the identifier as `a` followed by `b`, each little-endian.
    pub const fn to_le_bytes(&self) -> [u8; PACKED_IDENTIFIER_SIZE] {
        let a = self.a.to_le_bytes();
        let b = self.b.to_le_bytes();

        let mut out = [0u8; PACKED_IDENTIFIER_SIZE];
        let mut i = 0;
        while i < WORD_SIZE {
            out[i] = a[i];
            out[WORD_SIZE + i] = b[i];
            i += 1;
        }
        out
    }

    /// Word holding symbols 0..12.
    #[inline]
    pub const fn a(&self) -> u64 {
        self.a
    }

    /// Word holding symbols 12..24; zero for identifiers of 12 symbols or fewer.
    #[inline]
    pub const fn b(&self) -> u64 {
        self.b
    }

    #[inline]
    pub const fn words(&self) -> (u64, u64) {
        (self.a, self.b)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.a == 0
    }

    /// Number of symbols in the identifier.
    pub const fn len(&self) -> usize {
        let a = match symbol_count(Alphabet::Packed, self.a) {
            Some(count) => count,
            None => 0,
        };
        let b = match symbol_count(Alphabet::Packed, self.b) {
            Some(count) => count,
            None => 0,
        };
        a + b
    }
}

/// Packs up to 24 bytes into `(a, b)`, returning the offset of the first
/// rejected byte on failure.
/// Number of UTF-8 scalar values in `bytes`, counted in a `const` context.
const fn char_count(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        // continuation bytes look like 0b10xx_xxxx
        if (bytes[i] & 0xc0) != 0x80 {
            count += 1;
        }
        i += 1;
    }
    count
}

const fn pack_pair(bytes: &[u8]) -> Result<PackedIdentifier, usize> {
    let split = if bytes.len() < SYMBOLS_PER_WORD {
        bytes.len()
    } else {
        SYMBOLS_PER_WORD
    };

    let a = match pack_word(Alphabet::Packed, bytes, 0, split) {
        Ok(word) => word,
        Err(position) => return Err(position),
    };
    let b = match pack_word(Alphabet::Packed, bytes, split, bytes.len()) {
        Ok(word) => word,
        Err(position) => return Err(position),
    };

    Ok(PackedIdentifier { a, b })
}

impl fmt::Display for PackedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0 {
            return Ok(());
        }

        write_word(Alphabet::Packed, self.a, f)?;
        if self.b != 0 {
            write_word(Alphabet::Packed, self.b, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PackedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedIdentifier")
            .field("text", &format_args!("{self}"))
            .field("a", &self.a)
            .field("b", &self.b)
            .finish()
    }
}

impl FromStr for PackedIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PackedIdentifier {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for PackedIdentifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PackedIdentifier> for String {
    fn from(value: PackedIdentifier) -> Self {
        value.to_string()
    }
}
