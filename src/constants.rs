// Identifier packing constants

/// Number of distinct symbol codes a `PackedIdentifier` word can hold:
/// 26 letters + 10 digits, plus 1 for the reserved "no symbol" value 0.
pub const PACKED_RADIX: u64 = 26 + 10 + 1; // 37

/// Radix used by `identifier_hash`: the packed alphabet plus `_`.
pub const HASHED_RADIX: u64 = 26 + 10 + 1 + 1; // 38

/// Code assigned to `_` in the hashed alphabet.
pub const UNDERSCORE_CODE: u8 = 36;

/// Number of symbols packed into a single `u64` word.
///
/// 12 symbols at radix 38 need at most `38^12 - 1` (~9.1e18), which still fits in
/// a `u64` (~1.8e19); a 13th symbol would not.
pub const SYMBOLS_PER_WORD: usize = 12;

/// Maximum identifier length accepted by `PackedIdentifier` (two words).
pub const PACKED_MAX_LENGTH: usize = SYMBOLS_PER_WORD * 2; // 24

/// Size in bytes of one packed word once laid out for hashing.
pub const WORD_SIZE: usize = 8;

/// Number of words `identifier_hash` packs into its on-stack buffer before
/// falling back to a heap allocation.
pub const INLINE_WORDS: usize = 4;

/// Longest identifier (in symbols) that `identifier_hash` encodes without
/// allocating.
pub const INLINE_MAX_LENGTH: usize = INLINE_WORDS * SYMBOLS_PER_WORD; // 48

/// Size in bytes of the serialized `PackedIdentifier` layout (`A` then `B`).
pub const PACKED_IDENTIFIER_SIZE: usize = WORD_SIZE * 2; // 16
