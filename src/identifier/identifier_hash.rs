use super::IdentifierError;
use super::alphabet::Alphabet;
use super::radix::pack_word;
use crate::constants::{INLINE_WORDS, SYMBOLS_PER_WORD, WORD_SIZE};
use crate::hash::hash32;

/// Hashes an identifier of any length to a stable `u32`.
///
/// The identifier (`a-z`, `A-Z`, `0-9`, `_`; letters case-folded) is
/// radix-packed 12 symbols per `u64` word, the words are laid out as a
/// little-endian byte buffer, and the buffer is hashed with
/// [`hash32`](crate::hash::hash32) using `seed`.
///
/// Identifiers of up to 48 symbols are packed on the stack; longer ones use a
/// heap buffer. Both paths yield the same digest.
///
/// ```rust
/// use idpack::identifier::identifier_hash;
///
/// let id = identifier_hash("OnPropertyChanged", 777).unwrap();
/// assert_eq!(id, identifier_hash("onpropertychanged", 777).unwrap());
/// assert!(identifier_hash("foo bar", 777).is_err());
/// ```
pub fn identifier_hash(identifier: &str, seed: u32) -> Result<u32, IdentifierError> {
    hash_with_buffer(identifier, seed, WordBuffer::for_length(identifier.len()))
}

/// Returns the words `identifier_hash` feeds to the hash primitive, in order.
pub fn packed_words(identifier: &str) -> Result<Vec<u64>, IdentifierError> {
    let mut words = Vec::with_capacity(word_count(identifier.len()));
    pack_words(identifier, |word| words.push(word))?;
    Ok(words)
}

fn hash_with_buffer(
    identifier: &str,
    seed: u32,
    mut buffer: WordBuffer,
) -> Result<u32, IdentifierError> {
    pack_words(identifier, |word| buffer.push(word))?;
    Ok(hash32(buffer.as_bytes(), seed))
}

/// Packs `identifier` block by block, handing every finished word to `emit`.
///
/// Fails on the first symbol outside the hashed alphabet, before the word
/// containing it is emitted.
fn pack_words(identifier: &str, mut emit: impl FnMut(u64)) -> Result<(), IdentifierError> {
    let bytes = identifier.as_bytes();

    let mut start = 0;
    while start < bytes.len() {
        let end = (start + SYMBOLS_PER_WORD).min(bytes.len());

        let word = pack_word(Alphabet::Hashed, bytes, start, end).map_err(|position| {
            let err = IdentifierError::invalid_character_at(identifier, position);
            tracing::debug!(%err, "rejecting identifier for hashing");
            err
        })?;

        emit(word);
        start = end;
    }

    Ok(())
}

#[inline]
fn word_count(symbols: usize) -> usize {
    symbols.div_ceil(SYMBOLS_PER_WORD)
}

/// Byte buffer receiving packed words in little-endian order.
enum WordBuffer {
    Inline {
        bytes: [u8; INLINE_WORDS * WORD_SIZE],
        len: usize,
    },
    Heap(Vec<u8>),
}

impl WordBuffer {
    /// Picks the inline buffer when `symbols` fit into `INLINE_WORDS` words.
    fn for_length(symbols: usize) -> Self {
        let words = word_count(symbols);

        if words <= INLINE_WORDS {
            WordBuffer::Inline {
                bytes: [0; INLINE_WORDS * WORD_SIZE],
                len: 0,
            }
        } else {
            tracing::trace!(
                symbols,
                words,
                "identifier exceeds the inline buffer; packing on the heap"
            );
            WordBuffer::heap(symbols)
        }
    }

    fn heap(symbols: usize) -> Self {
        WordBuffer::Heap(Vec::with_capacity(word_count(symbols) * WORD_SIZE))
    }

    /// The inline variant is only chosen when every word fits, so `push`
    /// never runs past its capacity.
    fn push(&mut self, word: u64) {
        match self {
            WordBuffer::Inline { bytes, len } => {
                bytes[*len..*len + WORD_SIZE].copy_from_slice(&word.to_le_bytes());
                *len += WORD_SIZE;
            }
            WordBuffer::Heap(bytes) => bytes.extend_from_slice(&word.to_le_bytes()),
        }
    }

    fn as_bytes(&self) -> &[u8] {
        match self {
            WordBuffer::Inline { bytes, len } => &bytes[..*len],
            WordBuffer::Heap(bytes) => bytes,
        }
    }
}
