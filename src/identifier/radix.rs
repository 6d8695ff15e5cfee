use super::alphabet::Alphabet;
use crate::constants::SYMBOLS_PER_WORD;
use std::fmt;

/// Packs the symbols `bytes[start..end]` into a single word.
///
/// Each symbol contributes `acc * (code + 1)`, with `acc` starting at 1 and
/// growing by the alphabet's radix per symbol. Code 0 is never written, so a
/// zero digit marks the end of the word when unpacking.
///
/// The caller keeps `end - start <= SYMBOLS_PER_WORD`. On failure the byte
/// offset of the first symbol outside `alphabet` is returned.
pub(crate) const fn pack_word(
    alphabet: Alphabet,
    bytes: &[u8],
    start: usize,
    end: usize,
) -> Result<u64, usize> {
    let radix = alphabet.radix();
    let mut word: u64 = 0;
    let mut acc: u64 = 1;

    let mut i = start;
    while i < end {
        let code = match alphabet.code(bytes[i]) {
            Some(code) => code,
            None => return Err(i),
        };

        word = word.wrapping_add(acc.wrapping_mul(code as u64 + 1));
        acc = acc.wrapping_mul(radix);

        i += 1;
    }

    Ok(word)
}

/// Writes the symbols of `word` to `out` in their original order.
pub(crate) fn write_word<W: fmt::Write>(
    alphabet: Alphabet,
    mut word: u64,
    out: &mut W,
) -> fmt::Result {
    let radix = alphabet.radix();

    while word != 0 {
        let rem = (word % radix) as u8;
        word /= radix;

        let symbol = rem
            .checked_sub(1)
            .and_then(|code| alphabet.symbol(code))
            .ok_or(fmt::Error)?;

        out.write_char(symbol)?;
    }

    Ok(())
}

/// Counts the symbols in `word`.
///
/// Returns `None` for words that packing cannot produce: an empty digit
/// below the highest symbol, or more symbols than fit in a word.
pub(crate) const fn symbol_count(alphabet: Alphabet, mut word: u64) -> Option<usize> {
    let radix = alphabet.radix();
    let mut count = 0;

    while word != 0 {
        if word % radix == 0 {
            return None;
        }
        word /= radix;
        count += 1;
    }

    if count > SYMBOLS_PER_WORD {
        None
    } else {
        Some(count)
    }
}
