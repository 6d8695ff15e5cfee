use super::HashInputError;
use super::mix::{fmix32, mix_lane, read_u32_le};

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Computes the MurmurHash3 x86_32 digest of `bytes`.
///
/// This is a fast, non-cryptographic hash: it distributes well for ordinary
/// keys but offers no collision resistance against crafted input.
///
/// The function is `const`, so digests of literals can be computed at compile
/// time:
///
/// ```rust
/// use idpack::hash::hash32;
///
/// const MURMUR: u32 = hash32(b"murmur", 777);
/// assert_eq!(MURMUR, 3048996684);
/// ```
pub const fn hash32(bytes: &[u8], seed: u32) -> u32 {
    let len = bytes.len();
    let n_blocks = len / 4;

    let mut h1 = seed;

    // Body
    let mut i = 0;
    while i < n_blocks {
        let k1 = read_u32_le(bytes, i * 4);

        h1 ^= mix_lane(k1, C1, 15, C2);
        h1 = h1.rotate_left(13);
        h1 = h1.wrapping_mul(5).wrapping_add(0xe654_6b64);

        i += 1;
    }

    // Tail: highest remaining byte first, falling through to the lowest
    let tail = n_blocks * 4;
    let remaining = len & 3;
    let mut k1: u32 = 0;

    if remaining >= 3 {
        k1 ^= (bytes[tail + 2] as u32) << 16;
    }
    if remaining >= 2 {
        k1 ^= (bytes[tail + 1] as u32) << 8;
    }
    if remaining >= 1 {
        k1 ^= bytes[tail] as u32;
        h1 ^= mix_lane(k1, C1, 15, C2);
    }

    // Finalization
    h1 ^= len as u32;
    fmix32(h1)
}

/// Hashes the `length` bytes of `bytes` starting at `start`.
///
/// Returns [`HashInputError::RangeOutOfBounds`] when the window does not fit
/// inside the buffer; nothing is hashed in that case.
pub fn hash32_range(
    bytes: &[u8],
    start: usize,
    length: usize,
    seed: u32,
) -> Result<u32, HashInputError> {
    let window = start
        .checked_add(length)
        .and_then(|end| bytes.get(start..end))
        .ok_or(HashInputError::RangeOutOfBounds {
            start,
            length,
            buffer_len: bytes.len(),
        })?;

    Ok(hash32(window, seed))
}
