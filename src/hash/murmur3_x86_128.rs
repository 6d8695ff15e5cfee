use super::mix::{fmix32, mix_lane, read_u32_le};

const C1: u32 = 0x239b_961b;
const C2: u32 = 0xab0e_9789;
const C3: u32 = 0x38b3_4ae5;
const C4: u32 = 0xa1e3_8b93;

/// Computes the MurmurHash3 x86_128 digest of `bytes`.
///
/// Four 32-bit lanes are hashed in parallel and the result is returned as two
/// words: `(h2 << 32 | h1, h4 << 32 | h3)`.
///
/// ```rust
/// use idpack::hash::hash128;
///
/// assert_eq!(
///     hash128(b"murmur", 777),
///     (12697776169225239660, 120866311087417157)
/// );
/// ```
pub const fn hash128(bytes: &[u8], seed: u32) -> (u64, u64) {
    let len = bytes.len();
    let n_blocks = len / 16;

    let mut h1 = seed;
    let mut h2 = seed;
    let mut h3 = seed;
    let mut h4 = seed;

    // Body
    let mut i = 0;
    while i < n_blocks {
        let offset = i * 16;
        let k1 = read_u32_le(bytes, offset);
        let k2 = read_u32_le(bytes, offset + 4);
        let k3 = read_u32_le(bytes, offset + 8);
        let k4 = read_u32_le(bytes, offset + 12);

        h1 ^= mix_lane(k1, C1, 15, C2);
        h1 = h1.rotate_left(19).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x561c_cd1b);

        h2 ^= mix_lane(k2, C2, 16, C3);
        h2 = h2.rotate_left(17).wrapping_add(h3);
        h2 = h2.wrapping_mul(5).wrapping_add(0x0bca_a747);

        h3 ^= mix_lane(k3, C3, 17, C4);
        h3 = h3.rotate_left(15).wrapping_add(h4);
        h3 = h3.wrapping_mul(5).wrapping_add(0x96cd_1c35);

        h4 ^= mix_lane(k4, C4, 18, C1);
        h4 = h4.rotate_left(13).wrapping_add(h1);
        h4 = h4.wrapping_mul(5).wrapping_add(0x32ac_3b17);

        i += 1;
    }

    // Tail: bytes land in their lane by position, highest byte first
    let tail = n_blocks * 16;
    let remaining = len & 15;
    let mut k = [0u32; 4];

    let mut j = remaining;
    while j > 0 {
        j -= 1;
        k[j / 4] ^= (bytes[tail + j] as u32) << ((j % 4) * 8);
    }

    if remaining > 12 {
        h4 ^= mix_lane(k[3], C4, 18, C1);
    }
    if remaining > 8 {
        h3 ^= mix_lane(k[2], C3, 17, C4);
    }
    if remaining > 4 {
        h2 ^= mix_lane(k[1], C2, 16, C3);
    }
    if remaining > 0 {
        h1 ^= mix_lane(k[0], C1, 15, C2);
    }

    // Finalization
    let len = len as u32;
    let [h1, h2, h3, h4] = cross_mix([h1 ^ len, h2 ^ len, h3 ^ len, h4 ^ len]);
    let [h1, h2, h3, h4] = cross_mix([fmix32(h1), fmix32(h2), fmix32(h3), fmix32(h4)]);

    (
        ((h2 as u64) << 32) | h1 as u64,
        ((h4 as u64) << 32) | h3 as u64,
    )
}

/// `h1 += h2 + h3 + h4`, then folds the new `h1` back into the other lanes.
#[inline]
const fn cross_mix([mut h1, mut h2, mut h3, mut h4]: [u32; 4]) -> [u32; 4] {
    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);
    [h1, h2, h3, h4]
}
