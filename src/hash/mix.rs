/// Avalanche finisher shared by both MurmurHash3 variants.
#[inline]
pub(crate) const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Reads the little-endian `u32` starting at `offset`.
///
/// Blocks are always decoded little-endian so digests match the published
/// vectors regardless of the host's byte order.
#[inline]
pub(crate) const fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Multiply-rotate-multiply step applied to every block lane (and to the
/// partially filled tail lanes).
#[inline]
pub(crate) const fn mix_lane(k: u32, c_in: u32, rotation: u32, c_out: u32) -> u32 {
    k.wrapping_mul(c_in)
        .rotate_left(rotation)
        .wrapping_mul(c_out)
}
