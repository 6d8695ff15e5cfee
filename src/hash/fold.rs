/// Folds a 32-bit digest down to 16 bits by xoring its halves.
///
/// Used when measuring how a digest behaves as a narrower key (e.g. a
/// `u16` slot id); both halves keep contributing to the result.
#[inline]
pub const fn fold_to_u16(digest: u32) -> u16 {
    ((digest & 0x0000_ffff) ^ (digest >> 16)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_xors_halves() {
        assert_eq!(fold_to_u16(0x0000_0000), 0);
        assert_eq!(fold_to_u16(0x1234_0000), 0x1234);
        assert_eq!(fold_to_u16(0x0000_abcd), 0xabcd);
        assert_eq!(fold_to_u16(0xffff_ffff), 0);
        assert_eq!(fold_to_u16(0x1234_5678), 0x1234 ^ 0x5678);
    }
}
