//! Byte and bit helpers shared by both backends.

/// Interpret up to 8 bytes as a big-endian, right-aligned integer.
#[must_use]
pub fn to_int(x: &[u8]) -> u64 {
    debug_assert!(x.len() <= 8);
    x.iter().fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Mask keeping the low `bits` bits of a `u64`.
#[must_use]
pub const fn low_mask_u64(bits: usize) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Decode a big-endian field of at most 8 bytes and keep its low `bits` bits.
#[must_use]
pub fn extract_u64(x: &[u8], bits: usize) -> u64 {
    to_int(x) & low_mask_u64(bits)
}

/// Decode a big-endian field of at most 4 bytes and keep its low `bits` bits.
#[must_use]
pub fn extract_u32(x: &[u8], bits: usize) -> u32 {
    debug_assert!(x.len() <= 4 && bits <= 32);
    extract_u64(x, bits) as u32
}

/// XOR `mask` onto `data` in place. Both must have the same length.
pub fn xor_in_place(data: &mut [u8], mask: &[u8]) {
    debug_assert_eq!(data.len(), mask.len());
    for (d, m) in data.iter_mut().zip(mask) {
        *d ^= m;
    }
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
mod tests {
    use super::*;

    #[test]
    fn test_to_int() {
        assert_eq!(to_int(&[0x01, 0x02, 0x03, 0x04]), 0x01020304);
        assert_eq!(to_int(&[0xFF]), 0xFF);
        assert_eq!(to_int(&[]), 0);
        assert_eq!(to_int(&[0xFF; 8]), u64::MAX);
    }

    #[test]
    fn test_low_mask() {
        assert_eq!(low_mask_u64(0), 0);
        assert_eq!(low_mask_u64(3), 0b111);
        assert_eq!(low_mask_u64(63), u64::MAX >> 1);
        assert_eq!(low_mask_u64(64), u64::MAX);
    }

    #[test]
    fn test_extract_drops_high_bits() {
        // 63-bit tree index out of 8 bytes: top bit cleared
        assert_eq!(extract_u64(&[0xFF; 8], 63), u64::MAX >> 1);
        // 3-bit leaf index out of one byte
        assert_eq!(extract_u32(&[0b1010_1101], 3), 0b101);
        // 9-bit leaf index out of two bytes
        assert_eq!(extract_u32(&[0xFF, 0x01], 9), 0x101);
        assert_eq!(extract_u32(&[], 0), 0);
    }

    #[test]
    fn test_xor_in_place() {
        let mut data = [0x0F, 0xF0, 0xAA];
        xor_in_place(&mut data, &[0xFF, 0xFF, 0xAA]);
        assert_eq!(data, [0xF0, 0x0F, 0x00]);
    }
}
