//! Bit-extraction helpers shared by the WOTS+ and FORS modules.

use alloc::vec::Vec;

use crate::params::{LG_W, W, WOTS_LEN1, WOTS_LEN2};

/// Extract `out_len` consecutive `b`-bit unsigned integers from a big-endian
/// bit stream.
///
/// The stream is read most-significant-bit first. If the input runs out, the
/// remaining low bits of the last digit are zero.
#[must_use]
pub fn base_2b(x: &[u8], b: usize, out_len: usize) -> Vec<u32> {
    debug_assert!(b > 0 && b <= 32);

    let mut result = Vec::with_capacity(out_len);
    let mask = (1u64 << b) - 1;

    let mut bits: u64 = 0;
    let mut num_bits: usize = 0;
    let mut byte_idx: usize = 0;

    for _ in 0..out_len {
        while num_bits < b && byte_idx < x.len() {
            bits = (bits << 8) | u64::from(x[byte_idx]);
            num_bits += 8;
            byte_idx += 1;
        }

        if num_bits >= b {
            num_bits -= b;
            result.push(((bits >> num_bits) & mask) as u32);
        } else {
            result.push(((bits << (b - num_bits)) & mask) as u32);
            num_bits = 0;
        }
    }

    result
}

/// Append the WOTS+ checksum digits to `len1` message digits.
///
/// The checksum `sum(w - 1 - d)` is left-shifted so its top bit aligns with a
/// byte boundary, then split into `len2` base-w digits.
#[must_use]
pub fn append_wots_checksum(mut digits: Vec<u32>) -> Vec<u32> {
    debug_assert_eq!(digits.len(), WOTS_LEN1);

    let csum: u32 = digits.iter().map(|&d| (W as u32) - 1 - d).sum();
    let shifted = csum << (8 - (WOTS_LEN2 * LG_W) % 8);
    let csum_bytes = [(shifted >> 8) as u8, (shifted & 0xFF) as u8];
    digits.extend_from_slice(&base_2b(&csum_bytes, LG_W, WOTS_LEN2));
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WOTS_LEN;

    #[test]
    fn base_2b_nibbles() {
        // 0xAB = 1010_1011 -> [10, 11] as 4-bit digits
        assert_eq!(base_2b(&[0xAB], 4, 2), vec![0xA, 0xB]);
    }

    #[test]
    fn base_2b_whole_bytes() {
        assert_eq!(base_2b(&[0x12, 0x34], 8, 2), vec![0x12, 0x34]);
    }

    #[test]
    fn base_2b_twelve_bit() {
        // 0x123 and 0x456 packed into three bytes.
        assert_eq!(base_2b(&[0x12, 0x34, 0x56], 12, 2), vec![0x123, 0x456]);
    }

    #[test]
    fn base_2b_zero_pads_short_input() {
        // One byte feeds only the top 8 bits of a 12-bit digit.
        assert_eq!(base_2b(&[0xFF], 12, 1), vec![0xFF0]);
    }

    #[test]
    fn checksum_extremes() {
        // All-zero digits maximize the checksum: 32 * 15 = 480 = 0x1E0.
        let digits = append_wots_checksum(vec![0; WOTS_LEN1]);
        assert_eq!(digits.len(), WOTS_LEN);
        assert_eq!(&digits[WOTS_LEN1..], &[0x1, 0xE, 0x0]);

        // All-max digits zero it.
        let digits = append_wots_checksum(vec![15; WOTS_LEN1]);
        assert_eq!(&digits[WOTS_LEN1..], &[0, 0, 0]);
    }
}
