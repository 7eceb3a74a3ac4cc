use crate::bitstream::bitvec::BitVec;
use crate::error::{Error, Result};

/// Number of bits needed to write `n` without leading zeros. Zero still takes one bit.
pub fn bit_length(n: u64) -> usize {
    (u64::BITS - n.leading_zeros()).max(1) as usize
}

/// Minimal binary representation of `n`, most significant bit first.
pub fn to_binary(n: u64) -> BitVec {
    let mut bits = BitVec::with_capacity(64);
    bits.push_bits(n, bit_length(n));
    bits
}

/// Binary representation of `n` padded with leading zeros to exactly `width` bits.
pub fn to_binary_fixed(n: u64, width: usize) -> Result<BitVec> {
    if bit_length(n) > width {
        return Err(Error::Overflow(format!(
            "{} does not fit in {} bits",
            n, width
        )));
    }
    let mut bits = BitVec::with_capacity(width);
    bits.push_bits(n, width);
    Ok(bits)
}

/// Accumulate bits, most significant first, into an integer. Bits beyond the 64th shift the
/// earliest ones out, so callers bound the width first.
pub fn from_binary<I: IntoIterator<Item = bool>>(bits: I) -> u64 {
    bits.into_iter()
        .fold(0_u64, |number, bit| (number << 1) | bit as u64)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn to_binary_test() {
        assert_eq!(to_binary(908127343).to_string(), "110110001000001110110001101111");
        assert_eq!(to_binary(1).to_string(), "1");
        assert_eq!(to_binary(0).to_string(), "0");
        assert_eq!(to_binary(u64::MAX).len(), 64);
    }

    #[test]
    fn from_binary_test() {
        let bits: BitVec = "0011010".parse().unwrap();
        assert_eq!(from_binary(bits.iter()), 26);
        assert_eq!(from_binary(Vec::<bool>::new()), 0);
    }

    #[test]
    fn fixed_width_test() {
        assert_eq!(to_binary_fixed('a' as u64, 8).unwrap().to_string(), "01100001");
        assert_eq!(to_binary_fixed(0, 8).unwrap().to_string(), "00000000");
        assert_eq!(to_binary_fixed(255, 8).unwrap().to_string(), "11111111");
        assert!(to_binary_fixed(256, 8).is_err());
    }

    #[test]
    fn bit_length_test() {
        assert_eq!(bit_length(0), 1);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(2), 2);
        assert_eq!(bit_length(255), 8);
        assert_eq!(bit_length(256), 9);
    }
}
