use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// An appendable, indexable sequence of bits. Bits are packed most significant bit first, so
/// the byte form of the vec is exactly the bitstream written to disk.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitVec {
    bytes: Vec<u8>,
    len: usize,
}

impl BitVec {
    /// Create an empty BitVec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty BitVec with room for at least `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            len: 0,
        }
    }

    /// Build a BitVec from a packed buffer. Every bit of every byte is taken, so any padding
    /// in the last byte becomes part of the vec.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Number of bits held.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        let shift = 7 - (self.len % 8);
        if shift == 7 {
            self.bytes.push(0);
        }
        if bit {
            // A byte was pushed above if this one was full, so last_mut always exists.
            if let Some(byte) = self.bytes.last_mut() {
                *byte |= 1 << shift;
            }
        }
        self.len += 1;
    }

    /// Append the low `width` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u64, width: usize) {
        for i in (0..width).rev() {
            self.push(i < 64 && (value >> i) & 1 == 1);
        }
    }

    /// Append every bit of another vec.
    pub fn extend_from(&mut self, other: &BitVec) {
        // Fast path when we are byte aligned
        if self.len % 8 == 0 {
            self.bytes.truncate(self.len / 8);
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
        } else {
            other.iter().for_each(|bit| self.push(bit));
        }
    }

    /// Remove and return the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        if self.len == 0 {
            return None;
        }
        let bit = self.get(self.len - 1);
        self.len -= 1;
        let byte_idx = self.len / 8;
        if self.len % 8 == 0 {
            self.bytes.truncate(byte_idx);
        } else {
            // Keep the unused tail of the last byte zeroed so the byte form stays padded
            self.bytes[byte_idx] &= 0xff << (8 - self.len % 8);
        }
        bit
    }

    /// Return the bit at `idx`, or None past the end.
    pub fn get(&self, idx: usize) -> Option<bool> {
        if idx >= self.len {
            return None;
        }
        Some(self.bytes[idx / 8] & (0x80 >> (idx % 8)) != 0)
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |idx| self.bytes[idx / 8] & (0x80 >> (idx % 8)) != 0)
    }

    /// Copy out `len` bits starting at `start`, or None if that runs past the end.
    pub fn slice(&self, start: usize, len: usize) -> Option<BitVec> {
        if start.checked_add(len)? > self.len {
            return None;
        }
        let mut out = BitVec::with_capacity(len);
        (start..start + len).for_each(|idx| out.push(self.bytes[idx / 8] & (0x80 >> (idx % 8)) != 0));
        Some(out)
    }

    /// True if this vec is a prefix of (or equal to) `other`.
    pub fn is_prefix_of(&self, other: &BitVec) -> bool {
        self.len <= other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    /// The packed bytes. Unused bits of the last byte are zero.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Debugging function to return the number of bytes.bits held so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.len / 8, self.len % 8)
    }
}

impl Display for BitVec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for BitVec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitVec({})", self)
    }
}

impl FromStr for BitVec {
    type Err = Error;

    /// Parse a string of '0' and '1' characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = BitVec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                other => {
                    return Err(Error::corrupt(format!(
                        "'{}' at position {} is not a bit",
                        other, i
                    )))
                }
            }
        }
        Ok(bits)
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitVec::new();
        iter.into_iter().for_each(|bit| bits.push(bit));
        bits
    }
}

#[cfg(test)]
mod test {
    use super::BitVec;

    fn bv(s: &str) -> BitVec {
        s.parse().unwrap()
    }

    #[test]
    fn push_test() {
        let mut bits = BitVec::new();
        for &b in &[true, false, false, false, false, false, false, true, true] {
            bits.push(b);
        }
        assert_eq!(bits.len(), 9);
        assert_eq!(bits.as_bytes(), &[0b1000_0001, 0b1000_0000]);
        assert_eq!(bits.loc(), "[1.1]");
    }

    #[test]
    fn push_bits_test() {
        let mut bits = BitVec::new();
        bits.push_bits(b'!' as u64, 8);
        bits.push_bits(0b011, 3);
        assert_eq!(bits.to_string(), "00100001011");
        assert_eq!(bits.into_bytes(), vec![33, 0b0110_0000]);
    }

    #[test]
    fn get_test() {
        let bits = bv("1011");
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(1), Some(false));
        assert_eq!(bits.get(3), Some(true));
        assert_eq!(bits.get(4), None);
    }

    #[test]
    fn extend_aligned_and_unaligned_test() {
        let mut aligned = bv("11110000");
        aligned.extend_from(&bv("101"));
        assert_eq!(aligned.to_string(), "11110000101");

        let mut unaligned = bv("101");
        unaligned.extend_from(&bv("0110011"));
        unaligned.extend_from(&bv("1"));
        assert_eq!(unaligned.to_string(), "10101100111");
    }

    #[test]
    fn pop_test() {
        let mut bits = bv("100000011");
        assert_eq!(bits.pop(), Some(true));
        assert_eq!(bits.as_bytes(), &[0b1000_0001]);
        assert_eq!(bits.pop(), Some(true));
        assert_eq!(bits.as_bytes(), &[0b1000_0000]);
        assert_eq!(bits.len(), 7);
        let mut empty = BitVec::new();
        assert_eq!(empty.pop(), None);
    }

    #[test]
    fn slice_and_prefix_test() {
        let bits = bv("0011010");
        assert_eq!(bits.slice(2, 3), Some(bv("110")));
        assert_eq!(bits.slice(5, 3), None);
        assert!(bv("001").is_prefix_of(&bits));
        assert!(!bv("01").is_prefix_of(&bits));
        assert!(BitVec::new().is_prefix_of(&bits));
    }

    #[test]
    fn from_bytes_test() {
        let bits = BitVec::from_bytes("Hi".as_bytes());
        assert_eq!(bits.len(), 16);
        assert_eq!(bits.to_string(), "0100100001101001");
    }

    #[test]
    fn bad_parse_test() {
        assert!("0102".parse::<BitVec>().is_err());
    }
}
