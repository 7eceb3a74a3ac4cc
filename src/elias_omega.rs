//! Elias-omega universal coding of integers.
//!
//! A positive integer is written as a chain of components. Every component but the last starts
//! with a 0 and, read with that bit flipped to 1, gives the length minus one of the component
//! that follows. The last component is the integer itself and starts with its natural 1 bit.
//!
//! Plain Elias-omega only covers integers from 1 up. The generalised functions shift the value
//! by a fixed offset first, and the default offset of 1 lets zero be written (as a single `1`).
//!

use log::trace;

use crate::bitstream::bitvec::BitVec;
use crate::error::{Error, Result};
use crate::tools::convert_base::{bit_length, from_binary, to_binary};

/// Offset that maps the non-negative integers onto the positive ones.
pub const DEFAULT_OFFSET: u64 = 1;

/// Encode a positive integer.
pub fn elias_encode(number: u64) -> Result<BitVec> {
    if number == 0 {
        return Err(Error::invalid_parameter(
            "number",
            "elias-omega can only encode positive integers",
        ));
    }
    // Components are collected payload first and written out in reverse.
    let mut components = vec![to_binary(number)];
    let mut current_len = bit_length(number);
    while current_len > 1 {
        let prefix = (current_len - 1) as u64;
        let width = bit_length(prefix);
        let mut component = BitVec::with_capacity(width);
        // The natural leading 1 becomes the 0 continuation marker.
        component.push(false);
        component.push_bits(prefix, width - 1);
        current_len = component.len();
        components.push(component);
    }

    let mut encoding = BitVec::with_capacity(components.iter().map(|c| c.len()).sum());
    components
        .iter()
        .rev()
        .for_each(|component| encoding.extend_from(component));
    Ok(encoding)
}

/// Decode one Elias-omega integer starting at bit `start`. Returns the integer and the number of
/// bits the code occupied.
pub fn elias_decode(sequence: &BitVec, start: usize) -> Result<(u64, usize)> {
    let mut component_len = 1_usize;
    let mut pos = start;

    loop {
        let end = pos + component_len;
        if end > sequence.len() {
            return Err(Error::UnexpectedEnd {
                position: sequence.len(),
            });
        }
        let mut component = (pos..end).filter_map(|i| sequence.get(i));
        // Just checked that every bit in pos..end exists
        let leading = component.next().unwrap_or(false);
        if leading {
            let value = from_binary(std::iter::once(true).chain(component));
            trace!("Elias decoded {} from {} bits at {}", value, end - start, start);
            return Ok((value, end - start));
        }
        let next_len = from_binary(std::iter::once(true).chain(component)).saturating_add(1);
        // A payload wider than 64 bits cannot be an integer we wrote
        if next_len > u64::BITS as u64 {
            return Err(Error::Overflow(format!(
                "elias component of {} bits at bit {}",
                next_len, end
            )));
        }
        pos = end;
        component_len = next_len as usize;
    }
}

/// Encode `number + offset`. With the default offset this covers every non-negative integer.
pub fn elias_generalised_encode(number: u64, offset: u64) -> Result<BitVec> {
    let shifted = number.checked_add(offset).ok_or_else(|| {
        Error::Overflow(format!("{} + offset {} exceeds u64", number, offset))
    })?;
    elias_encode(shifted)
}

/// Decode the result of `elias_generalised_encode`. The offset must match the one used to
/// encode. Returns the integer and the number of bits consumed.
pub fn elias_generalised_decode(sequence: &BitVec, start: usize, offset: u64) -> Result<(u64, usize)> {
    let (value, read_len) = elias_decode(sequence, start)?;
    let number = value.checked_sub(offset).ok_or_else(|| {
        Error::corrupt(format!(
            "elias value {} at bit {} is below the offset {}",
            value, start, offset
        ))
    })?;
    Ok((number, read_len))
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn bv(s: &str) -> BitVec {
        s.parse().unwrap()
    }

    #[test]
    fn zero_with_default_offset_test() {
        let code = elias_generalised_encode(0, DEFAULT_OFFSET).unwrap();
        assert_eq!(code.to_string(), "1");
        assert_eq!(elias_generalised_decode(&code, 0, DEFAULT_OFFSET).unwrap(), (0, 1));
    }

    #[test]
    fn known_codes_test() {
        assert_eq!(elias_encode(1).unwrap().to_string(), "1");
        assert_eq!(elias_encode(2).unwrap().to_string(), "010");
        assert_eq!(elias_encode(3).unwrap().to_string(), "011");
        assert_eq!(elias_encode(4).unwrap().to_string(), "000100");
        assert_eq!(elias_encode(7).unwrap().to_string(), "000111");
        assert_eq!(elias_encode(8).unwrap().to_string(), "0011000");
        assert_eq!(elias_encode(16).unwrap().to_string(), "00000010000");
    }

    #[test]
    fn zero_is_rejected_test() {
        assert!(elias_encode(0).is_err());
        assert!(elias_generalised_encode(u64::MAX, 1).is_err());
    }

    #[test]
    fn decode_from_offset_test() {
        // Two junk bits, then 4, then 2
        let bits = bv("11000100010");
        assert_eq!(elias_decode(&bits, 2).unwrap(), (4, 6));
        assert_eq!(elias_decode(&bits, 8).unwrap(), (2, 3));
    }

    #[test]
    fn truncated_test() {
        let bits = bv("00010");
        assert!(matches!(
            elias_decode(&bits, 0),
            Err(Error::UnexpectedEnd { position: 5 })
        ));
        assert!(matches!(
            elias_decode(&BitVec::new(), 0),
            Err(Error::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn oversized_prefix_test() {
        // Lengths run 1, 2, 3, 5, 17, and the 17 bit component then announces 131072 bits
        let bits = bv(&format!("{}{}", "0".repeat(12), "1".repeat(16)));
        assert!(matches!(elias_decode(&bits, 0), Err(Error::Overflow(_))));
        // One zero fewer and the same bits simply run out
        let short = bv(&format!("{}{}", "0".repeat(11), "1".repeat(16)));
        assert!(matches!(
            elias_decode(&short, 0),
            Err(Error::UnexpectedEnd { position: 27 })
        ));
    }

    #[test]
    fn larger_offset_test() {
        let code = elias_generalised_encode(5, 3).unwrap();
        assert_eq!(code, elias_encode(8).unwrap());
        assert_eq!(elias_generalised_decode(&code, 0, 3).unwrap(), (5, 7));
        // An offset larger than the stored value cannot have come from the encoder
        assert!(elias_generalised_decode(&bv("1"), 0, 2).is_err());
    }

    #[test]
    fn max_value_test() {
        let code = elias_encode(u64::MAX).unwrap();
        assert_eq!(elias_decode(&code, 0).unwrap(), (u64::MAX, code.len()));
    }

    proptest! {
        #[test]
        fn round_trip(v in 0_u64..u64::MAX / 2, offset in 1_u64..1000) {
            let code = elias_generalised_encode(v, offset).unwrap();
            prop_assert_eq!(elias_generalised_decode(&code, 0, offset).unwrap(), (v, code.len()));
        }

        #[test]
        fn length_is_monotonic(v in 1_u64..1_000_000) {
            let here = elias_encode(v).unwrap().len();
            let next = elias_encode(v + 1).unwrap().len();
            prop_assert!(here <= next);
        }
    }
}
