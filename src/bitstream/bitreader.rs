//! BitReader: a cursor over a BitVec.
//!
//! Every field in the container is variable length, so each read reports how many bits it
//! consumed and the reader advances by that much. The raw reads (bit, bint) return Option like
//! a plain stream would. The codec-aware reads return Result and name the bit position where
//! the stream ran out.
//!

use crate::bitstream::bitvec::BitVec;
use crate::elias_omega::{elias_generalised_decode, DEFAULT_OFFSET};
use crate::error::{Error, Result};
use crate::huffman_coding::huffman::{huffman_decode, DecodeTrie};
use crate::tools::convert_base::from_binary;

#[derive(Debug)]
pub struct BitReader<'a> {
    source: &'a BitVec,
    cursor: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader positioned at the first bit.
    pub fn new(source: &'a BitVec) -> Self {
        Self { source, cursor: 0 }
    }

    /// Creates a new BitReader positioned at `start`.
    pub fn at(source: &'a BitVec, start: usize) -> Self {
        Self {
            source,
            cursor: start,
        }
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        let bit = self.source.get(self.cursor)?;
        self.cursor += 1;
        Some(bit as usize)
    }

    /// Return Option<usize> of the next n bits, or None if there are fewer than n bits left.
    /// Nothing is consumed when None is returned.
    pub fn bint(&mut self, n: usize) -> Option<usize> {
        if n > usize::BITS as usize || self.remaining() < n {
            return None;
        }
        let result = from_binary((self.cursor..self.cursor + n).filter_map(|i| self.source.get(i)));
        self.cursor += n;
        Some(result as usize)
    }

    /// Read a fixed width unsigned field.
    pub fn fixed(&mut self, width: usize) -> Result<u64> {
        self.bint(width)
            .map(|v| v as u64)
            .ok_or(Error::UnexpectedEnd {
                position: self.source.len(),
            })
    }

    /// Read `len` raw bits as a new BitVec.
    pub fn bits(&mut self, len: usize) -> Result<BitVec> {
        let bits = self
            .source
            .slice(self.cursor, len)
            .ok_or(Error::UnexpectedEnd {
                position: self.source.len(),
            })?;
        self.cursor += len;
        Ok(bits)
    }

    /// Read an Elias-omega integer using the default offset (so zero is representable).
    pub fn elias(&mut self) -> Result<u64> {
        let (value, consumed) = elias_generalised_decode(self.source, self.cursor, DEFAULT_OFFSET)?;
        self.cursor += consumed;
        Ok(value)
    }

    /// Read one Huffman coded symbol.
    pub fn huffman(&mut self, trie: &DecodeTrie) -> Result<char> {
        let (symbol, consumed) = huffman_decode(self.source, self.cursor, trie)?;
        self.cursor += consumed;
        Ok(symbol)
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Bits left to read.
    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.cursor)
    }

    /// Debugging function. Report current position as bytes.bits.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor / 8, self.cursor % 8)
    }
}
