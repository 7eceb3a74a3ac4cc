//! The lz77 module holds the dictionary stage of the codec.
//!
//! The content is parsed greedily from the left. At each step the leading "lookahead" is matched
//! against the trailing "window" of content already seen, using the Z-algorithm over
//! `lookahead + sentinel + window + lookahead`. Each step emits one triple: how far back the match
//! starts, how long it is, and the first symbol after it.
//!
//! Decoding replays the triples in order. A match may overlap the symbols it is producing (an
//! offset shorter than the length), which is how runs of one repeated pattern are written.
//!

pub mod parse;
pub mod replay;
pub mod triple_stream;
pub mod z_alg;

use std::fmt::{Display, Formatter};

/// One step of the LZ77 parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple {
    /// Distance back from the current position to the start of the match.
    pub offset: usize,
    /// Number of symbols copied.
    pub length: usize,
    /// Symbol written after the copied run.
    pub next_symbol: char,
}

impl Triple {
    pub fn new(offset: usize, length: usize, next_symbol: char) -> Self {
        Self {
            offset,
            length,
            next_symbol,
        }
    }

    /// A triple that copies nothing and only writes `symbol`.
    pub fn literal(symbol: char) -> Self {
        Self::new(0, 0, symbol)
    }

    pub fn is_literal(&self) -> bool {
        self.offset == 0 && self.length == 0
    }
}

impl Display for Triple {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{},{},{:?}>", self.offset, self.length, self.next_symbol)
    }
}
