//! The huffman module gives every distinct symbol of the input a prefix-free code, with shorter
//! codes for more frequent symbols. The codes are used for the "next symbol" of each LZ77 triple.
//!
//! Encoding counts the symbols, builds the tree with a comparator-driven min-heap and reads each
//! code off the path to its leaf. The codes themselves (not the counts) are stored in the
//! container, so decoding rebuilds a trie straight from the (symbol, code) pairs.
//!
//! Trees are arenas scoped to one call. Nothing is shared between calls.
//!

pub mod huffman;
pub mod min_heap;
pub mod tree;
