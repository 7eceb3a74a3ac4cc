//! The compression module manages both directions of the codec.
//!
//! Compression happens in the following steps:
//! - Frequency count: count every symbol of the content.
//! - Huffman coding: build a prefix-free code for each distinct symbol.
//! - LZ77: parse the content into (offset, length, next symbol) triples.
//! - Serialisation: offsets and lengths are Elias-omega coded, next symbols are Huffman coded.
//! - Container: the filename, content length and symbol table go in front of the triples.
//!
//! Decompression follows the inverse of the compression process.
//! - Read the filename and content length.
//! - Rebuild the Huffman decode trie from the symbol table.
//! - Read triples and replay them until the content length is reached.
//!
//! `container` works purely in memory. `compress` and `decompress` wrap it with file handling.
//!

pub mod compress;
pub mod container;
pub mod decompress;
