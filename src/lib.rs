//! Lossless single file compressor built from LZ77, Huffman coding and Elias-omega codes.
//!
//! Version 0.1.0
//!
//! The content is parsed into LZ77 (offset, length, next symbol) triples. Matches are found with
//! the Z-algorithm over the lookahead, a sentinel and the search window. Offsets and lengths are
//! written as Elias-omega codes and each next symbol as a Huffman code. A small header records the
//! original filename, the content length and the Huffman code of every symbol.
//!
//! Input text may only hold characters with code points 0 to 255.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> lzomega -z test.txt`
//!
//! This will compress the file and create the file test.txt.bin. `lzomega -d test.txt.bin`
//! restores test.txt under the name stored in the container.
//!
//! In-memory use goes through [`compress`] and [`decompress`]:
//!
//! ```
//! let bits = lzomega::compress("abracadabra", "magic.txt", 1000, 300).unwrap();
//! let (name, content) = lzomega::decompress(&bits).unwrap();
//! assert_eq!((name.as_str(), content.as_str()), ("magic.txt", "abracadabra"));
//! ```
//!
#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod compression;
pub mod elias_omega;
pub mod error;
pub mod huffman_coding;
pub mod lz77;
pub mod tools;

pub use bitstream::bitvec::BitVec;
pub use compression::container::{compress, compress_with, decompress, CodecOptions};
pub use error::{Error, Result};
