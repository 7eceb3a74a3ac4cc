//! The container ties the stages into one bit stream:
//!
//! 1. Elias(filename length), then each filename symbol as a fixed 8 bit code point.
//! 2. Elias(content length in symbols).
//! 3. Elias(number of distinct symbols), then for each symbol in code point order: its 8 bit code
//!    point, Elias(length of its Huffman code), and the code itself.
//! 4. The LZ77 triples, each Elias(offset), Elias(length), Huffman(next symbol), until the content
//!    length is reached.
//!
//! Every integer is Elias coded with the default offset, so zero is allowed everywhere.
//!

use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitvec::BitVec;
use crate::elias_omega::{elias_generalised_encode, DEFAULT_OFFSET};
use crate::error::{Error, Result};
use crate::huffman_coding::huffman::{DecodeTrie, EncodeTable};
use crate::lz77::triple_stream::{decode_triples_binary, encode_triples_binary};
use crate::tools::convert_base::to_binary_fixed;

/// Width of every stored code point.
pub const ASCII_FIXED_BINARY_WIDTH: usize = 8;
/// Largest code point that fits in the fixed width.
const MAX_CODE_POINT: u32 = (1 << ASCII_FIXED_BINARY_WIDTH) - 1;

pub const DEFAULT_WINDOW_SIZE: usize = 1000;
pub const DEFAULT_LOOKAHEAD_SIZE: usize = 300;

/// Tunable parameters of the LZ77 stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// How many already seen symbols a match may reach back into.
    pub window_size: usize,
    /// How many upcoming symbols a single match may cover. Must be at least 1.
    pub lookahead_size: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            lookahead_size: DEFAULT_LOOKAHEAD_SIZE,
        }
    }
}

/// Compress `content` into a container that also records `filename`.
pub fn compress(
    content: &str,
    filename: &str,
    window_size: usize,
    lookahead_size: usize,
) -> Result<BitVec> {
    let symbols = to_symbols(content)?;
    if symbols.is_empty() {
        return Err(Error::EmptyInput);
    }
    if lookahead_size == 0 {
        return Err(Error::invalid_parameter(
            "lookahead_size",
            "the lookahead must hold at least one symbol",
        ));
    }
    let name = to_symbols(filename)?;

    let mut out = BitVec::with_capacity(symbols.len() * 8);
    out.extend_from(&elias_generalised_encode(name.len() as u64, DEFAULT_OFFSET)?);
    for &symbol in &name {
        out.extend_from(&to_binary_fixed(symbol as u64, ASCII_FIXED_BINARY_WIDTH)?);
    }
    out.extend_from(&elias_generalised_encode(symbols.len() as u64, DEFAULT_OFFSET)?);
    debug!("Header for {:?} ends at {}", filename, out.loc());

    out.extend_from(&encode_text(&symbols, window_size, lookahead_size)?);
    info!(
        "Compressed {} symbols into {} bits ({} bytes)",
        symbols.len(),
        out.len(),
        (out.len() + 7) / 8
    );
    Ok(out)
}

/// Compress using the window and lookahead from `options`.
pub fn compress_with(content: &str, filename: &str, options: &CodecOptions) -> Result<BitVec> {
    compress(content, filename, options.window_size, options.lookahead_size)
}

/// Decompress a container, returning the stored filename and content.
pub fn decompress(bits: &BitVec) -> Result<(String, String)> {
    let mut reader = BitReader::new(bits);

    let name_len = reader.elias()?;
    let mut filename = String::new();
    for _ in 0..name_len {
        filename.push(read_code_point(&mut reader)?);
    }
    let content_len = reader.elias()?;
    if content_len == 0 {
        return Err(Error::corrupt("container announces no content"));
    }
    let content_len = usize::try_from(content_len)
        .map_err(|_| Error::Overflow(format!("content length {}", content_len)))?;
    debug!(
        "Found file {:?} with {} symbols, header ends at {}",
        filename,
        content_len,
        reader.loc()
    );

    let content: String = decode_text(&mut reader, content_len)?.into_iter().collect();
    info!(
        "Decompressed {} bits into {} symbols",
        reader.position(),
        content_len
    );
    Ok((filename, content))
}

/// Write the symbol table and the triples for already validated symbols.
pub fn encode_text(symbols: &[char], window_size: usize, lookahead_size: usize) -> Result<BitVec> {
    let table = EncodeTable::from_content(symbols)?;
    info!("Alphabet holds {} distinct symbols", table.len());
    let mut out = encode_character_metadata(&table)?;
    out.extend_from(&encode_triples_binary(
        symbols,
        &table,
        window_size,
        lookahead_size,
    )?);
    Ok(out)
}

/// Read the symbol table, then `symbol_count` symbols worth of triples.
pub fn decode_text(reader: &mut BitReader<'_>, symbol_count: usize) -> Result<Vec<char>> {
    let pairs = decode_character_metadata(reader)?;
    info!("Alphabet holds {} distinct symbols", pairs.len());
    let trie = DecodeTrie::from_pairs(&pairs)?;
    decode_triples_binary(reader, &trie, symbol_count)
}

/// Elias(number of symbols), then per symbol: code point, Elias(code length), code.
pub fn encode_character_metadata(table: &EncodeTable) -> Result<BitVec> {
    let mut out = elias_generalised_encode(table.len() as u64, DEFAULT_OFFSET)?;
    for (symbol, code) in table.pairs() {
        out.extend_from(&to_binary_fixed(symbol as u64, ASCII_FIXED_BINARY_WIDTH)?);
        out.extend_from(&elias_generalised_encode(code.len() as u64, DEFAULT_OFFSET)?);
        out.extend_from(code);
    }
    Ok(out)
}

/// Read back what `encode_character_metadata` wrote.
pub fn decode_character_metadata(reader: &mut BitReader<'_>) -> Result<Vec<(char, BitVec)>> {
    let count = reader.elias()?;
    if count > MAX_CODE_POINT as u64 + 1 {
        return Err(Error::corrupt(format!(
            "{} distinct symbols announced, at most {} fit",
            count,
            MAX_CODE_POINT + 1
        )));
    }
    let mut pairs = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let symbol = read_code_point(reader)?;
        let code_len = reader.elias()?;
        // A tree over 256 leaves is at most 255 deep
        if code_len == 0 || code_len > MAX_CODE_POINT as u64 {
            return Err(Error::corrupt(format!(
                "Huffman code length {} for {:?} at {}",
                code_len,
                symbol,
                reader.loc()
            )));
        }
        let code = reader.bits(code_len as usize)?;
        pairs.push((symbol, code));
    }
    Ok(pairs)
}

fn read_code_point(reader: &mut BitReader<'_>) -> Result<char> {
    let code = reader.fixed(ASCII_FIXED_BINARY_WIDTH)?;
    // Eight bits always make a valid char
    Ok(char::from(code as u8))
}

/// Check that every character of `text` fits the fixed code point width.
fn to_symbols(text: &str) -> Result<Vec<char>> {
    text.chars()
        .enumerate()
        .map(|(position, symbol)| {
            if symbol as u32 > MAX_CODE_POINT {
                Err(Error::UnsupportedSymbol {
                    symbol,
                    code: symbol as u32,
                    position,
                })
            } else {
                Ok(symbol)
            }
        })
        .collect()
}
