use log::{debug, trace};

use super::parse::Lz77Parser;
use super::replay::replay;
use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitvec::BitVec;
use crate::elias_omega::{elias_generalised_encode, DEFAULT_OFFSET};
use crate::error::{Error, Result};
use crate::huffman_coding::huffman::{huffman_encode, DecodeTrie, EncodeTable};

/// Parse `content` and write each triple as Elias(offset), Elias(length), Huffman(next symbol).
pub fn encode_triples_binary(
    content: &[char],
    table: &EncodeTable,
    window_size: usize,
    lookahead_size: usize,
) -> Result<BitVec> {
    let mut out = BitVec::with_capacity(content.len() * 4);
    let mut count = 0;
    for triple in Lz77Parser::new(content, window_size, lookahead_size)? {
        out.extend_from(&elias_generalised_encode(triple.offset as u64, DEFAULT_OFFSET)?);
        out.extend_from(&elias_generalised_encode(triple.length as u64, DEFAULT_OFFSET)?);
        out.extend_from(huffman_encode(triple.next_symbol, table)?);
        count += 1;
    }
    debug!("Wrote {} triples in {} bits", count, out.len());
    Ok(out)
}

/// Read triples from `reader` and replay them until `symbol_count` symbols are rebuilt.
pub fn decode_triples_binary(
    reader: &mut BitReader<'_>,
    trie: &DecodeTrie,
    symbol_count: usize,
) -> Result<Vec<char>> {
    // Capacity is only a hint; a corrupt count must not trigger a huge allocation
    let mut output: Vec<char> = Vec::with_capacity(symbol_count.min(reader.remaining()));
    let mut count = 0;
    while output.len() < symbol_count {
        let at = reader.position();
        let offset = to_usize(reader.elias()?, at)?;
        let length = to_usize(reader.elias()?, at)?;
        let next_symbol = reader.huffman(trie)?;
        let triple = super::Triple::new(offset, length, next_symbol);
        trace!("{} at bit {}", triple, at);

        // output.len() < symbol_count inside the loop, so the subtraction cannot wrap
        if length >= symbol_count - output.len() {
            return Err(Error::corrupt(format!(
                "triple {} at bit {} overruns the {} symbols announced",
                triple, at, symbol_count
            )));
        }
        replay(&mut output, &triple)?;
        count += 1;
    }
    debug!(
        "Read {} triples for {} symbols, stopping at {}",
        count,
        output.len(),
        reader.loc()
    );
    Ok(output)
}

fn to_usize(value: u64, at: usize) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| Error::Overflow(format!("{} at bit {} does not fit in usize", value, at)))
}
