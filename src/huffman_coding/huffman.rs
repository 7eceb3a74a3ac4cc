use log::{debug, trace};

use super::min_heap::MinHeap;
use super::tree::{HuffmanTree, VertexId};
use crate::bitstream::bitvec::BitVec;
use crate::error::{Error, Result};

/// Count each symbol. The table is dense over code points 0 up to the largest one present; an
/// empty input gives an empty table.
pub fn frequency_table(symbols: &[char]) -> Vec<u64> {
    let max = match symbols.iter().map(|&c| c as usize).max() {
        Some(max) => max,
        None => return vec![],
    };
    let mut freqs = vec![0_u64; max + 1];
    symbols.iter().for_each(|&c| freqs[c as usize] += 1);
    freqs
}

/// Build the Huffman tree for a frequency table. Leaves are seeded in code point order and the two
/// lightest vertices are merged until one is left, the first one popped going on the 0 edge.
pub fn build_tree(freqs: &[u64]) -> Result<HuffmanTree> {
    let mut tree = HuffmanTree::new();
    let mut heap = MinHeap::with_capacity(freqs.len(), |a: &(u64, VertexId), b: &(u64, VertexId)| {
        a.0.cmp(&b.0)
    });

    freqs
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .filter_map(|(code, &count)| char::from_u32(code as u32).map(|c| (c, count)))
        .for_each(|(symbol, count)| heap.push((count, tree.add_leaf(symbol, count))));

    while heap.len() > 1 {
        if let (Some(zero), Some(one)) = (heap.pop(), heap.pop()) {
            let id = tree.join(zero.1, one.1);
            heap.push((zero.0 + one.0, id));
        }
    }

    let (_, root) = heap.pop().ok_or(Error::EmptyInput)?;
    tree.set_root(root);
    Ok(tree)
}

/// Huffman codes indexed by code point. Only symbols present in the input have a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeTable {
    codes: Vec<Option<BitVec>>,
}

impl EncodeTable {
    /// Build codes for the symbols counted in `freqs`.
    ///
    /// With only one distinct symbol the tree is a bare leaf and its path is empty. That symbol
    /// is given the one bit code `0` instead, so every symbol costs at least one bit to decode.
    pub fn from_frequencies(freqs: &[u64]) -> Result<Self> {
        let tree = build_tree(freqs)?;
        let mut codes: Vec<Option<BitVec>> = vec![None; freqs.len()];
        for (symbol, mut code) in tree.leaf_paths() {
            if code.is_empty() {
                code.push(false);
            }
            trace!("Huffman code for {:?} is {}", symbol, code);
            codes[symbol as usize] = Some(code);
        }
        debug!(
            "Built {} Huffman codes from a tree of {} vertices",
            codes.iter().flatten().count(),
            tree.len()
        );
        Ok(Self { codes })
    }

    /// Count the symbols of `content` and build their codes.
    pub fn from_content(content: &[char]) -> Result<Self> {
        if content.is_empty() {
            return Err(Error::EmptyInput);
        }
        Self::from_frequencies(&frequency_table(content))
    }

    /// The code for `symbol`, if it was in the input.
    pub fn code(&self, symbol: char) -> Option<&BitVec> {
        self.codes.get(symbol as usize).and_then(|c| c.as_ref())
    }

    /// Every (symbol, code) pair in ascending code point order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, &BitVec)> + '_ {
        self.codes.iter().enumerate().filter_map(|(i, code)| {
            let code = code.as_ref()?;
            char::from_u32(i as u32).map(|c| (c, code))
        })
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Look up the code for one symbol.
pub fn huffman_encode(symbol: char, table: &EncodeTable) -> Result<&BitVec> {
    table.code(symbol).ok_or_else(|| {
        Error::invalid_parameter(
            "symbol",
            format!("{:?} has no Huffman code in this table", symbol),
        )
    })
}

/// Trie built from (symbol, code) pairs, walked bit by bit to decode.
#[derive(Debug, Clone)]
pub struct DecodeTrie {
    tree: HuffmanTree,
}

impl DecodeTrie {
    /// Build the trie. Codes must be non-empty and no code may be a prefix of another.
    pub fn from_pairs(pairs: &[(char, BitVec)]) -> Result<Self> {
        let mut tree = HuffmanTree::with_empty_root();
        let root = tree.root().ok_or_else(|| Error::corrupt("decode trie has no root"))?;

        for (symbol, code) in pairs {
            if code.is_empty() {
                return Err(Error::corrupt(format!("empty Huffman code for {:?}", symbol)));
            }
            let mut current = root;
            for bit in code.iter() {
                if let Some(other) = tree.vertex(current).symbol {
                    return Err(Error::corrupt(format!(
                        "Huffman code of {:?} is a prefix of the code {} for {:?}",
                        other, code, symbol
                    )));
                }
                current = tree.child_or_insert(current, bit);
            }
            let vertex = tree.vertex_mut(current);
            if vertex.symbol.is_some() || !vertex.is_leaf() {
                return Err(Error::corrupt(format!(
                    "Huffman code {} for {:?} collides with another code",
                    code, symbol
                )));
            }
            vertex.symbol = Some(*symbol);
        }
        Ok(Self { tree })
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }
}

/// Decode one symbol starting at bit `start`. Returns the symbol and the number of bits read.
pub fn huffman_decode(sequence: &BitVec, start: usize, trie: &DecodeTrie) -> Result<(char, usize)> {
    let tree = &trie.tree;
    let mut current = tree
        .root()
        .ok_or(Error::InvalidCode { position: start })?;
    let mut idx = start;
    loop {
        let bit = sequence.get(idx).ok_or(Error::UnexpectedEnd {
            position: sequence.len(),
        })?;
        idx += 1;
        current = tree
            .vertex(current)
            .child(bit)
            .ok_or(Error::InvalidCode { position: start })?;
        let vertex = tree.vertex(current);
        if vertex.is_leaf() {
            return vertex
                .symbol
                .map(|symbol| (symbol, idx - start))
                .ok_or(Error::InvalidCode { position: start });
        }
    }
}
