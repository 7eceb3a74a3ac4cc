use log::{debug, trace};

use super::z_alg::z_array;
use super::Triple;
use crate::error::{Error, Result};

/// Find the longest match for the lookahead starting at `position` inside the window that ends
/// there. Returns None when the window is empty or nothing in it matches.
///
/// When several window positions give the same longest match, the one nearest the start of the
/// window (the largest offset) wins.
pub fn find_match(
    content: &[char],
    position: usize,
    window_size: usize,
    lookahead_size: usize,
) -> Option<Triple> {
    let window_start = position.saturating_sub(window_size);
    let lookahead_end = content.len().min(position.saturating_add(lookahead_size));
    if window_start == position || position >= lookahead_end {
        return None;
    }

    let window = &content[window_start..position];
    let lookahead = &content[position..lookahead_end];

    // The sentinel is larger than every symbol here, so no match can run across it.
    let sentinel = window
        .iter()
        .chain(lookahead)
        .map(|&c| c as u32)
        .max()
        .unwrap_or(0)
        + 1;
    let mut search: Vec<u32> = Vec::with_capacity(2 * lookahead.len() + window.len() + 1);
    search.extend(lookahead.iter().map(|&c| c as u32));
    search.push(sentinel);
    search.extend(window.iter().map(|&c| c as u32));
    search.extend(lookahead.iter().map(|&c| c as u32));

    let z = z_array(&search);
    // Only start positions inside the window count. The trailing lookahead copy is there so
    // matches can run on past the end of the window.
    let first = lookahead.len() + 1;
    let (window_idx, mut length) = z[first..first + window.len()]
        .iter()
        .map(|v| v.unwrap_or(0))
        .enumerate()
        .fold((0, 0), |best, (idx, len)| if len > best.1 { (idx, len) } else { best });

    if length == 0 {
        return None;
    }
    // Always leave a symbol after the match to be the next symbol.
    if position + length >= content.len() {
        length -= 1;
    }
    let offset = position - (window_start + window_idx);
    Some(Triple::new(offset, length, content[position + length]))
}

/// Lazily parses content into LZ77 triples, one per call to next().
#[derive(Debug)]
pub struct Lz77Parser<'a> {
    content: &'a [char],
    position: usize,
    window_size: usize,
    lookahead_size: usize,
}

impl<'a> Lz77Parser<'a> {
    /// Create a parser. The lookahead must hold at least one symbol; a zero window is allowed and
    /// turns every triple into a literal.
    pub fn new(content: &'a [char], window_size: usize, lookahead_size: usize) -> Result<Self> {
        if lookahead_size == 0 {
            return Err(Error::invalid_parameter(
                "lookahead_size",
                "the lookahead must hold at least one symbol",
            ));
        }
        Ok(Self {
            content,
            position: 0,
            window_size,
            lookahead_size,
        })
    }

    /// Position of the next symbol to be parsed.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a> Iterator for Lz77Parser<'a> {
    type Item = Triple;

    fn next(&mut self) -> Option<Self::Item> {
        let symbol = *self.content.get(self.position)?;
        let triple = find_match(
            self.content,
            self.position,
            self.window_size,
            self.lookahead_size,
        )
        .unwrap_or_else(|| Triple::literal(symbol));
        trace!("{} at {}", triple, self.position);
        self.position += triple.length + 1;
        Some(triple)
    }
}

/// Parse all of `content` into triples.
pub fn lz77_encode(content: &[char], window_size: usize, lookahead_size: usize) -> Result<Vec<Triple>> {
    let triples: Vec<Triple> = Lz77Parser::new(content, window_size, lookahead_size)?.collect();
    debug!(
        "LZ77 parsed {} symbols into {} triples ({} literal)",
        content.len(),
        triples.len(),
        triples.iter().filter(|t| t.is_literal()).count()
    );
    Ok(triples)
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty_window_test() {
        let content = chars("abc");
        assert_eq!(find_match(&content, 0, 10, 10), None);
        assert_eq!(find_match(&content, 2, 0, 10), None);
    }

    #[test]
    fn no_match_test() {
        let content = chars("abc");
        assert_eq!(find_match(&content, 2, 10, 10), None);
    }

    #[test]
    fn simple_match_test() {
        let content = chars("abcabcd");
        assert_eq!(find_match(&content, 3, 10, 10), Some(Triple::new(3, 3, 'd')));
    }

    #[test]
    fn overlapping_match_test() {
        // The match starts in the window and runs on into the lookahead
        let content = chars("aaaaaaaa");
        assert_eq!(find_match(&content, 1, 10, 10), Some(Triple::new(1, 6, 'a')));
    }

    #[test]
    fn match_to_end_is_shortened_test() {
        let content = chars("abab");
        assert_eq!(find_match(&content, 2, 10, 10), Some(Triple::new(2, 1, 'b')));
        // A one symbol match at the very end shrinks to nothing but keeps its offset
        let content = chars("ab_b");
        assert_eq!(find_match(&content, 3, 10, 10), Some(Triple::new(2, 0, 'b')));
    }

    #[test]
    fn tie_break_prefers_largest_offset_test() {
        let content = chars("abxabyabz");
        // "ab" occurs at 0 and 3 in the window; the oldest is chosen
        assert_eq!(find_match(&content, 6, 10, 10), Some(Triple::new(6, 2, 'z')));
        // Once the window no longer reaches 0, the occurrence at 3 is the only candidate
        assert_eq!(find_match(&content, 6, 4, 10), Some(Triple::new(3, 2, 'z')));
    }

    #[test]
    fn lookahead_bounds_match_test() {
        let content = chars("abcdabcdx");
        assert_eq!(find_match(&content, 4, 10, 2), Some(Triple::new(4, 2, 'c')));
    }

    #[test]
    fn parse_ratatat_test() {
        let content = chars("ratatatatat_a_rat_at_a_rat");
        let triples = lz77_encode(&content, 15, 15).unwrap();
        assert_eq!(
            triples,
            vec![
                Triple::new(0, 0, 'r'),
                Triple::new(0, 0, 'a'),
                Triple::new(0, 0, 't'),
                Triple::new(2, 8, '_'),
                Triple::new(11, 1, '_'),
                Triple::new(14, 3, '_'),
                Triple::new(9, 7, 't'),
            ]
        );
    }

    #[test]
    fn parse_aacaacabcaba_test() {
        let content = chars("aacaacabcaba");
        let triples = lz77_encode(&content, 1000, 300).unwrap();
        assert_eq!(
            triples,
            vec![
                Triple::new(0, 0, 'a'),
                Triple::new(1, 1, 'c'),
                Triple::new(3, 4, 'b'),
                Triple::new(3, 3, 'a'),
            ]
        );
    }

    #[test]
    fn zero_window_test() {
        let content = chars("aaaa");
        let triples = lz77_encode(&content, 0, 5).unwrap();
        assert_eq!(triples.len(), 4);
        assert!(triples.iter().all(|t| t.is_literal()));
    }

    #[test]
    fn zero_lookahead_rejected_test() {
        let content = chars("abc");
        assert!(matches!(
            Lz77Parser::new(&content, 10, 0),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn parser_is_lazy_test() {
        let content = chars("abab");
        let mut parser = Lz77Parser::new(&content, 10, 10).unwrap();
        assert_eq!(parser.next(), Some(Triple::literal('a')));
        assert_eq!(parser.position(), 1);
        assert_eq!(parser.next(), Some(Triple::literal('b')));
        assert_eq!(parser.next(), Some(Triple::new(2, 1, 'b')));
        assert_eq!(parser.next(), None);
    }
}
