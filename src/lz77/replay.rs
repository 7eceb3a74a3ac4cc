use super::Triple;
use crate::error::{Error, Result};

/// Append the symbols described by one triple to `output`.
///
/// The copy runs one symbol at a time, so when the offset is shorter than the length the symbols
/// just written become the source for the rest of the run and the referenced span repeats
/// cyclically.
pub fn replay(output: &mut Vec<char>, triple: &Triple) -> Result<()> {
    if triple.offset > output.len() || (triple.offset == 0 && triple.length > 0) {
        return Err(Error::corrupt(format!(
            "triple {} refers back past the start of {} decoded symbols",
            triple,
            output.len()
        )));
    }
    let start = output.len() - triple.offset;
    // Each copied symbol sits before the end of output, so start + i never passes its length
    for i in 0..triple.length {
        let symbol = output[start + i];
        output.push(symbol);
    }
    output.push(triple.next_symbol);
    Ok(())
}

/// Rebuild content from a complete list of triples.
pub fn lz77_decode(triples: &[Triple]) -> Result<String> {
    let mut output: Vec<char> = Vec::new();
    for triple in triples {
        replay(&mut output, triple)?;
    }
    Ok(output.into_iter().collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lz77::parse::lz77_encode;
    use proptest::prelude::*;

    #[test]
    fn literal_test() {
        let mut out = vec![];
        replay(&mut out, &Triple::literal('x')).unwrap();
        assert_eq!(out, vec!['x']);
    }

    #[test]
    fn plain_copy_test() {
        let mut out: Vec<char> = "abcd".chars().collect();
        replay(&mut out, &Triple::new(4, 2, 'z')).unwrap();
        assert_eq!(out.iter().collect::<String>(), "abcdabz");
    }

    #[test]
    fn self_overlap_test() {
        let triples = lz77_encode(&['a'; 8], 10, 10).unwrap();
        assert_eq!(triples, vec![Triple::literal('a'), Triple::new(1, 6, 'a')]);
        assert_eq!(lz77_decode(&triples).unwrap(), "aaaaaaaa");

        // Period two tiling: "ab" copied five symbols on
        let mut out: Vec<char> = "xab".chars().collect();
        replay(&mut out, &Triple::new(2, 5, '!')).unwrap();
        let direct: String = std::iter::once('x')
            .chain("ab".chars().cycle().take(7))
            .chain(std::iter::once('!'))
            .collect();
        assert_eq!(out.iter().collect::<String>(), direct);
        assert_eq!(direct, "xabababa!");
    }

    #[test]
    fn zero_length_with_offset_test() {
        let mut out: Vec<char> = "ab_".chars().collect();
        replay(&mut out, &Triple::new(2, 0, 'b')).unwrap();
        assert_eq!(out.iter().collect::<String>(), "ab_b");
    }

    #[test]
    fn bad_offset_test() {
        let mut out: Vec<char> = "ab".chars().collect();
        assert!(matches!(
            replay(&mut out, &Triple::new(3, 1, 'c')),
            Err(Error::CorruptStream(_))
        ));
        assert!(matches!(
            replay(&mut out, &Triple::new(0, 1, 'c')),
            Err(Error::CorruptStream(_))
        ));
        // Nothing was written by the failed calls
        assert_eq!(out, vec!['a', 'b']);
    }

    #[test]
    fn ratatat_round_trip_test() {
        let content: Vec<char> = "ratatatatat_a_rat_at_a_rat".chars().collect();
        let triples = lz77_encode(&content, 15, 15).unwrap();
        assert_eq!(lz77_decode(&triples).unwrap(), "ratatatatat_a_rat_at_a_rat");
    }

    proptest! {
        #[test]
        fn round_trip(s in "[abc_]{1,80}", window in 0_usize..20, lookahead in 1_usize..20) {
            let content: Vec<char> = s.chars().collect();
            let triples = lz77_encode(&content, window, lookahead).unwrap();
            prop_assert_eq!(lz77_decode(&triples).unwrap(), s);
        }
    }
}
