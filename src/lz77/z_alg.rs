//! Gusfield's Z-algorithm.
//!
//! For every position `i > 0` of a sequence, finds the length of the longest substring starting
//! at `i` that is also a prefix of the whole sequence. Runs in linear time by remembering the
//! rightmost match found so far (the Z-box) and reusing earlier values inside it.
//!

/// Compute the Z-array of `pat`. Index 0 is None (the whole sequence trivially matches itself),
/// and sequences shorter than two symbols give an all-None array.
pub fn z_array<T: PartialEq>(pat: &[T]) -> Vec<Option<usize>> {
    let n = pat.len();
    if n < 2 {
        return vec![None; n];
    }

    let mut z = vec![0_usize; n];
    // Rightmost Z-box found so far, as the half open range [l, r)
    let mut l = 0;
    let mut r = 0;

    for k in 1..n {
        if k >= r {
            // Outside any box, so compare from scratch
            z[k] = match_len(pat, 0, k);
            if z[k] > 0 {
                l = k;
                r = k + z[k];
            }
        } else {
            assert!(
                0 < l && l < k && r <= n,
                "z-box [{}, {}) invalid at position {}",
                l,
                r,
                k
            );
            let inherited = z[k - l];
            let remaining = r - k;
            if inherited < remaining {
                z[k] = inherited;
            } else if inherited > remaining {
                z[k] = remaining;
            } else {
                // The earlier match reaches exactly to the end of the box. Only the symbols past
                // the box are unknown, so extend from there.
                z[k] = remaining + match_len(pat, remaining, r);
                l = k;
                r = k + z[k];
            }
        }
    }

    let mut result: Vec<Option<usize>> = z.into_iter().map(Some).collect();
    result[0] = None;
    result
}

/// Count how many symbols match comparing pat[a..] against pat[b..], with a < b.
#[inline(always)]
fn match_len<T: PartialEq>(pat: &[T], a: usize, b: usize) -> usize {
    pat[b..]
        .iter()
        .zip(&pat[a..])
        .take_while(|(x, y)| x == y)
        .count()
}
