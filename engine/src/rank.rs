use serde::Serialize;

use crate::store::DocId;

/// One scored retrieval result. Rank order is descending score with ties
/// broken by ascending document id, so every ranking pass is
/// deterministic for a given candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    pub doc_id: DocId,
    pub score: u32,
}

impl Match {
    /// True when `self` ranks ahead of `other`.
    fn ranks_before(&self, other: &Match) -> bool {
        self.score > other.score || (self.score == other.score && self.doc_id < other.doc_id)
    }
}

/// Sort all matches into rank order. O(n log n).
pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_unstable_by(|a, b| b.score.cmp(&a.score).then(a.doc_id.cmp(&b.doc_id)));
}

/// Bounded top-K selection: scan the unsorted suffix for its best match
/// and swap it into place, once per output position. O(K·n), profitable
/// when K is much smaller than n. The pass covers the first `min(k, n)`
/// positions, so for every K the prefix is exactly what a full sort
/// would put there.
pub fn select_top_k(matches: &mut [Match], k: usize) {
    let n = matches.len();
    for i in 0..k.min(n) {
        let mut best = i;
        for j in (i + 1)..n {
            if matches[j].ranks_before(&matches[best]) {
                best = j;
            }
        }
        if best != i {
            matches.swap(i, best);
        }
    }
}
