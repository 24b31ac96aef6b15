use std::collections::BTreeSet;

use crate::index::{Field, InvertedIndex};
use crate::query;
use crate::rank::{self, Match};
use crate::record::Record;
use crate::score;
use crate::store::{DocId, DocumentStore};

/// How candidate documents are derived for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Consult the inverted index; only documents with an exact term hit
    /// become candidates.
    #[default]
    Indexed,
    /// Consider every document in the store. Slower, but substring
    /// scoring can then surface partial-term hits the exact-match index
    /// never admits.
    Scan,
}

/// How scored candidates are put into rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankStrategy {
    /// Sort every scored match. O(n log n).
    #[default]
    FullSort,
    /// Bounded selection of the best K positions. O(K·n).
    BoundedTopK,
}

/// The retrieval pipeline for one record corpus: a document store, the
/// inverted index derived from it, and the strategy knobs.
///
/// Queries take `&mut self` because the first query after a mutation
/// rebuilds the index in place; loaders that want read-only queries in
/// practice call [`SearchEngine::ensure_indexed`] once after bulk
/// insertion.
#[derive(Debug)]
pub struct SearchEngine<R> {
    store: DocumentStore<R>,
    index: InvertedIndex,
    search_strategy: SearchStrategy,
    rank_strategy: RankStrategy,
}

impl<R: Record> SearchEngine<R> {
    pub fn new() -> Self {
        Self::with_strategies(SearchStrategy::default(), RankStrategy::default())
    }

    pub fn with_strategies(search: SearchStrategy, rank: RankStrategy) -> Self {
        SearchEngine {
            store: DocumentStore::new(),
            index: InvertedIndex::new(),
            search_strategy: search,
            rank_strategy: rank,
        }
    }

    /// Insert a record and return its id. The index goes stale and
    /// rebuilds on the next query or `ensure_indexed` call.
    pub fn insert(&mut self, record: R) -> DocId {
        self.index.invalidate();
        self.store.insert(record)
    }

    /// Remove a record by id; later ids shift down, so a built index
    /// would dangle and is invalidated. Returns false when `id` is out
    /// of range.
    pub fn remove(&mut self, id: DocId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            self.index.invalidate();
        }
        removed
    }

    pub fn get(&self, id: DocId) -> Option<&R> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn store(&self) -> &DocumentStore<R> {
        &self.store
    }

    /// Rebuild the inverted index now if it is stale. Queries do this
    /// implicitly.
    pub fn ensure_indexed(&mut self) {
        self.index.build(&self.store);
    }

    /// Evaluate a boolean skill query and return the raw candidate ids,
    /// unscored. Cross-matching uses this directly.
    pub fn boolean_search(&mut self, query: &str) -> BTreeSet<DocId> {
        self.ensure_indexed();
        query::boolean_search(&self.index, query)
    }

    /// Skill search: derive candidates per the search strategy, score
    /// them, drop zero scores, rank, and return at most `max_results`
    /// matches.
    pub fn search(&mut self, query: &str, max_results: usize) -> Vec<Match> {
        let candidates = match self.search_strategy {
            SearchStrategy::Indexed => self.boolean_search(query),
            SearchStrategy::Scan => self.all_ids(),
        };
        tracing::debug!(candidates = candidates.len(), query, "skill search");
        self.rank_candidates(candidates, |r| score::skill_score(r, query), max_results)
    }

    /// Title search over the title-token index (or the whole store under
    /// the scan strategy), ranked by the title scoring rule. Corpora
    /// without titles yield no matches.
    pub fn search_by_title(&mut self, query: &str, max_results: usize) -> Vec<Match> {
        let candidates = match self.search_strategy {
            SearchStrategy::Indexed => {
                self.ensure_indexed();
                self.index.lookup(query, Field::Title)
            }
            SearchStrategy::Scan => self.all_ids(),
        };
        self.rank_candidates(candidates, |r| score::title_score(r, query), max_results)
    }

    fn all_ids(&self) -> BTreeSet<DocId> {
        (0..self.store.len() as DocId).collect()
    }

    fn rank_candidates(
        &self,
        candidates: BTreeSet<DocId>,
        score_one: impl Fn(&R) -> u32,
        max_results: usize,
    ) -> Vec<Match> {
        let mut matches: Vec<Match> = candidates
            .into_iter()
            .filter_map(|id| {
                let record = self.store.get(id)?;
                let score = score_one(record);
                (score > 0).then_some(Match { doc_id: id, score })
            })
            .collect();

        match self.rank_strategy {
            RankStrategy::FullSort => rank::sort_matches(&mut matches),
            RankStrategy::BoundedTopK => rank::select_top_k(&mut matches, max_results),
        }
        matches.truncate(max_results);
        matches
    }
}

impl<R: Record> Default for SearchEngine<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Job;

    fn engine_with(search: SearchStrategy, rank: RankStrategy) -> SearchEngine<Job> {
        let mut engine = SearchEngine::with_strategies(search, rank);
        engine.insert(Job::new(1, "Data Analyst", "SQL, Python, Power BI"));
        engine.insert(Job::new(2, "Backend Developer", "Java, Spring Boot, SQL"));
        engine.insert(Job::new(3, "ML Engineer", "Python, Machine Learning"));
        engine.insert(Job::new(4, "Frontend Developer", "JavaScript, React"));
        engine
    }

    #[test]
    fn search_ranks_by_score_then_id() {
        let mut engine = engine_with(SearchStrategy::Indexed, RankStrategy::FullSort);
        let hits = engine.search("Python, SQL", 10);
        let ids: Vec<DocId> = hits.iter().map(|m| m.doc_id).collect();
        // 0 carries both terms; 1 and 2 carry one each and tie, id order
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(hits[0].score > hits[1].score);
        assert_eq!(hits[1].score, hits[2].score);
    }

    #[test]
    fn max_results_truncates() {
        let mut engine = engine_with(SearchStrategy::Indexed, RankStrategy::FullSort);
        assert_eq!(engine.search("Python, SQL", 2).len(), 2);
        assert_eq!(engine.search("Python, SQL", 0).len(), 0);
    }

    #[test]
    fn unknown_query_matches_nothing() {
        let mut engine = engine_with(SearchStrategy::Indexed, RankStrategy::FullSort);
        assert!(engine.search("COBOL", 10).is_empty());
    }

    #[test]
    fn search_on_empty_engine_is_empty() {
        let mut engine: SearchEngine<Job> = SearchEngine::new();
        assert!(engine.search("Python", 10).is_empty());
        assert!(engine.search_by_title("Analyst", 10).is_empty());
    }

    #[test]
    fn scan_strategy_scores_everything() {
        let mut indexed = engine_with(SearchStrategy::Indexed, RankStrategy::FullSort);
        let mut scan = engine_with(SearchStrategy::Scan, RankStrategy::FullSort);
        // exact phrase with no substring collisions: strategies agree
        assert_eq!(indexed.search("Spring Boot", 10), scan.search("Spring Boot", 10));
        // partial term: only substring scoring can see "script" inside
        // "javascript", so the index filter finds nothing
        assert!(indexed.search("Script", 10).is_empty());
        let partial = scan.search("Script", 10);
        assert_eq!(partial.len(), 1);
        assert_eq!(partial[0].doc_id, 3);
    }

    #[test]
    fn bounded_top_k_agrees_with_full_sort() {
        let mut full = engine_with(SearchStrategy::Indexed, RankStrategy::FullSort);
        let mut bounded = engine_with(SearchStrategy::Indexed, RankStrategy::BoundedTopK);
        for k in 0..5 {
            assert_eq!(full.search("Python, SQL", k), bounded.search("Python, SQL", k));
        }
    }

    #[test]
    fn title_search_uses_title_scoring() {
        let mut engine = engine_with(SearchStrategy::Indexed, RankStrategy::FullSort);
        let hits = engine.search_by_title("Developer", 10);
        let ids: Vec<DocId> = hits.iter().map(|m| m.doc_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn mutation_invalidates_and_queries_rebuild() {
        let mut engine = engine_with(SearchStrategy::Indexed, RankStrategy::FullSort);
        assert_eq!(engine.search("Rust", 10).len(), 0);

        engine.insert(Job::new(5, "Systems Programmer", "Rust, Linux"));
        assert_eq!(engine.search("Rust", 10).len(), 1);

        // removing a record shifts every later id down; the next query
        // rebuilds against the new ids
        assert!(engine.remove(0));
        assert_eq!(engine.search("Rust", 10)[0].doc_id, 3);
        assert_eq!(engine.search("Java", 10)[0].doc_id, 0);
    }

    #[test]
    fn remove_of_bad_id_keeps_index_fresh() {
        let mut engine = engine_with(SearchStrategy::Indexed, RankStrategy::FullSort);
        engine.ensure_indexed();
        assert!(!engine.remove(99));
        assert_eq!(engine.search("Java", 10).len(), 1);
    }
}
