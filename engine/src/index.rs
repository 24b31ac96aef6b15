use std::collections::{BTreeSet, HashMap};

use crate::record::Record;
use crate::store::{DocId, DocumentStore};
use crate::text::{normalize, tokenize};

/// Which of the three per-field mappings a lookup consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Whole normalized skill phrases, matched exactly.
    Skill,
    /// Individual title tokens, matched with AND semantics.
    Title,
    /// Individual body-text tokens, matched with AND semantics.
    Text,
}

/// Tokens shorter than this are not indexed in the tokenized mappings.
/// Skill phrases go in verbatim regardless, so a single-letter skill
/// like "R" stays searchable.
const MIN_TOKEN_LEN: usize = 2;

/// Inverted index over a document store: three independent mappings from
/// normalized term to the ordered set of document ids containing it.
/// Purely derived data; it can always be rebuilt from the store.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    pub skill: HashMap<String, BTreeSet<DocId>>,
    pub title: HashMap<String, BTreeSet<DocId>>,
    pub text: HashMap<String, BTreeSet<DocId>>,
    built: bool,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// True once `build` has run and no invalidation happened since.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Forget the built state; the next `build` recomputes from scratch.
    /// Called by the engine whenever the underlying store mutates.
    pub fn invalidate(&mut self) {
        self.built = false;
    }

    /// Populate the three mappings from the store. A no-op when already
    /// built; otherwise the mappings are cleared and recomputed, so
    /// calling this twice leaves exactly the state of calling it once.
    pub fn build<R: Record>(&mut self, store: &DocumentStore<R>) {
        if self.built {
            return;
        }
        self.skill.clear();
        self.title.clear();
        self.text.clear();

        for (id, record) in store.iter() {
            for part in record.skills().split(',') {
                let phrase = normalize(part);
                if !phrase.is_empty() {
                    self.skill.entry(phrase).or_default().insert(id);
                }
            }
            if let Some(title) = record.title() {
                Self::add_tokens(&mut self.title, title, id);
            }
            Self::add_tokens(&mut self.text, record.text(), id);
        }

        self.built = true;
        tracing::debug!(
            docs = store.len(),
            skill_terms = self.skill.len(),
            title_terms = self.title.len(),
            text_terms = self.text.len(),
            "inverted index built"
        );
    }

    fn add_tokens(map: &mut HashMap<String, BTreeSet<DocId>>, raw: &str, id: DocId) {
        for token in tokenize(&normalize(raw)) {
            if token.len() >= MIN_TOKEN_LEN {
                map.entry(token).or_default().insert(id);
            }
        }
    }

    /// Posting-set lookup for one term. Skill terms are matched as exact
    /// normalized phrases. Title and text terms are tokenized and every
    /// token's posting set intersected; a single absent token empties
    /// the result.
    pub fn lookup(&self, term: &str, field: Field) -> BTreeSet<DocId> {
        let norm = normalize(term);
        let map = match field {
            Field::Skill => return self.skill.get(&norm).cloned().unwrap_or_default(),
            Field::Title => &self.title,
            Field::Text => &self.text,
        };

        let mut result: Option<BTreeSet<DocId>> = None;
        for token in tokenize(&norm) {
            let Some(postings) = map.get(&token) else {
                return BTreeSet::new();
            };
            result = Some(match result {
                None => postings.clone(),
                Some(acc) => acc.intersection(postings).copied().collect(),
            });
        }
        result.unwrap_or_default()
    }
}
