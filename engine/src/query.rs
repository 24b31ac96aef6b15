use std::collections::BTreeSet;

use crate::index::{Field, InvertedIndex};
use crate::store::DocId;
use crate::text::normalize;

/// Evaluate the boolean skill-query language against a built index.
/// First matching rule wins:
///
/// 1. A comma anywhere in the raw query splits it into terms OR-ed
///    together, each an exact skill-phrase lookup.
/// 2. Otherwise a `" or "` in the normalized query splits it into two
///    phrases OR-ed together. Only the first occurrence splits, so
///    `"a or b or c"` looks up `"a"` and `"b or c"`; chained OR is
///    deliberately not part of the language.
/// 3. Anything else is a single exact phrase lookup.
///
/// The comma check runs on the raw query because normalization strips
/// commas. A phrase with no postings contributes nothing; an unknown
/// query simply yields an empty set.
pub fn boolean_search(index: &InvertedIndex, query: &str) -> BTreeSet<DocId> {
    if query.contains(',') {
        let mut result = BTreeSet::new();
        for part in query.split(',') {
            let part = part.trim();
            if !part.is_empty() {
                result.extend(index.lookup(part, Field::Skill));
            }
        }
        return result;
    }

    let norm = normalize(query);
    if let Some(pos) = norm.find(" or ") {
        let mut result = index.lookup(&norm[..pos], Field::Skill);
        result.extend(index.lookup(&norm[pos + 4..], Field::Skill));
        return result;
    }

    index.lookup(&norm, Field::Skill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, Resume};
    use crate::store::DocumentStore;
    use proptest::prelude::*;

    fn resume_index() -> (DocumentStore<Resume>, InvertedIndex) {
        let mut store = DocumentStore::new();
        store.insert(Resume::new(1, "Python, SQL"));
        store.insert(Resume::new(2, "Java, Spring Boot"));
        store.insert(Resume::new(3, "Python, Docker"));
        store.insert(Resume::new(4, "Machine Learning, Python"));
        let mut index = InvertedIndex::new();
        index.build(&store);
        (store, index)
    }

    fn ids(set: BTreeSet<DocId>) -> Vec<DocId> {
        set.into_iter().collect()
    }

    #[test]
    fn single_phrase_is_exact() {
        let (_, index) = resume_index();
        assert_eq!(ids(boolean_search(&index, "Python")), vec![0, 2, 3]);
        assert_eq!(ids(boolean_search(&index, "machine learning")), vec![3]);
        assert!(boolean_search(&index, "machine").is_empty());
    }

    #[test]
    fn comma_unions_each_term() {
        let (_, index) = resume_index();
        assert_eq!(ids(boolean_search(&index, "Java, Docker")), vec![1, 2]);
        // empty segments are skipped
        assert_eq!(ids(boolean_search(&index, "Java, , Docker,")), vec![1, 2]);
    }

    #[test]
    fn comma_union_equals_set_union() {
        let (_, index) = resume_index();
        let mut expected = boolean_search(&index, "Python");
        expected.extend(boolean_search(&index, "SQL"));
        assert_eq!(boolean_search(&index, "Python, SQL"), expected);
    }

    #[test]
    fn or_keyword_unions_two_phrases() {
        let (_, index) = resume_index();
        assert_eq!(ids(boolean_search(&index, "sql or docker")), vec![0, 2]);
        assert_eq!(ids(boolean_search(&index, "SQL OR Docker")), vec![0, 2]);
    }

    #[test]
    fn chained_or_splits_only_once() {
        let (_, index) = resume_index();
        // right side is the literal phrase "docker or java", which no
        // record carries; only the sql lookup contributes
        assert_eq!(ids(boolean_search(&index, "sql or docker or java")), vec![0]);
    }

    #[test]
    fn unknown_terms_yield_empty() {
        let (_, index) = resume_index();
        assert!(boolean_search(&index, "Fortran").is_empty());
        assert!(boolean_search(&index, "").is_empty());
    }

    #[test]
    fn comma_results_agree_with_linear_scan() {
        let (store, index) = resume_index();
        let query = "python, spring boot";
        let hits = boolean_search(&index, query);

        let expected: BTreeSet<DocId> = store
            .iter()
            .filter(|(_, r)| {
                r.skills()
                    .split(',')
                    .map(|s| crate::text::normalize(s))
                    .any(|s| s == "python" || s == "spring boot")
            })
            .map(|(id, _)| id)
            .collect();
        assert_eq!(hits, expected);
    }

    const VOCAB: [&str; 6] = ["Python", "SQL", "Machine Learning", "Java", "Git", "Docker"];

    proptest! {
        /// Exact-phrase lookups return precisely the documents carrying
        /// the phrase as one of their comma-separated skill entries.
        #[test]
        fn exact_phrase_agrees_with_linear_scan(
            corpus in proptest::collection::vec(
                proptest::sample::subsequence(VOCAB.to_vec(), 0..=4),
                1..12,
            ),
            pick in 0usize..VOCAB.len(),
        ) {
            let phrase = VOCAB[pick];
            let mut store = DocumentStore::new();
            for (i, skills) in corpus.iter().enumerate() {
                store.insert(Resume::new(i as i64, &skills.join(", ")));
            }
            let mut index = InvertedIndex::new();
            index.build(&store);

            let hits = boolean_search(&index, phrase);
            let expected: BTreeSet<DocId> = store
                .iter()
                .filter(|(_, r)| {
                    r.skills().split(',').any(|s| normalize(s) == normalize(phrase))
                })
                .map(|(id, _)| id)
                .collect();
            prop_assert_eq!(hits, expected);
        }
    }
}
