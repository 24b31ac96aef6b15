//! Rule-based retrieval engine for matching job postings to résumés.
//!
//! Keyword search, not machine learning. Records are normalized into a
//! canonical lowercase form, an inverted index maps whole skill phrases
//! and title/body tokens to document ids, a small boolean query language
//! derives candidate sets, an additive heuristic scores the candidates,
//! and top-K selection orders the survivors. A cross-matching pass drives
//! the same pipeline once per job to pair it with its best résumés.

/// Cross-corpus matching: the best résumés for every job.
pub mod crossmatch;
/// Inverted index: skill phrases plus title and body tokens.
pub mod index;
/// Boolean skill-query evaluation (comma OR, `" or "` OR, exact phrase).
pub mod query;
/// Match ordering: full sort and bounded top-K selection.
pub mod rank;
/// Record capability trait and the concrete job and résumé types.
pub mod record;
/// Additive relevance scoring.
pub mod score;
/// The retrieval pipeline: store, index, and strategy knobs.
pub mod search;
/// Canonical technical-skill vocabulary.
pub mod skills;
/// Growable in-memory record store with dense ids.
pub mod store;
/// Text normalization and tokenization.
pub mod text;

pub use crossmatch::{best_matches_for_jobs, BestMatch, JobMatchReport};
pub use rank::Match;
pub use record::{Job, Record, Resume};
pub use search::{RankStrategy, SearchEngine, SearchStrategy};
pub use store::{DocId, DocumentStore};
