//! Additive relevance scoring.
//!
//! The boolean filter is a recall net; these scores are the precision
//! gate. Scores are non-negative integers, and callers drop zero-score
//! candidates even when the filter admitted them. All comparisons are
//! substring checks over normalized text, so a query term can credit a
//! record the exact-match index would never have surfaced (visible under
//! the scan strategy).

use crate::record::{Job, Record, Resume};
use crate::text::normalize;

/// Query term found inside the skills field.
pub const SKILL_HIT: u32 = 10;
/// Query term found inside the record body.
pub const TEXT_HIT: u32 = 5;
/// Single query word found inside the skills field (whole-phrase queries only).
pub const SKILL_WORD_HIT: u32 = 2;
/// Whole query found inside a job title.
pub const TITLE_HIT: u32 = 20;
/// Whole query found inside the record body (title search).
pub const TITLE_TEXT_HIT: u32 = 10;
/// Query word found inside the title (title search).
pub const TITLE_WORD_HIT: u32 = 5;
/// Query word found inside the record body (title search).
pub const TITLE_TEXT_WORD_HIT: u32 = 2;
/// One job-skill token found inside a résumé's skill list.
pub const COMPATIBILITY_HIT: u32 = 5;

/// Score a record against a skill query.
///
/// Comma queries score each trimmed term independently against the
/// skills field and the body. Whole-phrase queries additionally earn a
/// small bonus per individual query word found in the skills field.
/// An empty query scores zero everywhere.
pub fn skill_score<R: Record>(record: &R, query: &str) -> u32 {
    let skills = normalize(record.skills());
    let text = normalize(record.text());
    let mut score = 0;

    if query.contains(',') {
        for part in query.split(',') {
            let term = normalize(part);
            if term.is_empty() {
                continue;
            }
            if skills.contains(&term) {
                score += SKILL_HIT;
            }
            if text.contains(&term) {
                score += TEXT_HIT;
            }
        }
    } else {
        let term = normalize(query);
        if term.is_empty() {
            return 0;
        }
        if skills.contains(&term) {
            score += SKILL_HIT;
        }
        if text.contains(&term) {
            score += TEXT_HIT;
        }
        for word in term.split_whitespace() {
            if skills.contains(word) {
                score += SKILL_WORD_HIT;
            }
        }
    }
    score
}

/// Score a job against a title query: whole-query title containment
/// dominates, then body containment, then per-word bonuses on both.
/// Records without a title always score zero.
pub fn title_score<R: Record>(record: &R, query: &str) -> u32 {
    let Some(title) = record.title() else {
        return 0;
    };
    let term = normalize(query);
    if term.is_empty() {
        return 0;
    }
    let title = normalize(title);
    let text = normalize(record.text());
    let mut score = 0;

    if title.contains(&term) {
        score += TITLE_HIT;
    }
    if text.contains(&term) {
        score += TITLE_TEXT_HIT;
    }
    for word in term.split_whitespace() {
        if title.contains(word) {
            score += TITLE_WORD_HIT;
        }
        if text.contains(word) {
            score += TITLE_TEXT_WORD_HIT;
        }
    }
    score
}

/// Tokens of a job's skill list as used for compatibility: comma-split
/// entries when the list has commas, whitespace words otherwise, each
/// normalized. Empty tokens are dropped.
pub fn skill_tokens(raw: &str) -> Vec<String> {
    let parts: Vec<String> = if raw.contains(',') {
        raw.split(',').map(normalize).collect()
    } else {
        raw.split_whitespace().map(normalize).collect()
    };
    parts.into_iter().filter(|t| !t.is_empty()).collect()
}

/// The job-skill tokens present in the résumé's normalized skill list.
/// `compatibility` pays per entry; candidate reports show the list.
pub fn matching_skills(job: &Job, resume: &Resume) -> Vec<String> {
    let resume_skills = normalize(resume.skills());
    skill_tokens(job.skills())
        .into_iter()
        .filter(|token| resume_skills.contains(token.as_str()))
        .collect()
}

/// Skill-overlap compatibility between one job and one résumé: a flat
/// bonus per job-skill token found in the résumé's skills. This is the
/// single scoring rule used for cross-matching; title overlap does not
/// participate.
pub fn compatibility(job: &Job, resume: &Resume) -> u32 {
    COMPATIBILITY_HIT * matching_skills(job, resume).len() as u32
}
