use serde::Serialize;

use crate::rank::{self, Match};
use crate::record::{Job, Record, Resume};
use crate::score;
use crate::search::SearchEngine;
use crate::store::{DocId, DocumentStore};

/// Best résumés found for one job: the top compatibility score and every
/// résumé id tied at it, in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMatch {
    pub score: u32,
    pub resume_ids: Vec<DocId>,
}

/// Cross-matching outcome for one job. `best` is None when no candidate
/// scored above zero; the job is still reported rather than omitted.
#[derive(Debug, Clone, Serialize)]
pub struct JobMatchReport {
    pub job_id: DocId,
    /// Size of the boolean candidate set before scoring.
    pub candidates: usize,
    /// Candidates that survived the zero-score drop.
    pub scored: usize,
    pub best: Option<BestMatch>,
}

/// For each of the first `limit` jobs in store order, find the résumés
/// with the highest skill-overlap compatibility.
///
/// Candidates come from the résumé engine's boolean search over the
/// job's comma-separated skill list, so the résumé store is never
/// scanned in full. Scoring is [`score::compatibility`] alone. Neither
/// corpus is modified; the résumé index may be built as a side effect of
/// the first lookup, which is why the engine handle is mutable.
pub fn best_matches_for_jobs(
    jobs: &DocumentStore<Job>,
    resumes: &mut SearchEngine<Resume>,
    limit: usize,
) -> Vec<JobMatchReport> {
    resumes.ensure_indexed();
    let mut reports = Vec::with_capacity(limit.min(jobs.len()));

    for (job_id, job) in jobs.iter().take(limit) {
        let candidates = resumes.boolean_search(job.skills());
        let candidate_count = candidates.len();

        let mut matches: Vec<Match> = candidates
            .into_iter()
            .filter_map(|resume_id| {
                let resume = resumes.get(resume_id)?;
                let score = score::compatibility(job, resume);
                (score > 0).then_some(Match { doc_id: resume_id, score })
            })
            .collect();
        // full ordering here: the whole tie group at the head is reported
        rank::sort_matches(&mut matches);

        let best = matches.first().map(|top| BestMatch {
            score: top.score,
            resume_ids: matches
                .iter()
                .take_while(|m| m.score == top.score)
                .map(|m| m.doc_id)
                .collect(),
        });

        reports.push(JobMatchReport {
            job_id,
            candidates: candidate_count,
            scored: matches.len(),
            best,
        });
    }

    tracing::debug!(jobs = reports.len(), "cross-matching complete");
    reports
}
