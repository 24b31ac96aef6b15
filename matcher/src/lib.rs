//! User surface for the matching engine: dataset loading, search and
//! cross-matching actions, and report rendering for both humans and
//! JSON consumers.

pub mod load;
pub mod report;

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use engine::record::UNSPECIFIED_SKILLS;
use engine::skills::filter_technical_skills;
use engine::{
    best_matches_for_jobs, rank, score, DocId, Job, Match, RankStrategy, Resume, SearchEngine,
    SearchStrategy,
};

use report::{CandidateHit, CandidateReport, JobHit, MatchReport, MatchRow, ResumeHit};

/// Both corpora, loaded and indexed.
#[derive(Debug)]
pub struct App {
    pub jobs: SearchEngine<Job>,
    pub resumes: SearchEngine<Resume>,
}

impl App {
    /// Load both cleaned datasets and build their indexes up front.
    /// Either file failing to load fails the whole call; the app is only
    /// constructed once both corpora are in.
    pub fn load(
        jobs_path: &Path,
        resumes_path: &Path,
        search: SearchStrategy,
        rank: RankStrategy,
    ) -> Result<App> {
        let mut jobs = load::load_jobs(jobs_path, search, rank)?;
        let mut resumes = load::load_resumes(resumes_path, search, rank)?;
        jobs.ensure_indexed();
        resumes.ensure_indexed();
        Ok(App { jobs, resumes })
    }

    /// Skill search over the job corpus.
    pub fn search_jobs(&mut self, query: &str, limit: usize) -> Vec<JobHit> {
        let hits = self.jobs.search(query, limit);
        self.job_rows(&hits)
    }

    /// Title search over the job corpus.
    pub fn search_job_titles(&mut self, query: &str, limit: usize) -> Vec<JobHit> {
        let hits = self.jobs.search_by_title(query, limit);
        self.job_rows(&hits)
    }

    /// Skill search over the résumé corpus.
    pub fn search_resumes(&mut self, query: &str, limit: usize) -> Vec<ResumeHit> {
        let hits = self.resumes.search(query, limit);
        hits.iter()
            .enumerate()
            .filter_map(|(i, m)| {
                let resume = self.resumes.get(m.doc_id)?.clone();
                Some(ResumeHit { rank: i + 1, hit: *m, resume })
            })
            .collect()
    }

    /// Rank candidate résumés for an ad-hoc job description.
    ///
    /// The description is reduced to known technical skills: first via
    /// the sentence extraction the cleaner uses ("... experience in X,
    /// Y."), then by filtering the text as a plain comma list. When
    /// neither recognizes anything, the raw text stands in so the search
    /// can still proceed on substrings. Recognized skills go through the
    /// boolean index; the raw fallback scores every résumé.
    pub fn candidates_for(&mut self, description: &str, limit: usize) -> CandidateReport {
        let (title, extracted) = cleaner::extract_job(description);
        let (skills, from_vocabulary) = if extracted != UNSPECIFIED_SKILLS {
            (extracted, true)
        } else {
            let filtered = filter_technical_skills(description);
            if filtered != UNSPECIFIED_SKILLS {
                (filtered, true)
            } else {
                (description.to_string(), false)
            }
        };
        let job = Job::new(-1, &title, &skills);

        let candidates: BTreeSet<DocId> = if from_vocabulary {
            self.resumes.boolean_search(&job.skills)
        } else {
            (0..self.resumes.len() as DocId).collect()
        };

        let mut matches: Vec<Match> = candidates
            .into_iter()
            .filter_map(|id| {
                let resume = self.resumes.get(id)?;
                let score = score::compatibility(&job, resume);
                (score > 0).then_some(Match { doc_id: id, score })
            })
            .collect();
        rank::sort_matches(&mut matches);
        let total = matches.len();
        matches.truncate(limit);

        let required_skills = score::skill_tokens(&job.skills).len();
        let hits = matches
            .iter()
            .enumerate()
            .filter_map(|(i, m)| {
                let resume = self.resumes.get(m.doc_id)?;
                Some(CandidateHit {
                    rank: i + 1,
                    hit: *m,
                    matched_skills: score::matching_skills(&job, resume),
                    required_skills,
                    resume: resume.clone(),
                })
            })
            .collect();

        CandidateReport {
            title: job.title,
            skills: job.skills,
            from_vocabulary,
            total,
            hits,
        }
    }

    /// Cross-match the first `limit` jobs against the résumé corpus.
    pub fn best_matches(&mut self, limit: usize) -> MatchReport {
        let start = Instant::now();
        let outcomes = best_matches_for_jobs(self.jobs.store(), &mut self.resumes, limit);
        let elapsed = start.elapsed();

        let rows = outcomes
            .into_iter()
            .filter_map(|outcome| {
                let job = self.jobs.get(outcome.job_id)?;
                let resume_record_ids = outcome
                    .best
                    .as_ref()
                    .map(|best| {
                        best.resume_ids
                            .iter()
                            .filter_map(|&id| self.resumes.get(id).map(|r| r.id))
                            .collect()
                    })
                    .unwrap_or_default();
                Some(MatchRow {
                    job_record_id: job.id,
                    title: job.title.clone(),
                    skills: job.skills.clone(),
                    resume_record_ids,
                    outcome,
                })
            })
            .collect::<Vec<_>>();

        MatchReport {
            processed: rows.len(),
            took_ms: elapsed.as_millis(),
            took_s: elapsed.as_secs_f64(),
            rows,
        }
    }

    fn job_rows(&self, hits: &[Match]) -> Vec<JobHit> {
        hits.iter()
            .enumerate()
            .filter_map(|(i, m)| {
                let job = self.jobs.get(m.doc_id)?.clone();
                Some(JobHit { rank: i + 1, hit: *m, job })
            })
            .collect()
    }
}
