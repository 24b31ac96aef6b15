//! Report rows and their renderings. Every row type serializes for the
//! `--json` path and has a human rendering assembled here; renderers
//! return strings so they stay testable without capturing stdout.

use std::fmt::Write as _;

use serde::Serialize;

use engine::{Job, JobMatchReport, Match, Resume};

/// One ranked job hit.
#[derive(Debug, Serialize)]
pub struct JobHit {
    pub rank: usize,
    #[serde(flatten)]
    pub hit: Match,
    pub job: Job,
}

/// One ranked résumé hit.
#[derive(Debug, Serialize)]
pub struct ResumeHit {
    pub rank: usize,
    #[serde(flatten)]
    pub hit: Match,
    pub resume: Resume,
}

/// One candidate résumé for an ad-hoc job, with the overlap spelled out.
#[derive(Debug, Serialize)]
pub struct CandidateHit {
    pub rank: usize,
    #[serde(flatten)]
    pub hit: Match,
    /// Normalized job-skill tokens found in this résumé.
    pub matched_skills: Vec<String>,
    /// How many tokens the job asked for in total.
    pub required_skills: usize,
    pub resume: Resume,
}

/// Candidate ranking for an ad-hoc job description.
#[derive(Debug, Serialize)]
pub struct CandidateReport {
    pub title: String,
    /// The skill list the search actually used.
    pub skills: String,
    /// True when `skills` came from the technical vocabulary; false when
    /// the raw description stood in because nothing was recognized.
    pub from_vocabulary: bool,
    /// Candidates that scored above zero, before the display limit.
    pub total: usize,
    pub hits: Vec<CandidateHit>,
}

/// One row of the cross-matching report: the engine outcome enriched
/// with the job's display fields and the source-row ids of its best
/// résumés.
#[derive(Debug, Serialize)]
pub struct MatchRow {
    #[serde(flatten)]
    pub outcome: JobMatchReport,
    pub job_record_id: i64,
    pub title: String,
    pub skills: String,
    pub resume_record_ids: Vec<i64>,
}

/// A whole cross-matching run with timing.
#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub processed: usize,
    pub took_ms: u128,
    pub took_s: f64,
    pub rows: Vec<MatchRow>,
}

pub fn render_job_hits(query: &str, hits: &[JobHit]) -> String {
    if hits.is_empty() {
        return format!("No jobs found matching '{query}'.\n");
    }
    let mut out = format!("=== Top {} job matches for '{}' ===\n", hits.len(), query);
    for row in hits {
        let _ = write!(out, "\n#{}  score {}  (job {})\n", row.rank, row.hit.score, row.job.id);
        let _ = writeln!(out, "{}", row.job);
        out.push_str("----------------------------------------\n");
    }
    out
}

pub fn render_resume_hits(query: &str, hits: &[ResumeHit]) -> String {
    if hits.is_empty() {
        return format!("No resumes found matching '{query}'.\n");
    }
    let mut out = format!("=== Top {} resume matches for '{}' ===\n", hits.len(), query);
    for row in hits {
        let _ = write!(
            out,
            "\n#{}  score {}  (resume {})\n",
            row.rank, row.hit.score, row.resume.id
        );
        let _ = writeln!(out, "{}", row.resume);
        out.push_str("----------------------------------------\n");
    }
    out
}

pub fn render_candidates(report: &CandidateReport) -> String {
    let mut out = format!("=== Candidates for '{}' ===\n", report.title);
    let _ = writeln!(out, "Required skills: {}", report.skills);
    if !report.from_vocabulary {
        out.push_str("(no known technical skills recognized; matching on the raw description)\n");
    }
    if report.hits.is_empty() {
        out.push_str("\nNo suitable candidates found for this job description.\n");
        return out;
    }
    for row in &report.hits {
        let _ = write!(
            out,
            "\nCandidate #{} (score {})\nID: {}\nSkills: {}\n",
            row.rank, row.hit.score, row.resume.id, row.resume.skills
        );
        let _ = writeln!(
            out,
            "Matched skills: {} ({} of {} required)",
            row.matched_skills.join(", "),
            row.matched_skills.len(),
            row.required_skills
        );
        out.push_str("----------------------------------------\n");
    }
    let _ = writeln!(out, "\nFound {} candidates with matching skills.", report.total);
    out
}

pub fn render_match_report(report: &MatchReport) -> String {
    let mut out = String::new();
    for row in &report.rows {
        match &row.outcome.best {
            Some(best) => {
                let ids: Vec<String> =
                    row.resume_record_ids.iter().map(|id| id.to_string()).collect();
                let _ = writeln!(
                    out,
                    "Job {} '{}': best resumes [{}] (score {}, {} of {} candidates scored)",
                    row.job_record_id,
                    row.title,
                    ids.join(", "),
                    best.score,
                    row.outcome.scored,
                    row.outcome.candidates
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "Job {} '{}': no matching resumes found",
                    row.job_record_id, row.title
                );
            }
        }
    }
    let rate = if report.took_s > 0.0 {
        report.processed as f64 / report.took_s
    } else {
        0.0
    };
    let _ = writeln!(
        out,
        "\nProcessed {} jobs in {} ms ({:.1} jobs/sec)",
        report.processed, report.took_ms, rate
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{BestMatch, DocId};

    fn hit(doc_id: DocId, score: u32) -> Match {
        Match { doc_id, score }
    }

    #[test]
    fn job_hits_render_rank_score_and_record() {
        let rows = vec![JobHit {
            rank: 1,
            hit: hit(0, 30),
            job: Job::new(7, "Data Analyst", "SQL, Python"),
        }];
        let text = render_job_hits("Python, SQL", &rows);
        assert!(text.contains("Top 1 job matches"));
        assert!(text.contains("#1  score 30  (job 7)"));
        assert!(text.contains("Title: Data Analyst"));
    }

    #[test]
    fn empty_hits_render_a_no_match_line() {
        assert!(render_job_hits("COBOL", &[]).contains("No jobs found"));
        assert!(render_resume_hits("COBOL", &[]).contains("No resumes found"));
    }

    #[test]
    fn candidate_report_shows_overlap_counts() {
        let report = CandidateReport {
            title: "Backend Developer".to_string(),
            skills: "Java, Docker".to_string(),
            from_vocabulary: true,
            total: 1,
            hits: vec![CandidateHit {
                rank: 1,
                hit: hit(2, 10),
                matched_skills: vec!["java".to_string(), "docker".to_string()],
                required_skills: 2,
                resume: Resume::new(12, "Java, Docker, Git"),
            }],
        };
        let text = render_candidates(&report);
        assert!(text.contains("Matched skills: java, docker (2 of 2 required)"));
        assert!(text.contains("Found 1 candidates"));
    }

    #[test]
    fn match_report_renders_ties_and_no_match_rows() {
        let report = MatchReport {
            processed: 2,
            took_ms: 5,
            took_s: 0.005,
            rows: vec![
                MatchRow {
                    outcome: JobMatchReport {
                        job_id: 0,
                        candidates: 3,
                        scored: 2,
                        best: Some(BestMatch { score: 10, resume_ids: vec![1, 4] }),
                    },
                    job_record_id: 1,
                    title: "Data Analyst".to_string(),
                    skills: "SQL, Python".to_string(),
                    resume_record_ids: vec![101, 104],
                },
                MatchRow {
                    outcome: JobMatchReport { job_id: 1, candidates: 0, scored: 0, best: None },
                    job_record_id: 2,
                    title: "Herbalist".to_string(),
                    skills: "Botany".to_string(),
                    resume_record_ids: vec![],
                },
            ],
        };
        let text = render_match_report(&report);
        assert!(text.contains("Job 1 'Data Analyst': best resumes [101, 104] (score 10"));
        assert!(text.contains("Job 2 'Herbalist': no matching resumes found"));
        assert!(text.contains("Processed 2 jobs"));
    }
}
