//! Cleaned-CSV loading. The cleaner writes `Job_ID,Title,Skills` and
//! `Resume_ID,Skills` rows with quoted fields where needed; rows that do
//! not split into enough fields still become placeholder records rather
//! than aborting the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use engine::{Job, RankStrategy, Resume, SearchEngine, SearchStrategy};

/// Split one CSV row into fields. Double quotes wrap fields containing
/// commas and are stripped from the value; doubled quotes inside a
/// quoted field collapse to one.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// Parse one cleaned job row. Short rows fall back to a placeholder
/// record carrying the raw line; an unparsable id column becomes -1.
pub fn job_from_line(line: &str) -> Job {
    let fields = split_csv_line(line);
    if fields.len() < 3 {
        return Job::from_malformed(line);
    }
    let id = fields[0].trim().parse().unwrap_or(-1);
    Job::new(id, &fields[1], &fields[2])
}

/// Parse one cleaned résumé row, with the same fallbacks as jobs.
pub fn resume_from_line(line: &str) -> Resume {
    let fields = split_csv_line(line);
    if fields.len() < 2 {
        return Resume::from_malformed(line);
    }
    let id = fields[0].trim().parse().unwrap_or(-1);
    Resume::new(id, &fields[1])
}

/// Load the cleaned job dataset into a fresh engine. The header row and
/// blank rows are skipped. Fails only when the file cannot be read.
pub fn load_jobs(
    path: &Path,
    search: SearchStrategy,
    rank: RankStrategy,
) -> Result<SearchEngine<Job>> {
    let mut jobs = SearchEngine::with_strategies(search, rank);
    for line in data_rows(path)? {
        jobs.insert(job_from_line(&line));
    }
    tracing::info!(count = jobs.len(), path = %path.display(), "jobs loaded");
    Ok(jobs)
}

/// Load the cleaned résumé dataset into a fresh engine.
pub fn load_resumes(
    path: &Path,
    search: SearchStrategy,
    rank: RankStrategy,
) -> Result<SearchEngine<Resume>> {
    let mut resumes = SearchEngine::with_strategies(search, rank);
    for line in data_rows(path)? {
        resumes.insert(resume_from_line(&line));
    }
    tracing::info!(count = resumes.len(), path = %path.display(), "resumes loaded");
    Ok(resumes)
}

fn data_rows(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut rows = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("read error in {}", path.display()))?;
        if lineno == 0 || line.trim().is_empty() {
            continue;
        }
        rows.push(line);
    }
    Ok(rows)
}
