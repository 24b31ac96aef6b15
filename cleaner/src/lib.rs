//! Offline dataset cleaning: rewrites the raw sentence-form datasets
//! into the normalized CSV the loader consumes.
//!
//! Raw job rows read like `"Data Analyst needed with experience in SQL,
//! Python. Immediate start."`; raw résumé rows like `"Seasoned engineer
//! skilled in Java, Git. Based in Austin."`. Cleaning pulls the title
//! prefix and the skill tail out of the sentence, keeps only known
//! technical skills, and writes `Job_ID,Title,Skills` and
//! `Resume_ID,Skills` rows with fresh sequential ids.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

use engine::record::{UNKNOWN_TITLE, UNSPECIFIED_SKILLS};
use engine::skills::filter_technical_skills;

/// Conventional dataset filenames inside the data directory.
pub const RAW_JOBS: &str = "job_description.csv";
pub const RAW_RESUMES: &str = "resume.csv";
pub const CLEAN_JOBS: &str = "job_description_clean.csv";
pub const CLEAN_RESUMES: &str = "resume_clean.csv";

lazy_static! {
    /// Title prefix of a raw job row, everything before the first " needed".
    static ref JOB_TITLE: Regex = Regex::new(r"^(?P<title>.*?) needed").expect("valid regex");
    /// Skill tail of a raw job row, cut at the first sentence boundary.
    static ref JOB_SKILLS: Regex = Regex::new(r"experience in(?P<skills>[^.]*)").expect("valid regex");
    /// Skill tail of a raw résumé row.
    static ref RESUME_SKILLS: Regex = Regex::new(r"skilled in(?P<skills>[^.]*)").expect("valid regex");
}

/// Counts from one cleaning pass over a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub written: usize,
    pub skipped: usize,
}

/// Pull the normalized title and filtered skill list out of one raw job
/// row. Rows missing either marker still produce a usable record via the
/// placeholders.
pub fn extract_job(line: &str) -> (String, String) {
    let title = JOB_TITLE
        .captures(line)
        .map(|c| normalize_title(&c["title"]))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
    let skills = JOB_SKILLS
        .captures(line)
        .map(|c| filter_technical_skills(&c["skills"]))
        .unwrap_or_else(|| UNSPECIFIED_SKILLS.to_string());
    (title, skills)
}

/// Pull the filtered skill list out of one raw résumé row.
pub fn extract_resume(line: &str) -> String {
    RESUME_SKILLS
        .captures(line)
        .map(|c| filter_technical_skills(&c["skills"]))
        .unwrap_or_else(|| UNSPECIFIED_SKILLS.to_string())
}

/// Tidy an extracted title: drop wrapping quotes and the trailing
/// sentence punctuation that leaks across the " needed" boundary.
/// Runs to a fixed point so mixed sequences like `"Engineer".` clear.
pub fn normalize_title(raw: &str) -> String {
    let mut t = raw.trim();
    loop {
        let before = t;
        t = t.trim_start_matches(['"', '\'']);
        t = t.trim_end_matches(['"', '\'']);
        t = t.trim_end_matches(['.', ',', ';', ':']);
        t = t.trim();
        if t == before {
            break;
        }
    }
    t.to_string()
}

/// Quote a CSV field when it contains a comma, quote, or newline;
/// embedded quotes are doubled.
pub fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Rewrite the raw job dataset as `Job_ID,Title,Skills` rows. The input
/// header row is dropped, blank rows are skipped and counted, and ids
/// are assigned sequentially from 1. Fails only when the input cannot be
/// read or the output cannot be written.
pub fn clean_jobs(input: &Path, output: &Path) -> Result<CleanStats> {
    clean_file(input, output, "Job_ID,Title,Skills", |line, id| {
        let (title, skills) = extract_job(line);
        format!("{},{},{}", id, csv_escape(&title), csv_escape(&skills))
    })
}

/// Rewrite the raw résumé dataset as `Resume_ID,Skills` rows.
pub fn clean_resumes(input: &Path, output: &Path) -> Result<CleanStats> {
    clean_file(input, output, "Resume_ID,Skills", |line, id| {
        format!("{},{}", id, csv_escape(&extract_resume(line)))
    })
}

/// Run both passes against the conventional filenames in `data_dir`.
pub fn clean_all(data_dir: &Path) -> Result<(CleanStats, CleanStats)> {
    let jobs = clean_jobs(&data_dir.join(RAW_JOBS), &data_dir.join(CLEAN_JOBS))?;
    let resumes = clean_resumes(&data_dir.join(RAW_RESUMES), &data_dir.join(CLEAN_RESUMES))?;
    Ok((jobs, resumes))
}

fn clean_file(
    input: &Path,
    output: &Path,
    header: &str,
    mut render: impl FnMut(&str, usize) -> String,
) -> Result<CleanStats> {
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("cannot open {}", input.display()))?,
    );
    let mut writer = BufWriter::new(
        File::create(output).with_context(|| format!("cannot create {}", output.display()))?,
    );
    writeln!(writer, "{header}")?;

    let mut stats = CleanStats::default();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read error in {}", input.display()))?;
        if lineno == 0 {
            continue; // input header
        }
        if line.trim().is_empty() {
            stats.skipped += 1;
            continue;
        }
        let row = render(&line, stats.written + 1);
        writeln!(writer, "{row}")?;
        stats.written += 1;
        if stats.written % 1000 == 0 {
            tracing::debug!(written = stats.written, input = %input.display(), "cleaning progress");
        }
    }
    writer.flush()?;
    tracing::info!(
        written = stats.written,
        skipped = stats.skipped,
        output = %output.display(),
        "cleaning pass complete"
    );
    Ok(stats)
}
