//! File-level cleaning runs against real temp files.

use std::fs;

use cleaner::{clean_all, clean_jobs, clean_resumes, CleanStats};
use tempfile::tempdir;

const RAW_JOBS: &str = "\
job_description
Data Analyst needed with experience in SQL, Python, Communication. Apply now.
Backend Developer needed with experience in Java, Spring Boot. Urgent.

An unstructured posting with no markers at all
";

const RAW_RESUMES: &str = "\
resume
Experienced professional skilled in Python, SQL, Cooking. Based remotely.
Recent graduate skilled in Java.
";

#[test]
fn clean_jobs_writes_header_ids_and_filtered_skills() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    let output = dir.path().join("clean.csv");
    fs::write(&input, RAW_JOBS).unwrap();

    let stats = clean_jobs(&input, &output).unwrap();
    assert_eq!(stats, CleanStats { written: 3, skipped: 1 });

    let cleaned = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = cleaned.lines().collect();
    assert_eq!(lines[0], "Job_ID,Title,Skills");
    assert_eq!(lines[1], "1,Data Analyst,\"SQL, Python\"");
    assert_eq!(lines[2], "2,Backend Developer,\"Java, Spring Boot\"");
    // markerless rows keep their id but fall back to placeholders
    assert_eq!(lines[3], "3,Unknown Position,Not specified");
}

#[test]
fn clean_resumes_writes_two_column_rows() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    let output = dir.path().join("clean.csv");
    fs::write(&input, RAW_RESUMES).unwrap();

    let stats = clean_resumes(&input, &output).unwrap();
    assert_eq!(stats.written, 2);

    let cleaned = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = cleaned.lines().collect();
    assert_eq!(lines[0], "Resume_ID,Skills");
    assert_eq!(lines[1], "1,\"Python, SQL\"");
    assert_eq!(lines[2], "2,Java");
}

#[test]
fn clean_all_uses_conventional_filenames() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(cleaner::RAW_JOBS), RAW_JOBS).unwrap();
    fs::write(dir.path().join(cleaner::RAW_RESUMES), RAW_RESUMES).unwrap();

    let (jobs, resumes) = clean_all(dir.path()).unwrap();
    assert_eq!(jobs.written, 3);
    assert_eq!(resumes.written, 2);
    assert!(dir.path().join(cleaner::CLEAN_JOBS).exists());
    assert!(dir.path().join(cleaner::CLEAN_RESUMES).exists());
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    let err = clean_jobs(&dir.path().join("absent.csv"), &dir.path().join("out.csv"))
        .unwrap_err();
    assert!(err.to_string().contains("absent.csv"));
}
