use std::fmt;

use serde::Serialize;

/// Placeholder title for jobs whose source row had none.
pub const UNKNOWN_TITLE: &str = "Unknown Position";
/// Placeholder skill list for records whose source row had none.
pub const UNSPECIFIED_SKILLS: &str = "Not specified";

/// Capability surface shared by every searchable record type.
///
/// `text()` is the free-text body consulted by the body-token index and
/// the substring scorers. `skills()` is the comma-separated canonical
/// skill list. `title()` is present only for record types that have one;
/// the default keeps title search a harmless no-op for the rest.
/// `Display` renders the record for reports.
pub trait Record: fmt::Display {
    fn text(&self) -> &str;
    fn skills(&self) -> &str;
    fn title(&self) -> Option<&str> {
        None
    }
}

/// One job posting. Construction never fails: missing fields become
/// placeholders so a sloppy source row still yields a searchable record.
/// Records are not mutated after insertion into a store.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    /// Id carried by the source row, not the store ordinal. -1 when the
    /// row's id column did not parse.
    pub id: i64,
    pub title: String,
    pub skills: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub experience_level: String,
}

impl Job {
    pub fn new(id: i64, title: &str, skills: &str) -> Self {
        let title = non_empty_or(title, UNKNOWN_TITLE);
        let skills = non_empty_or(skills, UNSPECIFIED_SKILLS);
        let description = format!("Job: {title} requiring {skills}");
        Job {
            id,
            title,
            skills,
            description,
            company: "Company Not Specified".to_string(),
            location: "Location Not Specified".to_string(),
            experience_level: "Not Specified".to_string(),
        }
    }

    /// Fallback for rows that did not split into enough fields. The raw
    /// line becomes the body so the record still participates in text
    /// search instead of being dropped.
    pub fn from_malformed(raw: &str) -> Self {
        let mut job = Job::new(-1, UNKNOWN_TITLE, UNSPECIFIED_SKILLS);
        job.description = raw.to_string();
        job
    }
}

impl Record for Job {
    fn text(&self) -> &str {
        &self.description
    }

    fn skills(&self) -> &str {
        &self.skills
    }

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Job Description: {} needed with experience in {}.", self.title, self.skills)?;
        writeln!(f, "Title: {}", self.title)?;
        write!(f, "Skills: {}", self.skills)
    }
}

/// One résumé. Like jobs, construction substitutes placeholders instead
/// of failing, and the summary body is synthesized from the skill list.
#[derive(Debug, Clone, Serialize)]
pub struct Resume {
    /// Id carried by the source row; -1 when unparsable.
    pub id: i64,
    pub name: String,
    pub skills: String,
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub contact: String,
}

impl Resume {
    pub fn new(id: i64, skills: &str) -> Self {
        let skills = non_empty_or(skills, UNSPECIFIED_SKILLS);
        let summary = format!("Professional with skills in {skills}");
        Resume {
            id,
            name: "Professional".to_string(),
            skills,
            summary,
            experience: "Experienced".to_string(),
            education: "Not Specified".to_string(),
            contact: "Not Provided".to_string(),
        }
    }

    /// Fallback for rows that did not split into enough fields.
    pub fn from_malformed(raw: &str) -> Self {
        let mut resume = Resume::new(-1, UNSPECIFIED_SKILLS);
        resume.summary = raw.to_string();
        resume
    }
}

impl Record for Resume {
    fn text(&self) -> &str {
        &self.summary
    }

    fn skills(&self) -> &str {
        &self.skills
    }
}

impl fmt::Display for Resume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Details: Experienced professional skilled in {}.", self.skills)?;
        write!(f, "Skills: {}", self.skills)
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
