use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::record::UNSPECIFIED_SKILLS;

/// Canonical technical-skill vocabulary shared by every record source.
/// Lookup is case-insensitive; output always uses the casing listed here.
pub const TECHNICAL_SKILLS: &[&str] = &[
    "SQL", "Python", "Java", "JavaScript", "C++", "C#", "R", "Scala", "Go", "Rust",
    "Power BI", "Tableau", "Excel", "Pandas", "NumPy", "Matplotlib", "Seaborn",
    "Machine Learning", "Deep Learning", "NLP", "Computer Vision", "Statistics",
    "TensorFlow", "PyTorch", "Keras", "Scikit-learn", "MLOps", "ML",
    "REST APIs", "Spring Boot", "Docker", "Kubernetes", "Git", "Agile", "Scrum",
    "System Design", "Microservices", "AWS", "Azure", "GCP", "Cloud",
    "Data Cleaning", "Data Analysis", "Reporting", "ETL", "Data Pipeline",
    "Product Roadmap", "User Stories", "Stakeholder Management", "Project Management",
    "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask",
    "MongoDB", "PostgreSQL", "MySQL", "Redis", "Elasticsearch",
    "Linux", "Windows", "macOS", "Bash", "Shell", "DevOps", "CI/CD",
];

lazy_static! {
    /// Lowercased name to canonical casing.
    static ref CANONICAL: HashMap<String, &'static str> = TECHNICAL_SKILLS
        .iter()
        .map(|s| (s.to_lowercase(), *s))
        .collect();
}

/// Look up the canonical casing for a skill name, ignoring case.
pub fn canonical(name: &str) -> Option<&'static str> {
    CANONICAL.get(&name.to_lowercase()).copied()
}

/// Reduce a raw comma-separated list to the known technical skills, in
/// canonical casing and input order. Unknown entries are discarded; when
/// nothing survives the placeholder list is returned so callers never
/// see an empty skill field.
pub fn filter_technical_skills(raw: &str) -> String {
    let kept: Vec<&str> = raw
        .split(',')
        .filter_map(|part| canonical(part.trim()))
        .collect();
    if kept.is_empty() {
        UNSPECIFIED_SKILLS.to_string()
    } else {
        kept.join(", ")
    }
}
