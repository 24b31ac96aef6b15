use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use engine::{RankStrategy, SearchStrategy};
use matcher::report::{
    render_candidates, render_job_hits, render_match_report, render_resume_hits,
};
use matcher::App;

#[derive(Parser)]
#[command(name = "matcher")]
#[command(about = "Match job postings to résumés by skill overlap", long_about = None)]
struct Cli {
    /// Cleaned job dataset
    #[arg(long, default_value = "./data/job_description_clean.csv")]
    jobs: PathBuf,
    /// Cleaned résumé dataset
    #[arg(long, default_value = "./data/resume_clean.csv")]
    resumes: PathBuf,
    /// Directory used by the clean action
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,
    /// Candidate derivation: inverted index or full scan
    #[arg(long, value_enum, default_value_t = Retrieval::Indexed)]
    retrieval: Retrieval,
    /// Ranking: full sort or bounded top-K selection
    #[arg(long, value_enum, default_value_t = Ranking::FullSort)]
    ranking: Ranking,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Retrieval {
    Indexed,
    Scan,
}

#[derive(Clone, Copy, ValueEnum)]
enum Ranking {
    FullSort,
    TopK,
}

impl From<Retrieval> for SearchStrategy {
    fn from(value: Retrieval) -> Self {
        match value {
            Retrieval::Indexed => SearchStrategy::Indexed,
            Retrieval::Scan => SearchStrategy::Scan,
        }
    }
}

impl From<Ranking> for RankStrategy {
    fn from(value: Ranking) -> Self {
        match value {
            Ranking::FullSort => RankStrategy::FullSort,
            Ranking::TopK => RankStrategy::BoundedTopK,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search jobs by skill query
    SearchJobs {
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Search résumés by skill query
    SearchResumes {
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Search jobs by title keyword
    SearchTitles {
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Rank candidate résumés for an ad-hoc job description
    Candidates {
        description: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Best résumé matches for each job
    Match {
        /// How many jobs to process, front of the corpus first
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Regenerate the cleaned CSVs from the raw datasets
    Clean,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    if let Some(Commands::Clean) = &cli.command {
        return run_clean(&cli.data_dir);
    }

    let mut app = App::load(&cli.jobs, &cli.resumes, cli.retrieval.into(), cli.ranking.into())?;
    println!("Loaded {} jobs and {} resumes.", app.jobs.len(), app.resumes.len());

    match cli.command {
        Some(command) => run_command(&mut app, command),
        None => run_menu(&mut app, &cli.data_dir),
    }
}

fn run_command(app: &mut App, command: Commands) -> Result<()> {
    match command {
        Commands::SearchJobs { query, limit, json } => {
            let hits = app.search_jobs(&query, limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print!("{}", render_job_hits(&query, &hits));
            }
        }
        Commands::SearchResumes { query, limit, json } => {
            let hits = app.search_resumes(&query, limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print!("{}", render_resume_hits(&query, &hits));
            }
        }
        Commands::SearchTitles { query, limit, json } => {
            let hits = app.search_job_titles(&query, limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print!("{}", render_job_hits(&query, &hits));
            }
        }
        Commands::Candidates { description, limit, json } => {
            let report = app.candidates_for(&description, limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_candidates(&report));
            }
        }
        Commands::Match { limit, json } => {
            let report = app.best_matches(limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_match_report(&report));
            }
        }
        Commands::Clean => unreachable!("handled before loading"),
    }
    Ok(())
}

fn run_clean(data_dir: &Path) -> Result<()> {
    let (jobs, resumes) = cleaner::clean_all(data_dir)?;
    println!(
        "Cleaned {} jobs ({} skipped) and {} resumes ({} skipped).",
        jobs.written, jobs.skipped, resumes.written, resumes.skipped
    );
    Ok(())
}

fn run_menu(app: &mut App, data_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("========================================");
        println!("          Job Matching System");
        println!("========================================");
        println!("1. Search jobs by skills");
        println!("2. Search resumes by skills");
        println!("3. Find candidates for a job description");
        println!("4. Best matches for each job");
        println!("5. Clean raw data files");
        println!("6. Exit");
        let Some(choice) = prompt(&mut lines, "Enter your choice (1-6): ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(query) = prompt(&mut lines, "Skill query (e.g. Python, SQL): ")? else {
                    break;
                };
                print!("{}", render_job_hits(&query, &app.search_jobs(&query, 10)));
            }
            "2" => {
                let Some(query) = prompt(&mut lines, "Skill query (e.g. Python, SQL): ")? else {
                    break;
                };
                print!("{}", render_resume_hits(&query, &app.search_resumes(&query, 10)));
            }
            "3" => {
                let Some(description) = prompt(&mut lines, "Job description: ")? else {
                    break;
                };
                if description.trim().is_empty() {
                    println!("No job description entered.");
                    continue;
                }
                let report = app.candidates_for(&description, 10);
                print!("{}", render_candidates(&report));
            }
            "4" => {
                let limit = match prompt(
                    &mut lines,
                    "Jobs to process: 1) top 10  2) top 50  3) top 100  4) all: ",
                )? {
                    None => break,
                    Some(option) => match option.trim() {
                        "2" => 50,
                        "3" => 100,
                        "4" => app.jobs.len(),
                        _ => 10,
                    },
                };
                print!("{}", render_match_report(&app.best_matches(limit)));
            }
            "5" => {
                if let Err(err) = run_clean(data_dir) {
                    println!("Cleaning failed: {err:#}");
                } else {
                    println!("Restart with the cleaned files to load the new data.");
                }
            }
            "6" | "q" | "quit" | "exit" => break,
            other => println!("Invalid choice '{other}'."),
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?)
}
