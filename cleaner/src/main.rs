use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cleaner")]
#[command(about = "Rewrite raw job/résumé datasets into normalized CSV", long_about = None)]
struct Cli {
    /// Directory holding the raw datasets and receiving the cleaned ones
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let (jobs, resumes) = cleaner::clean_all(&cli.data_dir)?;
    println!(
        "Cleaned {} jobs ({} skipped) and {} resumes ({} skipped) in {}",
        jobs.written,
        jobs.skipped,
        resumes.written,
        resumes.skipped,
        cli.data_dir.display()
    );
    Ok(())
}
