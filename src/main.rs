use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_toc::build::CourseBuilder;
use course_toc::error::Result;

#[derive(Parser)]
#[command(name = "ctoc")]
#[command(version, about = "Generates Diplodoc navigation documents from a course content tree")]
struct Cli {
    /// Root directory of the course, where course-info.yaml lives.
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Log every generated document.
    #[arg(long, short)]
    verbose: bool,

    /// Only log errors.
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    CourseBuilder::load(cli.root)?.build()
}
