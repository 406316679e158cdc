//! mr-changelog - draft a changelog from merge requests in git history

mod cli;

use anstream::eprintln;
use clap::{ArgAction, Parser};
use cli::{GenerateOptions, run_generate};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Draft a changelog from GitLab merge requests referenced in git history
///
/// Requires GITLAB_PRIVATE_TOKEN. STARTING_POINT, EXCLUDE_MR_IDS, PROJECT_ID
/// and GITLAB_URL are read from the environment and can be overridden by flags.
#[derive(Parser, Debug)]
#[command(name = "mr-changelog", version, long_about = None)]
struct Cli {
    /// Path to the git repository
    #[arg(long, short = 'p')]
    path: Option<PathBuf>,

    /// Git ref to start from (defaults to the latest release tag)
    #[arg(long)]
    starting_point: Option<String>,

    /// Pattern a tag must fully match to count as a release
    #[arg(long)]
    starting_point_matcher: Option<String>,

    /// Merge request iid to leave out (repeatable)
    #[arg(long, short = 'x', value_name = "IID")]
    exclude: Vec<u64>,

    /// Project id or `group/project` path
    #[arg(long)]
    project_id: Option<String>,

    /// GitLab base URL
    #[arg(long, value_name = "URL")]
    gitlab_url: Option<String>,

    /// API version path segment
    #[arg(long, value_name = "VERSION")]
    api_version: Option<String>,

    /// Merge requests per API request
    #[arg(long, value_name = "N")]
    per_page: Option<usize>,

    /// Release name; adds a `## <release> (<date>)` header
    #[arg(long)]
    release: Option<String>,

    /// Prepend entries to this file instead of printing them
    #[arg(long, value_name = "FILE")]
    changelog_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for GenerateOptions {
    fn from(cli: Cli) -> Self {
        Self {
            path: cli.path,
            starting_point: cli.starting_point,
            starting_point_matcher: cli.starting_point_matcher,
            exclude: cli.exclude,
            project_id: cli.project_id,
            gitlab_url: cli.gitlab_url,
            api_version: cli.api_version,
            per_page: cli.per_page,
            release: cli.release,
            changelog_file: cli.changelog_file,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr; stdout carries only the changelog
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = GenerateOptions::from(cli);
    match run_generate(&options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::from(e.exit_code())
        }
    }
}
