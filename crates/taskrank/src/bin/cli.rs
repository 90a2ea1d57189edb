//! Taskrank CLI - rank tasks by what to do next.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::disallowed_macros)]
#![allow(clippy::uninlined_format_args)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncReadExt;

use taskrank::domain::{parse_request, ConfigDomain, RankRequest, RankingDomain};
use taskrank::entities::{RankerConfig, ScoredTask, Strategy};
use taskrank::errors::RankError;
use taskrank::ui;

#[derive(Parser)]
#[command(name = "taskrank")]
#[command(about = "Rank tasks by urgency, importance, effort and dependencies", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root directory (config is read from .taskrank/config.json)
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    /// Explicit config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every task in the input
    Rank(RankArgs),

    /// Show only the top tasks
    Suggest {
        #[command(flatten)]
        args: RankArgs,

        /// Number of tasks to show (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the available strategies and their weights
    Strategies,
}

#[derive(Args)]
struct RankArgs {
    /// JSON file with a task array or {"tasks": [...], "strategy": "..."}; `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Weighting strategy (overrides the one in the payload)
    #[arg(short, long, env = "TASKRANK_STRATEGY")]
    strategy: Option<String>,

    /// Reference date for urgency (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    today: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Print each task's score breakdown
    #[arg(short, long)]
    explain: bool,
}

fn get_project_path(cli_path: Option<PathBuf>) -> PathBuf {
    cli_path.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_domain = match cli.config {
        Some(path) => ConfigDomain::at(path),
        None => ConfigDomain::new(get_project_path(cli.project)),
    };
    let config = config_domain.load().await?;

    match cli.command {
        Commands::Rank(args) => {
            let (domain, request) = prepare(&args, &config).await?;
            let ranked = domain.rank_request(&request)?;
            print_ranking(&ranked, &args)?;
        }

        Commands::Suggest { args, limit } => {
            let limit = limit.unwrap_or(config.suggestion_limit);
            let (domain, request) = prepare(&args, &config).await?;
            let ranked = domain.suggest_request(&request, limit)?;
            print_ranking(&ranked, &args)?;
        }

        Commands::Strategies => {
            println!("{}", ui::strategy_table(config.default_strategy));
        }
    }

    Ok(())
}

async fn prepare(
    args: &RankArgs,
    config: &RankerConfig,
) -> anyhow::Result<(RankingDomain, RankRequest)> {
    let today = match &args.today {
        Some(value) => parse_today(value)?,
        None => chrono::Local::now().date_naive(),
    };

    let body = read_input(&args.input).await?;
    let mut request = parse_request(&body)
        .with_context(|| format!("invalid input in {}", args.input.display()))?;
    request = apply_strategy_override(request, args.strategy.as_deref(), config)?;

    tracing::debug!(strategy = %request.strategy, %today, "ranking input");
    Ok((RankingDomain::new(today), request))
}

/// Command-line strategy beats the payload, which beats the config default
fn apply_strategy_override(
    request: RankRequest,
    flag: Option<&str>,
    config: &RankerConfig,
) -> Result<RankRequest, RankError> {
    if let Some(name) = flag.filter(|s| !s.trim().is_empty()) {
        let strategy: Strategy = name.parse()?;
        return Ok(RankRequest::new(request.tasks, strategy));
    }
    if request.explicit_strategy {
        return Ok(request);
    }
    Ok(RankRequest::new(request.tasks, config.default_strategy))
}

fn parse_today(value: &str) -> Result<NaiveDate, RankError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| RankError::InvalidDate {
        value: value.to_string(),
    })
}

async fn read_input(path: &Path) -> Result<String, RankError> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        tokio::io::stdin().read_to_string(&mut body).await?;
        return Ok(body);
    }

    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| RankError::FileReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

fn print_ranking(ranked: &[ScoredTask], args: &RankArgs) -> anyhow::Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        ui::print_info("No tasks to rank");
        return Ok(());
    }

    println!("{}", ui::ranking_table(ranked));
    if args.explain {
        println!();
        ui::display_explanations(ranked);
    }
    println!();
    ui::print_success(&format!(
        "Next up: {} - {}",
        ranked[0].id, ranked[0].title
    ));
    Ok(())
}
