mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::add::AddArgs;
use commands::show::{FilterChange, Navigate};
use sportcal_core::config::SportCalConfig;
use sportcal_core::month::MonthCursor;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sportcal")]
#[command(about = "Browse a month calendar of sporting events, add fixtures and view their details")]
struct Cli {
    /// Config file (defaults to ~/.config/sportcal/config.toml)
    #[arg(long, global = true, env = "SPORTCAL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the calendar month
    Show {
        /// Month to show (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Only show events of this sport
        #[arg(short, long, conflicts_with = "all")]
        sport: Option<String>,

        /// Show events of every sport
        #[arg(long)]
        all: bool,
    },
    /// Show the next month
    Next,
    /// Show the previous month
    Prev,
    /// List the sports available as filters
    Sports,
    /// Add an event; missing required fields are prompted for
    Add {
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        #[arg(short, long)]
        sport: Option<String>,

        /// e.g. "Salzburg vs. Sturm"
        #[arg(long)]
        teams: Option<String>,

        /// Defaults to TBD
        #[arg(short, long)]
        venue: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Select an event by id and show its details
    Select { id: i64 },
    /// Show the selected event
    Detail,
    /// Forget the selected event and displayed month
    EndSession,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = SportCalConfig::load(cli.config.as_deref())?;
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Show { month, sport, all } => {
            let navigate = match month {
                Some(month) => Navigate::To(MonthCursor::parse(&month)?),
                None => Navigate::Stay,
            };
            let filter = match (sport, all) {
                (Some(sport), _) => FilterChange::Sport(sport),
                (None, true) => FilterChange::All,
                (None, false) => FilterChange::Keep,
            };
            commands::show::run(&cfg, today, navigate, filter).await
        }
        Commands::Next => commands::show::run(&cfg, today, Navigate::Next, FilterChange::Keep).await,
        Commands::Prev => commands::show::run(&cfg, today, Navigate::Prev, FilterChange::Keep).await,
        Commands::Sports => commands::sports::run(&cfg, today).await,
        Commands::Add {
            date,
            time,
            sport,
            teams,
            venue,
            description,
        } => {
            let args = AddArgs {
                date,
                time,
                sport,
                teams,
                venue,
                description,
            };
            commands::add::run(&cfg, today, args).await
        }
        Commands::Select { id } => commands::detail::select(&cfg, today, id).await,
        Commands::Detail => commands::detail::run(&cfg),
        Commands::EndSession => commands::end_session::run(&cfg),
    }
}
