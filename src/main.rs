mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use monthcal_core::{Color, DateKey, EventDraft, ExportFormat, MonthKey, MonthcalConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "monthcal")]
#[command(about = "A monthly calendar: add timed events to days, search them and export a month")]
struct Cli {
    /// Directory holding the event store (overrides data_dir from config.toml)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an event to a day. Fails if it overlaps an existing event that day
    Add {
        /// Day of the event (YYYY-MM-DD)
        date: DateKey,

        title: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// blue, red, green or purple
        #[arg(short, long, default_value = "blue")]
        color: Color,
    },
    /// Delete the event at INDEX (as shown by `list`) from a day
    Delete { date: DateKey, index: usize },
    /// List the events of a day (defaults to today)
    List {
        date: Option<DateKey>,

        /// Only show events whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a month grid (defaults to the current month)
    Show {
        /// Month to show (YYYY-MM)
        month: Option<MonthKey>,

        /// Only show events whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Export a month's events to calendar-events-<YYYY-MM>.<format>
    Export {
        /// Month to export (YYYY-MM)
        month: Option<MonthKey>,

        /// json or ics
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Directory to write to (defaults to export_dir from config.toml, then ".")
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.data_dir)?;
    let mut store = commands::open_store(&config)?;

    match cli.command {
        Commands::Add {
            date,
            title,
            start,
            end,
            description,
            color,
        } => {
            let draft = EventDraft {
                title,
                start_time: start,
                end_time: end,
                description,
                color,
            };
            commands::add::run(&mut store, date, &draft)
        }
        Commands::Delete { date, index } => commands::delete::run(&mut store, date, index),
        Commands::List { date, search } => {
            let date = date.unwrap_or_else(DateKey::today);
            commands::list::run(&store, date, search.as_deref())
        }
        Commands::Show { month, search } => {
            let month = month.unwrap_or_else(MonthKey::current);
            commands::show::run(&store, month, search.as_deref())
        }
        Commands::Export { month, format, out } => {
            let month = month.unwrap_or_else(MonthKey::current);
            let dir = out.unwrap_or_else(|| config.export_path());
            commands::export::run(&store, month, format, &dir)
        }
    }
}

/// Logs go to stderr so they never mix with command output. Level from RUST_LOG, default warn.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(data_dir: Option<PathBuf>) -> Result<MonthcalConfig> {
    let mut config = MonthcalConfig::load().context("Failed to load monthcal config")?;

    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }

    debug!(data_dir = %config.data_path().display(), key = %config.storage_key, "Loaded config");
    Ok(config)
}
