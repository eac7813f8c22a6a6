mod commands;
mod config;
mod render;
mod store;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use commands::click::{ClickArgs, ViewArg};
use crate::config::AgendaConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Show appointments on a day or week grid and pick slots for new ones")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One column per active resource for a single day
    Day {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Only show this resource (by id)
        #[arg(short, long)]
        resource: Option<String>,
    },
    /// One column per day for the week containing a date
    Week {
        /// Any day of the week to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Click a grid cell: select an appointment or start a new one
    Click {
        /// Grid to click in
        #[arg(value_enum)]
        view: ViewArg,

        /// Day the grid shows (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Column key: resource id (day) or YYYY-MM-DD (week)
        #[arg(short, long)]
        column: String,

        /// Hour row (e.g. 9 for 09:00)
        #[arg(long)]
        hour: u32,

        /// Click the n-th appointment in the cell instead of free space
        #[arg(short, long)]
        entry: Option<usize>,

        /// Day view only: restrict columns to this resource
        #[arg(short, long)]
        resource: Option<String>,
    },
    /// Show configuration paths and grid settings
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = AgendaConfig::load()?;

    match cli.command {
        Commands::Day { date, resource } => {
            let date = parse_date(date.as_deref())?;
            commands::day::run(&config, date, resource).await
        }
        Commands::Week { date } => {
            let date = parse_date(date.as_deref())?;
            commands::week::run(&config, date).await
        }
        Commands::Click {
            view,
            date,
            column,
            hour,
            entry,
            resource,
        } => {
            let args = ClickArgs {
                view,
                date: parse_date(date.as_deref())?,
                column,
                hour,
                entry,
                resource,
            };
            commands::click::run(&config, args).await
        }
        Commands::Config => commands::config::run(&config),
    }
}

/// Logs go to stderr so they never mix with the grid. Filter with AGENDA_LOG
/// (e.g. `AGENDA_LOG=agenda_core=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("AGENDA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse YYYY-MM-DD, defaulting to today's local date
fn parse_date(input: Option<&str>) -> Result<NaiveDate> {
    match input {
        None | Some("today") => Ok(Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2024-05-01")).expect("Should parse date"),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(parse_date(None).expect("Should default"), Local::now().date_naive());
        assert!(parse_date(Some("01/05/2024")).is_err());
    }

    #[test]
    fn test_cli_parses_click() {
        let cli = Cli::try_parse_from([
            "agenda", "click", "day", "--date", "2024-05-01", "--column", "b1", "--hour", "9",
        ])
        .expect("Should parse click command");

        match cli.command {
            Commands::Click { view, column, hour, entry, .. } => {
                assert_eq!(view, ViewArg::Day);
                assert_eq!(column, "b1");
                assert_eq!(hour, 9);
                assert_eq!(entry, None);
            }
            _ => panic!("Expected click command"),
        }
    }
}
