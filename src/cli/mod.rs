pub mod day;
pub mod report;

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::calendar::{build_legend, parse_date_key, CalendarView};
use crate::services::{logging, lookup_for, Config, Overrides, SnapshotLoader, ThemePreference};
use crate::types::DashboardSnapshot;

use self::day::DayArgs;

/// Workout contribution calendar for the terminal
#[derive(Parser)]
#[command(name = "workcal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Dashboard snapshot file (defaults to ~/.workcal/dashboard.json)
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Backend base URL for workout detail lookups
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Color theme
    #[arg(long, global = true, value_enum)]
    theme: Option<ThemePreference>,

    /// Pin "today" instead of reading the local clock
    #[arg(long, global = true, value_name = "YYYY-MM-DD", value_parser = parse_today)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch interactive TUI (default)
    Tui,

    /// Print the 365-day heatmap
    Calendar {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the activity-type legend
    Legend {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one day and its workout detail
    Day(DayArgs),

    /// Show streak, monthly stats and personal records
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    parse_date_key(s).ok_or_else(|| format!("expected YYYY-MM-DD, got {:?}", s))
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = Config::load(Overrides {
            data_file: self.data,
            api_url: self.api_url,
            theme: self.theme,
        })?;

        let command = self.command.unwrap_or(Commands::Tui);
        if let Commands::Tui = command {
            logging::init_file(&config.log_path())
                .with_context(|| format!("cannot open log file {}", config.log_path().display()))?;
            return crate::tui::run(&config, self.today);
        }

        logging::init_stderr();
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let snapshot = load_snapshot(&config)?;

        match command {
            Commands::Tui => Ok(()),
            Commands::Calendar { json } => {
                let view = CalendarView::build(&snapshot.contribution_calendar, today);
                if json {
                    print_json(&report::calendar_json(&view))
                } else {
                    print!("{}", report::calendar_text(&view));
                    Ok(())
                }
            }
            Commands::Legend { json } => {
                let legend = build_legend(&snapshot.activity_breakdown);
                if json {
                    print_json(&report::legend_json(&legend))
                } else {
                    print!("{}", report::legend_text(&legend));
                    Ok(())
                }
            }
            Commands::Day(args) => {
                let lookup = lookup_for(&config, &snapshot.workouts)?;
                args.run(&snapshot, lookup, today)?;
                Ok(())
            }
            Commands::Stats { json } => {
                if json {
                    print_json(&report::stats_json(&snapshot))
                } else {
                    print!("{}", report::stats_text(&snapshot));
                    Ok(())
                }
            }
        }
    }
}

fn load_snapshot(config: &Config) -> anyhow::Result<DashboardSnapshot> {
    let loader = SnapshotLoader::new(&config.data_file);
    loader
        .load()
        .with_context(|| format!("cannot load {}", loader.path().display()))
}
