//! `jyotishi` command-line tool.
//!
//! `chart` and `transits` print the same JSON a conversational caller
//! receives. The remaining subcommands expose the pure zodiac helpers.
//!
//! Log filtering follows `RUST_LOG` directives (default `warn`); logs go to
//! stderr.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use jyotishi_chart::FORMAT_24H;
use jyotishi_rs::{ChartConfig, ToolOutcome};
use jyotishi_vedic_base::{
    deg_to_dms, nakshatra_from_longitude, rashi_from_longitude, vimshottari_balance,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "jyotishi", about = "Simplified Vedic chart and transit tool")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart as JSON
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time, UTC (HH:MM or HH:MM AM/PM)
        #[arg(long)]
        time: String,
        /// Birth place label
        #[arg(long, default_value = "New Delhi")]
        location: String,
    },
    /// Transit signs as JSON
    Transits {
        /// Instant (YYYY-MM-DD HH:MM, UTC); defaults to now
        #[arg(long)]
        at: Option<String>,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Vimshottari birth balance from the Moon's sidereal longitude
    Dasha {
        /// Moon sidereal longitude in degrees
        moon_lon: f64,
    },
    /// Linear ayanamsha for a year
    Ayanamsa {
        #[arg(long)]
        year: i32,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
}

const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter from a `RUST_LOG` value; empty or unparsable values fall back to
/// `warn`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_logging() {
    let rust_log = env::var("RUST_LOG").ok();
    FmtSubscriber::builder()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ChartConfig> {
    match path {
        Some(p) => ChartConfig::load(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(ChartConfig::default()),
    }
}

/// Install a non-default configuration before the first request.
fn init_context(path: Option<&Path>) -> anyhow::Result<()> {
    if path.is_some() {
        jyotishi_rs::init(load_config(path)?)?;
    }
    Ok(())
}

/// Print the outcome as JSON; exit non-zero on an error outcome.
fn emit<T: Serialize>(outcome: &ToolOutcome<T>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn parse_instant(s: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), FORMAT_24H)
        .with_context(|| format!("invalid instant '{s}', expected YYYY-MM-DD HH:MM"))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Chart {
            date,
            time,
            location,
        } => {
            init_context(config_path)?;
            emit(&jyotishi_rs::calculate_vedic_chart(&date, &time, &location))?;
        }

        Commands::Transits { at } => {
            init_context(config_path)?;
            let outcome = match at {
                Some(s) => {
                    let instant = parse_instant(&s)?;
                    debug!("transits at {instant}");
                    match jyotishi_rs::transits_at(instant) {
                        Ok(snap) => ToolOutcome::Success(snap),
                        Err(e) => ToolOutcome::Error {
                            kind: e.kind(),
                            message: e.to_string(),
                        },
                    }
                }
                None => jyotishi_rs::get_current_transits(),
            };
            emit(&outcome)?;
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi){}",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi,
                if info.is_sandhi { " [sandhi]" } else { "" }
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
        }

        Commands::Dasha { moon_lon } => {
            let b = vimshottari_balance(moon_lon);
            println!(
                "{} ({}) mahadasha: {:.1} of {} years remaining ({:.1}% elapsed)",
                b.lord.english_name(),
                b.lord.name(),
                b.rounded_balance_years(),
                b.lord_years,
                b.elapsed_fraction * 100.0
            );
        }

        Commands::Ayanamsa { year } => {
            let model = load_config(config_path)?.ayanamsa.model();
            let deg = model.ayanamsha_deg(year);
            println!("{deg:.6} deg ({})", deg_to_dms(deg));
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }
    }

    Ok(())
}
