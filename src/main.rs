//! Demon Farming Calculator
//!
//! Works out how many demons a stack of units yields when sacrificed to
//! Pit Lords in Heroes of Might and Magic III: Horn of the Abyss.

mod calculator;
mod catalog;
mod config;
mod db;
mod distribution;
mod error;
mod models;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rusqlite::Connection;
use tracing::{info, warn};

use crate::calculator::{Calculator, ConversionReport, HpModifiers, ReverseReport};
use crate::config::AppConfig;
use crate::models::{CalculationLog, Session, Unit};

#[derive(Parser)]
#[command(name = "demon-calc")]
#[command(about = "Demon farming calculator for Heroes of Might and Magic III (HotA)")]
struct Cli {
    /// Path to the SQLite database
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Where the sacrificed unit's HP comes from
#[derive(Args)]
struct UnitSource {
    /// HP of a single unit, entered manually
    #[arg(long, conflicts_with = "unit", required_unless_present = "unit")]
    hp: Option<f64>,

    /// Unit name from the catalog (e.g. "Pikinier")
    #[arg(short, long)]
    unit: Option<String>,

    /// Gold cost per unit (overrides the catalog price)
    #[arg(long)]
    cost: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the schema and load the unit and artifact lists
    Init,

    /// List all factions
    Factions,

    /// List a faction's units by tier
    Units {
        faction: String,
    },

    /// List HP-boosting artifacts
    Artifacts,

    /// Calculate demons gained from a stack
    Calc {
        #[command(flatten)]
        source: UnitSource,

        /// Number of units in the stack (negative counts are treated as 0)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: i64,

        /// Number of Pit Lords (defaults to the game's count with --session)
        #[arg(short, long, required_unless_present = "session")]
        lords: Option<u64>,

        /// Game to apply modifiers from and log the result to
        #[arg(short, long)]
        session: Option<String>,

        /// Skip the distribution chart
        #[arg(long)]
        no_chart: bool,
    },

    /// Calculate the units needed for a target number of demons
    Reverse {
        #[command(flatten)]
        source: UnitSource,

        /// Desired number of demons
        #[arg(short, long)]
        target: u64,
    },

    /// Manage saved games
    #[command(subcommand)]
    Session(SessionCommand),
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Show a game's settings (creating it if needed)
    Show { name: String },

    /// Change a game's Pit Lord count or First Aid level
    Set {
        name: String,

        #[arg(short, long)]
        lords: Option<u64>,

        /// First Aid skill level (0-3)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=3))]
        first_aid: Option<u32>,
    },

    /// Attach an artifact to a game
    Artifact { name: String, artifact: String },

    /// Totals of everything logged for a game
    Summary { name: String },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let cfg = AppConfig::load_or_default(cli.config.as_deref())?;
    let calculator = Calculator::new(cfg.economy()?);
    let db_path = cfg.database_path(cli.database);
    info!(database = %db_path.display(), "starting");

    let mut conn = Connection::open(&db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;
    db::init_schema(&conn)?;

    match cli.command {
        Commands::Init => {
            let stats = db::seed_catalog(&mut conn)?;
            println!("Database initialized at: {}", db_path.display());
            println!("{}", stats);
        }

        Commands::Factions => {
            let factions = db::list_factions(&conn)?;
            if factions.is_empty() {
                println!("No units in database. Run 'init' first.");
            } else {
                println!("Factions:");
                for f in factions {
                    println!("  {}", f);
                }
            }
        }

        Commands::Units { faction } => {
            let units = db::units_by_faction(&conn, &faction)?;
            if units.is_empty() {
                println!("No units found for '{}'.", faction);
            } else {
                print_tier("Non-upgraded", &units.base);
                print_tier("Upgraded", &units.upgraded);
            }
        }

        Commands::Artifacts => {
            for a in db::list_artifacts(&conn)? {
                println!("  {:<25} +{} HP", a.name, a.hp_bonus);
            }
        }

        Commands::Calc {
            source,
            count,
            lords,
            session,
            no_chart,
        } => {
            let (unit_name, base_hp, catalog_cost) = resolve_unit(&conn, &source)?;
            let unit_count = clamp_count(count);

            let session = match session {
                Some(name) => Some(db::get_or_create_session(&conn, &name)?),
                None => None,
            };
            let pit_lords = lords
                .or(session.as_ref().map(|s| s.pit_lord_count))
                .unwrap_or_default();
            let modifiers = session.as_ref().map(|s| game_modifiers(&conn, s, base_hp)).transpose()?;
            let unit_hp = modifiers
                .map(|m| calculator::modified_unit_value(m.base_hp, m.artifact_bonus, m.first_aid_level))
                .unwrap_or(base_hp);

            let neighborhood = distribution::build_neighborhood(&calculator, unit_hp, unit_count, pit_lords);
            let result = neighborhood.center;
            let report = ConversionReport {
                unit_name: unit_name.clone(),
                modifiers,
                result,
                economics: calculator.economics(unit_count, catalog_cost, result.actual_demons_gained),
            };

            println!("{}", report);
            if !no_chart {
                println!("{}", distribution::format_chart(&neighborhood));
            }

            if let Some(s) = &session {
                db::append_log(
                    &conn,
                    &CalculationLog {
                        session_id: s.id,
                        unit_name,
                        base_hp,
                        modified_hp: unit_hp,
                        unit_count,
                        pit_lords,
                        demons_gained: result.actual_demons_gained,
                        wasted_hp: result.wasted_hp,
                    },
                )?;
                println!("Logged to game '{}'.", s.name);
            }
        }

        Commands::Reverse { source, target } => {
            let (unit_name, unit_hp, unit_cost) = resolve_unit(&conn, &source)?;
            let result = calculator.reverse_convert(target, unit_hp, unit_cost)?;
            let report = ReverseReport {
                unit_name,
                result,
                economics: calculator.economics(result.needed_units, unit_cost, result.actual_demons_yield),
            };
            println!("{}", report);
        }

        Commands::Session(command) => run_session_command(&conn, command)?,
    }

    Ok(())
}

fn run_session_command(conn: &Connection, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Show { name } => {
            let session = db::get_or_create_session(conn, &name)?;
            print_session(conn, &session)?;
        }

        SessionCommand::Set { name, lords, first_aid } => {
            let session = db::get_or_create_session(conn, &name)?;
            db::update_session(
                conn,
                session.id,
                lords.unwrap_or(session.pit_lord_count),
                first_aid.unwrap_or(session.first_aid_level),
            )?;
            let updated = db::get_or_create_session(conn, &name)?;
            print_session(conn, &updated)?;
        }

        SessionCommand::Artifact { name, artifact } => {
            let session = db::get_or_create_session(conn, &name)?;
            let found = db::find_artifact(conn, &artifact)?
                .with_context(|| format!("Artifact '{}' not found. Run 'artifacts' to list them.", artifact))?;
            if db::attach_artifact(conn, session.id, found.id)? {
                println!("Attached {} to '{}'.", found.name, session.name);
            } else {
                println!("{} is already attached to '{}'.", found.name, session.name);
            }
        }

        SessionCommand::Summary { name } => {
            let session = db::find_session(conn, &name)?.with_context(|| format!("Game '{}' not found", name))?;
            let rows = db::session_summary(conn, session.id)?;
            if rows.is_empty() {
                println!("No logs found for game '{}'.", name);
                return Ok(());
            }

            println!("Game summary: '{}'", name);
            println!("{:<28} {:>12} {:>14} {:>10}", "Unit", "Total Count", "Demons Gained", "Wasted HP");
            println!("{}", "-".repeat(67));
            for r in &rows {
                println!(
                    "{:<28} {:>12} {:>14.2} {:>10.2}",
                    r.unit_name, r.total_units, r.total_demons, r.total_wasted_hp
                );
            }
            println!("{}", "-".repeat(67));
            println!(
                "{:<28} {:>12} {:>14.2} {:>10.2}",
                "TOTAL",
                rows.iter().map(|r| r.total_units).sum::<u64>(),
                rows.iter().map(|r| r.total_demons).sum::<f64>(),
                rows.iter().map(|r| r.total_wasted_hp).sum::<f64>()
            );
        }
    }
    Ok(())
}

/// Name, HP and gold cost of the unit being sacrificed
fn resolve_unit(conn: &Connection, source: &UnitSource) -> Result<(String, f64, f64)> {
    let (name, hp, catalog_cost) = match (&source.unit, source.hp) {
        (Some(name), _) => {
            let unit = db::find_unit(conn, name)?
                .with_context(|| format!("Unit '{}' not found. Run 'init' to load the catalog.", name))?;
            (unit.name, unit.hp, unit.gold_cost)
        }
        (None, Some(hp)) => ("Custom".to_string(), hp, 0.0),
        (None, None) => anyhow::bail!("Either --hp or --unit is required"),
    };
    Ok((name, hp, source.cost.unwrap_or(catalog_cost)))
}

fn game_modifiers(conn: &Connection, session: &Session, base_hp: f64) -> Result<HpModifiers> {
    Ok(HpModifiers {
        base_hp,
        artifact_bonus: db::artifact_bonus(conn, session.id)?,
        first_aid_level: session.first_aid_level,
    })
}

/// Negative stack sizes are meaningless; treat them as an empty stack
fn clamp_count(count: i64) -> u64 {
    if count < 0 {
        warn!(count, "negative unit count clamped to 0");
    }
    count.max(0) as u64
}

fn print_tier(title: &str, units: &[Unit]) {
    if units.is_empty() {
        return;
    }
    println!("{}:", title);
    println!("  {:<28} {:>6} {:>8}", "Unit", "HP", "Gold");
    for u in units {
        let cost = if u.gold_cost > 0.0 {
            format!("{:.0}", u.gold_cost)
        } else {
            "N/A".to_string()
        };
        println!("  {:<28} {:>6} {:>8}", u.name, u.hp, cost);
    }
}

fn print_session(conn: &Connection, session: &Session) -> Result<()> {
    println!("Game: {}", session.name);
    println!("  Created:         {}", session.created_at);
    println!("  Pit Lords:       {}", session.pit_lord_count);
    println!("  First Aid level: {}", session.first_aid_level);
    let artifacts = db::session_artifacts(conn, session.id)?;
    if !artifacts.is_empty() {
        println!("  Artifacts:");
        for a in artifacts {
            println!("    {} (+{} HP)", a.name, a.hp_bonus);
        }
    }
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("demon_calc=warn"));

    if std::env::var("DEMON_CALC_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
