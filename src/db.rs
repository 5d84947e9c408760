//! Database schema and operations

use std::fmt;

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::catalog;
use crate::models::{Artifact, CalculationLog, FactionUnits, Session, Unit, UnitSummary};

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = ON;

        -- Static unit catalog
        CREATE TABLE IF NOT EXISTS units (
            unit_id INTEGER PRIMARY KEY AUTOINCREMENT,
            faction TEXT NOT NULL,
            unit_name TEXT NOT NULL UNIQUE,
            hp REAL NOT NULL,
            is_upgraded INTEGER NOT NULL,
            gold_cost REAL NOT NULL DEFAULT 0
        );

        -- HP-boosting artifacts
        CREATE TABLE IF NOT EXISTS artifacts (
            artifact_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            hp_bonus INTEGER NOT NULL DEFAULT 0
        );

        -- Saved games
        CREATE TABLE IF NOT EXISTS games (
            game_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL,
            pit_lord_count INTEGER NOT NULL DEFAULT 0,
            first_aid_level INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS game_artifacts (
            game_id_fk INTEGER NOT NULL,
            artifact_id_fk INTEGER NOT NULL,
            FOREIGN KEY (game_id_fk) REFERENCES games (game_id) ON DELETE CASCADE,
            FOREIGN KEY (artifact_id_fk) REFERENCES artifacts (artifact_id) ON DELETE CASCADE,
            PRIMARY KEY (game_id_fk, artifact_id_fk)
        );

        -- Append-only history of calculations per game
        CREATE TABLE IF NOT EXISTS calculation_logs (
            log_id INTEGER PRIMARY KEY AUTOINCREMENT,
            game_id_fk INTEGER NOT NULL,
            timestamp TEXT NOT NULL,
            unit_name TEXT NOT NULL,
            base_hp REAL NOT NULL,
            modified_hp REAL NOT NULL,
            unit_count_input INTEGER NOT NULL,
            pit_lord_input INTEGER NOT NULL,
            demons_gained REAL NOT NULL,
            wasted_hp REAL NOT NULL,
            FOREIGN KEY (game_id_fk) REFERENCES games (game_id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_units_faction ON units(faction, is_upgraded);
        CREATE INDEX IF NOT EXISTS idx_logs_game ON calculation_logs(game_id_fk);
        "#,
    )?;
    debug!("schema ready");
    Ok(())
}

/// Rows inserted by [`seed_catalog`]
#[derive(Debug, Default)]
pub struct SeedStats {
    pub units: usize,
    pub artifacts: usize,
}

impl fmt::Display for SeedStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seeding complete:")?;
        writeln!(f, "  Units added:     {}", self.units)?;
        write!(f, "  Artifacts added: {}", self.artifacts)
    }
}

/// Insert the built-in units and artifacts, skipping ones already present
pub fn seed_catalog(conn: &mut Connection) -> Result<SeedStats> {
    let tx = conn.transaction()?;
    let mut stats = SeedStats::default();
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO units (faction, unit_name, hp, is_upgraded, gold_cost)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for &(faction, name, hp, is_upgraded, gold_cost) in catalog::UNITS {
            stats.units += stmt.execute((faction, name, hp, is_upgraded, gold_cost))?;
        }

        let mut stmt = tx.prepare("INSERT OR IGNORE INTO artifacts (name, hp_bonus) VALUES (?1, ?2)")?;
        for &(name, hp_bonus) in catalog::ARTIFACTS {
            stats.artifacts += stmt.execute((name, hp_bonus))?;
        }
    }
    tx.commit()?;

    info!(units = stats.units, artifacts = stats.artifacts, "catalog seeded");
    Ok(stats)
}

fn unit_from_row(row: &Row<'_>) -> rusqlite::Result<Unit> {
    Ok(Unit {
        id: row.get(0)?,
        faction: row.get(1)?,
        name: row.get(2)?,
        hp: row.get(3)?,
        is_upgraded: row.get(4)?,
        gold_cost: row.get(5)?,
    })
}

const UNIT_COLUMNS: &str = "unit_id, faction, unit_name, hp, is_upgraded, gold_cost";

/// Distinct factions, sorted
pub fn list_factions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT faction FROM units ORDER BY faction")?;
    let rows = stmt.query_map([], |row| row.get(0))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

/// A faction's units, each tier ordered by HP
pub fn units_by_faction(conn: &Connection, faction: &str) -> Result<FactionUnits> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {UNIT_COLUMNS} FROM units WHERE faction = ?1 ORDER BY hp, unit_name"
    ))?;
    let rows = stmt.query_map([faction], unit_from_row)?;

    let mut units = FactionUnits::default();
    for row in rows {
        let unit = row?;
        if unit.is_upgraded {
            units.upgraded.push(unit);
        } else {
            units.base.push(unit);
        }
    }
    Ok(units)
}

pub fn find_unit(conn: &Connection, name: &str) -> Result<Option<Unit>> {
    let unit = conn
        .query_row(
            &format!("SELECT {UNIT_COLUMNS} FROM units WHERE unit_name = ?1"),
            [name],
            unit_from_row,
        )
        .optional()?;
    Ok(unit)
}

fn artifact_from_row(row: &Row<'_>) -> rusqlite::Result<Artifact> {
    Ok(Artifact {
        id: row.get(0)?,
        name: row.get(1)?,
        hp_bonus: row.get(2)?,
    })
}

pub fn list_artifacts(conn: &Connection) -> Result<Vec<Artifact>> {
    let mut stmt = conn.prepare("SELECT artifact_id, name, hp_bonus FROM artifacts ORDER BY name")?;
    let rows = stmt.query_map([], artifact_from_row)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

pub fn find_artifact(conn: &Connection, name: &str) -> Result<Option<Artifact>> {
    let artifact = conn
        .query_row(
            "SELECT artifact_id, name, hp_bonus FROM artifacts WHERE name = ?1",
            [name],
            artifact_from_row,
        )
        .optional()?;
    Ok(artifact)
}

fn session_from_row(row: &Row<'_>) -> rusqlite::Result<Session> {
    Ok(Session {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
        pit_lord_count: row.get::<_, i64>(3)?.max(0) as u64,
        first_aid_level: row.get::<_, i64>(4)?.max(0) as u32,
    })
}

pub fn find_session(conn: &Connection, name: &str) -> Result<Option<Session>> {
    let session = conn
        .query_row(
            "SELECT game_id, name, created_at, pit_lord_count, first_aid_level FROM games WHERE name = ?1",
            [name],
            session_from_row,
        )
        .optional()?;
    Ok(session)
}

/// Load a game by name, creating it with no Pit Lords if it is new
pub fn get_or_create_session(conn: &Connection, name: &str) -> Result<Session> {
    if let Some(session) = find_session(conn, name)? {
        return Ok(session);
    }

    conn.execute(
        "INSERT INTO games (name, created_at) VALUES (?1, ?2)",
        (name, Utc::now().to_rfc3339()),
    )?;
    info!(session = name, "created game session");

    find_session(conn, name)?.with_context(|| format!("Game '{}' vanished after insert", name))
}

pub fn update_session(conn: &Connection, id: i64, pit_lord_count: u64, first_aid_level: u32) -> Result<()> {
    let changed = conn.execute(
        "UPDATE games SET pit_lord_count = ?1, first_aid_level = ?2 WHERE game_id = ?3",
        (pit_lord_count as i64, first_aid_level, id),
    )?;
    if changed == 0 {
        anyhow::bail!("No game with id {}", id);
    }
    info!(game_id = id, pit_lord_count, first_aid_level, "updated game session");
    Ok(())
}

/// Attach an artifact to a game; returns false if it was already attached
pub fn attach_artifact(conn: &Connection, session_id: i64, artifact_id: i64) -> Result<bool> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO game_artifacts (game_id_fk, artifact_id_fk) VALUES (?1, ?2)",
        (session_id, artifact_id),
    )?;
    Ok(inserted > 0)
}

pub fn session_artifacts(conn: &Connection, session_id: i64) -> Result<Vec<Artifact>> {
    let mut stmt = conn.prepare(
        "SELECT a.artifact_id, a.name, a.hp_bonus
         FROM artifacts a
         JOIN game_artifacts ga ON a.artifact_id = ga.artifact_id_fk
         WHERE ga.game_id_fk = ?1
         ORDER BY a.name",
    )?;
    let rows = stmt.query_map([session_id], artifact_from_row)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

/// Total HP bonus from a game's artifacts
pub fn artifact_bonus(conn: &Connection, session_id: i64) -> Result<i64> {
    let bonus = conn.query_row(
        "SELECT COALESCE(SUM(a.hp_bonus), 0)
         FROM artifacts a
         JOIN game_artifacts ga ON a.artifact_id = ga.artifact_id_fk
         WHERE ga.game_id_fk = ?1",
        [session_id],
        |row| row.get(0),
    )?;
    Ok(bonus)
}

/// Append a calculation to a game's log
pub fn append_log(conn: &Connection, log: &CalculationLog) -> Result<i64> {
    conn.execute(
        "INSERT INTO calculation_logs
            (game_id_fk, timestamp, unit_name, base_hp, modified_hp,
             unit_count_input, pit_lord_input, demons_gained, wasted_hp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        (
            log.session_id,
            Utc::now().to_rfc3339(),
            &log.unit_name,
            log.base_hp,
            log.modified_hp,
            log.unit_count as i64,
            log.pit_lords as i64,
            log.demons_gained,
            log.wasted_hp,
        ),
    )?;
    let id = conn.last_insert_rowid();
    debug!(log_id = id, game_id = log.session_id, unit = %log.unit_name, "logged calculation");
    Ok(id)
}

/// Logged totals per unit, highest demon yield first
pub fn session_summary(conn: &Connection, session_id: i64) -> Result<Vec<UnitSummary>> {
    let mut stmt = conn.prepare(
        "SELECT unit_name,
                SUM(unit_count_input) AS total_units,
                SUM(demons_gained) AS total_demons,
                SUM(wasted_hp) AS total_wasted
         FROM calculation_logs
         WHERE game_id_fk = ?1
         GROUP BY unit_name
         ORDER BY total_demons DESC, unit_name",
    )?;
    let rows = stmt.query_map([session_id], |row| {
        Ok(UnitSummary {
            unit_name: row.get(0)?,
            total_units: row.get::<_, i64>(1)?.max(0) as u64,
            total_demons: row.get(2)?,
            total_wasted_hp: row.get(3)?,
        })
    })?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        seed_catalog(&mut conn).unwrap();
        conn
    }

    fn log_row(session_id: i64, unit: &str, count: u64, demons: f64, wasted: f64) -> CalculationLog {
        CalculationLog {
            session_id,
            unit_name: unit.to_string(),
            base_hp: 10.0,
            modified_hp: 10.0,
            unit_count: count,
            pit_lords: 5,
            demons_gained: demons,
            wasted_hp: wasted,
        }
    }

    #[test]
    fn seeding_is_idempotent() {
        let mut conn = seeded();
        let again = seed_catalog(&mut conn).unwrap();
        assert_eq!(again.units, 0);
        assert_eq!(again.artifacts, 0);

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM units", [], |r| r.get(0)).unwrap();
        assert_eq!(count as usize, catalog::UNITS.len());
    }

    #[test]
    fn factions_are_sorted_and_distinct() {
        let factions = list_factions(&seeded()).unwrap();
        assert!(factions.contains(&"Inferno".to_string()));
        assert!(factions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn faction_units_split_by_tier_in_hp_order() {
        let units = units_by_faction(&seeded(), "Inferno").unwrap();
        assert_eq!(units.base.len(), 7);
        assert_eq!(units.upgraded.len(), 7);
        assert!(units.base.iter().all(|u| !u.is_upgraded));
        assert!(units.upgraded.iter().all(|u| u.is_upgraded));
        assert!(units.base.windows(2).all(|w| w[0].hp <= w[1].hp));
        assert_eq!(units.base[0].name, "Imp");

        assert!(units_by_faction(&seeded(), "Nowhere").unwrap().is_empty());
    }

    #[test]
    fn unit_lookup_by_name() {
        let conn = seeded();
        let demon = find_unit(&conn, "Demon").unwrap().unwrap();
        assert_eq!(demon.hp, 35.0);
        assert_eq!(demon.gold_cost, 250.0);
        assert!(find_unit(&conn, "Chupacabra").unwrap().is_none());
    }

    #[test]
    fn sessions_are_created_once_and_updated() {
        let conn = seeded();
        let first = get_or_create_session(&conn, "campaign").unwrap();
        assert_eq!(first.pit_lord_count, 0);
        assert_eq!(first.first_aid_level, 0);

        update_session(&conn, first.id, 4, 2).unwrap();
        let again = get_or_create_session(&conn, "campaign").unwrap();
        assert_eq!(again.id, first.id);
        assert_eq!(again.pit_lord_count, 4);
        assert_eq!(again.first_aid_level, 2);

        assert!(update_session(&conn, 9999, 1, 1).is_err());
    }

    #[test]
    fn artifacts_add_up_per_session() {
        let conn = seeded();
        let session = get_or_create_session(&conn, "campaign").unwrap();
        assert_eq!(artifact_bonus(&conn, session.id).unwrap(), 0);

        let vial = find_artifact(&conn, "Vial of Lifeblood").unwrap().unwrap();
        let ring = find_artifact(&conn, "Ring of Life").unwrap().unwrap();
        assert!(attach_artifact(&conn, session.id, vial.id).unwrap());
        assert!(!attach_artifact(&conn, session.id, vial.id).unwrap());
        assert!(attach_artifact(&conn, session.id, ring.id).unwrap());

        assert_eq!(artifact_bonus(&conn, session.id).unwrap(), 2);
        let names: Vec<_> = session_artifacts(&conn, session.id)
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Ring of Life", "Vial of Lifeblood"]);
        assert_eq!(list_artifacts(&conn).unwrap().len(), 3);
    }

    #[test]
    fn summary_groups_by_unit_ordered_by_demons() {
        let conn = seeded();
        let session = get_or_create_session(&conn, "campaign").unwrap();
        let other = get_or_create_session(&conn, "other").unwrap();

        append_log(&conn, &log_row(session.id, "Pikinier", 7, 2.0, 0.0)).unwrap();
        append_log(&conn, &log_row(session.id, "Gryf", 10, 7.14, 5.0)).unwrap();
        append_log(&conn, &log_row(session.id, "Pikinier", 14, 4.0, 0.0)).unwrap();
        append_log(&conn, &log_row(other.id, "Gryf", 100, 71.4, 15.0)).unwrap();

        let summary = session_summary(&conn, session.id).unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].unit_name, "Gryf");
        assert_eq!(summary[0].total_units, 10);
        assert_eq!(summary[1].unit_name, "Pikinier");
        assert_eq!(summary[1].total_units, 21);
        assert_eq!(summary[1].total_demons, 6.0);

        assert!(session_summary(&conn, 9999).unwrap().is_empty());
    }
}
