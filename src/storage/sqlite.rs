use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, Row, params, params_from_iter};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::model::{
    Categorical, Confidence, HoleRecord, RoundExport, RoundHole, RoundStatus, RoundSummary,
    StoredBreakdown, decode,
};
use crate::storage::{Storage, StorageError};

const SCHEMA: [&str; 2] = [
    include_str!("../sql/schema/sqlite/00_rounds.sql"),
    include_str!("../sql/schema/sqlite/01_round_holes.sql"),
];

const HOLE_COLUMNS: &str = "id, round_id, hole_number, hole_par, score, putts, tee_result, \
    approach_zone, approach_lie, approach_target, approach_error_side, gir, \
    gir_proximity_bucket, first_putt_bucket, first_putt_overridden, scrambling_attempt, \
    scrambling_success, penalties, mental_commitment, sg_off_tee, sg_approach, \
    sg_short_game, sg_putting, sg_total, sg_confidence, sg_model_version";

/// Round and hole store backed by a single SQLite connection.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Open (or create) a database file and make sure the schema exists.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the schema fails.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened sqlite store");
        Self::with_connection(conn)
    }

    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        let storage = Self {
            conn: Mutex::new(conn),
        };
        storage.init_schema()?;
        Ok(storage)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::new("sqlite connection lock poisoned"))
    }

    /// # Errors
    /// Returns an error if a schema statement fails.
    pub fn init_schema(&self) -> Result<(), StorageError> {
        let conn = self.lock()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        for sql in SCHEMA {
            conn.execute_batch(sql)?;
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if the insert fails.
    pub fn insert_round(&self, round: &RoundSummary) -> Result<(), StorageError> {
        let conn = self.lock()?;
        insert_round(&conn, round)
    }

    /// # Errors
    /// Returns an error if the insert fails, for instance when the round
    /// does not exist.
    pub fn insert_hole(&self, hole: &RoundHole) -> Result<(), StorageError> {
        let conn = self.lock()?;
        insert_hole(&conn, hole)
    }

    /// Load every round and hole of an export in one transaction.
    ///
    /// Returns the number of holes written.
    ///
    /// # Errors
    /// Returns an error if any insert fails; nothing is written in that case.
    pub fn prefill_from_export(&self, export: &RoundExport) -> Result<usize, StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut holes = 0;
        for round in &export.rounds {
            insert_round(&tx, &round.summary())?;
            for hole in round.round_holes() {
                insert_hole(&tx, &hole)?;
                holes += 1;
            }
        }
        tx.commit()?;
        info!(rounds = export.rounds.len(), holes, "prefilled sqlite store");
        Ok(holes)
    }
}

fn insert_round(conn: &Connection, round: &RoundSummary) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO rounds (id, owner_id, played_at, status, notes) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            round.id,
            round.owner_id,
            round.played_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            round.status.code(),
            round.notes,
        ],
    )?;
    Ok(())
}

fn insert_hole(conn: &Connection, hole: &RoundHole) -> Result<(), StorageError> {
    let r = &hole.record;
    let stored = r.stored.as_ref();
    conn.execute(
        &format!(
            "INSERT INTO round_holes ({HOLE_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, \
             ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26)"
        ),
        params![
            hole.id,
            hole.round_id,
            hole.hole_number,
            r.hole_par,
            r.score,
            r.putts,
            r.tee_result.map(Categorical::code),
            r.approach_zone.map(Categorical::code),
            r.approach_lie.map(Categorical::code),
            r.approach_target.map(Categorical::code),
            r.approach_error_side.map(Categorical::code),
            r.green_in_regulation,
            r.gir_proximity_bucket.map(Categorical::code),
            r.first_putt_bucket.map(Categorical::code),
            r.first_putt_overridden,
            r.scrambling_attempted,
            r.scrambling_succeeded,
            r.penalties,
            r.mental_commitment.map(Categorical::code),
            stored.and_then(|s| s.off_tee),
            stored.and_then(|s| s.approach),
            stored.and_then(|s| s.short_game),
            stored.and_then(|s| s.putting),
            stored.and_then(|s| s.total),
            stored.and_then(|s| s.confidence).map(Confidence::code),
            stored.and_then(|s| s.model_version.clone()),
        ],
    )?;
    Ok(())
}

/// Read a categorical column; codes this build does not know read as absent.
fn code_column<T: Categorical>(
    row: &Row<'_>,
    idx: usize,
    column: &str,
) -> rusqlite::Result<Option<T>> {
    let raw: Option<String> = row.get(idx)?;
    let decoded = decode::<T>(raw.as_deref());
    if decoded.is_none() {
        if let Some(raw) = raw.as_deref().filter(|r| !r.trim().is_empty()) {
            warn!(column, code = raw, "unknown code, treating as absent");
        }
    }
    Ok(decoded)
}

fn hole_from_row(row: &Row<'_>) -> rusqlite::Result<RoundHole> {
    let penalties: Option<i64> = row.get(17)?;
    let stored = StoredBreakdown {
        off_tee: row.get(19)?,
        approach: row.get(20)?,
        short_game: row.get(21)?,
        putting: row.get(22)?,
        total: row.get(23)?,
        confidence: row
            .get::<_, Option<String>>(24)?
            .as_deref()
            .and_then(Confidence::from_code),
        model_version: row.get(25)?,
    };
    let has_stored = stored.total.is_some()
        || stored.off_tee.is_some()
        || stored.approach.is_some()
        || stored.short_game.is_some()
        || stored.putting.is_some();

    let record = HoleRecord {
        hole_par: row.get(3)?,
        score: row.get(4)?,
        putts: row.get(5)?,
        tee_result: code_column(row, 6, "tee_result")?,
        approach_zone: code_column(row, 7, "approach_zone")?,
        approach_lie: code_column(row, 8, "approach_lie")?,
        approach_target: code_column(row, 9, "approach_target")?,
        approach_error_side: code_column(row, 10, "approach_error_side")?,
        green_in_regulation: row.get(11)?,
        gir_proximity_bucket: code_column(row, 12, "gir_proximity_bucket")?,
        first_putt_bucket: code_column(row, 13, "first_putt_bucket")?,
        first_putt_overridden: row.get::<_, Option<bool>>(14)?.unwrap_or(false),
        scrambling_attempted: row.get::<_, Option<bool>>(15)?.unwrap_or(false),
        scrambling_succeeded: row.get(16)?,
        penalties: penalties.and_then(|p| u32::try_from(p).ok()).unwrap_or(0),
        mental_commitment: code_column(row, 18, "mental_commitment")?,
        stored: has_stored.then_some(stored),
    };

    Ok(RoundHole {
        id: row.get(0)?,
        round_id: row.get(1)?,
        hole_number: row.get(2)?,
        record,
    })
}

fn parse_played_at(raw: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::new(format!("bad played_at '{raw}': {e}")))
}

impl Storage for SqliteStorage {
    fn recent_rounds(
        &self,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<RoundSummary>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, owner_id, played_at, status, notes FROM rounds \
             WHERE owner_id = ?1 ORDER BY played_at DESC, id ASC LIMIT ?2",
        )?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![owner_id, limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
            ))
        })?;

        let mut rounds = Vec::new();
        for row in rows {
            let (id, owner_id, played_at, status, notes) = row?;
            rounds.push(RoundSummary {
                played_at: parse_played_at(&played_at)?,
                status: status
                    .as_deref()
                    .and_then(RoundStatus::from_code)
                    .unwrap_or_default(),
                id,
                owner_id,
                notes,
            });
        }
        debug!(owner_id, count = rounds.len(), "fetched recent rounds");
        Ok(rounds)
    }

    fn holes_for_rounds(&self, round_ids: &[String]) -> Result<Vec<RoundHole>, StorageError> {
        if round_ids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = vec!["?"; round_ids.len()].join(", ");
        let sql = format!(
            "SELECT {HOLE_COLUMNS} FROM round_holes WHERE round_id IN ({placeholders}) \
             ORDER BY round_id, hole_number"
        );
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let holes = stmt
            .query_map(params_from_iter(round_ids.iter()), hole_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        debug!(rounds = round_ids.len(), holes = holes.len(), "fetched holes");
        Ok(holes)
    }

    fn store_breakdown(
        &self,
        hole_id: &str,
        breakdown: &StoredBreakdown,
    ) -> Result<(), StorageError> {
        let conn = self.lock()?;
        let updated = conn.execute(
            "UPDATE round_holes SET sg_off_tee = ?1, sg_approach = ?2, sg_short_game = ?3, \
             sg_putting = ?4, sg_total = ?5, sg_confidence = ?6, sg_model_version = ?7 \
             WHERE id = ?8",
            params![
                breakdown.off_tee,
                breakdown.approach,
                breakdown.short_game,
                breakdown.putting,
                breakdown.total,
                breakdown.confidence.map(Confidence::code),
                breakdown.model_version,
                hole_id,
            ],
        )?;
        if updated == 0 {
            return Err(StorageError::new(format!("hole {hole_id} not found")));
        }
        Ok(())
    }
}
