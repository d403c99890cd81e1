//! SQLite implementation of ProgressionRepository.
//!
//! The singleton `xp_stats` row and the `history` log are written in one
//! transaction per grant.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::foundation::{CalendarDate, DomainError, HistoryEntryId, Timestamp};
use crate::domain::progression::{HistoryEntry, NewHistoryEntry, ProgressionState};
use crate::ports::ProgressionRepository;

use super::pool::database_error;

pub struct SqliteProgressionRepository {
    pool: SqlitePool,
}

impl SqliteProgressionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct XpStatsRow {
    total_xp: i64,
    streak: i64,
    last_action_date: Option<String>,
}

impl TryFrom<XpStatsRow> for ProgressionState {
    type Error = DomainError;

    fn try_from(row: XpStatsRow) -> Result<Self, Self::Error> {
        let streak = u32::try_from(row.streak)
            .map_err(|_| DomainError::database(format!("Invalid stored streak: {}", row.streak)))?;
        let last_action_date = row
            .last_action_date
            .as_deref()
            .map(CalendarDate::parse_flexible)
            .transpose()
            .map_err(|e| DomainError::database(format!("Invalid stored last action date: {}", e)))?;

        Ok(ProgressionState::from_parts(row.total_xp, streak, last_action_date))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HistoryRow {
    id: i64,
    date: String,
    action: String,
    xp: i64,
}

impl TryFrom<HistoryRow> for HistoryEntry {
    type Error = DomainError;

    fn try_from(row: HistoryRow) -> Result<Self, Self::Error> {
        let occurred_at = Timestamp::parse_rfc3339(&row.date)
            .map_err(|e| DomainError::database(format!("Invalid stored history date: {}", e)))?;

        Ok(HistoryEntry {
            id: HistoryEntryId::new(row.id),
            occurred_at,
            action: row.action,
            xp: row.xp,
        })
    }
}

#[async_trait]
impl ProgressionRepository for SqliteProgressionRepository {
    async fn load_state(&self) -> Result<ProgressionState, DomainError> {
        let row: Option<XpStatsRow> = sqlx::query_as(
            "SELECT total_xp, streak, last_action_date FROM xp_stats WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("fetch progression", e))?;

        match row {
            Some(row) => row.try_into(),
            None => Ok(ProgressionState::initial()),
        }
    }

    async fn record_grant(
        &self,
        state: &ProgressionState,
        entry: NewHistoryEntry,
    ) -> Result<HistoryEntry, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| database_error("begin transaction", e))?;

        sqlx::query(
            r#"
            INSERT INTO xp_stats (id, total_xp, level, streak, last_action_date)
            VALUES (1, ?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                total_xp = excluded.total_xp,
                level = excluded.level,
                streak = excluded.streak,
                last_action_date = excluded.last_action_date
            "#,
        )
        .bind(state.total_xp())
        .bind(state.level().as_str())
        .bind(i64::from(state.streak()))
        .bind(state.last_action_date().map(|d| d.to_string()))
        .execute(&mut *tx)
        .await
        .map_err(|e| database_error("update progression", e))?;

        let inserted = sqlx::query("INSERT INTO history (date, action, xp) VALUES (?, ?, ?)")
            .bind(entry.occurred_at.to_storage_string())
            .bind(&entry.action)
            .bind(entry.xp)
            .execute(&mut *tx)
            .await
            .map_err(|e| database_error("append history", e))?;

        tx.commit()
            .await
            .map_err(|e| database_error("commit grant", e))?;

        Ok(entry.with_id(HistoryEntryId::new(inserted.last_insert_rowid())))
    }

    async fn list_history(&self, limit: u32) -> Result<Vec<HistoryEntry>, DomainError> {
        let rows: Vec<HistoryRow> = sqlx::query_as(
            r#"
            SELECT id, date, action, xp
            FROM history
            ORDER BY date DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("list history", e))?;

        rows.into_iter().map(HistoryEntry::try_from).collect()
    }
}
