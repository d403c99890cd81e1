//! SQLite implementation of AttendanceRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::attendance::already_recorded;
use crate::domain::foundation::{CalendarDate, DomainError};
use crate::ports::AttendanceRepository;

use super::pool::database_error;

pub struct SqliteAttendanceRepository {
    pool: SqlitePool,
}

impl SqliteAttendanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for SqliteAttendanceRepository {
    async fn add(&self, date: CalendarDate) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO attendance (date) VALUES (?)")
            .bind(date.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return already_recorded(date);
                    }
                }
                database_error("record attendance", e)
            })?;
        Ok(())
    }

    async fn remove(&self, date: CalendarDate) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM attendance WHERE date = ?")
            .bind(date.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("remove attendance", e))?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<CalendarDate>, DomainError> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT date FROM attendance ORDER BY date ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("list attendance", e))?;

        rows.into_iter()
            .map(|(date,)| {
                CalendarDate::parse_flexible(&date).map_err(|e| {
                    DomainError::database(format!("Invalid stored attendance date: {}", e))
                })
            })
            .collect()
    }
}
