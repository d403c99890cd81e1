//! SQLite implementation of ProfileRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::foundation::{CalendarDate, DomainError, ErrorCode};
use crate::domain::graduation::Belt;
use crate::domain::profile::{Profile, ProfilePatch};
use crate::domain::records::FieldSet;
use crate::ports::ProfileRepository;

use super::pool::database_error;
use super::statement::{bind_assignments, update_statement};

pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    name: String,
    height: f64,
    weight: f64,
    objective: String,
    belt: String,
    belt_start_date: Option<String>,
    stripes: i64,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let belt: Belt = row
            .belt
            .parse()
            .map_err(|e| DomainError::database(format!("Invalid stored belt: {}", e)))?;
        // Older databases kept full ISO timestamps here.
        let belt_start_date = row
            .belt_start_date
            .as_deref()
            .map(CalendarDate::parse_flexible)
            .transpose()
            .map_err(|e| DomainError::database(format!("Invalid stored belt start date: {}", e)))?;
        let stripes = u8::try_from(row.stripes).map_err(|_| {
            DomainError::database(format!("Invalid stored stripe count: {}", row.stripes))
        })?;

        Ok(Profile {
            name: row.name,
            height: row.height,
            weight: row.weight,
            objective: row.objective,
            belt,
            belt_start_date,
            stripes,
        })
    }
}

fn not_initialised() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "Profile has not been initialised")
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn get(&self) -> Result<Profile, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT name, height, weight, objective, belt, belt_start_date, stripes
            FROM user_profile
            WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("fetch profile", e))?;

        row.ok_or_else(not_initialised)?.try_into()
    }

    async fn update_partial(&self, patch: &ProfilePatch) -> Result<(), DomainError> {
        let assignments = patch.assignments();
        if assignments.is_empty() {
            return Ok(());
        }

        let sql = update_statement("user_profile", &assignments, "id = 1");
        let result = bind_assignments(sqlx::query(&sql), &assignments)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("update profile", e))?;

        if result.rows_affected() == 0 {
            return Err(not_initialised());
        }
        Ok(())
    }
}
