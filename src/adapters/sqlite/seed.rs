//! First-startup initialisation.

use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::info;

use crate::domain::catalogue;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::profile::Profile;
use crate::domain::records::{Achievement, Diet, FieldSet, ScheduleEntry, Technique, Workout};

use super::pool::database_error;
use super::record_repository::SqliteRecord;
use super::statement::{bind_assignments, insert_statement};

/// Creates the profile singleton and, when `seed_defaults` is set, the starter
/// catalogue. Does nothing once a profile exists.
///
/// Returns whether anything was written.
pub async fn bootstrap(
    pool: &SqlitePool,
    now: Timestamp,
    seed_defaults: bool,
) -> Result<bool, DomainError> {
    let (profiles,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_profile")
        .fetch_one(pool)
        .await
        .map_err(|e| database_error("count profiles", e))?;
    if profiles > 0 {
        return Ok(false);
    }

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| database_error("begin transaction", e))?;

    let profile = Profile::initial(now.date());
    sqlx::query(
        r#"
        INSERT INTO user_profile (id, name, height, weight, objective, belt, belt_start_date, stripes)
        VALUES (1, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&profile.name)
    .bind(profile.height)
    .bind(profile.weight)
    .bind(&profile.objective)
    .bind(profile.belt.as_str())
    .bind(profile.belt_start_date.map(|d| d.to_string()))
    .bind(i64::from(profile.stripes))
    .execute(&mut *tx)
    .await
    .map_err(|e| database_error("create profile", e))?;

    sqlx::query("INSERT OR IGNORE INTO xp_stats (id) VALUES (1)")
        .execute(&mut *tx)
        .await
        .map_err(|e| database_error("create progression", e))?;

    if seed_defaults {
        insert_all(&mut tx, Technique::TABLE, &catalogue::techniques()).await?;
        insert_all(&mut tx, Achievement::TABLE, &catalogue::achievements(now)).await?;
        insert_all(&mut tx, Workout::TABLE, &catalogue::workouts()).await?;
        insert_all(&mut tx, ScheduleEntry::TABLE, &catalogue::schedule()).await?;
        insert_all(&mut tx, Diet::TABLE, &catalogue::diets()).await?;
    }

    tx.commit()
        .await
        .map_err(|e| database_error("commit bootstrap", e))?;

    info!(seed_defaults, "Initialised empty database");
    Ok(true)
}

async fn insert_all<D: FieldSet>(
    tx: &mut Transaction<'_, Sqlite>,
    table: &str,
    drafts: &[D],
) -> Result<(), DomainError> {
    for draft in drafts {
        let assignments = draft.assignments();
        let sql = insert_statement(table, &assignments);
        bind_assignments(sqlx::query(&sql), &assignments)
            .execute(&mut **tx)
            .await
            .map_err(|e| database_error(&format!("seed {}", table), e))?;
    }
    Ok(())
}
