//! Generic SQLite record store.
//!
//! One table per record type. Inserts and updates are built from the
//! draft/patch column assignments.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::records::{
    Achievement, Diet, FieldSet, Record, ScheduleEntry, Technique, TechniqueStatus, Workout,
};
use crate::ports::RecordRepository;

use super::pool::database_error;
use super::statement::{bind_assignments, insert_statement, update_statement};

/// A record type with a backing table.
pub trait SqliteRecord: Record {
    const TABLE: &'static str;

    type Row: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;

    fn from_row(row: Self::Row) -> Result<Self, DomainError>;
}

pub struct SqliteRecordRepository<R> {
    pool: SqlitePool,
    _record: PhantomData<fn() -> R>,
}

impl<R> SqliteRecordRepository<R> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R: SqliteRecord> RecordRepository<R> for SqliteRecordRepository<R> {
    async fn create(&self, draft: &R::Draft) -> Result<RecordId, DomainError> {
        let assignments = draft.assignments();
        let sql = insert_statement(R::TABLE, &assignments);
        let result = bind_assignments(sqlx::query(&sql), &assignments)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error(&format!("insert into {}", R::TABLE), e))?;

        Ok(RecordId::new(result.last_insert_rowid()))
    }

    async fn list(&self) -> Result<Vec<R>, DomainError> {
        let sql = format!("SELECT * FROM {} ORDER BY id ASC", R::TABLE);
        let rows = sqlx::query_as::<_, R::Row>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error(&format!("list {}", R::TABLE), e))?;

        rows.into_iter().map(R::from_row).collect()
    }

    async fn update_partial(&self, id: RecordId, patch: &R::Patch) -> Result<(), DomainError> {
        let assignments = patch.assignments();
        if assignments.is_empty() {
            return Ok(());
        }

        let sql = update_statement(R::TABLE, &assignments, "id = ?");
        let result = bind_assignments(sqlx::query(&sql), &assignments)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error(&format!("update {}", R::TABLE), e))?;

        if result.rows_affected() == 0 {
            return Err(R::KIND.not_found(id));
        }
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", R::TABLE);
        sqlx::query(&sql)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error(&format!("delete from {}", R::TABLE), e))?;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Rows
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, sqlx::FromRow)]
pub struct TechniqueRow {
    id: i64,
    name: String,
    category: String,
    #[sqlx(rename = "type")]
    technique_type: Option<String>,
    objective: Option<String>,
    situation: Option<String>,
    steps: Option<String>,
    adjustments: Option<String>,
    errors: Option<String>,
    safety: Option<String>,
    strategy: Option<String>,
    image_ref: Option<String>,
    status: String,
    favorited: bool,
    notes: Option<String>,
}

impl SqliteRecord for Technique {
    const TABLE: &'static str = "techniques";

    type Row = TechniqueRow;

    fn from_row(row: TechniqueRow) -> Result<Self, DomainError> {
        let status = TechniqueStatus::parse(&row.status)
            .map_err(|e| DomainError::database(format!("Invalid stored technique status: {}", e)))?;

        Ok(Technique {
            id: RecordId::new(row.id),
            name: row.name,
            category: row.category,
            technique_type: row.technique_type,
            objective: row.objective,
            situation: row.situation,
            steps: row.steps,
            adjustments: row.adjustments,
            errors: row.errors,
            safety: row.safety,
            strategy: row.strategy,
            image_ref: row.image_ref,
            status,
            favorited: row.favorited,
            notes: row.notes,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct WorkoutRow {
    id: i64,
    #[sqlx(rename = "type")]
    plan: String,
    name: String,
    sets: Option<i64>,
    reps: Option<String>,
    rest: Option<i64>,
    muscle_group: Option<String>,
    completed: bool,
}

impl SqliteRecord for Workout {
    const TABLE: &'static str = "workouts";

    type Row = WorkoutRow;

    fn from_row(row: WorkoutRow) -> Result<Self, DomainError> {
        Ok(Workout {
            id: RecordId::new(row.id),
            plan: row.plan,
            name: row.name,
            sets: row.sets,
            reps: row.reps,
            rest: row.rest,
            muscle_group: row.muscle_group,
            completed: row.completed,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct ScheduleRow {
    id: i64,
    day: String,
    time: String,
    activity: String,
}

impl SqliteRecord for ScheduleEntry {
    const TABLE: &'static str = "schedule";

    type Row = ScheduleRow;

    fn from_row(row: ScheduleRow) -> Result<Self, DomainError> {
        Ok(ScheduleEntry {
            id: RecordId::new(row.id),
            day: row.day,
            time: row.time,
            activity: row.activity,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct DietRow {
    id: i64,
    title: String,
    kcal: Option<String>,
    macros: Option<String>,
    color: Option<String>,
    content: Option<String>,
}

impl SqliteRecord for Diet {
    const TABLE: &'static str = "diets";

    type Row = DietRow;

    fn from_row(row: DietRow) -> Result<Self, DomainError> {
        Ok(Diet {
            id: RecordId::new(row.id),
            title: row.title,
            kcal: row.kcal,
            macros: row.macros,
            color: row.color,
            content: row.content,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct AchievementRow {
    id: i64,
    name: String,
    category: Option<String>,
    icon: Option<String>,
    unlocked: bool,
    date: Option<String>,
}

impl SqliteRecord for Achievement {
    const TABLE: &'static str = "achievements";

    type Row = AchievementRow;

    fn from_row(row: AchievementRow) -> Result<Self, DomainError> {
        Ok(Achievement {
            id: RecordId::new(row.id),
            name: row.name,
            category: row.category,
            icon: row.icon,
            unlocked: row.unlocked,
            date: row.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::test_pool;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::records::{TechniquePatch, WorkoutDraft, WorkoutPatch};

    fn draft(json: serde_json::Value) -> WorkoutDraft {
        serde_json::from_value(json).unwrap()
    }

    #[tokio::test]
    async fn create_applies_column_defaults() {
        let repo = SqliteRecordRepository::<Workout>::new(test_pool().await);
        let id = repo
            .create(&draft(serde_json::json!({ "type": "A", "name": "Agachamento" })))
            .await
            .unwrap();

        let workouts = repo.list().await.unwrap();
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].id, id);
        assert!(!workouts[0].completed);
        assert_eq!(workouts[0].sets, None);
    }

    #[tokio::test]
    async fn update_touches_only_patch_fields() {
        let repo = SqliteRecordRepository::<Workout>::new(test_pool().await);
        let id = repo
            .create(&draft(serde_json::json!({ "type": "B", "name": "Remada", "sets": 4 })))
            .await
            .unwrap();

        let patch: WorkoutPatch =
            serde_json::from_value(serde_json::json!({ "completed": true })).unwrap();
        repo.update_partial(id, &patch).await.unwrap();

        let workout = &repo.list().await.unwrap()[0];
        assert!(workout.completed);
        assert_eq!(workout.sets, Some(4));
        assert_eq!(workout.name, "Remada");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = SqliteRecordRepository::<Technique>::new(test_pool().await);
        let patch = TechniquePatch {
            favorited: Some(true),
            ..Default::default()
        };

        let err = repo.update_partial(RecordId::new(99), &patch).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RecordNotFound);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = SqliteRecordRepository::<Workout>::new(test_pool().await);
        let id = repo
            .create(&draft(serde_json::json!({ "type": "C", "name": "Supino" })))
            .await
            .unwrap();

        repo.delete(id).await.unwrap();
        repo.delete(id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let repo = SqliteRecordRepository::<Workout>::new(test_pool().await);
        for name in ["Um", "Dois", "Tres"] {
            repo.create(&draft(serde_json::json!({ "type": "A", "name": name })))
                .await
                .unwrap();
        }

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Um", "Dois", "Tres"]);
    }
}
