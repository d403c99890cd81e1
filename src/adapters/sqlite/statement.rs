//! SQL built from enumerated column assignments.
//!
//! Column names only ever come from `&'static str` constants on drafts and
//! patches; values are always bound as parameters.

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};

use crate::domain::records::{FieldAssignment, FieldValue};

pub(crate) type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

fn quoted(column: &str) -> String {
    format!("\"{}\"", column)
}

/// `INSERT INTO table ("a", "b") VALUES (?, ?)`
pub(crate) fn insert_statement(table: &str, assignments: &[FieldAssignment]) -> String {
    if assignments.is_empty() {
        return format!("INSERT INTO {} DEFAULT VALUES", table);
    }
    let columns: Vec<String> = assignments.iter().map(|a| quoted(a.column)).collect();
    let placeholders = vec!["?"; assignments.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders
    )
}

/// `UPDATE table SET "a" = ?, "b" = ? WHERE <filter>`
pub(crate) fn update_statement(table: &str, assignments: &[FieldAssignment], filter: &str) -> String {
    let sets: Vec<String> = assignments
        .iter()
        .map(|a| format!("{} = ?", quoted(a.column)))
        .collect();
    format!("UPDATE {} SET {} WHERE {}", table, sets.join(", "), filter)
}

/// Binds assignment values in column order.
pub(crate) fn bind_assignments<'q>(
    mut query: SqliteQuery<'q>,
    assignments: &[FieldAssignment],
) -> SqliteQuery<'q> {
    for assignment in assignments {
        query = match &assignment.value {
            FieldValue::Text(v) => query.bind(v.clone()),
            FieldValue::Integer(v) => query.bind(*v),
            FieldValue::Real(v) => query.bind(*v),
        };
    }
    query
}
