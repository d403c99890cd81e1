//! Append-only log of XP-granting actions.

use serde::Serialize;

use crate::domain::foundation::{HistoryEntryId, Timestamp};

/// A stored history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: HistoryEntryId,
    pub occurred_at: Timestamp,
    pub action: String,
    pub xp: i64,
}

/// A history entry not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub occurred_at: Timestamp,
    pub action: String,
    pub xp: i64,
}

impl NewHistoryEntry {
    pub fn with_id(self, id: HistoryEntryId) -> HistoryEntry {
        HistoryEntry {
            id,
            occurred_at: self.occurred_at,
            action: self.action,
            xp: self.xp,
        }
    }
}

/// Sorts entries most recent first; ties broken by the later id.
pub fn sort_most_recent_first(entries: &mut [HistoryEntry]) {
    entries.sort_by(|a, b| {
        b.occurred_at
            .cmp(&a.occurred_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, at: &str) -> HistoryEntry {
        NewHistoryEntry {
            occurred_at: Timestamp::parse_rfc3339(at).unwrap(),
            action: format!("action {}", id),
            xp: 10,
        }
        .with_id(HistoryEntryId::new(id))
    }

    #[test]
    fn sorts_newest_first_with_id_tiebreak() {
        let mut entries = vec![
            entry(1, "2024-01-01T10:00:00Z"),
            entry(2, "2024-01-02T10:00:00Z"),
            entry(3, "2024-01-01T10:00:00Z"),
        ];
        sort_most_recent_first(&mut entries);

        let ids: Vec<i64> = entries.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
