use crate::quality::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a row that failed at its transactional boundary during load.
/// Failures are aggregated per run so callers can assert on which rows
/// failed, not just a count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedRow {
    pub id: Uuid,
    pub entity: Entity,
    pub table: String,
    /// Index of the row within the cleaned record set for its entity.
    pub row_index: usize,
    pub error: String,
    pub failed_at: DateTime<Utc>,
}

impl FailedRow {
    pub fn new(entity: Entity, table: &str, row_index: usize, error: String) -> Self {
        FailedRow {
            id: Uuid::new_v4(),
            entity,
            table: table.to_string(),
            row_index,
            error,
            failed_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for FailedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} row {} ({}): {}",
            self.entity, self.row_index, self.table, self.error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_entity_and_row() {
        let row = FailedRow::new(Entity::Sales, "orders", 3, "duplicate key".into());
        let text = row.to_string();
        assert!(text.contains("sales row 3"));
        assert!(text.contains("orders"));
        assert!(text.contains("duplicate key"));
    }
}
