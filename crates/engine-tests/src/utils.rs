use async_trait::async_trait;
use connectors::store::{error::StoreError, session::StoreSession};
use model::core::value::Value;
use std::collections::{HashMap, HashSet};

pub type StoredRow = HashMap<String, Value>;

/// Constraint rules for one in-memory table, mirroring what the real schema
/// enforces: NOT NULL columns, UNIQUE columns, foreign-key domains and a
/// generated integer identity.
#[derive(Debug, Default)]
pub struct TableRules {
    pub not_null: Vec<&'static str>,
    pub unique: Vec<&'static str>,
    pub foreign: HashMap<&'static str, HashSet<Value>>,
    pub auto_id: bool,
}

/// An in-memory `StoreSession` with real transactional semantics:
/// begin/commit/rollback, named savepoints and constraint violations
/// surfaced with MySQL error codes. Backs the pipeline tests so they run
/// without a live database.
pub struct MemoryStore {
    rules: HashMap<String, TableRules>,
    committed: HashMap<String, Vec<StoredRow>>,
    staged: Vec<(String, StoredRow)>,
    savepoints: Vec<(String, usize)>,
    in_tx: bool,
    next_id: HashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            rules: HashMap::new(),
            committed: HashMap::new(),
            staged: Vec::new(),
            savepoints: Vec::new(),
            in_tx: false,
            next_id: HashMap::new(),
        }
    }

    /// The fleximart schema: generated ids on orders and order_items,
    /// NOT NULL on the columns the DDL marks required, unique emails.
    pub fn fleximart() -> Self {
        Self::new()
            .not_null("customers", &["email"])
            .unique("customers", &["email"])
            .auto_id("orders")
            .not_null("orders", &["customer_id", "total_amount"])
            .auto_id("order_items")
            .not_null(
                "order_items",
                &["order_id", "product_id", "quantity", "unit_price", "subtotal"],
            )
    }

    pub fn not_null(mut self, table: &str, columns: &[&'static str]) -> Self {
        self.rules_mut(table).not_null.extend_from_slice(columns);
        self
    }

    pub fn unique(mut self, table: &str, columns: &[&'static str]) -> Self {
        self.rules_mut(table).unique.extend_from_slice(columns);
        self
    }

    pub fn auto_id(mut self, table: &str) -> Self {
        self.rules_mut(table).auto_id = true;
        self
    }

    /// Restrict a column to a foreign-key domain of allowed values.
    pub fn allow_keys(mut self, table: &str, column: &'static str, keys: Vec<Value>) -> Self {
        self.rules_mut(table)
            .foreign
            .insert(column, keys.into_iter().collect());
        self
    }

    pub fn rows(&self, table: &str) -> &[StoredRow] {
        self.committed.get(table).map(Vec::as_slice).unwrap_or(&[])
    }

    fn rules_mut(&mut self, table: &str) -> &mut TableRules {
        self.rules.entry(table.to_string()).or_default()
    }

    fn check_constraints(&self, table: &str, row: &StoredRow) -> Result<(), StoreError> {
        let Some(rules) = self.rules.get(table) else {
            return Ok(());
        };

        for column in &rules.not_null {
            if row.get(*column).is_none_or(Value::is_null) {
                return Err(StoreError::Constraint {
                    code: 1048,
                    message: format!("Column '{column}' cannot be null"),
                });
            }
        }

        for column in &rules.unique {
            let Some(value) = row.get(*column).filter(|v| !v.is_null()) else {
                continue;
            };
            let clash = self
                .rows(table)
                .iter()
                .chain(self.staged.iter().filter(|(t, _)| t == table).map(|(_, r)| r))
                .any(|existing| existing.get(*column) == Some(value));
            if clash {
                return Err(StoreError::Constraint {
                    code: 1062,
                    message: format!("Duplicate entry for key '{column}'"),
                });
            }
        }

        for (column, domain) in &rules.foreign {
            if let Some(value) = row.get(*column).filter(|v| !v.is_null())
                && !domain.contains(value)
            {
                return Err(StoreError::Constraint {
                    code: 1452,
                    message: format!("Foreign key violation on '{column}'"),
                });
            }
        }

        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreSession for MemoryStore {
    async fn begin(&mut self) -> Result<(), StoreError> {
        if self.in_tx {
            return Err(StoreError::Write("transaction already open".into()));
        }
        self.in_tx = true;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        if !self.in_tx {
            return Err(StoreError::Write("no transaction in progress".into()));
        }
        for (table, row) in self.staged.drain(..) {
            self.committed.entry(table).or_default().push(row);
        }
        self.savepoints.clear();
        self.in_tx = false;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), StoreError> {
        self.staged.clear();
        self.savepoints.clear();
        self.in_tx = false;
        Ok(())
    }

    async fn savepoint(&mut self, name: &str) -> Result<(), StoreError> {
        // A repeated name replaces the earlier savepoint, as in MySQL.
        self.savepoints.retain(|(n, _)| n != name);
        self.savepoints.push((name.to_string(), self.staged.len()));
        Ok(())
    }

    async fn rollback_to_savepoint(&mut self, name: &str) -> Result<(), StoreError> {
        let mark = self
            .savepoints
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, mark)| *mark)
            .ok_or_else(|| StoreError::Write(format!("unknown savepoint '{name}'")))?;
        self.staged.truncate(mark);
        Ok(())
    }

    async fn release_savepoint(&mut self, name: &str) -> Result<(), StoreError> {
        self.savepoints.retain(|(n, _)| n != name);
        Ok(())
    }

    async fn insert(
        &mut self,
        table: &str,
        columns: &[&str],
        values: &[Value],
    ) -> Result<u64, StoreError> {
        if !self.in_tx {
            return Err(StoreError::Write("no transaction in progress".into()));
        }
        if columns.len() != values.len() {
            return Err(StoreError::Write(format!(
                "column/value arity mismatch for '{table}'"
            )));
        }

        let mut row: StoredRow = columns
            .iter()
            .map(|c| c.to_string())
            .zip(values.iter().cloned())
            .collect();

        self.check_constraints(table, &row)?;

        let auto_id = self.rules.get(table).is_some_and(|r| r.auto_id);
        let id = if auto_id {
            let next = self.next_id.entry(table.to_string()).or_insert(1);
            let id = *next;
            *next += 1;
            row.insert("id".to_string(), Value::Int(id as i64));
            id
        } else {
            0
        };

        self.staged.push((table.to_string(), row));
        Ok(id)
    }
}

pub fn get_i64(row: &StoredRow, column: &str) -> Option<i64> {
    row.get(column).and_then(Value::as_i64)
}

pub fn get_f64(row: &StoredRow, column: &str) -> Option<f64> {
    row.get(column).and_then(Value::as_f64)
}

pub fn get_string(row: &StoredRow, column: &str) -> Option<String> {
    row.get(column).and_then(Value::as_string)
}
