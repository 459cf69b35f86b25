use crate::store::error::StoreError;
use async_trait::async_trait;
use model::core::value::Value;

/// One storage session for a pipeline run. Writes flow through scoped
/// transactional units: an outer transaction per entity batch with
/// per-row savepoints, or one transaction per dependent-record pair.
/// Only one unit is in flight on a session at a time.
#[async_trait]
pub trait StoreSession: Send {
    async fn begin(&mut self) -> Result<(), StoreError>;
    async fn commit(&mut self) -> Result<(), StoreError>;
    async fn rollback(&mut self) -> Result<(), StoreError>;

    async fn savepoint(&mut self, name: &str) -> Result<(), StoreError>;
    async fn rollback_to_savepoint(&mut self, name: &str) -> Result<(), StoreError>;
    async fn release_savepoint(&mut self, name: &str) -> Result<(), StoreError>;

    /// Insert one row and return the identity generated by the store, or 0
    /// for tables without a generated key.
    async fn insert(
        &mut self,
        table: &str,
        columns: &[&str],
        values: &[Value],
    ) -> Result<u64, StoreError>;
}
