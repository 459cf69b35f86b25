use crate::store::{error::StoreError, mysql::params::MySqlParamStore, session::StoreSession};
use async_trait::async_trait;
use model::core::value::Value;
use mysql_async::{Conn, Opts, prelude::Queryable};
use tracing::debug;

/// MySQL error codes that signal a per-row constraint rejection rather than
/// a broken connection: NOT NULL (1048, 1364), duplicate key (1062),
/// foreign key (1216, 1217, 1451, 1452) and CHECK (3819).
const CONSTRAINT_CODES: &[u16] = &[1048, 1062, 1216, 1217, 1364, 1451, 1452, 3819];

/// A single shared MySQL connection for the run. Transactions and
/// savepoints are driven as explicit statements so the session owns the
/// connection for its whole lifetime.
pub struct MySqlSession {
    conn: Conn,
}

impl MySqlSession {
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let opts = Opts::from_url(url).map_err(mysql_async::Error::Url)?;
        let conn = Conn::new(opts).await?;
        Ok(MySqlSession { conn })
    }

    pub async fn disconnect(self) -> Result<(), StoreError> {
        self.conn.disconnect().await?;
        Ok(())
    }

    fn classify(err: mysql_async::Error) -> StoreError {
        match err {
            mysql_async::Error::Server(ref srv) if CONSTRAINT_CODES.contains(&srv.code) => {
                StoreError::Constraint {
                    code: srv.code,
                    message: srv.message.clone(),
                }
            }
            other => StoreError::MySql(other),
        }
    }
}

#[async_trait]
impl StoreSession for MySqlSession {
    async fn begin(&mut self) -> Result<(), StoreError> {
        self.conn.query_drop("START TRANSACTION").await?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        self.conn.query_drop("COMMIT").await?;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), StoreError> {
        self.conn.query_drop("ROLLBACK").await?;
        Ok(())
    }

    async fn savepoint(&mut self, name: &str) -> Result<(), StoreError> {
        self.conn.query_drop(format!("SAVEPOINT {name}")).await?;
        Ok(())
    }

    async fn rollback_to_savepoint(&mut self, name: &str) -> Result<(), StoreError> {
        self.conn
            .query_drop(format!("ROLLBACK TO SAVEPOINT {name}"))
            .await?;
        Ok(())
    }

    async fn release_savepoint(&mut self, name: &str) -> Result<(), StoreError> {
        self.conn
            .query_drop(format!("RELEASE SAVEPOINT {name}"))
            .await?;
        Ok(())
    }

    async fn insert(
        &mut self,
        table: &str,
        columns: &[&str],
        values: &[Value],
    ) -> Result<u64, StoreError> {
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO `{table}` ({}) VALUES ({placeholders})",
            columns.join(", ")
        );
        debug!(table, sql = %sql, "Executing insert");

        let params = MySqlParamStore::from_values(values);
        self.conn
            .exec_drop(sql.as_str(), params.params())
            .await
            .map_err(Self::classify)?;

        Ok(self.conn.last_insert_id().unwrap_or(0))
    }
}
