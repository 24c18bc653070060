use crate::sql::*;
use tokio_postgres::Client;

/// Post-load row counts, logged per table.
/// A table that cannot be counted reports 0 rather than failing the run.
#[async_trait::async_trait]
pub trait Report: Send + Sync {
    async fn rows(&self, table: &str) -> usize;
    async fn report(&self) {
        for table in [USERS, SONGS, ARTISTS, TIME, SONGPLAYS] {
            log::info!("{:<12} {:>12} rows", table, self.rows(table).await);
        }
    }
}

#[async_trait::async_trait]
impl Report for Client {
    async fn rows(&self, table: &str) -> usize {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        self.query_opt(&sql, &[])
            .await
            .ok()
            .flatten()
            .map(|r| r.get::<_, i64>(0) as usize)
            .unwrap_or(0)
    }
}
