use crate::error::Error;

/// Statement submission seam over the warehouse client.
///
/// One statement per call. Outside an explicit transaction the warehouse
/// autocommits each submission, so every statement is its own unit of
/// work. The connection is owned by the caller; nothing here opens one.
#[async_trait::async_trait]
pub trait Submit: Send + Sync {
    async fn submit(&self, sql: &str) -> Result<(), Error>;
}

#[async_trait::async_trait]
impl Submit for tokio_postgres::Client {
    async fn submit(&self, sql: &str) -> Result<(), Error> {
        self.batch_execute(sql)
            .await
            .map_err(|e| Error::Statement(e.to_string()))
    }
}

/// Sequential, at-most-once-per-statement execution of SQL batches.
///
/// No retry, no rollback, no partial-batch cleanup: the first failure
/// propagates immediately and whatever committed before it stays
/// committed.
#[async_trait::async_trait]
pub trait Runner: Submit {
    /// Runs every statement in order, committing each before the next
    /// starts. Statement i failing leaves 0..i-1 committed and i+1..
    /// unattempted.
    async fn execute(&self, statements: &[String]) -> Result<(), Error> {
        for (i, sql) in statements.iter().enumerate() {
            log::debug!("statement {} of {}", i + 1, statements.len());
            if let Err(e) = self.submit(sql).await {
                log::error!("statement {} of {} failed", i + 1, statements.len());
                return Err(e);
            }
        }
        Ok(())
    }

    /// Runs batches strictly in order; a later batch sees every commit of
    /// the earlier ones.
    async fn run(&self, batches: &[&[String]]) -> Result<(), Error> {
        for batch in batches {
            self.execute(batch).await?;
        }
        Ok(())
    }
}

impl<T: Submit> Runner for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every committed statement; fails on a designated one.
    struct Journal {
        committed: Mutex<Vec<String>>,
        poison: Option<&'static str>,
    }

    impl Journal {
        fn new(poison: Option<&'static str>) -> Self {
            Self {
                committed: Mutex::new(Vec::new()),
                poison,
            }
        }
        fn committed(&self) -> Vec<String> {
            self.committed.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Submit for Journal {
        async fn submit(&self, sql: &str) -> Result<(), Error> {
            if self.poison == Some(sql) {
                return Err(Error::Statement("relation does not exist".into()));
            }
            self.committed.lock().unwrap().push(sql.to_string());
            Ok(())
        }
    }

    fn batch(statements: &[&str]) -> Vec<String> {
        statements.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn executes_in_order() {
        let journal = Journal::new(None);
        let statements = batch(&["a", "b", "c"]);
        journal.execute(&statements).await.expect("execute");
        assert_eq!(journal.committed(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn stops_at_first_failure() {
        let journal = Journal::new(Some("c"));
        let statements = batch(&["a", "b", "c", "d", "e"]);
        assert!(journal.execute(&statements).await.is_err());
        assert_eq!(journal.committed(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn earlier_batch_completes_before_later_begins() {
        let journal = Journal::new(None);
        let (b1, b2) = (batch(&["a", "b"]), batch(&["c"]));
        journal.run(&[&b1, &b2]).await.expect("run");
        assert_eq!(journal.committed(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn failing_batch_halts_the_rest() {
        let journal = Journal::new(Some("b"));
        let (b1, b2) = (batch(&["a", "b"]), batch(&["c"]));
        assert!(journal.run(&[&b1, &b2]).await.is_err());
        assert_eq!(journal.committed(), vec!["a"]);
    }

    #[tokio::test]
    async fn error_carries_driver_message() {
        let journal = Journal::new(Some("a"));
        match journal.execute(&batch(&["a"])).await {
            Err(Error::Statement(message)) => assert!(message.contains("does not exist")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
