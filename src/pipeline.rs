use crate::config::Config;
use crate::error::Error;
use crate::report::Report;
use crate::runner::Runner;
use crate::sql::Catalog;
use tokio_postgres::Client;

/// The two fixed statement-batch sequences.
pub enum Pipeline {
    /// Drop then recreate every table. Destroys all warehouse state,
    /// including dimension and fact rows from earlier loads.
    Provision,
    /// Bulk-copy staging, populate dimensions, refresh mutable dimension
    /// attributes, derive the fact table.
    Load,
}

impl Pipeline {
    /// Ordered batches for this pipeline. Order is the contract:
    /// dimension inserts must see loaded staging rows, updates must see
    /// inserted dimension rows, and the fact derivation must see both.
    pub fn batches<'a>(&self, catalog: &'a Catalog) -> Vec<&'a [String]> {
        match self {
            Self::Provision => vec![&catalog.drops, &catalog.creates],
            Self::Load => vec![
                &catalog.copies,
                &catalog.inserts,
                &catalog.updates,
                &catalog.facts,
            ],
        }
    }

    /// Whole driver for one entry point: settings, catalog, connection,
    /// batches. The client drops on every exit path, closing the
    /// connection before the process terminates.
    pub async fn run(self) -> Result<(), Error> {
        let config = Config::load(crate::config::CONFIG_PATH)?;
        let catalog = Catalog::new(&config)?;
        let client = connect(&config).await?;
        match self {
            Self::Provision => log::info!("resetting warehouse schema"),
            Self::Load => log::info!("loading warehouse from object storage"),
        }
        let batches = self.batches(&catalog);
        log::info!(
            "{} batches, {} statements",
            batches.len(),
            batches.iter().map(|b| b.len()).sum::<usize>()
        );
        client.run(&batches).await?;
        if let Self::Load = self {
            client.report().await;
        }
        Ok(())
    }
}

/// Opens the warehouse connection and hands the client to the caller.
pub async fn connect(config: &Config) -> Result<Client, Error> {
    log::info!("connecting to warehouse");
    let tls = tokio_postgres::tls::NoTls;
    let ref conn = config.connection_string()?;
    let (client, connection) = tokio_postgres::connect(conn, tls)
        .await
        .map_err(Error::Connection)?;
    tokio::spawn(connection);
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn catalog() -> Catalog {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            "[IAM_ROLE]\nARN=arn:aws:iam::000000000000:role/dwh\n\
             [S3]\nLOG_DATA_MANIFEST=s3://streaming/events.manifest\n\
             LOG_JSONPATH=s3://streaming/events_jsonpath.json\n\
             SONG_DATA_MANIFEST=s3://streaming/songs.manifest\n"
        )
        .expect("write config");
        let config = Config::load(file.path()).expect("load config");
        Catalog::new(&config).expect("build catalog")
    }

    #[test]
    fn provision_drops_then_creates() {
        let catalog = catalog();
        let batches = Pipeline::Provision.batches(&catalog);
        assert_eq!(batches.len(), 2);
        assert!(batches[0].iter().all(|s| s.starts_with("DROP TABLE")));
        assert!(batches[1].iter().all(|s| s.starts_with("CREATE TABLE")));
    }

    #[test]
    fn load_copies_inserts_updates_derives() {
        let catalog = catalog();
        let batches = Pipeline::Load.batches(&catalog);
        assert_eq!(batches.len(), 4);
        assert_eq!(batches[0].len(), 2);
        assert_eq!(batches[1].len(), 4);
        assert_eq!(batches[2].len(), 3);
        assert_eq!(batches[3].len(), 1);
        assert!(batches[0][0].starts_with("COPY"));
        assert!(batches[3][0].contains("INSERT INTO songplays"));
    }
}
