use super::*;
use crate::config::Config;
use crate::error::Error;

/// Ordered statement lists for the two pipelines.
///
/// Built explicitly from settings so that nothing reads configuration at
/// load time and tests can assemble catalogs from arbitrary settings.
/// Statement order inside each list is part of the contract.
pub struct Catalog {
    pub drops: Vec<String>,
    pub creates: Vec<String>,
    pub copies: Vec<String>,
    pub inserts: Vec<String>,
    pub updates: Vec<String>,
    pub facts: Vec<String>,
}

impl Catalog {
    /// Interpolates the bulk-load credentials and storage paths into the
    /// COPY statements; everything else is fixed text.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let arn = config.get("IAM_ROLE", "ARN")?;
        let events = config.get("S3", "LOG_DATA_MANIFEST")?;
        let jsonpaths = config.get("S3", "LOG_JSONPATH")?;
        let songs = config.get("S3", "SONG_DATA_MANIFEST")?;
        Ok(Self {
            drops: DROPS.iter().map(|s| s.to_string()).collect(),
            creates: CREATES.iter().map(|s| s.to_string()).collect(),
            copies: vec![copy_events(events, arn, jsonpaths), copy_songs(songs, arn)],
            inserts: INSERTS.iter().map(|s| s.to_string()).collect(),
            updates: UPDATES.iter().map(|s| s.to_string()).collect(),
            facts: FACTS.iter().map(|s| s.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ARN: &str = "arn:aws:iam::000000000000:role/dwh";
    const EVENTS_MANIFEST: &str = "s3://streaming/events.manifest";
    const JSONPATHS: &str = "s3://streaming/events_jsonpath.json";
    const SONGS_MANIFEST: &str = "s3://streaming/songs.manifest";

    fn catalog() -> Catalog {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            "[IAM_ROLE]\nARN={}\n[S3]\nLOG_DATA_MANIFEST={}\nLOG_JSONPATH={}\nSONG_DATA_MANIFEST={}\n",
            ARN, EVENTS_MANIFEST, JSONPATHS, SONGS_MANIFEST
        )
        .expect("write config");
        let config = Config::load(file.path()).expect("load config");
        Catalog::new(&config).expect("build catalog")
    }

    #[test]
    fn copies_are_parameterized() {
        let catalog = catalog();
        assert_eq!(catalog.copies.len(), 2);
        let events = &catalog.copies[0];
        assert!(events.starts_with("COPY staging_events FROM"));
        assert!(events.contains(EVENTS_MANIFEST));
        assert!(events.contains(&format!("aws_iam_role={}", ARN)));
        assert!(events.contains(&format!("JSON '{}'", JSONPATHS)));
        assert!(events.contains("MANIFEST"));
        let songs = &catalog.copies[1];
        assert!(songs.starts_with("COPY staging_songs FROM"));
        assert!(songs.contains(SONGS_MANIFEST));
        assert!(songs.contains("JSON 'auto'"));
    }

    #[test]
    fn missing_storage_key_fails_construction() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "[IAM_ROLE]\nARN={}\n[S3]\nLOG_DATA_MANIFEST={}\n", ARN, EVENTS_MANIFEST)
            .expect("write config");
        let config = Config::load(file.path()).expect("load config");
        assert!(matches!(
            Catalog::new(&config),
            Err(Error::Key { section: "S3", .. })
        ));
    }

    #[test]
    fn drops_are_idempotent() {
        let catalog = catalog();
        assert_eq!(catalog.drops.len(), 7);
        assert!(catalog
            .drops
            .iter()
            .all(|s| s.starts_with("DROP TABLE IF EXISTS ")));
    }

    #[test]
    fn creates_are_idempotent() {
        let catalog = catalog();
        assert_eq!(catalog.creates.len(), 7);
        assert!(catalog
            .creates
            .iter()
            .all(|s| s.starts_with("CREATE TABLE IF NOT EXISTS ")));
    }

    #[test]
    fn fact_dropped_before_its_dimensions() {
        let drops = catalog().drops;
        let at = |t: &str| {
            let drop = format!("DROP TABLE IF EXISTS {}", t);
            drops.iter().position(|s| *s == drop).expect("table")
        };
        assert!(at(SONGPLAYS) < at(USERS));
        assert!(at(SONGPLAYS) < at(SONGS));
        assert!(at(SONGPLAYS) < at(ARTISTS));
    }

    #[test]
    fn fact_created_after_its_dimensions() {
        let creates = catalog().creates;
        assert!(creates[6].contains(SONGPLAYS));
        assert!(creates[6].contains("FOREIGN KEY (user_id) REFERENCES users"));
    }

    #[test]
    fn inserts_deduplicate_by_rank() {
        let catalog = catalog();
        assert_eq!(catalog.inserts.len(), 4);
        // users, songs, artists rank candidates; time relies on DISTINCT
        for insert in &catalog.inserts[..3] {
            assert!(insert.contains("ROW_NUMBER() OVER (PARTITION BY"));
            assert!(insert.contains("DESC)"));
            assert!(insert.contains("_ranked = 1"));
            assert!(insert.contains("NOT IN (SELECT"));
        }
        assert!(catalog.inserts[0].contains("ORDER BY userid, ts DESC"));
        assert!(catalog.inserts[3].contains("DISTINCT"));
    }

    #[test]
    fn updates_touch_only_present_keys() {
        let catalog = catalog();
        assert_eq!(catalog.updates.len(), 3);
        for update in &catalog.updates {
            assert!(update.trim_start().starts_with("UPDATE "));
            assert!(update.contains("ROW_NUMBER() OVER (PARTITION BY"));
            assert!(update.contains("_ranked = 1"));
            assert!(update.contains("IN (SELECT"));
            assert!(!update.contains("NOT IN (SELECT"));
        }
        assert!(catalog.updates[2].contains("longitude = artists_ranked.artist_longitude"));
    }

    #[test]
    fn fact_joins_on_exact_triple() {
        let catalog = catalog();
        assert_eq!(catalog.facts.len(), 1);
        let fact = &catalog.facts[0];
        assert!(fact.contains("page = 'NextSong'"));
        assert!(fact.contains("se.artist = sa.name"));
        assert!(fact.contains("se.song = sa.title"));
        assert!(fact.contains("se.length = sa.duration"));
        assert!(fact.contains("TIMESTAMP 'epoch' + ts / 1000 * INTERVAL '1 second'"));
    }
}
