/// Everything that can abort a pipeline run.
///
/// Nothing here is caught or retried anywhere in the crate. Every variant
/// propagates to the entry point, which logs it and exits nonzero.
/// Statements committed before a failure stay committed; the caller infers
/// progress from warehouse state.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file exists but is not valid INI.
    #[error("malformed configuration: {0}")]
    Parse(#[from] ini::ParseError),
    /// A required configuration section is absent.
    #[error("missing configuration section [{0}]")]
    Section(&'static str),
    /// A required key is absent from its section.
    #[error("missing configuration key {key} in [{section}]")]
    Key {
        section: &'static str,
        key: &'static str,
    },
    /// The [CLUSTER] section must list exactly host, dbname, user,
    /// password, port.
    #[error("expected 5 connection parameters in [CLUSTER], found {0}")]
    Cluster(usize),
    /// The warehouse could not be reached.
    #[error("warehouse connection failed")]
    Connection(#[source] tokio_postgres::Error),
    /// A single SQL statement failed; carries the driver's message.
    #[error("statement failed: {0}")]
    Statement(String),
}
