//! Statement catalog for the warehouse.
//!
//! Everything in this module is SQL text, not behavior: fixed DDL and DML
//! lists in the exact order the pipelines submit them, plus the
//! [`Catalog`] factory that interpolates bulk-load credentials from
//! settings. The texts target Redshift over the Postgres wire protocol,
//! so the storage hints (IDENTITY, SORTKEY, DISTKEY, DISTSTYLE) stay in
//! the DDL verbatim.
mod catalog;
mod ddl;
mod dml;
mod load;

pub use catalog::*;
pub use ddl::*;
pub use dml::*;
pub use load::*;

/// Staging table for raw event records, one row per user action.
#[rustfmt::skip]
pub const STAGING_EVENTS: &str = "staging_events";
/// Staging table for raw song and artist metadata records.
#[rustfmt::skip]
pub const STAGING_SONGS:  &str = "staging_songs";
/// Fact table, one row per qualifying song play event.
#[rustfmt::skip]
pub const SONGPLAYS:      &str = "songplays";
/// Dimension table for listeners, keyed by user id.
#[rustfmt::skip]
pub const USERS:          &str = "users";
/// Dimension table for songs, keyed by song id.
#[rustfmt::skip]
pub const SONGS:          &str = "songs";
/// Dimension table for artists, keyed by artist id.
#[rustfmt::skip]
pub const ARTISTS:        &str = "artists";
/// Dimension table for play timestamps, keyed by the timestamp itself.
#[rustfmt::skip]
pub const TIME:           &str = "time";
