//! Star-schema warehouse loader for music streaming event logs.
//!
//! Raw event and song JSON lands in object storage; Redshift `COPY` pulls
//! it into staging tables; a fixed sequence of SQL statements then
//! populates the dimension tables and derives the `songplays` fact table.
//!
//! ## Components
//!
//! - [`Config`] — INI settings and the cluster connection string
//! - [`sql::Catalog`] — ordered statement lists built from settings
//! - [`runner::Runner`] — sequential statement execution over the client
//! - [`Pipeline`] — the two fixed batch sequences (provision, load)
//!
//! Two binaries drive it: `schema` resets the warehouse, `etl` runs the
//! load. Each exits nonzero on the first statement failure; statements
//! committed before the failure stay committed.
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod runner;
pub mod sql;

pub use config::Config;
pub use error::Error;
pub use pipeline::Pipeline;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
