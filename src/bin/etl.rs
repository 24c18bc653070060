//! Load Binary
//!
//! Copy staging from object storage, populate the dimension tables,
//! refresh mutable attributes, derive the songplays fact table.

#[tokio::main]
async fn main() {
    jukebox::log();
    if let Err(e) = jukebox::Pipeline::Load.run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
