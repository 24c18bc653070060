//! Schema Reset Binary
//!
//! Drops and recreates every warehouse table. Destroys all loaded data;
//! the load binary never does this on its own.

#[tokio::main]
async fn main() {
    jukebox::log();
    if let Err(e) = jukebox::Pipeline::Provision.run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
