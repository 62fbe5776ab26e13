use chart_install::{common::error::Result, nodes::report_nodes};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    report_nodes().await.map_err(|error| {
        error!(%error, "Failed to list cluster nodes");
        error
    })
}

/// Initialize logging components -- tracing.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
