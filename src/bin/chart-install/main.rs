use chart_install::{
    common::{constants::PRODUCT, error::Result},
    install::{install, InstallConfig},
};
use clap::Parser;
use opts::CliArgs;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod opts;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let opts = CliArgs::parse();
    let config = InstallConfig::new(opts.domain(), opts.helm_storage_driver());

    install(&config).await.map_err(|error| {
        error!(%error, "Failed to install {PRODUCT}");
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
