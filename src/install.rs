use crate::{
    common::{
        constants::{CHART_NAME, RELEASE_NAME},
        error::{CurrentDirectory, Result},
    },
    helm::{chart, client::HelmReleaseClient, values::ChartValues},
    kube_client,
};
use snafu::ResultExt;
use std::env;
use tracing::info;

/// Explicit configuration for one install run, assembled from the CLI options before the
/// workflow starts. The workflow itself performs no ad hoc environment reads.
pub struct InstallConfig {
    domain: String,
    helm_storage_driver: String,
}

impl InstallConfig {
    pub fn new<J>(domain: J, helm_storage_driver: J) -> Self
    where
        J: ToString,
    {
        InstallConfig {
            domain: domain.to_string(),
            helm_storage_driver: helm_storage_driver.to_string(),
        }
    }

    /// This is the domain templated into the chart's ingress host.
    pub fn domain(&self) -> &str {
        self.domain.as_str()
    }

    /// This is the helm release storage driver, empty for helm's default.
    pub fn helm_storage_driver(&self) -> &str {
        self.helm_storage_driver.as_str()
    }
}

/// This function sees the chart install through from values to release. Every step is a
/// hard precondition for the next one, the first error aborts the run.
pub async fn install(config: &InstallConfig) -> Result<()> {
    let values = ChartValues::new(config.domain())?;

    // The install itself goes through the helm binary, so the client handle is not used
    // beyond its construction. Building it up front fails fast on an unusable kubeconfig
    // before helm mutates any cluster state.
    let _client = kube_client::client().await?;

    let helm = HelmReleaseClient::builder()
        .with_storage_driver(config.helm_storage_driver())
        .build()?;

    let search_dir = env::current_dir().context(CurrentDirectory)?;
    let chart_dir = chart::locate_chart(CHART_NAME, search_dir)?;
    let loaded_chart = chart::load_chart(chart_dir.as_path())?;
    info!(
        chart = loaded_chart.name(),
        version = %loaded_chart.version(),
        "Loaded chart"
    );

    let values_file = values.to_temp_file()?;
    info!(
        release = RELEASE_NAME,
        host = values.host(),
        "Installing chart release"
    );
    helm.install(RELEASE_NAME, chart_dir.as_path(), values_file.path())?;

    info!("Chart installed successfully!");
    Ok(())
}
