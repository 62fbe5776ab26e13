use clap::Parser;

/// These are the supported cli configuration options for the chart install.
#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Installs the my-nginx-chart Helm chart", long_about = None)]
pub(crate) struct CliArgs {
    /// The domain to be used for the deployment's ingress host.
    #[arg(short, long)]
    domain: String,

    /// This is the helm release storage driver, e.g. secret, configmap, memory.
    #[arg(long, env = "HELM_DRIVER", default_value = "")]
    helm_storage_driver: String,
}

impl CliArgs {
    /// This returns the domain templated into the chart's ingress host.
    pub(crate) fn domain(&self) -> String {
        self.domain.clone()
    }

    /// This returns the helm release storage driver, empty for helm's default.
    pub(crate) fn helm_storage_driver(&self) -> String {
        self.helm_storage_driver.clone()
    }
}
