/// Contains the structs required to deserialize Chart.yaml files, and chart location.
pub mod chart;

/// Contains the HelmReleaseClient. Used for executing helm commands against the current
/// kubeconfig context.
pub mod client;

/// Contains the helm values document for the chart install.
pub mod values;
