/// Contains shared constants, error handling tooling and macros.
pub mod common;

/// Contains the helm chart location, loading and values tooling, and the helm binary driver.
pub mod helm;

/// Contains the chart install workflow.
pub mod install;

/// Contains tools to create Kubernetes API clients.
pub mod kube_client;

/// Contains the cluster nodes diagnostic workflow.
pub mod nodes;
