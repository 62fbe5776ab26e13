/// This is the name of the product that is being deployed.
pub const PRODUCT: &str = "nginx";

/// This is the name of the Helm chart that gets installed. It is fixed, no input changes it.
pub const CHART_NAME: &str = "my-nginx-chart";

/// This is the name given to the Helm release of the chart. It is fixed, no input changes it.
pub const RELEASE_NAME: &str = "my-nginx-release";

/// This is the single ingress route served for the templated host.
pub const INGRESS_PATH: &str = "/";

/// This is the pathType set on the single ingress route.
pub const INGRESS_PATH_TYPE: &str = "ImplementationSpecific";

/// This is the kubeconfig directory under the home directory.
pub const KUBE_CONFIG_DIR: &str = ".kube";

/// This is the kubeconfig file name under the kubeconfig directory.
pub const KUBE_CONFIG_FILE: &str = "config";

/// This is the environment variable helm reads its release storage driver from.
pub const HELM_DRIVER_ENV: &str = "HELM_DRIVER";
