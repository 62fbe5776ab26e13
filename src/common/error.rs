use snafu::Snafu;
use std::path::PathBuf;

/// For use with multiple fallible operations which may fail for different reasons, but are
/// defined within the same scope and must return to the outer scope (calling scope) using
/// the try operator -- '?'.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
#[snafu(context(suffix(false)))]
pub enum Error {
    /// Error for when the installer is invoked without a domain value.
    #[snafu(display("Domain is empty, provide one with the --domain flag"))]
    DomainMissing,

    /// Error for when the kubeconfig file is missing, unreadable or malformed.
    #[snafu(display("Failed to read kubeconfig file {}: {}", filepath.display(), source))]
    KubeConfigRead {
        source: kube::config::KubeconfigError,
        filepath: PathBuf,
    },

    /// Error for when a client configuration could not be built from the kubeconfig contents.
    #[snafu(display("Failed to build client configuration from kubeconfig: {}", source))]
    KubeConfigBuild { source: kube::config::KubeconfigError },

    /// Error for when Kubernetes API client generation fails.
    #[snafu(display("Failed to generate kubernetes client: {}", source))]
    K8sClientGeneration { source: kube::Error },

    /// Error for when a Helm command fails to execute.
    #[snafu(display(
        "Failed to run Helm command,\ncommand: {},\nargs: {:?},\ncommand_error: {}",
        command,
        args,
        source
    ))]
    HelmCommand {
        source: std::io::Error,
        command: String,
        args: Vec<String>,
    },

    /// Error for when the `helm version` command returns an error.
    #[snafu(display(
        "`helm version` command failed,\ncommand: {},\nargs: {:?},\nstd_err: {}",
        command,
        args,
        std_err
    ))]
    HelmVersionCommand {
        command: String,
        args: Vec<String>,
        std_err: String,
    },

    /// Error for when Helm v3.x.y is not present in $PATH.
    #[snafu(display("Helm version {} does not start with 'v3.x.y'", version))]
    HelmVersion { version: String },

    /// Error for when regular expression parsing or compilation fails.
    #[snafu(display("Failed to compile regex {}: {}", expression, source))]
    RegexCompile {
        source: regex::Error,
        expression: String,
    },

    /// Error for when conversion of a UTF8-encoded sequence of bytes to a String fails.
    #[snafu(display("Failed to convert Vec<u8> to UTF-8 formatted String: {}", source))]
    U8VectorToString { source: std::str::Utf8Error },

    /// Error for when the process working directory could not be read.
    #[snafu(display("Failed to read the process working directory: {}", source))]
    CurrentDirectory { source: std::io::Error },

    /// Error for when the chart directory could not be found under the search directory.
    #[snafu(display(
        "Failed to find chart {} under directory {}",
        chart_name,
        search_dir.display()
    ))]
    ChartNotFound {
        chart_name: String,
        search_dir: PathBuf,
    },

    /// Error for when a file could not be read.
    #[snafu(display("Failed to read file {}: {}", filepath.display(), source))]
    ReadingFile {
        source: std::io::Error,
        filepath: PathBuf,
    },

    /// Error for when yaml could not be parsed from a file.
    #[snafu(display("Failed to parse YAML file {}: {}", filepath.display(), source))]
    YamlParseFromFile {
        source: serde_yaml::Error,
        filepath: PathBuf,
    },

    /// Error for when the chart on disk is not the chart this tool installs.
    #[snafu(display(
        "Chart at {} is named '{}', expected '{}'",
        filepath.display(),
        actual,
        expected
    ))]
    NotTheTargetChart {
        filepath: PathBuf,
        actual: String,
        expected: String,
    },

    /// Error for when the helm values could not be serialized to YAML.
    #[snafu(display("Failed to serialize helm values to YAML: {}", source))]
    YamlSerialize { source: serde_yaml::Error },

    /// Error for when the temporary helm values file could not be created.
    #[snafu(display("Failed to create helm values file: {}", source))]
    CreateValuesFile { source: std::io::Error },

    /// Error for when the `helm install` command returns an error.
    #[snafu(display(
        "`helm install` command failed,\ncommand: {},\nargs: {:?},\nstd_err: {}",
        command,
        args,
        std_err
    ))]
    HelmInstallCommand {
        command: String,
        args: Vec<String>,
        std_err: String,
    },

    /// Error for a Kubernetes API LIST request for Node resources.
    #[snafu(display("Failed to LIST Kubernetes nodes: {}", source))]
    ListNodes { source: kube::Error },
}

/// A wrapper type to remove repeated Result<T, Error> returns.
pub type Result<T, E = Error> = std::result::Result<T, E>;
