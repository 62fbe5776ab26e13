use crate::{
    common::{
        constants::HELM_DRIVER_ENV,
        error::{
            HelmCommand, HelmInstallCommand, HelmVersion, HelmVersionCommand, RegexCompile,
            Result, U8VectorToString,
        },
    },
    vec_to_strings,
};
use regex::bytes::Regex;
use snafu::{ensure, ResultExt};
use std::{path::Path, process::Command, str};
use tracing::debug;

/// This is a builder for HelmReleaseClient.
#[derive(Default)]
pub struct HelmReleaseClientBuilder {
    storage_driver: Option<String>,
}

impl HelmReleaseClientBuilder {
    /// This is a builder option to set the helm release storage driver, e.g. secret,
    /// configmap, memory. An empty value leaves helm on its default driver.
    #[must_use]
    pub fn with_storage_driver<J>(mut self, driver: J) -> Self
    where
        J: ToString,
    {
        self.storage_driver = Some(driver.to_string());
        self
    }

    /// Build the HelmReleaseClient. Fails if a Helm v3 binary is not present in $PATH.
    pub fn build(self) -> Result<HelmReleaseClient> {
        let client = HelmReleaseClient {
            storage_driver: self.storage_driver.unwrap_or_default(),
        };
        client.validate_helm_v3()?;
        Ok(client)
    }
}

/// This type has functions which execute helm commands against the current kubeconfig
/// context. The release namespace is whatever that context carries, helm's own default.
pub struct HelmReleaseClient {
    storage_driver: String,
}

impl HelmReleaseClient {
    /// This creates an empty builder.
    pub fn builder() -> HelmReleaseClientBuilder {
        HelmReleaseClientBuilder::default()
    }

    /// Runs command `helm version --short`, and validates that the binary is a v3.x.y one.
    fn validate_helm_v3(&self) -> Result<()> {
        let command: &str = "helm";
        let args: Vec<String> = vec_to_strings!["version", "--short"];

        debug!(%command, ?args, "Helm version command");

        let output = self
            .command(args.clone())
            .output()
            .context(HelmCommand {
                command: command.to_string(),
                args: args.clone(),
            })?;

        let stdout_str = str::from_utf8(output.stdout.as_slice()).context(U8VectorToString)?;
        debug!(stdout=%stdout_str, "Helm version command standard output");
        ensure!(
            output.status.success(),
            HelmVersionCommand {
                command: command.to_string(),
                args,
                std_err: str::from_utf8(output.stderr.as_slice())
                    .context(U8VectorToString)?
                    .to_string()
            }
        );

        // Parse based on regex, to validate if the version string (semver) is v3.x.
        let regex: &str = r"^(v3\.[0-9]+\.[0-9])";
        if !Regex::new(regex)
            .context(RegexCompile {
                expression: regex.to_string(),
            })?
            .is_match(output.stdout.as_slice())
        {
            return HelmVersion {
                version: stdout_str.to_string(),
            }
            .fail();
        }

        Ok(())
    }

    /// Runs command `helm install <release_name> <chart_dir> --values <values_file>`. Blocks
    /// until helm itself returns.
    pub fn install<A, P, F>(&self, release_name: A, chart_dir: P, values_file: F) -> Result<()>
    where
        A: ToString,
        P: AsRef<Path>,
        F: AsRef<Path>,
    {
        let command: &str = "helm";
        let args = install_args(release_name, chart_dir, values_file);

        debug!(%command, ?args, "Helm install command");

        let output = self
            .command(args.clone())
            .output()
            .context(HelmCommand {
                command: command.to_string(),
                args: args.clone(),
            })?;

        let stdout_str = str::from_utf8(output.stdout.as_slice()).context(U8VectorToString)?;
        debug!(stdout=%stdout_str, "Helm install command standard output");
        ensure!(
            output.status.success(),
            HelmInstallCommand {
                command: command.to_string(),
                args,
                std_err: str::from_utf8(output.stderr.as_slice())
                    .context(U8VectorToString)?
                    .to_string()
            }
        );

        Ok(())
    }

    /// A helm Command with the storage driver applied to the child environment.
    fn command(&self, args: Vec<String>) -> Command {
        let mut command = Command::new("helm");
        command.args(args);
        if !self.storage_driver.is_empty() {
            command.env(HELM_DRIVER_ENV, self.storage_driver.as_str());
        }
        command
    }
}

/// Generate args to pass to the `helm install` command.
fn install_args<A, P, F>(release_name: A, chart_dir: P, values_file: F) -> Vec<String>
where
    A: ToString,
    P: AsRef<Path>,
    F: AsRef<Path>,
{
    vec_to_strings![
        "install",
        release_name,
        chart_dir.as_ref().to_string_lossy(),
        "--values",
        values_file.as_ref().to_string_lossy()
    ]
}

#[cfg(test)]
mod tests {
    use super::install_args;
    use crate::common::constants::RELEASE_NAME;

    #[test]
    fn install_args_are_ordered_for_helm() {
        let args = install_args(RELEASE_NAME, "./my-nginx-chart", "/tmp/values.yaml");
        assert_eq!(
            args,
            vec![
                "install",
                "my-nginx-release",
                "./my-nginx-chart",
                "--values",
                "/tmp/values.yaml"
            ]
        );
    }
}
