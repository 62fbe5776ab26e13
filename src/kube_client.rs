use crate::common::{
    constants::{KUBE_CONFIG_DIR, KUBE_CONFIG_FILE},
    error::{K8sClientGeneration, KubeConfigBuild, KubeConfigRead, Result},
};
use k8s_openapi::api::core::v1::Node;
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Api, Client, Config,
};
use snafu::ResultExt;
use std::{env, ffi::OsString, path::{Path, PathBuf}};
use tracing::debug;

/// Path to the kubeconfig file, derived from the home directory. An unset home directory
/// yields an empty path, and the kubeconfig read fails with the library's own diagnostic.
pub fn kubeconfig_path() -> PathBuf {
    kubeconfig_path_from(env::var_os("HOME"))
}

fn kubeconfig_path_from(home: Option<OsString>) -> PathBuf {
    home.map(PathBuf::from)
        .map(|home| home.join(KUBE_CONFIG_DIR).join(KUBE_CONFIG_FILE))
        .unwrap_or_default()
}

/// Generate a new kube::Client from the home directory's kubeconfig file.
pub async fn client() -> Result<Client> {
    client_from(kubeconfig_path().as_path()).await
}

/// Generate a new kube::Client from the kubeconfig file at the given path.
pub async fn client_from(filepath: &Path) -> Result<Client> {
    debug!(filepath = %filepath.display(), "Reading kubeconfig file");

    let kubeconfig = Kubeconfig::read_from(filepath).context(KubeConfigRead {
        filepath: filepath.to_path_buf(),
    })?;
    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .context(KubeConfigBuild)?;

    Client::try_from(config).context(K8sClientGeneration)
}

/// Generate the Node api client.
pub async fn nodes_api() -> Result<Api<Node>> {
    Ok(Api::all(client().await?))
}

#[cfg(test)]
mod tests {
    use super::{client_from, kubeconfig_path_from};
    use crate::common::error::Error;
    use std::{ffi::OsString, fs, path::PathBuf};

    #[test]
    fn kubeconfig_path_is_under_home() {
        let path = kubeconfig_path_from(Some(OsString::from("/home/operator")));
        assert_eq!(path, PathBuf::from("/home/operator/.kube/config"));
    }

    #[test]
    fn kubeconfig_path_is_empty_without_home() {
        assert_eq!(kubeconfig_path_from(None), PathBuf::new());
    }

    #[tokio::test]
    async fn missing_kubeconfig_file_fails_client_generation() {
        let tmp = tempfile::tempdir().unwrap();
        let filepath = tmp.path().join("config");

        let error = client_from(filepath.as_path()).await.err().unwrap();
        assert!(matches!(error, Error::KubeConfigRead { .. }));
    }

    #[tokio::test]
    async fn malformed_kubeconfig_file_fails_client_generation() {
        let tmp = tempfile::tempdir().unwrap();
        let filepath = tmp.path().join("config");
        fs::write(filepath.as_path(), "clusters: [unclosed\n").unwrap();

        let error = client_from(filepath.as_path()).await.err().unwrap();
        assert!(matches!(error, Error::KubeConfigRead { .. }));
    }
}
