use crate::common::{
    constants::{INGRESS_PATH, INGRESS_PATH_TYPE},
    error::{CreateValuesFile, DomainMissing, Result, YamlSerialize},
};
use serde::Serialize;
use snafu::{ensure, ResultExt};
use tempfile::NamedTempFile;

/// This is the values document handed to the chart at install time. Everything except the
/// ingress host list is left to the chart's own defaults.
#[derive(Debug, Serialize)]
pub struct ChartValues {
    ingress: IngressValues,
}

#[derive(Debug, Serialize)]
struct IngressValues {
    hosts: Vec<IngressHost>,
}

#[derive(Debug, Serialize)]
struct IngressHost {
    host: String,
    paths: Vec<IngressPath>,
}

#[derive(Debug, Serialize)]
struct IngressPath {
    path: String,
    #[serde(rename = "pathType")]
    path_type: String,
}

impl ChartValues {
    /// Build the values document for a single ingress host. The domain is required.
    pub fn new(domain: &str) -> Result<Self> {
        ensure!(!domain.is_empty(), DomainMissing);

        Ok(ChartValues {
            ingress: IngressValues {
                hosts: vec![IngressHost {
                    host: domain.to_string(),
                    paths: vec![IngressPath {
                        path: INGRESS_PATH.to_string(),
                        path_type: INGRESS_PATH_TYPE.to_string(),
                    }],
                }],
            },
        })
    }

    /// The ingress host this document carries. The constructor guarantees exactly one.
    pub fn host(&self) -> &str {
        self.ingress.hosts[0].host.as_str()
    }

    /// Write the document to a temporary YAML file for `helm install --values`. The file
    /// lives on disk for as long as the returned handle does.
    pub fn to_temp_file(&self) -> Result<NamedTempFile> {
        let file = NamedTempFile::new().context(CreateValuesFile)?;
        serde_yaml::to_writer(file.as_file(), self).context(YamlSerialize)?;
        Ok(file)
    }
}
