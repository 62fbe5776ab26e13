use crate::common::{
    constants::CHART_NAME,
    error::{ChartNotFound, NotTheTargetChart, ReadingFile, Result, YamlParseFromFile},
};
use semver::Version;
use serde::Deserialize;
use snafu::{ensure, ResultExt};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

#[derive(Debug, Deserialize)]
/// Chart.yaml metadata for name and version.
pub struct Chart {
    name: String,
    #[serde(deserialize_with = "Version::deserialize")]
    version: Version,
}

impl Chart {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &Version {
        &self.version
    }
}

/// Resolve a chart name to a chart directory under the search directory. Remote repository
/// and archive resolution is left to `helm` itself, this only handles the local directory
/// case.
pub fn locate_chart<P>(chart_name: &str, search_dir: P) -> Result<PathBuf>
where
    P: AsRef<Path>,
{
    let chart_dir = search_dir.as_ref().join(chart_name);
    debug!(chart_dir = %chart_dir.display(), "Looking for chart directory");

    ensure!(
        chart_dir.is_dir(),
        ChartNotFound {
            chart_name: chart_name.to_string(),
            search_dir: search_dir.as_ref().to_path_buf(),
        }
    );

    Ok(chart_dir)
}

/// Load the Chart.yaml from a located chart directory, and verify that the chart is the
/// one this tool installs.
pub fn load_chart<P>(chart_dir: P) -> Result<Chart>
where
    P: AsRef<Path>,
{
    let filepath = chart_dir.as_ref().join("Chart.yaml");
    let contents = fs::read(filepath.as_path()).context(ReadingFile {
        filepath: filepath.clone(),
    })?;
    let chart: Chart = serde_yaml::from_slice(contents.as_slice()).context(YamlParseFromFile {
        filepath: filepath.clone(),
    })?;

    ensure!(
        chart.name() == CHART_NAME,
        NotTheTargetChart {
            filepath,
            actual: chart.name().to_string(),
            expected: CHART_NAME.to_string(),
        }
    );

    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::{load_chart, locate_chart};
    use crate::common::{constants::CHART_NAME, error::Error};
    use std::fs;

    fn chart_fixture(dir: &std::path::Path, name: &str, version: &str) -> std::path::PathBuf {
        let chart_dir = dir.join(name);
        fs::create_dir(chart_dir.as_path()).unwrap();
        fs::write(
            chart_dir.join("Chart.yaml"),
            format!("apiVersion: v2\nname: {name}\nversion: {version}\n"),
        )
        .unwrap();
        chart_dir
    }

    #[test]
    fn locates_and_loads_the_target_chart() {
        let tmp = tempfile::tempdir().unwrap();
        chart_fixture(tmp.path(), CHART_NAME, "0.1.0");

        let chart_dir = locate_chart(CHART_NAME, tmp.path()).unwrap();
        let chart = load_chart(chart_dir).unwrap();
        assert_eq!(chart.name(), CHART_NAME);
        assert_eq!(chart.version().to_string(), "0.1.0");
    }

    #[test]
    fn missing_chart_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let error = locate_chart(CHART_NAME, tmp.path()).unwrap_err();
        assert!(matches!(error, Error::ChartNotFound { .. }));
    }

    #[test]
    fn another_chart_under_the_target_name_dir_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let chart_dir = chart_fixture(tmp.path(), "some-other-chart", "1.2.3");

        let error = load_chart(chart_dir).unwrap_err();
        assert!(matches!(error, Error::NotTheTargetChart { .. }));
    }

    #[test]
    fn malformed_chart_yaml_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let chart_dir = tmp.path().join(CHART_NAME);
        fs::create_dir(chart_dir.as_path()).unwrap();
        fs::write(chart_dir.join("Chart.yaml"), "name: [unclosed\n").unwrap();

        let error = load_chart(chart_dir).unwrap_err();
        assert!(matches!(error, Error::YamlParseFromFile { .. }));
    }
}
