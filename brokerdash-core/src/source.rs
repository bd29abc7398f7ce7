//! Record sources supply the dataset a dashboard session renders.
//!
//! Every source validates what it loads, so malformed records never reach
//! the shapers.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::{BrokerdashError, BrokerdashResult};

const SAMPLE_DATASET: &str = include_str!("../data/sample_dataset.json");

pub trait RecordSource {
    fn name(&self) -> &str;

    fn load(&self) -> BrokerdashResult<Dataset>;
}

/// Serialization format of a dataset file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
    Toml,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> BrokerdashResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(DatasetFormat::Json),
            "yaml" | "yml" => Ok(DatasetFormat::Yaml),
            "toml" => Ok(DatasetFormat::Toml),
            _ => Err(BrokerdashError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }

    pub fn parse(&self, contents: &str) -> Result<Dataset, String> {
        match self {
            DatasetFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            DatasetFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            DatasetFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

fn finish(mut dataset: Dataset) -> BrokerdashResult<Dataset> {
    dataset.validate()?;
    dataset.prune_orphan_activity();
    Ok(dataset)
}

/// The built-in mock brokerage.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleSource;

impl RecordSource for SampleSource {
    fn name(&self) -> &str {
        "sample"
    }

    fn load(&self) -> BrokerdashResult<Dataset> {
        let dataset: Dataset = serde_json::from_str(SAMPLE_DATASET)?;
        debug!("Loaded {} sample agents", dataset.agents.len());
        finish(dataset)
    }
}

/// A dataset file on disk in JSON, YAML or TOML.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn load(&self) -> BrokerdashResult<Dataset> {
        if !self.path.exists() {
            return Err(BrokerdashError::DatasetNotFound(self.path.clone()));
        }
        let format = DatasetFormat::from_path(&self.path)?;
        let contents = fs::read_to_string(&self.path)?;

        let dataset = format
            .parse(&contents)
            .map_err(|message| BrokerdashError::DatasetParse {
                path: self.path.clone(),
                message,
            })?;

        info!(
            path = %self.path.display(),
            agents = dataset.agents.len(),
            "Loaded dataset file"
        );
        finish(dataset)
    }
}

/// Picks the file source when a path is given, the sample source otherwise.
pub fn open_source(path: Option<&Path>) -> Box<dyn RecordSource> {
    match path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(SampleSource),
    }
}
