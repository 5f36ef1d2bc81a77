use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::catalog::find_center;
use crate::models::CenterRecord;

/// Errors that can occur while loading the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    centros_salud: Vec<CenterRecord>,
}

/// Immutable, in-memory set of health centers
///
/// Loaded once at startup and shared read-only between workers.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    centers: Vec<CenterRecord>,
}

impl Dataset {
    pub fn new(centers: Vec<CenterRecord>) -> Self {
        Self { centers }
    }

    /// Load a dataset file of the form `{"centros_salud": [...]}`
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let dataset = Self::from_json_str(&raw)?;

        tracing::info!(
            "Loaded {} centers from {} ({} without usable coordinates)",
            dataset.len(),
            path.display(),
            dataset.len() - dataset.locatable_count()
        );

        Ok(dataset)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(raw)?;
        Ok(Self::new(file.centros_salud))
    }

    pub fn centers(&self) -> &[CenterRecord] {
        &self.centers
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Center by id, case-insensitive on the requested id
    pub fn find(&self, id: &str) -> Option<&CenterRecord> {
        find_center(&self.centers, id)
    }

    /// Number of centers that can take part in distance ranking
    pub fn locatable_count(&self) -> usize {
        self.centers.iter().filter(|c| c.coordinate().is_some()).count()
    }
}
