//! On-disk cache of a trained model.
//!
//! One directory, three files:
//!   - `model.safetensors`     classifier weights
//!   - `label_encoder.json`    class names, index order
//!   - `feature_columns.json`  feature column order

use std::fs;
use std::path::{Path, PathBuf};

use candle_core::Device;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::classifier::SoftmaxClassifier;
use crate::error::{ModelError, Result};
use crate::features::FeatureEncoder;
use crate::labels::LabelEncoder;

pub const MODEL_FILE: &str = "model.safetensors";
pub const LABELS_FILE: &str = "label_encoder.json";
pub const FEATURES_FILE: &str = "feature_columns.json";

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    pub fn labels_path(&self) -> PathBuf {
        self.dir.join(LABELS_FILE)
    }

    pub fn features_path(&self) -> PathBuf {
        self.dir.join(FEATURES_FILE)
    }

    /// True only when all three artifacts are present.
    pub fn exists(&self) -> bool {
        self.model_path().is_file() && self.labels_path().is_file() && self.features_path().is_file()
    }

    pub fn save(
        &self,
        classifier: &SoftmaxClassifier,
        labels: &LabelEncoder,
        encoder: &FeatureEncoder,
    ) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        classifier.save(&self.model_path())?;
        fs::write(self.labels_path(), serde_json::to_vec_pretty(labels)?)?;
        fs::write(self.features_path(), serde_json::to_vec_pretty(encoder.columns())?)?;
        info!(dir = %self.dir.display(), "model artifacts saved");
        Ok(())
    }

    pub fn load(&self, device: &Device) -> Result<(SoftmaxClassifier, LabelEncoder, FeatureEncoder)> {
        let labels: LabelEncoder = read_json(&self.labels_path())?;
        let columns: Vec<String> = read_json(&self.features_path())?;
        let encoder = FeatureEncoder::from_columns(columns)?;
        let classifier =
            SoftmaxClassifier::load(&self.model_path(), encoder.width(), labels.len(), device)?;

        info!(
            dir = %self.dir.display(),
            classes = labels.len(),
            features = encoder.width(),
            "model artifacts loaded"
        );
        Ok((classifier, labels, encoder))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ModelError::MissingArtifact(path.to_path_buf()));
    }
    let content = fs::read(path)?;
    serde_json::from_slice(&content).map_err(|e| ModelError::CorruptArtifact {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
