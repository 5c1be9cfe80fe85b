//! oncosym-model: Training and inference for the symptom → cancer-type
//! classifier.
//!
//! - `features`: binary symptom vector + sex column
//! - `dataset`: seeded synthetic dataset from the curated taxonomy
//! - `labels`: class name ↔ index mapping
//! - `classifier`: softmax regression on Candle
//! - `artifacts`: on-disk cache of model, labels and feature columns
//! - `predictor`: end-to-end prediction with the sex-constraint filter

pub mod error;
pub mod features;
pub mod dataset;
pub mod labels;
pub mod classifier;
pub mod artifacts;
pub mod predictor;

pub use error::{ModelError, Result};
pub use features::FeatureEncoder;
pub use dataset::SyntheticDataset;
pub use labels::LabelEncoder;
pub use classifier::{SoftmaxClassifier, TrainingConfig};
pub use artifacts::ArtifactStore;
pub use predictor::{ModelSettings, Predictor};
