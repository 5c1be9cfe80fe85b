//! Multinomial logistic (softmax) regression on Candle.
//!
//! One linear layer `[num_classes, num_features]` + bias, trained full-batch
//! with AdamW on cross-entropy. Parameters start at zero, so training is
//! deterministic for a given dataset.

use std::path::Path;
use std::time::Instant;

use candle_core::{DType, Device, Tensor, D};
use candle_nn::init::Init;
use candle_nn::{AdamW, Linear, Module, Optimizer, ParamsAdamW, VarBuilder, VarMap};
use tracing::{debug, info};

use crate::error::{ModelError, Result};

/// Optimiser settings.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub weight_decay: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 300,
            learning_rate: 0.1,
            weight_decay: 1e-4,
        }
    }
}

pub struct SoftmaxClassifier {
    varmap: VarMap,
    linear: Linear,
    num_features: usize,
    num_classes: usize,
    device: Device,
}

impl SoftmaxClassifier {
    pub fn new(num_features: usize, num_classes: usize, device: &Device) -> Result<Self> {
        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, device).pp("classifier");
        let weight = vb.get_with_hints((num_classes, num_features), "weight", Init::Const(0.0))?;
        let bias = vb.get_with_hints(num_classes, "bias", Init::Const(0.0))?;

        Ok(Self {
            varmap,
            linear: Linear::new(weight, Some(bias)),
            num_features,
            num_classes,
            device: device.clone(),
        })
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn to_matrix(&self, rows: &[Vec<f32>]) -> Result<Tensor> {
        if let Some(bad) = rows.iter().find(|r| r.len() != self.num_features) {
            return Err(ModelError::ShapeMismatch {
                expected: self.num_features,
                actual: bad.len(),
            });
        }
        let flat: Vec<f32> = rows.iter().flatten().copied().collect();
        Ok(Tensor::from_vec(flat, (rows.len(), self.num_features), &self.device)?)
    }

    /// Train on `rows` with class indices `targets`. Returns the final loss.
    pub fn fit(&mut self, rows: &[Vec<f32>], targets: &[u32], config: &TrainingConfig) -> Result<f32> {
        if rows.is_empty() {
            return Err(ModelError::EmptyDataset);
        }
        if rows.len() != targets.len() {
            return Err(ModelError::ShapeMismatch {
                expected: rows.len(),
                actual: targets.len(),
            });
        }
        if let Some(&t) = targets.iter().find(|&&t| t as usize >= self.num_classes) {
            return Err(ModelError::UnknownLabel(format!("class index {t}")));
        }

        let start = Instant::now();
        let xs = self.to_matrix(rows)?;
        let ys = Tensor::new(targets, &self.device)?;

        let params = ParamsAdamW {
            lr: config.learning_rate,
            weight_decay: config.weight_decay,
            ..Default::default()
        };
        let mut opt = AdamW::new(self.varmap.all_vars(), params)?;

        let log_every = (config.epochs / 5).max(1);
        let mut last_loss = f32::NAN;
        for epoch in 1..=config.epochs {
            let logits = self.linear.forward(&xs)?;
            let loss = candle_nn::loss::cross_entropy(&logits, &ys)?;
            opt.backward_step(&loss)?;

            if epoch % log_every == 0 || epoch == config.epochs {
                last_loss = loss.to_scalar::<f32>()?;
                debug!(epoch, loss = last_loss, "training");
            }
        }

        info!(
            samples = rows.len(),
            classes = self.num_classes,
            epochs = config.epochs,
            loss = last_loss,
            "classifier trained in {:?}",
            start.elapsed()
        );
        Ok(last_loss)
    }

    /// Class probabilities for one feature row, in label-encoder order.
    pub fn predict_proba(&self, row: &[f32]) -> Result<Vec<f32>> {
        if row.len() != self.num_features {
            return Err(ModelError::ShapeMismatch {
                expected: self.num_features,
                actual: row.len(),
            });
        }
        let xs = Tensor::from_slice(row, (1, self.num_features), &self.device)?;
        let logits = self.linear.forward(&xs)?;
        let probs = candle_nn::ops::softmax(&logits, D::Minus1)?;
        Ok(probs.squeeze(0)?.to_vec1::<f32>()?)
    }

    /// Fraction of rows whose arg-max class matches the target.
    pub fn accuracy(&self, rows: &[Vec<f32>], targets: &[u32]) -> Result<f32> {
        if rows.is_empty() {
            return Ok(0.0);
        }
        let xs = self.to_matrix(rows)?;
        let predicted = self.linear.forward(&xs)?.argmax(D::Minus1)?.to_vec1::<u32>()?;
        let hits = predicted.iter().zip(targets).filter(|(p, t)| p == t).count();
        Ok(hits as f32 / rows.len() as f32)
    }

    /// Write weights as safetensors.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.varmap.save(path)?;
        Ok(())
    }

    /// Load weights written by [`save`](Self::save). Shapes must match.
    pub fn load(path: &Path, num_features: usize, num_classes: usize, device: &Device) -> Result<Self> {
        if !path.exists() {
            return Err(ModelError::MissingArtifact(path.to_path_buf()));
        }
        let mut classifier = Self::new(num_features, num_classes, device)?;
        classifier
            .varmap
            .load(path)
            .map_err(|e| ModelError::CorruptArtifact {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(classifier)
    }
}
