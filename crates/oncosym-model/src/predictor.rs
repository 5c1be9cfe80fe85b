//! End-to-end prediction: encode → classify → sex filter → rank.

use std::collections::BTreeMap;
use std::path::PathBuf;

use candle_core::Device;
use tracing::{debug, info};

use oncosym_common::{apply_sex_constraints, rank_descending, Sex, SymptomTaxonomy};

use crate::artifacts::ArtifactStore;
use crate::classifier::{SoftmaxClassifier, TrainingConfig};
use crate::dataset::{SyntheticDataset, DEFAULT_NUM_SAMPLES, DEFAULT_SEED};
use crate::error::Result;
use crate::features::FeatureEncoder;
use crate::labels::LabelEncoder;

/// Where artifacts live and how to (re)build them.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub artifact_dir: PathBuf,
    pub num_samples: usize,
    pub seed: u64,
    pub training: TrainingConfig,
    /// Ignore cached artifacts and train from scratch.
    pub retrain: bool,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("./artifacts"),
            num_samples: DEFAULT_NUM_SAMPLES,
            seed: DEFAULT_SEED,
            training: TrainingConfig::default(),
            retrain: false,
        }
    }
}

pub struct Predictor {
    encoder: FeatureEncoder,
    labels: LabelEncoder,
    classifier: SoftmaxClassifier,
    male: SymptomTaxonomy,
    female: SymptomTaxonomy,
}

impl Predictor {
    pub fn new(encoder: FeatureEncoder, labels: LabelEncoder, classifier: SoftmaxClassifier) -> Self {
        Self {
            encoder,
            labels,
            classifier,
            male: SymptomTaxonomy::male(),
            female: SymptomTaxonomy::female(),
        }
    }

    /// Load cached artifacts, or train and cache them when any is missing.
    pub fn load_or_train(settings: &ModelSettings) -> Result<Self> {
        let store = ArtifactStore::new(&settings.artifact_dir);
        if settings.retrain {
            info!("retrain requested; ignoring cached artifacts");
        } else if store.exists() {
            let (classifier, labels, encoder) = store.load(&Device::Cpu)?;
            return Ok(Self::new(encoder, labels, classifier));
        } else {
            info!(dir = %store.dir().display(), "no cached model found; training");
        }

        let predictor = Self::train(settings)?;
        store.save(&predictor.classifier, &predictor.labels, &predictor.encoder)?;
        Ok(predictor)
    }

    /// Synthesize a dataset from the built-in taxonomy and train on it.
    pub fn train(settings: &ModelSettings) -> Result<Self> {
        let taxonomy = SymptomTaxonomy::builtin();
        let encoder = FeatureEncoder::from_vocabulary(&taxonomy.symptom_vocabulary());
        let dataset = SyntheticDataset::generate(&taxonomy, &encoder, settings.num_samples, settings.seed);

        let labels = LabelEncoder::fit(&dataset.labels);
        let targets = dataset
            .labels
            .iter()
            .map(|l| labels.encode(l))
            .collect::<Result<Vec<u32>>>()?;

        let mut classifier = SoftmaxClassifier::new(encoder.width(), labels.len(), &Device::Cpu)?;
        classifier.fit(&dataset.rows, &targets, &settings.training)?;

        let accuracy = classifier.accuracy(&dataset.rows, &targets)?;
        info!(accuracy, classes = labels.len(), "training-set accuracy");

        Ok(Self::new(encoder, labels, classifier))
    }

    /// Predict cancer-type probabilities for a free-text symptom list.
    ///
    /// Unknown symptoms are ignored. The result only holds types possible
    /// for `sex`, sums to 1.0 (or is empty), and is sorted by descending
    /// probability.
    pub fn predict<S: AsRef<str>>(&self, symptoms: &[S], sex: Sex) -> Result<Vec<(String, f64)>> {
        let unknown = self.unknown_symptoms(symptoms);
        if !unknown.is_empty() {
            debug!(?unknown, "ignoring unknown symptoms");
        }

        let row = self.encoder.encode(symptoms, sex);
        let probs = self.classifier.predict_proba(&row)?;

        let prob_map: BTreeMap<String, f64> = self
            .labels
            .classes()
            .iter()
            .zip(probs)
            .map(|(name, p)| (name.clone(), f64::from(p)))
            .collect();

        let filtered = apply_sex_constraints(&prob_map, sex, &self.male, &self.female);
        Ok(rank_descending(filtered))
    }

    /// Inputs that `predict` will ignore.
    pub fn unknown_symptoms<'a, S: AsRef<str>>(&self, symptoms: &'a [S]) -> Vec<&'a str> {
        symptoms
            .iter()
            .map(AsRef::as_ref)
            .filter(|s| !self.encoder.is_known(s))
            .collect()
    }

    pub fn class_names(&self) -> &[String] {
        self.labels.classes()
    }

    /// Known symptoms, in feature-column order (the `Sex` column excluded).
    pub fn symptom_vocabulary(&self) -> Vec<&str> {
        self.encoder
            .columns()
            .iter()
            .map(String::as_str)
            .filter(|c| self.encoder.is_known(c))
            .collect()
    }

    /// Cancer types the model can return for `sex`.
    pub fn cancer_types_for(&self, sex: Sex) -> Vec<&str> {
        let taxonomy = match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        };
        self.labels
            .classes()
            .iter()
            .map(String::as_str)
            .filter(|c| taxonomy.contains(c))
            .collect()
    }
}
