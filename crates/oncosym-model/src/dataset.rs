//! Seeded synthetic training data derived from the curated taxonomy.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use oncosym_common::{Sex, SymptomTaxonomy};

use crate::features::FeatureEncoder;

pub const DEFAULT_NUM_SAMPLES: usize = 1000;
pub const DEFAULT_SEED: u64 = 42;

/// Labeled feature rows.
#[derive(Debug, Clone)]
pub struct SyntheticDataset {
    pub rows: Vec<Vec<f32>>,
    pub labels: Vec<String>,
    pub sexes: Vec<Sex>,
}

impl SyntheticDataset {
    /// Draw `num_samples` patients.
    ///
    /// Each sample picks a sex uniformly, a cancer type uniformly from that
    /// sex's taxonomy, then between 1 and all of that type's symptoms
    /// (uniform count, distinct symptoms).
    pub fn generate(
        taxonomy: &SymptomTaxonomy,
        encoder: &FeatureEncoder,
        num_samples: usize,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let by_sex = [taxonomy.for_sex(Sex::Male), taxonomy.for_sex(Sex::Female)];

        let mut rows = Vec::with_capacity(num_samples);
        let mut labels = Vec::with_capacity(num_samples);
        let mut sexes = Vec::with_capacity(num_samples);

        for _ in 0..num_samples {
            let sex = if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female };
            let candidates = match sex {
                Sex::Male => &by_sex[0],
                Sex::Female => &by_sex[1],
            };
            let Some(profile) = candidates.profiles().choose(&mut rng) else {
                continue;
            };
            if profile.symptoms.is_empty() {
                continue;
            }

            let k = rng.gen_range(1..=profile.symptoms.len());
            let present: Vec<&String> = profile.symptoms.choose_multiple(&mut rng, k).collect();

            rows.push(encoder.encode(&present, sex));
            labels.push(profile.name.clone());
            sexes.push(sex);
        }

        info!(samples = rows.len(), width = encoder.width(), seed, "synthetic dataset generated");
        Self { rows, labels, sexes }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
