//! Medical plausibility filter over predicted class probabilities.
//!
//! Removes cancer types that are impossible for the patient's sex and
//! renormalises what is left so it sums to 1.0.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use crate::sex::Sex;
use crate::taxonomy::SymptomTaxonomy;

/// Keep only entries present in the taxonomy matching `sex`, then rescale
/// them to sum to 1.0.
///
/// Returns an empty map when the kept probabilities total zero, so the result
/// always either sums to 1.0 or is empty. Applying the filter to its own
/// output is a no-op.
pub fn apply_sex_constraints(
    probs: &BTreeMap<String, f64>,
    sex: Sex,
    male_taxonomy: &SymptomTaxonomy,
    female_taxonomy: &SymptomTaxonomy,
) -> BTreeMap<String, f64> {
    let allowed = match sex {
        Sex::Male => male_taxonomy,
        Sex::Female => female_taxonomy,
    };

    let filtered: BTreeMap<String, f64> = probs
        .iter()
        .filter(|(name, _)| allowed.contains(name))
        .map(|(name, &p)| (name.clone(), p))
        .collect();

    let total: f64 = filtered.values().sum();
    if total.is_nan() || total <= 0.0 {
        debug!(sex = %sex, kept = filtered.len(), "no probability mass left after sex filter");
        return BTreeMap::new();
    }

    debug!(sex = %sex, kept = filtered.len(), dropped = probs.len() - filtered.len(), total, "renormalising");
    filtered
        .into_iter()
        .map(|(name, p)| (name, p / total))
        .collect()
}

/// Order a probability map by descending probability, ties broken by name.
pub fn rank_descending(probs: BTreeMap<String, f64>) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = probs.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked
}
