//! Feature encoding: free-text symptom list + sex → fixed-order binary vector.

use std::collections::HashMap;

use oncosym_common::Sex;

use crate::error::{ModelError, Result};

/// Name of the trailing sex column.
pub const SEX_COLUMN: &str = "Sex";

/// Maps symptom strings onto columns of a fixed-width feature vector.
///
/// Column order is whatever the encoder was built with; a model trained with
/// one column order must be queried with the same order, which is why the
/// columns are persisted next to the weights.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    sex_index: usize,
}

impl FeatureEncoder {
    /// Columns = `symptoms` in the given order, then `Sex`.
    pub fn from_vocabulary(symptoms: &[String]) -> Self {
        let columns: Vec<String> = symptoms
            .iter()
            .cloned()
            .chain(std::iter::once(SEX_COLUMN.to_string()))
            .collect();
        let sex_index = columns.len() - 1;
        Self::build(columns, sex_index)
    }

    /// Rebuild from a persisted column list. The list must contain `Sex`.
    pub fn from_columns(columns: Vec<String>) -> Result<Self> {
        let sex_index = columns
            .iter()
            .position(|c| c == SEX_COLUMN)
            .ok_or_else(|| {
                ModelError::InvalidFeatures(format!("missing the {SEX_COLUMN:?} column"))
            })?;
        Ok(Self::build(columns, sex_index))
    }

    fn build(columns: Vec<String>, sex_index: usize) -> Self {
        debug_assert_eq!(columns[sex_index], SEX_COLUMN);
        let index: HashMap<String, usize> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self { columns, index, sex_index }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_known(&self, symptom: &str) -> bool {
        symptom != SEX_COLUMN && self.index.contains_key(symptom)
    }

    /// Encode a symptom list. Unknown symptoms are ignored.
    pub fn encode<S: AsRef<str>>(&self, symptoms: &[S], sex: Sex) -> Vec<f32> {
        let mut row = vec![0.0f32; self.width()];
        for symptom in symptoms {
            let symptom = symptom.as_ref();
            if symptom == SEX_COLUMN {
                continue;
            }
            if let Some(&i) = self.index.get(symptom) {
                row[i] = 1.0;
            }
        }
        row[self.sex_index] = sex.feature_value();
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> FeatureEncoder {
        FeatureEncoder::from_vocabulary(&[
            "Cough".to_string(),
            "Fatigue".to_string(),
            "Fever".to_string(),
        ])
    }

    #[test]
    fn test_sex_column_is_last() {
        let enc = encoder();
        assert_eq!(enc.width(), 4);
        assert_eq!(enc.columns().last().map(String::as_str), Some(SEX_COLUMN));
    }

    #[test]
    fn test_encode_known_symptoms() {
        let enc = encoder();
        assert_eq!(enc.encode(&["Fever", "Cough"], Sex::Male), vec![1.0, 0.0, 1.0, 0.0]);
        assert_eq!(enc.encode(&["Fatigue"], Sex::Female), vec![0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unknown_symptoms_ignored() {
        let enc = encoder();
        let base = enc.encode(&["Cough"], Sex::Female);
        let noisy = enc.encode(&["Cough", "Hiccups", "cough", "Sex"], Sex::Female);
        assert_eq!(base, noisy);
        assert!(!enc.is_known("Hiccups"));
        assert!(!enc.is_known(SEX_COLUMN));
    }

    #[test]
    fn test_from_columns_respects_order() {
        let enc = FeatureEncoder::from_columns(vec![
            "Sex".to_string(),
            "Fever".to_string(),
            "Cough".to_string(),
        ])
        .unwrap();
        assert_eq!(enc.encode(&["Cough"], Sex::Female), vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_from_columns_requires_sex() {
        assert!(matches!(
            FeatureEncoder::from_columns(vec!["Cough".to_string()]),
            Err(ModelError::InvalidFeatures(_))
        ));
        assert!(matches!(
            FeatureEncoder::from_columns(Vec::new()),
            Err(ModelError::InvalidFeatures(_))
        ));
    }

    #[test]
    fn test_sex_index_follows_persisted_position() {
        let enc = FeatureEncoder::from_columns(vec![
            "Fever".to_string(),
            "Sex".to_string(),
            "Cough".to_string(),
        ])
        .unwrap();
        assert_eq!(enc.encode(&["Cough"], Sex::Female), vec![0.0, 1.0, 1.0]);
        assert_eq!(enc.encode(&["Fever"], Sex::Male), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_vocabulary_has_only_sex() {
        let enc = FeatureEncoder::from_vocabulary(&[]);
        assert_eq!(enc.columns(), &[SEX_COLUMN.to_string()]);
        assert_eq!(enc.encode(&["Cough"], Sex::Female), vec![1.0]);
    }
}
