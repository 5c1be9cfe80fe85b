//! Prediction API: symptoms + sex → ranked cancer-type probabilities.

use axum::{extract::State, Json};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use tracing::info;

use oncosym_common::Sex;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct PredictionInput {
    pub symptoms: Vec<String>,
    /// "male" or "female", case-insensitive. Anything else is rejected by
    /// the JSON extractor.
    pub sex: Sex,
}

#[derive(Debug, Serialize)]
pub struct PredictionOutput {
    pub predictions: RankedProbabilities,
}

/// Cancer type → probability, serialized as a JSON object whose keys keep
/// descending-probability order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedProbabilities(pub Vec<(String, f64)>);

impl Serialize for RankedProbabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, p) in &self.0 {
            map.serialize_entry(name, p)?;
        }
        map.end()
    }
}

/// POST /predict
pub async fn predict(
    State(state): State<SharedState>,
    Json(input): Json<PredictionInput>,
) -> Result<Json<PredictionOutput>, ApiError> {
    let ranked = state.predictor.predict(&input.symptoms, input.sex)?;

    if let Some((top, p)) = ranked.first() {
        info!(sex = %input.sex, symptoms = input.symptoms.len(), top = %top, p = *p, "prediction");
    }

    Ok(Json(PredictionOutput {
        predictions: RankedProbabilities(ranked),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_keeps_order() {
        let ranked = RankedProbabilities(vec![
            ("Melanoma".to_string(), 0.7),
            ("Breast Cancer".to_string(), 0.3),
        ]);
        let out = serde_json::to_string(&PredictionOutput { predictions: ranked }).unwrap();
        assert_eq!(out, r#"{"predictions":{"Melanoma":0.7,"Breast Cancer":0.3}}"#);
    }

    #[test]
    fn test_input_sex_case_insensitive() {
        let input: PredictionInput =
            serde_json::from_str(r#"{"symptoms":["Cough"],"sex":"Male"}"#).unwrap();
        assert_eq!(input.sex, Sex::Male);
        assert!(serde_json::from_str::<PredictionInput>(r#"{"symptoms":[],"sex":"x"}"#).is_err());
    }
}
