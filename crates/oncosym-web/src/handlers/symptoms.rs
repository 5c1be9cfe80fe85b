//! Vocabulary listing so clients can offer exact symptom strings.

use axum::{extract::State, Json};
use serde::Serialize;

use oncosym_common::Sex;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct SymptomCatalog {
    pub symptoms: Vec<String>,
    pub cancer_types: CancerTypesBySex,
}

#[derive(Debug, Serialize)]
pub struct CancerTypesBySex {
    pub male: Vec<String>,
    pub female: Vec<String>,
}

/// GET /symptoms
pub async fn list_symptoms(State(state): State<SharedState>) -> Json<SymptomCatalog> {
    let predictor = &state.predictor;
    let owned = |v: Vec<&str>| v.into_iter().map(str::to_string).collect::<Vec<_>>();

    Json(SymptomCatalog {
        symptoms: owned(predictor.symptom_vocabulary()),
        cancer_types: CancerTypesBySex {
            male: owned(predictor.cancer_types_for(Sex::Male)),
            female: owned(predictor.cancer_types_for(Sex::Female)),
        },
    })
}
