//! End-to-end predictor behaviour on a model trained from the built-in
//! taxonomy.

use std::sync::OnceLock;

use oncosym_common::{Sex, SymptomTaxonomy};
use oncosym_model::{ArtifactStore, ModelSettings, Predictor};

fn predictor() -> &'static Predictor {
    static PREDICTOR: OnceLock<Predictor> = OnceLock::new();
    PREDICTOR.get_or_init(|| Predictor::train(&ModelSettings::default()).expect("training failed"))
}

fn total(ranked: &[(String, f64)]) -> f64 {
    ranked.iter().map(|(_, p)| p).sum()
}

const SAMPLE_INPUTS: &[&[&str]] = &[
    &["Cough", "Chest pain", "Weight loss"],
    &["Vulvar warts", "Itching on vulva"],
    &["Erectile dysfunction", "Blood in semen"],
    &["Blood in urine", "Back pain"],
    &[],
];

#[test]
fn test_probabilities_sum_to_one() {
    for &symptoms in SAMPLE_INPUTS {
        for sex in Sex::ALL {
            let ranked = predictor().predict(symptoms, sex).unwrap();
            assert!(!ranked.is_empty());
            let sum = total(&ranked);
            assert!((sum - 1.0).abs() < 1e-6, "{symptoms:?}/{sex}: sum {sum}");
        }
    }
}

#[test]
fn test_only_sex_compatible_types() {
    let taxonomy = SymptomTaxonomy::builtin();
    for &symptoms in SAMPLE_INPUTS {
        for sex in Sex::ALL {
            for (name, _) in predictor().predict(symptoms, sex).unwrap() {
                assert!(taxonomy.compatible_with(&name, sex), "{name} returned for {sex}");
            }
        }
    }

    let female = predictor()
        .predict(&["Erectile dysfunction", "Blood in semen"], Sex::Female)
        .unwrap();
    assert!(female.iter().all(|(n, _)| n != "Prostate Cancer"));

    let male = predictor().predict(&["Vulvar warts"], Sex::Male).unwrap();
    assert!(male.iter().all(|(n, _)| n != "Vulvar Cancer"));
    assert_eq!(male.len(), 11);
}

#[test]
fn test_sorted_descending() {
    for &symptoms in SAMPLE_INPUTS {
        let ranked = predictor().predict(symptoms, Sex::Female).unwrap();
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}

#[test]
fn test_unknown_symptoms_do_not_affect_output() {
    let base = predictor().predict(&["Cough", "Fever"], Sex::Male).unwrap();
    let noisy = predictor()
        .predict(&["Cough", "Hiccups", "Fever", "cough", "Sex", ""], Sex::Male)
        .unwrap();
    assert_eq!(base, noisy);

    let unknown = predictor().unknown_symptoms(&["Cough", "Hiccups", "Sex"]);
    assert_eq!(unknown, vec!["Hiccups", "Sex"]);
}

#[test]
fn test_distinctive_symptoms_rank_first() {
    let vulvar = predictor()
        .predict(&["Vulvar warts", "Vulvar sores", "Itching on vulva", "Vulvar lumps"], Sex::Female)
        .unwrap();
    assert_eq!(vulvar[0].0, "Vulvar Cancer");

    let prostate = predictor()
        .predict(
            &["Erectile dysfunction", "Blood in semen", "Weak urine stream / slow flow"],
            Sex::Male,
        )
        .unwrap();
    assert_eq!(prostate[0].0, "Prostate Cancer");
}

#[test]
fn test_vocabulary_and_classes() {
    let p = predictor();
    assert_eq!(p.class_names().len(), 14);
    assert_eq!(p.symptom_vocabulary().len(), SymptomTaxonomy::builtin().symptom_vocabulary().len());
    assert_eq!(p.cancer_types_for(Sex::Male).len(), 11);
    assert_eq!(p.cancer_types_for(Sex::Female).len(), 13);
}

#[test]
fn test_load_or_train_caches_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let settings = ModelSettings {
        artifact_dir: dir.path().to_path_buf(),
        num_samples: 300,
        ..Default::default()
    };

    let trained = Predictor::load_or_train(&settings).unwrap();
    assert!(ArtifactStore::new(dir.path()).exists());

    let loaded = Predictor::load_or_train(&settings).unwrap();
    let symptoms = ["Skin lesion", "Itching", "Dark mole"];
    for sex in Sex::ALL {
        assert_eq!(
            trained.predict(&symptoms, sex).unwrap(),
            loaded.predict(&symptoms, sex).unwrap()
        );
    }
}
