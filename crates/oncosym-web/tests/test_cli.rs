//! Terminal session behaviour, driven through in-memory input and output.

use std::io::Cursor;
use std::sync::OnceLock;

use pretty_assertions::assert_eq;

use oncosym_model::{ModelSettings, Predictor, TrainingConfig};
use oncosym_web::cli::{parse_symptoms, run_session, RESULTS_HEADER, SEX_PROMPT};

fn predictor() -> &'static Predictor {
    static PREDICTOR: OnceLock<Predictor> = OnceLock::new();
    PREDICTOR.get_or_init(|| {
        let settings = ModelSettings {
            num_samples: 400,
            training: TrainingConfig { epochs: 150, ..Default::default() },
            ..Default::default()
        };
        Predictor::train(&settings).expect("training failed")
    })
}

fn session(input: &str) -> String {
    let mut out = Vec::new();
    run_session(predictor(), &mut Cursor::new(input.as_bytes()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn result_lines(output: &str) -> Vec<&str> {
    let start = output.find(RESULTS_HEADER).expect("no results printed") + RESULTS_HEADER.len();
    output[start..].lines().filter(|l| !l.is_empty()).collect()
}

#[test]
fn test_parse_symptoms_trims_and_drops_blanks() {
    assert_eq!(
        parse_symptoms(" Cough,Chest pain , ,Weight loss,"),
        vec!["Cough", "Chest pain", "Weight loss"]
    );
    assert!(parse_symptoms("   ").is_empty());
}

#[test]
fn test_invalid_sex_reprompts() {
    let output = session("Cough, Hiccups\nrobot\nmale\n");

    assert_eq!(output.matches(SEX_PROMPT).count(), 2);
    assert!(output.contains("Invalid sex value: \"robot\""), "{output}");
    assert!(output.contains("Ignoring unrecognised symptoms: Hiccups"), "{output}");
}

#[test]
fn test_results_are_formatted_with_two_decimals() {
    let output = session("Cough, Hiccups\nrobot\nmale\n");
    let lines = result_lines(&output);
    assert_eq!(lines.len(), 11);

    let mut previous = f64::MAX;
    for line in lines {
        let (name, prob) = line.rsplit_once(": ").unwrap_or_else(|| panic!("bad line {line:?}"));
        assert!(!name.is_empty(), "{line:?}");
        assert_eq!(prob.len(), 4, "{line:?}");
        assert_eq!(prob.find('.'), Some(1), "{line:?}");
        let value: f64 = prob.parse().unwrap();
        assert!((0.0..=1.0).contains(&value), "{line:?}");
        assert!(value <= previous, "not ranked: {line:?}");
        previous = value;
    }
}

#[test]
fn test_female_session_excludes_male_only_types() {
    let output = session("Erectile dysfunction, Blood in semen\nFemale\n");
    let lines = result_lines(&output);
    assert_eq!(lines.len(), 13);
    assert!(lines.iter().all(|l| !l.starts_with("Prostate Cancer:")));
    assert!(!output.contains("Ignoring unrecognised symptoms"));
}

#[test]
fn test_input_ending_early_prints_no_results() {
    let output = session("Cough\nrobot\n");
    assert!(output.contains("Invalid sex value"));
    assert!(!output.contains(RESULTS_HEADER));

    assert!(!session("").contains(RESULTS_HEADER));
}
