//! Interactive terminal session behind the `oncosym-predict` binary.
//! Reads and writes through generic handles so it can be driven without a
//! terminal.

use std::io::{BufRead, Write};

use oncosym_common::Sex;
use oncosym_model::Predictor;

pub const SEX_PROMPT: &str = "Enter your sex (Male/Female): ";
pub const RESULTS_HEADER: &str = "Predicted cancer types with probabilities:";

fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> anyhow::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Split a comma-separated symptom line, dropping blank entries.
pub fn parse_symptoms(line: &str) -> Vec<String> {
    line.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// One prompt/predict round. Returns early without output if the input ends.
pub fn run_session(
    predictor: &Predictor,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "Welcome to the Cancer Prediction Tool!")?;
    writeln!(
        out,
        "Please enter your symptoms separated by commas (e.g., Cough, Chest pain, Weight loss):"
    )?;
    let Some(line) = prompt(input, out, "Symptoms: ")? else {
        return Ok(());
    };
    let symptoms = parse_symptoms(&line);

    let sex = loop {
        let Some(raw) = prompt(input, out, SEX_PROMPT)? else {
            return Ok(());
        };
        match raw.parse::<Sex>() {
            Ok(sex) => break sex,
            Err(e) => writeln!(out, "{e}")?,
        }
    };

    let unknown = predictor.unknown_symptoms(&symptoms);
    if !unknown.is_empty() {
        writeln!(out, "\nIgnoring unrecognised symptoms: {}", unknown.join(", "))?;
    }

    let results = predictor.predict(&symptoms, sex)?;
    writeln!(out, "\n{RESULTS_HEADER}")?;
    for (cancer, prob) in &results {
        writeln!(out, "{cancer}: {prob:.2}")?;
    }
    out.flush()?;

    Ok(())
}
