//! Class name ↔ index mapping.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Sorted, de-duplicated class names; a class's index is its position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn fit<S: AsRef<str>>(labels: &[S]) -> Self {
        let classes = labels
            .iter()
            .map(|l| l.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn encode(&self, label: &str) -> Result<u32> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(label))
            .map(|i| i as u32)
            .map_err(|_| ModelError::UnknownLabel(label.to_string()))
    }

    pub fn decode(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_sorts_and_dedups() {
        let le = LabelEncoder::fit(&["Melanoma", "Bladder Cancer", "Melanoma", "Lung Cancer"]);
        assert_eq!(le.classes(), &["Bladder Cancer", "Lung Cancer", "Melanoma"]);
    }

    #[test]
    fn test_encode_decode() {
        let le = LabelEncoder::fit(&["b", "a", "c"]);
        assert_eq!(le.encode("a").unwrap(), 0);
        assert_eq!(le.encode("c").unwrap(), 2);
        assert_eq!(le.decode(1), Some("b"));
        assert_eq!(le.decode(3), None);
        assert!(le.encode("z").is_err());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let le = LabelEncoder::fit(&["y", "x"]);
        assert_eq!(serde_json::to_string(&le).unwrap(), r#"["x","y"]"#);
    }
}
