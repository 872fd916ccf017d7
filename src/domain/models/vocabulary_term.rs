use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One entry of the LCSH controlled vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyTerm {
    id: String,
    label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    alt_labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    broader: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    narrower: Vec<String>,
}

impl VocabularyTerm {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            alt_labels: Vec::new(),
            broader: Vec::new(),
            narrower: Vec::new(),
        }
    }

    pub fn with_alt_labels(mut self, alt_labels: Vec<String>) -> Self {
        self.alt_labels = alt_labels;
        self
    }

    pub fn with_broader(mut self, broader: Vec<String>) -> Self {
        self.broader = broader;
        self
    }

    pub fn with_narrower(mut self, narrower: Vec<String>) -> Self {
        self.narrower = narrower;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn alt_labels(&self) -> &[String] {
        &self.alt_labels
    }

    pub fn broader(&self) -> &[String] {
        &self.broader
    }

    pub fn narrower(&self) -> &[String] {
        &self.narrower
    }

    pub fn is_topmost(&self) -> bool {
        self.broader.is_empty()
    }
}

/// Checks the shape of an LCSH term id such as `sh85029552` or `sh2002-004591`.
///
/// Only syntax is checked here; an id passing this test may still be absent
/// from the vocabulary.
pub fn validate_term_id(term_id: &str) -> Result<(), DomainError> {
    let mut chars = term_id.chars();
    match chars.next() {
        None => return Err(DomainError::invalid_input("term id must not be empty")),
        Some(c) if !c.is_ascii_lowercase() => {
            return Err(DomainError::invalid_input(format!(
                "term id must start with a lowercase letter: {:?}",
                term_id
            )))
        }
        Some(_) => {}
    }

    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '-')) {
        return Err(DomainError::invalid_input(format!(
            "term id contains invalid character {:?}: {:?}",
            bad, term_id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_term_ids() {
        assert!(validate_term_id("sh85029552").is_ok());
        assert!(validate_term_id("sh2002-004591").is_ok());
        assert!(validate_term_id("gf2014026339").is_ok());
    }

    #[test]
    fn test_invalid_term_ids() {
        assert!(validate_term_id("").unwrap_err().is_invalid_input());
        assert!(validate_term_id("85029552").is_err());
        assert!(validate_term_id("sh 123").is_err());
        assert!(validate_term_id("Sh123").is_err());
        assert!(validate_term_id("sh123'; drop").is_err());
    }

    #[test]
    fn test_topmost_term_has_no_broader() {
        let top = VocabularyTerm::new("sh1", "Science");
        let child = VocabularyTerm::new("sh2", "Computer science").with_broader(vec!["sh1".into()]);

        assert!(top.is_topmost());
        assert!(!child.is_topmost());
    }
}
