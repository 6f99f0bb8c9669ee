use serde::{Deserialize, Serialize};

/// Symptoms as submitted at the boundary: either free text or a list of
/// tags. Normalized into `PatientCriteria` before reaching the engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymptomsField {
    Text(String),
    List(Vec<String>),
}

impl SymptomsField {
    /// Ordered, de-duplicated, lower-cased symptom tags. Free text is
    /// split on commas; blank entries are dropped.
    pub fn into_tags(self) -> Vec<String> {
        let raw = match self {
            SymptomsField::Text(text) => text
                .split(',')
                .map(str::to_string)
                .collect::<Vec<_>>(),
            SymptomsField::List(list) => list,
        };

        let mut tags = Vec::new();
        for entry in raw {
            let tag = entry.trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }
}

impl Default for SymptomsField {
    fn default() -> Self {
        SymptomsField::List(Vec::new())
    }
}

/// Canonical per-session patient input consumed by the matcher and the
/// estimator. Created once at the intake boundary, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientCriteria {
    pub symptoms: Vec<String>,
    pub insurance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<u8>,
}

impl PatientCriteria {
    pub fn new(symptoms: SymptomsField, insurance: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into_tags(),
            insurance: insurance.into(),
            location: None,
            urgency: None,
            severity: None,
        }
    }

    /// Joined lower-case symptom text the keyword scans run over.
    pub fn symptom_text(&self) -> String {
        self.symptoms.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_splits_on_commas() {
        let tags = SymptomsField::Text("Chest Pain, fever".to_string()).into_tags();
        assert_eq!(tags, vec!["chest pain", "fever"]);
    }

    #[test]
    fn list_input_is_deduplicated_in_order() {
        let tags = SymptomsField::List(vec![
            "Rash".to_string(),
            "fever".to_string(),
            "rash".to_string(),
        ])
        .into_tags();
        assert_eq!(tags, vec!["rash", "fever"]);
    }

    #[test]
    fn blank_entries_are_dropped() {
        let tags = SymptomsField::Text("  , cough ,, ".to_string()).into_tags();
        assert_eq!(tags, vec!["cough"]);
    }
}
