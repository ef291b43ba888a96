//! Flake symptom descriptions
//!
//! Descriptions live in a table rather than in renderer branches, so a new
//! symptom only needs a new row here.

use crate::domain::FlakeSymptom;
use std::collections::BTreeMap;

pub const DEFAULT_SYMPTOM_DESCRIPTIONS: &[(FlakeSymptom, &str)] = &[
    (FlakeSymptom::FailedInDefaultBranch, "Failure on default branch"),
    (FlakeSymptom::ConsecutiveDiffOutcomes, "Differing outcomes on the same commit"),
    (FlakeSymptom::UnrelatedMatchingFailures, "Matching failures on unrelated branches"),
];

/// Symptom descriptions used when rendering flaky rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomCatalog {
    descriptions: BTreeMap<FlakeSymptom, String>,
}

impl Default for SymptomCatalog {
    fn default() -> Self {
        let descriptions = DEFAULT_SYMPTOM_DESCRIPTIONS
            .iter()
            .map(|(symptom, description)| (*symptom, description.to_string()))
            .collect();
        Self { descriptions }
    }
}

impl SymptomCatalog {
    /// Default descriptions with `labels` (keyed by symptom tag) layered on
    /// top. Unknown tags are skipped with a warning.
    pub fn with_overrides(labels: &BTreeMap<String, String>) -> Self {
        let mut catalog = Self::default();
        for (tag, description) in labels {
            match FlakeSymptom::from_tag(tag) {
                Some(symptom) => {
                    catalog.descriptions.insert(symptom, description.clone());
                }
                None => tracing::warn!("Ignoring label for unknown flake symptom '{}'", tag),
            }
        }
        catalog
    }

    pub fn describe(&self, symptom: FlakeSymptom) -> &str {
        self.descriptions.get(&symptom).map(String::as_str).unwrap_or(symptom.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symptom_has_a_default_description() {
        let catalog = SymptomCatalog::default();
        for symptom in FlakeSymptom::ALL {
            assert_ne!(catalog.describe(symptom), symptom.as_str(), "{symptom:?} undescribed");
        }
        assert_eq!(
            catalog.describe(FlakeSymptom::FailedInDefaultBranch),
            "Failure on default branch"
        );
        assert_eq!(
            catalog.describe(FlakeSymptom::ConsecutiveDiffOutcomes),
            "Differing outcomes on the same commit"
        );
    }

    #[test]
    fn overrides_replace_only_named_symptoms() {
        let mut labels = BTreeMap::new();
        labels.insert("unrelated_matching_failures".to_string(), "Seen elsewhere".to_string());
        labels.insert("NOT_A_SYMPTOM".to_string(), "ignored".to_string());

        let catalog = SymptomCatalog::with_overrides(&labels);
        assert_eq!(catalog.describe(FlakeSymptom::UnrelatedMatchingFailures), "Seen elsewhere");
        assert_eq!(
            catalog.describe(FlakeSymptom::FailedInDefaultBranch),
            "Failure on default branch"
        );
    }
}
