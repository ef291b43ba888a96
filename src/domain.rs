//! Core domain types shared across modules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single failing test as reported by the upstream collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEntry {
    #[serde(default)]
    pub failure_message: Option<String>,
    #[serde(default)]
    pub testsuite: String,
    #[serde(default)]
    pub name: String,
    /// `None` omits the Flags block; `Some(vec![])` renders an empty list.
    #[serde(default)]
    pub flags: Option<Vec<String>>,
    /// Key into [`ResultPayload::flake_annotations`].
    #[serde(default)]
    pub test_id: String,
}

/// Reason a test was classified as flaky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlakeSymptom {
    #[serde(alias = "failed_in_default_branch")]
    FailedInDefaultBranch,
    #[serde(alias = "consecutive_diff_outcomes")]
    ConsecutiveDiffOutcomes,
    #[serde(alias = "unrelated_matching_failures")]
    UnrelatedMatchingFailures,
}

impl FlakeSymptom {
    pub const ALL: [FlakeSymptom; 3] = [
        FlakeSymptom::FailedInDefaultBranch,
        FlakeSymptom::ConsecutiveDiffOutcomes,
        FlakeSymptom::UnrelatedMatchingFailures,
    ];

    /// Parse a tag in either `SCREAMING_SNAKE_CASE` or `snake_case`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|symptom| symptom.as_str().eq_ignore_ascii_case(tag))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlakeSymptom::FailedInDefaultBranch => "FAILED_IN_DEFAULT_BRANCH",
            FlakeSymptom::ConsecutiveDiffOutcomes => "CONSECUTIVE_DIFF_OUTCOMES",
            FlakeSymptom::UnrelatedMatchingFailures => "UNRELATED_MATCHING_FAILURES",
        }
    }
}

/// Flakiness metadata for one test, keyed by `test_id` in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlakeAnnotation {
    #[serde(default, alias = "flake_type", alias = "symptoms")]
    pub flake_symptoms: Vec<FlakeSymptom>,
    #[serde(default)]
    pub is_new_flake: bool,
}

/// Test-run results handed to the renderer.
///
/// `failures` may be a truncated subset, so the summary line is always
/// built from the counts rather than from `failures.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPayload {
    #[serde(default, alias = "failed")]
    pub failed_count: u64,
    #[serde(default, alias = "passed")]
    pub passed_count: u64,
    #[serde(default, alias = "skipped")]
    pub skipped_count: u64,
    #[serde(default)]
    pub failures: Vec<FailureEntry>,
    #[serde(default, alias = "flaky_tests", deserialize_with = "deserialize_annotations")]
    pub flake_annotations: BTreeMap<String, FlakeAnnotation>,
}

impl ResultPayload {
    pub fn total_count(&self) -> Option<u64> {
        self.failed_count.checked_add(self.passed_count)?.checked_add(self.skipped_count)
    }

    pub fn flake_for(&self, failure: &FailureEntry) -> Option<&FlakeAnnotation> {
        self.flake_annotations.get(&failure.test_id)
    }
}

/// Accepts `null` for the annotation map, which upstream emits when no
/// flake detection ran.
fn deserialize_annotations<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, FlakeAnnotation>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<BTreeMap<String, FlakeAnnotation>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Effective rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shorten long stack-trace paths before escaping failure messages.
    pub shorten_paths: bool,
    /// Replacement descriptions for flake symptoms, keyed by symptom tag.
    pub symptom_labels: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { shorten_paths: true, symptom_labels: BTreeMap::new() }
    }
}
