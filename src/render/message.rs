//! Failure report rendering.
//!
//! Produces the Markdown comment body posted for a test run. The output is
//! consumed verbatim, so every literal below is part of the format: lines are
//! joined with `\n`, the title keeps its trailing space, and there is no
//! trailing newline.

use std::collections::HashSet;

use crate::domain::{Config, FailureEntry, FlakeAnnotation, ResultPayload};
use crate::render::symptoms::SymptomCatalog;
use crate::text::{escape_failure_message, prepare_failure_message};

const FAILED_TITLE: &str = "### :x: Failed Test Results: ";
const PASSED_TITLE: &str = "### :white_check_mark: Test Results: ";
const DETAILS_OPEN: &str = "<details><summary>View the full list of failed tests</summary>";
const TABLE_HEADER: &str = "| **Test Description** | **Failure message** |";
const TABLE_ALIGNMENT: &str = "| :-- | :-- |";

const KNOWN_FLAKE_TITLE: &str = "Known Flaky Test";
const NEW_FLAKE_TITLE: &str = "Newly Detected Flake";
const MISSING_FAILURE_MESSAGE: &str = "No failure message available";

/// Which document shape a payload renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Nothing failed and there are no failure rows to show.
    AllPassed,
    HasFailures,
}

impl ReportOutcome {
    /// Failure rows force the failures document even when `failed_count` is
    /// zero, so every entry in `failures` is always rendered.
    pub fn of(payload: &ResultPayload) -> Self {
        if payload.failed_count == 0 && payload.failures.is_empty() {
            ReportOutcome::AllPassed
        } else {
            ReportOutcome::HasFailures
        }
    }
}

/// Renders result payloads with a given symptom catalog and path policy.
#[derive(Debug, Clone)]
pub struct MessageRenderer {
    symptoms: SymptomCatalog,
    shorten_paths: bool,
}

impl Default for MessageRenderer {
    fn default() -> Self {
        Self { symptoms: SymptomCatalog::default(), shorten_paths: true }
    }
}

impl MessageRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            symptoms: SymptomCatalog::with_overrides(&config.symptom_labels),
            shorten_paths: config.shorten_paths,
        }
    }

    pub fn with_symptoms(mut self, symptoms: SymptomCatalog) -> Self {
        self.symptoms = symptoms;
        self
    }

    pub fn with_shorten_paths(mut self, enabled: bool) -> Self {
        self.shorten_paths = enabled;
        self
    }

    pub fn render(&self, payload: &ResultPayload) -> String {
        let outcome = ReportOutcome::of(payload);
        tracing::debug!(?outcome, rows = payload.failures.len(), "Rendering failure report");

        match outcome {
            ReportOutcome::AllPassed => render_all_passed(payload),
            ReportOutcome::HasFailures => self.render_failures(payload),
        }
    }

    fn render_failures(&self, payload: &ResultPayload) -> String {
        let failed = payload.failed_count;
        let passed = payload.passed_count;
        let skipped = payload.skipped_count;
        let completed = saturating_total(payload);

        let mut message = vec![
            FAILED_TITLE.to_string(),
            format!(
                "Completed {completed} tests with **`{failed} failed`**, {passed} passed and {skipped} skipped."
            ),
            DETAILS_OPEN.to_string(),
            String::new(),
            TABLE_HEADER.to_string(),
            TABLE_ALIGNMENT.to_string(),
        ];

        for failure in &payload.failures {
            let flake = payload.flake_for(failure);
            let description = test_description(failure, flake);
            let failure_info = self.failure_info(failure, flake);
            message.push(format!("| {description} | {failure_info} |"));
        }

        log_orphan_annotations(payload);
        message.join("\n")
    }

    fn failure_info(&self, failure: &FailureEntry, flake: Option<&FlakeAnnotation>) -> String {
        let mut info = String::new();
        if let Some(flake) = flake {
            for symptom in &flake.flake_symptoms {
                info.push_str(&format!(
                    ":snowflake: :card_index_dividers: **{}**<br>",
                    self.symptoms.describe(*symptom)
                ));
            }
        }

        let body = match &failure.failure_message {
            None => MISSING_FAILURE_MESSAGE.to_string(),
            Some(message) if self.shorten_paths => prepare_failure_message(message),
            Some(message) => escape_failure_message(message),
        };
        info.push_str(&format!("<pre>{body}</pre>"));
        info
    }
}

/// Render `payload` with the default symptom descriptions and path shortening.
pub fn build_message(payload: &ResultPayload) -> String {
    MessageRenderer::default().render(payload)
}

fn render_all_passed(payload: &ResultPayload) -> String {
    let completed = saturating_total(payload);
    [
        PASSED_TITLE.to_string(),
        format!(
            "Completed {completed} tests with {} passed and {} skipped.",
            payload.passed_count, payload.skipped_count
        ),
    ]
    .join("\n")
}

fn test_description(failure: &FailureEntry, flake: Option<&FlakeAnnotation>) -> String {
    let flags_section = match &failure.flags {
        Some(flags) => {
            let flag_list: Vec<String> =
                flags.iter().map(|flag| format!("- {}", single_line(flag))).collect();
            format!("**Flags**:<br>{}<br>", flag_list.join("<br>"))
        }
        None => String::new(),
    };
    let section = format!(
        "<pre>Testsuite:<br>{}<br><br>Test name:<br>{}<br>{}</pre>",
        single_line(&failure.testsuite),
        single_line(&failure.name),
        flags_section
    );

    match flake {
        Some(flake) => {
            let title = if flake.is_new_flake { NEW_FLAKE_TITLE } else { KNOWN_FLAKE_TITLE };
            format!(":snowflake::card_index_dividers: **{title}**<br>{section}")
        }
        None => section,
    }
}

/// Line breaks in a table cell would end the Markdown row early.
fn single_line(text: &str) -> String {
    text.replace("\r\n", "<br>").replace('\n', "<br>")
}

// Loaded payloads are validated against overflow; this keeps direct callers total.
fn saturating_total(payload: &ResultPayload) -> u64 {
    payload
        .failed_count
        .saturating_add(payload.passed_count)
        .saturating_add(payload.skipped_count)
}

fn log_orphan_annotations(payload: &ResultPayload) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    let row_ids: HashSet<&str> = payload.failures.iter().map(|f| f.test_id.as_str()).collect();
    for test_id in payload.flake_annotations.keys() {
        if !row_ids.contains(test_id.as_str()) {
            tracing::debug!("Flake annotation '{}' matches no failure row", test_id);
        }
    }
}
