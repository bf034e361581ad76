//! Aggregated results of a batch of estimates.

use crate::complexity::{ComplexityLevel, Estimate, Profile};
use serde::Serialize;
use std::collections::BTreeMap;

/// Where a snippet came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SnippetSource {
    Stdin,
    Inline,
    File(String),
}

impl std::fmt::Display for SnippetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnippetSource::Stdin => f.write_str("<stdin>"),
            SnippetSource::Inline => f.write_str("<inline>"),
            SnippetSource::File(path) => f.write_str(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetEstimate {
    pub source: SnippetSource,
    pub bytes: usize,
    #[serde(flatten)]
    pub estimate: Estimate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedInput {
    pub source: SnippetSource,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateReport {
    pub profile: Profile,
    pub estimates: Vec<SnippetEstimate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedInput>,
    /// Count per label in growth order, serialized under the display label
    pub summary: BTreeMap<ComplexityLevel, usize>,
}

impl EstimateReport {
    pub fn new(
        profile: Profile,
        estimates: Vec<SnippetEstimate>,
        skipped: Vec<SkippedInput>,
    ) -> Self {
        let summary = summarize(&estimates).into_iter().collect();

        Self {
            profile,
            estimates,
            skipped,
            summary,
        }
    }

    /// Estimates that grow faster than `limit`
    pub fn exceeding(&self, limit: ComplexityLevel) -> Vec<&SnippetEstimate> {
        self.estimates
            .iter()
            .filter(|e| e.estimate.level.exceeds(limit))
            .collect()
    }
}

/// Count estimates per label in growth order, omitting labels never seen
pub fn summarize(estimates: &[SnippetEstimate]) -> Vec<(ComplexityLevel, usize)> {
    ComplexityLevel::ALL
        .iter()
        .map(|level| {
            let count = estimates
                .iter()
                .filter(|e| e.estimate.level == *level)
                .count();
            (*level, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}
