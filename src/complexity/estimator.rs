use super::level::ComplexityLevel;
use super::rules::{RuleSet, Signals};
use once_cell::sync::Lazy;
use serde::Serialize;

static CANONICAL: Lazy<ComplexityEstimator> = Lazy::new(ComplexityEstimator::canonical);

/// Estimate with the canonical rule table.
pub fn estimate_complexity(code: &str) -> ComplexityLevel {
    CANONICAL.estimate(code)
}

/// Outcome of a single estimate along with what produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub level: ComplexityLevel,
    /// Name of the rule that fired, `None` for the `Unknown` fallback
    pub rule: Option<String>,
    pub loop_tokens: usize,
}

/// Guesses a Big-O label from the surface text of a snippet.
///
/// Rules are tried in priority order and the first match decides. When no
/// rule fires the result is [`ComplexityLevel::Unknown`], so every input
/// maps to exactly one label.
#[derive(Debug, Clone, Default)]
pub struct ComplexityEstimator {
    rules: RuleSet,
}

impl ComplexityEstimator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn canonical() -> Self {
        Self::new(RuleSet::canonical())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn estimate(&self, code: &str) -> ComplexityLevel {
        let signals = Signals::from_text(code);
        self.rules
            .first_match(&signals)
            .map_or(ComplexityLevel::Unknown, |rule| rule.level)
    }

    pub fn estimate_detailed(&self, code: &str) -> Estimate {
        let signals = Signals::from_text(code);
        let fired = self.rules.first_match(&signals);

        Estimate {
            level: fired.map_or(ComplexityLevel::Unknown, |rule| rule.level),
            rule: fired.map(|rule| rule.name.to_string()),
            loop_tokens: signals.loop_tokens,
        }
    }
}
