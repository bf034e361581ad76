//! Pattern Library
//!
//! Pre-compiled lexical patterns the rule table is assembled from.
//! Keyword patterns carry `(?i)`; symbol patterns are case-sensitive.
//! All patterns are `regex` automata, so matching stays linear in the
//! input regardless of what the snippet contains.

use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// Compiled-size ceiling for user-supplied patterns.
const USER_PATTERN_SIZE_LIMIT: usize = 1 << 20;

// Loop-opening tokens, counted rather than tested
pub static LOOP_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:for|while)\s*\(").unwrap());

// Exponential
pub static FIBONACCI: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)fibonacci|fib\s*\(").unwrap());
pub static MEMO_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)memo|cache|\bdp\b").unwrap());
pub static POWER_OF_TWO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)2\s*\*\*\s*n|pow\s*\(\s*2").unwrap());

// Linearithmic
pub static NAMED_SORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)quicksort|mergesort|heapsort").unwrap());
pub static SORT_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.sort\s*\(").unwrap());
pub static RECURSION_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)recursion|recursive").unwrap());
pub static DIVIDE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)divide").unwrap());

// Logarithmic
pub static BINARY_SEARCH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)binary\s*search").unwrap());
pub static LOOP_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)while|for").unwrap());
pub static HALVING_OPERATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\s*2|>>|<<").unwrap());
pub static HALVING_NO_LEFT_SHIFT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\s*2|>>").unwrap());

// Linear
pub static SEQUENCE_TRANSFORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(?:map|filter|reduce|foreach)\(").unwrap());

/// A named pattern that a rule condition can test against source text.
#[derive(Debug, Clone)]
pub struct Trigger {
    name: Cow<'static, str>,
    regex: Regex,
}

impl Trigger {
    /// Wrap one of the library's pre-compiled patterns.
    pub fn builtin(name: &'static str, regex: &'static Lazy<Regex>) -> Self {
        Self {
            name: Cow::Borrowed(name),
            regex: Regex::clone(regex),
        }
    }

    /// Compile a user-supplied pattern under the size limit.
    pub fn compile(name: impl Into<String>, pattern: &str, case_insensitive: bool) -> Result<Self> {
        let name = name.into();
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .size_limit(USER_PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|source| Error::InvalidPattern {
                rule: name.clone(),
                source,
            })?;

        Ok(Self {
            name: Cow::Owned(name),
            regex,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_token_counts_for_and_while() {
        let trigger = Trigger::builtin("loop", &LOOP_TOKEN);
        assert_eq!(trigger.count("for (i=0;;) {} while(x) {} FOR(;;)"), 3);
        assert_eq!(trigger.count("for i in range(10):"), 0);
    }

    #[test]
    fn test_memo_marker_requires_whole_word_dp() {
        assert!(MEMO_MARKER.is_match("let dp = vec![0; n];"));
        assert!(MEMO_MARKER.is_match("const memoized = new Map()"));
        assert!(MEMO_MARKER.is_match("@lru_cache"));
        assert!(!MEMO_MARKER.is_match("fetch(endpoint)"));
    }

    #[test]
    fn test_halving_operators_are_case_sensitive_symbols() {
        assert!(HALVING_OPERATOR.is_match("mid = (lo + hi) / 2"));
        assert!(HALVING_OPERATOR.is_match("x >>> 1"));
        assert!(HALVING_OPERATOR.is_match("1 << k"));
        assert!(!HALVING_NO_LEFT_SHIFT.is_match("1 << k"));
    }

    #[test]
    fn test_sequence_transform_matches_foreach_any_case() {
        assert!(SEQUENCE_TRANSFORM.is_match("items.forEach(x => log(x))"));
        assert!(SEQUENCE_TRANSFORM.is_match("xs.MAP(f)"));
        assert!(!SEQUENCE_TRANSFORM.is_match("map(f, xs)"));
    }

    #[test]
    fn test_compile_reports_rule_name_on_bad_pattern() {
        let err = Trigger::compile("broken", "(unclosed", true).unwrap_err();
        match err {
            Error::InvalidPattern { rule, .. } => assert_eq!(rule, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_compile_honors_case_flag() {
        let insensitive = Trigger::compile("cube", "triple loop", true).unwrap();
        let sensitive = Trigger::compile("cube", "triple loop", false).unwrap();
        assert!(insensitive.is_match("Triple Loop"));
        assert!(!sensitive.is_match("Triple Loop"));
    }
}
