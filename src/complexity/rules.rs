//! Rule table for the complexity cascade.
//!
//! Each [`Rule`] pairs a [`Condition`] with the label it produces. A
//! [`RuleSet`] keeps its rules sorted by descending priority and the first
//! rule whose condition holds decides the estimate. Rules with equal
//! priority keep insertion order.

use super::level::ComplexityLevel;
use super::patterns::{self, Trigger};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

pub const EXPONENTIAL_PRIORITY: u8 = 60;
pub const QUADRATIC_PRIORITY: u8 = 50;
pub const LINEARITHMIC_PRIORITY: u8 = 40;
pub const LOGARITHMIC_PRIORITY: u8 = 30;
pub const LINEAR_PRIORITY: u8 = 20;
pub const CONSTANT_PRIORITY: u8 = 10;

static LOOP_TOKENS: Lazy<Trigger> =
    Lazy::new(|| Trigger::builtin("loop-token", &patterns::LOOP_TOKEN));

/// Lexical facts about a snippet, computed once per estimate.
#[derive(Debug, Clone, Copy)]
pub struct Signals<'a> {
    pub text: &'a str,
    pub loop_tokens: usize,
}

impl<'a> Signals<'a> {
    pub fn from_text(text: &'a str) -> Self {
        Self {
            text,
            loop_tokens: LOOP_TOKENS.count(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCount {
    AtLeast(usize),
    Exactly(usize),
}

impl LoopCount {
    fn holds(&self, count: usize) -> bool {
        match *self {
            LoopCount::AtLeast(n) => count >= n,
            LoopCount::Exactly(n) => count == n,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Condition {
    Matches(Trigger),
    Loops(LoopCount),
    AllOf(Vec<Condition>),
    AnyOf(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn builtin(name: &'static str, regex: &'static Lazy<regex::Regex>) -> Self {
        Condition::Matches(Trigger::builtin(name, regex))
    }

    pub fn negate(self) -> Self {
        Condition::Not(Box::new(self))
    }

    pub fn holds(&self, signals: &Signals<'_>) -> bool {
        match self {
            Condition::Matches(trigger) => trigger.is_match(signals.text),
            Condition::Loops(count) => count.holds(signals.loop_tokens),
            Condition::AllOf(conditions) => conditions.iter().all(|c| c.holds(signals)),
            Condition::AnyOf(conditions) => conditions.iter().any(|c| c.holds(signals)),
            Condition::Not(inner) => !inner.holds(signals),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, op: &str, items: &[Condition]) -> fmt::Result {
            write!(f, "{op}(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{item}")?;
            }
            f.write_str(")")
        }

        match self {
            Condition::Matches(trigger) => write!(f, "{}", trigger.name()),
            Condition::Loops(LoopCount::AtLeast(n)) => write!(f, "loops>={n}"),
            Condition::Loops(LoopCount::Exactly(n)) => write!(f, "loops=={n}"),
            Condition::AllOf(items) => join(f, "all", items),
            Condition::AnyOf(items) => join(f, "any", items),
            Condition::Not(inner) => write!(f, "not({inner})"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub name: Cow<'static, str>,
    pub priority: u8,
    pub level: ComplexityLevel,
    pub condition: Condition,
}

impl Rule {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        priority: u8,
        level: ComplexityLevel,
        condition: Condition,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            level,
            condition,
        }
    }
}

/// Named rule-table variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Keyword-only exponential check with memo guard, named sorts only
    #[default]
    Canonical,
    /// Earlier web-client triggers: power patterns, generic sort calls, no `<<`
    Broad,
}

impl Profile {
    pub fn options(self) -> RuleOptions {
        match self {
            Profile::Canonical => RuleOptions {
                power_triggers: false,
                memo_guard: true,
                generic_sort: false,
                left_shift: true,
            },
            Profile::Broad => RuleOptions {
                power_triggers: true,
                memo_guard: false,
                generic_sort: true,
                left_shift: false,
            },
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Canonical => f.write_str("canonical"),
            Profile::Broad => f.write_str("broad"),
        }
    }
}

/// Feature toggles the built-in rules are assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOptions {
    /// `2**n` / `pow(2` also count as exponential
    pub power_triggers: bool,
    /// Memoization markers suppress the exponential rule
    pub memo_guard: bool,
    /// `.sort(` calls and recursive divide-and-conquer wording count as n log n
    pub generic_sort: bool,
    /// `<<` counts as a halving operator
    pub left_shift: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Profile::Canonical.options()
    }
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::canonical()
    }
}

impl RuleSet {
    pub fn canonical() -> Self {
        Self::from_options(Profile::Canonical.options())
    }

    pub fn for_profile(profile: Profile) -> Self {
        Self::from_options(profile.options())
    }

    pub fn from_options(options: RuleOptions) -> Self {
        Self::from_rules(builtin_rules(options))
    }

    pub fn from_rules(mut rules: Vec<Rule>) -> Self {
        // sort_by is stable, so ties keep insertion order
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { rules }
    }

    pub fn with_rule(self, rule: Rule) -> Self {
        let mut rules = self.rules;
        rules.push(rule);
        Self::from_rules(rules)
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn first_match(&self, signals: &Signals<'_>) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.condition.holds(signals))
    }
}

fn builtin_rules(options: RuleOptions) -> Vec<Rule> {
    let recursion_keyword = Condition::AnyOf(vec![
        Condition::builtin("recursion-word", &patterns::RECURSION_WORD),
        Condition::builtin("fibonacci", &patterns::FIBONACCI),
    ]);

    let mut exponential_triggers = vec![Condition::builtin("fibonacci", &patterns::FIBONACCI)];
    if options.power_triggers {
        exponential_triggers.push(Condition::builtin("power-of-two", &patterns::POWER_OF_TWO));
    }
    let mut exponential = vec![Condition::AnyOf(exponential_triggers)];
    if options.memo_guard {
        exponential.push(Condition::builtin("memo-marker", &patterns::MEMO_MARKER).negate());
    }

    let mut linearithmic = vec![Condition::builtin("named-sort", &patterns::NAMED_SORT)];
    if options.generic_sort {
        linearithmic.push(Condition::builtin("sort-call", &patterns::SORT_CALL));
        linearithmic.push(Condition::AllOf(vec![
            Condition::builtin("recursion-word", &patterns::RECURSION_WORD),
            Condition::builtin("divide-word", &patterns::DIVIDE_WORD),
        ]));
    }

    let halving = if options.left_shift {
        Condition::builtin("halving-operator", &patterns::HALVING_OPERATOR)
    } else {
        Condition::builtin("halving-operator", &patterns::HALVING_NO_LEFT_SHIFT)
    };

    let sequence_transform = || Condition::builtin("sequence-transform", &patterns::SEQUENCE_TRANSFORM);

    vec![
        Rule::new(
            "exponential",
            EXPONENTIAL_PRIORITY,
            ComplexityLevel::Exponential,
            Condition::AllOf(exponential),
        ),
        Rule::new(
            "quadratic",
            QUADRATIC_PRIORITY,
            ComplexityLevel::Quadratic,
            Condition::Loops(LoopCount::AtLeast(2)),
        ),
        Rule::new(
            "linearithmic",
            LINEARITHMIC_PRIORITY,
            ComplexityLevel::Linearithmic,
            Condition::AnyOf(linearithmic),
        ),
        Rule::new(
            "logarithmic",
            LOGARITHMIC_PRIORITY,
            ComplexityLevel::Logarithmic,
            Condition::AnyOf(vec![
                Condition::builtin("binary-search", &patterns::BINARY_SEARCH),
                Condition::AllOf(vec![
                    Condition::builtin("loop-keyword", &patterns::LOOP_KEYWORD),
                    halving,
                ]),
            ]),
        ),
        Rule::new(
            "linear",
            LINEAR_PRIORITY,
            ComplexityLevel::Linear,
            Condition::AnyOf(vec![
                Condition::Loops(LoopCount::Exactly(1)),
                sequence_transform(),
            ]),
        ),
        Rule::new(
            "constant",
            CONSTANT_PRIORITY,
            ComplexityLevel::Constant,
            Condition::AllOf(vec![
                Condition::Loops(LoopCount::Exactly(0)),
                recursion_keyword.negate(),
                sequence_transform().negate(),
            ]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &RuleSet) -> Vec<&str> {
        set.rules().iter().map(|r| r.name.as_ref()).collect()
    }

    #[test]
    fn test_builtin_rules_are_in_cascade_order() {
        assert_eq!(
            names(&RuleSet::canonical()),
            vec!["exponential", "quadratic", "linearithmic", "logarithmic", "linear", "constant"]
        );
    }

    #[test]
    fn test_with_rule_inserts_by_priority() {
        let cubic = Rule::new(
            "cubic-hint",
            55,
            ComplexityLevel::Quadratic,
            Condition::Loops(LoopCount::AtLeast(3)),
        );
        let set = RuleSet::canonical().with_rule(cubic);
        assert_eq!(names(&set)[..3], ["exponential", "cubic-hint", "quadratic"]);
    }

    #[test]
    fn test_equal_priority_keeps_insertion_order() {
        let first = Rule::new("first", 40, ComplexityLevel::Linear, Condition::Loops(LoopCount::AtLeast(0)));
        let set = RuleSet::canonical().with_rule(first);
        let names = names(&set);
        let linearithmic = names.iter().position(|n| *n == "linearithmic").unwrap();
        let first = names.iter().position(|n| *n == "first").unwrap();
        assert!(linearithmic < first);
    }

    #[test]
    fn test_condition_display_names_triggers() {
        let set = RuleSet::canonical();
        let rendered = set.rules()[0].condition.to_string();
        assert_eq!(rendered, "all(any(fibonacci), not(memo-marker))");
    }

    #[test]
    fn test_broad_profile_drops_memo_guard() {
        let set = RuleSet::for_profile(Profile::Broad);
        let rendered = set.rules()[0].condition.to_string();
        assert_eq!(rendered, "all(any(fibonacci, power-of-two))");
    }

    #[test]
    fn test_signals_count_loop_tokens() {
        let signals = Signals::from_text("for(;;){} while (x) {}");
        assert_eq!(signals.loop_tokens, 2);
    }
}
