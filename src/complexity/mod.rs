//! Heuristic time-complexity estimation.
//!
//! The estimator performs no parsing. It counts loop-opening tokens and
//! tests a handful of lexical patterns, then walks an ordered rule table
//! where the first matching rule decides the label:
//!
//! | priority | rule         | label        |
//! |----------|--------------|--------------|
//! | 60       | exponential  | `O(2ⁿ)`      |
//! | 50       | quadratic    | `O(n²)`      |
//! | 40       | linearithmic | `O(n log n)` |
//! | 30       | logarithmic  | `O(log n)`   |
//! | 20       | linear       | `O(n)`       |
//! | 10       | constant     | `O(1)`       |
//!
//! Anything left over is `Unknown`.

pub mod estimator;
pub mod level;
pub mod patterns;
pub mod rules;

pub use estimator::{estimate_complexity, ComplexityEstimator, Estimate};
pub use level::{ComplexityLevel, ParseLevelError, Tone};
pub use patterns::Trigger;
pub use rules::{Condition, LoopCount, Profile, Rule, RuleOptions, RuleSet, Signals};
