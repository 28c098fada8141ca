//! Rule contract and problem model.
//!
//! This module defines what a rule is from the point of view of the
//! registry and of the host that runs it.
//!
//! # Overview
//!
//! - **Rules** - Checkers over source text ([`Rule`] trait)
//! - **Problems** - Findings with location and optional fix ([`Problem`])
//! - **Reporters** - Sinks that receive problems as they are reported ([`Reporter`])
//! - **Pattern rules** - Rules declared as data in provider manifests ([`PatternRule`])
//!
//! # Example
//!
//! ```
//! use disable_autofix::lint::{run_rule, PatternRule, Rule, RuleDefinition};
//!
//! let definition: RuleDefinition =
//!     serde_yaml::from_str("pattern: 'debugger'\nmessage: Unexpected debugger").unwrap();
//! let rule = PatternRule::compile(definition).unwrap();
//!
//! let problems = run_rule(&rule, "debugger;");
//! assert_eq!(problems.len(), 1);
//! assert_eq!(problems[0].loc.start.line, 1);
//! ```

pub mod fix;
pub mod location;
pub mod output;
pub mod pattern;
pub mod problem;
pub mod reporter;
pub mod rule;

pub use fix::Fix;
pub use location::{LineIndex, Position, SourceLocation};
pub use output::{HumanFormatter, JsonFormatter, OutputFormat, ProblemFormatter};
pub use pattern::{interpolate, PatternRule, RuleDefinition};
pub use problem::{LintMessage, Problem};
pub use reporter::{report_fn, ReportFn, Reporter};
pub use rule::{Fixable, Rule, RuleContext, RuleDocs, RuleMeta, RuleType};

/// Run a rule over a source text and collect what it reports.
pub fn run_rule(rule: &dyn Rule, source: &str) -> Vec<Problem> {
    let mut problems: Vec<Problem> = Vec::new();
    let mut context = RuleContext::new(source, &mut problems);
    rule.create(&mut context);
    problems
}
