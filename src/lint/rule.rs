//! Rule definitions.
//!
//! This module provides the core traits and types for defining rules:
//!
//! - [`Rule`] - The trait that every rule implements
//! - [`RuleMeta`] - Declared capabilities and documentation of a rule
//! - [`RuleContext`] - What a rule sees while it runs, including the reporter

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::problem::Problem;
use super::reporter::Reporter;

/// Category of a rule, as declared in its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// The rule flags code that is likely wrong.
    Problem,
    /// The rule suggests a better way of writing something.
    Suggestion,
    /// The rule only cares about formatting.
    Layout,
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleType::Problem => write!(f, "problem"),
            RuleType::Suggestion => write!(f, "suggestion"),
            RuleType::Layout => write!(f, "layout"),
        }
    }
}

/// Kind of automatic fix a rule declares it can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fixable {
    Code,
    Whitespace,
}

/// Documentation block of a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDocs {
    /// One-line description of what the rule checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the rule is part of the recommended set.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recommended: bool,
    /// Link to the rule's documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Declared metadata of a rule.
///
/// `fixable` is an `Option` so that a consumer can tell "not declared" apart
/// from any declared kind. It is omitted entirely when serialized as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMeta {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<RuleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<RuleDocs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixable: Option<Fixable>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_suggestions: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
    /// Message templates keyed by message id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub messages: BTreeMap<String, String>,
}

impl RuleMeta {
    /// Whether the rule declares any fix capability.
    pub fn is_fixable(&self) -> bool {
        self.fixable.is_some()
    }

    /// Look up a message template by id.
    pub fn message(&self, message_id: &str) -> Option<&str> {
        self.messages.get(message_id).map(String::as_str)
    }

    /// Short description, if the rule documents one.
    pub fn description(&self) -> Option<&str> {
        self.docs.as_ref().and_then(|d| d.description.as_deref())
    }
}

/// Context handed to a rule while it analyzes one unit of source text.
///
/// Problems are reported through [`RuleContext::report`], which forwards to
/// whatever [`Reporter`] the caller supplied.
pub struct RuleContext<'a> {
    pub(crate) rule_id: &'a str,
    pub(crate) filename: &'a Path,
    pub(crate) source: &'a str,
    pub(crate) settings: &'a serde_json::Value,
    pub(crate) options: &'a [serde_json::Value],
    pub(crate) reporter: &'a mut dyn Reporter,
}

static NO_SETTINGS: serde_json::Value = serde_json::Value::Null;

impl<'a> RuleContext<'a> {
    /// Create a context over `source` that reports into `reporter`.
    pub fn new(source: &'a str, reporter: &'a mut dyn Reporter) -> Self {
        Self {
            rule_id: "",
            filename: Path::new("<input>"),
            source,
            settings: &NO_SETTINGS,
            options: &[],
            reporter,
        }
    }

    /// Set the id the rule is being run under.
    pub fn with_rule_id(mut self, rule_id: &'a str) -> Self {
        self.rule_id = rule_id;
        self
    }

    /// Set the name of the file being analyzed.
    pub fn with_filename(mut self, filename: &'a Path) -> Self {
        self.filename = filename;
        self
    }

    /// Set shared settings.
    pub fn with_settings(mut self, settings: &'a serde_json::Value) -> Self {
        self.settings = settings;
        self
    }

    /// Set rule options.
    pub fn with_options(mut self, options: &'a [serde_json::Value]) -> Self {
        self.options = options;
        self
    }

    pub fn rule_id(&self) -> &'a str {
        self.rule_id
    }

    pub fn filename(&self) -> &'a Path {
        self.filename
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn settings(&self) -> &'a serde_json::Value {
        self.settings
    }

    pub fn options(&self) -> &'a [serde_json::Value] {
        self.options
    }

    /// Report a problem.
    pub fn report(&mut self, problem: Problem) {
        self.reporter.report(problem);
    }
}

/// A checker that inspects source text and reports problems.
///
/// Rules are immutable once built; `create` takes `&self` and every side
/// effect goes through the context's reporter.
pub trait Rule: Send + Sync {
    /// Declared metadata of this rule.
    fn meta(&self) -> &RuleMeta;

    /// Analyze `context.source()` and report problems.
    fn create(&self, context: &mut RuleContext<'_>);
}
