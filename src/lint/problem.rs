//! Reported problems.
//!
//! This module provides [`Problem`], one finding reported by a rule, and
//! [`LintMessage`], a problem tagged with the registry name of the rule
//! that produced it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::fix::Fix;
use super::location::SourceLocation;

/// One finding reported by a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Id of the message template in the rule's metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Values for the message template placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
    /// Where the problem was found.
    pub loc: SourceLocation,
    /// Optional automatic remediation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Problem {
    /// Create a problem with a literal message.
    pub fn new(message: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            message: Some(message.into()),
            message_id: None,
            data: None,
            loc,
            fix: None,
        }
    }

    /// Create a problem referring to a message template by id.
    pub fn with_message_id(message_id: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            message: None,
            message_id: Some(message_id.into()),
            data: None,
            loc,
            fix: None,
        }
    }

    /// Set the rendered message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Add a placeholder value.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Attach a fix.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// The message to show a user: the rendered message, else the id.
    pub fn display_message(&self) -> &str {
        self.message
            .as_deref()
            .or(self.message_id.as_deref())
            .unwrap_or("")
    }
}

/// A problem together with the name of the rule that reported it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    pub rule_id: String,
    #[serde(flatten)]
    pub problem: Problem,
}

impl LintMessage {
    pub fn new(rule_id: impl Into<String>, problem: Problem) -> Self {
        Self {
            rule_id: rule_id.into(),
            problem,
        }
    }
}
