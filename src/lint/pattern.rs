//! Declarative pattern rules.
//!
//! Providers describe their rules as data: metadata plus a regular
//! expression. A [`PatternRule`] reports one problem per non-empty match,
//! in match order, and attaches a fix when the definition carries a
//! `replacement`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Deserialize;

use super::fix::Fix;
use super::location::LineIndex;
use super::problem::Problem;
use super::rule::{Rule, RuleContext, RuleMeta};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}\s]+?)\s*\}\}").unwrap());

/// Rule definition as written in a manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleDefinition {
    #[serde(default)]
    pub meta: RuleMeta,
    /// Regular expression matched against the whole source text.
    pub pattern: String,
    /// Literal message, used when no `message_id` is set.
    #[serde(default)]
    pub message: Option<String>,
    /// Id of a template in `meta.messages`.
    #[serde(default)]
    pub message_id: Option<String>,
    /// Replacement for the matched text, with `$name` capture expansion.
    #[serde(default)]
    pub replacement: Option<String>,
}

/// A rule backed by a compiled regular expression.
#[derive(Debug, Clone)]
pub struct PatternRule {
    meta: RuleMeta,
    pattern: Regex,
    message: Option<String>,
    message_id: Option<String>,
    replacement: Option<String>,
}

impl PatternRule {
    /// Compile a definition.
    pub fn compile(definition: RuleDefinition) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(&definition.pattern)?,
            meta: definition.meta,
            message: definition.message,
            message_id: definition.message_id,
            replacement: definition.replacement,
        })
    }

    fn data(&self, captures: &Captures<'_>) -> Option<BTreeMap<String, String>> {
        let data: BTreeMap<String, String> = self
            .pattern
            .capture_names()
            .flatten()
            .filter_map(|name| {
                captures
                    .name(name)
                    .map(|m| (name.to_string(), m.as_str().to_string()))
            })
            .collect();
        (!data.is_empty()).then_some(data)
    }

    fn message_for(&self, data: Option<&BTreeMap<String, String>>) -> Option<String> {
        let template = match &self.message_id {
            Some(id) => self.meta.message(id).or(self.message.as_deref()),
            None => self.message.as_deref(),
        }?;
        Some(match data {
            Some(data) => interpolate(template, data),
            None => template.to_string(),
        })
    }
}

impl Rule for PatternRule {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn create(&self, context: &mut RuleContext<'_>) {
        let source = context.source();
        let index = LineIndex::new(source);

        for captures in self.pattern.captures_iter(source) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            if whole.is_empty() {
                continue;
            }

            let data = self.data(&captures);
            let mut problem = Problem {
                message: self.message_for(data.as_ref()),
                message_id: self.message_id.clone(),
                data,
                loc: index.location(whole.start(), whole.end()),
                fix: None,
            };

            if let Some(replacement) = &self.replacement {
                let mut text = String::new();
                captures.expand(replacement, &mut text);
                problem.fix = Some(Fix::replace(whole.range(), text));
            }

            context.report(problem);
        }
    }
}

/// Substitute `{{name}}` placeholders. Unknown names are left as written.
pub fn interpolate(template: &str, data: &BTreeMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match data.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
