//! Built-in engine rules embedded at compile time.
//!
//! Each file under `rules/` defines one rule; the file stem is the rule
//! name. Built-in rules are registered under their bare names.

use std::collections::BTreeMap;

use include_dir::{include_dir, Dir, File};

use crate::error::{DisableAutofixError, Result};
use crate::lint::RuleDefinition;

use super::manifest::compile_rules;
use super::source::{Provider, ProviderId, ProviderSource};

/// Embedded rules directory.
static RULES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/rules");

/// Rule name of an embedded file, if it defines a rule.
fn rule_name(file: &File<'_>) -> Option<String> {
    let path = file.path();
    let is_yaml = path
        .extension()
        .map(|e| e == "yml" || e == "yaml")
        .unwrap_or(false);
    let stem = path.file_stem()?.to_str()?;
    (is_yaml && !stem.contains("index")).then(|| stem.to_string())
}

/// Load all built-in rule definitions, by rule name.
pub fn load_definitions() -> Result<BTreeMap<String, RuleDefinition>> {
    let mut definitions = BTreeMap::new();

    for file in RULES_DIR.files() {
        let Some(name) = rule_name(file) else {
            continue;
        };
        let content =
            file.contents_utf8()
                .ok_or_else(|| DisableAutofixError::MalformedRuleTable {
                    provider: ProviderId::Builtin.to_string(),
                    message: format!("{}: invalid UTF-8", file.path().display()),
                })?;
        let definition: RuleDefinition = serde_yaml::from_str(content).map_err(|e| {
            DisableAutofixError::MalformedRuleTable {
                provider: ProviderId::Builtin.to_string(),
                message: format!("{}: {}", file.path().display(), e),
            }
        })?;
        definitions.insert(name, definition);
    }

    Ok(definitions)
}

/// Source of the rules bundled with the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    pub fn new() -> Self {
        Self
    }

    /// Names of all built-in rules, sorted.
    pub fn rule_names() -> Vec<String> {
        let mut names: Vec<String> = RULES_DIR.files().filter_map(rule_name).collect();
        names.sort();
        names
    }
}

impl ProviderSource for BuiltinSource {
    fn providers(&self) -> Result<Vec<Provider>> {
        let id = ProviderId::Builtin;
        let rules = compile_rules(&id, load_definitions()?)?;
        tracing::debug!("Loaded {} built-in rules", rules.len());
        Ok(vec![Provider { id, rules }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::run_rule;

    #[test]
    fn builtin_rules_load() {
        let providers = BuiltinSource::new().providers().unwrap();

        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].id, ProviderId::Builtin);
        assert!(providers[0].rules.len() >= 4);
    }

    #[test]
    fn rule_names_are_file_stems() {
        let names = BuiltinSource::rule_names();

        assert!(names.contains(&"no-debugger".to_string()));
        assert!(names.contains(&"no-var".to_string()));
        assert!(names.iter().all(|n| !n.ends_with(".yml")));
    }

    #[test]
    fn index_files_are_skipped() {
        let names = BuiltinSource::rule_names();
        assert!(names.iter().all(|n| !n.contains("index")));
    }

    #[test]
    fn no_var_is_fixable_and_fixes() {
        let providers = BuiltinSource::new().providers().unwrap();
        let rule = &providers[0].rules["no-var"];

        assert!(rule.meta().is_fixable());
        let problems = run_rule(rule.as_ref(), "var x = 1;");
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].fix.as_ref().unwrap().text, "let ");
    }

    #[test]
    fn no_alert_is_not_fixable() {
        let providers = BuiltinSource::new().providers().unwrap();
        let rule = &providers[0].rules["no-alert"];

        assert!(!rule.meta().is_fixable());
        let problems = run_rule(rule.as_ref(), "alert('hi');\nwindow.confirm('ok?');");
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().all(|p| p.fix.is_none()));
    }

    #[test]
    fn no_trailing_spaces_handles_crlf() {
        let providers = BuiltinSource::new().providers().unwrap();
        let rule = &providers[0].rules["no-trailing-spaces"];
        let source = "let a = 1;  \r\nlet b;  \n";

        let problems = run_rule(rule.as_ref(), source);

        assert_eq!(problems.len(), 2);
        let first = problems[0].fix.as_ref().unwrap();
        assert_eq!(&source[first.range()], "  ");
        assert_eq!(problems[1].loc.start.line, 2);
    }
}
