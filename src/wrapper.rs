//! Fix-stripping rule wrapper.
//!
//! [`disable_fix`] turns any rule into one that behaves identically except
//! that it never declares a fix capability and never reports a fix:
//!
//! - the wrapped rule owns its own copy of the metadata, with `fixable` unset
//! - the wrapped behavior runs the inner rule on the caller's context, with
//!   every report routed through a [`FixStrippingReporter`]
//!
//! The inner rule is shared, never modified, so a provider's rule table
//! stays usable unwrapped elsewhere in the process.

use std::sync::Arc;

use crate::lint::{Problem, Reporter, Rule, RuleContext, RuleMeta};

/// Reporter decorator that drops the fix of each problem and forwards the
/// rest unchanged, in report order.
pub struct FixStrippingReporter<'r> {
    inner: &'r mut dyn Reporter,
}

impl<'r> FixStrippingReporter<'r> {
    pub fn new(inner: &'r mut dyn Reporter) -> Self {
        Self { inner }
    }
}

impl Reporter for FixStrippingReporter<'_> {
    fn report(&mut self, mut problem: Problem) {
        problem.fix = None;
        self.inner.report(problem);
    }
}

/// A rule whose fix capability has been removed.
pub struct FixDisabledRule {
    meta: RuleMeta,
    inner: Arc<dyn Rule>,
}

impl FixDisabledRule {
    pub fn new(inner: Arc<dyn Rule>) -> Self {
        let mut meta = inner.meta().clone();
        meta.fixable = None;
        Self { meta, inner }
    }

}

impl Rule for FixDisabledRule {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn create(&self, context: &mut RuleContext<'_>) {
        let mut reporter = FixStrippingReporter::new(&mut *context.reporter);
        let mut inner_context = RuleContext {
            rule_id: context.rule_id,
            filename: context.filename,
            source: context.source,
            settings: context.settings,
            options: context.options,
            reporter: &mut reporter,
        };
        self.inner.create(&mut inner_context);
    }
}

/// Wrap a rule so that it never declares or reports fixes.
pub fn disable_fix(rule: Arc<dyn Rule>) -> Arc<dyn Rule> {
    Arc::new(FixDisabledRule::new(rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{run_rule, Fix, Fixable, Position, SourceLocation};

    struct FixableRule {
        meta: RuleMeta,
    }

    impl FixableRule {
        fn new() -> Self {
            Self {
                meta: RuleMeta {
                    fixable: Some(Fixable::Code),
                    ..Default::default()
                },
            }
        }
    }

    impl Rule for FixableRule {
        fn meta(&self) -> &RuleMeta {
            &self.meta
        }

        fn create(&self, context: &mut RuleContext<'_>) {
            for (line, text) in context.source().lines().enumerate() {
                let loc = SourceLocation::new(
                    Position::new(line + 1, 0),
                    Position::new(line + 1, text.len()),
                );
                context.report(
                    Problem::with_message_id("flagged", loc)
                        .with_message(text)
                        .with_fix(Fix::remove(0..text.len())),
                );
            }
        }
    }

    #[test]
    fn strips_fix_and_keeps_everything_else() {
        let rule: Arc<dyn Rule> = Arc::new(FixableRule::new());
        let wrapped = disable_fix(rule.clone());

        let original = run_rule(rule.as_ref(), "a\nb\nc");
        let stripped = run_rule(wrapped.as_ref(), "a\nb\nc");

        assert_eq!(stripped.len(), 3);
        for (before, after) in original.iter().zip(&stripped) {
            assert!(before.fix.is_some());
            assert!(after.fix.is_none());
            assert_eq!(before.message, after.message);
            assert_eq!(before.message_id, after.message_id);
            assert_eq!(before.loc, after.loc);
        }
    }

    #[test]
    fn problems_equal_originals_without_fix() {
        let definition: crate::lint::RuleDefinition = serde_yaml::from_str(
            r#"
meta:
  fixable: code
  messages:
    word: "Found {{w}}"
pattern: '(?P<w>\w+)'
messageId: word
replacement: 'x$w'
"#,
        )
        .unwrap();
        let rule: Arc<dyn Rule> = Arc::new(crate::lint::PatternRule::compile(definition).unwrap());
        let wrapped = disable_fix(rule.clone());

        let original = run_rule(rule.as_ref(), "foo bar");
        let expected: Vec<Problem> = original
            .iter()
            .cloned()
            .map(|mut p| {
                p.fix = None;
                p
            })
            .collect();

        assert!(original.iter().all(|p| p.fix.is_some()));
        assert_eq!(original[1].data.as_ref().unwrap()["w"], "bar");
        assert_eq!(run_rule(wrapped.as_ref(), "foo bar"), expected);
    }

    #[test]
    fn problems_with_data_pass_through_unchanged() {
        struct WithData(RuleMeta);
        impl Rule for WithData {
            fn meta(&self) -> &RuleMeta {
                &self.0
            }
            fn create(&self, context: &mut RuleContext<'_>) {
                context.report(
                    Problem::with_message_id("missing", SourceLocation::line(3))
                        .with_data("name", "key")
                        .with_data("element", "li")
                        .with_fix(Fix::insert(4, " key={i}")),
                );
            }
        }

        let rule: Arc<dyn Rule> = Arc::new(WithData(RuleMeta::default()));
        let stripped = run_rule(disable_fix(rule.clone()).as_ref(), "");
        let mut expected = run_rule(rule.as_ref(), "");
        expected[0].fix = None;

        assert_eq!(stripped, expected);
        assert_eq!(stripped[0].data.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn removes_fixable_from_meta_only_in_copy() {
        let rule: Arc<dyn Rule> = Arc::new(FixableRule::new());
        let wrapped = disable_fix(rule.clone());

        assert!(wrapped.meta().fixable.is_none());
        assert_eq!(rule.meta().fixable, Some(Fixable::Code));
    }

    #[test]
    fn reporter_strips_before_forwarding() {
        let mut problems: Vec<Problem> = Vec::new();
        {
            let mut reporter = FixStrippingReporter::new(&mut problems);
            reporter.report(
                Problem::new("x", SourceLocation::default()).with_fix(Fix::insert(0, ";")),
            );
        }

        assert_eq!(problems.len(), 1);
        assert!(problems[0].fix.is_none());
    }

    #[test]
    fn context_fields_reach_inner_rule() {
        struct Echo(RuleMeta);
        impl Rule for Echo {
            fn meta(&self) -> &RuleMeta {
                &self.0
            }
            fn create(&self, context: &mut RuleContext<'_>) {
                let message = format!("{}:{}", context.rule_id(), context.filename().display());
                context.report(Problem::new(message, SourceLocation::default()));
            }
        }

        let wrapped = disable_fix(Arc::new(Echo(RuleMeta::default())));
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = RuleContext::new("", &mut problems)
            .with_rule_id("echo")
            .with_filename(std::path::Path::new("a.js"));
        wrapped.create(&mut context);

        assert_eq!(problems[0].message.as_deref(), Some("echo:a.js"));
    }
}
