//! Library integration tests.

use disable_autofix::DisableAutofixError;

#[test]
fn error_types_are_public() {
    let err = DisableAutofixError::UnknownRule {
        name: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> disable_autofix::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use disable_autofix::cli::{Cli, Commands};

    let cli = Cli::parse_from(["disable-autofix", "list", "--json"]);

    if let Commands::List(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected List command");
    }
}

#[test]
fn wrapper_is_public() {
    use disable_autofix::lint::{run_rule, PatternRule, Rule, RuleDefinition};
    use std::sync::Arc;

    let definition: RuleDefinition = serde_yaml::from_str(
        "meta:\n  fixable: code\npattern: 'foo'\nmessage: No foo.\nreplacement: bar\n",
    )
    .unwrap();
    let rule: Arc<dyn Rule> = Arc::new(PatternRule::compile(definition).unwrap());

    let wrapped = disable_autofix::disable_fix(rule);

    assert!(!wrapped.meta().is_fixable());
    assert!(run_rule(wrapped.as_ref(), "foo")[0].fix.is_none());
}
