//! Library integration tests.

use vergap::VergapError;

#[test]
fn error_types_are_public() {
    let err = VergapError::MissingInput {
        name: "plan_level".into(),
    };
    assert!(err.to_string().contains("plan_level"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> vergap::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn root_reexports_evaluate() {
    let advisory = vergap::evaluate("disabled", "1.0.0", "1.2.0").unwrap();
    assert_eq!(advisory.severity, vergap::Severity::MinorLag);
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use vergap::cli::{Cli, Commands};

    let cli = Cli::parse_from(["vergap", "config", "--json"]);

    if let Some(Commands::Config(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Config command");
    }
}
