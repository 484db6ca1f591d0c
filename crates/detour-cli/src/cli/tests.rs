use super::*;
use clap::Parser;

#[test]
fn parses_check() {
    let cli = Cli::try_parse_from(["detour", "check", "rules.toml"]).unwrap();
    match cli.command {
        CliCommand::Check { path } => assert_eq!(path, "rules.toml"),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn parses_apply_with_rules_override() {
    let cli = Cli::try_parse_from([
        "detour",
        "apply",
        "https://example.com",
        "--rules",
        "local.toml",
    ])
    .unwrap();
    match cli.command {
        CliCommand::Apply { url, rules } => {
            assert_eq!(url, "https://example.com");
            assert_eq!(rules.as_deref(), Some("local.toml"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn parses_trace_without_rules_override() {
    let cli = Cli::try_parse_from(["detour", "trace", "calls.jsonl"]).unwrap();
    match cli.command {
        CliCommand::Trace { path, rules } => {
            assert_eq!(path, "calls.jsonl");
            assert!(rules.is_none());
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["detour", "bogus"]).is_err());
}
