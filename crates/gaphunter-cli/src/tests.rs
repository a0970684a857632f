use super::*;

#[test]
fn parses_analyze_command() {
    let cli = Cli::try_parse_from([
        "gaphunter-cli",
        "analyze",
        "--name",
        "Acme",
        "--description",
        "CRM tool",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            ref name,
            ref description,
            blueprint: false,
            json: false,
        }) if name == "Acme" && description == "CRM tool"
    ));
}

#[test]
fn parses_analyze_with_blueprint_and_json() {
    let cli = Cli::try_parse_from([
        "gaphunter-cli",
        "analyze",
        "--name",
        "Acme",
        "--description",
        "CRM tool",
        "--blueprint",
        "--json",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            blueprint: true,
            json: true,
            ..
        })
    ));
}

#[test]
fn analyze_requires_name() {
    let result = Cli::try_parse_from(["gaphunter-cli", "analyze", "--description", "CRM tool"]);
    assert!(result.is_err());
}

#[test]
fn parses_demo_json() {
    let cli = Cli::try_parse_from(["gaphunter-cli", "demo", "--json"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Demo { json: true })));
}

#[test]
fn parses_settings() {
    let cli = Cli::try_parse_from(["gaphunter-cli", "settings"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Settings)));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["gaphunter-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn help_is_answered_by_the_parser() {
    let err = Cli::try_parse_from(["gaphunter-cli", "--help"]).expect_err("help exits early");
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
