use super::*;

#[test]
fn parses_plan_with_repeated_interests() {
    let cli = Cli::try_parse_from([
        "wayfare",
        "plan",
        "--destination",
        "Tokyo",
        "--start",
        "2025-03-01",
        "--end",
        "2025-03-05",
        "--budget",
        "1000",
        "--interest",
        "food",
        "--interest",
        "culture",
    ])
    .expect("expected valid cli args");

    let Commands::Plan(args) = cli.command else {
        panic!("expected plan command");
    };
    assert_eq!(args.destination, "Tokyo");
    assert_eq!(args.interests, vec!["food", "culture"]);
    assert_eq!(args.travelers, 1);
    assert!(!args.remote);
    assert!(!args.no_save);
    assert_eq!(args.seed, None);
}

#[test]
fn plan_rejects_malformed_date() {
    let result = Cli::try_parse_from([
        "wayfare",
        "plan",
        "--destination",
        "Tokyo",
        "--start",
        "03/01/2025",
        "--end",
        "2025-03-05",
        "--budget",
        "1000",
    ]);
    assert!(result.is_err());
}

#[test]
fn plan_requires_destination() {
    let result = Cli::try_parse_from([
        "wayfare",
        "plan",
        "--start",
        "2025-03-01",
        "--end",
        "2025-03-05",
        "--budget",
        "1000",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_history_list_json() {
    let cli = Cli::try_parse_from(["wayfare", "history", "list", "--json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::History {
            command: HistoryCommands::List { json: true }
        }
    ));
}

#[test]
fn parses_history_remove() {
    let cli = Cli::try_parse_from(["wayfare", "history", "remove", "1700000000000"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::History {
            command: HistoryCommands::Remove { ref id }
        } if id == "1700000000000"
    ));
}

#[test]
fn parses_remote_list_defaults() {
    let cli =
        Cli::try_parse_from(["wayfare", "remote", "list"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Remote {
            command: RemoteCommands::List {
                skip: 0,
                limit: 100,
                json: false
            }
        }
    ));
}

#[test]
fn parses_remote_health() {
    let cli =
        Cli::try_parse_from(["wayfare", "remote", "health"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Remote {
            command: RemoteCommands::Health
        }
    ));
}

#[test]
fn no_command_is_an_error() {
    assert!(Cli::try_parse_from(["wayfare"]).is_err());
}

#[test]
fn help_is_handled_by_the_parser() {
    let err = Cli::try_parse_from(["wayfare", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
