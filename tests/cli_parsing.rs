use clap::Parser;
use nickbot::cli::commands::config::ConfigCommands;
use nickbot::cli::{Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_parse_choose_with_count_and_seed() {
    let cli = Cli::try_parse_from(["nickbot", "choose", "--count", "500", "--seed", "7"]).unwrap();
    match cli.command {
        Commands::Choose(args) => {
            assert_eq!(args.count, 500);
            assert_eq!(args.seed, Some(7));
        }
        _ => panic!("expected choose"),
    }
}

#[test]
fn test_choose_defaults_to_single_draw() {
    let cli = Cli::try_parse_from(["nickbot", "choose"]).unwrap();
    assert!(matches!(cli.command, Commands::Choose(ref args) if args.count == 1 && args.seed.is_none()));
}

#[test]
fn test_choose_rejects_zero_count() {
    assert!(Cli::try_parse_from(["nickbot", "choose", "-n", "0"]).is_err());
}

#[test]
fn test_parse_run_overrides() {
    let cli = Cli::try_parse_from(["nickbot", "run", "-n", "3", "--interval", "2"]).unwrap();
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.cycles, Some(3));
            assert_eq!(args.interval, Some(2));
            assert_eq!(args.seed, None);
        }
        _ => panic!("expected run"),
    }
}

#[test]
fn test_run_rejects_zero_interval() {
    assert!(Cli::try_parse_from(["nickbot", "run", "--interval", "0"]).is_err());
}

#[test]
fn test_global_flags() {
    let cli = Cli::try_parse_from(["nickbot", "table", "--json", "--config", "bot.yaml"]).unwrap();
    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("bot.yaml")));
    assert!(matches!(cli.command, Commands::Table(_)));
}

#[test]
fn test_parse_config_subcommands() {
    let cli = Cli::try_parse_from(["nickbot", "config", "validate"]).unwrap();
    assert!(matches!(cli.command, Commands::Config(ConfigCommands::Validate)));

    let cli = Cli::try_parse_from(["nickbot", "config", "show"]).unwrap();
    assert!(matches!(cli.command, Commands::Config(ConfigCommands::Show)));
}
