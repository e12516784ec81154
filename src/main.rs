//! nickbot CLI entry point.

use clap::Parser;

use nickbot::cli::{bootstrap, handle_error, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let runtime = match bootstrap(&cli) {
        Ok(runtime) => runtime,
        Err(err) => handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Table(args) => nickbot::cli::commands::table::execute(args, runtime.table, cli.json),
        Commands::Choose(args) => nickbot::cli::commands::choose::execute(
            args,
            runtime.table,
            runtime.config.driver.seed,
            cli.json,
        ),
        Commands::Run(args) => {
            nickbot::cli::commands::run::execute(args, runtime.table, &runtime.config.driver, cli.json)
                .await
        }
        Commands::Config(command) => {
            nickbot::cli::commands::config::execute(command, &runtime.config, cli.json)
        }
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
