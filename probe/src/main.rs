//! CareerGPT probe entry point

use careergpt_probe::cli::{list, run, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Run(run::RunArgs::default())) {
        Commands::List(args) => {
            if let Err(e) = list::execute(&args) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Run(args) => match run::execute(&args).await {
            Ok(code) => std::process::exit(code),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(run::EXIT_FAILED);
            }
        },
    }
}
