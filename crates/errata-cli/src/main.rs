use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "errata",
    about = "Classify wrong answers to multiplication problems"
)]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./errata.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print classifier events on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single answer
    Classify(commands::classify::ClassifyArgs),
    /// Classify every record of a JSON or JSON Lines file
    Batch(commands::batch::BatchArgs),
    /// Show how a number is spoken
    Verbalize(commands::verbalize::VerbalizeArgs),
    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        errata::console::init();
    }

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Classify(args) => commands::classify::run(args, config),
        Commands::Batch(args) => commands::batch::run(args, config),
        Commands::Verbalize(args) => commands::verbalize::run(args, config),
        Commands::Config => commands::show_config(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_classify_accepts_no_answer_sentinel() {
        let cli = Cli::try_parse_from(["errata", "classify", "8", "300", "2400", "-1"]).unwrap();
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.given, -1);
    }

    #[test]
    fn test_unknown_taxonomy_rejected() {
        let result = Cli::try_parse_from([
            "errata", "classify", "9", "30", "270", "27", "--taxonomy", "seven",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["errata", "config", "--config", "x.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
    }
}
