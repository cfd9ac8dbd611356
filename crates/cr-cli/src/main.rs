//! CLI frontend for Criterion Roulette.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::SessionArgs;

#[derive(Parser)]
#[command(
    name = "cr",
    about = "Criterion Roulette: random roles and dungeons for a party of four",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Play {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Generate a batch of runs and print the session summary
    Roll {
        /// Number of runs to generate
        #[arg(short = 'n', long, default_value = "1")]
        runs: u32,

        /// Turn rarity mode on before rolling
        #[arg(short, long)]
        rarity: bool,

        #[command(flatten)]
        session: SessionArgs,
    },

    /// List the runs recorded in a log file
    History {
        /// Log file to read
        #[arg(short, long, default_value = cr_engine::journal::file::LOG_FILE)]
        file: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { session } => commands::play::run(&session),
        Commands::Roll {
            runs,
            rarity,
            session,
        } => commands::roll::run(&session, runs, rarity),
        Commands::History { file } => commands::history::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
