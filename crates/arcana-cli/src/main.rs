//! CLI frontend for Arcana Atlas zodiac + tarot readings.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana Atlas — zodiac vibes and tarot draws, for fun and reflection",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a reading and print it
    Draw {
        /// Zodiac sign
        #[arg(short, long, default_value = "Scorpio")]
        sign: String,

        /// Reading type: daily or spread3
        #[arg(short, long, default_value = "daily")]
        mode: String,

        /// RNG seed for reproducible spreads
        #[arg(long)]
        seed: Option<u64>,

        /// Read for this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,

        /// Write the reading as JSON to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the daily card and how it was selected
    Daily {
        /// Date to select for (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List the zodiac signs and their affirmations
    Signs,

    /// List the cards in the deck
    Deck,

    /// Print the affirmation for a sign
    Vibe {
        /// Sign name (unknown names get a general affirmation)
        sign: String,
    },

    /// Launch the interactive terminal UI
    Tui {
        /// Sign selected at start
        #[arg(short, long)]
        sign: Option<String>,

        /// Reading type at start
        #[arg(short, long)]
        mode: Option<String>,

        /// RNG seed for spreads
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Draw {
            sign,
            mode,
            seed,
            date,
            json,
            output,
        } => commands::draw::run(commands::draw::DrawArgs {
            sign: &sign,
            mode: &mode,
            seed,
            date: date.as_deref(),
            json,
            output: output.as_deref(),
        }),
        Commands::Daily { date } => commands::daily::run(date.as_deref()),
        Commands::Signs => commands::signs::run(),
        Commands::Deck => commands::deck::run(),
        Commands::Vibe { sign } => commands::vibe::run(&sign),
        Commands::Tui { sign, mode, seed } => {
            commands::tui::run(sign.as_deref(), mode.as_deref(), seed)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
