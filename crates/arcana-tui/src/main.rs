//! Standalone TUI binary for Arcana Atlas.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arcana_core::{
    ArcanaResult, Calendar, FixedCalendar, LocalCalendar, ReadingConfig, ReadingMode,
    ReadingSession, ZodiacSign,
};

#[derive(Parser)]
#[command(
    name = "arcana-tui",
    about = "Interactive zodiac + tarot readings in the terminal",
    version
)]
struct Args {
    /// Sign selected at start
    #[arg(long, default_value = "Scorpio")]
    sign: String,

    /// Reading mode at start (daily, spread3)
    #[arg(long, default_value = "daily")]
    mode: String,

    /// RNG seed for spreads (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let session = match build_session(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let app = arcana_tui::app::TuiApp::new(session);

    if let Err(e) = arcana_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Build the reading session from command-line arguments.
fn build_session(args: &Args) -> ArcanaResult<ReadingSession> {
    let mut config = ReadingConfig::default()
        .with_sign(args.sign.parse::<ZodiacSign>()?)
        .with_mode(args.mode.parse::<ReadingMode>()?);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let calendar: Box<dyn Calendar> = match &args.date {
        Some(date) => Box::new(FixedCalendar::parse(date)?),
        None => Box::new(LocalCalendar),
    };

    ReadingSession::new(config, calendar)
}
