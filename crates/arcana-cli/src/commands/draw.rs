use std::path::Path;

use arcana_core::{ReadingConfig, ReadingMode, ReadingSession, ZodiacSign, render};
use tracing::info;

/// Options for a one-shot draw.
pub struct DrawArgs<'a> {
    pub sign: &'a str,
    pub mode: &'a str,
    pub seed: Option<u64>,
    pub date: Option<&'a str>,
    pub json: bool,
    pub output: Option<&'a Path>,
}

pub fn run(args: DrawArgs<'_>) -> Result<(), String> {
    let sign: ZodiacSign = args.sign.parse().map_err(|e| format!("{e}"))?;
    let mode: ReadingMode = args.mode.parse().map_err(|e| format!("{e}"))?;

    let mut config = ReadingConfig::default().with_sign(sign).with_mode(mode);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let calendar = super::calendar_for(args.date).map_err(|e| e.to_string())?;
    let mut session = ReadingSession::new(config, calendar).map_err(|e| e.to_string())?;
    session.draw().map_err(|e| e.to_string())?;

    let reading = session.snapshot();
    let json = reading
        .to_json()
        .map_err(|e| format!("failed to serialize reading: {e}"))?;

    if let Some(path) = args.output {
        std::fs::write(path, &json)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        info!(path = %path.display(), "reading written");
        println!("  Wrote reading to {}", path.display());
    } else if args.json {
        println!("{json}");
    } else {
        println!("{}", render(&session));
    }

    Ok(())
}
