pub mod daily;
pub mod deck;
pub mod draw;
pub mod signs;
pub mod tui;
pub mod vibe;

use arcana_core::{ArcanaResult, Calendar, FixedCalendar, LocalCalendar};

/// Calendar for an optional `--date` override.
fn calendar_for(date: Option<&str>) -> ArcanaResult<Box<dyn Calendar>> {
    Ok(match date {
        Some(d) => Box::new(FixedCalendar::parse(d)?),
        None => Box::new(LocalCalendar),
    })
}
