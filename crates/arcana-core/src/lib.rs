//! Zodiac affirmations and tarot draws for Arcana Atlas.
//!
//! Provides the static reference data (signs, affirmations, the ten-card
//! deck), a date-seeded daily card selector, a uniform sampler for
//! multi-card spreads, the session controller that ties them together,
//! and a plain view model that front-ends render.

pub mod calendar;
pub mod config;
pub mod daily;
pub mod data;
pub mod error;
pub mod reading;
pub mod sample;
pub mod session;
pub mod view;

pub use calendar::{Calendar, FixedCalendar, LocalCalendar};
pub use config::ReadingConfig;
pub use data::{DECK, TarotCard, ZodiacSign, affirmation_for};
pub use error::{ArcanaError, ArcanaResult};
pub use reading::{Reading, ReadingMode};
pub use session::ReadingSession;
pub use view::{ReadingView, render};
