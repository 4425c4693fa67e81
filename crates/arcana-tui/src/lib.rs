//! Terminal UI for Arcana Atlas.
//!
//! A single ratatui screen over a [`arcana_core::ReadingSession`]: sign and
//! mode selectors, a draw action, the sign's affirmation, and the drawn
//! cards.

pub mod app;
pub mod screen;
pub mod shared;
pub mod terminal;
