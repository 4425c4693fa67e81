//! Reading session management.
//!
//! `ReadingSession` holds the selected sign, the reading mode, and the
//! cards from the most recent draw. Changing the sign or mode never
//! touches the drawn cards; only [`ReadingSession::draw`] does. Right
//! after a mode change the drawn cards may therefore not match the new
//! mode's card count until the next draw.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::calendar::Calendar;
use crate::config::ReadingConfig;
use crate::daily::{daily_card, date_key};
use crate::data::{DECK, TarotCard, ZodiacSign};
use crate::error::ArcanaResult;
use crate::reading::{LabeledCard, Reading, ReadingMode};
use crate::sample::pick_unique;

/// Interactive reading state for one session.
pub struct ReadingSession {
    sign: ZodiacSign,
    mode: ReadingMode,
    drawn: Vec<TarotCard>,
    calendar: Box<dyn Calendar>,
    rng: StdRng,
}

impl ReadingSession {
    /// Create a session. The daily card for the calendar's today is
    /// drawn up front; a session configured for a spread draws one
    /// immediately after so the starting state is consistent.
    pub fn new(config: ReadingConfig, calendar: Box<dyn Calendar>) -> ArcanaResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let drawn = vec![*daily_card(calendar.today())];

        let mut session = Self {
            sign: config.sign,
            mode: config.mode,
            drawn,
            calendar,
            rng,
        };
        if session.mode != ReadingMode::Daily {
            session.draw()?;
        }
        Ok(session)
    }

    /// Currently selected sign.
    pub fn sign(&self) -> ZodiacSign {
        self.sign
    }

    /// Current reading mode.
    pub fn mode(&self) -> ReadingMode {
        self.mode
    }

    /// Cards from the most recent draw.
    pub fn drawn(&self) -> &[TarotCard] {
        &self.drawn
    }

    /// Affirmation for the selected sign.
    pub fn affirmation(&self) -> &'static str {
        self.sign.affirmation()
    }

    /// Select a sign. Drawn cards are kept.
    pub fn set_sign(&mut self, sign: ZodiacSign) {
        debug!(sign = %sign, "sign selected");
        self.sign = sign;
    }

    /// Select the following sign.
    pub fn next_sign(&mut self) {
        self.set_sign(self.sign.next());
    }

    /// Select the preceding sign.
    pub fn prev_sign(&mut self) {
        self.set_sign(self.sign.prev());
    }

    /// Select a reading mode. Drawn cards are kept until the next draw.
    pub fn set_mode(&mut self, mode: ReadingMode) {
        debug!(mode = %mode, "mode selected");
        self.mode = mode;
    }

    /// Switch to the other reading mode.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggle());
    }

    /// Replace the drawn cards according to the current mode.
    pub fn draw(&mut self) -> ArcanaResult<&[TarotCard]> {
        self.drawn = match self.mode {
            ReadingMode::Daily => {
                let today = self.calendar.today();
                let card = daily_card(today);
                debug!(key = %date_key(today), card = card.id, "daily card drawn");
                vec![*card]
            }
            ReadingMode::Spread3 => {
                let cards = pick_unique(&DECK, self.mode.card_count(), &mut self.rng)?;
                debug!(
                    cards = ?cards.iter().map(|c| c.id).collect::<Vec<_>>(),
                    "spread drawn"
                );
                cards
            }
        };
        Ok(self.drawn.as_slice())
    }

    /// Whether the drawn cards match the current mode: the right count
    /// and no repeated ids. False only between a mode change and the
    /// next draw.
    pub fn is_consistent(&self) -> bool {
        let ids: HashSet<_> = self.drawn.iter().map(|c| c.id).collect();
        self.drawn.len() == self.mode.card_count() && ids.len() == self.drawn.len()
    }

    /// Labeled cards for the current mode.
    pub fn labeled_cards(&self) -> Vec<LabeledCard> {
        self.drawn
            .iter()
            .enumerate()
            .map(|(i, card)| LabeledCard {
                label: self.mode.label(i),
                card: *card,
            })
            .collect()
    }

    /// Snapshot the session as an exportable reading.
    pub fn snapshot(&self) -> Reading {
        Reading {
            date: self.calendar.today(),
            sign: self.sign,
            affirmation: self.affirmation(),
            mode: self.mode,
            cards: self.labeled_cards(),
        }
    }
}
