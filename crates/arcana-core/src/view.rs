//! Front-end independent view model.
//!
//! [`render`] turns a session into a [`ReadingView`], a plain tree of
//! strings that any front-end can lay out. The `Display` impl is the
//! plain-text layout used on stdout.

use std::fmt;

use serde::Serialize;

use crate::data::ZodiacSign;
use crate::reading::ReadingMode;
use crate::session::ReadingSession;

/// Small caps line above the title.
pub const KICKER: &str = "Arcana Atlas";
/// Page title.
pub const TITLE: &str = "Zodiac + Tarot Readings";
/// Line under the title.
pub const SUBTITLE: &str = "For fun and reflection (not facts).";
/// Label of the draw action.
pub const DRAW_LABEL: &str = "Draw";
/// Footer shown under every reading.
pub const DISCLAIMER: &str = "Disclaimer: This app is for entertainment and self-reflection only—no medical, legal, or financial advice.";

/// One entry of a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOption {
    /// Machine value of the option.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
    /// Whether this option is the current selection.
    pub selected: bool,
}

/// One rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Positional label ("Today", "Past", ...).
    pub label: String,
    /// Card name.
    pub name: &'static str,
    /// Keyword tags.
    pub keywords: &'static str,
    /// Advisory text.
    pub meaning: &'static str,
}

/// The full visual tree of a reading screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingView {
    /// Small caps line above the title.
    pub kicker: &'static str,
    /// Page title.
    pub title: &'static str,
    /// Line under the title.
    pub subtitle: &'static str,
    /// Sign selector options.
    pub signs: Vec<SelectorOption>,
    /// Reading mode selector options.
    pub modes: Vec<SelectorOption>,
    /// Label of the draw action.
    pub draw_label: &'static str,
    /// Heading of the affirmation box, e.g. "Scorpio vibe".
    pub vibe_title: String,
    /// The affirmation line.
    pub vibe_text: &'static str,
    /// One entry per drawn card.
    pub cards: Vec<CardView>,
    /// Footer text.
    pub disclaimer: &'static str,
}

impl ReadingView {
    /// The currently selected sign option.
    pub fn selected_sign(&self) -> Option<&SelectorOption> {
        self.signs.iter().find(|o| o.selected)
    }

    /// The currently selected mode option.
    pub fn selected_mode(&self) -> Option<&SelectorOption> {
        self.modes.iter().find(|o| o.selected)
    }
}

/// Build the view tree for a session.
pub fn render(session: &ReadingSession) -> ReadingView {
    let signs = ZodiacSign::ALL
        .iter()
        .map(|s| SelectorOption {
            value: s.name().to_string(),
            label: s.name().to_string(),
            selected: *s == session.sign(),
        })
        .collect();

    let modes = ReadingMode::ALL
        .iter()
        .map(|m| SelectorOption {
            value: m.to_string(),
            label: m.option_label().to_string(),
            selected: *m == session.mode(),
        })
        .collect();

    let cards = session
        .labeled_cards()
        .into_iter()
        .map(|lc| CardView {
            label: lc.label,
            name: lc.card.name,
            keywords: lc.card.keywords,
            meaning: lc.card.meaning,
        })
        .collect();

    ReadingView {
        kicker: KICKER,
        title: TITLE,
        subtitle: SUBTITLE,
        signs,
        modes,
        draw_label: DRAW_LABEL,
        vibe_title: format!("{} vibe", session.sign()),
        vibe_text: session.affirmation(),
        cards,
        disclaimer: DISCLAIMER,
    }
}

impl fmt::Display for ReadingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kicker.to_uppercase())?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f)?;
        if let Some(sign) = self.selected_sign() {
            writeln!(f, "Zodiac sign: {}", sign.label)?;
        }
        if let Some(mode) = self.selected_mode() {
            writeln!(f, "Reading type: {}", mode.label)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.vibe_title.to_uppercase())?;
        writeln!(f, "{}", self.vibe_text)?;
        for card in &self.cards {
            writeln!(f)?;
            writeln!(f, "[{}] {}", card.label, card.name)?;
            writeln!(f, "  {}", card.keywords)?;
            writeln!(f, "  {}", card.meaning)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.disclaimer)
    }
}
