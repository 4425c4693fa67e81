//! Reading modes, positional labels, and reading snapshots.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::{TarotCard, ZodiacSign};
use crate::error::ArcanaError;

/// Positional labels of the three-card spread.
const SPREAD_LABELS: [&str; 3] = ["Past", "Present", "Future"];

/// How many cards a draw produces and how they are labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingMode {
    /// One card, fixed per calendar date.
    Daily,
    /// Three distinct random cards: past, present, future.
    Spread3,
}

impl ReadingMode {
    /// All modes in selector order.
    pub const ALL: [ReadingMode; 2] = [ReadingMode::Daily, ReadingMode::Spread3];

    /// Number of cards a draw in this mode produces.
    pub fn card_count(self) -> usize {
        match self {
            Self::Daily => 1,
            Self::Spread3 => SPREAD_LABELS.len(),
        }
    }

    /// Label for the card at `index`.
    ///
    /// Daily cards are always "Today". Spread positions past the named
    /// ones fall back to "Card N" (1-based).
    pub fn label(self, index: usize) -> String {
        match self {
            Self::Daily => "Today".to_string(),
            Self::Spread3 => SPREAD_LABELS
                .get(index)
                .map(|l| l.to_string())
                .unwrap_or_else(|| format!("Card {}", index + 1)),
        }
    }

    /// Text shown for this mode in a selector.
    pub fn option_label(self) -> &'static str {
        match self {
            Self::Daily => "Daily (1 card)",
            Self::Spread3 => "3-card (Past/Present/Future)",
        }
    }

    /// The other mode.
    pub fn toggle(self) -> ReadingMode {
        match self {
            Self::Daily => Self::Spread3,
            Self::Spread3 => Self::Daily,
        }
    }
}

impl std::fmt::Display for ReadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Spread3 => write!(f, "spread3"),
        }
    }
}

impl FromStr for ReadingMode {
    type Err = ArcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "1" => Ok(Self::Daily),
            "spread3" | "spread" | "3" => Ok(Self::Spread3),
            other => Err(ArcanaError::UnknownMode(other.to_string())),
        }
    }
}

/// A drawn card together with its positional label.
#[derive(Debug, Clone, Serialize)]
pub struct LabeledCard {
    /// Positional label, e.g. "Today" or "Past".
    pub label: String,
    /// The card itself.
    pub card: TarotCard,
}

/// A self-contained snapshot of a reading, suitable for export.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    /// Calendar date the reading was taken on.
    pub date: NaiveDate,
    /// Selected sign.
    pub sign: ZodiacSign,
    /// The sign's affirmation line.
    pub affirmation: &'static str,
    /// Reading mode at the time of the snapshot.
    pub mode: ReadingMode,
    /// Drawn cards in order.
    pub cards: Vec<LabeledCard>,
}

impl Reading {
    /// Serialize the reading as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DECK;

    #[test]
    fn card_counts() {
        assert_eq!(ReadingMode::Daily.card_count(), 1);
        assert_eq!(ReadingMode::Spread3.card_count(), 3);
    }

    #[test]
    fn labels() {
        assert_eq!(ReadingMode::Daily.label(0), "Today");
        assert_eq!(ReadingMode::Daily.label(2), "Today");
        assert_eq!(ReadingMode::Spread3.label(0), "Past");
        assert_eq!(ReadingMode::Spread3.label(1), "Present");
        assert_eq!(ReadingMode::Spread3.label(2), "Future");
        assert_eq!(ReadingMode::Spread3.label(3), "Card 4");
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("daily".parse::<ReadingMode>(), Ok(ReadingMode::Daily));
        assert_eq!("Spread3".parse::<ReadingMode>(), Ok(ReadingMode::Spread3));
        assert_eq!("3".parse::<ReadingMode>(), Ok(ReadingMode::Spread3));
        assert!("celtic-cross".parse::<ReadingMode>().is_err());
        for mode in ReadingMode::ALL {
            assert_eq!(mode.to_string().parse::<ReadingMode>(), Ok(mode));
        }
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(ReadingMode::Daily.toggle(), ReadingMode::Spread3);
        assert_eq!(ReadingMode::Spread3.toggle(), ReadingMode::Daily);
    }

    #[test]
    fn reading_json_shape() {
        let reading = Reading {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            sign: ZodiacSign::Scorpio,
            affirmation: ZodiacSign::Scorpio.affirmation(),
            mode: ReadingMode::Daily,
            cards: vec![LabeledCard {
                label: "Today".into(),
                card: DECK[0],
            }],
        };
        let value: serde_json::Value = serde_json::from_str(&reading.to_json().unwrap()).unwrap();
        assert_eq!(value["date"], "2024-03-05");
        assert_eq!(value["sign"], "Scorpio");
        assert_eq!(value["mode"], "daily");
        assert_eq!(value["cards"][0]["label"], "Today");
        assert_eq!(value["cards"][0]["card"]["id"], "fool");
    }
}
