//! Static reference data: zodiac signs, their affirmations, and the deck.
//!
//! Everything here is fixed at compile time and never mutated.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArcanaError;

/// Affirmation shown for a sign name that is not recognized.
pub const FALLBACK_AFFIRMATION: &str = "Trust your inner compass.";

/// One of the twelve zodiac signs, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    /// The ram.
    Aries,
    /// The bull.
    Taurus,
    /// The twins.
    Gemini,
    /// The crab.
    Cancer,
    /// The lion.
    Leo,
    /// The maiden.
    Virgo,
    /// The scales.
    Libra,
    /// The scorpion.
    Scorpio,
    /// The archer.
    Sagittarius,
    /// The sea-goat.
    Capricorn,
    /// The water-bearer.
    Aquarius,
    /// The fish.
    Pisces,
}

impl ZodiacSign {
    /// All signs in selector order.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Display name of the sign.
    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// The affirmation line for this sign.
    pub fn affirmation(self) -> &'static str {
        match self {
            Self::Aries => "Move first, refine later.",
            Self::Taurus => "Stability is power—slow progress still counts.",
            Self::Gemini => "Ask the second question. Curiosity unlocks it.",
            Self::Cancer => "Protect your peace; respond, don’t react.",
            Self::Leo => "Be seen for what you truly want to create.",
            Self::Virgo => "One small fix changes everything.",
            Self::Libra => "Choose balance over people-pleasing.",
            Self::Scorpio => "Go deep—truth beats comfort.",
            Self::Sagittarius => "Say yes to the new route.",
            Self::Capricorn => "Build the system, then trust it.",
            Self::Aquarius => "Be different on purpose—innovate.",
            Self::Pisces => "Let intuition lead, then add boundaries.",
        }
    }

    /// Index of this sign in [`ZodiacSign::ALL`].
    pub fn index(self) -> usize {
        ZodiacSign::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or(0)
    }

    /// The following sign (wrapping from Pisces to Aries).
    pub fn next(self) -> ZodiacSign {
        ZodiacSign::ALL[(self.index() + 1) % ZodiacSign::ALL.len()]
    }

    /// The preceding sign (wrapping from Aries to Pisces).
    pub fn prev(self) -> ZodiacSign {
        let idx = if self.index() == 0 {
            ZodiacSign::ALL.len() - 1
        } else {
            self.index() - 1
        };
        ZodiacSign::ALL[idx]
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = ArcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ZodiacSign::ALL
            .into_iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ArcanaError::UnknownSign(wanted.to_string()))
    }
}

/// Look up the affirmation for a sign by name, falling back to
/// [`FALLBACK_AFFIRMATION`] for names that are not a sign.
pub fn affirmation_for(name: &str) -> &'static str {
    name.parse::<ZodiacSign>()
        .map(ZodiacSign::affirmation)
        .unwrap_or(FALLBACK_AFFIRMATION)
}

/// A single tarot card record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TarotCard {
    /// Stable identifier, unique within the deck.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short descriptive tags separated by bullets.
    pub keywords: &'static str,
    /// Advisory text.
    pub meaning: &'static str,
}

/// The fixed, ordered deck.
pub const DECK: [TarotCard; 10] = [
    TarotCard {
        id: "fool",
        name: "The Fool",
        keywords: "beginnings • leap of faith • curiosity",
        meaning: "A new chapter. Try the brave option, but stay aware of risks.",
    },
    TarotCard {
        id: "magician",
        name: "The Magician",
        keywords: "focus • skill • will",
        meaning: "You have the tools. Commit to one plan and act.",
    },
    TarotCard {
        id: "high_priestess",
        name: "The High Priestess",
        keywords: "intuition • mystery • inner knowing",
        meaning: "Pause and listen. The answer is already inside you.",
    },
    TarotCard {
        id: "empress",
        name: "The Empress",
        keywords: "care • growth • abundance",
        meaning: "Nurture what you want to grow—time, rest, and consistency.",
    },
    TarotCard {
        id: "emperor",
        name: "The Emperor",
        keywords: "structure • boundaries • leadership",
        meaning: "Create a rule, a schedule, or a boundary that supports you.",
    },
    TarotCard {
        id: "lovers",
        name: "The Lovers",
        keywords: "choice • values • connection",
        meaning: "Choose what matches your values, not just what feels good today.",
    },
    TarotCard {
        id: "chariot",
        name: "The Chariot",
        keywords: "drive • momentum • victory",
        meaning: "Pick a direction and keep going—discipline beats mood.",
    },
    TarotCard {
        id: "strength",
        name: "Strength",
        keywords: "courage • patience • calm power",
        meaning: "Gentle persistence. Don’t force it—tame it.",
    },
    TarotCard {
        id: "hermit",
        name: "The Hermit",
        keywords: "reflection • solitude • guidance",
        meaning: "Step back. Clarity comes from quiet and honesty.",
    },
    TarotCard {
        id: "wheel",
        name: "Wheel of Fortune",
        keywords: "cycles • luck • change",
        meaning: "Things are shifting. Stay flexible and take the opportunity.",
    },
];

/// Find a deck card by its id.
pub fn card_by_id(id: &str) -> Option<&'static TarotCard> {
    DECK.iter().find(|c| c.id == id)
}
