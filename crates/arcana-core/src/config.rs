//! Configuration for a reading session.

use crate::data::ZodiacSign;
use crate::reading::ReadingMode;

/// Configuration for a reading session.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// RNG seed for reproducible spreads. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Sign selected when the session starts.
    pub sign: ZodiacSign,
    /// Reading mode selected when the session starts.
    pub mode: ReadingMode,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            sign: ZodiacSign::Scorpio,
            mode: ReadingMode::Daily,
        }
    }
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial sign.
    pub fn with_sign(mut self, sign: ZodiacSign) -> Self {
        self.sign = sign;
        self
    }

    /// Set the initial reading mode.
    pub fn with_mode(mut self, mode: ReadingMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ReadingConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.sign, ZodiacSign::Scorpio);
        assert_eq!(cfg.mode, ReadingMode::Daily);
    }

    #[test]
    fn builder_methods() {
        let cfg = ReadingConfig::default()
            .with_seed(123)
            .with_sign(ZodiacSign::Leo)
            .with_mode(ReadingMode::Spread3);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.sign, ZodiacSign::Leo);
        assert_eq!(cfg.mode, ReadingMode::Spread3);
    }
}
