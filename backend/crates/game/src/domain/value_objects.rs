//! Domain Value Objects

use std::fmt;

use rand::Rng;

use crate::error::{GameError, GameResult};

/// The number a round is played against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretNumber(u8);

impl SecretNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Uniform draw from `MIN..=MAX`
    pub fn generate() -> Self {
        Self(rand::rng().random_range(Self::MIN..=Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SecretNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted guess
///
/// Surrounding whitespace is ignored when reading the number, but the text
/// is recorded exactly as the player sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    text: String,
    value: i64,
}

impl Guess {
    pub fn parse(raw: &str) -> GameResult<Self> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| GameError::InvalidGuess(raw.to_string()))?;

        Ok(Self {
            text: raw.to_string(),
            value,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Success,
    TooHigh,
    TooLow,
}

impl GuessOutcome {
    pub fn result_text(&self) -> &'static str {
        match self {
            GuessOutcome::Success => "success",
            GuessOutcome::TooHigh => "too high",
            GuessOutcome::TooLow => "too low",
        }
    }

    /// CSS class of the annotated guess form
    pub fn display_class(&self) -> Option<&'static str> {
        match self {
            GuessOutcome::Success => None,
            GuessOutcome::TooHigh => Some("highGuess"),
            GuessOutcome::TooLow => Some("lowGuess"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GuessOutcome::Success)
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.result_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_number_range() {
        assert!(SecretNumber::new(0).is_none());
        assert!(SecretNumber::new(11).is_none());
        assert_eq!(SecretNumber::new(1).unwrap().value(), 1);
        assert_eq!(SecretNumber::new(10).unwrap().value(), 10);
    }

    #[test]
    fn test_generate_covers_range() {
        let mut seen = [false; 10];
        for _ in 0..2000 {
            let secret = SecretNumber::generate();
            assert!((1..=10).contains(&secret.value()));
            seen[(secret.value() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every value drawn at least once");
    }

    #[test]
    fn test_guess_parse() {
        let guess = Guess::parse(" 7 \n").unwrap();
        assert_eq!(guess.as_str(), " 7 \n");
        assert_eq!(guess.value(), 7);

        assert_eq!(Guess::parse("-3").unwrap().value(), -3);
        assert_eq!(Guess::parse("42").unwrap().value(), 42);
    }

    #[test]
    fn test_guess_rejects_non_numbers() {
        for raw in ["", "   ", "seven", "7.5", "0x7", "7a"] {
            assert!(
                matches!(Guess::parse(raw), Err(GameError::InvalidGuess(_))),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_outcome_texts() {
        assert_eq!(GuessOutcome::Success.result_text(), "success");
        assert_eq!(GuessOutcome::TooHigh.to_string(), "too high");
        assert_eq!(GuessOutcome::TooLow.display_class(), Some("lowGuess"));
        assert_eq!(GuessOutcome::TooHigh.display_class(), Some("highGuess"));
        assert_eq!(GuessOutcome::Success.display_class(), None);
    }
}
