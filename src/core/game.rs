//! Number-guessing game state.
//!
//! The console loop lives in `commands::guess`; this module only tracks the
//! secret and the attempt budget.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::ArithError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub min: i64,
    pub max: i64,
    pub max_attempts: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { min: 1, max: 100, max_attempts: 10 }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), ArithError> {
        if self.min > self.max {
            return Err(ArithError::InvalidConfig(format!(
                "game.min ({}) must not exceed game.max ({})",
                self.min, self.max
            )));
        }
        if self.max_attempts == 0 {
            return Err(ArithError::invalid_config("game.max_attempts must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
}

impl Hint {
    pub fn message(self) -> &'static str {
        match self {
            Hint::TooLow => "Too low! Try again.",
            Hint::TooHigh => "Too high! Try again.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hint { hint: Hint, remaining: u32 },
    Correct { attempts: u32 },
    /// The final attempt missed.
    Lost { hint: Hint, secret: i64 },
}

#[derive(Debug, Clone)]
pub struct GuessingGame {
    settings: GameSettings,
    secret: i64,
    attempts: u32,
    over: bool,
}

impl GuessingGame {
    pub fn new<R: Rng>(settings: GameSettings, rng: &mut R) -> Result<Self, ArithError> {
        settings.validate()?;
        let secret = rng.gen_range(settings.min..=settings.max);
        Ok(Self::build(settings, secret))
    }

    pub fn with_secret(settings: GameSettings, secret: i64) -> Result<Self, ArithError> {
        settings.validate()?;
        if !(settings.min..=settings.max).contains(&secret) {
            return Err(ArithError::InvalidConfig(format!(
                "secret {} outside {}..={}",
                secret, settings.min, settings.max
            )));
        }
        Ok(Self::build(settings, secret))
    }

    fn build(settings: GameSettings, secret: i64) -> Self {
        Self { settings, secret, attempts: 0, over: false }
    }

    pub fn guess(&mut self, n: i64) -> Result<GuessOutcome, ArithError> {
        if self.over {
            return Err(ArithError::GameFinished);
        }
        self.attempts += 1;
        if n == self.secret {
            self.over = true;
            return Ok(GuessOutcome::Correct { attempts: self.attempts });
        }
        let hint = if n < self.secret { Hint::TooLow } else { Hint::TooHigh };
        if self.attempts >= self.settings.max_attempts {
            self.over = true;
            return Ok(GuessOutcome::Lost { hint, secret: self.secret });
        }
        Ok(GuessOutcome::Hint { hint, remaining: self.remaining() })
    }

    pub fn attempts(&self) -> u32 { self.attempts }
    pub fn remaining(&self) -> u32 { self.settings.max_attempts - self.attempts }
    pub fn is_over(&self) -> bool { self.over }
    pub fn settings(&self) -> &GameSettings { &self.settings }
    pub fn secret(&self) -> i64 { self.secret }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small() -> GameSettings {
        GameSettings { min: 1, max: 10, max_attempts: 3 }
    }

    #[test]
    fn hints_then_correct() {
        let mut g = GuessingGame::with_secret(small(), 7).unwrap();
        assert_eq!(g.guess(2).unwrap(), GuessOutcome::Hint { hint: Hint::TooLow, remaining: 2 });
        assert_eq!(g.guess(9).unwrap(), GuessOutcome::Hint { hint: Hint::TooHigh, remaining: 1 });
        assert_eq!(g.guess(7).unwrap(), GuessOutcome::Correct { attempts: 3 });
        assert!(g.is_over());
        assert_eq!(g.guess(7), Err(ArithError::GameFinished));
    }

    #[test]
    fn budget_runs_out() {
        let mut g = GuessingGame::with_secret(small(), 5).unwrap();
        g.guess(1).unwrap();
        g.guess(2).unwrap();
        assert_eq!(g.guess(10).unwrap(), GuessOutcome::Lost { hint: Hint::TooHigh, secret: 5 });
        assert_eq!(g.remaining(), 0);
        assert_eq!(g.guess(5), Err(ArithError::GameFinished));
    }

    #[test]
    fn rejects_bad_settings() {
        let inverted = GameSettings { min: 5, max: 1, max_attempts: 3 };
        assert!(matches!(inverted.validate(), Err(ArithError::InvalidConfig(_))));
        let no_attempts = GameSettings { max_attempts: 0, ..GameSettings::default() };
        assert!(GuessingGame::with_secret(no_attempts, 1).is_err());
        assert!(GuessingGame::with_secret(small(), 11).is_err());
    }

    #[test]
    fn random_secret_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let g = GuessingGame::new(small(), &mut rng).unwrap();
            assert!((1..=10).contains(&g.secret()));
        }
    }

    #[test]
    fn single_value_range() {
        let settings = GameSettings { min: 4, max: 4, max_attempts: 1 };
        let mut g = GuessingGame::new(settings, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(g.guess(4).unwrap(), GuessOutcome::Correct { attempts: 1 });
    }
}
