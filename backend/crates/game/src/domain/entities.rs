//! Domain Entities

use kernel::id::GameId;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SecretNumber;

/// Parameters of one round, fixed when it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub game_id: GameId,
    pub secret: SecretNumber,
    /// Human-readable start time, copied into the record
    pub time_stamp: String,
}

impl Round {
    pub fn new(secret: SecretNumber, time_stamp: String) -> Self {
        Self {
            game_id: GameId::new(),
            secret,
            time_stamp,
        }
    }
}

/// Per-session round lifecycle
///
/// `NoGame -> NewRound -> InProgress -> Complete`; starting a round is allowed from
/// any state and replaces whatever was there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoundState {
    #[default]
    NoGame,
    /// Started, no guess recorded yet
    NewRound(Round),
    InProgress(Round),
    Complete(Round),
}

impl RoundState {
    pub fn round(&self) -> Option<&Round> {
        match self {
            RoundState::NoGame => None,
            RoundState::NewRound(round)
            | RoundState::InProgress(round)
            | RoundState::Complete(round) => Some(round),
        }
    }

    /// The next guess creates the record
    pub fn is_new_game(&self) -> bool {
        matches!(self, RoundState::NewRound(_))
    }

    pub fn is_game_in_progress(&self) -> bool {
        matches!(self, RoundState::NewRound(_) | RoundState::InProgress(_))
    }
}

/// Durable projection of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(rename = "_id")]
    pub id: GameId,
    pub time_stamp: String,
    pub secret_number: i32,
    pub complete: bool,
    pub guesses: Vec<String>,
}

impl GameRecord {
    /// Whether any recorded guess hits the secret
    pub fn has_winning_guess(&self) -> bool {
        self.guesses
            .iter()
            .filter_map(|g| g.trim().parse::<i64>().ok())
            .any(|g| g == i64::from(self.secret_number))
    }
}

/// Store write produced by one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    /// First guess: write the full record with `guesses = [guess]`
    Create {
        time_stamp: String,
        secret_number: i32,
        guess: String,
        complete: bool,
    },
    /// Later guess: push `guess` and OR in `complete`
    ///
    /// Carries the round parameters so a lost first write is recreated.
    Append {
        time_stamp: String,
        secret_number: i32,
        guess: String,
        complete: bool,
    },
}

impl GameUpdate {
    pub fn guess(&self) -> &str {
        match self {
            GameUpdate::Create { guess, .. } | GameUpdate::Append { guess, .. } => guess,
        }
    }

    pub fn complete(&self) -> bool {
        match self {
            GameUpdate::Create { complete, .. } | GameUpdate::Append { complete, .. } => *complete,
        }
    }

    /// Result of upserting this update over `existing`
    pub fn apply(&self, id: GameId, existing: Option<GameRecord>) -> GameRecord {
        match (self, existing) {
            (
                GameUpdate::Append {
                    guess, complete, ..
                },
                Some(mut record),
            ) => {
                record.guesses.push(guess.clone());
                record.complete |= *complete;
                record
            }
            (
                GameUpdate::Create {
                    time_stamp,
                    secret_number,
                    guess,
                    complete,
                }
                | GameUpdate::Append {
                    time_stamp,
                    secret_number,
                    guess,
                    complete,
                },
                _,
            ) => GameRecord {
                id,
                time_stamp: time_stamp.clone(),
                secret_number: *secret_number,
                complete: *complete,
                guesses: vec![guess.clone()],
            },
        }
    }
}
