//! Start Round Use Case

use std::sync::Arc;

use chrono::Local;
use uuid::Uuid;

use crate::domain::entities::{Round, RoundState};
use crate::domain::repository::RoundStateRepository;
use crate::domain::services::format_time_stamp;
use crate::domain::value_objects::SecretNumber;
use crate::error::GameResult;

pub struct StartRoundUseCase<S>
where
    S: RoundStateRepository,
{
    state_repo: Arc<S>,
}

impl<S> StartRoundUseCase<S>
where
    S: RoundStateRepository,
{
    pub fn new(state_repo: Arc<S>) -> Self {
        Self { state_repo }
    }

    /// Open a fresh round for the session, replacing any previous one
    ///
    /// Nothing is written to the game records until the first guess.
    pub async fn execute(&self, session_id: Uuid) -> GameResult<Round> {
        let round = Round::new(SecretNumber::generate(), format_time_stamp(&Local::now()));

        self.state_repo
            .save(session_id, &RoundState::NewRound(round.clone()))
            .await?;

        tracing::info!(game_id = %round.game_id, "Round started");

        Ok(round)
    }
}
