//! Submit Guess Use Case

use std::sync::Arc;

use kernel::id::GameId;
use uuid::Uuid;

use crate::domain::repository::{GameRecordRepository, RoundStateRepository, UpsertOutcome};
use crate::domain::services::evaluate;
use crate::domain::value_objects::{Guess, GuessOutcome};
use crate::error::GameResult;

/// How the record write went
///
/// A failed write does not fail the guess; the player still gets the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    Persisted(UpsertOutcome),
    Failed(String),
}

impl Persistence {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Persistence::Persisted(_))
    }
}

#[derive(Debug, Clone)]
pub struct SubmitGuessOutput {
    pub outcome: GuessOutcome,
    /// Guess text as recorded
    pub guess: String,
    pub game_id: GameId,
    pub persistence: Persistence,
}

pub struct SubmitGuessUseCase<G, S>
where
    G: GameRecordRepository,
    S: RoundStateRepository,
{
    game_repo: Arc<G>,
    state_repo: Arc<S>,
}

impl<G, S> SubmitGuessUseCase<G, S>
where
    G: GameRecordRepository,
    S: RoundStateRepository,
{
    pub fn new(game_repo: Arc<G>, state_repo: Arc<S>) -> Self {
        Self {
            game_repo,
            state_repo,
        }
    }

    pub async fn execute(&self, session_id: Uuid, raw_guess: &str) -> GameResult<SubmitGuessOutput> {
        let guess = Guess::parse(raw_guess)?;

        let state = self.state_repo.load(session_id).await?;
        let evaluation = evaluate(&state, guess)?;
        let game_id = evaluation.game_id;

        self.state_repo
            .save(session_id, &evaluation.next_state)
            .await?;

        // no lock spans load..upsert; concurrent guesses for one round may interleave
        let persistence = match self.game_repo.upsert(game_id, &evaluation.update).await {
            Ok(outcome) => Persistence::Persisted(outcome),
            Err(e) => {
                tracing::error!(game_id = %game_id, error = %e, "Game record update failed");
                Persistence::Failed(e.to_string())
            }
        };

        tracing::info!(
            game_id = %game_id,
            guess = evaluation.update.guess(),
            outcome = %evaluation.outcome,
            "Guess evaluated"
        );

        Ok(SubmitGuessOutput {
            outcome: evaluation.outcome,
            guess: evaluation.update.guess().to_string(),
            game_id,
            persistence,
        })
    }
}
