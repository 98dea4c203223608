//! History Use Case

use std::sync::Arc;

use crate::domain::entities::GameRecord;
use crate::domain::repository::GameRecordRepository;
use crate::error::GameResult;

pub struct HistoryUseCase<G>
where
    G: GameRecordRepository,
{
    game_repo: Arc<G>,
}

impl<G> HistoryUseCase<G>
where
    G: GameRecordRepository,
{
    pub fn new(game_repo: Arc<G>) -> Self {
        Self { game_repo }
    }

    /// Every completed game, whoever played it
    pub async fn execute(&self) -> GameResult<Vec<GameRecord>> {
        self.game_repo.find_completed().await
    }
}
