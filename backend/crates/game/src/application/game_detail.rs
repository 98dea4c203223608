//! Game Detail Use Case

use std::sync::Arc;

use kernel::id::GameId;

use crate::domain::entities::GameRecord;
use crate::domain::repository::GameRecordRepository;
use crate::error::GameResult;

pub struct GameDetailUseCase<G>
where
    G: GameRecordRepository,
{
    game_repo: Arc<G>,
}

impl<G> GameDetailUseCase<G>
where
    G: GameRecordRepository,
{
    pub fn new(game_repo: Arc<G>) -> Self {
        Self { game_repo }
    }

    pub async fn execute(&self, id: GameId) -> GameResult<Option<GameRecord>> {
        self.game_repo.find_by_id(id).await
    }
}
