//! Repository Traits

use kernel::id::GameId;
use uuid::Uuid;

use crate::domain::entities::{GameRecord, GameUpdate, RoundState};
use crate::error::GameResult;

/// What an upsert did to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Modified,
}

/// Durable game records
#[trait_variant::make(GameRecordRepository: Send)]
pub trait LocalGameRecordRepository {
    /// Apply `update` to record `id`, creating it when missing (single atomic write)
    async fn upsert(&self, id: GameId, update: &GameUpdate) -> GameResult<UpsertOutcome>;

    async fn find_by_id(&self, id: GameId) -> GameResult<Option<GameRecord>>;

    /// Records with `complete == true`, oldest first
    async fn find_completed(&self) -> GameResult<Vec<GameRecord>>;
}

/// Round state held per auth session
#[trait_variant::make(RoundStateRepository: Send)]
pub trait LocalRoundStateRepository {
    /// Missing state is `NoGame`
    async fn load(&self, session_id: Uuid) -> GameResult<RoundState>;

    async fn save(&self, session_id: Uuid, state: &RoundState) -> GameResult<()>;
}
