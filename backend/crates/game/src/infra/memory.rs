//! In-memory repository
//!
//! Same contract as [`PgGameRepository`](super::postgres::PgGameRepository). Used by
//! tests and for running without a database.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::GameId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{GameRecord, GameUpdate, RoundState};
use crate::domain::repository::{GameRecordRepository, RoundStateRepository, UpsertOutcome};
use crate::error::GameResult;

#[derive(Clone, Default)]
pub struct InMemoryGameRepository {
    /// Insertion order doubles as creation order
    games: Arc<RwLock<Vec<GameRecord>>>,
    rounds: Arc<RwLock<HashMap<Uuid, RoundState>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_count(&self) -> usize {
        self.games.read().await.len()
    }

    /// All records, in creation order
    pub async fn records(&self) -> Vec<GameRecord> {
        self.games.read().await.clone()
    }

    /// Round state of every session that has one
    pub async fn round_states(&self) -> Vec<(Uuid, RoundState)> {
        self.rounds
            .read()
            .await
            .iter()
            .map(|(id, state)| (*id, state.clone()))
            .collect()
    }
}

impl GameRecordRepository for InMemoryGameRepository {
    async fn upsert(&self, id: GameId, update: &GameUpdate) -> GameResult<UpsertOutcome> {
        let mut games = self.games.write().await;
        match games.iter().position(|g| g.id == id) {
            Some(index) => {
                let existing = games[index].clone();
                games[index] = update.apply(id, Some(existing));
                Ok(UpsertOutcome::Modified)
            }
            None => {
                games.push(update.apply(id, None));
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    async fn find_by_id(&self, id: GameId) -> GameResult<Option<GameRecord>> {
        Ok(self.games.read().await.iter().find(|g| g.id == id).cloned())
    }

    async fn find_completed(&self) -> GameResult<Vec<GameRecord>> {
        Ok(self
            .games
            .read()
            .await
            .iter()
            .filter(|g| g.complete)
            .cloned()
            .collect())
    }
}

impl RoundStateRepository for InMemoryGameRepository {
    async fn load(&self, session_id: Uuid) -> GameResult<RoundState> {
        Ok(self
            .rounds
            .read()
            .await
            .get(&session_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, session_id: Uuid, state: &RoundState) -> GameResult<()> {
        let mut rounds = self.rounds.write().await;
        match state {
            RoundState::NoGame => {
                rounds.remove(&session_id);
            }
            _ => {
                rounds.insert(session_id, state.clone());
            }
        }
        Ok(())
    }
}
