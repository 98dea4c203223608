//! PostgreSQL Repository Implementations

use kernel::id::GameId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{GameRecord, GameUpdate, Round, RoundState};
use crate::domain::repository::{GameRecordRepository, RoundStateRepository, UpsertOutcome};
use crate::domain::value_objects::SecretNumber;
use crate::error::{GameError, GameResult};

/// PostgreSQL-backed game records and session round state
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Game Record Repository Implementation
// ============================================================================

impl GameRecordRepository for PgGameRepository {
    async fn upsert(&self, id: GameId, update: &GameUpdate) -> GameResult<UpsertOutcome> {
        // `xmax = 0` only holds for a row this statement inserted
        let sql = match update {
            GameUpdate::Create { .. } => {
                r#"
                INSERT INTO games (game_id, time_stamp, secret_number, complete, guesses)
                VALUES ($1, $2, $3, $4, ARRAY[$5]::TEXT[])
                ON CONFLICT (game_id) DO UPDATE SET
                    time_stamp = EXCLUDED.time_stamp,
                    secret_number = EXCLUDED.secret_number,
                    complete = EXCLUDED.complete,
                    guesses = EXCLUDED.guesses
                RETURNING (xmax = 0) AS inserted
                "#
            }
            GameUpdate::Append { .. } => {
                r#"
                INSERT INTO games (game_id, time_stamp, secret_number, complete, guesses)
                VALUES ($1, $2, $3, $4, ARRAY[$5]::TEXT[])
                ON CONFLICT (game_id) DO UPDATE SET
                    complete = games.complete OR EXCLUDED.complete,
                    guesses = array_append(games.guesses, $5)
                RETURNING (xmax = 0) AS inserted
                "#
            }
        };

        let (time_stamp, secret_number) = match update {
            GameUpdate::Create {
                time_stamp,
                secret_number,
                ..
            }
            | GameUpdate::Append {
                time_stamp,
                secret_number,
                ..
            } => (time_stamp, *secret_number),
        };

        let inserted = sqlx::query_scalar::<_, bool>(sql)
            .bind(id.as_uuid())
            .bind(time_stamp)
            .bind(secret_number)
            .bind(update.complete())
            .bind(update.guess())
            .fetch_one(&self.pool)
            .await?;

        Ok(if inserted {
            UpsertOutcome::Inserted
        } else {
            UpsertOutcome::Modified
        })
    }

    async fn find_by_id(&self, id: GameId) -> GameResult<Option<GameRecord>> {
        let row = sqlx::query_as::<_, GameRow>(
            r#"
            SELECT game_id, time_stamp, secret_number, complete, guesses
            FROM games
            WHERE game_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GameRow::into_record))
    }

    async fn find_completed(&self) -> GameResult<Vec<GameRecord>> {
        let rows = sqlx::query_as::<_, GameRow>(
            r#"
            SELECT game_id, time_stamp, secret_number, complete, guesses
            FROM games
            WHERE complete
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GameRow::into_record).collect())
    }
}

// ============================================================================
// Round State Repository Implementation
// ============================================================================

const PHASE_NEW_ROUND: &str = "new_round";
const PHASE_IN_PROGRESS: &str = "in_progress";
const PHASE_COMPLETE: &str = "complete";

impl RoundStateRepository for PgGameRepository {
    async fn load(&self, session_id: Uuid) -> GameResult<RoundState> {
        let row = sqlx::query_as::<_, RoundRow>(
            r#"
            SELECT phase, game_id, secret_number, time_stamp
            FROM session_rounds
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_state(),
            None => Ok(RoundState::NoGame),
        }
    }

    async fn save(&self, session_id: Uuid, state: &RoundState) -> GameResult<()> {
        let (phase, round) = match state {
            RoundState::NoGame => {
                sqlx::query("DELETE FROM session_rounds WHERE session_id = $1")
                    .bind(session_id)
                    .execute(&self.pool)
                    .await?;
                return Ok(());
            }
            RoundState::NewRound(round) => (PHASE_NEW_ROUND, round),
            RoundState::InProgress(round) => (PHASE_IN_PROGRESS, round),
            RoundState::Complete(round) => (PHASE_COMPLETE, round),
        };

        sqlx::query(
            r#"
            INSERT INTO session_rounds (session_id, phase, game_id, secret_number, time_stamp, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (session_id) DO UPDATE SET
                phase = EXCLUDED.phase,
                game_id = EXCLUDED.game_id,
                secret_number = EXCLUDED.secret_number,
                time_stamp = EXCLUDED.time_stamp,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(session_id)
        .bind(phase)
        .bind(round.game_id.as_uuid())
        .bind(i32::from(round.secret.value()))
        .bind(&round.time_stamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct GameRow {
    game_id: Uuid,
    time_stamp: String,
    secret_number: i32,
    complete: bool,
    guesses: Vec<String>,
}

impl GameRow {
    fn into_record(self) -> GameRecord {
        GameRecord {
            id: GameId::from_uuid(self.game_id),
            time_stamp: self.time_stamp,
            secret_number: self.secret_number,
            complete: self.complete,
            guesses: self.guesses,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RoundRow {
    phase: String,
    game_id: Uuid,
    secret_number: i32,
    time_stamp: String,
}

impl RoundRow {
    fn into_state(self) -> GameResult<RoundState> {
        let secret = SecretNumber::new(i64::from(self.secret_number)).ok_or_else(|| {
            GameError::Internal(format!(
                "Stored secret {} out of range for game {}",
                self.secret_number, self.game_id
            ))
        })?;

        let round = Round {
            game_id: GameId::from_uuid(self.game_id),
            secret,
            time_stamp: self.time_stamp,
        };

        match self.phase.as_str() {
            PHASE_NEW_ROUND => Ok(RoundState::NewRound(round)),
            PHASE_IN_PROGRESS => Ok(RoundState::InProgress(round)),
            PHASE_COMPLETE => Ok(RoundState::Complete(round)),
            other => Err(GameError::Internal(format!("Unknown round phase {other}"))),
        }
    }
}
