//! Domain Services
//!
//! Guess classification and the round transition taken on each guess.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use kernel::id::GameId;

use crate::domain::entities::{GameUpdate, Round, RoundState};
use crate::domain::value_objects::{Guess, GuessOutcome, SecretNumber};
use crate::error::{GameError, GameResult};

pub const TIME_STAMP_FORMAT: &str = "%b %d %Y %H:%M:%S";

pub fn classify(guess: &Guess, secret: SecretNumber) -> GuessOutcome {
    let secret = i64::from(secret.value());
    match guess.value() {
        g if g == secret => GuessOutcome::Success,
        g if g > secret => GuessOutcome::TooHigh,
        _ => GuessOutcome::TooLow,
    }
}

/// Everything one guess changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEvaluation {
    pub game_id: GameId,
    pub outcome: GuessOutcome,
    pub update: GameUpdate,
    pub next_state: RoundState,
}

/// Apply `guess` to the round held in `state`
///
/// A won round keeps taking guesses: they are appended to the record and the
/// round stays `Complete`. Only `NoGame` refuses.
pub fn evaluate(state: &RoundState, guess: Guess) -> GameResult<GuessEvaluation> {
    let (round, already_won) = match state {
        RoundState::NoGame => return Err(GameError::NoActiveRound),
        RoundState::NewRound(round) | RoundState::InProgress(round) => (round, false),
        RoundState::Complete(round) => (round, true),
    };

    let outcome = classify(&guess, round.secret);
    let complete = outcome.is_success();
    let time_stamp = round.time_stamp.clone();
    let secret_number = i32::from(round.secret.value());
    let guess = guess.into_text();

    let update = if state.is_new_game() {
        GameUpdate::Create {
            time_stamp,
            secret_number,
            guess,
            complete,
        }
    } else {
        GameUpdate::Append {
            time_stamp,
            secret_number,
            guess,
            complete,
        }
    };

    let next_state = next_state(round.clone(), already_won || complete);

    Ok(GuessEvaluation {
        game_id: round.game_id,
        outcome,
        update,
        next_state,
    })
}

fn next_state(round: Round, complete: bool) -> RoundState {
    if complete {
        RoundState::Complete(round)
    } else {
        RoundState::InProgress(round)
    }
}

/// `Jan 05 2026 14:03:09`
pub fn format_time_stamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(TIME_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn round(secret: i64) -> Round {
        Round::new(SecretNumber::new(secret).unwrap(), "Jan 01 2026 10:00:00".to_string())
    }

    fn guess(raw: &str) -> Guess {
        Guess::parse(raw).unwrap()
    }

    #[test]
    fn test_classify_exhaustive() {
        for s in 1..=10 {
            let secret = SecretNumber::new(s).unwrap();
            for g in 1..=10 {
                let expected = if g == s {
                    GuessOutcome::Success
                } else if g > s {
                    GuessOutcome::TooHigh
                } else {
                    GuessOutcome::TooLow
                };
                assert_eq!(classify(&guess(&g.to_string()), secret), expected, "g={g} s={s}");
            }
        }
    }

    #[test]
    fn test_classify_out_of_range() {
        let secret = SecretNumber::new(5).unwrap();
        assert_eq!(classify(&guess("100"), secret), GuessOutcome::TooHigh);
        assert_eq!(classify(&guess("-4"), secret), GuessOutcome::TooLow);
    }

    #[test]
    fn test_first_guess_creates() {
        let r = round(7);
        let eval = evaluate(&RoundState::NewRound(r.clone()), guess("3")).unwrap();

        assert_eq!(eval.outcome, GuessOutcome::TooLow);
        assert_eq!(
            eval.update,
            GameUpdate::Create {
                time_stamp: r.time_stamp.clone(),
                secret_number: 7,
                guess: "3".to_string(),
                complete: false,
            }
        );
        assert_eq!(eval.next_state, RoundState::InProgress(r));
    }

    #[test]
    fn test_first_guess_success_merges_complete() {
        let r = round(4);
        let eval = evaluate(&RoundState::NewRound(r.clone()), guess("4")).unwrap();

        assert!(matches!(eval.update, GameUpdate::Create { complete: true, .. }));
        assert_eq!(eval.next_state, RoundState::Complete(r));
    }

    #[test]
    fn test_later_guess_appends() {
        let r = round(7);
        let eval = evaluate(&RoundState::InProgress(r.clone()), guess("9")).unwrap();
        assert_eq!(eval.outcome, GuessOutcome::TooHigh);
        assert!(matches!(
            eval.update,
            GameUpdate::Append { complete: false, ref guess, .. } if guess == "9"
        ));
        assert_eq!(eval.next_state, RoundState::InProgress(r.clone()));

        let eval = evaluate(&RoundState::InProgress(r.clone()), guess("7")).unwrap();
        assert!(eval.update.complete());
        assert_eq!(eval.next_state, RoundState::Complete(r));
    }

    #[test]
    fn test_no_game_rejects_guess() {
        assert!(matches!(
            evaluate(&RoundState::NoGame, guess("1")),
            Err(GameError::NoActiveRound)
        ));
    }

    #[test]
    fn test_guess_after_win_appends_and_stays_complete() {
        let r = round(7);
        let eval = evaluate(&RoundState::Complete(r.clone()), guess("2")).unwrap();

        assert_eq!(eval.outcome, GuessOutcome::TooLow);
        assert_eq!(
            eval.update,
            GameUpdate::Append {
                time_stamp: r.time_stamp.clone(),
                secret_number: 7,
                guess: "2".to_string(),
                complete: false,
            }
        );
        assert_eq!(eval.next_state, RoundState::Complete(r));
    }

    #[test]
    fn test_format_time_stamp() {
        let at = Utc.with_ymd_and_hms(2026, 1, 5, 14, 3, 9).unwrap();
        assert_eq!(format_time_stamp(&at), "Jan 05 2026 14:03:09");
    }
}
