//! Domain Layer
//!
//! - Value objects (SecretNumber, Guess, GuessOutcome)
//! - Entities (Round, RoundState, GameRecord, GameUpdate)
//! - Services (guess classification and round transitions)
//! - Repository traits

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
