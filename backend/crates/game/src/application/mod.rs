//! Application Layer - Use Cases

pub mod config;
pub mod game_detail;
pub mod history;
pub mod start_round;
pub mod submit_guess;

pub use config::GameConfig;
pub use game_detail::GameDetailUseCase;
pub use history::HistoryUseCase;
pub use start_round::StartRoundUseCase;
pub use submit_guess::{Persistence, SubmitGuessOutput, SubmitGuessUseCase};
