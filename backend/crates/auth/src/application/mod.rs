//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod resolve_session;
pub mod session_token;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

pub use config::AuthConfig;
pub use resolve_session::{CurrentUser, ResolveSessionUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
