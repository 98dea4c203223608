//! Server configuration from the environment
//!
//! | Variable | |
//! |---|---|
//! | `DATABASE_URL` | required |
//! | `BIND_ADDR` | default `0.0.0.0:31113` |
//! | `SESSION_SECRET` | base64 of 32 bytes; required in release builds |
//! | `PASSWORD_PEPPER` | optional |
//! | `GAME_TITLE` | optional, also used on the login page |

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;
use game::GameConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";

pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub auth: AuthConfig,
    pub game: GameConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR is not a socket address")?;

        let mut auth = match env::var("SESSION_SECRET") {
            Ok(secret) => AuthConfig {
                session_secret: decode_secret(&secret)?,
                cookie_secure: !cfg!(debug_assertions),
                ..AuthConfig::default()
            },
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("SESSION_SECRET not set, using a random development secret");
                AuthConfig::development()
            }
            Err(_) => bail!("SESSION_SECRET must be set in production"),
        };

        if let Ok(pepper) = env::var("PASSWORD_PEPPER") {
            auth.password_pepper = Some(pepper.into_bytes());
        }

        let game = match env::var("GAME_TITLE") {
            Ok(title) => GameConfig::with_title(title),
            Err(_) => GameConfig::default(),
        };
        auth.app_title = game.title.clone();

        Ok(Self {
            database_url,
            bind_addr,
            auth,
            game,
        })
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("SESSION_SECRET is not valid base64")?;

    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
        anyhow::anyhow!(
            "SESSION_SECRET must decode to 32 bytes, got {}",
            bytes.len()
        )
    })
}
