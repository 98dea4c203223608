//! Form payloads and view models

use serde::{Deserialize, Serialize};

/// POST /login body (`application/x-www-form-urlencoded`)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /signup body
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpForm {
    pub username: String,
    pub password: String,
}

/// Model of the `login` view
#[derive(Debug, Clone, Serialize)]
pub struct LoginView {
    pub title: String,
    /// Why the last attempt was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
