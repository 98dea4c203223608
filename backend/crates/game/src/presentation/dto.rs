//! Form payloads and view models

use serde::{Deserialize, Serialize};

use crate::domain::entities::GameRecord;

/// POST /guess body
#[derive(Debug, Clone, Deserialize)]
pub struct GuessForm {
    #[serde(default)]
    pub guess: String,
}

/// GET /detail query
#[derive(Debug, Clone, Deserialize)]
pub struct DetailQuery {
    pub gameid: Option<String>,
}

/// Model of the `index` view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexView {
    pub title: String,
    pub user_name: String,
}

/// Model of views that only need a title (`start`, `success`)
#[derive(Debug, Clone, Serialize)]
pub struct TitleView {
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub title: String,
    pub history: Vec<GameRecord>,
}

/// Result of one guess, rendered into `guessForm` or returned as JSON
#[derive(Debug, Clone, Serialize)]
pub struct GuessResultView {
    pub title: String,
    pub guess: String,
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
}
