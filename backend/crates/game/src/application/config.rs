//! Application Configuration

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Page title of every game view
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Guessing Game".to_string(),
        }
    }
}

impl GameConfig {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}
