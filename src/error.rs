use grunge_style::StyleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Could not get images for '{0}'")]
    NoImages(String),

    #[error("Rejected {url}: {reason}")]
    Rejected { url: String, reason: String },

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BotError {
    /// Whether the round should be abandoned and a new word tried right away.
    ///
    /// Everything else (publishing, local IO) waits out a full interval.
    pub fn is_skippable(&self) -> bool {
        match self {
            BotError::NoImages(_) | BotError::Rejected { .. } | BotError::Fetch(_) => true,
            BotError::Style(e) => matches!(
                e,
                StyleError::MalformedImage(_)
                    | StyleError::ImageTooSmall { .. }
                    | StyleError::ImageTooLarge { .. }
            ),
            BotError::Config(_) | BotError::Publish(_) | BotError::Io(_) => false,
        }
    }
}
