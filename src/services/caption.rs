use rand::Rng;

use crate::error::BotError;
use crate::models::CaptionConfig;

/// Builds captions framed by mirrored runs of symbols, e.g.
/// `☯✝ follow for more soft grunge comet ✝☯`.
#[derive(Debug, Clone)]
pub struct CaptionGenerator {
    tagline: String,
    symbols: Vec<String>,
}

impl CaptionGenerator {
    pub fn new(tagline: impl Into<String>, symbols: Vec<String>) -> Result<Self, BotError> {
        if symbols.is_empty() {
            return Err(BotError::Config(
                "caption needs at least one symbol".to_string(),
            ));
        }
        Ok(Self {
            tagline: tagline.into(),
            symbols,
        })
    }

    pub fn from_config(config: &CaptionConfig) -> Result<Self, BotError> {
        Self::new(config.tagline.clone(), config.symbols.clone())
    }

    /// Caption for a post picturing `word`.
    ///
    /// The frame length is `1 + geometric(0.5)`: one symbol, then another for
    /// every successful coin flip. The prefix keeps draw order and the suffix
    /// reverses it.
    pub fn generate<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        let mut length = 1;
        while rng.gen_bool(0.5) {
            length += 1;
        }

        let mut prefix = String::new();
        let mut suffix = String::new();
        for _ in 0..length {
            let choice = &self.symbols[rng.gen_range(0..self.symbols.len())];
            prefix.push_str(choice);
            suffix.insert_str(0, choice);
        }

        format!("{prefix} {} {word} {suffix}", self.tagline)
    }
}
