//! In-memory image source for bot loop tests.

use grunge::error::BotError;
use grunge::models::WordConfig;
use grunge::services::ImageSource;
use std::cell::RefCell;
use std::collections::HashMap;

/// Serves image lists and image bodies from maps. Unknown list URLs behave
/// like a non-200 list response.
#[derive(Default)]
pub struct MemorySource {
    lists: HashMap<String, Vec<String>>,
    images: HashMap<String, Vec<u8>>,
    pub downloads: RefCell<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, list_url: &str, urls: &[&str]) -> Self {
        self.lists.insert(
            list_url.to_string(),
            urls.iter().map(|u| u.to_string()).collect(),
        );
        self
    }

    pub fn with_image(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.images.insert(url.to_string(), bytes);
        self
    }
}

impl ImageSource for MemorySource {
    fn candidate_urls(&self, word: &WordConfig) -> Result<Vec<String>, BotError> {
        self.lists
            .get(&word.image_list_url)
            .cloned()
            .ok_or_else(|| BotError::NoImages(word.word.clone()))
    }

    fn download(&self, url: &str) -> Result<Vec<u8>, BotError> {
        self.downloads.borrow_mut().push(url.to_string());
        self.images.get(url).cloned().ok_or_else(|| BotError::Rejected {
            url: url.to_string(),
            reason: "status 404 Not Found".to_string(),
        })
    }
}
