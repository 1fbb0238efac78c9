use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::BotError;

/// A finished post ready to publish
#[derive(Debug, Clone)]
pub struct Post {
    pub word: String,
    pub caption: String,
    /// Where the source photograph was downloaded from
    pub source_url: String,
    /// JPEG-encoded stylized image
    pub jpeg: Vec<u8>,
}

/// Destination for finished posts
pub trait Publisher {
    fn publish(&mut self, post: &Post) -> Result<(), BotError>;
}

/// Writes each post as `<timestamp>-<word>.jpg` plus a `.txt` caption
pub struct DirectoryPublisher {
    dir: PathBuf,
}

impl DirectoryPublisher {
    /// Create the output directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, BotError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File stem for a post published at `at`, unique within the directory.
    fn stem(&self, word: &str, at: DateTime<Utc>) -> String {
        let base = format!("{}-{}", at.format("%Y%m%dT%H%M%SZ"), sanitize(word));
        let mut stem = base.clone();
        let mut n = 1;
        while self.dir.join(format!("{stem}.jpg")).exists() {
            n += 1;
            stem = format!("{base}-{n}");
        }
        stem
    }
}

impl Publisher for DirectoryPublisher {
    fn publish(&mut self, post: &Post) -> Result<(), BotError> {
        let stem = self.stem(&post.word, Utc::now());
        let image_path = self.dir.join(format!("{stem}.jpg"));
        let caption_path = self.dir.join(format!("{stem}.txt"));

        std::fs::write(&image_path, &post.jpeg)
            .map_err(|e| BotError::Publish(format!("{}: {e}", image_path.display())))?;
        std::fs::write(&caption_path, format!("{}\n{}\n", post.caption, post.source_url))
            .map_err(|e| BotError::Publish(format!("{}: {e}", caption_path.display())))?;

        tracing::info!(path = %image_path.display(), bytes = post.jpeg.len(), "Published post");
        Ok(())
    }
}

/// Keep a word usable as part of a file name.
fn sanitize(word: &str) -> String {
    word.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}
