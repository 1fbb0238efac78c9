//! The posting loop: pick a word, find a photograph, stylize, caption,
//! publish, wait.

use std::time::Duration;

use grunge_style::Stylizer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::BotError;
use crate::models::{BotConfig, WordConfig};
use crate::services::caption::CaptionGenerator;
use crate::services::image_source::{find_image, ImageSource};
use crate::services::publisher::{Post, Publisher};

/// JPEG quality for published images
pub const JPEG_QUALITY: u8 = 90;

pub struct Bot<S, P> {
    words: Vec<WordConfig>,
    stylizer: Stylizer,
    captions: CaptionGenerator,
    source: S,
    publisher: P,
    rng: StdRng,
    interval: Duration,
}

impl<S: ImageSource, P: Publisher> Bot<S, P> {
    /// Build a bot from config. The rng is seeded from `config.seed`, or from
    /// entropy when no seed is set.
    pub fn new(config: &BotConfig, source: S, publisher: P) -> Result<Self, BotError> {
        if config.words.is_empty() {
            return Err(BotError::Config("words must not be empty".to_string()));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            words: config.words.clone(),
            stylizer: config.style.stylizer()?,
            captions: CaptionGenerator::from_config(&config.caption)?,
            source,
            publisher,
            rng,
            interval: Duration::from_secs(config.interval_secs),
        })
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// One attempt at a post.
    pub fn round(&mut self) -> Result<Post, BotError> {
        let word = self.words[self.rng.gen_range(0..self.words.len())].clone();
        tracing::info!(word = %word.word, "Generating post");

        let found = find_image(&self.source, &word, &mut self.rng)?;

        tracing::debug!("Pixelating image");
        let pixelated = self.stylizer.pixelate(found.image)?;

        tracing::debug!("Pastelizing image");
        let styled = self.stylizer.pastelize(pixelated, &mut self.rng)?;

        let caption = self.captions.generate(&word.word, &mut self.rng);
        tracing::info!(caption = %caption, "Generated caption");

        let post = Post {
            word: word.word,
            caption,
            source_url: found.url,
            jpeg: styled.encode_jpeg(JPEG_QUALITY)?,
        };

        self.publisher.publish(&post)?;
        Ok(post)
    }

    /// Keep trying rounds until one publishes, for at most `max_rounds`.
    ///
    /// Skippable failures move on to another word. Any other failure is
    /// returned immediately, as is the last skippable one when the rounds run
    /// out.
    pub fn post_once(&mut self, max_rounds: usize) -> Result<Post, BotError> {
        let mut last = BotError::NoImages(String::new());
        for _ in 0..max_rounds.max(1) {
            match self.round() {
                Ok(post) => return Ok(post),
                Err(e) if e.is_skippable() => {
                    tracing::warn!(error = %e, "Round failed, trying another word");
                    last = e;
                }
                Err(e) => return Err(e),
            }
        }
        Err(last)
    }

    /// Run the loop. Stops after `max_posts` successful posts, or never when
    /// `None`.
    pub fn run(&mut self, max_posts: Option<usize>) {
        let mut posted = 0;
        loop {
            match self.round() {
                Ok(_) => {
                    posted += 1;
                    if max_posts.is_some_and(|max| posted >= max) {
                        return;
                    }
                    self.wait();
                }
                Err(e) if e.is_skippable() => {
                    tracing::warn!(error = %e, "Round failed, trying another word");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Round failed, waiting for next interval");
                    self.wait();
                }
            }
        }
    }

    fn wait(&self) {
        if !self.interval.is_zero() {
            tracing::info!(secs = self.interval.as_secs(), "Waiting for next post");
            std::thread::sleep(self.interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grunge_style::{PixelBuffer, Srgb};
    use std::cell::Cell;

    struct OneImage {
        png: Vec<u8>,
    }

    impl ImageSource for OneImage {
        fn candidate_urls(&self, _word: &WordConfig) -> Result<Vec<String>, BotError> {
            Ok(vec!["http://a/1.png".to_string()])
        }

        fn download(&self, _url: &str) -> Result<Vec<u8>, BotError> {
            Ok(self.png.clone())
        }
    }

    #[derive(Default)]
    struct Recorder {
        posts: Vec<Post>,
        fail_next: Cell<bool>,
    }

    impl Publisher for Recorder {
        fn publish(&mut self, post: &Post) -> Result<(), BotError> {
            if self.fail_next.replace(false) {
                return Err(BotError::Publish("rate limited".to_string()));
            }
            self.posts.push(post.clone());
            Ok(())
        }
    }

    fn config() -> BotConfig {
        BotConfig::from_yaml(
            "words:\n  - word: moss\n    image_list_url: http://a/moss.txt\ninterval_secs: 0\nseed: 3\n",
        )
        .unwrap()
    }

    fn source(width: u32, height: u32) -> OneImage {
        let png = PixelBuffer::filled(width, height, Srgb::from_u8(30, 90, 60))
            .unwrap()
            .encode_png()
            .unwrap();
        OneImage { png }
    }

    #[test]
    fn test_round_publishes_jpeg() {
        let mut bot = Bot::new(&config(), source(200, 100), Recorder::default()).unwrap();
        let post = bot.round().unwrap();

        assert_eq!(post.word, "moss");
        assert!(post.caption.contains(" follow for more soft grunge moss "));
        let decoded = PixelBuffer::decode(&post.jpeg).unwrap();
        assert_eq!(decoded.dimensions(), (800, 400));
        assert_eq!(bot.publisher().posts.len(), 1);
    }

    #[test]
    fn test_too_small_image_is_skippable() {
        let mut bot = Bot::new(&config(), source(1600, 3), Recorder::default()).unwrap();
        let err = bot.post_once(3).unwrap_err();

        assert!(err.is_skippable());
        assert!(bot.publisher().posts.is_empty());
    }

    #[test]
    fn test_publish_failure_not_retried_by_post_once() {
        let recorder = Recorder::default();
        recorder.fail_next.set(true);
        let mut bot = Bot::new(&config(), source(200, 100), recorder).unwrap();

        assert!(matches!(bot.post_once(5), Err(BotError::Publish(_))));
    }

    #[test]
    fn test_empty_words_rejected() {
        let mut config = config();
        config.words.clear();

        let result = Bot::new(&config, source(200, 100), Recorder::default());
        assert!(matches!(result, Err(BotError::Config(_))));
    }

    #[test]
    fn test_run_continues_after_publish_failure() {
        let recorder = Recorder::default();
        recorder.fail_next.set(true);
        let mut bot = Bot::new(&config(), source(200, 100), recorder).unwrap();

        bot.run(Some(2));
        assert_eq!(bot.publisher().posts.len(), 2);
    }
}
