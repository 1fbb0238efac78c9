//! Finding a photograph of a word.
//!
//! Each configured word points at a plain-text list of image URLs. The list
//! is shuffled and candidates are tried in turn until one downloads as an
//! image and decodes.

use std::time::Duration;

use grunge_style::PixelBuffer;
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::error::BotError;
use crate::models::{HttpConfig, WordConfig};

/// Accept header a desktop browser sends for page loads
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Where candidate photographs come from
pub trait ImageSource {
    /// Candidate image URLs for `word`, in list order.
    fn candidate_urls(&self, word: &WordConfig) -> Result<Vec<String>, BotError>;

    /// Raw bytes of one candidate. Implementations reject responses that are
    /// not images with [`BotError::Rejected`].
    fn download(&self, url: &str) -> Result<Vec<u8>, BotError>;
}

/// A decoded photograph and the URL it came from
#[derive(Debug, Clone)]
pub struct FoundImage {
    pub url: String,
    pub image: PixelBuffer,
}

/// Shuffle the candidates for `word` and return the first that decodes.
///
/// Candidates that fail to download or decode are skipped. Returns
/// [`BotError::NoImages`] when the list is empty or every candidate fails.
pub fn find_image<S, R>(source: &S, word: &WordConfig, rng: &mut R) -> Result<FoundImage, BotError>
where
    S: ImageSource + ?Sized,
    R: Rng + ?Sized,
{
    let mut urls = source.candidate_urls(word)?;
    if urls.is_empty() {
        return Err(BotError::NoImages(word.word.clone()));
    }

    tracing::debug!(word = %word.word, candidates = urls.len(), "Got URLs");
    urls.shuffle(rng);

    for url in urls {
        let bytes = match source.download(&url) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Skipping candidate");
                continue;
            }
        };

        match PixelBuffer::decode(&bytes) {
            Ok(image) => {
                tracing::info!(
                    url = %url,
                    width = image.width(),
                    height = image.height(),
                    "Found image"
                );
                return Ok(FoundImage { url, image });
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Candidate did not decode");
            }
        }
    }

    Err(BotError::NoImages(word.word.clone()))
}

/// Split an image list body into URLs, dropping blank lines.
pub fn parse_url_list(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// [`ImageSource`] backed by HTTP
pub struct HttpImageSource {
    client: Client,
    list_attempts: u32,
}

impl HttpImageSource {
    pub fn new(config: &HttpConfig) -> Result<Self, BotError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            list_attempts: config.list_attempts.max(1),
        })
    }

    fn fetch_list(&self, url: &str) -> Result<reqwest::blocking::Response, reqwest::Error> {
        let mut attempt = 1;
        loop {
            match self.client.get(url).send() {
                Ok(response) => return Ok(response),
                Err(e) if attempt < self.list_attempts => {
                    tracing::warn!(
                        url = %url,
                        error = %e,
                        wait_secs = attempt,
                        "Image list fetch failed, retrying"
                    );
                    std::thread::sleep(Duration::from_secs(u64::from(attempt)));
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl ImageSource for HttpImageSource {
    fn candidate_urls(&self, word: &WordConfig) -> Result<Vec<String>, BotError> {
        let response = self.fetch_list(&word.image_list_url)?;

        if response.status() != StatusCode::OK {
            tracing::warn!(
                word = %word.word,
                status = %response.status(),
                "Image list unavailable"
            );
            return Err(BotError::NoImages(word.word.clone()));
        }

        Ok(parse_url_list(&response.text()?))
    }

    fn download(&self, url: &str) -> Result<Vec<u8>, BotError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT))
            .send()?;

        if response.status() != StatusCode::OK {
            return Err(BotError::Rejected {
                url: url.to_string(),
                reason: format!("status {}", response.status()),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.starts_with("image/") {
            return Err(BotError::Rejected {
                url: url.to_string(),
                reason: format!("content type '{content_type}'"),
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grunge_style::Srgb;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    struct FakeSource {
        urls: Vec<String>,
        bodies: HashMap<String, Vec<u8>>,
    }

    impl ImageSource for FakeSource {
        fn candidate_urls(&self, _word: &WordConfig) -> Result<Vec<String>, BotError> {
            Ok(self.urls.clone())
        }

        fn download(&self, url: &str) -> Result<Vec<u8>, BotError> {
            self.bodies.get(url).cloned().ok_or_else(|| BotError::Rejected {
                url: url.to_string(),
                reason: "status 404 Not Found".to_string(),
            })
        }
    }

    fn word() -> WordConfig {
        WordConfig {
            word: "granite".to_string(),
            image_list_url: "http://example.com/granite.txt".to_string(),
        }
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        PixelBuffer::filled(width, height, Srgb::from_u8(40, 80, 120))
            .unwrap()
            .encode_png()
            .unwrap()
    }

    #[test]
    fn test_parse_url_list() {
        let body = "http://a/1.jpg\r\nhttp://a/2.jpg\n\n  http://a/3.jpg  \n";
        assert_eq!(
            parse_url_list(body),
            vec!["http://a/1.jpg", "http://a/2.jpg", "http://a/3.jpg"]
        );
        assert!(parse_url_list("\r\n\n").is_empty());
    }

    #[test]
    fn test_empty_list_is_no_images() {
        let source = FakeSource {
            urls: vec![],
            bodies: HashMap::new(),
        };
        let err = find_image(&source, &word(), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, BotError::NoImages(w) if w == "granite"));
    }

    #[test]
    fn test_skips_broken_candidates() {
        let mut bodies = HashMap::new();
        bodies.insert("http://a/html".to_string(), b"<html></html>".to_vec());
        bodies.insert("http://a/good.png".to_string(), png(6, 4));

        let source = FakeSource {
            urls: vec![
                "http://a/missing".to_string(),
                "http://a/html".to_string(),
                "http://a/good.png".to_string(),
            ],
            bodies,
        };

        for seed in 0..10 {
            let found = find_image(&source, &word(), &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(found.url, "http://a/good.png");
            assert_eq!(found.image.dimensions(), (6, 4));
        }
    }

    #[test]
    fn test_all_candidates_fail() {
        let mut bodies = HashMap::new();
        bodies.insert("http://a/html".to_string(), b"not an image".to_vec());

        let source = FakeSource {
            urls: vec!["http://a/missing".to_string(), "http://a/html".to_string()],
            bodies,
        };
        let err = find_image(&source, &word(), &mut StdRng::seed_from_u64(2)).unwrap_err();
        assert!(matches!(err, BotError::NoImages(_)));
    }
}
