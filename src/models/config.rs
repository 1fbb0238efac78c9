use grunge_style::palette::{DEFAULT_MAX_ANCHORS, DEFAULT_MIN_ANCHORS};
use grunge_style::raster::{DEFAULT_BLOCK_SIZE, DEFAULT_MAX_PIXELS, DEFAULT_MIN_WIDTH};
use grunge_style::{HuePool, PaletteFactory, Stylizer};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::BotError;

/// Bot configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    /// Words the bot picks from, each with its image list
    pub words: Vec<WordConfig>,

    /// Directory that receives published posts
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Seconds to wait after a successful post (or a failed publish)
    #[serde(default = "default_interval")]
    pub interval_secs: u64,

    /// Fixed seed for reproducible runs; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub caption: CaptionConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_interval() -> u64 {
    3600 // one hour
}

/// A pictured word and where to find photographs of it
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WordConfig {
    pub word: String,

    /// URL of a newline-separated list of image URLs
    pub image_list_url: String,
}

/// Network timeouts and list-fetch retry policy
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HttpConfig {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Attempts at fetching an image list before giving up on transport
    /// errors. The wait grows by one second per failed attempt.
    #[serde(default = "default_list_attempts")]
    pub list_attempts: u32,
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_timeout() -> u64 {
    300
}

fn default_list_attempts() -> u32 {
    5
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
            list_attempts: default_list_attempts(),
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Pixelation and palette settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StyleConfig {
    #[serde(default = "default_min_width")]
    pub min_width: u32,

    #[serde(default = "default_block_size")]
    pub block_size: u32,

    /// Largest image the upscale to `min_width` may produce
    #[serde(default = "default_max_pixels")]
    pub max_pixels: u64,

    #[serde(default = "default_min_anchors")]
    pub min_anchors: usize,

    #[serde(default = "default_max_anchors")]
    pub max_anchors: usize,

    /// Custom hue pools; the built-in pastel pools when absent
    #[serde(default)]
    pub pools: Option<Vec<PoolConfig>>,
}

fn default_min_width() -> u32 {
    DEFAULT_MIN_WIDTH
}

fn default_block_size() -> u32 {
    DEFAULT_BLOCK_SIZE
}

fn default_max_pixels() -> u64 {
    DEFAULT_MAX_PIXELS
}

fn default_min_anchors() -> usize {
    DEFAULT_MIN_ANCHORS
}

fn default_max_anchors() -> usize {
    DEFAULT_MAX_ANCHORS
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            min_width: default_min_width(),
            block_size: default_block_size(),
            max_pixels: default_max_pixels(),
            min_anchors: default_min_anchors(),
            max_anchors: default_max_anchors(),
            pools: None,
        }
    }
}

/// A named pool of hex colors
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PoolConfig {
    pub name: String,
    pub colors: Vec<String>,
}

impl StyleConfig {
    /// Build the stylizer described by this section, rejecting out-of-range
    /// pixelation settings and unusable pools.
    pub fn stylizer(&self) -> Result<Stylizer, BotError> {
        let pools = match &self.pools {
            Some(pools) => pools
                .iter()
                .map(|p| HuePool::from_hex(p.name.clone(), p.colors.as_slice()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| BotError::Config(format!("style.pools: {e}")))?,
            None => PaletteFactory::default_pools(),
        };

        let factory = PaletteFactory::new(pools, self.min_anchors, self.max_anchors)
            .map_err(|e| BotError::Config(format!("style: {e}")))?;

        let stylizer = Stylizer::new()
            .min_width(self.min_width)
            .block_size(self.block_size)
            .max_pixels(self.max_pixels)
            .factory(factory);
        stylizer
            .validate()
            .map_err(|e| BotError::Config(format!("style: {e}")))?;
        Ok(stylizer)
    }
}

/// Caption text settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CaptionConfig {
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Symbols used to frame the caption
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
}

fn default_tagline() -> String {
    "follow for more soft grunge".to_string()
}

fn default_symbols() -> Vec<String> {
    ["☯", "✡", "☨", "✞", "✝", "☮", "☥", "☦", "☪", "✌"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            tagline: default_tagline(),
            symbols: default_symbols(),
        }
    }
}

impl BotConfig {
    /// Environment variable consulted when no config path is given
    pub const ENV_VAR: &'static str = "GRUNGE_CONFIG";

    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, BotError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BotError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| BotError::Config(format!("{}: {e}", path.display())))?;

        tracing::info!(
            path = %path.display(),
            words = config.words.len(),
            interval_secs = config.interval_secs,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, BotError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| BotError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config path from the CLI argument or `GRUNGE_CONFIG`.
    pub fn resolve_path(arg: Option<PathBuf>) -> Result<PathBuf, BotError> {
        arg.or_else(|| std::env::var_os(Self::ENV_VAR).map(PathBuf::from))
            .ok_or_else(|| {
                BotError::Config(format!("no config file given (use --config or {})", Self::ENV_VAR))
            })
    }

    fn validate(&self) -> Result<(), BotError> {
        if self.words.is_empty() {
            return Err(BotError::Config("words must not be empty".to_string()));
        }
        if let Some(w) = self.words.iter().find(|w| w.word.trim().is_empty()) {
            return Err(BotError::Config(format!(
                "word with list {} has no text",
                w.image_list_url
            )));
        }
        if self.caption.symbols.is_empty() {
            return Err(BotError::Config(
                "caption.symbols must not be empty".to_string(),
            ));
        }
        // Surface bad pools or ranges at load time rather than on the first post
        self.style.stylizer()?;
        Ok(())
    }
}
