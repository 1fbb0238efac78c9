pub mod config;

pub use config::{BotConfig, CaptionConfig, HttpConfig, PoolConfig, StyleConfig, WordConfig};
