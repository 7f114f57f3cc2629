use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    /// Upstream XML feed, fetched once per request.
    pub feed_url: String,
    /// The single origin allowed to read the API cross-origin.
    pub allowed_origin: String,
    /// IANA zone the feed's rate date is anchored to. Reykjavik is UTC+0
    /// with no DST, which keeps `expires` reproducible everywhere.
    pub feed_timezone: String,
    pub fetch_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            feed_url: "https://www.borgun.is/Currency/Default.aspx?function=all".to_string(),
            allowed_origin: "https://gengi.is".to_string(),
            feed_timezone: "Atlantic/Reykjavik".to_string(),
            fetch_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn feed_tz(&self) -> anyhow::Result<Tz> {
        self.feed_timezone
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid feed_timezone {:?}: {e}", self.feed_timezone))
    }
}

fn get_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}

/// Load config.toml if present, otherwise defaults; environment variables
/// override either.
pub fn load_config() -> anyhow::Result<Config> {
    let config_path = get_config_path();
    let mut config = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        toml::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", config_path.display()))?
    } else {
        Config::default()
    };

    if let Ok(listen_addr) = env::var("LISTEN_ADDR") {
        config.listen_addr = listen_addr;
    }
    if let Ok(feed_url) = env::var("FEED_URL") {
        config.feed_url = feed_url;
    }
    if let Ok(allowed_origin) = env::var("ALLOWED_ORIGIN") {
        config.allowed_origin = allowed_origin;
    }
    if let Ok(feed_timezone) = env::var("FEED_TIMEZONE") {
        config.feed_timezone = feed_timezone;
    }
    if let Ok(timeout) = env::var("FETCH_TIMEOUT_SECS") {
        config.fetch_timeout_secs = timeout
            .parse()
            .context("FETCH_TIMEOUT_SECS must be an integer")?;
    }

    Ok(config)
}
