use std::{fs, io, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

pub const PHOTO_API: &str = "https://api.pexels.com/v1";
pub const VIDEO_API: &str = "https://api.pexels.com/videos";

/// Environment variable holding the API token.
pub const TOKEN_VAR: &str = "PEXELS_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub photo_api: String,
    pub video_api: String,
    /// Request timeout in seconds.
    pub timeout: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            photo_api: PHOTO_API.to_string(),
            video_api: VIDEO_API.to_string(),
            timeout: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Points both APIs at `base`, the way `api.pexels.com` lays them out.
    pub fn with_base_url<T: AsRef<str>>(base: T) -> Self {
        let base = base.as_ref().trim_end_matches('/');

        Self {
            photo_api: format!("{base}/v1"),
            video_api: format!("{base}/videos"),
            ..Default::default()
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;

        serde_json::from_str(&content).map_err(|err| Into::<io::Error>::into(err))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
