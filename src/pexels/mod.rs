use std::{
    env,
    sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    },
};

use rand::Rng;
use reqwest::{
    blocking::{Client as HttpClient, Response},
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

pub mod config;
pub mod error;
pub mod models;

pub use config::{Config, TOKEN_VAR};
pub use error::{Error, Result};
pub use models::{
    CuratedResult, Photo, PhotoSource, PopularVideos, SearchResults, Video, VideoFiles,
    VideoPictures, VideoSearchResult,
};

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Highest page drawn by [`Client::random_photo`] and [`Client::random_video`].
pub const MAX_RANDOM_PAGE: u32 = 1000;

macro_rules! endpoint {
    ($base:expr, $path:literal $(, $arg:expr)* $(,)?) => {
        format!(concat!("{}", $path), $base $(, $arg)*)
    };
}

/// Blocking client for the Pexels photo and video APIs.
///
/// Clones share the connection pool and the rate-limit counter.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    config: Config,
    remaining: Arc<AtomicU32>,
}

impl Client {
    pub fn new<T: AsRef<str>>(token: T) -> Result<Self> {
        Self::with_config(token, Config::default())
    }

    pub fn with_config<T: AsRef<str>>(token: T, config: Config) -> Result<Self> {
        let mut auth = HeaderValue::from_str(token.as_ref()).map_err(|_| Error::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = HttpClient::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            config,
            remaining: Arc::new(AtomicU32::new(0)),
        })
    }

    /// Reads the token from `PEXELS_API_KEY`, loading `.env` first if present.
    pub fn new_from_env() -> Result<Self> {
        Self::from_env_with_config(Config::default())
    }

    pub fn from_env_with_config(config: Config) -> Result<Self> {
        dotenvy::dotenv().ok();

        let token = env::var(TOKEN_VAR).map_err(|_| Error::MissingToken)?;

        Self::with_config(token, config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn search_photos<T: AsRef<str>>(
        &self,
        query: T,
        per_page: u32,
        page: u32,
    ) -> Result<SearchResults> {
        self.fetch(endpoint!(
            self.config.photo_api,
            "/search?query={}&per_page={}&page={}",
            query.as_ref(),
            per_page,
            page
        ))
    }

    pub fn curated_photos(&self, per_page: u32, page: u32) -> Result<CuratedResult> {
        self.fetch(endpoint!(
            self.config.photo_api,
            "/curated?per_page={}&page={}",
            per_page,
            page
        ))
    }

    pub fn get_photo(&self, id: u64) -> Result<Photo> {
        self.fetch(endpoint!(self.config.photo_api, "/photos/{}", id))
    }

    pub fn search_video<T: AsRef<str>>(
        &self,
        query: T,
        per_page: u32,
        page: u32,
    ) -> Result<VideoSearchResult> {
        self.fetch(endpoint!(
            self.config.video_api,
            "/search?query={}&per_page={}&page={}",
            query.as_ref(),
            per_page,
            page
        ))
    }

    pub fn popular_video(&self, per_page: u32, page: u32) -> Result<PopularVideos> {
        self.fetch(endpoint!(
            self.config.video_api,
            "/popular?per_page={}&page={}",
            per_page,
            page
        ))
    }

    /// Loads a randomly drawn page of the curated listing with a page size of one.
    ///
    /// Returns `None` when that page holds no photo. The draw is over page
    /// numbers, so photos are not picked uniformly from the catalog.
    pub fn random_photo(&self) -> Result<Option<Photo>> {
        let result = self.curated_photos(1, random_page())?;

        Ok(single(result.into_photos()))
    }

    /// Same as [`Client::random_photo`], over the popular video listing.
    pub fn random_video(&self) -> Result<Option<Video>> {
        let result = self.popular_video(1, random_page())?;

        Ok(single(result.into_videos()))
    }

    /// Value of `X-Ratelimit-Remaining` from the last response, 0 before any.
    pub fn remaining_requests(&self) -> u32 {
        self.remaining.load(Ordering::Relaxed)
    }

    fn fetch<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let response = self.send_request(&url)?;
        let body = response.text()?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(source) => {
                debug!("Undecodable response from {}: {}", url, source);
                Err(Error::Decode { source, body })
            }
        }
    }

    fn send_request(&self, url: &str) -> Result<Response> {
        debug!("GET {}", url);

        let response = self.http.get(url).send()?;

        let header = response
            .headers()
            .get(RATE_LIMIT_REMAINING)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

        let parsed = header.as_deref().map(str::parse::<u32>);
        let remaining = match parsed {
            Some(Ok(remaining)) => remaining,

            _ => {
                warn!(
                    "Response {} from {} has no usable rate-limit header",
                    response.status(),
                    url
                );
                return Err(Error::RateLimitHeader(header));
            }
        };

        self.remaining.store(remaining, Ordering::Relaxed);
        trace!("{} requests remaining this period", remaining);

        Ok(response)
    }
}

fn random_page() -> u32 {
    rand::rng().random_range(0..=MAX_RANDOM_PAGE)
}

fn single<T>(mut items: Vec<T>) -> Option<T> {
    if items.len() == 1 { items.pop() } else { None }
}
