use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSource {
    #[serde(deserialize_with = "super::nullable")]
    original: String,
    #[serde(deserialize_with = "super::nullable")]
    large: String,
    #[serde(deserialize_with = "super::nullable")]
    large2x: String,
    #[serde(deserialize_with = "super::nullable")]
    medium: String,
    #[serde(deserialize_with = "super::nullable")]
    small: String,
    #[serde(deserialize_with = "super::nullable")]
    portrait: String,
    // Older responses spell the key this way.
    #[serde(deserialize_with = "super::nullable", skip_serializing)]
    potrait: String,
    #[serde(deserialize_with = "super::nullable")]
    square: String,
    #[serde(deserialize_with = "super::nullable")]
    landscape: String,
    #[serde(deserialize_with = "super::nullable")]
    tiny: String,
}

impl PhotoSource {
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn large(&self) -> &str {
        &self.large
    }

    pub fn large2x(&self) -> &str {
        &self.large2x
    }

    pub fn medium(&self) -> &str {
        &self.medium
    }

    pub fn small(&self) -> &str {
        &self.small
    }

    pub fn portrait(&self) -> &str {
        if self.portrait.is_empty() {
            &self.potrait
        } else {
            &self.portrait
        }
    }

    pub fn square(&self) -> &str {
        &self.square
    }

    pub fn landscape(&self) -> &str {
        &self.landscape
    }

    pub fn tiny(&self) -> &str {
        &self.tiny
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    #[serde(deserialize_with = "super::nullable")]
    id: u64,
    #[serde(deserialize_with = "super::nullable")]
    width: u32,
    #[serde(deserialize_with = "super::nullable")]
    height: u32,
    #[serde(deserialize_with = "super::nullable")]
    url: String,
    #[serde(deserialize_with = "super::nullable")]
    photographer: String,
    #[serde(deserialize_with = "super::nullable")]
    photographer_url: String,
    #[serde(deserialize_with = "super::nullable")]
    src: PhotoSource,
}

impl Photo {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pexels page of the photo, not the image file.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn photographer(&self) -> &str {
        &self.photographer
    }

    pub fn photographer_url(&self) -> &str {
        &self.photographer_url
    }

    pub fn src(&self) -> &PhotoSource {
        &self.src
    }
}

/// One page of `/search` results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    #[serde(deserialize_with = "super::nullable")]
    page: u32,
    #[serde(deserialize_with = "super::nullable")]
    per_page: u32,
    #[serde(deserialize_with = "super::nullable")]
    total_results: u32,
    next_page: Option<String>,
    #[serde(deserialize_with = "super::nullable")]
    photos: Vec<Photo>,
}

impl SearchResults {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_results(&self) -> u32 {
        self.total_results
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref().filter(|url| !url.is_empty())
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn into_photos(self) -> Vec<Photo> {
        self.photos
    }
}

/// One page of `/curated` results. The API reports no total here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratedResult {
    #[serde(deserialize_with = "super::nullable")]
    page: u32,
    #[serde(deserialize_with = "super::nullable")]
    per_page: u32,
    next_page: Option<String>,
    #[serde(deserialize_with = "super::nullable")]
    photos: Vec<Photo>,
}

impl CuratedResult {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref().filter(|url| !url.is_empty())
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn into_photos(self) -> Vec<Photo> {
        self.photos
    }
}
