use serde::{Deserialize, Deserializer};

mod photo;
mod video;

pub use photo::{CuratedResult, Photo, PhotoSource, SearchResults};
pub use video::{PopularVideos, Video, VideoFiles, VideoPictures, VideoSearchResult};

/// Reads an explicit `null` as the zero value, the same as a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
