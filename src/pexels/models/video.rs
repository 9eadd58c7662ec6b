use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single encoding of a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoFiles {
    #[serde(deserialize_with = "super::nullable")]
    id: u64,
    #[serde(deserialize_with = "super::nullable")]
    quality: String,
    #[serde(deserialize_with = "super::nullable")]
    file_type: String,
    #[serde(deserialize_with = "super::nullable")]
    width: u32,
    #[serde(deserialize_with = "super::nullable")]
    height: u32,
    #[serde(deserialize_with = "super::nullable")]
    link: String,
}

impl VideoFiles {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// `"hd"`, `"sd"` or `"hls"`.
    pub fn quality(&self) -> &str {
        &self.quality
    }

    /// MIME type, e.g. `video/mp4`.
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPictures {
    #[serde(deserialize_with = "super::nullable")]
    id: u64,
    #[serde(deserialize_with = "super::nullable")]
    picture: String,
    #[serde(deserialize_with = "super::nullable")]
    nr: u32,
}

impl VideoPictures {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn picture(&self) -> &str {
        &self.picture
    }

    pub fn nr(&self) -> u32 {
        self.nr
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    #[serde(deserialize_with = "super::nullable")]
    id: u64,
    #[serde(deserialize_with = "super::nullable")]
    width: u32,
    #[serde(deserialize_with = "super::nullable")]
    height: u32,
    #[serde(deserialize_with = "super::nullable")]
    url: String,
    #[serde(deserialize_with = "super::nullable")]
    image: String,
    full_res: Option<Value>,
    #[serde(deserialize_with = "super::nullable")]
    duration: f64,
    #[serde(deserialize_with = "super::nullable")]
    video_files: Vec<VideoFiles>,
    #[serde(deserialize_with = "super::nullable")]
    video_pictures: Vec<VideoPictures>,
}

impl Video {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Preview image.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn full_res(&self) -> Option<&Value> {
        self.full_res.as_ref()
    }

    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn video_files(&self) -> &[VideoFiles] {
        &self.video_files
    }

    pub fn video_pictures(&self) -> &[VideoPictures] {
        &self.video_pictures
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSearchResult {
    #[serde(deserialize_with = "super::nullable")]
    page: u32,
    #[serde(deserialize_with = "super::nullable")]
    per_page: u32,
    #[serde(deserialize_with = "super::nullable")]
    total_results: u32,
    next_page: Option<String>,
    #[serde(deserialize_with = "super::nullable")]
    videos: Vec<Video>,
}

impl VideoSearchResult {
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

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn into_videos(self) -> Vec<Video> {
        self.videos
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularVideos {
    #[serde(deserialize_with = "super::nullable")]
    page: u32,
    #[serde(deserialize_with = "super::nullable")]
    per_page: u32,
    #[serde(deserialize_with = "super::nullable")]
    total_results: u32,
    #[serde(deserialize_with = "super::nullable")]
    url: String,
    next_page: Option<String>,
    #[serde(deserialize_with = "super::nullable")]
    videos: Vec<Video>,
}

impl PopularVideos {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_results(&self) -> u32 {
        self.total_results
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref().filter(|url| !url.is_empty())
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn into_videos(self) -> Vec<Video> {
        self.videos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH: &str = r#"{
        "page": 2,
        "per_page": 1,
        "total_results": 7,
        "videos": [{
            "id": 2499611,
            "width": 1080,
            "height": 1920,
            "url": "https://www.pexels.com/video/2499611/",
            "image": "https://images.pexels.com/videos/2499611/preview.jpg",
            "full_res": null,
            "duration": 22.5,
            "video_files": [{
                "id": 125004,
                "quality": "hd",
                "file_type": "video/mp4",
                "width": 1080,
                "height": 1920,
                "link": "https://player.vimeo.com/external/342571552.hd.mp4"
            }],
            "video_pictures": [
                {"id": 308178, "picture": "https://static-videos.pexels.com/0.jpg", "nr": 0},
                {"id": 308179, "picture": "https://static-videos.pexels.com/1.jpg", "nr": 1}
            ]
        }]
    }"#;

    #[test]
    fn video_search_result_decodes() {
        let results: VideoSearchResult = serde_json::from_str(SEARCH).unwrap();

        assert_eq!(results.page(), 2);
        assert_eq!(results.per_page(), 1);
        assert_eq!(results.total_results(), 7);
        assert_eq!(results.next_page(), None);

        let video = &results.videos()[0];
        assert_eq!(video.id(), 2499611);
        assert_eq!(video.duration(), 22.5);
        assert_eq!(video.full_res(), None);

        let file = &video.video_files()[0];
        assert_eq!(file.quality(), "hd");
        assert_eq!(file.file_type(), "video/mp4");
        assert_eq!((file.width(), file.height()), (1080, 1920));

        let nrs: Vec<_> = video.video_pictures().iter().map(|p| p.nr()).collect();
        assert_eq!(nrs, [0, 1]);
    }

    #[test]
    fn popular_videos_keep_url() {
        let results: PopularVideos = serde_json::from_str(
            r#"{"page": 1, "per_page": 1, "total_results": 10, "url": "https://www.pexels.com/videos/", "videos": []}"#,
        )
        .unwrap();

        assert_eq!(results.url(), "https://www.pexels.com/videos/");
        assert_eq!(results.total_results(), 10);
        assert!(results.into_videos().is_empty());
    }

    #[test]
    fn hls_file_with_null_dimensions_decodes() {
        let file: VideoFiles = serde_json::from_str(
            r#"{"id": 1, "quality": "hls", "file_type": "video/mp4", "width": null, "height": null, "link": "l"}"#,
        )
        .unwrap();

        assert_eq!(file.quality(), "hls");
        assert_eq!((file.width(), file.height()), (0, 0));
        assert_eq!(file.link(), "l");

        let file: VideoFiles = serde_json::from_str(r#"{"id": 2, "quality": null}"#).unwrap();
        assert_eq!(file.quality(), "");
    }

    #[test]
    fn one_null_file_does_not_fail_the_page() {
        let results: PopularVideos = serde_json::from_str(
            r#"{"page": 1, "per_page": 1, "url": null, "videos": [{
                "id": 9,
                "duration": null,
                "video_files": [
                    {"id": 1, "quality": "hd", "width": 1920, "height": 1080},
                    {"id": 2, "quality": "hls", "width": null, "height": null}
                ],
                "video_pictures": [{"id": 4, "picture": null, "nr": null}]
            }]}"#,
        )
        .unwrap();

        let video = &results.videos()[0];
        assert_eq!(results.url(), "");
        assert_eq!(video.duration(), 0.0);
        assert_eq!(video.video_files().len(), 2);
        assert_eq!(video.video_files()[1].width(), 0);
        assert_eq!(video.video_pictures()[0].nr(), 0);
    }

    #[test]
    fn integer_duration_is_accepted() {
        let video: Video = serde_json::from_str(r#"{"duration": 12}"#).unwrap();
        assert_eq!(video.duration(), 12.0);
    }
}
