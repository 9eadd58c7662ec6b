pub mod pexels;

pub use pexels::{
    Client, Config, CuratedResult, Error, Photo, PhotoSource, PopularVideos, Result,
    SearchResults, Video, VideoFiles, VideoPictures, VideoSearchResult,
};
