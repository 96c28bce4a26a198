use super::Video;
use std::collections::HashMap;

/// Immutable set of videos, indexed by ID, enumerated in load order
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All videos in the order they were loaded
    videos: Vec<Video>,

    /// Position of each video in `videos`, by ID
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from videos in load order.
    ///
    /// Duplicate IDs keep the first occurrence.
    pub fn new(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut catalog = Self {
            videos: Vec::new(),
            index: HashMap::new(),
        };

        for video in videos {
            if catalog.index.contains_key(&video.id) {
                log::warn!("Duplicate video id {:?}, keeping the first entry", video.id);
                continue;
            }
            catalog.index.insert(video.id.clone(), catalog.videos.len());
            catalog.videos.push(video);
        }

        catalog
    }

    /// Get a video by ID
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&i| &self.videos[i])
    }

    /// All videos, in stable load order
    pub fn all(&self) -> &[Video] {
        &self.videos
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
