use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A user-defined playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Display name, case preserved as given at creation
    pub name: String,

    /// Video IDs in insertion order, each at most once
    videos: IndexSet<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            videos: IndexSet::new(),
        }
    }

    /// Lookup key for this playlist (names compare case-insensitively)
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Append a video. Returns false if it was already present.
    pub fn add_video(&mut self, video_id: &str) -> bool {
        self.videos.insert(video_id.to_string())
    }

    /// Remove a video, keeping the order of the rest. Returns false if absent.
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        self.videos.shift_remove(video_id)
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.contains(video_id)
    }

    pub fn clear(&mut self) {
        self.videos.clear();
    }

    /// Video IDs in display order
    pub fn video_ids(&self) -> impl Iterator<Item = &str> {
        self.videos.iter().map(String::as_str)
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
