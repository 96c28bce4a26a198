//! Player configuration

use std::path::PathBuf;

/// Configuration for a player session
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// `videos.txt` style catalog to load (None = built-in catalog)
    pub catalog_path: Option<PathBuf>,

    /// How PLAY_RANDOM picks a video
    pub random_policy: RandomPolicy,
}

/// Selection policy for playing a random video.
///
/// Both policies only ever consider unflagged videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RandomPolicy {
    /// First unflagged video in catalog order
    First,

    /// Uniform choice among unflagged videos
    #[default]
    Random,
}

impl PlayerConfig {
    /// Create a configuration using the built-in catalog
    pub fn new() -> Self {
        Self {
            catalog_path: None,
            random_policy: RandomPolicy::default(),
        }
    }

    /// Load the catalog from a file instead
    pub fn with_catalog(mut self, path: PathBuf) -> Self {
        self.catalog_path = Some(path);
        self
    }

    /// Set random selection policy
    pub fn with_random_policy(mut self, policy: RandomPolicy) -> Self {
        self.random_policy = policy;
        self
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}
