use thiserror::Error;

/// Why a player operation was refused.
///
/// The message is the reason fragment printed after the operation's
/// `Cannot ...:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Video does not exist")]
    VideoNotFound,
    #[error("Playlist does not exist")]
    PlaylistNotFound,
    /// The video is flagged and cannot be played or added.
    #[error("Video is currently flagged (reason: {reason})")]
    Flagged { reason: String },
    #[error("A playlist with the same name already exists")]
    DuplicateName,
    #[error("Video is already flagged")]
    AlreadyFlagged,
    #[error("Video is not flagged")]
    NotFlagged,
    /// Informational: pausing again leaves the state unchanged.
    #[error("Video already paused")]
    AlreadyPaused,
    #[error("Video is not paused")]
    NotPaused,
    #[error("No video is currently playing")]
    NoVideoPlaying,
    #[error("Video already added")]
    AlreadyInPlaylist,
    #[error("Video is not in playlist")]
    NotInPlaylist,
    #[error("No search results")]
    NoResults,
    #[error("No videos available")]
    NoVideosAvailable,
}

/// Result of a player operation, reported after its lines were printed
pub type Outcome = Result<(), PlayerError>;
