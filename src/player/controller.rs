//! The video player: current video, pause state, playlists and flags

use super::config::RandomPolicy;
use super::error::{Outcome, PlayerError};
use super::input::SelectionSource;
use super::output::Console;
use crate::model::{Catalog, Playlist, Video};
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Owns all mutable player state and prints a status line for every
/// operation it performs.
pub struct Controller<W: Write> {
    catalog: Catalog,
    out: Console<W>,
    random_policy: RandomPolicy,

    /// ID of the video in the "now playing" slot
    current: Option<String>,
    paused: bool,

    /// Playlists keyed by lower-cased name, so iteration is name order
    playlists: BTreeMap<String, Playlist>,

    /// Flag reasons by video ID
    flags: HashMap<String, String>,
}

impl<W: Write> Controller<W> {
    /// Create a player over `catalog`, printing to `sink`
    pub fn new(catalog: Catalog, sink: W) -> Self {
        Self {
            catalog,
            out: Console::new(sink),
            random_policy: RandomPolicy::default(),
            current: None,
            paused: false,
            playlists: BTreeMap::new(),
            flags: HashMap::new(),
        }
    }

    /// Set random selection policy
    pub fn with_random_policy(mut self, policy: RandomPolicy) -> Self {
        self.random_policy = policy;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The video in the "now playing" slot, paused or not
    pub fn current_video(&self) -> Option<&Video> {
        self.current.as_deref().and_then(|id| self.catalog.get(id))
    }

    pub fn is_paused(&self) -> bool {
        self.current.is_some() && self.paused
    }

    /// Look up a playlist by name, ignoring case
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&name.to_lowercase())
    }

    /// Flag reason for a video, if it is flagged
    pub fn flag_reason(&self, video_id: &str) -> Option<&str> {
        self.flags.get(video_id).map(String::as_str)
    }

    pub fn number_of_videos(&mut self) -> Outcome {
        let count = self.catalog.len();
        self.out.line(format_args!("{} videos in the library", count));
        Ok(())
    }

    /// List every video by title, flagged ones annotated
    pub fn show_all_videos(&mut self) -> Outcome {
        self.out.line("Here's a list of all available videos:");

        let mut videos: Vec<&Video> = self.catalog.all().iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));

        for video in videos {
            self.out
                .line(format_args!("  {}", describe(video, &self.flags)));
        }
        Ok(())
    }

    /// Play a video, stopping whatever is playing first.
    ///
    /// Replaying the current video stops and restarts it.
    pub fn play(&mut self, video_id: &str) -> Outcome {
        let context = "Cannot play video";

        let Some(video) = self.catalog.get(video_id) else {
            return self.out.fail(context, PlayerError::VideoNotFound);
        };
        if let Some(reason) = self.flags.get(video_id) {
            let err = PlayerError::Flagged {
                reason: reason.clone(),
            };
            return self.out.fail(context, err);
        }
        let title = video.title.clone();

        self.stop_current();

        log::debug!("Playing {}", video_id);
        self.out.line(format_args!("Playing video: {}", title));
        self.current = Some(video_id.to_string());
        self.paused = false;
        Ok(())
    }

    pub fn stop(&mut self) -> Outcome {
        if self.stop_current() {
            Ok(())
        } else {
            self.out
                .fail("Cannot stop video", PlayerError::NoVideoPlaying)
        }
    }

    /// Play an unflagged video chosen by the configured policy
    pub fn play_random(&mut self) -> Outcome {
        let candidates: Vec<&Video> = self
            .catalog
            .all()
            .iter()
            .filter(|video| !self.flags.contains_key(&video.id))
            .collect();

        let chosen = match self.random_policy {
            RandomPolicy::First => candidates.first(),
            RandomPolicy::Random => candidates.choose(&mut rand::thread_rng()),
        };

        let Some(video) = chosen else {
            self.out.line("No videos available");
            return Err(PlayerError::NoVideosAvailable);
        };

        let video_id = video.id.clone();
        self.play(&video_id)
    }

    pub fn pause(&mut self) -> Outcome {
        let Some(video) = self.current.as_deref().and_then(|id| self.catalog.get(id)) else {
            return self
                .out
                .fail("Cannot pause video", PlayerError::NoVideoPlaying);
        };

        // Informational only: the video stays paused
        if self.paused {
            self.out
                .line(format_args!("{}: {}", PlayerError::AlreadyPaused, video.title));
            return Ok(());
        }

        self.paused = true;
        self.out.line(format_args!("Pausing video: {}", video.title));
        Ok(())
    }

    /// Resume a paused video
    pub fn resume(&mut self) -> Outcome {
        let context = "Cannot continue video";

        let Some(video) = self.current.as_deref().and_then(|id| self.catalog.get(id)) else {
            return self.out.fail(context, PlayerError::NoVideoPlaying);
        };
        if !self.paused {
            return self.out.fail(context, PlayerError::NotPaused);
        }

        self.paused = false;
        self.out
            .line(format_args!("Continuing video: {}", video.title));
        Ok(())
    }

    pub fn show_playing(&mut self) -> Outcome {
        match self.current.as_deref().and_then(|id| self.catalog.get(id)) {
            None => self.out.line("No video is currently playing"),
            Some(video) if self.paused => self
                .out
                .line(format_args!("Currently playing: {} - PAUSED", video)),
            Some(video) => self.out.line(format_args!("Currently playing: {}", video)),
        }
        Ok(())
    }

    pub fn create_playlist(&mut self, playlist_name: &str) -> Outcome {
        let playlist = Playlist::new(playlist_name.to_string());
        let key = playlist.key();

        if self.playlists.contains_key(&key) {
            return self
                .out
                .fail("Cannot create playlist", PlayerError::DuplicateName);
        }

        self.playlists.insert(key, playlist);
        self.out.line(format_args!(
            "Successfully created new playlist: {}",
            playlist_name
        ));
        Ok(())
    }

    pub fn add_to_playlist(&mut self, playlist_name: &str, video_id: &str) -> Outcome {
        let context = format!("Cannot add video to {}", playlist_name);

        let Some(playlist) = self.playlists.get_mut(&playlist_name.to_lowercase()) else {
            return self.out.fail(&context, PlayerError::PlaylistNotFound);
        };
        let Some(video) = self.catalog.get(video_id) else {
            return self.out.fail(&context, PlayerError::VideoNotFound);
        };
        if let Some(reason) = self.flags.get(video_id) {
            let err = PlayerError::Flagged {
                reason: reason.clone(),
            };
            return self.out.fail(&context, err);
        }
        if !playlist.add_video(video_id) {
            return self.out.fail(&context, PlayerError::AlreadyInPlaylist);
        }

        self.out.line(format_args!(
            "Added video to {}: {}",
            playlist_name, video.title
        ));
        Ok(())
    }

    pub fn remove_from_playlist(&mut self, playlist_name: &str, video_id: &str) -> Outcome {
        let context = format!("Cannot remove video from {}", playlist_name);

        let Some(playlist) = self.playlists.get_mut(&playlist_name.to_lowercase()) else {
            return self.out.fail(&context, PlayerError::PlaylistNotFound);
        };
        let Some(video) = self.catalog.get(video_id) else {
            return self.out.fail(&context, PlayerError::VideoNotFound);
        };
        if !playlist.remove_video(video_id) {
            return self.out.fail(&context, PlayerError::NotInPlaylist);
        }

        self.out.line(format_args!(
            "Removed video from {}: {}",
            playlist_name, video.title
        ));
        Ok(())
    }

    /// Empty a playlist but keep it
    pub fn clear_playlist(&mut self, playlist_name: &str) -> Outcome {
        let Some(playlist) = self.playlists.get_mut(&playlist_name.to_lowercase()) else {
            let context = format!("Cannot clear playlist {}", playlist_name);
            return self.out.fail(&context, PlayerError::PlaylistNotFound);
        };

        playlist.clear();
        self.out.line(format_args!(
            "Successfully removed all videos from {}",
            playlist_name
        ));
        Ok(())
    }

    pub fn delete_playlist(&mut self, playlist_name: &str) -> Outcome {
        if self
            .playlists
            .remove(&playlist_name.to_lowercase())
            .is_none()
        {
            let context = format!("Cannot delete playlist {}", playlist_name);
            return self.out.fail(&context, PlayerError::PlaylistNotFound);
        }

        self.out
            .line(format_args!("Deleted playlist: {}", playlist_name));
        Ok(())
    }

    /// List playlist display names, ordered by lower-cased name
    pub fn show_all_playlists(&mut self) -> Outcome {
        if self.playlists.is_empty() {
            self.out.line("No playlists exist yet");
            return Ok(());
        }

        self.out.line("Showing all playlists:");
        for playlist in self.playlists.values() {
            self.out.line(format_args!("  {}", playlist.name));
        }
        Ok(())
    }

    pub fn show_playlist(&mut self, playlist_name: &str) -> Outcome {
        let Some(playlist) = self.playlists.get(&playlist_name.to_lowercase()) else {
            let context = format!("Cannot show playlist {}", playlist_name);
            return self.out.fail(&context, PlayerError::PlaylistNotFound);
        };

        self.out
            .line(format_args!("Showing playlist: {}", playlist_name));
        if playlist.is_empty() {
            self.out.line("  No videos here yet");
            return Ok(());
        }

        for video in playlist.video_ids().filter_map(|id| self.catalog.get(id)) {
            self.out
                .line(format_args!("  {}", describe(video, &self.flags)));
        }
        Ok(())
    }

    /// Search unflagged videos whose title contains `term`, ignoring case
    pub fn search_videos<S: SelectionSource>(&mut self, term: &str, input: &mut S) -> Outcome {
        self.search_with(term, input, |video| video.title_contains(term))
    }

    /// Search unflagged videos carrying `tag`, ignoring case
    pub fn search_videos_with_tag<S: SelectionSource>(
        &mut self,
        tag: &str,
        input: &mut S,
    ) -> Outcome {
        self.search_with(tag, input, |video| video.has_tag(tag))
    }

    /// Flag a video, stopping it first if it is playing.
    ///
    /// An empty or blank reason is recorded as [`DEFAULT_FLAG_REASON`].
    pub fn flag_video(&mut self, video_id: &str, reason: &str) -> Outcome {
        let context = "Cannot flag video";

        if self.flags.contains_key(video_id) {
            return self.out.fail(context, PlayerError::AlreadyFlagged);
        }
        let Some(video) = self.catalog.get(video_id) else {
            return self.out.fail(context, PlayerError::VideoNotFound);
        };
        let title = video.title.clone();

        if self.current.as_deref() == Some(video_id) {
            self.stop_current();
        }

        let reason = if reason.trim().is_empty() {
            DEFAULT_FLAG_REASON
        } else {
            reason
        };
        self.flags.insert(video_id.to_string(), reason.to_string());
        self.out.line(format_args!(
            "Successfully flagged video: {} (reason: {})",
            title, reason
        ));
        Ok(())
    }

    /// Remove a flag
    pub fn allow_video(&mut self, video_id: &str) -> Outcome {
        let context = "Cannot remove flag from video";

        let Some(video) = self.catalog.get(video_id) else {
            return self.out.fail(context, PlayerError::VideoNotFound);
        };
        if self.flags.remove(video_id).is_none() {
            return self.out.fail(context, PlayerError::NotFlagged);
        }

        self.out.line(format_args!(
            "Successfully removed flag from video: {}",
            video.title
        ));
        Ok(())
    }

    /// Clear the "now playing" slot. Returns false if it was already empty.
    fn stop_current(&mut self) -> bool {
        let Some(video_id) = self.current.take() else {
            return false;
        };
        self.paused = false;

        let title = self
            .catalog
            .get(&video_id)
            .map_or(video_id.as_str(), |video| video.title.as_str());
        log::debug!("Stopping {}", video_id);
        self.out.line(format_args!("Stopping video: {}", title));
        true
    }

    fn search_with<S, F>(&mut self, term: &str, input: &mut S, matches: F) -> Outcome
    where
        S: SelectionSource,
        F: Fn(&Video) -> bool,
    {
        let mut results: Vec<&Video> = self
            .catalog
            .all()
            .iter()
            .filter(|video| !self.flags.contains_key(&video.id))
            .filter(|&video| matches(video))
            .collect();
        results.sort_by(|a, b| a.title.cmp(&b.title));

        if results.is_empty() {
            self.out.line(format_args!("No search results for {}", term));
            return Err(PlayerError::NoResults);
        }

        self.out
            .line(format_args!("Here are the results for {}:", term));
        for (number, video) in results.iter().enumerate() {
            self.out.line(format_args!("  {}) {}", number + 1, video));
        }
        self.out.line(
            "Would you like to play any of the above? If yes, specify the number of the video.",
        );
        self.out
            .line("If your answer is not a valid number, we will assume it's a no.");

        let selection = input
            .read_selection()
            .and_then(|answer| answer.trim().parse::<usize>().ok())
            .filter(|number| (1..=results.len()).contains(number));

        match selection {
            Some(number) => {
                let video_id = results[number - 1].id.clone();
                self.play(&video_id)
            }
            None => {
                log::debug!("No video selected from {} results", results.len());
                Ok(())
            }
        }
    }
}

impl Controller<Vec<u8>> {
    /// Drain everything printed so far
    pub fn take_output(&mut self) -> String {
        let bytes = std::mem::take(&mut self.out.sink);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// `TITLE (ID) [TAGS]`, with the flag reason appended for flagged videos
fn describe(video: &Video, flags: &HashMap<String, String>) -> String {
    match flags.get(&video.id) {
        Some(reason) => format!("{} - FLAGGED (reason: {})", video, reason),
        None => video.to_string(),
    }
}
