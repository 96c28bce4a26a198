//! Text command parsing and dispatch
//!
//! Commands are a case-insensitive keyword followed by whitespace-separated
//! arguments, e.g. `ADD_TO_PLAYLIST my_list funny_dogs_video_id`.

use crate::player::{Controller, Outcome, SelectionSource};
use std::io::Write;
use thiserror::Error;

/// Text printed for the HELP command
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all video from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

/// A parsed player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    /// Reason is the rest of the line, possibly empty
    FlagVideo { video_id: String, reason: String },
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Unknown keyword or wrong number of arguments
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Invalid,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (keyword.to_uppercase().as_str(), args.as_slice()) {
            ("NUMBER_OF_VIDEOS", []) => Command::NumberOfVideos,
            ("SHOW_ALL_VIDEOS", []) => Command::ShowAllVideos,
            ("PLAY", [id]) => Command::Play(id.to_string()),
            ("PLAY_RANDOM", []) => Command::PlayRandom,
            ("STOP", []) => Command::Stop,
            ("PAUSE", []) => Command::Pause,
            ("CONTINUE", []) => Command::Continue,
            ("SHOW_PLAYING", []) => Command::ShowPlaying,
            ("CREATE_PLAYLIST", [name]) => Command::CreatePlaylist(name.to_string()),
            ("ADD_TO_PLAYLIST", [name, id]) => Command::AddToPlaylist {
                playlist: name.to_string(),
                video_id: id.to_string(),
            },
            ("REMOVE_FROM_PLAYLIST", [name, id]) => Command::RemoveFromPlaylist {
                playlist: name.to_string(),
                video_id: id.to_string(),
            },
            ("CLEAR_PLAYLIST", [name]) => Command::ClearPlaylist(name.to_string()),
            ("DELETE_PLAYLIST", [name]) => Command::DeletePlaylist(name.to_string()),
            ("SHOW_PLAYLIST", [name]) => Command::ShowPlaylist(name.to_string()),
            ("SHOW_ALL_PLAYLISTS", []) => Command::ShowAllPlaylists,
            ("SEARCH_VIDEOS", [term]) => Command::SearchVideos(term.to_string()),
            ("SEARCH_VIDEOS_WITH_TAG", [tag]) => Command::SearchVideosWithTag(tag.to_string()),
            ("FLAG_VIDEO", [id, reason @ ..]) => Command::FlagVideo {
                video_id: id.to_string(),
                reason: reason.join(" "),
            },
            ("ALLOW_VIDEO", [id]) => Command::AllowVideo(id.to_string()),
            ("HELP", []) => Command::Help,
            ("EXIT", []) => Command::Exit,
            _ => return Err(CommandError::Invalid),
        };

        Ok(Some(command))
    }

    /// Run a player command.
    ///
    /// HELP and EXIT belong to the session loop and are no-ops here.
    pub fn run<W, S>(&self, player: &mut Controller<W>, input: &mut S) -> Outcome
    where
        W: Write,
        S: SelectionSource,
    {
        match self {
            Command::NumberOfVideos => player.number_of_videos(),
            Command::ShowAllVideos => player.show_all_videos(),
            Command::Play(id) => player.play(id),
            Command::PlayRandom => player.play_random(),
            Command::Stop => player.stop(),
            Command::Pause => player.pause(),
            Command::Continue => player.resume(),
            Command::ShowPlaying => player.show_playing(),
            Command::CreatePlaylist(name) => player.create_playlist(name),
            Command::AddToPlaylist { playlist, video_id } => {
                player.add_to_playlist(playlist, video_id)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                player.remove_from_playlist(playlist, video_id)
            }
            Command::ClearPlaylist(name) => player.clear_playlist(name),
            Command::DeletePlaylist(name) => player.delete_playlist(name),
            Command::ShowPlaylist(name) => player.show_playlist(name),
            Command::ShowAllPlaylists => player.show_all_playlists(),
            Command::SearchVideos(term) => player.search_videos(term, input),
            Command::SearchVideosWithTag(tag) => player.search_videos_with_tag(tag, input),
            Command::FlagVideo { video_id, reason } => player.flag_video(video_id, reason),
            Command::AllowVideo(id) => player.allow_video(id),
            Command::Help | Command::Exit => Ok(()),
        }
    }
}
