//! Video Player - an in-memory video catalog simulator
//!
//! Models a small library of videos, a single "now playing" slot,
//! named playlists and video flagging, driven by text commands.

pub mod command;
pub mod library;
pub mod model;
pub mod player;

pub use command::Command;
pub use player::{Controller, PlayerConfig, PlayerError};
