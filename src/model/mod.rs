//! Data model for the video catalog
//!
//! These structures are independent of both the catalog file format
//! and the text the player prints.

mod catalog;
mod playlist;
mod video;

pub use catalog::Catalog;
pub use playlist::Playlist;
pub use video::Video;
