//! Video library loading
//!
//! Reads the flat `videos.txt` catalog format:
//!
//! ```text
//! Funny Dogs | funny_dogs_video_id | #dog , #animal
//! ```
//!
//! One video per line, fields separated by `|`, tags separated by `,`.

mod parser;

pub use parser::{parse_catalog, parse_line};

use crate::model::Catalog;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Catalog shipped with the binary, used when no file is given
const DEFAULT_VIDEOS: &str = include_str!("videos.txt");

/// Load a catalog from a `videos.txt` style file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    log::info!("Loading video catalog from {:?}", path);

    let file =
        File::open(path).with_context(|| format!("Failed to open video catalog: {:?}", path))?;
    let catalog = parse_catalog(BufReader::new(file))
        .with_context(|| format!("Failed to read video catalog: {:?}", path))?;

    log::info!("Loaded catalog: {} videos", catalog.len());
    Ok(catalog)
}

/// The built-in catalog
pub fn default_catalog() -> Catalog {
    let videos = DEFAULT_VIDEOS.lines().filter_map(parse_line);
    Catalog::new(videos)
}
