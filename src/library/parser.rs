//! `videos.txt` line parser

use crate::model::{Catalog, Video};
use anyhow::Result;
use std::io::BufRead;

/// Parse a whole catalog, skipping blank and malformed lines
pub fn parse_catalog<R: BufRead>(reader: R) -> Result<Catalog> {
    let mut videos = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Some(video) => videos.push(video),
            None => log::warn!("Skipping malformed catalog line {}: {:?}", number + 1, line),
        }
    }

    log::debug!("Parsed {} videos", videos.len());
    Ok(Catalog::new(videos))
}

/// Parse one `TITLE | ID | TAG , TAG` line.
///
/// The tag field may be missing or empty. Returns None when the title or
/// ID is missing.
pub fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().filter(|s| !s.is_empty())?;
    let id = fields.next().filter(|s| !s.is_empty())?;
    let tags = fields
        .next()
        .map(|field| {
            field
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(id, title, tags))
}
