use super::error::{Outcome, PlayerError};
use std::fmt;
use std::io::Write;

/// Line-oriented status output
#[derive(Debug)]
pub(crate) struct Console<W> {
    pub(crate) sink: W,
}

impl<W: Write> Console<W> {
    pub(crate) fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write one status line. Write failures are logged, not returned.
    pub(crate) fn line(&mut self, text: impl fmt::Display) {
        if let Err(e) = writeln!(self.sink, "{}", text) {
            log::warn!("Failed to write player output: {}", e);
        }
    }

    /// Report `context: reason` and hand the error back
    pub(crate) fn fail(&mut self, context: &str, err: PlayerError) -> Outcome {
        log::debug!("{}: {:?}", context, err);
        self.line(format_args!("{}: {}", context, err));
        Err(err)
    }
}
