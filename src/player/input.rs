use std::io;

/// Source of the answer to the "play one of these?" prompt after a search.
///
/// Returns None on EOF or read failure, which counts as no selection.
pub trait SelectionSource {
    fn read_selection(&mut self) -> Option<String>;
}

/// Any line iterator works, e.g. `stdin.lock().lines()`
impl<I> SelectionSource for I
where
    I: Iterator<Item = io::Result<String>>,
{
    fn read_selection(&mut self) -> Option<String> {
        match self.next()? {
            Ok(line) => Some(line),
            Err(e) => {
                log::warn!("Failed to read selection: {}", e);
                None
            }
        }
    }
}
