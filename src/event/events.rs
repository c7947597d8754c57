use std::path::PathBuf;

/// Messages delivered to the UI loop from outside it.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The transport started or stopped; ask it which.
    TransportChanged,
    /// The file chooser closed, with the selection if there was one.
    FileChosen(Option<PathBuf>),
}
