use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a deck
///
/// Navigation itself never fails; out-of-range requests are ignored.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("deck contains no slides")]
    EmptyDeck,

    #[error("can't read deck file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid deck: {0}")]
    Parse(#[from] serde_json::Error),
}
