//! Deck files

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::DeckError;
use crate::settings::DeckSettings;
use crate::slides::SlideSequence;

/// A presentation: slides plus the settings to present them with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub settings: DeckSettings,

    pub slides: SlideSequence,
}

impl Deck {
    /// Parse a deck from JSON
    pub fn from_json_str(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a deck file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let deck = Self::from_json_str(&json)?;
        info!(path = %path.display(), slides = deck.slides.len(), "deck loaded");
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::Block;
    use std::io::Write;

    const DECK_JSON: &str = r#"{
        "title": "Quarterly Review",
        "settings": { "swipe_threshold": 80.0 },
        "slides": [
            { "title": "Agenda", "blocks": [{ "bullets": ["Results", "Outlook"] }] },
            { "blocks": [{ "image": { "source": "chart.png", "alt": "Revenue" } }],
              "notes": "Pause for questions" }
        ]
    }"#;

    #[test]
    fn test_parse_deck() {
        let deck = Deck::from_json_str(DECK_JSON).unwrap();

        assert_eq!(deck.title.as_deref(), Some("Quarterly Review"));
        assert_eq!(deck.settings.swipe_threshold, 80.0);
        assert!(!deck.settings.show_progress_dots);
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides.title(1), "Slide 2");
        assert_eq!(deck.slides.notes(1), "Pause for questions");
        assert_eq!(
            deck.slides.get(0).unwrap().blocks[0],
            Block::Bullets(vec!["Results".to_string(), "Outlook".to_string()])
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DECK_JSON.as_bytes()).unwrap();

        let deck = Deck::load(file.path()).unwrap();
        assert_eq!(deck.slides.len(), 2);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = Deck::load(&path).unwrap_err();
        assert!(matches!(err, DeckError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Deck::from_json_str("{ \"slides\": 3 }").unwrap_err();
        assert!(matches!(err, DeckError::Parse(_)));
    }
}
