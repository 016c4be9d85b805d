//! Per-deck presentation settings

use serde::{Deserialize, Serialize};

use crate::input::swipe::DEFAULT_SWIPE_THRESHOLD;
use crate::validation::DEFAULT_MAX_SLIDE_TEXT;

/// Settings read from the `settings` table of a deck file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSettings {
    /// Minimum horizontal travel for a touch gesture to count as a swipe
    pub swipe_threshold: f32,

    /// Character count above which a slide is reported as too dense
    pub max_slide_text: usize,

    /// Show the row of progress dots under the slide
    pub show_progress_dots: bool,

    /// Open the presenter notes panel at startup
    pub show_notes: bool,

    /// Treat primary-button mouse drags as swipes
    pub mouse_swipe: bool,

    /// Use the dark palette
    pub dark_mode: bool,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            max_slide_text: DEFAULT_MAX_SLIDE_TEXT,
            show_progress_dots: false,
            show_notes: false,
            mouse_swipe: false,
            dark_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: DeckSettings =
            serde_json::from_str(r#"{"show_progress_dots": true}"#).unwrap();

        assert!(settings.show_progress_dots);
        assert_eq!(settings.swipe_threshold, 50.0);
        assert_eq!(settings.max_slide_text, 1500);
    }
}
