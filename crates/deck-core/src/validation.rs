//! Content checks for common presentation problems
//!
//! Issues are diagnostics only; a deck with issues still presents normally.

use std::fmt;

use crate::settings::DeckSettings;
use crate::slides::Slide;

/// Character count above which a slide is considered too dense
pub const DEFAULT_MAX_SLIDE_TEXT: usize = 1500;

/// What is wrong with a slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    TooMuchText { chars: usize },
    MissingAltText { source: String },
}

/// A problem found on one slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    /// 0-based slide index
    pub slide: usize,
    pub kind: IssueKind,
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::TooMuchText { .. } => {
                write!(f, "Slide {}: Might have too much text", self.slide + 1)
            }
            IssueKind::MissingAltText { .. } => {
                write!(f, "Slide {}: Missing alt text for image", self.slide + 1)
            }
        }
    }
}

/// Check every slide, in order
pub fn validate_slides(slides: &[Slide], settings: &DeckSettings) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    for (index, slide) in slides.iter().enumerate() {
        let chars = slide.text_len();
        if chars > settings.max_slide_text {
            issues.push(ContentIssue {
                slide: index,
                kind: IssueKind::TooMuchText { chars },
            });
        }

        for (source, alt) in slide.images() {
            if alt.map_or(true, |alt| alt.trim().is_empty()) {
                issues.push(ContentIssue {
                    slide: index,
                    kind: IssueKind::MissingAltText {
                        source: source.to_string(),
                    },
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::Block;

    fn image(alt: Option<&str>) -> Block {
        Block::Image {
            source: "chart.png".to_string(),
            alt: alt.map(str::to_string),
        }
    }

    #[test]
    fn test_clean_deck_has_no_issues() {
        let slides = vec![
            Slide::new("Intro").with_block(image(Some("Revenue chart"))),
            Slide::new("Outro"),
        ];
        assert!(validate_slides(&slides, &DeckSettings::default()).is_empty());
    }

    #[test]
    fn test_reports_long_text_and_missing_alt() {
        let slides = vec![
            Slide::new("Fine"),
            Slide::new("Wall of text").with_block(Block::Text("x".repeat(1600))),
            Slide::new("Pictures")
                .with_block(image(None))
                .with_block(image(Some("  "))),
        ];

        let issues = validate_slides(&slides, &DeckSettings::default());
        let messages: Vec<String> = issues.iter().map(ToString::to_string).collect();

        assert_eq!(
            messages,
            vec![
                "Slide 2: Might have too much text",
                "Slide 3: Missing alt text for image",
                "Slide 3: Missing alt text for image",
            ]
        );
    }

    #[test]
    fn test_limit_is_configurable() {
        let slides = vec![Slide::new("Short").with_block(Block::Text("x".repeat(40)))];
        let settings = DeckSettings {
            max_slide_text: 20,
            ..Default::default()
        };

        let issues = validate_slides(&slides, &settings);
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0].kind, IssueKind::TooMuchText { chars: 45 }));
    }
}
