//! Slide navigation: the cursor state machine and the state it exposes to renderers

use serde::{Serialize, Deserialize};

use crate::slides::SlideSequence;

mod engine;
mod position;
mod subscriber;

pub use engine::SlideNavigator;
pub use position::SlidePosition;
pub use subscriber::NavigationSubscriber;

/// Output of a render pass, handed to every subscriber
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationContext {
    /// The active slide
    pub position: SlidePosition,

    /// Number of slides in the deck
    pub total_slides: usize,

    /// Display title of the active slide
    pub title: String,

    /// "current / total" counter, 1-based
    pub counter: String,

    /// Previous control is enabled (false on the first slide)
    pub previous_enabled: bool,

    /// Next control is enabled (false on the last slide)
    pub next_enabled: bool,

    /// Text for the accessibility live region
    pub announcement: String,
}

impl NavigationContext {
    pub(crate) fn render(position: SlidePosition, slides: &SlideSequence) -> Self {
        let total_slides = slides.len();
        let title = slides.title(position.index());
        let announcement = format!(
            "{}. Slide {} of {}",
            title,
            position.ordinal(),
            total_slides
        );

        Self {
            position,
            total_slides,
            counter: format!("{} / {}", position.ordinal(), total_slides),
            previous_enabled: !position.is_first(),
            next_enabled: !position.is_last(total_slides),
            title,
            announcement,
        }
    }

    /// Whether the slide at `index` is the one on screen
    pub fn is_visible(&self, index: usize) -> bool {
        self.position.index() == index
    }
}
