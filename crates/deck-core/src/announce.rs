//! Accessibility announcements for slide changes

use parking_lot::RwLock;
use tracing::debug;

/// Identifier of the announcement region
pub const ANNOUNCEMENT_REGION_ID: &str = "slide-announcement";

/// Polite output region read by screen readers
///
/// Updates are announced once the user is idle, never interrupting. Created on
/// the first render pass and reused for the rest of the session.
#[derive(Debug)]
pub struct LiveRegion {
    id: &'static str,
    text: RwLock<String>,
}

impl LiveRegion {
    pub fn new(id: &'static str) -> Self {
        debug!(id, "live region created");
        Self {
            id,
            text: RwLock::new(String::new()),
        }
    }

    /// The region used for slide changes
    pub fn polite() -> Self {
        Self::new(ANNOUNCEMENT_REGION_ID)
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Replace the region's text
    pub fn announce(&self, message: &str) {
        let mut text = self.text.write();
        text.clear();
        text.push_str(message);
    }

    /// Current text of the region
    pub fn text(&self) -> String {
        self.text.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announce_replaces_text() {
        let region = LiveRegion::polite();
        assert_eq!(region.id(), "slide-announcement");
        assert_eq!(region.text(), "");

        region.announce("Intro. Slide 1 of 2");
        region.announce("Outro. Slide 2 of 2");
        assert_eq!(region.text(), "Outro. Slide 2 of 2");
    }
}
