use serde::{Serialize, Deserialize};

/// Cursor into the slide sequence (0-based)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlidePosition(pub usize);

impl SlidePosition {
    /// 0-based slide index
    pub fn index(self) -> usize {
        self.0
    }

    /// 1-based slide number, as shown to the audience
    pub fn ordinal(self) -> usize {
        self.0 + 1
    }

    pub fn is_first(self) -> bool {
        self.0 == 0
    }

    pub fn is_last(self, total_slides: usize) -> bool {
        self.0 + 1 >= total_slides
    }
}
