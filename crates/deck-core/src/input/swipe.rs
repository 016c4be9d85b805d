//! Swipe gesture adapter
//!
//! A gesture is evaluated once, when it ends. It counts as a swipe only when
//! horizontal travel dominates vertical travel and exceeds the threshold.
//! Swiping right goes back, swiping left goes forward. The adapter only
//! observes touches; it never consumes or delays them.

use std::sync::Arc;
use tracing::{debug, trace};

use crate::navigation::SlideNavigator;

/// Minimum horizontal travel, in input coordinate units
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// A touch location
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Direction of a qualifying swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right: previous slide
    Right,
    /// Finger moved left: next slide
    Left,
}

/// Classify a completed gesture
pub fn classify_swipe(start: TouchPoint, end: TouchPoint, threshold: f32) -> Option<SwipeDirection> {
    let delta_x = end.x - start.x;
    let delta_y = end.y - start.y;

    if delta_x.abs() > delta_y.abs() && delta_x.abs() > threshold {
        if delta_x > 0.0 {
            Some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    } else {
        None
    }
}

/// Coordinates of the gesture in progress
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeGestureBuffer {
    pub start: Option<TouchPoint>,
    pub end: Option<TouchPoint>,
}

/// Touch adapter feeding swipes to the navigator
pub struct SwipeAdapter {
    navigator: Arc<SlideNavigator>,
    threshold: f32,
    buffer: SwipeGestureBuffer,
}

impl SwipeAdapter {
    pub fn new(navigator: Arc<SlideNavigator>) -> Self {
        Self {
            navigator,
            threshold: DEFAULT_SWIPE_THRESHOLD,
            buffer: SwipeGestureBuffer::default(),
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn buffer(&self) -> &SwipeGestureBuffer {
        &self.buffer
    }

    /// A gesture began; any previous gesture is forgotten
    pub fn touch_start(&mut self, point: TouchPoint) {
        self.buffer = SwipeGestureBuffer {
            start: Some(point),
            end: None,
        };
    }

    /// A gesture ended; evaluate it and navigate if it was a swipe
    ///
    /// An end without a recorded start is ignored.
    pub fn touch_end(&mut self, point: TouchPoint) -> Option<SwipeDirection> {
        self.buffer.end = Some(point);

        let Some(start) = self.buffer.start.take() else {
            trace!("gesture end without start ignored");
            return None;
        };

        let direction = classify_swipe(start, point, self.threshold);
        match direction {
            Some(SwipeDirection::Right) => {
                debug!(?start, end = ?point, "swipe right");
                self.navigator.previous();
            }
            Some(SwipeDirection::Left) => {
                debug!(?start, end = ?point, "swipe left");
                self.navigator.next();
            }
            None => trace!(?start, end = ?point, "gesture is not a swipe"),
        }

        direction
    }

    /// The platform abandoned the gesture
    pub fn touch_cancel(&mut self) {
        self.buffer = SwipeGestureBuffer::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::{Slide, SlideSequence};

    fn adapter(total: usize) -> (Arc<SlideNavigator>, SwipeAdapter) {
        let slides: SlideSequence = (0..total).map(|_| Slide::untitled()).collect();
        let navigator = Arc::new(SlideNavigator::new(slides).unwrap());
        (navigator.clone(), SwipeAdapter::new(navigator))
    }

    #[test]
    fn test_left_swipe_advances() {
        let (nav, mut swipe) = adapter(8);
        swipe.touch_start(TouchPoint::new(300.0, 100.0));

        let direction = swipe.touch_end(TouchPoint::new(200.0, 110.0));
        assert_eq!(direction, Some(SwipeDirection::Left));
        assert_eq!(nav.current_slide(), 1);
    }

    #[test]
    fn test_right_swipe_goes_back() {
        let (nav, mut swipe) = adapter(8);
        nav.go_to(4);
        swipe.touch_start(TouchPoint::new(100.0, 50.0));

        assert_eq!(swipe.touch_end(TouchPoint::new(260.0, 20.0)), Some(SwipeDirection::Right));
        assert_eq!(nav.current_slide(), 3);
    }

    #[test]
    fn test_vertical_gesture_is_ignored() {
        let (nav, mut swipe) = adapter(8);
        swipe.touch_start(TouchPoint::new(100.0, 0.0));

        assert_eq!(swipe.touch_end(TouchPoint::new(120.0, 200.0)), None);
        assert_eq!(nav.current_slide(), 0);
    }

    #[test]
    fn test_short_gesture_is_ignored() {
        assert_eq!(
            classify_swipe(TouchPoint::new(0.0, 0.0), TouchPoint::new(-50.0, 0.0), 50.0),
            None
        );
        assert_eq!(
            classify_swipe(TouchPoint::new(0.0, 0.0), TouchPoint::new(-51.0, 0.0), 50.0),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_diagonal_tie_is_ignored() {
        assert_eq!(
            classify_swipe(TouchPoint::new(0.0, 0.0), TouchPoint::new(80.0, 80.0), 50.0),
            None
        );
    }

    #[test]
    fn test_end_without_start_is_ignored() {
        let (nav, mut swipe) = adapter(3);
        assert_eq!(swipe.touch_end(TouchPoint::new(0.0, 0.0)), None);

        swipe.touch_start(TouchPoint::new(300.0, 0.0));
        swipe.touch_cancel();
        assert_eq!(swipe.touch_end(TouchPoint::new(0.0, 0.0)), None);
        assert_eq!(nav.current_slide(), 0);
    }

    #[test]
    fn test_start_resets_buffer() {
        let (_nav, mut swipe) = adapter(3);
        swipe.touch_start(TouchPoint::new(1.0, 2.0));
        swipe.touch_end(TouchPoint::new(3.0, 4.0));
        swipe.touch_start(TouchPoint::new(5.0, 6.0));

        assert_eq!(swipe.buffer().start, Some(TouchPoint::new(5.0, 6.0)));
        assert_eq!(swipe.buffer().end, None);
    }

    #[test]
    fn test_custom_threshold() {
        let (nav, swipe) = adapter(3);
        let mut swipe = swipe.with_threshold(120.0);
        swipe.touch_start(TouchPoint::new(300.0, 0.0));
        assert_eq!(swipe.touch_end(TouchPoint::new(200.0, 0.0)), None);
        assert_eq!(nav.current_slide(), 0);
    }
}
