//! Time-on-slide tracking

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use crate::navigation::{NavigationContext, NavigationSubscriber, SlideNavigator};

#[derive(Debug)]
struct TimerState {
    current: usize,
    entered_at: Instant,
    totals: Vec<Duration>,
    visits: Vec<usize>,
}

/// Records how long each slide stays on screen
///
/// When the active slide changes, the time since it was entered is added to
/// its total and logged on the `deck::analytics` target.
#[derive(Debug)]
pub struct SlideTimer {
    state: Mutex<TimerState>,
}

impl SlideTimer {
    /// Create a timer starting on the navigator's current slide and subscribe it
    pub fn attach(navigator: &Arc<SlideNavigator>) -> Arc<Self> {
        let total = navigator.total_slides();
        let current = navigator.current_slide();

        let mut visits = vec![0; total];
        visits[current] = 1;

        let timer = Arc::new(Self {
            state: Mutex::new(TimerState {
                current,
                entered_at: Instant::now(),
                totals: vec![Duration::ZERO; total],
                visits,
            }),
        });
        navigator.add_subscriber(timer.clone());
        timer
    }

    /// Number of times the slide was entered
    pub fn visits(&self, index: usize) -> usize {
        self.state.lock().visits.get(index).copied().unwrap_or(0)
    }

    /// Accumulated time on the slide, excluding the visit in progress
    pub fn time_on(&self, index: usize) -> Duration {
        self.state
            .lock()
            .totals
            .get(index)
            .copied()
            .unwrap_or(Duration::ZERO)
    }
}

impl NavigationSubscriber for SlideTimer {
    fn on_navigation_change(&self, context: &NavigationContext) {
        let next = context.position.index();
        let mut state = self.state.lock();
        if next == state.current || next >= state.visits.len() {
            return;
        }

        let now = Instant::now();
        let left = state.current;
        let elapsed = now.duration_since(state.entered_at);
        state.totals[left] += elapsed;

        let shown = Duration::from_millis(elapsed.as_millis() as u64);
        info!(
            target: "deck::analytics",
            slide = left + 1,
            elapsed = %humantime::format_duration(shown),
            "slide viewed"
        );

        state.current = next;
        state.entered_at = now;
        state.visits[next] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::{Slide, SlideSequence};

    #[test]
    fn test_counts_visits_per_slide() {
        let slides: SlideSequence = (0..4).map(|_| Slide::untitled()).collect();
        let navigator = Arc::new(SlideNavigator::new(slides).unwrap());
        let timer = SlideTimer::attach(&navigator);

        navigator.next();
        navigator.next();
        navigator.previous();
        navigator.refresh();

        assert_eq!(timer.visits(0), 1);
        assert_eq!(timer.visits(1), 2);
        assert_eq!(timer.visits(2), 1);
        assert_eq!(timer.visits(3), 0);
    }

    #[test]
    fn test_time_accumulates_on_departure() {
        let slides: SlideSequence = (0..2).map(|_| Slide::untitled()).collect();
        let navigator = Arc::new(SlideNavigator::new(slides).unwrap());
        let timer = SlideTimer::attach(&navigator);

        std::thread::sleep(Duration::from_millis(5));
        navigator.next();

        assert!(timer.time_on(0) >= Duration::from_millis(5));
        assert_eq!(timer.time_on(1), Duration::ZERO);
    }
}
