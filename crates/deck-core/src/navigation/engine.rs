//! Slide navigator implementation

use super::{NavigationContext, NavigationSubscriber, SlidePosition};
use crate::announce::LiveRegion;
use crate::error::DeckError;
use crate::slides::SlideSequence;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// Navigation state stored internally
#[derive(Debug, Clone)]
struct NavigatorState {
    position: SlidePosition,
    context: NavigationContext,
    /// Bumped by every render pass
    generation: u64,
}

/// The slide navigator
///
/// Owns the cursor into a fixed slide sequence. Every accepted request runs a
/// render pass: the [`NavigationContext`] is recomputed, the live region is
/// updated and all subscribers are notified. Requests that would leave the
/// sequence are ignored.
pub struct SlideNavigator {
    slides: Arc<SlideSequence>,
    state: RwLock<NavigatorState>,
    subscribers: RwLock<Vec<Weak<dyn NavigationSubscriber>>>,
    live_region: OnceCell<LiveRegion>,
}

impl SlideNavigator {
    /// Create a navigator positioned on the first slide
    ///
    /// An empty sequence has no valid cursor and is rejected.
    pub fn new(slides: impl Into<Arc<SlideSequence>>) -> Result<Self, DeckError> {
        let slides = slides.into();
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        let position = SlidePosition::default();
        let state = NavigatorState {
            position,
            context: NavigationContext::render(position, &slides),
            generation: 0,
        };

        Ok(Self {
            slides,
            state: RwLock::new(state),
            subscribers: RwLock::new(Vec::new()),
            live_region: OnceCell::new(),
        })
    }

    /// Advance by one slide; returns false on the last slide
    pub fn next(&self) -> bool {
        self.step("next", |current, total| {
            (current + 1 < total).then_some(current + 1)
        })
    }

    /// Go back by one slide; returns false on the first slide
    pub fn previous(&self) -> bool {
        self.step("previous", |current, _| current.checked_sub(1))
    }

    /// Jump to `index`; out-of-range indices are ignored and return false
    pub fn go_to(&self, index: usize) -> bool {
        self.step("go_to", |_, total| (index < total).then_some(index))
    }

    pub fn go_to_first(&self) -> bool {
        self.go_to(0)
    }

    pub fn go_to_last(&self) -> bool {
        self.go_to(self.slides.len() - 1)
    }

    /// Run a render pass without moving the cursor
    pub fn refresh(&self) {
        self.render();
    }

    pub fn current_slide(&self) -> usize {
        self.state.read().position.index()
    }

    pub fn total_slides(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &SlideSequence {
        &self.slides
    }

    /// Output of the most recent render pass
    pub fn context(&self) -> NavigationContext {
        self.state.read().context.clone()
    }

    /// The announcement region; `None` until the first render pass
    pub fn live_region(&self) -> Option<&LiveRegion> {
        self.live_region.get()
    }

    /// Add a subscriber
    ///
    /// Only a weak reference is kept; dropping the subscriber unregisters it.
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    fn step(
        &self,
        operation: &'static str,
        target: impl FnOnce(usize, usize) -> Option<usize>,
    ) -> bool {
        let mut state = self.state.write();
        let from = state.position.index();

        let Some(to) = target(from, self.slides.len()) else {
            drop(state);
            trace!(operation, current = from, "navigation request ignored");
            return false;
        };

        state.position = SlidePosition(to);
        drop(state);

        debug!(operation, from, to, "slide changed");
        self.render();
        true
    }

    fn render(&self) {
        let (context, generation) = {
            let mut state = self.state.write();
            state.context = NavigationContext::render(state.position, &self.slides);
            state.generation += 1;
            (state.context.clone(), state.generation)
        };

        self.live_region
            .get_or_init(LiveRegion::polite)
            .announce(&context.announcement);

        self.notify_subscribers(&context, generation);
    }

    /// Notify all subscribers of navigation change
    ///
    /// Delivery stops early if a subscriber triggers a newer render pass, which
    /// has already notified everyone with the newer context.
    fn notify_subscribers(&self, context: &NavigationContext, generation: u64) {
        let live: Vec<Arc<dyn NavigationSubscriber>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        // Lock is released so subscribers may call back into the navigator
        for subscriber in live {
            if self.state.read().generation != generation {
                trace!(generation, "notification superseded by a newer render");
                break;
            }
            subscriber.on_navigation_change(context);
        }
    }
}

impl std::fmt::Debug for SlideNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideNavigator")
            .field("current_slide", &self.current_slide())
            .field("total_slides", &self.total_slides())
            .finish()
    }
}
