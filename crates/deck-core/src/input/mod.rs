//! Input adapters translating raw events into navigator calls
//!
//! - [`keyboard`]: key identifiers to next/previous/first/last
//! - [`swipe`]: touch gesture start/end pairs to next/previous
//! - [`pointer`]: previous/next controls and progress dots
//!
//! Adapters hold an `Arc<SlideNavigator>` handed to them at construction and
//! never touch the cursor directly.

pub mod keyboard;
pub mod pointer;
pub mod swipe;

pub use keyboard::{KeyIntent, KeyOutcome, KeyboardAdapter, NavKey, SHORTCUTS};
pub use pointer::{Control, ControlState, PointerAdapter};
pub use swipe::{classify_swipe, SwipeAdapter, SwipeDirection, SwipeGestureBuffer, TouchPoint};

/// Presentation-mode actions the core can trigger but does not implement
pub trait PresentationHooks: Send + Sync {
    /// Leave fullscreen / presentation mode
    fn exit_presentation(&self);
}
