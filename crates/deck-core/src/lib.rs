//! Core functionality for the slide deck presenter
//!
//! This crate provides the slide navigator state machine, the input adapters
//! that drive it and the state it exposes to renderers.

pub mod analytics;
pub mod announce;
pub mod deck;
pub mod error;
pub mod input;
pub mod navigation;
pub mod settings;
pub mod slides;
pub mod state;
pub mod validation;

// Re-export commonly used types
pub use analytics::SlideTimer;
pub use announce::LiveRegion;
pub use deck::Deck;
pub use error::DeckError;
pub use input::{
    Control, ControlState, KeyIntent, KeyOutcome, KeyboardAdapter, NavKey, PointerAdapter,
    PresentationHooks, SwipeAdapter, SwipeDirection, TouchPoint,
};
pub use navigation::{NavigationContext, NavigationSubscriber, SlideNavigator, SlidePosition};
pub use settings::DeckSettings;
pub use slides::{Block, Slide, SlideSequence};
pub use state::DeckState;
pub use validation::{validate_slides, ContentIssue, IssueKind};
