//! Session state: the navigator and everything wired to it

use std::sync::Arc;
use tracing::{info, warn};

use crate::analytics::SlideTimer;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::input::{KeyboardAdapter, PointerAdapter, PresentationHooks, SwipeAdapter};
use crate::navigation::SlideNavigator;
use crate::settings::DeckSettings;
use crate::validation::{validate_slides, ContentIssue};

/// The presentation session
///
/// Built once at startup. The navigator is shared with the adapters by `Arc`;
/// there is no global instance.
pub struct DeckState {
    /// Window / header title
    pub title: String,

    /// Settings from the deck file
    pub settings: DeckSettings,

    /// The slide navigator
    pub navigator: Arc<SlideNavigator>,

    /// Keyboard adapter
    pub keyboard: KeyboardAdapter,

    /// Touch adapter
    pub swipe: SwipeAdapter,

    /// Button and progress dot adapter
    pub pointer: Arc<PointerAdapter>,

    /// Time-on-slide tracking
    pub timer: Arc<SlideTimer>,

    /// Content problems found at load time
    pub issues: Vec<ContentIssue>,
}

impl DeckState {
    /// Build a session for `deck` and run the initial render pass
    pub fn new(deck: Deck, hooks: Option<Arc<dyn PresentationHooks>>) -> Result<Self, DeckError> {
        let Deck { title, settings, slides } = deck;

        let issues = validate_slides(slides.as_slice(), &settings);
        for issue in &issues {
            warn!(%issue, "content validation issue");
        }

        let navigator = Arc::new(SlideNavigator::new(slides)?);

        let mut keyboard = KeyboardAdapter::new(navigator.clone());
        if let Some(hooks) = hooks {
            keyboard = keyboard.with_hooks(hooks);
        }
        let swipe = SwipeAdapter::new(navigator.clone()).with_threshold(settings.swipe_threshold);
        let pointer = PointerAdapter::attach(navigator.clone());
        let timer = SlideTimer::attach(&navigator);

        navigator.refresh();

        let title = title.unwrap_or_else(|| "Presentation".to_string());
        info!(title = %title, total_slides = navigator.total_slides(), "presentation ready");

        Ok(Self {
            title,
            settings,
            navigator,
            keyboard,
            swipe,
            pointer,
            timer,
            issues,
        })
    }
}
