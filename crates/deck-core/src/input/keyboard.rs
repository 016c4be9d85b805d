//! Keyboard adapter

use std::sync::Arc;
use tracing::trace;

use super::PresentationHooks;
use crate::navigation::SlideNavigator;

/// Keys the adapter knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowRight,
    ArrowLeft,
    Space,
    PageDown,
    PageUp,
    Home,
    End,
    Escape,
    Other,
}

impl NavKey {
    /// Parse a DOM-style key name ("ArrowRight", " ", "PageDown", ...)
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowRight" => NavKey::ArrowRight,
            "ArrowLeft" => NavKey::ArrowLeft,
            " " | "Space" | "Spacebar" => NavKey::Space,
            "PageDown" => NavKey::PageDown,
            "PageUp" => NavKey::PageUp,
            "Home" => NavKey::Home,
            "End" => NavKey::End,
            "Escape" | "Esc" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }

    /// Intent carried by the key, if any
    pub fn intent(self) -> Option<KeyIntent> {
        match self {
            NavKey::ArrowRight | NavKey::Space | NavKey::PageDown => Some(KeyIntent::Next),
            NavKey::ArrowLeft | NavKey::PageUp => Some(KeyIntent::Previous),
            NavKey::Home => Some(KeyIntent::First),
            NavKey::End => Some(KeyIntent::Last),
            NavKey::Escape => Some(KeyIntent::ExitPresentation),
            NavKey::Other => None,
        }
    }
}

/// What a key asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Next,
    Previous,
    First,
    Last,
    ExitPresentation,
}

impl KeyIntent {
    /// Navigation intents take the key away from the platform (no page scroll)
    pub fn suppresses_default(self) -> bool {
        !matches!(self, KeyIntent::ExitPresentation)
    }
}

/// Result of handling one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub intent: Option<KeyIntent>,
    /// The caller must stop the key's default behavior
    pub suppress_default: bool,
}

/// Key bindings, for help screens
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("Arrow Keys", "Navigate slides"),
    ("Space / Page Down", "Next slide"),
    ("Page Up", "Previous slide"),
    ("Home", "First slide"),
    ("End", "Last slide"),
    ("Escape", "Exit fullscreen"),
];

/// Keyboard adapter
pub struct KeyboardAdapter {
    navigator: Arc<SlideNavigator>,
    hooks: Option<Arc<dyn PresentationHooks>>,
}

impl KeyboardAdapter {
    pub fn new(navigator: Arc<SlideNavigator>) -> Self {
        Self {
            navigator,
            hooks: None,
        }
    }

    /// Forward Escape to the given presentation hooks
    pub fn with_hooks(mut self, hooks: Arc<dyn PresentationHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Handle a key press
    ///
    /// `suppress_default` is decided before dispatching, so it holds even when
    /// the navigator ignores the request at a boundary.
    pub fn handle(&self, key: NavKey) -> KeyOutcome {
        let Some(intent) = key.intent() else {
            trace!(?key, "key ignored");
            return KeyOutcome::default();
        };

        let outcome = KeyOutcome {
            intent: Some(intent),
            suppress_default: intent.suppresses_default(),
        };

        match intent {
            KeyIntent::Next => {
                self.navigator.next();
            }
            KeyIntent::Previous => {
                self.navigator.previous();
            }
            KeyIntent::First => {
                self.navigator.go_to_first();
            }
            KeyIntent::Last => {
                self.navigator.go_to_last();
            }
            KeyIntent::ExitPresentation => {
                if let Some(hooks) = &self.hooks {
                    hooks.exit_presentation();
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::{Slide, SlideSequence};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn adapter(total: usize) -> (Arc<SlideNavigator>, KeyboardAdapter) {
        let slides: SlideSequence = (0..total).map(|_| Slide::untitled()).collect();
        let navigator = Arc::new(SlideNavigator::new(slides).unwrap());
        (navigator.clone(), KeyboardAdapter::new(navigator))
    }

    #[derive(Default)]
    struct CountingHooks {
        exits: AtomicUsize,
    }

    impl PresentationHooks for CountingHooks {
        fn exit_presentation(&self) {
            self.exits.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_next_keys_advance() {
        let (nav, keys) = adapter(8);
        for key in [NavKey::ArrowRight, NavKey::Space, NavKey::PageDown] {
            let outcome = keys.handle(key);
            assert_eq!(outcome.intent, Some(KeyIntent::Next));
            assert!(outcome.suppress_default);
        }
        assert_eq!(nav.current_slide(), 3);
    }

    #[test]
    fn test_previous_keys_go_back() {
        let (nav, keys) = adapter(8);
        nav.go_to(5);
        keys.handle(NavKey::ArrowLeft);
        keys.handle(NavKey::PageUp);
        assert_eq!(nav.current_slide(), 3);
    }

    #[test]
    fn test_home_and_end_jump() {
        let (nav, keys) = adapter(8);
        keys.handle(NavKey::End);
        assert_eq!(nav.current_slide(), 7);
        keys.handle(NavKey::Home);
        assert_eq!(nav.current_slide(), 0);
    }

    #[test]
    fn test_boundary_key_still_suppresses_default() {
        let (nav, keys) = adapter(2);
        nav.go_to_last();

        let outcome = keys.handle(NavKey::PageDown);
        assert!(outcome.suppress_default);
        assert_eq!(nav.current_slide(), 1);
    }

    #[test]
    fn test_unrecognized_key_is_ignored() {
        let (nav, keys) = adapter(4);
        let outcome = keys.handle(NavKey::from_name("q"));

        assert_eq!(outcome, KeyOutcome::default());
        assert_eq!(nav.current_slide(), 0);
    }

    #[test]
    fn test_escape_goes_to_hooks_without_suppressing() {
        let (nav, keys) = adapter(4);
        let hooks = Arc::new(CountingHooks::default());
        let keys = keys.with_hooks(hooks.clone());

        let outcome = keys.handle(NavKey::Escape);
        assert_eq!(outcome.intent, Some(KeyIntent::ExitPresentation));
        assert!(!outcome.suppress_default);
        assert_eq!(hooks.exits.load(Ordering::SeqCst), 1);
        assert_eq!(nav.current_slide(), 0);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(NavKey::from_name(" "), NavKey::Space);
        assert_eq!(NavKey::from_name("End"), NavKey::End);
        assert_eq!(NavKey::from_name("Enter"), NavKey::Other);
    }
}
