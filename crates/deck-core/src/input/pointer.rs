//! Pointer adapter for the previous/next controls

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::trace;

use crate::navigation::{NavigationContext, NavigationSubscriber, SlideNavigator};

/// The two navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Previous,
    Next,
}

/// Enabled state of the controls after the last render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl ControlState {
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Previous => self.previous_enabled,
            Control::Next => self.next_enabled,
        }
    }
}

impl From<&NavigationContext> for ControlState {
    fn from(context: &NavigationContext) -> Self {
        Self {
            previous_enabled: context.previous_enabled,
            next_enabled: context.next_enabled,
        }
    }
}

/// Pointer adapter
///
/// Subscribes to the navigator so the control state always matches the last
/// render pass. Disabled controls cannot be activated.
pub struct PointerAdapter {
    navigator: Arc<SlideNavigator>,
    controls: RwLock<ControlState>,
}

impl PointerAdapter {
    /// Create the adapter and register it with the navigator
    pub fn attach(navigator: Arc<SlideNavigator>) -> Arc<Self> {
        let controls = ControlState::from(&navigator.context());
        let adapter = Arc::new(Self {
            navigator: navigator.clone(),
            controls: RwLock::new(controls),
        });
        navigator.add_subscriber(adapter.clone());
        adapter
    }

    pub fn controls(&self) -> ControlState {
        *self.controls.read()
    }

    /// Activate a control; returns false if it is disabled or nothing moved
    pub fn activate(&self, control: Control) -> bool {
        if !self.controls().is_enabled(control) {
            trace!(?control, "disabled control activated");
            return false;
        }

        match control {
            Control::Previous => self.navigator.previous(),
            Control::Next => self.navigator.next(),
        }
    }

    /// Activate the progress dot for slide `index`
    pub fn activate_dot(&self, index: usize) -> bool {
        self.navigator.go_to(index)
    }
}

impl NavigationSubscriber for PointerAdapter {
    fn on_navigation_change(&self, context: &NavigationContext) {
        *self.controls.write() = ControlState::from(context);
    }
}
