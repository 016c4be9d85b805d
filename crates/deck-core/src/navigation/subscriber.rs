//! Navigation subscriber trait

use super::NavigationContext;

/// Trait for components that reflect the navigator's state
///
/// Called once per render pass, after the cursor has been updated.
pub trait NavigationSubscriber: Send + Sync {
    fn on_navigation_change(&self, context: &NavigationContext);
}
