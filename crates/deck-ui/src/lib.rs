//! User interface components for the slide deck presenter
//!
//! This crate provides the egui-based widgets that render the navigator's
//! state and the bridge that feeds egui input into the core adapters.

pub mod input;
pub mod navigation_panel;
pub mod notes_ui;
pub mod shell;
pub mod slide_view;
pub mod theme;

/// Re-export commonly used types
pub use input::InputBridge;
pub use navigation_panel::{NavigationPanel, NavigationPanelConfig};
pub use notes_ui::NotesPanel;
pub use slide_view::{SlideView, SlideViewConfig};
pub use theme::{Theme, apply_theme};

// Re-export commonly used functions
pub use shell::{status_bar, shortcuts_window};

/// UI state that persists across frames
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Presenter notes panel is open
    pub show_notes: bool,

    /// Shortcut help window is open
    pub show_help: bool,

    /// Window is fullscreen
    pub fullscreen: bool,
}

// Common icon definitions
pub mod icons {
    pub const PREVIOUS: &str = "◀";
    pub const NEXT: &str = "▶";
}
