//! Main application entry point

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use eframe::egui::{self, Context, CursorIcon, Event, Key, Vec2, ViewportCommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use deck_core::{Deck, DeckState, PresentationHooks};
use deck_ui::{
    apply_theme, shortcuts_window, status_bar, InputBridge, NavigationPanel, NavigationPanelConfig,
    NotesPanel, SlideView, SlideViewConfig, Theme, UiState,
};

mod demo;

/// Seconds without pointer movement before the cursor is hidden in fullscreen
const CURSOR_IDLE_SECS: f64 = 3.0;

/// Time left until the cursor should be hidden; `None` once it is
///
/// Outside fullscreen the cursor is never hidden.
fn cursor_hide_delay(fullscreen: bool, idle_secs: f64) -> Option<Duration> {
    if !fullscreen {
        return Some(Duration::MAX);
    }
    let remaining = CURSOR_IDLE_SECS - idle_secs;
    (remaining > 0.0).then(|| Duration::from_secs_f64(remaining))
}

/// Detects changes in the window size between frames
#[derive(Debug, Default)]
struct ResizeWatch {
    last: Option<Vec2>,
}

impl ResizeWatch {
    /// Record `size`; true if it differs from the previous frame's
    fn update(&mut self, size: Vec2) -> bool {
        let changed = self.last.is_some_and(|last| last != size);
        self.last = Some(size);
        changed
    }
}

/// Receives Escape from the keyboard adapter
///
/// The adapter runs while egui input is being read, so the request is only
/// recorded here and applied by the app once input handling is done.
#[derive(Debug, Default)]
struct PresentationMode {
    exit_requested: AtomicBool,
}

impl PresentationMode {
    fn take_exit_request(&self) -> bool {
        self.exit_requested.swap(false, Ordering::AcqRel)
    }
}

impl PresentationHooks for PresentationMode {
    fn exit_presentation(&self) {
        self.exit_requested.store(true, Ordering::Release);
    }
}

/// Shell-level toggles read from one frame of input
#[derive(Debug, Default)]
struct ShellToggles {
    notes: bool,
    help: bool,
    fullscreen: bool,
}

impl ShellToggles {
    fn read(ctx: &Context) -> Self {
        ctx.input(|i| {
            let mut toggles = Self::default();
            for event in &i.events {
                match event {
                    Event::Key { key, pressed: true, modifiers, .. } if modifiers.is_none() => {
                        match key {
                            Key::N => toggles.notes = true,
                            Key::F => toggles.fullscreen = true,
                            Key::F1 | Key::H => toggles.help = true,
                            _ => {}
                        }
                    }
                    Event::Text(text) if text == "?" => toggles.help = true,
                    _ => {}
                }
            }
            toggles
        })
    }
}

/// Main application state
struct DeckApp {
    /// Navigator, adapters and content diagnostics
    state: DeckState,

    /// Panel visibility
    ui_state: UiState,

    /// Fullscreen exit requests from the keyboard adapter
    presentation: Arc<PresentationMode>,

    input: InputBridge,
    slide_view: SlideView,
    navigation_panel: NavigationPanel,
    notes_panel: NotesPanel,

    resize: ResizeWatch,
}

impl DeckApp {
    fn new(cc: &eframe::CreationContext<'_>, state: DeckState, presentation: Arc<PresentationMode>) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::new(state.settings.dark_mode));

        let navigation_panel = NavigationPanel::new(state.navigator.clone(), state.pointer.clone())
            .with_config(NavigationPanelConfig {
                show_progress_dots: state.settings.show_progress_dots,
                ..Default::default()
            });

        let ui_state = UiState {
            show_notes: state.settings.show_notes,
            ..Default::default()
        };

        Self {
            input: InputBridge::new(&state.settings),
            slide_view: SlideView::new(SlideViewConfig::default()),
            navigation_panel,
            notes_panel: NotesPanel::new(),
            ui_state,
            presentation,
            state,
            resize: ResizeWatch::default(),
        }
    }

    /// Re-render the current slide when the window size changes
    fn track_resize(&mut self, ctx: &Context) {
        let size = ctx.screen_rect().size();
        if self.resize.update(size) {
            debug!(width = size.x, height = size.y, "window resized");
            self.state.navigator.refresh();
        }
    }

    /// Hide the mouse cursor while presenting and the pointer is idle
    fn update_cursor(&self, ctx: &Context) {
        let idle = ctx.input(|i| i.pointer.time_since_last_movement());
        match cursor_hide_delay(self.ui_state.fullscreen, idle) {
            None => ctx.set_cursor_icon(CursorIcon::None),
            Some(delay) if self.ui_state.fullscreen => ctx.request_repaint_after(delay),
            Some(_) => {}
        }
    }

    fn set_fullscreen(&mut self, ctx: &Context, fullscreen: bool) {
        if self.ui_state.fullscreen != fullscreen {
            self.ui_state.fullscreen = fullscreen;
            ctx.send_viewport_cmd(ViewportCommand::Fullscreen(fullscreen));
            info!(fullscreen, "presentation mode changed");
        }
    }

    fn handle_input(&mut self, ctx: &Context) {
        self.input.process(ctx, &self.state.keyboard, &mut self.state.swipe);

        if self.presentation.take_exit_request() {
            self.set_fullscreen(ctx, false);
        }

        let toggles = ShellToggles::read(ctx);
        if toggles.notes {
            self.ui_state.show_notes = !self.ui_state.show_notes;
        }
        if toggles.help {
            self.ui_state.show_help = !self.ui_state.show_help;
        }
        if toggles.fullscreen {
            let fullscreen = !self.ui_state.fullscreen;
            self.set_fullscreen(ctx, fullscreen);
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.track_resize(ctx);
        self.handle_input(ctx);

        // Bottom panels stack upwards in the order they are added
        status_bar(ctx, &self.state.navigator, self.state.issues.len());

        egui::TopBottomPanel::bottom("navigation_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                self.navigation_panel.ui(ui);
                ui.add_space(8.0);
            });

        if self.ui_state.show_notes {
            egui::TopBottomPanel::bottom("notes_panel")
                .resizable(true)
                .show(ctx, |ui| {
                    self.notes_panel.ui(ui, &self.state.navigator);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.slide_view.ui(ui, &self.state.navigator);
        });

        shortcuts_window(ctx, &mut self.ui_state.show_help);

        self.update_cursor(ctx);
    }
}

fn load_deck(path: Option<PathBuf>) -> Result<Deck> {
    match path {
        Some(path) => Deck::load(&path)
            .with_context(|| format!("Failed to load deck from {}", path.display())),
        None => {
            info!("No deck file given, presenting the demo deck");
            Ok(demo::demo_deck())
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    #[cfg(all(windows, not(debug_assertions)))]
    hide_console_window();

    let deck = load_deck(std::env::args_os().nth(1).map(PathBuf::from))?;
    let dark_mode = deck.settings.dark_mode;

    let presentation = Arc::new(PresentationMode::default());
    let hooks: Arc<dyn PresentationHooks> = presentation.clone();
    let state = DeckState::new(deck, Some(hooks)).context("Failed to start presentation")?;
    let title = state.title.clone();

    info!(title = %title, "Starting presentation");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        default_theme: if dark_mode { eframe::Theme::Dark } else { eframe::Theme::Light },
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(DeckApp::new(cc, state, presentation))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

// Windows-specific: Hide console window in release builds
#[cfg(all(windows, not(debug_assertions)))]
fn hide_console_window() {
    use winapi::um::wincon::GetConsoleWindow;
    use winapi::um::winuser::{ShowWindow, SW_HIDE};

    unsafe {
        let window = GetConsoleWindow();
        if !window.is_null() {
            ShowWindow(window, SW_HIDE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(ctx: &Context, events: Vec<Event>, run: impl FnOnce(&Context)) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, run);
    }

    fn key_press(key: Key) -> Event {
        Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_exit_request_is_taken_once() {
        let mode = PresentationMode::default();
        assert!(!mode.take_exit_request());
        mode.exit_presentation();
        assert!(mode.take_exit_request());
        assert!(!mode.take_exit_request());
    }

    #[test]
    fn test_escape_reaches_presentation_hooks() {
        let presentation = Arc::new(PresentationMode::default());
        let hooks: Arc<dyn PresentationHooks> = presentation.clone();
        let mut state = DeckState::new(demo::demo_deck(), Some(hooks)).unwrap();
        let bridge = InputBridge::new(&state.settings);
        let ctx = Context::default();

        run_frame(&ctx, vec![key_press(Key::Escape)], |ctx| {
            bridge.process(ctx, &state.keyboard, &mut state.swipe)
        });
        assert!(presentation.take_exit_request());
        assert_eq!(state.navigator.current_slide(), 0);
    }

    #[test]
    fn test_shell_toggles() {
        let ctx = Context::default();
        let mut toggles = ShellToggles::default();
        run_frame(
            &ctx,
            vec![key_press(Key::N), Event::Text("?".to_string())],
            |ctx| toggles = ShellToggles::read(ctx),
        );
        assert!(toggles.notes);
        assert!(toggles.help);
        assert!(!toggles.fullscreen);
    }

    #[test]
    fn test_missing_deck_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_deck(Some(dir.path().join("absent.json"))).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_cursor_hides_after_idle_in_fullscreen() {
        assert_eq!(cursor_hide_delay(false, 60.0), Some(Duration::MAX));
        assert_eq!(cursor_hide_delay(true, 1.0), Some(Duration::from_secs(2)));
        assert_eq!(cursor_hide_delay(true, 3.0), None);
        assert_eq!(cursor_hide_delay(true, 45.5), None);
    }

    #[test]
    fn test_resize_watch_ignores_first_frame() {
        let mut watch = ResizeWatch::default();
        assert!(!watch.update(Vec2::new(1280.0, 800.0)));
        assert!(!watch.update(Vec2::new(1280.0, 800.0)));
        assert!(watch.update(Vec2::new(1024.0, 768.0)));
        assert!(!watch.update(Vec2::new(1024.0, 768.0)));
    }

    #[test]
    fn test_resize_refresh_keeps_cursor() {
        let mut state = DeckState::new(demo::demo_deck(), None).unwrap();
        state.navigator.go_to(4);
        let mut watch = ResizeWatch::default();
        watch.update(Vec2::new(800.0, 600.0));

        if watch.update(Vec2::new(640.0, 480.0)) {
            state.navigator.refresh();
        }
        assert_eq!(state.navigator.current_slide(), 4);
        assert_eq!(state.timer.visits(4), 1);
    }

    #[test]
    fn test_demo_deck_is_default() {
        let deck = load_deck(None).unwrap();
        assert_eq!(deck.slides.len(), 8);
    }
}
